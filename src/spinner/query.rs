use std::cmp::Ordering;

use crate::models::Item;

/// Columns of the spinner item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemColumn {
    Id,
    Label,
    IsActive,
    Chance,
}

impl ItemColumn {
    pub const ALL: [ItemColumn; 4] = [
        ItemColumn::Id,
        ItemColumn::Label,
        ItemColumn::IsActive,
        ItemColumn::Chance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemColumn::Id => "id",
            ItemColumn::Label => "label",
            ItemColumn::IsActive => "is_active",
            ItemColumn::Chance => "chance",
        }
    }

    /// Ascending order on this column. Missing chances sort last.
    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            ItemColumn::Id => a.id.cmp(&b.id),
            ItemColumn::Label => a.label.cmp(&b.label),
            ItemColumn::IsActive => a.is_active.cmp(&b.is_active),
            ItemColumn::Chance => match (a.chance, b.chance) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// A filtered, ordered selection over the item table.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemQuery {
    pub columns: Vec<ItemColumn>,
    /// `Some(flag)` keeps only rows whose `is_active` equals `flag`.
    pub is_active: Option<bool>,
    pub order_by: ItemColumn,
    pub ascending: bool,
}

impl ItemQuery {
    /// Active items, every column, sorted by label ascending.
    pub fn active_by_label() -> Self {
        ItemQuery {
            columns: ItemColumn::ALL.to_vec(),
            is_active: Some(true),
            order_by: ItemColumn::Label,
            ascending: true,
        }
    }

    /// PostgREST query parameters for this selection.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let select = self
            .columns
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(",");
        let mut params = vec![("select".to_string(), select)];
        if let Some(flag) = self.is_active {
            params.push((
                ItemColumn::IsActive.name().to_string(),
                format!("eq.{}", flag),
            ));
        }
        let direction = if self.ascending { "asc" } else { "desc" };
        params.push((
            "order".to_string(),
            format!("{}.{}", self.order_by.name(), direction),
        ));
        params
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.is_active.map_or(true, |flag| item.is_active == flag)
    }

    /// Filters and stably sorts `rows` the way the remote table would.
    pub fn apply<'a>(&self, rows: impl IntoIterator<Item = &'a Item>) -> Vec<Item> {
        let mut items: Vec<Item> = rows
            .into_iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            let ord = self.order_by.compare(a, b);
            if self.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        items
    }
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self::active_by_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_postgrest_params() {
        let params = ItemQuery::active_by_label().to_params();
        assert_eq!(
            params,
            vec![
                ("select".to_string(), "id,label,is_active,chance".to_string()),
                ("is_active".to_string(), "eq.true".to_string()),
                ("order".to_string(), "label.asc".to_string()),
            ]
        );
    }

    #[test]
    fn apply_keeps_active_rows_sorted_by_label() {
        let rows = vec![
            Item::new("b", "B", true),
            Item::new("a", "A", true),
            Item::new("c", "C", false),
        ];
        let labels: Vec<String> = ItemQuery::active_by_label()
            .apply(&rows)
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn chance_order_puts_missing_values_last() {
        let rows = vec![
            Item::new("1", "one", true),
            Item::new("2", "two", true).with_chance(0.7),
            Item::new("3", "three", true).with_chance(0.2),
        ];
        let query = ItemQuery {
            order_by: ItemColumn::Chance,
            ..ItemQuery::active_by_label()
        };
        let ids: Vec<String> = query.apply(&rows).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn unfiltered_descending_query() {
        let rows = vec![Item::new("a", "A", false), Item::new("b", "B", true)];
        let query = ItemQuery {
            is_active: None,
            ascending: false,
            ..ItemQuery::active_by_label()
        };
        assert_eq!(query.apply(&rows)[0].label, "B");
        assert_eq!(query.to_params()[1], ("order".to_string(), "label.desc".to_string()));
    }
}
