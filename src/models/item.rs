use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A selectable spinner entry, as stored in the `spinner_items` table.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub is_active: bool,
    /// Optional weight of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<f64>,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>, is_active: bool) -> Self {
        Item {
            id: id.into(),
            label: label.into(),
            is_active,
            chance: None,
        }
    }

    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = Some(chance);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_row_without_chance() {
        let row = r#"{"id": "a1", "label": "Apple", "is_active": true}"#;
        let item: Item = serde_json::from_str(row).unwrap();
        assert_eq!(item, Item::new("a1", "Apple", true));
    }

    #[test]
    fn deserializes_row_with_null_chance() {
        let row = r#"{"id": "a1", "label": "Apple", "is_active": false, "chance": null}"#;
        let item: Item = serde_json::from_str(row).unwrap();
        assert_eq!(item.chance, None);
        assert!(!item.is_active);
    }

    #[test]
    fn serializes_chance_only_when_present() {
        let plain = serde_json::to_value(Item::new("a1", "Apple", true)).unwrap();
        assert!(plain.get("chance").is_none());

        let banana = Item::new("b2", "Banana", true).with_chance(0.25);
        let weighted = serde_json::to_value(banana).unwrap();
        assert_eq!(weighted["chance"], 0.25);
    }
}
