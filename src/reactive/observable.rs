use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

impl<T> Inner<T> {
    fn callbacks(&self) -> Vec<Callback<T>> {
        self.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
    }
}

fn lock<T>(inner: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A shared, writable value holder. Clones share the same value and subscribers.
///
/// Subscribers see values in the order they were committed. Delivery is
/// serialized, so a callback must not write to the container it observes.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
    /// Held from commit until every callback has run. Always taken before `inner`.
    delivery: Arc<Mutex<()>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Observable {
            inner: self.inner.clone(),
            delivery: self.delivery.clone(),
        }
    }
}

impl<T> Observable<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    pub fn new(value: T) -> Self {
        Observable {
            inner: Arc::new(Mutex::new(Inner {
                value,
                subscribers: Vec::new(),
                next_id: 0,
            })),
            delivery: Arc::new(Mutex::new(())),
        }
    }

    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&lock(&self.inner).value)
    }

    /// Replaces the value. Subscribers are only notified when it actually changed.
    pub fn set(&self, value: T) {
        self.update(|_| value);
    }

    /// Derives the next value from the current one under the lock.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let _delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        let (snapshot, callbacks) = {
            let mut inner = lock(&self.inner);
            let next = f(&inner.value);
            if next == inner.value {
                return;
            }
            inner.value = next;
            (inner.value.clone(), inner.callbacks())
        };
        // The value lock is released so callbacks may read this (or any other) container.
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    /// Registers `callback` and invokes it right away with the current value.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let callback: Callback<T> = Arc::new(callback);
        let delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        let (id, current) = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, callback.clone()));
            (id, inner.value.clone())
        };
        callback(&current);
        drop(delivery);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).subscribers.retain(|(sid, _)| *sid != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).subscribers.len()
    }

    pub fn readable(&self) -> Readable<T> {
        Readable {
            source: self.clone(),
        }
    }
}

/// A read-only view of an [`Observable`].
pub struct Readable<T> {
    source: Observable<T>,
}

impl<T> Clone for Readable<T> {
    fn clone(&self) -> Self {
        Readable {
            source: self.source.clone(),
        }
    }
}

impl<T> Readable<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    pub fn get(&self) -> T {
        self.source.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.source.with(f)
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.source.subscribe(callback)
    }
}

/// Handle returned by `subscribe`. Dropping it keeps the subscription alive;
/// call [`Subscription::unsubscribe`] to stop receiving values.
#[must_use = "a subscription can only be cancelled through its handle"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
