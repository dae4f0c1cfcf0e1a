use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A shared value that notifies its watchers when changed.
///
/// Cloning a `Signal` clones the handle: all clones read and write the
/// same value and share the same watcher table.
#[derive(Clone)]
pub struct Signal<T> {
    value: Arc<RwLock<T>>,
    // Keyed by registration order so notification order is stable.
    watchers: Arc<RwLock<BTreeMap<usize, Subscriber<T>>>>,
    next_key: Arc<AtomicUsize>,
    // Guards that keep derived signals (map/zip) wired to their sources.
    _dependencies: Arc<Mutex<Vec<WatchGuard>>>,
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    /// Create a new signal with the given initial value.
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            watchers: Arc::new(RwLock::new(BTreeMap::new())),
            next_key: Arc::new(AtomicUsize::new(0)),
            _dependencies: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Read the value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.value.read().unwrap();
        f(&value)
    }

    /// Set a new value and notify watchers.
    pub fn set(&self, new_value: T) {
        *self.value.write().unwrap() = new_value;
        self.notify();
    }

    /// Update the value in place and notify watchers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut value = self.value.write().unwrap();
            f(&mut value);
        } // Release the write lock before notifying
        self.notify();
    }

    /// Watch this signal for changes.
    ///
    /// The callback runs immediately with the current value and again
    /// after every [`set`](Signal::set) or [`update`](Signal::update).
    /// Dropping the returned guard unregisters the callback.
    pub fn watch<F>(&self, callback: F) -> WatchGuard
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        callback(&self.value.read().unwrap());

        let key = self.next_key.fetch_add(1, Ordering::SeqCst);
        self.watchers
            .write()
            .unwrap()
            .insert(key, Box::new(callback));

        WatchGuard::new(Arc::downgrade(&self.watchers), key)
    }

    /// Create a derived signal by applying a function to this signal's value.
    ///
    /// ```
    /// use curbside::Signal;
    ///
    /// let count = Signal::new(1);
    /// let doubled = count.map(|n| n * 2);
    ///
    /// count.set(5);
    /// assert_eq!(doubled.get(), 10);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Signal<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let derived = Signal::new(self.with(&f));
        let derived_clone = derived.clone();

        // Watch the source and update the derived signal
        let guard = self.watch(move |value| {
            derived_clone.set(f(value));
        });

        derived._dependencies.lock().unwrap().push(guard);
        derived
    }

    /// Combine two signals into one holding both values.
    ///
    /// The combined signal updates whenever either side changes.
    pub fn zip<U>(self, other: Signal<U>) -> Signal<(T, U)>
    where
        U: Clone + Send + Sync + 'static,
    {
        let combined = Signal::new((self.get(), other.get()));

        let combined_clone = combined.clone();
        let other_clone = other.clone();
        let guard_left = self.watch(move |value| {
            combined_clone.set((value.clone(), other_clone.get()));
        });

        let combined_clone = combined.clone();
        let self_clone = self.clone();
        let guard_right = other.watch(move |value| {
            combined_clone.set((self_clone.get(), value.clone()));
        });

        let mut dependencies = combined._dependencies.lock().unwrap();
        dependencies.push(guard_left);
        dependencies.push(guard_right);
        drop(dependencies);

        combined
    }

    /// Call every registered watcher with the current value.
    fn notify(&self) {
        let value = self.value.read().unwrap();
        let watchers = self.watchers.read().unwrap();
        for watcher in watchers.values() {
            watcher(&value);
        }
    }
}

/// RAII guard for signal watchers.
///
/// Dropping the guard unregisters the watcher it came from.
pub struct WatchGuard {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl WatchGuard {
    fn new<T: Send + Sync + 'static>(
        watchers: Weak<RwLock<BTreeMap<usize, Subscriber<T>>>>,
        key: usize,
    ) -> Self {
        Self {
            unsubscribe: Some(Box::new(move || {
                if let Some(watchers) = watchers.upgrade() {
                    watchers.write().unwrap().remove(&key);
                }
            })),
        }
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
