use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Shared handle to a control owned by the surrounding UI layer.
///
/// Clones point at the same value. Every write marks the handle dirty so the
/// UI knows to redraw; the UI clears the flag once it has.
///
/// A poisoned lock is recovered rather than propagated: the value behind it is
/// plain data and stays usable after a panicking writer.
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Wraps a value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read(T::clone)
    }

    /// Runs `f` against the current value under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutates the value under a single write lock.
    ///
    /// Readers see either the value before `f` ran or after it returned,
    /// never anything in between.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let out = f(&mut guard);
        self.dirty.store(true, Ordering::SeqCst);
        out
    }

    /// Whether the value changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let a = State::new(vec![1]);
        let b = a.clone();
        b.update(|v| v.push(2));
        assert_eq!(a.get(), vec![1, 2]);
    }

    #[test]
    fn test_dirty_flag() {
        let s = State::new(0);
        assert!(!s.is_dirty());
        s.set(5);
        assert!(s.is_dirty());
        s.clear_dirty();
        assert!(!s.is_dirty());
        assert_eq!(s.read(|v| *v), 5);
    }
}
