//! Where a state container keeps its state.
//!
//! Containers never own their state directly. They write through a
//! [`StateCell`], so the UI can hand them a reactive signal while tests hand
//! them a [`LocalCell`] and inspect it afterwards.

use std::sync::{Arc, Mutex};

pub trait StateCell<S>: Clone {
    /// A snapshot of the current value. Reading must not register the
    /// caller as an observer.
    fn get(&self) -> S;

    /// Mutate in place. Observers are notified once per call.
    fn update(&self, f: impl FnOnce(&mut S));

    fn set(&self, value: S) {
        self.update(move |current| *current = value);
    }
}

/// Plain shared cell with no change notification.
#[derive(Debug, Default)]
pub struct LocalCell<S>(Arc<Mutex<S>>);

impl<S> LocalCell<S> {
    pub fn new(value: S) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }
}

impl<S> Clone for LocalCell<S> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<S: Clone> StateCell<S> for LocalCell<S> {
    fn get(&self) -> S {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn update(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.0.lock().unwrap_or_else(|e| e.into_inner()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let a = LocalCell::new(1);
        let b = a.clone();
        b.update(|v| *v += 1);
        assert_eq!(a.get(), 2);
        a.set(10);
        assert_eq!(b.get(), 10);
    }
}
