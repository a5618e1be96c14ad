//! Reactive state container
//!
//! Uses a tokio watch channel: one current value, any number of
//! subscribers that wake when it changes.

use std::sync::Arc;

use tokio::sync::watch;

/// Cheap-clone handle to a piece of shared UI state
#[derive(Debug)]
pub struct Store<S> {
    sender: Arc<watch::Sender<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S> Store<S> {
    pub fn new(initial: S) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Copy of the current state.
    pub fn get(&self) -> S
    where
        S: Clone,
    {
        self.sender.borrow().clone()
    }

    /// Derive a value from the current state.
    ///
    /// The state is read-locked while `selector` runs; do not update the
    /// same store from inside it.
    pub fn select<R>(&self, selector: impl FnOnce(&S) -> R) -> R {
        selector(&self.sender.borrow())
    }

    /// Mutate the state. `apply` returns whether it changed anything;
    /// subscribers are only woken when it did.
    pub fn update(&self, apply: impl FnOnce(&mut S) -> bool) -> bool {
        self.sender.send_if_modified(apply)
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn subscribers_see_updates() {
        let store = Store::new(0u32);
        let mut rx = store.subscribe();

        store.update(|n| {
            *n += 2;
            true
        });

        tokio::time::timeout(Duration::from_millis(100), rx.changed())
            .await
            .expect("Timeout")
            .expect("Store dropped");
        assert_eq!(*rx.borrow(), 2);
    }

    #[test]
    fn unchanged_updates_do_not_notify() {
        let store = Store::new(vec![1, 2]);
        let rx = store.subscribe();

        let changed = store.update(|v| {
            if v.contains(&2) {
                return false;
            }
            v.push(2);
            true
        });

        assert!(!changed);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new(String::from("a"));
        let other = store.clone();
        other.update(|s| {
            s.push('b');
            true
        });
        assert_eq!(store.get(), "ab");
        assert_eq!(store.select(|s| s.len()), 2);
    }

    #[test]
    fn subscriber_count_tracks_receivers() {
        let store = Store::new(());
        assert_eq!(store.subscriber_count(), 0);
        let rx = store.subscribe();
        assert_eq!(store.subscriber_count(), 1);
        drop(rx);
        assert_eq!(store.subscriber_count(), 0);
    }
}
