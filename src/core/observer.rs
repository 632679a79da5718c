//! Observer registration lists.
//!
//! Map, player and engine each own an `Observers<dyn Trait>` list and
//! notify it synchronously on the call stack of the mutation. The owner
//! detaches the list while notifying so observers can receive `&owner`:
//!
//! ```ignore
//! let mut observers = self.observers.detach();
//! observers.for_each(|o| o.player_changed(self));
//! self.observers.reattach(observers);
//! ```

use serde::{Deserialize, Serialize};

/// Handle returned on registration, used to remove an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

/// An ordered list of boxed observers.
pub struct Observers<O: ?Sized> {
    next_id: u32,
    entries: Vec<(ObserverId, Box<O>)>,
}

impl<O: ?Sized> Default for Observers<O> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<O: ?Sized> std::fmt::Debug for Observers<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl<O: ?Sized> Observers<O> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Notification order is registration order.
    pub fn add(&mut self, observer: Box<O>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Unregister an observer, handing it back.
    pub fn remove(&mut self, id: ObserverId) -> Option<Box<O>> {
        let pos = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(pos).1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call `f` on every observer in registration order.
    pub fn for_each(&mut self, mut f: impl FnMut(&mut O)) {
        for (_, observer) in &mut self.entries {
            f(observer);
        }
    }

    /// Move the registered observers out, leaving an empty list that keeps
    /// handing out fresh ids.
    pub(crate) fn detach(&mut self) -> Self {
        Self {
            next_id: self.next_id,
            entries: std::mem::take(&mut self.entries),
        }
    }

    /// Put detached observers back in front of any registered meanwhile.
    pub(crate) fn reattach(&mut self, mut detached: Self) {
        detached.entries.append(&mut self.entries);
        self.entries = detached.entries;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Counter {
        fn bump(&mut self) -> u32;
    }

    struct Simple(u32);

    impl Counter for Simple {
        fn bump(&mut self) -> u32 {
            self.0 += 1;
            self.0
        }
    }

    #[test]
    fn test_add_remove() {
        let mut observers: Observers<dyn Counter> = Observers::new();
        let a = observers.add(Box::new(Simple(0)));
        let b = observers.add(Box::new(Simple(10)));
        assert_ne!(a, b);
        assert_eq!(observers.len(), 2);

        let mut removed = observers.remove(a).unwrap();
        assert_eq!(removed.bump(), 1);
        assert_eq!(observers.len(), 1);
        assert!(observers.remove(a).is_none());
    }

    #[test]
    fn test_for_each_in_order() {
        let mut observers: Observers<dyn Counter> = Observers::new();
        observers.add(Box::new(Simple(0)));
        observers.add(Box::new(Simple(100)));

        let mut seen = Vec::new();
        observers.for_each(|o| seen.push(o.bump()));
        assert_eq!(seen, vec![1, 101]);
    }

    #[test]
    fn test_detach_reattach_keeps_late_registrations() {
        let mut observers: Observers<dyn Counter> = Observers::new();
        let first = observers.add(Box::new(Simple(0)));

        let detached = observers.detach();
        assert!(observers.is_empty());
        let late = observers.add(Box::new(Simple(5)));
        assert_ne!(first, late);

        observers.reattach(detached);
        assert_eq!(observers.len(), 2);

        let mut seen = Vec::new();
        observers.for_each(|o| seen.push(o.bump()));
        assert_eq!(seen, vec![1, 6]);
    }
}
