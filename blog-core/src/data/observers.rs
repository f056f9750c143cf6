use std::fmt;

type Subscriber<E> = Box<dyn FnMut(&E)>;

/// What a store mutation did, keyed by the affected record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent<Id> {
    Added(Id),
    Updated(Id),
    Deleted(Id),
}

/// Change notification for a single store.
///
/// Keeps a revision counter that only moves when a mutation was applied, so
/// a view can poll `revision()` instead of subscribing.
pub struct Observers<E> {
    revision: u64,
    subscribers: Vec<Subscriber<E>>,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self {
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribe to changes. Callbacks run in subscription order.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&E) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn notify(&mut self, event: E) {
        self.revision += 1;
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
