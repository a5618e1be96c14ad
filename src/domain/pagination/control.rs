//! State ownership for the page number and page size
//!
//! Each of the two values lives in a [`PageCell`]. The engine reads and
//! requests changes through the trait and never cares who owns the value.

use std::fmt;

/// A single piece of pagination state, owned either by the engine or by a caller.
pub trait PageCell {
    /// Current value as the owner sees it.
    fn read(&self) -> usize;

    /// Ask for a new value. Owned cells apply it immediately; delegated
    /// cells forward it to their owner.
    fn request(&mut self, value: usize);

    /// `true` when the value belongs to someone other than the engine.
    fn is_delegated(&self) -> bool;
}

/// Callback invoked by a delegated cell.
pub type OnChange = Box<dyn FnMut(usize) + Send>;

/// Standard [`PageCell`]: local state, or a controlled value plus a change callback.
pub enum Control {
    Owned(usize),
    Delegated { value: usize, on_change: OnChange },
}

impl Control {
    pub fn owned(value: usize) -> Self {
        Self::Owned(value)
    }

    pub fn delegated(value: usize, on_change: impl FnMut(usize) + Send + 'static) -> Self {
        Self::Delegated {
            value,
            on_change: Box::new(on_change),
        }
    }

    /// Push the owner's latest value into a delegated cell.
    ///
    /// Has no effect on owned cells; their value only changes through [`PageCell::request`].
    pub fn sync(&mut self, new_value: usize) {
        if let Self::Delegated { value, .. } = self {
            *value = new_value;
        }
    }
}

impl PageCell for Control {
    fn read(&self) -> usize {
        match self {
            Self::Owned(value) => *value,
            Self::Delegated { value, .. } => *value,
        }
    }

    fn request(&mut self, new_value: usize) {
        match self {
            Self::Owned(value) => *value = new_value,
            Self::Delegated { on_change, .. } => on_change(new_value),
        }
    }

    fn is_delegated(&self) -> bool {
        matches!(self, Self::Delegated { .. })
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            Self::Delegated { value, .. } => f
                .debug_struct("Delegated")
                .field("value", value)
                .finish_non_exhaustive(),
        }
    }
}
