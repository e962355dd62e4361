//! Scoped reentrancy protection for UI callbacks

use std::cell::Cell;

/// Marks a handler as running.
///
/// [`ReentrancyFlag::try_enter`] hands out at most one live
/// [`ReentrancyGuard`]; the flag clears when that guard drops, on normal
/// return, early return or unwinding alike.
#[derive(Debug, Default)]
pub struct ReentrancyFlag {
    active: Cell<bool>,
}

impl ReentrancyFlag {
    /// Create a cleared flag
    pub const fn new() -> Self {
        Self {
            active: Cell::new(false),
        }
    }

    /// Enter the guarded section, or `None` if it is already entered
    #[must_use]
    pub fn try_enter(&self) -> Option<ReentrancyGuard<'_>> {
        if self.active.replace(true) {
            None
        } else {
            Some(ReentrancyGuard { flag: &self.active })
        }
    }

    /// Whether a guard is currently alive
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Releases its [`ReentrancyFlag`] on drop
#[derive(Debug)]
pub struct ReentrancyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
