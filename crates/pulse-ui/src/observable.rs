//! Observable state cells.
//!
//! A cell raises a dirty flag on every mutation. The app drains the flag
//! after ticking to decide whether a redraw is needed, the same way
//! activities hand refresh requests back to the app loop.

/// Value holder that flags itself dirty on mutation
#[derive(Debug, Clone)]
pub struct Observable<T> {
    value: T,
    dirty: bool,
}

impl<T> Observable<T> {
    /// Wrap an initial value (starts clean)
    pub fn new(value: T) -> Self {
        Self {
            value,
            dirty: false,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutate in place; always counts as a change.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.dirty = true;
    }

    /// Take the dirty flag, leaving the cell clean.
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }
}

impl<T: PartialEq> Observable<T> {
    /// Replace the value. Returns false (and stays clean) if it is unchanged.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.dirty = true;
        true
    }
}
