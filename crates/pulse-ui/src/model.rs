//! Dashboard data model: bounded ratios and the append-only notification list.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Fraction in `[0.0, 1.0]`, rendered as a filled bar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Ratio(f32);

impl Ratio {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Clamp `value` into range; NaN maps to zero.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Scale `length` by the ratio, rounding to the nearest whole unit.
    pub fn of(self, length: u32) -> u32 {
        let scaled = self.0 * length as f32 + 0.5;
        (scaled as u32).min(length)
    }
}

/// Display strings in insertion order. Entries can only be appended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationList {
    entries: Vec<String>,
}

impl NotificationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification at the end (newest last).
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|s| s.as_str())
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for NotificationList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
