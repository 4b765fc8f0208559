//! Responsive breakpoint tables
//!
//! A [`BreakpointTable`] maps a viewport width (terminal columns) to the
//! number of cards a carousel shows at once. Entries are checked in
//! ascending `below` order; the first entry whose bound exceeds the width
//! wins, otherwise `fallback` applies.

use serde::{Deserialize, Serialize};

/// One row of a breakpoint table: widths strictly below `below` show `items` cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Breakpoint {
    pub below: u16,
    pub items: usize,
}

impl Breakpoint {
    pub const fn new(below: u16, items: usize) -> Self {
        Self { below, items }
    }
}

/// Static width -> items-per-view mapping
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BreakpointTable {
    #[serde(default)]
    breakpoints: Vec<Breakpoint>,
    #[serde(default = "default_fallback")]
    fallback: usize,
}

fn default_fallback() -> usize {
    1
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::fixed(1)
    }
}

impl BreakpointTable {
    /// Build a table; entries are sorted by bound so lookup order never depends on input order
    pub fn new(mut breakpoints: Vec<Breakpoint>, fallback: usize) -> Self {
        breakpoints.sort_by_key(|bp| bp.below);
        Self {
            breakpoints,
            fallback,
        }
    }

    /// A table that shows the same number of items at every width
    pub fn fixed(items: usize) -> Self {
        Self::new(Vec::new(), items)
    }

    /// Items per view for the given width. Never returns less than 1.
    pub fn items_per_view(&self, width: u16) -> usize {
        self.sorted()
            .find(|bp| width < bp.below)
            .map(|bp| bp.items)
            .unwrap_or(self.fallback)
            .max(1)
    }

    /// Largest items-per-view any width can produce
    pub fn max_items_per_view(&self) -> usize {
        self.breakpoints
            .iter()
            .map(|bp| bp.items)
            .chain(std::iter::once(self.fallback))
            .max()
            .unwrap_or(1)
            .max(1)
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn fallback(&self) -> usize {
        self.fallback
    }

    // Tables deserialized from config skip `new`.
    fn sorted(&self) -> impl Iterator<Item = &Breakpoint> {
        let mut refs: Vec<&Breakpoint> = self.breakpoints.iter().collect();
        refs.sort_by_key(|bp| bp.below);
        refs.into_iter()
    }
}
