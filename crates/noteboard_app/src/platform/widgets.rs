//! Adapter seam for the searchable dropdown widgets.
//!
//! Filter logic only ever talks to [`SelectAdapter`], so the concrete
//! widget library is swappable. The in-memory implementation patches its
//! option set in place instead of destroy-and-recreate; either strategy is
//! acceptable as long as rebuilds are idempotent (no duplicate listeners,
//! selection survives only when the new option set still contains it).

use noteboard_core::OptionRow;

pub trait SelectAdapter {
    /// Replaces the full option set. Safe to call repeatedly with the
    /// same rows.
    fn set_options(&mut self, rows: &[OptionRow]);
    /// Currently selected value; `None` when the sentinel row is active.
    fn value(&self) -> Option<String>;
    /// Selects an entry by value. Returns false when no such entry exists,
    /// leaving the selection untouched.
    fn select(&mut self, value: &str) -> bool;
}

/// Plain in-memory dropdown standing in for the search-widget library.
#[derive(Default)]
pub struct BasicSelect {
    rows: Vec<OptionRow>,
}

impl BasicSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[OptionRow] {
        &self.rows
    }
}

impl SelectAdapter for BasicSelect {
    fn set_options(&mut self, rows: &[OptionRow]) {
        self.rows = rows.to_vec();
    }

    fn value(&self) -> Option<String> {
        self.rows
            .iter()
            .find(|row| row.selected && !row.value.is_empty())
            .map(|row| row.value.clone())
    }

    fn select(&mut self, value: &str) -> bool {
        if !self.rows.iter().any(|row| row.value == value) {
            return false;
        }
        for row in &mut self.rows {
            row.selected = row.value == value;
        }
        true
    }
}
