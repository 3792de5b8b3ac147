//! Palette colour picker.
//!
//! # Responsibility
//! - Pick note colours at random from a fixed palette.
//! - Track used colours so one cycle covers every palette entry once.
//!
//! # Invariants
//! - The palette is never empty and holds no duplicates.
//! - `next()` never repeats a colour until every entry has been handed out.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Palette used when configuration provides none.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#f7941d", "#ffeb3b", "#bc8dbf", "#abd474", "#f49abf", "#6dd0f7", "#ECEE81", "#8DDFCB",
    "#82A0D8", "#EDB7ED",
];

/// Returns the default palette as owned strings.
pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|color| color.to_string()).collect()
}

/// Colour allocator with explicit used-set bookkeeping.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    palette: Vec<String>,
    used: HashSet<String>,
    rng: StdRng,
}

impl ColorPicker {
    /// Creates a picker seeded from OS entropy.
    ///
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn new(palette: Vec<String>) -> Self {
        Self::with_rng(palette, StdRng::from_entropy())
    }

    /// Creates a picker with deterministic draws.
    pub fn seeded(palette: Vec<String>, seed: u64) -> Self {
        Self::with_rng(palette, StdRng::seed_from_u64(seed))
    }

    fn with_rng(palette: Vec<String>, rng: StdRng) -> Self {
        let mut seen = HashSet::new();
        let mut palette: Vec<String> = palette
            .into_iter()
            .filter(|color| seen.insert(color.clone()))
            .collect();
        if palette.is_empty() {
            palette = default_palette();
        }
        Self {
            palette,
            used: HashSet::new(),
            rng,
        }
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Returns a colour not yet used in the current cycle.
    ///
    /// When the cycle is exhausted the used-set resets first.
    pub fn next(&mut self) -> String {
        let mut available: Vec<&String> = self
            .palette
            .iter()
            .filter(|color| !self.used.contains(*color))
            .collect();
        if available.is_empty() {
            self.used.clear();
            available = self.palette.iter().collect();
        }

        let picked = available[self.rng.gen_range(0..available.len())].clone();
        self.used.insert(picked.clone());
        picked
    }

    /// Returns any palette colour; repeats are allowed and the cycle is not
    /// touched.
    pub fn next_with_repeat(&mut self) -> String {
        self.palette[self.rng.gen_range(0..self.palette.len())].clone()
    }

    /// Starts a fresh cycle.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Number of colours left before the cycle resets.
    pub fn remaining(&self) -> usize {
        self.palette.len() - self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorPicker, DEFAULT_PALETTE};
    use std::collections::HashSet;

    fn palette(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|color| color.to_string()).collect()
    }

    #[test]
    fn one_cycle_covers_the_whole_palette() {
        let mut picker = ColorPicker::seeded(Vec::new(), 7);
        let drawn: HashSet<String> = (0..DEFAULT_PALETTE.len()).map(|_| picker.next()).collect();
        assert_eq!(drawn.len(), DEFAULT_PALETTE.len());
        assert_eq!(picker.remaining(), 0);

        picker.next();
        assert_eq!(picker.remaining(), DEFAULT_PALETTE.len() - 1);
    }

    #[test]
    fn reset_starts_a_new_cycle() {
        let mut picker = ColorPicker::seeded(palette(&["#000", "#fff"]), 1);
        picker.next();
        assert_eq!(picker.remaining(), 1);
        picker.reset();
        assert_eq!(picker.remaining(), 2);
    }

    #[test]
    fn duplicate_palette_entries_are_collapsed() {
        let picker = ColorPicker::seeded(palette(&["#000", "#000", "#fff"]), 1);
        assert_eq!(picker.palette(), &["#000".to_string(), "#fff".to_string()]);
    }

    #[test]
    fn repeat_draws_leave_cycle_untouched() {
        let mut picker = ColorPicker::seeded(palette(&["#000", "#fff"]), 3);
        for _ in 0..10 {
            let color = picker.next_with_repeat();
            assert!(color == "#000" || color == "#fff");
        }
        assert_eq!(picker.remaining(), 2);
    }
}
