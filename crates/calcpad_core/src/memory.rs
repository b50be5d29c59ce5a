//! Memory register (MC / MR / M+ / M-).

use crate::constants::MEMORY_KEY;
use crate::format::{number_to_string, parse_leading_number};
use crate::store::DurableStore;

/// Single persisted accumulator.
///
/// `add`/`subtract` take the *displayed* result text, so repeated operations
/// accumulate on the rounded display value rather than the full-precision
/// result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryRegister {
    value: f64,
}

/// Parse the operand for M+/M- from the display line.
///
/// A leading `=` and whitespace are ignored; text that does not start with a
/// number counts as zero.
pub fn display_operand(display: &str) -> f64 {
    let stripped = display.strip_prefix('=').unwrap_or(display);
    parse_leading_number(stripped)
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

impl MemoryRegister {
    /// Load the persisted value, defaulting to zero.
    pub fn load(store: &DurableStore) -> Self {
        Self {
            value: store.get(MEMORY_KEY, 0.0),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text for the memory indicator and for recall.
    pub fn display(&self) -> String {
        number_to_string(self.value)
    }

    /// MC.
    pub fn clear(&mut self, store: &DurableStore) {
        self.value = 0.0;
        self.persist(store);
    }

    /// M+ with the current display line.
    pub fn add(&mut self, store: &DurableStore, display: &str) {
        self.value += display_operand(display);
        self.persist(store);
    }

    /// M- with the current display line.
    pub fn subtract(&mut self, store: &DurableStore, display: &str) {
        self.value -= display_operand(display);
        self.persist(store);
    }

    /// Write the current value to the store.
    pub fn persist(&self, store: &DurableStore) {
        store.set(MEMORY_KEY, &self.value);
    }
}
