//! The Brainfuck memory tape.
//!
//! A theoretical Brainfuck machine has an infinitely long array of
//! single-byte cells, all zero when the program starts. Rather than picking
//! an arbitrary fixed size, [`Tape`] grows on demand: writing past the end
//! of the backing store zero-extends it through the written index, and
//! reading past the end returns 0 without growing anything.

/// The read/write contract the execution engine needs from a memory store.
///
/// [`Tape`] is the default implementation; callers may supply their own
/// (e.g. a fixed-size or instrumented store) via
/// [`Interpreter::with_memory`](crate::Interpreter::with_memory).
pub trait Memory {
    /// Read the cell at `index`. Must never fail; unwritten cells read as 0.
    fn read(&self, index: usize) -> u8;

    /// Write `value` into the cell at `index`, growing the store if needed.
    fn write(&mut self, index: usize, value: u8);
}

/// An unbounded, lazily growing memory tape.
///
/// The backing store starts empty. Indices `0..len()` hold explicit values;
/// everything beyond reads as 0 until written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    store: Vec<u8>,
}

impl Tape {
    /// Create an empty tape.
    pub fn new() -> Self {
        Self { store: Vec::new() }
    }

    /// Length of the materialized backing store.
    ///
    /// Only writes grow the store, so this tracks the highest index written
    /// so far (plus one), not the highest index read.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no cell has been written yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Memory for Tape {
    fn read(&self, index: usize) -> u8 {
        self.store.get(index).copied().unwrap_or(0)
    }

    fn write(&mut self, index: usize, value: u8) {
        if index >= self.store.len() {
            // Zero-fill the gap so indices [old_len, index) hold 0.
            self.store.resize(index + 1, 0);
        }
        self.store[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tape_reads_zero_everywhere() {
        let tape = Tape::new();
        assert_eq!(tape.read(0), 0);
        assert_eq!(tape.read(29_999), 0);
        assert_eq!(tape.read(usize::MAX), 0);
        // Reads never grow the store.
        assert!(tape.is_empty());
    }

    #[test]
    fn write_past_end_zero_fills_the_gap() {
        let mut tape = Tape::new();
        tape.write(5, 42);
        assert_eq!(tape.len(), 6);
        for i in 0..5 {
            assert_eq!(tape.read(i), 0);
        }
        assert_eq!(tape.read(5), 42);
    }

    #[test]
    fn in_range_write_overwrites_in_place() {
        let mut tape = Tape::new();
        tape.write(3, 7);
        tape.write(1, 9);
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.read(1), 9);
        assert_eq!(tape.read(3), 7);
    }

    #[test]
    fn growth_preserves_earlier_cells() {
        let mut tape = Tape::new();
        tape.write(0, 1);
        tape.write(10, 2);
        assert_eq!(tape.read(0), 1);
        assert_eq!(tape.read(10), 2);
        assert_eq!(tape.read(5), 0);
    }
}
