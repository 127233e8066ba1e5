//! Random sources for candidate choice.

use rand::Rng;

/// Source of "choose one of N" decisions.
///
/// Every [`rand::Rng`] is a `RandomSource`, so a seeded
/// `StdRng`/`SmallRng` gives reproducible runs. Tests can plug in
/// [`FirstCandidate`] or [`ScriptedSource`] for fully scripted choices.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Always picks the first eligible candidate (pool order).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl RandomSource for FirstCandidate {
    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Replays a fixed list of choices, cycling when exhausted.
///
/// Each scripted value is reduced modulo the candidate count, so any
/// script is valid for any pool.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    choices: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `choices`. An empty script always picks 0.
    pub fn new(choices: Vec<usize>) -> Self {
        Self { choices, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn choose_index(&mut self, len: usize) -> usize {
        if self.choices.is_empty() {
            return 0;
        }
        let choice = self.choices[self.cursor % self.choices.len()];
        self.cursor += 1;
        choice % len
    }
}
