// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the search context and incremented by the
//! crackers as they decode and score candidates. Tests assert on them to
//! verify search-space coverage and early-exit behavior by call count
//! rather than wall clock.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Calls into the cipher transforms (one per candidate key tried).
    Decodes,
    /// Frequency-correlation scores computed (Caesar path).
    FrequencyScores,
    /// Chi-square statistics computed fresh (Vigenère path, cache misses).
    ChiSquareScores,
    /// Chi-square values answered from the score cache.
    CacheHits,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero_and_increment() {
        let mut stats = Statistics::new();
        assert_eq!(stats.get(Counters::Decodes), 0);
        stats.increment(Counters::Decodes);
        stats.increment(Counters::Decodes);
        stats.increment(Counters::CacheHits);
        assert_eq!(stats.get(Counters::Decodes), 2);
        assert_eq!(stats.get(Counters::CacheHits), 1);
        assert_eq!(stats.get(Counters::ChiSquareScores), 0);
    }
}
