//! config.rs
//! Decoder sizing policy.
//!
//! Defaults reproduce the fixed protocol: a `[3, 10]` headerless ladder and a
//! declared-length bound of half the platform's `usize` range. Callers may
//! tighten either, never loosen them past the protocol ceilings.
use thiserror::Error;

use crate::constants::{DEFAULT_LADDER, MAX_DECLARED_LEN, MAX_LADDER_RUNGS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    /// Capacity multipliers of the compressed length for headerless decoding.
    pub ladder: Vec<usize>,
    /// Largest original length a size header may declare.
    pub max_declared_len: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            ladder: DEFAULT_LADDER.to_vec(),
            max_declared_len: MAX_DECLARED_LEN,
        }
    }
}

impl FrameConfig {
    pub fn with_ladder(mut self, ladder: impl Into<Vec<usize>>) -> Self {
        self.ladder = ladder.into();
        self
    }

    pub fn with_max_declared_len(mut self, max: u64) -> Self {
        self.max_declared_len = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ladder.is_empty() {
            return Err(ConfigError::EmptyLadder);
        }
        if self.ladder.len() > MAX_LADDER_RUNGS {
            return Err(ConfigError::LadderTooLong { have: self.ladder.len(), max: MAX_LADDER_RUNGS });
        }
        if let Some(index) = self.ladder.iter().position(|&m| m == 0) {
            return Err(ConfigError::ZeroMultiplier { index });
        }
        for (index, pair) in self.ladder.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ConfigError::LadderNotIncreasing {
                    index: index + 1,
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }

        if self.max_declared_len == 0 {
            return Err(ConfigError::DeclaredBoundZero);
        }
        if self.max_declared_len > MAX_DECLARED_LEN {
            return Err(ConfigError::DeclaredBoundTooLarge {
                have: self.max_declared_len,
                max: MAX_DECLARED_LEN,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("decode ladder is empty")]
    EmptyLadder,

    #[error("decode ladder has {have} rungs, at most {max} allowed")]
    LadderTooLong { have: usize, max: usize },

    #[error("decode ladder multiplier at index {index} is zero")]
    ZeroMultiplier { index: usize },

    #[error("decode ladder not strictly increasing at index {index}: {prev} then {next}")]
    LadderNotIncreasing { index: usize, prev: usize, next: usize },

    #[error("declared length bound is zero")]
    DeclaredBoundZero,

    #[error("declared length bound {have} exceeds platform limit {max}")]
    DeclaredBoundTooLarge { have: u64, max: u64 },
}
