use std::{fmt, result};

/// Construction-time failures. Per-frame simulation never produces these.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// An obstacle pair was built with an identity outside the ring
    InvalidSlot { slot: usize, ring_size: usize },
    EmptyRing,
    InvalidOffsetRange { min: i32, max: i32 },
    InvalidFrameRate(f64),
    InvalidSize(&'static str),
}

pub type Result<T> = result::Result<T, GameError>;

impl std::error::Error for GameError {}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InvalidSlot { slot, ring_size } => {
                write!(f, "obstacle slot {} is outside a ring of {}", slot, ring_size)
            }
            GameError::EmptyRing => write!(f, "obstacle ring must hold at least one pair"),
            GameError::InvalidOffsetRange { min, max } => {
                write!(f, "y offset range [{}, {}] is empty", min, max)
            }
            GameError::InvalidFrameRate(fps) => write!(f, "target fps {} must be positive", fps),
            GameError::InvalidSize(what) => write!(f, "{} must be positive", what),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_slot_and_ring() {
        let err = GameError::InvalidSlot {
            slot: 7,
            ring_size: 5,
        };
        assert_eq!(err.to_string(), "obstacle slot 7 is outside a ring of 5");
    }

    #[test]
    fn test_display_offset_range() {
        let err = GameError::InvalidOffsetRange { min: 10, max: -10 };
        assert_eq!(err.to_string(), "y offset range [10, -10] is empty");
    }
}
