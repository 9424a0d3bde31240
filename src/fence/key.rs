//! Validated fence parameters.
//!
//! A `FenceKey` is the only way to hand rail parameters to the engine, so an
//! out-of-range rail count or start rail never reaches the traversal.

use std::fmt;
use thiserror::Error;

/// Smallest number of rails a fence may have
pub const MIN_RAILS: usize = 2;

/// Largest number of rails a fence may have
pub const MAX_RAILS: usize = 10;

/// Errors raised while building a `FenceKey`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Rail count outside `MIN_RAILS..=MAX_RAILS`
    #[error("Rail count {rails} is out of range (must be between {} and {})", MIN_RAILS, MAX_RAILS)]
    RailsOutOfRange { rails: usize },

    /// Start rail does not exist on a fence of `rails` rails.
    ///
    /// Positions are reported in the numbering the caller used
    /// (0-based for `FenceKey::new`, 1-based for `FenceKey::from_one_based`).
    #[error("Start position {start} is out of range (must be between {first} and {last})")]
    StartOutOfRange {
        start: usize,
        first: usize,
        last: usize,
    },
}

/// Rail count and starting rail of a fence.
///
/// # Example
///
/// ```
/// use railfence::fence::FenceKey;
///
/// let key = FenceKey::new(3, 0).unwrap();
/// assert_eq!(key.rails(), 3);
///
/// // Users type positions starting at 1
/// let same = FenceKey::from_one_based(3, 1).unwrap();
/// assert_eq!(key, same);
///
/// assert!(FenceKey::new(11, 0).is_err());
/// assert!(FenceKey::new(4, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FenceKey {
    rails: usize,
    start: usize,
}

impl FenceKey {
    /// Build a key from a rail count and a 0-based start rail.
    pub fn new(rails: usize, start: usize) -> Result<Self, KeyError> {
        Self::check_rails(rails)?;
        if start >= rails {
            return Err(KeyError::StartOutOfRange {
                start,
                first: 0,
                last: rails - 1,
            });
        }
        Ok(Self { rails, start })
    }

    /// Build a key from a rail count and a 1-based start position, as typed
    /// at the menu or on the command line.
    pub fn from_one_based(rails: usize, position: usize) -> Result<Self, KeyError> {
        Self::check_rails(rails)?;
        if position == 0 || position > rails {
            return Err(KeyError::StartOutOfRange {
                start: position,
                first: 1,
                last: rails,
            });
        }
        Ok(Self {
            rails,
            start: position - 1,
        })
    }

    fn check_rails(rails: usize) -> Result<(), KeyError> {
        if (MIN_RAILS..=MAX_RAILS).contains(&rails) {
            Ok(())
        } else {
            Err(KeyError::RailsOutOfRange { rails })
        }
    }

    /// Number of rails
    #[inline]
    pub fn rails(self) -> usize {
        self.rails
    }

    /// 0-based rail the traversal starts on
    #[inline]
    pub fn start(self) -> usize {
        self.start
    }

    /// 1-based start position, as shown to users
    #[inline]
    pub fn start_position(self) -> usize {
        self.start + 1
    }

    /// Index of the bottom rail
    #[inline]
    pub(crate) fn last_rail(self) -> usize {
        self.rails - 1
    }
}

impl fmt::Display for FenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rails, start {}", self.rails, self.start_position())
    }
}
