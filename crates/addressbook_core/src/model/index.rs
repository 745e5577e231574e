//! Displayed-list index value.
//!
//! Users address persons with one-based positions; the model stores them
//! zero-based. `Index` converts between both without exposing raw offsets.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Position in a displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    zero_based: usize,
}

/// Index construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// One-based index smaller than 1.
    NotPositive(usize),
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPositive(value) => {
                write!(f, "index must be a positive integer, got {value}")
            }
        }
    }
}

impl Error for IndexError {}

impl Index {
    /// Creates an index from a one-based position.
    ///
    /// # Errors
    /// - Returns `IndexError::NotPositive` when `one_based` is 0.
    pub fn from_one_based(one_based: usize) -> Result<Self, IndexError> {
        if one_based == 0 {
            return Err(IndexError::NotPositive(one_based));
        }
        Ok(Self {
            zero_based: one_based - 1,
        })
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    pub fn zero_based(self) -> usize {
        self.zero_based
    }

    pub fn one_based(self) -> usize {
        self.zero_based + 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::{Index, IndexError};

    #[test]
    fn one_based_and_zero_based_agree() {
        let index = Index::from_one_based(3).expect("3 is positive");
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index, Index::from_zero_based(2));
        assert_eq!(index.to_string(), "3");
    }

    #[test]
    fn one_based_zero_is_rejected() {
        assert_eq!(
            Index::from_one_based(0).unwrap_err(),
            IndexError::NotPositive(0)
        );
    }
}
