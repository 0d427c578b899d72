use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("Invalid cardinality {value} at slot {slot}: cardinalities must be non-negative")]
    InvalidInput { slot: usize, value: i64 },

    #[error("Enumeration would produce {total} permutations, exceeding the limit of {limit}")]
    LimitExceeded { total: usize, limit: usize },

    #[error("The number of permutations exceeds the addressable range")]
    CountOverflow,

    #[error("Permutation index {index} is out of range for {total} permutations")]
    IndexOutOfRange { index: usize, total: usize },
}
