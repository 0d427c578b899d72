use super::cardinality::Cardinalities;
use super::error::PermutationError;
use super::set::PermutationSet;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Optional guard against materializing very large permutation sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationLimits {
    pub max_permutations: Option<usize>,
}

impl EnumerationLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_permutations(limit: usize) -> Self {
        Self {
            max_permutations: Some(limit),
        }
    }
}

impl Cardinalities {
    /// Materializes every permutation in odometer order.
    ///
    /// The total is checked against `limits` before anything is generated, so a
    /// rejected call never produces partial output. The size of the result grows as
    /// the product of the cardinalities; prefer [`Cardinalities::permutations`] when
    /// the caller can consume permutations one at a time.
    #[instrument(level = "debug", skip_all, fields(slots = self.len()))]
    pub fn enumerate(&self, limits: &EnumerationLimits) -> Result<PermutationSet, PermutationError> {
        let total = self
            .total_permutations()
            .ok_or(PermutationError::CountOverflow)?;

        if let Some(limit) = limits.max_permutations {
            if total > limit {
                return Err(PermutationError::LimitExceeded { total, limit });
            }
        }

        let mut permutations = Vec::new();
        permutations
            .try_reserve_exact(total)
            .map_err(|_| PermutationError::CountOverflow)?;
        permutations.extend(self.permutations());

        debug!(total, "Enumerated graft permutations.");
        Ok(PermutationSet::from_vec(permutations))
    }
}

/// Enumerates every permutation of a signed cardinality vector.
///
/// Fails with [`PermutationError::InvalidInput`] if any value is negative.
pub fn enumerate(cardinalities: &[i64]) -> Result<PermutationSet, PermutationError> {
    Cardinalities::from_signed(cardinalities)?.enumerate(&EnumerationLimits::unlimited())
}

/// Enumerates several independent cardinality vectors, one result per input, in input order.
#[instrument(level = "debug", skip_all, fields(inputs = inputs.len()))]
pub fn enumerate_many(
    inputs: &[Vec<i64>],
    limits: &EnumerationLimits,
) -> Vec<Result<PermutationSet, PermutationError>> {
    #[cfg(not(feature = "parallel"))]
    let iterator = inputs.iter();

    #[cfg(feature = "parallel")]
    let iterator = inputs.par_iter();

    iterator
        .map(|input| Cardinalities::from_signed(input)?.enumerate(limits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_law_holds_for_mixed_input() {
        let set = enumerate(&[2, 0, 3]).unwrap();
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn every_permutation_matches_input_shape_and_ranges() {
        let input = [3, 0, 1, 2];
        let cardinalities = Cardinalities::from_signed(&input).unwrap();
        let set = enumerate(&input).unwrap();
        assert_eq!(set.len(), 6);
        for permutation in &set {
            assert_eq!(permutation.len(), input.len());
            assert!(cardinalities.contains(permutation));
        }
    }

    #[test]
    fn enumeration_is_deterministic() {
        let first = enumerate(&[2, 3, 0, 2]).unwrap();
        let second = enumerate(&[2, 3, 0, 2]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_one_empty_permutation() {
        let set = enumerate(&[]).unwrap();
        assert_eq!(set.into_vec(), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn single_choice_then_two_choices() {
        let set = enumerate(&[1, 2]).unwrap();
        assert_eq!(set.into_vec(), vec![vec![1, 1], vec![1, 2]]);
    }

    #[test]
    fn leading_inactive_slot_is_fixed_at_zero() {
        let set = enumerate(&[0, 2]).unwrap();
        assert_eq!(set.into_vec(), vec![vec![0, 1], vec![0, 2]]);
    }

    #[test]
    fn trailing_inactive_slot_still_emits_permutations() {
        let set = enumerate(&[2, 0]).unwrap();
        assert_eq!(set.into_vec(), vec![vec![1, 0], vec![2, 0]]);
    }

    #[test]
    fn negative_cardinality_is_rejected() {
        assert_eq!(
            enumerate(&[-1]),
            Err(PermutationError::InvalidInput { slot: 0, value: -1 })
        );
    }

    #[test]
    fn limit_is_enforced_before_generation() {
        let cardinalities = Cardinalities::new(vec![4, 4]);
        let result = cardinalities.enumerate(&EnumerationLimits::with_max_permutations(15));
        assert_eq!(
            result,
            Err(PermutationError::LimitExceeded {
                total: 16,
                limit: 15
            })
        );
    }

    #[test]
    fn limit_equal_to_total_is_accepted() {
        let cardinalities = Cardinalities::new(vec![4, 4]);
        let set = cardinalities
            .enumerate(&EnumerationLimits::with_max_permutations(16))
            .unwrap();
        assert_eq!(set.len(), 16);
    }

    #[test]
    fn overflowing_count_is_reported() {
        let cardinalities = Cardinalities::new(vec![usize::MAX, usize::MAX]);
        assert_eq!(
            cardinalities.enumerate(&EnumerationLimits::unlimited()),
            Err(PermutationError::CountOverflow)
        );
    }

    #[test]
    fn materialized_set_matches_lazy_iterator() {
        let cardinalities = Cardinalities::new(vec![2, 0, 2, 3]);
        let set = cardinalities.enumerate(&EnumerationLimits::unlimited()).unwrap();
        let lazy: Vec<_> = cardinalities.permutations().collect();
        assert_eq!(set.into_vec(), lazy);
    }

    #[test]
    fn enumerate_many_preserves_input_order_and_errors() {
        let inputs = vec![vec![1, 2], vec![-3], vec![0, 2]];
        let results = enumerate_many(&inputs, &EnumerationLimits::unlimited());

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap().as_slice(),
            &[vec![1, 1], vec![1, 2]]
        );
        assert!(matches!(
            results[1],
            Err(PermutationError::InvalidInput { slot: 0, value: -3 })
        ));
        assert_eq!(
            results[2].as_ref().unwrap().as_slice(),
            &[vec![0, 1], vec![0, 2]]
        );
    }

    #[test]
    fn enumerate_many_applies_limits_per_input() {
        let inputs = vec![vec![2], vec![5]];
        let results = enumerate_many(&inputs, &EnumerationLimits::with_max_permutations(3));
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(PermutationError::LimitExceeded { total: 5, limit: 3 })
        ));
    }
}
