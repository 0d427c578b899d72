use crate::core::permutation::{Cardinalities, Permutation, PermutationError};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("Cannot draw {requested} distinct permutations when only {available} exist")]
    NotEnoughPermutations { requested: usize, available: usize },

    #[error(transparent)]
    Permutation(#[from] PermutationError),
}

/// Seeded generator when `seed` is given, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draws `amount` distinct permutations uniformly, returned in draw order.
#[instrument(level = "trace", skip_all, fields(amount))]
pub fn sample_distinct(
    cardinalities: &Cardinalities,
    amount: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Permutation>, SamplingError> {
    let available = cardinalities
        .total_permutations()
        .ok_or(PermutationError::CountOverflow)?;

    if amount > available {
        return Err(SamplingError::NotEnoughPermutations {
            requested: amount,
            available,
        });
    }

    index::sample(rng, available, amount)
        .into_iter()
        .map(|i| cardinalities.permutation_at(i).map_err(SamplingError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn samples_are_distinct_and_valid() {
        let cardinalities = Cardinalities::new(vec![4, 0, 3, 5]);
        let mut rng = rng_from_seed(Some(7));

        let samples = sample_distinct(&cardinalities, 20, &mut rng).unwrap();

        assert_eq!(samples.len(), 20);
        assert!(samples.iter().all(|p| cardinalities.contains(p)));
        let unique: HashSet<_> = samples.iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn same_seed_gives_same_samples() {
        let cardinalities = Cardinalities::new(vec![6, 6, 6]);
        let first = sample_distinct(&cardinalities, 10, &mut rng_from_seed(Some(42))).unwrap();
        let second = sample_distinct(&cardinalities, 10, &mut rng_from_seed(Some(42))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sampling_everything_covers_the_full_set() {
        let cardinalities = Cardinalities::new(vec![2, 3]);
        let samples = sample_distinct(&cardinalities, 6, &mut rng_from_seed(Some(1))).unwrap();
        let sampled: HashSet<_> = samples.into_iter().collect();
        let all: HashSet<_> = cardinalities.permutations().collect();
        assert_eq!(sampled, all);
    }

    #[test]
    fn requesting_too_many_is_an_error() {
        let cardinalities = Cardinalities::new(vec![2]);
        let result = sample_distinct(&cardinalities, 3, &mut rng_from_seed(Some(1)));
        assert!(matches!(
            result,
            Err(SamplingError::NotEnoughPermutations {
                requested: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn zero_amount_yields_nothing() {
        let cardinalities = Cardinalities::new(vec![3]);
        let samples = sample_distinct(&cardinalities, 0, &mut rng_from_seed(None)).unwrap();
        assert!(samples.is_empty());
    }
}
