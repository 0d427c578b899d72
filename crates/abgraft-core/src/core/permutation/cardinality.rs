use super::error::PermutationError;
use super::iter::Permutations;
use super::set::Permutation;
use std::fmt;

/// Validated per-slot cardinalities.
///
/// Slot `i` with cardinality `0` is inactive and always holds the sentinel `0`;
/// cardinality `k > 0` means the slot ranges over `1..=k`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cardinalities {
    slots: Vec<usize>,
}

impl Cardinalities {
    pub fn new(slots: Vec<usize>) -> Self {
        Self { slots }
    }

    /// Validates signed caller input, rejecting the first negative value.
    pub fn from_signed(values: &[i64]) -> Result<Self, PermutationError> {
        let slots = values
            .iter()
            .enumerate()
            .map(|(slot, &value)| {
                usize::try_from(value).map_err(|_| PermutationError::InvalidInput { slot, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    pub fn get(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied()
    }

    pub fn active_slots(&self) -> usize {
        self.slots.iter().filter(|&&c| c > 0).count()
    }

    /// Product of `max(c, 1)` over all slots, or `None` if it does not fit in `usize`.
    pub fn total_permutations(&self) -> Option<usize> {
        self.slots
            .iter()
            .try_fold(1usize, |acc, &cardinality| acc.checked_mul(cardinality.max(1)))
    }

    pub fn permutations(&self) -> Permutations<'_> {
        Permutations::new(self)
    }

    /// Decodes the `index`-th permutation of the enumeration order without
    /// walking the ones before it.
    pub fn permutation_at(&self, index: usize) -> Result<Permutation, PermutationError> {
        if let Some(total) = self.total_permutations() {
            if index >= total {
                return Err(PermutationError::IndexOutOfRange { index, total });
            }
        }

        let mut permutation = vec![0; self.slots.len()];
        let mut remainder = index;
        for (value, &cardinality) in permutation.iter_mut().zip(&self.slots).rev() {
            if cardinality > 0 {
                *value = remainder % cardinality + 1;
                remainder /= cardinality;
            }
        }
        Ok(permutation)
    }

    /// Returns `true` if `permutation` has the right shape and every value lies in its slot's range.
    pub fn contains(&self, permutation: &[usize]) -> bool {
        permutation.len() == self.slots.len()
            && permutation
                .iter()
                .zip(&self.slots)
                .all(|(&value, &cardinality)| match cardinality {
                    0 => value == 0,
                    k => (1..=k).contains(&value),
                })
    }

    pub(crate) fn first_permutation(&self) -> Permutation {
        self.slots.iter().map(|&c| usize::from(c > 0)).collect()
    }
}

impl From<Vec<usize>> for Cardinalities {
    fn from(slots: Vec<usize>) -> Self {
        Self::new(slots)
    }
}

impl TryFrom<&[i64]> for Cardinalities {
    type Error = PermutationError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        Self::from_signed(values)
    }
}

impl TryFrom<Vec<i64>> for Cardinalities {
    type Error = PermutationError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_signed(&values)
    }
}

impl fmt::Display for Cardinalities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_signed_accepts_zero_and_positive_values() {
        let cardinalities = Cardinalities::from_signed(&[2, 0, 3]).unwrap();
        assert_eq!(cardinalities.as_slice(), &[2, 0, 3]);
        assert_eq!(cardinalities.len(), 3);
        assert_eq!(cardinalities.active_slots(), 2);
    }

    #[test]
    fn from_signed_rejects_negative_values_with_slot_position() {
        let result = Cardinalities::from_signed(&[3, 1, -4, -1]);
        assert_eq!(
            result,
            Err(PermutationError::InvalidInput { slot: 2, value: -4 })
        );
    }

    #[test]
    fn try_from_vec_delegates_to_validation() {
        assert!(Cardinalities::try_from(vec![1i64, 2]).is_ok());
        assert!(matches!(
            Cardinalities::try_from(vec![-1i64]),
            Err(PermutationError::InvalidInput { slot: 0, value: -1 })
        ));
    }

    #[test]
    fn total_permutations_treats_inactive_slots_as_factor_one() {
        assert_eq!(Cardinalities::new(vec![2, 0, 3]).total_permutations(), Some(6));
        assert_eq!(Cardinalities::new(vec![0, 0]).total_permutations(), Some(1));
        assert_eq!(Cardinalities::new(vec![]).total_permutations(), Some(1));
    }

    #[test]
    fn total_permutations_returns_none_on_overflow() {
        let cardinalities = Cardinalities::new(vec![usize::MAX, 2]);
        assert_eq!(cardinalities.total_permutations(), None);
    }

    #[test]
    fn permutation_at_decodes_with_last_slot_fastest() {
        let cardinalities = Cardinalities::new(vec![2, 0, 3]);
        assert_eq!(cardinalities.permutation_at(0).unwrap(), vec![1, 0, 1]);
        assert_eq!(cardinalities.permutation_at(2).unwrap(), vec![1, 0, 3]);
        assert_eq!(cardinalities.permutation_at(3).unwrap(), vec![2, 0, 1]);
        assert_eq!(cardinalities.permutation_at(5).unwrap(), vec![2, 0, 3]);
    }

    #[test]
    fn permutation_at_rejects_out_of_range_index() {
        let cardinalities = Cardinalities::new(vec![1, 2]);
        assert_eq!(
            cardinalities.permutation_at(2),
            Err(PermutationError::IndexOutOfRange { index: 2, total: 2 })
        );
    }

    #[test]
    fn permutation_at_handles_empty_input() {
        let cardinalities = Cardinalities::new(vec![]);
        assert_eq!(cardinalities.permutation_at(0).unwrap(), Vec::<usize>::new());
        assert!(cardinalities.permutation_at(1).is_err());
    }

    #[test]
    fn contains_checks_shape_and_value_ranges() {
        let cardinalities = Cardinalities::new(vec![2, 0, 3]);
        assert!(cardinalities.contains(&[1, 0, 3]));
        assert!(!cardinalities.contains(&[1, 0]));
        assert!(!cardinalities.contains(&[0, 0, 1]));
        assert!(!cardinalities.contains(&[1, 1, 1]));
        assert!(!cardinalities.contains(&[3, 0, 1]));
    }

    #[test]
    fn first_permutation_sets_active_slots_to_one() {
        let cardinalities = Cardinalities::new(vec![4, 0, 1]);
        assert_eq!(cardinalities.first_permutation(), vec![1, 0, 1]);
    }

    #[test]
    fn display_formats_as_list() {
        assert_eq!(Cardinalities::new(vec![2, 0, 3]).to_string(), "[2, 0, 3]");
    }
}
