use super::cardinality::Cardinalities;
use super::set::Permutation;
use std::iter::FusedIterator;

/// Lazy odometer over all permutations of a [`Cardinalities`].
///
/// Each call to `next` hands out an owned permutation; the iterator keeps its own
/// cursor, so stopping early costs nothing and [`Permutations::reset`] starts over.
#[derive(Debug, Clone)]
pub struct Permutations<'a> {
    cardinalities: &'a Cardinalities,
    cursor: Option<Permutation>,
    emitted: usize,
    total: Option<usize>,
}

impl<'a> Permutations<'a> {
    pub(crate) fn new(cardinalities: &'a Cardinalities) -> Self {
        Self {
            cardinalities,
            cursor: Some(cardinalities.first_permutation()),
            emitted: 0,
            total: cardinalities.total_permutations(),
        }
    }

    pub fn reset(&mut self) {
        self.cursor = Some(self.cardinalities.first_permutation());
        self.emitted = 0;
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn cardinalities(&self) -> &'a Cardinalities {
        self.cardinalities
    }
}

// Increments the rightmost active slot, carrying leftwards. Returns `false` once
// every active slot has wrapped around.
fn advance(cardinalities: &[usize], permutation: &mut [usize]) -> bool {
    for (value, &cardinality) in permutation.iter_mut().zip(cardinalities).rev() {
        if cardinality == 0 {
            continue;
        }
        if *value < cardinality {
            *value += 1;
            return true;
        }
        *value = 1;
    }
    false
}

impl Iterator for Permutations<'_> {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.take()?;

        let mut successor = current.clone();
        if advance(self.cardinalities.as_slice(), &mut successor) {
            self.cursor = Some(successor);
        }

        self.emitted = self.emitted.saturating_add(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.is_none() {
            return (0, Some(0));
        }
        match self.total {
            Some(total) => {
                let remaining = total - self.emitted;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Permutations<'_> {}
