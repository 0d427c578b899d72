use std::ops::Index;

/// One complete assignment: `0` for inactive slots, `1..=k` otherwise.
pub type Permutation = Vec<usize>;

/// Permutations in the order they were generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermutationSet {
    permutations: Vec<Permutation>,
}

impl PermutationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_vec(permutations: Vec<Permutation>) -> Self {
        Self { permutations }
    }

    pub fn len(&self) -> usize {
        self.permutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Permutation> {
        self.permutations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Permutation> {
        self.permutations.iter()
    }

    pub fn as_slice(&self) -> &[Permutation] {
        &self.permutations
    }

    pub fn into_vec(self) -> Vec<Permutation> {
        self.permutations
    }
}

impl Index<usize> for PermutationSet {
    type Output = Permutation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.permutations[index]
    }
}

impl FromIterator<Permutation> for PermutationSet {
    fn from_iter<I: IntoIterator<Item = Permutation>>(iter: I) -> Self {
        Self {
            permutations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PermutationSet {
    type Item = Permutation;
    type IntoIter = std::vec::IntoIter<Permutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.permutations.into_iter()
    }
}

impl<'a> IntoIterator for &'a PermutationSet {
    type Item = &'a Permutation;
    type IntoIter = std::slice::Iter<'a, Permutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.permutations.iter()
    }
}
