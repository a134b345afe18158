use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

/// Append-only set that remembers insertion order.
///
/// Used for both registries of a run: processed internal files and forwarded
/// dependency directives.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    order: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seen.contains(item)
    }

    /// Registers `item`. Returns `false` if it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        if !self.seen.insert(item.clone()) {
            return false;
        }
        self.order.push(item);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.order
    }
}
