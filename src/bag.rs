use tracing::trace;

/// Default number of slots in a bag.
pub const DEFAULT_CAPACITY: usize = 100;

/// Fixed-capacity, unordered collection that permits duplicates.
///
/// Removal moves the last occupied slot into the freed position, so the
/// relative order of items is not preserved across removals.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayBag<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: PartialEq> ArrayBag<T> {
    /// Create an empty bag with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty bag holding at most `capacity` items.
    ///
    /// `capacity` is a logical limit. Storage grows as items are added.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Insert `item` if a slot is free. Returns false when the bag is full.
    pub fn add(&mut self, item: T) -> bool {
        if self.is_full() {
            trace!(capacity = self.capacity, "bag full, add rejected");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the first item equal to `item`. Returns false if none matches.
    pub fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Remove the first item equal to `item` and hand it back to the caller.
    pub fn take(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        Some(self.items.swap_remove(index))
    }

    /// Number of items currently held.
    pub fn current_size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Number of items equal to `item`.
    pub fn frequency_of(&self, item: &T) -> usize {
        self.items.iter().filter(|i| *i == item).count()
    }

    /// Item in the last occupied slot. `add` always fills this slot.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copy the current contents out, in storage order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }
}

impl<T: PartialEq> Default for ArrayBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a ArrayBag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
