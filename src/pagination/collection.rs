//! In-memory container for one batch of listed resources

use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::types::JsonValue;

/// Ordered holder of the resources returned by one listing call
///
/// Items are addressed by position within the batch, which is unrelated to
/// their identity. Removing an item leaves its position empty rather than
/// shifting later items, so positions stay stable. A collection never fetches
/// anything on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding `items` at positions `0..items.len()`
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            slots: items.into_iter().map(Some).collect(),
        }
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at `index`, if one is held there
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Whether an item is held at `index`
    pub fn exists(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Place `item` at `index`, replacing any previous item
    ///
    /// `index` may be at most one past the last position, which appends.
    pub fn set(&mut self, index: usize, item: T) -> Result<()> {
        match index.cmp(&self.slots.len()) {
            std::cmp::Ordering::Less => {
                self.slots[index] = Some(item);
                Ok(())
            }
            std::cmp::Ordering::Equal => {
                self.slots.push(Some(item));
                Ok(())
            }
            std::cmp::Ordering::Greater => Err(Error::IndexOutOfRange {
                index,
                len: self.slots.len(),
            }),
        }
    }

    /// Append `item` after the last position
    pub fn push(&mut self, item: T) {
        self.slots.push(Some(item));
    }

    /// Take the item at `index` out, leaving the position empty
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Held items in positional order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    /// Held items in positional order, as references
    pub fn all(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Consume into the held items
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }

    /// Transform every held item, returning the results in order
    pub fn map<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }
}

impl<T: Resource> Collection<T> {
    /// Attribute mappings of the held items in positional order
    pub fn to_values(&self) -> Vec<JsonValue> {
        self.map(T::to_value)
    }

    /// Whether any held item has the identifier `id` (linear scan)
    pub fn contains(&self, id: i64) -> bool {
        self.iter().any(|item| item.id() == Some(id))
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter().flatten()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}
