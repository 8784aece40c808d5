//! Owning collections with a case-insensitive uniqueness key.

use serde::Serialize;

use super::validation::{same_text, ValidationError, ValidationResult};

/// An item that can be owned by exactly one collection at a time.
///
/// Crate-private: only an owning collection writes the back-reference.
pub(crate) trait OwnedItem: Clone {
    /// Used in duplicate errors ("pet", "task").
    const WHAT: &'static str;

    /// Uniqueness key, compared case-insensitively.
    fn key(&self) -> &str;

    /// National id the back-reference currently points at.
    fn owner(&self) -> Option<&str>;

    /// Point the item's back-reference at its new owner.
    fn set_owner(&mut self, owner_id: &str);
}

/// Ordered collection that owns its items and keeps their keys unique.
///
/// Read access only hands out shared borrows or owned copies, so the
/// uniqueness check in [`attach`](Self::attach) cannot be bypassed.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub(crate) struct Owned<T> {
    items: Vec<T>,
}

impl<T> Default for Owned<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: OwnedItem> Owned<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| same_text(item.key(), key))
    }

    /// Append `item`, setting its back-reference to `owner_id`.
    ///
    /// Fails if an item with the same key is already present.
    pub fn attach(&mut self, owner_id: &str, mut item: T) -> ValidationResult<()> {
        if self.position(item.key()).is_some() {
            return Err(ValidationError::Duplicate {
                what: T::WHAT,
                key: item.key().to_string(),
            });
        }
        item.set_owner(owner_id);
        tracing::debug!(what = T::WHAT, key = item.key(), owner = owner_id, "attached");
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the first item matching `key`.
    ///
    /// The returned item keeps its back-reference.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.position(key)?;
        let item = self.items.remove(index);
        tracing::debug!(what = T::WHAT, key = item.key(), "detached");
        Some(item)
    }

    /// Remove the first item matching `key`; returns whether one was removed.
    pub fn detach(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| same_text(item.key(), key))
    }

    /// Mutate the item matching `key` in place.
    ///
    /// If `f` fails, repoints the back-reference, or leaves the item with a
    /// key already used by another item, the item is restored and the error
    /// returned. Returns `Ok(false)`
    /// when nothing matches.
    pub fn modify<F>(&mut self, key: &str, f: F) -> ValidationResult<bool>
    where
        F: FnOnce(&mut T) -> ValidationResult<()>,
    {
        let Some(index) = self.position(key) else {
            return Ok(false);
        };
        let before = self.items[index].clone();

        if let Err(e) = f(&mut self.items[index]) {
            self.items[index] = before;
            return Err(e);
        }

        if self.items[index].owner() != before.owner() {
            let key = before.key().to_string();
            self.items[index] = before;
            return Err(ValidationError::Referential(format!(
                "{} {:?} cannot change owner while attached",
                T::WHAT,
                key
            )));
        }

        let new_key = self.items[index].key();
        let clash = self
            .items
            .iter()
            .enumerate()
            .any(|(i, other)| i != index && same_text(other.key(), new_key));
        if clash {
            let key = new_key.to_string();
            self.items[index] = before;
            return Err(ValidationError::Duplicate { what: T::WHAT, key });
        }
        Ok(true)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Owned copy of the items, in attachment order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Owned<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
