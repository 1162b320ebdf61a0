//! Dense, ID-indexed storage for gates.
//!
//! Items are only ever appended, so an ID stays valid for the arena's
//! lifetime and iteration order equals insertion (declaration) order.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::Index;

/// Opaque ID types usable as arena keys.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw index.
    fn as_raw(self) -> u32;
}

/// An append-only vector addressed by typed IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    #[serde(skip)]
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Appends an item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }

    /// Returns the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    pub fn get(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(ID, &T)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }

    /// Iterates over the IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
        (0..self.items.len()).map(|i| I::from_raw(i as u32))
    }

    /// Iterates over the items in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        self.get(id)
    }
}
