//! Growable token sequence with an explicit doubling policy.
//!
//! [`TokenSeq`] tracks its own logical capacity instead of relying on
//! `Vec`'s amortised growth, so the growth schedule (`initial`, then
//! doubling) and its failure points are observable and testable. Backing
//! storage is reserved with `try_reserve_exact`; allocator refusal is an
//! error, not an abort.

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Index;

/// How a [`TokenSeq`] sizes itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    initial_capacity: NonZeroUsize,
    max_capacity: Option<usize>,
}

impl GrowthPolicy {
    pub const DEFAULT_INITIAL_CAPACITY: NonZeroUsize = match NonZeroUsize::new(16) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub const fn new(initial_capacity: NonZeroUsize) -> Self {
        Self {
            initial_capacity,
            max_capacity: None,
        }
    }

    /// Cap the logical capacity at `max`.
    ///
    /// Any reservation beyond the cap fails with
    /// [`GrowError::LimitExceeded`], exactly as if the allocator had
    /// refused it.
    #[must_use]
    pub const fn with_max_capacity(mut self, max: usize) -> Self {
        self.max_capacity = Some(max);
        self
    }

    pub const fn initial_capacity(&self) -> NonZeroUsize {
        self.initial_capacity
    }

    pub const fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    fn check(&self, requested: usize) -> Result<(), GrowError> {
        match self.max_capacity {
            Some(limit) if requested > limit => Err(GrowError::LimitExceeded { requested, limit }),
            _ => Ok(()),
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

/// Failure to reserve room in a [`TokenSeq`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrowError {
    #[error("capacity {requested} exceeds the configured limit of {limit}")]
    LimitExceeded { requested: usize, limit: usize },
    #[error("capacity overflow doubling {capacity}")]
    Overflow { capacity: usize },
    #[error("allocation of {requested} slots failed")]
    Alloc { requested: usize },
}

/// Ordered sequence of owned token payloads.
///
/// Slots are `Option<T>`: `None` is an unrecognised lexeme stored as-is.
/// Dropping the sequence drops every payload it holds.
pub struct TokenSeq<T> {
    items: Vec<Option<T>>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> TokenSeq<T> {
    /// Reserve an empty sequence at the policy's initial capacity.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, GrowError> {
        let capacity = policy.initial_capacity.get();
        policy.check(capacity)?;
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| GrowError::Alloc {
                requested: capacity,
            })?;
        Ok(Self {
            items,
            capacity,
            policy,
        })
    }

    /// Append `slot`, doubling capacity first if the sequence is full.
    ///
    /// On error `slot` has been dropped and the sequence is unchanged.
    pub fn push(&mut self, slot: Option<T>) -> Result<(), GrowError> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(slot);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), GrowError> {
        let capacity = self.capacity;
        let requested = capacity
            .checked_mul(2)
            .ok_or(GrowError::Overflow { capacity })?;
        self.policy.check(requested)?;
        self.items
            .try_reserve_exact(requested - self.items.len())
            .map_err(|_| GrowError::Alloc { requested })?;
        tracing::trace!(from = capacity, to = requested, "grew token sequence");
        self.capacity = requested;
        Ok(())
    }

    /// Release every payload and the sequence itself.
    ///
    /// Returns how many slots were released.
    pub fn rollback(self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity; always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Payload at `index`: `None` if out of range, `Some(None)` for an
    /// unrecognised lexeme.
    pub fn get(&self, index: usize) -> Option<Option<&T>> {
        self.items.get(index).map(Option::as_ref)
    }

    pub fn as_slice(&self) -> &[Option<T>] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Option<T>> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Option<T>> {
        self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for TokenSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSeq")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .field("items", &self.items)
            .finish()
    }
}

impl<T> Index<usize> for TokenSeq<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Option<T> {
        &self.items[index]
    }
}

impl<T> IntoIterator for TokenSeq<T> {
    type Item = Option<T>;
    type IntoIter = std::vec::IntoIter<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TokenSeq<T> {
    type Item = &'a Option<T>;
    type IntoIter = std::slice::Iter<'a, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests;
