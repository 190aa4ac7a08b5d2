// Copyright 2025 Cowboy AI, LLC.

//! Bidirectional traversal cursor over an owned sequence
//!
//! [`Cursor`] walks a sequence forwards and backwards without exposing the
//! backing storage. Two flags alter what happens at direction changes and
//! boundaries: `replay_on_reversal` re-yields the current element on the
//! first step after a direction flip at a boundary, and `wrap_on_finish`
//! restarts from the opposite end instead of returning `None`.
//!
//! Every operation is total: exhausted traversal yields `None` and removals
//! on an empty sequence are no-ops. Callers check [`Cursor::has_next`] /
//! [`Cursor::has_prev`] rather than catching errors.
//!
//! The cursor owns its backing vector. [`Cursor::to_vec`] returns a copy and
//! [`Cursor::items`] borrows; no caller-visible aliasing exists.

use serde::{Deserialize, Serialize};

/// Direction of the most recent cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Behavior flags for a [`Cursor`]
///
/// Both default to off, giving plain bounded traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Re-yield the current element on the first call after reversing
    /// direction at a boundary reached by an actual move
    pub replay_on_reversal: bool,
    /// When traversal runs off an end, restart from the opposite end and
    /// yield that element instead of returning `None`
    pub wrap_on_finish: bool,
}

/// A mutable bidirectional cursor over an ordered sequence
///
/// The cursor position ranges over `-1..=len`: `-1` is the pre-start
/// sentinel ("no forward step taken yet") and `len` the past-end sentinel.
/// Neither sentinel is a valid item position.
///
/// # Examples
///
/// ```rust
/// use domain_kit::Cursor;
///
/// let mut cursor = Cursor::from_items(vec![1, 2, 3]);
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.prev(), Some(&1));
/// assert!(!cursor.has_prev());
/// ```
#[derive(Debug)]
pub struct Cursor<T> {
    items: Vec<T>,
    index: isize,
    last_move: Option<Direction>,
    config: CursorConfig,
}

impl<T> Cursor<T> {
    /// Create an empty cursor with default behavior
    pub fn new() -> Self {
        Self::with_config(Vec::new(), CursorConfig::default())
    }

    /// Create a cursor over the given items with default behavior
    ///
    /// The cursor takes ownership of the vector.
    pub fn from_items(items: Vec<T>) -> Self {
        Self::with_config(items, CursorConfig::default())
    }

    /// Create a cursor over the given items with explicit behavior flags
    pub fn with_config(items: Vec<T>, config: CursorConfig) -> Self {
        Self {
            items,
            index: -1,
            last_move: None,
            config,
        }
    }

    /// True iff a forward step would land on an element
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.items.len() as isize
    }

    /// True iff a backward step would land on an element
    pub fn has_prev(&self) -> bool {
        self.index >= 1
    }

    /// True iff the sequence holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements in the sequence
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Step forward and yield the element landed on
    ///
    /// Returns `None` when traversal is exhausted and `wrap_on_finish` is
    /// off, leaving the cursor unchanged. With `wrap_on_finish` on, resets
    /// to the first element and yields it. With `replay_on_reversal` on,
    /// the first forward call after backward movement bottomed out on the
    /// first element yields that element again without moving.
    pub fn next(&mut self) -> Option<&T> {
        if self.config.replay_on_reversal
            && self.last_move == Some(Direction::Backward)
            && self.index == 0
        {
            self.last_move = Some(Direction::Forward);
            return self.items.first();
        }
        if self.has_next() {
            self.index += 1;
            self.last_move = Some(Direction::Forward);
            return self.items.get(self.index as usize);
        }
        if self.config.wrap_on_finish && !self.items.is_empty() {
            self.index = 0;
            // a wraparound landing never arms replay
            self.last_move = None;
            return self.items.first();
        }
        None
    }

    /// Step backward and yield the element landed on
    ///
    /// Mirror image of [`Cursor::next`].
    pub fn prev(&mut self) -> Option<&T> {
        if self.config.replay_on_reversal
            && self.last_move == Some(Direction::Forward)
            && !self.items.is_empty()
            && self.index == self.items.len() as isize - 1
        {
            self.last_move = Some(Direction::Backward);
            return self.items.last();
        }
        if self.has_prev() {
            self.index -= 1;
            self.last_move = Some(Direction::Backward);
            return self.items.get(self.index as usize);
        }
        if self.config.wrap_on_finish && !self.items.is_empty() {
            self.index = self.items.len() as isize - 1;
            self.last_move = None;
            return self.items.last();
        }
        None
    }

    /// Read the first element without moving the cursor
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Read the last element without moving the cursor
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Park the cursor at the pre-start sentinel
    ///
    /// This parks at `-1` even when the cursor already sits on index 0: the
    /// target is the "no forward step taken" state, not the first item
    /// position.
    pub fn to_first(&mut self) -> &mut Self {
        self.index = -1;
        self.last_move = None;
        self
    }

    /// Park the cursor at the past-end sentinel
    ///
    /// Mirror image of [`Cursor::to_first`]: parks at `len` even when the
    /// cursor already sits on the last item.
    pub fn to_last(&mut self) -> &mut Self {
        self.index = self.items.len() as isize;
        self.last_move = None;
        self
    }

    /// Remove all elements and park at the pre-start sentinel
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self.index = -1;
        self.last_move = None;
        self
    }

    /// Append an element; the cursor does not move
    pub fn push(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Prepend an element and park at the pre-start sentinel
    ///
    /// Parking means the following [`Cursor::next`] yields the new first
    /// element.
    pub fn push_front(&mut self, item: T) -> &mut Self {
        self.items.insert(0, item);
        self.index = -1;
        self.last_move = None;
        self
    }

    /// Remove the last element
    ///
    /// A cursor at or past the pre-removal end steps back one so it never
    /// points beyond the shortened sequence.
    pub fn pop(&mut self) -> &mut Self {
        if self.items.is_empty() {
            return self;
        }
        let end = self.items.len() as isize - 1;
        self.items.pop();
        if self.index >= end {
            self.index -= 1;
        }
        self
    }

    /// Remove the first element
    ///
    /// A cursor past index 0 steps back one so it keeps pointing at the
    /// same logical element.
    pub fn pop_front(&mut self) -> &mut Self {
        if self.items.is_empty() {
            return self;
        }
        self.items.remove(0);
        if self.index > 0 {
            self.index -= 1;
        }
        self
    }

    /// Borrow the backing sequence
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[cfg(test)]
    fn raw_index(&self) -> isize {
        self.index
    }
}

impl<T: PartialEq> Cursor<T> {
    /// Remove the first element equal to `item`
    ///
    /// When the removed position was at or before the cursor, the cursor
    /// steps back one. Absent elements are a no-op.
    pub fn remove(&mut self, item: &T) -> &mut Self {
        if let Some(pos) = self.items.iter().position(|x| x == item) {
            self.items.remove(pos);
            if pos as isize <= self.index {
                self.index = (self.index - 1).max(-1);
            }
        }
        self
    }
}

impl<T: Clone> Cursor<T> {
    /// Copy the backing sequence
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning copies the items and behavior flags but not the position: the
/// clone starts fresh at the pre-start sentinel.
impl<T: Clone> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            index: -1,
            last_move: None,
            config: self.config,
        }
    }
}
