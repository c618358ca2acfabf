//! Resettable forward cursor over an ordered collection
//!
//! A `Sequence` keeps its items in insertion order and walks them with a
//! single cursor. The cursor starts before the first element, only moves
//! forward between resets, and yields `None` (never a panic) once it runs
//! past the end.
//!
//! # Example
//!
//! ```
//! use guiapp::sequence::Sequence;
//!
//! let mut seq = Sequence::from(vec!['a', 'b']);
//! seq.reset();
//! assert_eq!(seq.advance(), Some(&'a'));
//! assert_eq!(seq.advance(), Some(&'b'));
//! assert_eq!(seq.advance(), None);
//! ```

#[derive(Debug, Clone)]
pub struct Sequence<T> {
    items: Vec<T>,
    /// `None` is the before-start position
    cursor: Option<usize>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with the cursor before the start
    pub fn new() -> Self {
        Sequence {
            items: Vec::new(),
            cursor: None,
        }
    }

    /// Appends an item at the end (insertion order is traversal order)
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order, independent of the cursor
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Moves the cursor back before the first element
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Steps the cursor forward and returns the element it lands on
    pub fn advance(&mut self) -> Option<&T> {
        self.step();
        self.current()
    }

    /// Mutable form of [`Sequence::advance`]
    pub fn advance_mut(&mut self) -> Option<&mut T> {
        self.step();
        self.current_mut()
    }

    /// Element under the cursor, `None` before the start or past the end
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|index| self.items.get(index))
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.cursor.and_then(|index| self.items.get_mut(index))
    }

    fn step(&mut self) {
        // Parks one past the end so repeated advances stay at None
        let next = match self.cursor {
            None => 0,
            Some(index) => (index + 1).min(self.items.len()),
        };
        self.cursor = Some(next);
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence {
            items,
            cursor: None,
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::from(iter.into_iter().collect::<Vec<_>>())
    }
}
