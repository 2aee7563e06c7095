//! Foldable type class - folding over structures to produce summary values.
//!
//! This module provides the [`Foldable`] trait for types whose contents can
//! be reduced to a single value by repeatedly applying a combining function.
//!
//! # Examples
//!
//! ```rust
//! use selectlist::typeclass::Foldable;
//!
//! let values = vec![1, 2, 3, 4];
//! let sum = values.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 10);
//! ```

use super::higher::TypeConstructor;

/// A type class for structures that can be folded to a summary value.
///
/// Folding consumes the structure and combines its elements with an
/// accumulator, either left-to-right (`fold_left`) or right-to-left
/// (`fold_right`).
///
/// # Examples
///
/// ```rust
/// use selectlist::typeclass::Foldable;
///
/// let words = vec!["a".to_string(), "b".to_string()];
/// let joined = words.fold_left(String::new(), |mut accumulator, word| {
///     accumulator.push_str(&word);
///     accumulator
/// });
/// assert_eq!(joined, "ab");
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold` method.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes the accumulator and an element,
    ///   returning a new accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use selectlist::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B,
        Self: Sized;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// In Rust this is typically implemented by reversing the iteration
    /// order.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes an element and the accumulator,
    ///   returning a new accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use selectlist::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B,
        Self: Sized;

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use selectlist::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// assert_eq!(Foldable::length(&values), 3);
    /// ```
    fn length(&self) -> usize;

    /// Returns `true` if the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use selectlist::typeclass::Foldable;
    ///
    /// let values: Vec<i32> = Vec::new();
    /// assert!(Foldable::is_empty(&values));
    /// ```
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Foldable for Vec<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
