//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT), which is what lets
//! the [`Functor`](super::Functor) and [`Foldable`](super::Foldable)
//! traits abstract over type constructors.
//!
//! # Background
//!
//! Rust cannot natively write a trait that abstracts over `Option<_>` and
//! `Vec<_>` as type constructors. This module works around the limitation
//! by pairing the currently-applied inner type with a GAT that re-applies
//! the constructor to a different type.

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Option<_>`,
/// `Vec<_>`, or `SelectionList<_>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently
///   applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use selectlist::typeclass::TypeConstructor;
///
/// // Option<i32> implements TypeConstructor
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> is the same constructor applied to String
/// }
///
/// example::<Option<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be
    /// `Option<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B> = Vec<B>;
}
