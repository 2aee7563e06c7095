//! # selectlist
//!
//! A persistent selection list for Rust: an immutable zipper over a
//! non-empty sequence with exactly one selected element.
//!
//! ## Overview
//!
//! [`SelectionList`] keeps an ordered sequence of elements together with a
//! selection cursor, and provides pure operations to move the cursor,
//! query its position, and transform elements. Every operation returns a
//! new value; structural sharing keeps cursor moves and clones O(1).
//!
//! The crate is organized as:
//!
//! - **Persistent structures**: [`persistent::SelectionList`] and its
//!   supporting machinery
//! - **Type Classes**: [`typeclass::Functor`] and [`typeclass::Foldable`]
//!   over a GAT-based HKT emulation
//!
//! ## Feature Flags
//!
//! - `arc`: store elements behind `Arc` instead of `Rc`, making the
//!   structures `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` support for [`SelectionList`]
//!
//! ## Example
//!
//! ```rust
//! use selectlist::prelude::*;
//!
//! let tabs = SelectionList::from_list("home", ["search", "settings"]);
//! assert_eq!(tabs.selected(), &"home");
//! assert_eq!(tabs.selected_index(), 0);
//!
//! let moved = tabs.next();
//! assert_eq!(moved.selected(), &"search");
//! // The original value is untouched
//! assert_eq!(tabs.selected(), &"home");
//! ```
//!
//! [`SelectionList`]: persistent::SelectionList

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use selectlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
    pub use crate::typeclass::*;
}

pub mod persistent;
pub mod typeclass;
