//! A module containing [`Set`] and associated types.
//!
//! The other types here provide owned and borrowed iteration over a set's items. There is no
//! mutable iterator because mutating the items in place would cause a logic error.
//!
//! [`Set`] is also re-exported at the crate root.

mod iter;
mod set;

pub use iter::*;
pub use set::*;
