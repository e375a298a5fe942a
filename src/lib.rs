//! A lightweight, hash-based [`Set`].
//!
//! # Purpose
//! [`Set`] holds a group of unique values of any type that implements [`Hash`](std::hash::Hash)
//! and [`Eq`]: strings, integers, simple structs and so on. It's a thin layer over a presence map,
//! a [`HashMap`](std::collections::HashMap) from each item to `()`, so hashing, collision handling
//! and growth are all the map's business.
//!
//! # Method
//! Rather than relying on the map's own API, the set exposes an explicit method for each
//! operation: [`has`](Set::has), [`insert`](Set::insert), [`remove`](Set::remove),
//! [`size`](Set::size) and [`to_array`](Set::to_array), and [`set!`] builds a set from a list of
//! items. The usual traits are implemented as well,
//! so a set can be iterated, collected into, extended and converted to and from its presence map.
//!
//! ```
//! use getset::set;
//!
//! let mut set = set!["a", "b", "b", "c"];
//! assert_eq!(set.size(), 3);
//!
//! set.insert("d");
//! set.remove("a");
//! assert!(set.has("d") && !set.has("a"));
//! ```
//!
//! # Error Handling
//! Nothing here can fail, so there are no error types and no [`Result`]s. The one thing to watch
//! out for is a type whose equality isn't reflexive (see [`Set`]): its items go missing silently
//! instead of raising an error.
//!
//! # Threads
//! Every mutating method takes `&mut self`, so sharing a set between threads for mutation needs a
//! lock around it, such as a [`Mutex`](std::sync::Mutex).
#![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

mod macros;
pub mod set;

#[cfg(test)]
pub(crate) mod util;

#[doc(inline)]
pub use set::Set;
