//! Helpers for testing [`Set`](crate::Set) with unusual equality and hashing.

pub mod hash;
