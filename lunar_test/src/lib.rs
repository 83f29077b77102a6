//! Shared helpers for the property-based tests of the Lunar crates.

#![deny(missing_docs, missing_debug_implementations, clippy::all, clippy::pedantic)]

pub mod input;
