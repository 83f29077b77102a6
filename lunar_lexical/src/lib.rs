//! This crate implements the lexical analysis phase of Lunar. This phase is responsible for
//! turning the raw source text into a flat stream of classified tokens.
//!
//! The [`scanner::Scanner`] produces one token per call; the final output of this phase is a
//! [`token_stream::TokenStream`] that always ends with a single end-of-file token.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod scanner;
pub mod token;
pub mod token_stream;
