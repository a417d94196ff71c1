//! Core domain types for provkit.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! the three-valued [`OptionalCollection`] a provider framework hands to resource
//! logic, and the [`ElementDecoder`] contract used to turn its elements into strings.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod collection;
mod decode;

pub use collection::{ElementSet, ElementSetError, OptionalCollection};
pub use decode::{DecodeError, DecodePolicy, ElementDecoder, ScalarDecoder, StringDecoder};
