//! Core types and trait definitions for the phonebook contact repository.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod color;
pub mod contact;
pub mod defaults;
pub mod error;
pub mod mapper;
pub mod record;
pub mod store;

pub use error::{Error, Result};
