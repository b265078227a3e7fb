//! Core types and trait definitions for the campus records service.
//!
//! This crate is deliberately free of HTTP and storage dependencies. It holds
//! the four record types, their payload validation, list filters, and the
//! [`store::RecordStore`] abstraction that backends implement.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod address;
pub mod course;
pub mod enrollment;
pub mod error;
pub mod filter;
pub mod patch;
pub mod person;
pub mod resource;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use resource::{Replaceable, Resource, ResourceKind};
