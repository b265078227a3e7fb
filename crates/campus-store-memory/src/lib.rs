//! In-memory backend for the campus record store.
//!
//! Each resource type lives in its own table behind a [`tokio::sync::RwLock`],
//! so operations on one type never wait on another. Nothing survives a
//! restart.

mod store;
mod table;

pub use store::MemoryStore;
