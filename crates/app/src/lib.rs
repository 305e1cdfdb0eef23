//! # bookshelf-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `BookRepository` — load and save the whole book collection
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BookService` — list, get, create, update, delete
//! - Serialize every read-modify-write so concurrent mutations cannot
//!   lose each other's changes
//!
//! ## Dependency rule
//! Depends on `bookshelf-domain` only (plus `tokio::sync` for the write lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
