//! # bookshelf-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **books JSON API** (`/books`, `/books/{id}`)
//! - Serve a plain-text welcome at `/` and a liveness probe at `/health`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `bookshelf-app` (for port traits and services) and
//! `bookshelf-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
