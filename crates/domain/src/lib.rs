//! # bookshelf-domain
//!
//! Pure domain model for the bookshelf API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Books** (a system-assigned id plus free-form client fields)
//! - Define the **Book collection** (the ordered set persisted as one unit)
//!   and the id allocation rule
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod book;
pub mod collection;
