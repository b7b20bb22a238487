//! # dvn-directory: Reference Data
//!
//! Static tables the navigator shows alongside its tools:
//!
//! - **Resources** (`resources.rs`): support organizations grouped by
//!   [`ResourceCategory`], with category filtering and free-text search.
//! - **Citations** (`citations.rs`): the statutes and court rules the
//!   recommendations and deadlines refer to.
//!
//! Nothing here is mutable or loaded at runtime.

pub mod citations;
pub mod resources;

pub use citations::{citations, find_citation, LegalCitation};
pub use resources::{by_category, resources, search, Resource, ResourceCategory};
