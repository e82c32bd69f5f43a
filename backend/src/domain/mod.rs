//! # Domain Module
//!
//! Business logic for the board: the `Post` model, paging models, the
//! command/result types the service speaks, and `PostService` itself.
//!
//! ## Business Rules
//!
//! - A post is identified by a store-assigned id that never changes
//! - Title and content are replaced together by an update
//! - Looking up a missing id is a `PostError::NotFound`
//! - Every service operation runs in its own unit of work

pub mod commands;
pub mod error;
pub mod models;
pub mod post_service;

pub use commands::*;
pub use error::*;
pub use post_service::*;
