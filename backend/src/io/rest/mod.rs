//! # REST API Interface Layer
//!
//! HTTP endpoints for posts, the query-string pagination parser, the
//! extractors that render rejections as JSON, and the mappers between domain
//! results and public DTOs.

pub mod extractors;
pub mod mappers;
pub mod pagination;
pub mod post_apis;

pub use post_apis::*;
