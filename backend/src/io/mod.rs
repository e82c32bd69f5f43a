//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain.
//!
//! Handlers parse requests into domain commands, call exactly one service
//! method, and map the result back to the DTOs from the `shared` crate.
//! Domain errors are translated to HTTP status codes here and nowhere else.
//!
//! ## Supported Operations
//!
//! - **POST /api/v1/posts**: Create a post
//! - **GET /api/v1/posts/{postId}**: Read one post
//! - **PUT /api/v1/posts/{postId}**: Replace title and content
//! - **DELETE /api/v1/posts/{postId}**: Delete a post
//! - **GET /api/v1/posts?page=&size=&sort=**: Read one page of posts

pub mod rest;

pub use rest::*;
