//! # Storage Module
//!
//! Handles all data persistence for the board.
//!
//! The domain layer only sees the traits in [`traits`]; the SQLite
//! implementation lives in [`connection`] and [`repositories`] and can be
//! swapped without touching the service.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite through SQLx
//! - **Transactions**: every unit of work is one `sqlx::Transaction`, rolled
//!   back on drop unless committed
//! - **Schema**: a single `posts` table created at start-up

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::SqlitePostRepository;
pub use traits::{Connection, PostRepository, UnitOfWork};
