//! # API crate — persistence and authentication for Jotter
//!
//! Everything the HTTP layer needs to talk to the database and to decide who a
//! request belongs to. The `web` crate owns routing and rendering; this crate owns
//! the rules.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Password hashing, the email + password authentication strategy, and the session (de)serializer |
//! | [`db`] | The [`Repository`](db::Repository) seam with PostgreSQL and in-memory implementations, pool setup and migrations |
//! | [`models`] | Database rows (`User`, `Note`) |
//! | [`error`] | The crate-wide [`Error`] type |

pub mod auth;
pub mod db;
pub mod error;
pub mod models;

pub use db::{MemoryRepository, PgRepository, Repository};
pub use error::Error;
pub use models::{Note, User};
