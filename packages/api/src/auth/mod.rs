//! Local email + password authentication and session glue.

mod password;
mod session;
mod strategy;

pub use password::{hash_password, spawn_hash, spawn_verify, verify_password};
pub use session::{
    current_user, deserialize_user, destroy, establish, serialize_user, SESSION_USER_ID_KEY,
};
pub use strategy::{authenticate, AuthOutcome, Rejection};
