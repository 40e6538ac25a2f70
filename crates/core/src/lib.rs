//! Domain types and pure logic for the PV installation tracker.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these types.

pub mod error;
pub mod time;
pub mod timeline;
pub mod types;
pub mod validation;
