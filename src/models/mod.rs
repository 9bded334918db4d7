//! GitHub API response records.
//!
//! Decode-only product types mirroring the JSON payloads of the supported
//! endpoints. Fields the structs do not declare are ignored during
//! decoding.

mod common;
mod event;
mod issue;
mod repository;
mod user;

pub use common::*;
pub use event::*;
pub use issue::*;
pub use repository::*;
pub use user::*;
