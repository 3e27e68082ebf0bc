//! Domain layer
//!
//! Feed records, pagination state and the ports the controller drives.
//! - `entities`: posts, pages and the per-feed loading state
//! - `ports`: trait definitions for the server and the page

pub mod entities;
pub mod ports;
