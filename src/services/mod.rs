//! Chat services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Services own validation, routing, the remote call and answer cleanup so
//! route handlers stay focused on protocol translation.

pub mod chat;
pub mod events;
pub mod input;
pub mod knowledge;
pub mod normalize;
pub mod persona;
pub mod router;
