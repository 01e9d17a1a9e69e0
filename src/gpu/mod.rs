//! GPU plumbing: surface, device, pipelines and buffers. Everything with
//! algorithmic content lives outside this module; here we only move the draw
//! list the kinematic renderer produced onto the screen.

pub mod context;
pub mod types;

pub use context::*;
pub use types::*;
