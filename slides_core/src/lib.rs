//! Core building blocks for the Slides tool server.
//!
//! Everything in this crate is pure: no network, no filesystem, no
//! environment. The MCP layer feeds it presentation snapshots fetched from
//! the remote service and gets back plain values, lookups and encoded images.

pub mod color;
pub mod ids;
pub mod image;
pub mod model;
pub mod units;

pub use color::Color;
pub use ids::{Clock, IdGenerator, SequentialIds, SystemClock, TimestampIds};
pub use units::{EMU_PER_POINT, emu_to_pt, pt_to_emu};
