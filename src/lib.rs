//! timeline-layout: temporal layout engine for Gantt and timeline views.
//!
//! This crate turns arrays of dated interval records into normalized bar
//! geometry, axis ticks, and track rows. It is pure, synchronous computation
//! with no rendering, persistence, or I/O; hosting applications feed it data
//! and draw whatever comes back.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LayoutCache, LayoutOptions, TimelineFrame, TrackLayout, compute_layout};
pub use error::{LayoutError, LayoutResult};
