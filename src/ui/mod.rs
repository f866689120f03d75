//! Terminal-facing UI facade.
//!
//! Orchestration code depends on the `RenderSink` contract here instead of a
//! concrete renderer.

pub mod render;
