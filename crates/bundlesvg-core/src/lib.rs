//! bundlesvg Core Types and Definitions
//!
//! This crate provides the foundational types for rendering a service topology
//! to SVG. It includes:
//!
//! - **Colors**: CSS color validation ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and the pixel rounding policy ([`geometry`] module)
//! - **Draw**: Drawing primitives and layered output ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
