//! Perimeter Core Types
//!
//! Foundational types shared by the perimeter placement engine and its
//! renderers:
//!
//! - **Geometry**: percentage-space positions, side bands and the exclusion
//!   zone ([`geometry`] module)
//! - **Viewport**: width classification driving separation and exclusion
//!   ([`viewport`] module)
//! - **Items**: decorative payloads and the built-in catalog ([`item`],
//!   [`catalog`])
//! - **Colors**: CSS color parsing ([`color::Color`])

pub mod catalog;
pub mod color;
pub mod geometry;
pub mod item;
pub mod viewport;
