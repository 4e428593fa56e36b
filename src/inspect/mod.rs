//! Token-level orchestration over the `jwtscope_core` decode pipeline.

mod inspector;
mod parts;

pub use inspector::{Inspection, Inspector, SegmentView, TimestampView};
pub use parts::{InspectError, TokenParts};
