//! Library side of the `cardshelf` binary: sheet loading and text rendering.

pub mod render;
pub mod sheet;
