//! Numeric foundation for a software ray tracer
//!
//! This library provides:
//! - A homogeneous 4-component tuple shared by points, vectors and colors
//! - A fixed-size pixel canvas addressed by (column, row)
//! - Plain PPM (`P3`) export with 70-column line wrapping

pub mod canvas;
pub mod error;
pub mod math;

pub use canvas::{Canvas, PpmOptions, PpmWriter};
pub use error::ExportError;
pub use math::{approx_eq, point, rgb, rgba, vector, Tuple4, EPSILON};

/// Largest channel value written to a PPM file
pub const MAX_COLOR_VALUE: u32 = 255;
