//! Core type definitions for EXIF metadata inspection
//!
//! This module provides the fundamental types used throughout the exifcat
//! library:
//! - [`IfdSection`]: the sections of the metadata dictionary
//! - [`TagValue`]: closed set of raw tag value shapes, with display formatting
//! - [`Scalar`] and [`Rational`]: the primitive values inside a tag

mod section;
mod value;

pub use section::IfdSection;
pub use value::{Rational, Scalar, TagValue};
