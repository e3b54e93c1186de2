//! # exifcat
//!
//! Extract and display embedded EXIF and GPS metadata from image files.
//!
//! Container decoding and EXIF/TIFF tag parsing are delegated to the
//! `image` and `kamadak-exif` crates; this crate supplies the
//! presentation layer: a per-section tag dictionary, GPS coordinate
//! conversion with a map link, and a colored text (or JSON) report.
//!
//! ## Usage
//!
//! ```no_run
//! use exifcat_core::{ImageInspector, Style, TextReport};
//! use std::path::Path;
//!
//! let inspection = ImageInspector::inspect(Path::new("photo.jpg"))?;
//! print!("{}", TextReport::new(&inspection, Style::plain()));
//! # Ok::<(), exifcat_core::ExifcatError>(())
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod types;

pub use api::{build_report, BasicInfo, ExifOutcome, ExifReport, ImageInspector, Inspection};
pub use cli::report::TextReport;
pub use cli::style::Style;
pub use cli::{Cli, OutputFormat};
pub use error::{ExifcatError, Result};
pub use extraction::{decode_gps, dms_to_decimal, GpsReport, MetadataDict, TagEntry};
pub use types::{IfdSection, Rational, Scalar, TagValue};
