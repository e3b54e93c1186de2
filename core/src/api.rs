use crate::error::{ExifcatError, Result};
use crate::extraction::{decode_gps, tags, GpsReport, MetadataDict, TagEntry};
use crate::types::IfdSection;
use image::{ColorType, GenericImageView, ImageFormat, ImageReader};
use log::debug;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Main dispatcher for image inspection
///
/// Opens an image, identifies its container format and routes it to
/// full EXIF extraction (JPEG), basic attribute display (other common
/// raster formats) or an unsupported-format notice.
///
/// # Example
///
/// ```no_run
/// use exifcat_core::ImageInspector;
/// use std::path::Path;
///
/// let inspection = ImageInspector::inspect(Path::new("sunset.jpg"))?;
/// println!("{:?}", inspection);
/// # Ok::<(), exifcat_core::ExifcatError>(())
/// ```
pub struct ImageInspector;

impl ImageInspector {
    /// Inspects a single image file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its content is
    /// not a recognizable image. Parse failures inside a recognized
    /// JPEG are reported through [`ExifOutcome::Failed`] instead, so
    /// the format line still prints.
    pub fn inspect(path: &Path) -> Result<Inspection> {
        let reader = ImageReader::open(path)
            .map_err(|e| ExifcatError::Open(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| ExifcatError::Open(e.to_string()))?;
        let format = reader
            .format()
            .ok_or_else(|| ExifcatError::Open("unrecognized image format".to_string()))?;
        debug!("detected container format {}", format_name(format));

        match format {
            ImageFormat::Jpeg => Self::inspect_jpeg(path),
            ImageFormat::Png | ImageFormat::Tiff | ImageFormat::WebP | ImageFormat::Bmp => {
                Self::inspect_basic(reader, format)
            }
            other => Ok(Inspection::Unsupported {
                format: format_name(other),
            }),
        }
    }

    /// JPEG family: locate and parse the embedded EXIF block
    fn inspect_jpeg(path: &Path) -> Result<Inspection> {
        let file = File::open(path).map_err(|e| ExifcatError::Open(e.to_string()))?;
        let mut reader = BufReader::new(file);
        let outcome = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(parsed) => {
                let dict = MetadataDict::from_exif(&parsed);
                match build_report(&dict) {
                    Ok(report) => ExifOutcome::Parsed(Box::new(report)),
                    Err(e) => {
                        ExifOutcome::Failed(ExifcatError::Extraction(e.to_string()).to_string())
                    }
                }
            }
            // no APP1 Exif segment at all
            Err(exif::Error::NotFound(_)) => ExifOutcome::NoData,
            Err(e) => ExifOutcome::Failed(ExifcatError::from(e).to_string()),
        };
        Ok(Inspection::Exif {
            format: format_name(ImageFormat::Jpeg),
            outcome,
        })
    }

    /// Other raster formats: basic attributes only
    fn inspect_basic(reader: ImageReader<BufReader<File>>, format: ImageFormat) -> Result<Inspection> {
        let decoded = reader.decode()?;
        let (width, height) = decoded.dimensions();
        let color = decoded.color();
        Ok(Inspection::Basic(BasicInfo {
            format: format_name(format),
            width,
            height,
            mode: color_mode(color),
            info: container_info(color),
        }))
    }
}

/// Builds the full EXIF report from a decoded tag dictionary
///
/// # Errors
///
/// Returns an error if GPS arithmetic fails on a malformed rational.
pub fn build_report(dict: &MetadataDict) -> Result<ExifReport> {
    let gps = decode_gps(dict.section(IfdSection::Gps))?;
    let has_thumbnail = dict
        .section(IfdSection::SecondaryFrame)
        .is_some_and(|tag_map| tag_map.contains_key(&tags::JPEG_INTERCHANGE_FORMAT));
    Ok(ExifReport {
        general: dict.section_entries(IfdSection::General),
        camera: dict.section_entries(IfdSection::Camera),
        gps,
        interop: dict.section_entries(IfdSection::Interop),
        secondary: dict.section_entries(IfdSection::SecondaryFrame),
        has_thumbnail,
    })
}

/// Result of one inspection run, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Inspection {
    /// JPEG-family input with attempted EXIF extraction
    Exif { format: String, outcome: ExifOutcome },
    /// Other raster format: basic attributes only
    Basic(BasicInfo),
    /// Recognized but unsupported container format
    Unsupported { format: String },
}

/// Outcome of the EXIF extraction step for a JPEG input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ExifOutcome {
    /// The image carries no EXIF block
    NoData,
    /// The block parsed; full report follows
    Parsed(Box<ExifReport>),
    /// The block (or its GPS arithmetic) was malformed; carries the
    /// complete user-facing failure notice
    Failed(String),
}

/// Full EXIF report for a JPEG input
///
/// `None` sections were absent from the metadata block; empty ones
/// parsed but carried no printable tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExifReport {
    pub general: Option<Vec<TagEntry>>,
    pub camera: Option<Vec<TagEntry>>,
    pub gps: GpsReport,
    pub interop: Option<Vec<TagEntry>>,
    pub secondary: Option<Vec<TagEntry>>,
    pub has_thumbnail: bool,
}

/// Basic attributes for raster formats without EXIF support
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub mode: String,
    pub info: Vec<(String, String)>,
}

/// Uppercase display name for a container format
fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}

/// Short mode name for the pixel layout
fn color_mode(color: ColorType) -> String {
    match color {
        ColorType::L8 => "L".to_string(),
        ColorType::La8 => "LA".to_string(),
        ColorType::Rgb8 => "RGB".to_string(),
        ColorType::Rgba8 => "RGBA".to_string(),
        ColorType::L16 => "L16".to_string(),
        ColorType::La16 => "LA16".to_string(),
        ColorType::Rgb16 => "RGB16".to_string(),
        ColorType::Rgba16 => "RGBA16".to_string(),
        ColorType::Rgb32F => "RGB32F".to_string(),
        ColorType::Rgba32F => "RGBA32F".to_string(),
        other => format!("{:?}", other),
    }
}

/// Container-level attributes derived from the pixel layout
fn container_info(color: ColorType) -> Vec<(String, String)> {
    vec![
        ("channels".to_string(), color.channel_count().to_string()),
        (
            "bytes_per_pixel".to_string(),
            color.bytes_per_pixel().to_string(),
        ),
        ("alpha".to_string(), color.has_alpha().to_string()),
    ]
}
