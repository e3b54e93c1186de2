use thiserror::Error;

/// Result type for exifcat operations
pub type Result<T> = std::result::Result<T, ExifcatError>;

/// Error types for exifcat operations
#[derive(Error, Debug)]
pub enum ExifcatError {
    /// Image file could not be opened or identified
    #[error("Unable to open image file: {0}")]
    Open(String),

    /// EXIF block could not be parsed
    #[error("Error extracting EXIF data: {0}")]
    Extraction(String),

    /// Malformed tag value (e.g. a zero-denominator rational)
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Failing to decode the container is treated the same as failing to
// open the file: the run stops before any metadata output.
impl From<image::ImageError> for ExifcatError {
    fn from(e: image::ImageError) -> Self {
        ExifcatError::Open(format!("{}", e))
    }
}

// Convert EXIF parser errors
impl From<exif::Error> for ExifcatError {
    fn from(e: exif::Error) -> Self {
        ExifcatError::Extraction(format!("{}", e))
    }
}
