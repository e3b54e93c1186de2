use serde::Serialize;
use std::fmt;

/// Metadata dictionary sections, in fixed report order
///
/// Each section corresponds to one IFD of the EXIF block: the primary
/// image directory, the camera-settings sub-IFD, the GPS sub-IFD, the
/// interoperability sub-IFD and the secondary-frame (1st) directory
/// that describes the embedded thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IfdSection {
    General,
    Camera,
    Gps,
    Interop,
    SecondaryFrame,
}

impl IfdSection {
    /// Header printed above the section in the text report
    pub fn header(&self) -> &'static str {
        match self {
            IfdSection::General => "General Information",
            IfdSection::Camera => "Camera Settings",
            IfdSection::Gps => "GPS Data",
            IfdSection::Interop => "Interop Data",
            IfdSection::SecondaryFrame => "1st IFD Data",
        }
    }
}

impl fmt::Display for IfdSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IfdSection::General => "general",
            IfdSection::Camera => "camera",
            IfdSection::Gps => "gps",
            IfdSection::Interop => "interop",
            IfdSection::SecondaryFrame => "secondary-frame",
        };
        write!(f, "{}", name)
    }
}
