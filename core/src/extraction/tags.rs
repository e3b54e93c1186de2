//! Tag identifiers and tag-name resolution
//!
//! Names come from the parser's built-in tag table; only the handful of
//! ids the GPS decoder and the printer address directly are spelled out
//! here as constants.

use crate::types::IfdSection;
use exif::{Context, Tag};

// GPS IFD tags consumed by the GPS decoder
pub const GPS_LATITUDE_REF: u16 = 0x0001;
pub const GPS_LATITUDE: u16 = 0x0002;
pub const GPS_LONGITUDE_REF: u16 = 0x0003;
pub const GPS_LONGITUDE: u16 = 0x0004;
pub const GPS_ALTITUDE: u16 = 0x0006;
pub const GPS_TIME_STAMP: u16 = 0x0007;
pub const GPS_SPEED_REF: u16 = 0x000c;
pub const GPS_SPEED: u16 = 0x000d;
pub const GPS_IMG_DIRECTION_REF: u16 = 0x0010;
pub const GPS_IMG_DIRECTION: u16 = 0x0011;
pub const GPS_DEST_BEARING_REF: u16 = 0x0017;
pub const GPS_DEST_BEARING: u16 = 0x0018;
pub const GPS_DATE_STAMP: u16 = 0x001d;
pub const GPS_H_POSITIONING_ERROR: u16 = 0x001f;

/// Vendor-specific binary blob in the camera section; never printed
pub const MAKER_NOTE: u16 = 0x927c;

/// JPEG thumbnail offset in the secondary frame; signals embedded thumbnail data
pub const JPEG_INTERCHANGE_FORMAT: u16 = 0x0201;

/// Maps a dictionary section to the tag context the parser files it under
///
/// The secondary frame reuses the TIFF attribute set of the primary
/// directory.
pub fn section_context(section: IfdSection) -> Context {
    match section {
        IfdSection::General | IfdSection::SecondaryFrame => Context::Tiff,
        IfdSection::Camera => Context::Exif,
        IfdSection::Gps => Context::Gps,
        IfdSection::Interop => Context::Interop,
    }
}

/// Resolves a human-readable tag name, if the tag table knows the id
pub fn tag_name(section: IfdSection, id: u16) -> Option<String> {
    let tag = Tag(section_context(section), id);
    tag.description().map(|_| tag.to_string())
}
