pub mod dictionary;
pub mod gps;
pub mod tags;

pub use dictionary::{MetadataDict, TagEntry};
pub use gps::{decode_gps, dms_to_decimal, GpsReport};
