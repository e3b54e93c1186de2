//! GPS section decoding
//!
//! Converts degree/minute/second rational triples plus hemisphere
//! references into signed decimal coordinates and renders the fixed set
//! of GPS display fields.

use crate::error::Result;
use crate::extraction::tags;
use crate::types::{Rational, TagValue};
use serde::Serialize;
use std::collections::BTreeMap;

const NOT_AVAILABLE: &str = "N/A";

/// The ten GPS display fields, rendered and ready to print
///
/// Every field is `"N/A"` unless both coordinates were present; a
/// partial fix is never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GpsReport {
    pub latitude: String,
    pub longitude: String,
    pub map_url: String,
    pub altitude: String,
    pub time_stamp: String,
    pub speed: String,
    pub img_direction: String,
    pub dest_bearing: String,
    pub date_stamp: String,
    pub pos_error: String,
}

impl GpsReport {
    /// Report with every field marked unavailable
    pub fn unavailable() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        GpsReport {
            latitude: na(),
            longitude: na(),
            map_url: na(),
            altitude: na(),
            time_stamp: na(),
            speed: na(),
            img_direction: na(),
            dest_bearing: na(),
            date_stamp: na(),
            pos_error: na(),
        }
    }

    /// Labels and values in fixed print order
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("Latitude", self.latitude.as_str()),
            ("Longitude", self.longitude.as_str()),
            ("Google Maps URL", self.map_url.as_str()),
            ("Altitude", self.altitude.as_str()),
            ("TimeStamp", self.time_stamp.as_str()),
            ("Speed", self.speed.as_str()),
            ("ImgDirection", self.img_direction.as_str()),
            ("DestBearing", self.dest_bearing.as_str()),
            ("DateStamp", self.date_stamp.as_str()),
            ("PosError", self.pos_error.as_str()),
        ]
    }
}

/// Decodes the GPS section of the metadata dictionary
///
/// Coordinates are displayed as the unsigned 6-decimal magnitude plus
/// the hemisphere reference letter; the signed values feed the map URL.
/// Hemisphere references default to "N" and "W" when the ref tags are
/// absent. Speed, direction and bearing require their reference-letter
/// tag; without it the field reads `"N/A"` rather than guessing a unit.
///
/// # Errors
///
/// Returns an error if any rational involved in a division has a zero
/// denominator.
pub fn decode_gps(section: Option<&BTreeMap<u16, TagValue>>) -> Result<GpsReport> {
    let Some(gps) = section else {
        return Ok(GpsReport::unavailable());
    };

    let (Some(lat_dms), Some(lon_dms)) = (
        triple(gps, tags::GPS_LATITUDE),
        triple(gps, tags::GPS_LONGITUDE),
    ) else {
        return Ok(GpsReport::unavailable());
    };

    let lat_ref = text(gps, tags::GPS_LATITUDE_REF).unwrap_or_else(|| "N".to_string());
    let lon_ref = text(gps, tags::GPS_LONGITUDE_REF).unwrap_or_else(|| "W".to_string());

    let lat = dms_to_decimal(&lat_dms)?;
    let lon = dms_to_decimal(&lon_dms)?;
    let lat_signed = if lat_ref == "S" { -lat } else { lat };
    let lon_signed = if lon_ref == "W" { -lon } else { lon };

    Ok(GpsReport {
        latitude: format!("{lat:.6} {lat_ref}"),
        longitude: format!("{lon:.6} {lon_ref}"),
        map_url: map_url(lat_signed, lon_signed),
        altitude: meters(gps, tags::GPS_ALTITUDE)?,
        time_stamp: formatted(gps, tags::GPS_TIME_STAMP),
        speed: with_reference(gps, tags::GPS_SPEED, tags::GPS_SPEED_REF)?,
        img_direction: with_reference(gps, tags::GPS_IMG_DIRECTION, tags::GPS_IMG_DIRECTION_REF)?,
        dest_bearing: with_reference(gps, tags::GPS_DEST_BEARING, tags::GPS_DEST_BEARING_REF)?,
        date_stamp: formatted(gps, tags::GPS_DATE_STAMP),
        pos_error: meters(gps, tags::GPS_H_POSITIONING_ERROR)?,
    })
}

/// Converts a degrees/minutes/seconds triple to decimal degrees
///
/// # Errors
///
/// Returns an error if any component has a zero denominator.
pub fn dms_to_decimal(dms: &[Rational; 3]) -> Result<f64> {
    Ok(dms[0].to_decimal()? + dms[1].to_decimal()? / 60.0 + dms[2].to_decimal()? / 3600.0)
}

fn map_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps?q={lat:.6},{lon:.6}")
}

fn triple(gps: &BTreeMap<u16, TagValue>, id: u16) -> Option<[Rational; 3]> {
    gps.get(&id).and_then(TagValue::as_rational_triple)
}

fn rational(gps: &BTreeMap<u16, TagValue>, id: u16) -> Option<Rational> {
    gps.get(&id).and_then(TagValue::as_rational)
}

fn text(gps: &BTreeMap<u16, TagValue>, id: u16) -> Option<String> {
    gps.get(&id).and_then(TagValue::as_text)
}

/// Value through the general formatter; absent tags read "N/A"
fn formatted(gps: &BTreeMap<u16, TagValue>, id: u16) -> String {
    gps.get(&id)
        .map(ToString::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Rational measurement in meters, to 2 decimals
fn meters(gps: &BTreeMap<u16, TagValue>, id: u16) -> Result<String> {
    match rational(gps, id) {
        Some(r) => Ok(format!("{:.2} meters", r.to_decimal()?)),
        None => Ok(NOT_AVAILABLE.to_string()),
    }
}

/// Rational measurement qualified by its reference-letter tag
fn with_reference(gps: &BTreeMap<u16, TagValue>, value_id: u16, ref_id: u16) -> Result<String> {
    match (rational(gps, value_id), text(gps, ref_id)) {
        (Some(r), Some(reference)) => Ok(format!("{} {}", r.to_decimal()?, reference)),
        _ => Ok(NOT_AVAILABLE.to_string()),
    }
}
