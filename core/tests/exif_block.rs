//! End-to-end checks over a raw EXIF (TIFF) block with a GPS IFD.

use exifcat_core::{
    build_report, ExifOutcome, IfdSection, Inspection, MetadataDict, Style, TextReport,
};

/// Builds a minimal little-endian TIFF block whose 0th IFD points at a
/// GPS IFD holding the Eiffel Tower fix: 48°51'29" N, 2°17'40" E.
fn gps_exif_block() -> Vec<u8> {
    let mut buf = Vec::new();
    // TIFF header: byte order, magic, offset of the 0th IFD
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());

    // 0th IFD: a single entry, the GPS IFD pointer (0x8825, LONG)
    let gps_ifd_offset: u32 = 8 + 2 + 12 + 4;
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x8825u16.to_le_bytes());
    buf.extend_from_slice(&4u16.to_le_bytes());
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&gps_ifd_offset.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(buf.len() as u32, gps_ifd_offset);

    // GPS IFD: refs inline (ASCII, count 2), coordinates out of line
    // (RATIONAL, count 3, 24 bytes each)
    let rational_data_offset: u32 = gps_ifd_offset + 2 + 4 * 12 + 4;
    buf.extend_from_slice(&4u16.to_le_bytes());

    // 0x0001 GPSLatitudeRef = "N"
    buf.extend_from_slice(&0x0001u16.to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes());
    buf.extend_from_slice(&2u32.to_le_bytes());
    buf.extend_from_slice(b"N\0\0\0");
    // 0x0002 GPSLatitude = 48/1 51/1 29/1
    buf.extend_from_slice(&0x0002u16.to_le_bytes());
    buf.extend_from_slice(&5u16.to_le_bytes());
    buf.extend_from_slice(&3u32.to_le_bytes());
    buf.extend_from_slice(&rational_data_offset.to_le_bytes());
    // 0x0003 GPSLongitudeRef = "E"
    buf.extend_from_slice(&0x0003u16.to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes());
    buf.extend_from_slice(&2u32.to_le_bytes());
    buf.extend_from_slice(b"E\0\0\0");
    // 0x0004 GPSLongitude = 2/1 17/1 40/1
    buf.extend_from_slice(&0x0004u16.to_le_bytes());
    buf.extend_from_slice(&5u16.to_le_bytes());
    buf.extend_from_slice(&3u32.to_le_bytes());
    buf.extend_from_slice(&(rational_data_offset + 24).to_le_bytes());

    buf.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(buf.len() as u32, rational_data_offset);

    for (num, denom) in [(48u32, 1u32), (51, 1), (29, 1), (2, 1), (17, 1), (40, 1)] {
        buf.extend_from_slice(&num.to_le_bytes());
        buf.extend_from_slice(&denom.to_le_bytes());
    }
    buf
}

#[test]
fn gps_block_produces_map_link() {
    let parsed = exif::Reader::new().read_raw(gps_exif_block()).unwrap();
    let dict = MetadataDict::from_exif(&parsed);
    let report = build_report(&dict).unwrap();

    assert_eq!(report.gps.latitude, "48.858056 N");
    assert_eq!(report.gps.longitude, "2.294444 E");
    assert_eq!(
        report.gps.map_url,
        "https://www.google.com/maps?q=48.858056,2.294444"
    );
    assert_eq!(report.gps.altitude, "N/A");
    assert!(!report.has_thumbnail);
}

#[test]
fn gps_section_lists_named_tags() {
    let parsed = exif::Reader::new().read_raw(gps_exif_block()).unwrap();
    let dict = MetadataDict::from_exif(&parsed);

    let entries = dict.section_entries(IfdSection::Gps).unwrap();
    assert!(entries.iter().any(|e| e.name == "GPSLatitudeRef"));
    assert!(entries.iter().any(|e| e.name == "GPSLatitude"));
}

#[test]
fn rendered_report_embeds_map_link() {
    let parsed = exif::Reader::new().read_raw(gps_exif_block()).unwrap();
    let dict = MetadataDict::from_exif(&parsed);
    let report = build_report(&dict).unwrap();
    let inspection = Inspection::Exif {
        format: "JPEG".to_string(),
        outcome: ExifOutcome::Parsed(Box::new(report)),
    };

    let output = format!("{}", TextReport::new(&inspection, Style::plain()));
    assert!(output.contains("https://www.google.com/maps?q=48.858056,2.294444"));

    let json = serde_json::to_value(&inspection).unwrap();
    assert_eq!(json["kind"], "exif");
    assert_eq!(json["body"]["outcome"]["status"], "parsed");
    assert_eq!(
        json["body"]["outcome"]["data"]["gps"]["map_url"],
        "https://www.google.com/maps?q=48.858056,2.294444"
    );
}
