use crate::api::{BasicInfo, ExifOutcome, ExifReport, Inspection};
use crate::cli::style::Style;
use crate::extraction::{GpsReport, TagEntry};
use crate::types::IfdSection;
use std::fmt;

/// Text report formatter for an inspection result
///
/// Renders the sections in fixed order with the colors the style sink
/// provides. Output layout follows the single-image report shape:
/// format line first, then one block per metadata section.
pub struct TextReport<'a> {
    inspection: &'a Inspection,
    style: Style,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(inspection: &'a Inspection, style: Style) -> Self {
        Self { inspection, style }
    }

    fn write_format_line(&self, f: &mut fmt::Formatter<'_>, format: &str) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            self.style.label("Image format:"),
            self.style.accent(format)
        )
    }

    fn write_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        section: IfdSection,
        entries: Option<&[TagEntry]>,
    ) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.style.header(section.header()))?;
        match entries {
            Some(entries) => {
                for entry in entries {
                    writeln!(
                        f,
                        "  {}: {}",
                        self.style.tag(&entry.name),
                        self.style.value(&entry.value)
                    )?;
                }
                Ok(())
            }
            None => writeln!(f, "{}", self.style.warn("No data found.")),
        }
    }

    fn write_gps(&self, f: &mut fmt::Formatter<'_>, gps: &GpsReport) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.style.header(IfdSection::Gps.header()))?;
        for (label, value) in gps.fields() {
            let painted = if value == "N/A" {
                self.style.value(value)
            } else {
                self.style.gps(value)
            };
            writeln!(f, "  {}: {}", self.style.tag(label), painted)?;
        }
        Ok(())
    }

    fn write_exif(&self, f: &mut fmt::Formatter<'_>, report: &ExifReport) -> fmt::Result {
        self.write_section(f, IfdSection::General, report.general.as_deref())?;
        self.write_section(f, IfdSection::Camera, report.camera.as_deref())?;
        self.write_gps(f, &report.gps)?;
        self.write_section(f, IfdSection::Interop, report.interop.as_deref())?;
        self.write_section(f, IfdSection::SecondaryFrame, report.secondary.as_deref())?;
        if report.has_thumbnail {
            writeln!(f)?;
            writeln!(f, "{}", self.style.header("Thumbnail Data"))?;
            writeln!(
                f,
                "{}",
                self.style.warn(
                    "Thumbnail data found, but it is not parsed due to its binary nature."
                )
            )?;
        }
        Ok(())
    }

    fn write_basic(&self, f: &mut fmt::Formatter<'_>, info: &BasicInfo) -> fmt::Result {
        self.write_format_line(f, &info.format)?;
        writeln!(f, "{}", self.style.label("Basic Information:"))?;
        writeln!(
            f,
            "  {}: {}",
            self.style.tag("Format"),
            self.style.value(&info.format)
        )?;
        writeln!(
            f,
            "  {}: {}",
            self.style.tag("Size"),
            self.style.value(&format!("{} x {}", info.width, info.height))
        )?;
        writeln!(
            f,
            "  {}: {}",
            self.style.tag("Mode"),
            self.style.value(&info.mode)
        )?;
        let details = info
            .info
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            f,
            "  {}: {}",
            self.style.tag("Info"),
            self.style.value(&details)
        )?;
        writeln!(
            f,
            "{}",
            self.style.warn(
                "EXIF data extraction is primarily supported for JPEG images. \
                 Other formats may not have EXIF data."
            )
        )
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inspection {
            Inspection::Exif { format, outcome } => {
                self.write_format_line(f, format)?;
                match outcome {
                    ExifOutcome::NoData => {
                        writeln!(f, "{}", self.style.warn("No EXIF data found."))
                    }
                    ExifOutcome::Failed(notice) => {
                        writeln!(f, "{}", self.style.warn(notice))
                    }
                    ExifOutcome::Parsed(report) => self.write_exif(f, report),
                }
            }
            Inspection::Basic(info) => self.write_basic(f, info),
            Inspection::Unsupported { format } => {
                self.write_format_line(f, format)?;
                writeln!(
                    f,
                    "{}",
                    self.style.warn(&format!(
                        "Unsupported image format: {}. \
                         EXIF data extraction is only supported for JPEG images.",
                        format
                    ))
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::build_report;
    use crate::extraction::{tags, MetadataDict};
    use crate::types::{Rational, Scalar, TagValue};

    fn render(inspection: &Inspection) -> String {
        format!("{}", TextReport::new(inspection, Style::plain()))
    }

    fn sample_dict() -> MetadataDict {
        let mut dict = MetadataDict::default();
        dict.insert(
            IfdSection::General,
            0x010f, // Make
            TagValue::Bytes(b"Apple".to_vec()),
        );
        dict.insert(
            IfdSection::Camera,
            0x8827, // PhotographicSensitivity
            TagValue::Scalar(Scalar::Int(200)),
        );
        dict.insert(
            IfdSection::Camera,
            tags::MAKER_NOTE,
            TagValue::Bytes(vec![0xff, 0xfe]),
        );
        dict.insert(
            IfdSection::Gps,
            tags::GPS_LATITUDE_REF,
            TagValue::Bytes(b"N".to_vec()),
        );
        dict.insert(
            IfdSection::Gps,
            tags::GPS_LATITUDE,
            TagValue::Sequence(vec![
                Scalar::Rational(Rational::new(48, 1)),
                Scalar::Rational(Rational::new(51, 1)),
                Scalar::Rational(Rational::new(29, 1)),
            ]),
        );
        dict.insert(
            IfdSection::Gps,
            tags::GPS_LONGITUDE_REF,
            TagValue::Bytes(b"E".to_vec()),
        );
        dict.insert(
            IfdSection::Gps,
            tags::GPS_LONGITUDE,
            TagValue::Sequence(vec![
                Scalar::Rational(Rational::new(2, 1)),
                Scalar::Rational(Rational::new(17, 1)),
                Scalar::Rational(Rational::new(40, 1)),
            ]),
        );
        dict
    }

    #[test]
    fn test_parsed_report_layout() {
        let report = build_report(&sample_dict()).unwrap();
        let inspection = Inspection::Exif {
            format: "JPEG".to_string(),
            outcome: ExifOutcome::Parsed(Box::new(report)),
        };
        let output = render(&inspection);

        assert!(output.starts_with("Image format: JPEG\n"));
        assert!(output.contains("General Information\n  Make: Apple"));
        assert!(output.contains("Camera Settings\n  PhotographicSensitivity: 200"));
        assert!(!output.contains("MakerNote"));
        assert!(output.contains("  Latitude: 48.858056 N"));
        assert!(output
            .contains("  Google Maps URL: https://www.google.com/maps?q=48.858056,2.294444"));
        // absent sections report the notice in place of entries
        assert!(output.contains("Interop Data\nNo data found."));
        assert!(output.contains("1st IFD Data\nNo data found."));
        assert!(!output.contains("Thumbnail Data"));
    }

    #[test]
    fn test_sections_print_in_fixed_order() {
        let report = build_report(&sample_dict()).unwrap();
        let inspection = Inspection::Exif {
            format: "JPEG".to_string(),
            outcome: ExifOutcome::Parsed(Box::new(report)),
        };
        let output = render(&inspection);

        let positions: Vec<usize> = [
            "General Information",
            "Camera Settings",
            "GPS Data",
            "Interop Data",
            "1st IFD Data",
        ]
        .iter()
        .map(|header| output.find(header).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_thumbnail_notice() {
        let mut dict = sample_dict();
        dict.insert(
            IfdSection::SecondaryFrame,
            tags::JPEG_INTERCHANGE_FORMAT,
            TagValue::Scalar(Scalar::Int(2048)),
        );
        let report = build_report(&dict).unwrap();
        let inspection = Inspection::Exif {
            format: "JPEG".to_string(),
            outcome: ExifOutcome::Parsed(Box::new(report)),
        };
        let output = render(&inspection);
        assert!(output.contains("Thumbnail Data"));
        assert!(output.contains("not parsed due to its binary nature"));
    }

    #[test]
    fn test_no_data_notice() {
        let inspection = Inspection::Exif {
            format: "JPEG".to_string(),
            outcome: ExifOutcome::NoData,
        };
        assert_eq!(render(&inspection), "Image format: JPEG\nNo EXIF data found.\n");
    }

    #[test]
    fn test_extraction_failure_notice() {
        let inspection = Inspection::Exif {
            format: "JPEG".to_string(),
            outcome: ExifOutcome::Failed(
                "Error extracting EXIF data: invalid TIFF header".to_string(),
            ),
        };
        let output = render(&inspection);
        assert_eq!(
            output,
            "Image format: JPEG\nError extracting EXIF data: invalid TIFF header\n"
        );
    }

    #[test]
    fn test_basic_info_layout() {
        let inspection = Inspection::Basic(BasicInfo {
            format: "PNG".to_string(),
            width: 800,
            height: 600,
            mode: "RGB".to_string(),
            info: vec![("channels".to_string(), "3".to_string())],
        });
        let output = render(&inspection);
        assert!(output.starts_with("Image format: PNG\n"));
        assert!(output.contains("  Size: 800 x 600"));
        assert!(output.contains("  Mode: RGB"));
        assert!(output.contains("  Info: channels=3"));
        assert!(output.contains("EXIF data extraction is primarily supported for JPEG images"));
    }

    #[test]
    fn test_unsupported_format_notice() {
        let inspection = Inspection::Unsupported {
            format: "GIF".to_string(),
        };
        let output = render(&inspection);
        assert!(output.contains("Unsupported image format: GIF."));
    }
}
