use crate::extraction::tags;
use crate::types::{IfdSection, TagValue};
use exif::{Context, Exif, In};
use serde::Serialize;
use std::collections::BTreeMap;

/// One printable tag line: resolved name and formatted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub name: String,
    pub value: String,
}

/// Decoded tag dictionary: section → numeric tag id → raw value
///
/// Built once per run from the parsed EXIF block and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct MetadataDict {
    sections: BTreeMap<IfdSection, BTreeMap<u16, TagValue>>,
}

impl MetadataDict {
    /// Builds the dictionary from a parsed EXIF block
    pub fn from_exif(exif: &Exif) -> Self {
        let mut dict = MetadataDict::default();
        for field in exif.fields() {
            if let Some(section) = classify(field.ifd_num, field.tag.context()) {
                dict.insert(section, field.tag.1, TagValue::from_exif(&field.value));
            }
        }
        dict
    }

    /// Inserts a raw value under a section
    pub fn insert(&mut self, section: IfdSection, id: u16, value: TagValue) {
        self.sections.entry(section).or_default().insert(id, value);
    }

    /// Raw tag map for a section, if the image carried one
    pub fn section(&self, section: IfdSection) -> Option<&BTreeMap<u16, TagValue>> {
        self.sections.get(&section)
    }

    /// Printable entries for a section
    ///
    /// Tag names are resolved through the static tag table; ids the table
    /// does not know keep their raw numeric id as the name. The MakerNote
    /// blob in the camera section is skipped. Returns `None` when the
    /// section is absent from the dictionary.
    pub fn section_entries(&self, section: IfdSection) -> Option<Vec<TagEntry>> {
        let tag_map = self.section(section)?;
        let mut entries = Vec::with_capacity(tag_map.len());
        for (&id, value) in tag_map {
            if section == IfdSection::Camera && id == tags::MAKER_NOTE {
                continue;
            }
            let name = tags::tag_name(section, id).unwrap_or_else(|| id.to_string());
            entries.push(TagEntry {
                name,
                value: value.to_string(),
            });
        }
        Some(entries)
    }
}

/// Assigns a parsed field to a dictionary section
///
/// Fields of the thumbnail image go to the secondary frame regardless of
/// context; further IFDs (some TIFF-based RAW formats carry them) are
/// not reported.
fn classify(ifd_num: In, context: Context) -> Option<IfdSection> {
    if ifd_num == In::THUMBNAIL {
        return Some(IfdSection::SecondaryFrame);
    }
    if ifd_num != In::PRIMARY {
        return None;
    }
    match context {
        Context::Tiff => Some(IfdSection::General),
        Context::Exif => Some(IfdSection::Camera),
        Context::Gps => Some(IfdSection::Gps),
        Context::Interop => Some(IfdSection::Interop),
        _ => None,
    }
}
