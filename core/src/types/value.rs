use crate::error::{ExifcatError, Result};
use std::fmt;

/// A numerator/denominator pair as stored in EXIF rational fields
///
/// Signed storage so that both RATIONAL and SRATIONAL source values
/// fit in one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub num: i64,
    pub denom: i64,
}

impl Rational {
    /// Creates a new Rational
    pub fn new(num: i64, denom: i64) -> Self {
        Self { num, denom }
    }

    /// Converts to a decimal value
    ///
    /// # Errors
    ///
    /// Returns an error if the denominator is zero. Malformed files do
    /// ship such values, and they must surface as a reportable failure
    /// rather than a NaN or a panic.
    pub fn to_decimal(self) -> Result<f64> {
        if self.denom == 0 {
            return Err(ExifcatError::InvalidValue(format!(
                "zero denominator in rational {}/{}",
                self.num, self.denom
            )));
        }
        Ok(self.num as f64 / self.denom as f64)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

/// A single primitive tag value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Rational(Rational),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Rational(r) => write!(f, "{}", r),
        }
    }
}

/// A raw tag value from the metadata dictionary
///
/// Closed set of shapes a tag can take: a byte run (ASCII and undefined
/// fields), a single scalar, or a sequence of scalars. The `Display`
/// implementation is the value formatter: it never fails, degrading
/// undecodable byte runs to a `<N bytes>` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Bytes(Vec<u8>),
    Scalar(Scalar),
    Sequence(Vec<Scalar>),
}

impl TagValue {
    /// Converts a value produced by the EXIF parser into the closed shape set.
    ///
    /// Single-element numeric values collapse to `Scalar`; multi-valued
    /// ones keep their order as a `Sequence`.
    pub fn from_exif(value: &exif::Value) -> Self {
        use exif::Value;
        match value {
            Value::Byte(v) => TagValue::Bytes(v.clone()),
            Value::Undefined(v, _) => TagValue::Bytes(v.clone()),
            Value::Ascii(lines) => TagValue::Bytes(lines.join(&b' ')),
            Value::Short(v) => collapse(v.iter().map(|&x| Scalar::Int(x.into())).collect()),
            Value::Long(v) => collapse(v.iter().map(|&x| Scalar::Int(x.into())).collect()),
            Value::SByte(v) => collapse(v.iter().map(|&x| Scalar::Int(x.into())).collect()),
            Value::SShort(v) => collapse(v.iter().map(|&x| Scalar::Int(x.into())).collect()),
            Value::SLong(v) => collapse(v.iter().map(|&x| Scalar::Int(x.into())).collect()),
            Value::Float(v) => collapse(v.iter().map(|&x| Scalar::Float(x.into())).collect()),
            Value::Double(v) => collapse(v.iter().map(|&x| Scalar::Float(x)).collect()),
            Value::Rational(v) => collapse(
                v.iter()
                    .map(|r| Scalar::Rational(Rational::new(r.num.into(), r.denom.into())))
                    .collect(),
            ),
            Value::SRational(v) => collapse(
                v.iter()
                    .map(|r| Scalar::Rational(Rational::new(r.num.into(), r.denom.into())))
                    .collect(),
            ),
            _ => TagValue::Bytes(Vec::new()),
        }
    }

    /// Single rational value, if this tag holds exactly one
    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            TagValue::Scalar(Scalar::Rational(r)) => Some(*r),
            _ => None,
        }
    }

    /// Degrees/minutes/seconds triple, if this tag holds exactly three rationals
    pub fn as_rational_triple(&self) -> Option<[Rational; 3]> {
        if let TagValue::Sequence(items) = self {
            if let [Scalar::Rational(d), Scalar::Rational(m), Scalar::Rational(s)] = items[..] {
                return Some([d, m, s]);
            }
        }
        None
    }

    /// Decoded text for byte-run values (reference letters, date stamps)
    pub fn as_text(&self) -> Option<String> {
        if let TagValue::Bytes(bytes) = self {
            let text = decode_bytes(bytes);
            if !text.is_empty() {
                return Some(text);
            }
        }
        None
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Bytes(bytes) => {
                let text = decode_bytes(bytes);
                if text.is_empty() && !bytes.is_empty() {
                    write!(f, "<{} bytes>", bytes.len())
                } else {
                    f.write_str(&text)
                }
            }
            TagValue::Scalar(scalar) => write!(f, "{}", scalar),
            TagValue::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

/// Decodes a byte run as UTF-8, skipping undecodable bytes and NUL padding.
fn decode_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER && c != '\0')
        .collect::<String>()
        .trim()
        .to_string()
}

fn collapse(mut items: Vec<Scalar>) -> TagValue {
    if items.len() == 1 {
        TagValue::Scalar(items.remove(0))
    } else {
        TagValue::Sequence(items)
    }
}
