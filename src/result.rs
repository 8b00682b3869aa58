//! The decode result data model.

use std::fmt;

use num_enum::TryFromPrimitive;

/// Stable, tagged diagnostic codes. A single flat enum covers both
/// top-level (`DecodeResult::errors`/`warnings`) and per-element
/// (`DecodedElement::errors`) diagnostics, so callers only need one
/// vocabulary of failure modes. `num_enum::TryFromPrimitive` lets a
/// downstream consumer persist the stable numeric code independent of
/// this crate's in-memory representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u8)]
pub enum DiagnosticTag {
    MissingSeparator = 1,
    AmbiguousParse = 2,
    UnknownAi = 3,
    InvalidLength = 4,
    InvalidFormat = 5,
    InvalidCheckDigit = 6,
    InvalidDate = 7,
    ExtraSeparator = 8,
    InvalidCharacters = 9,
    TruncatedData = 10,
    CheckDigitFailure = 11,
}

impl fmt::Display for DiagnosticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingSeparator => "missing separator",
            Self::AmbiguousParse => "ambiguous parse",
            Self::UnknownAi => "unknown AI",
            Self::InvalidLength => "invalid length",
            Self::InvalidFormat => "invalid format",
            Self::InvalidCheckDigit => "invalid check digit",
            Self::InvalidDate => "invalid date",
            Self::ExtraSeparator => "extra separator",
            Self::InvalidCharacters => "invalid characters",
            Self::TruncatedData => "truncated data",
            Self::CheckDigitFailure => "check digit failure",
        })
    }
}

/// The decoded, richer interpretation of a value string.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// No richer interpretation applies, or parsing into one failed.
    Text(String),
    /// A plain numeric AI with no date/decimal interpretation.
    Integer(i64),
    /// A weight/measure AI (the `310n`..`369n` family).
    Decimal { value: f64, formatted: String },
    /// A date AI. `day_unspecified` marks a `YYMMD0` value whose day
    /// digits were `00` (a day-unspecified date).
    Date {
        year: u16,
        month: u8,
        day: u8,
        day_unspecified: bool,
    },
}

/// One recognized AI occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedElement {
    pub ai: String,
    pub raw_value: String,
    pub typed_value: TypedValue,
    pub valid: bool,
    pub errors: Vec<DiagnosticTag>,
    /// `[start, end)` offsets into the normalized input.
    pub span: (usize, usize),
}

impl DecodedElement {
    #[must_use]
    pub fn new(
        ai: String,
        raw_value: String,
        typed_value: TypedValue,
        errors: Vec<DiagnosticTag>,
        span: (usize, usize),
    ) -> Self {
        let valid = errors.is_empty();
        Self {
            ai,
            raw_value,
            typed_value,
            valid,
            errors,
            span,
        }
    }
}

/// One alternative parse produced by the reconstructor, with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub elements: Vec<DecodedElement>,
    pub score: f64,
}

/// The top-level decode result.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeResult {
    pub raw: String,
    pub normalized: String,
    pub symbology: Option<String>,
    pub separators_present: bool,
    pub elements: Vec<DecodedElement>,
    pub errors: Vec<DiagnosticTag>,
    pub warnings: Vec<DiagnosticTag>,
    pub confidence: f64,
    pub alternatives: Vec<Alternative>,
}
