//! AI Dictionary: the compiled, read-only catalogue of Application
//! Identifier specifications, indexed by a digit trie for longest-prefix
//! lookup.

mod table;
mod trie;

use std::sync::LazyLock;

pub use trie::Dictionary;

/// GS1 character set for a value string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `[0-9]` only.
    Numeric,
    /// GS1 CSET82 (printable ASCII minus space and a dozen symbol glyphs).
    Alphanumeric,
}

/// Recognized date encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// Exactly 6 digits, day 01..daysInMonth.
    YyMmDd,
    /// As `YyMmDd`, but day `00` means "day unspecified".
    YyMmD0,
    /// Explicit 4-digit year, otherwise as `YyMmDd`.
    YyyyMmDd,
    /// `YyMmDd` plus a 2-digit hour 00..23.
    YyMmDdHh,
}

/// Scoring/absorption priority class used by the reconstructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityClass {
    /// 01, 10, 11, 13, 15, 17, 21, and similar identity/traceability AIs.
    Core,
    /// 400-series, 37, 30, measurement AIs, and similar.
    General,
    /// 90-99, reserved for company-internal use.
    Internal,
}

/// One entry in the AI Dictionary.
#[derive(Debug, Clone)]
pub struct AiSpec {
    pub code: String,
    pub title: &'static str,
    pub is_fixed_length: bool,
    pub min_length: u8,
    pub max_length: u8,
    pub fixed_length: Option<u8>,
    pub data_type: DataType,
    pub check_digit: bool,
    pub date_format: Option<DateFormat>,
    pub decimal_position: Option<u8>,
    pub required_with: &'static [&'static str],
    pub exclusive_with: &'static [&'static str],
    pub priority_class: PriorityClass,
}

impl AiSpec {
    /// Whether `code` is in the reserved company-internal range 90..=99.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self.priority_class, PriorityClass::Internal)
    }
}

/// The process-wide dictionary: built once from the static table at first
/// use and never mutated thereafter, shared read-only by every call.
pub static DICTIONARY: LazyLock<Dictionary> = LazyLock::new(Dictionary::build);
