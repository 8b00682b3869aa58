//! Normalizer: symbology-prefix stripping and separator-glyph
//! canonicalization.

use crate::options::{DecodeOptions, SeparatorGlyphs};

/// The sentinel byte all recognized separator glyphs canonicalize to:
/// ASCII 0x1D, the GS1-128 field separator (GS).
pub const SENTINEL: char = '\u{1D}';

/// Recognized ISO/IEC 15424 symbology identifier prefixes. Order matters:
/// `]e0`/`]e1`/`]e2` share a common first two bytes with no other prefix,
/// so a simple linear scan is sufficient and unambiguous.
const SYMBOLOGY_PREFIXES: &[(&str, &str)] = &[
    ("]d2", "GS1 DataMatrix"),
    ("]C1", "GS1-128"),
    ("]e0", "GS1 DataBar"),
    ("]e1", "GS1 DataBar"),
    ("]e2", "GS1 DataBar"),
    ("]Q3", "GS1 QR"),
];

/// Result of normalizing a raw element string.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub normalized: String,
    pub symbology: Option<String>,
    pub separators_present: bool,
}

/// Strips an optional symbology prefix, trims ASCII whitespace, and
/// canonicalizes separator glyphs to [`SENTINEL`].
#[must_use]
pub fn normalize(raw: &str, options: &DecodeOptions) -> Normalized {
    let mut symbology = None;
    let mut rest = raw;
    for &(prefix, name) in SYMBOLOGY_PREFIXES {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            symbology = Some(name);
            rest = stripped;
            log::trace!("stripped symbology prefix {prefix} ({name})");
            break;
        }
    }

    let trimmed = rest.trim_matches(|c: char| c.is_ascii_whitespace());
    let separators_present = detect_separators(trimmed, options.separator_glyphs);

    let normalized = if options.normalize_separators {
        canonicalize_separators(trimmed, options.separator_glyphs)
    } else {
        trimmed.to_owned()
    };

    Normalized {
        normalized,
        symbology: symbology.map(str::to_owned),
        separators_present,
    }
}

fn detect_separators(input: &str, glyphs: SeparatorGlyphs) -> bool {
    let mut remaining = input;
    while !remaining.is_empty() {
        if glyphs.contains(SeparatorGlyphs::ANGLE_GS) && remaining.starts_with("<GS>") {
            return true;
        }
        let ch = remaining.chars().next().expect("non-empty");
        if is_separator_char(ch, glyphs) {
            return true;
        }
        remaining = &remaining[ch.len_utf8()..];
    }
    false
}

fn is_separator_char(ch: char, glyphs: SeparatorGlyphs) -> bool {
    (ch == '\u{1D}' && glyphs.contains(SeparatorGlyphs::GS))
        || (ch == '~' && glyphs.contains(SeparatorGlyphs::TILDE))
        || (ch == '|' && glyphs.contains(SeparatorGlyphs::PIPE))
        || (ch == '^' && glyphs.contains(SeparatorGlyphs::CARET))
}

fn canonicalize_separators(input: &str, glyphs: SeparatorGlyphs) -> String {
    let mut out = String::with_capacity(input.len());
    let mut remaining = input;
    while !remaining.is_empty() {
        if glyphs.contains(SeparatorGlyphs::ANGLE_GS) && remaining.starts_with("<GS>") {
            out.push(SENTINEL);
            log::trace!("canonicalized <GS> sequence to sentinel");
            remaining = &remaining[4..];
            continue;
        }
        let ch = remaining.chars().next().expect("non-empty");
        if is_separator_char(ch, glyphs) {
            out.push(SENTINEL);
            log::trace!("canonicalized separator glyph {ch:?} to sentinel");
        } else {
            out.push(ch);
        }
        remaining = &remaining[ch.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_datamatrix_prefix() {
        let opts = DecodeOptions::default();
        let n = normalize("]d20101234", &opts);
        assert_eq!(n.symbology.as_deref(), Some("GS1 DataMatrix"));
        assert_eq!(n.normalized, "0101234");
    }

    #[test]
    fn no_prefix_leaves_symbology_none() {
        let opts = DecodeOptions::default();
        let n = normalize("0101234", &opts);
        assert_eq!(n.symbology, None);
    }

    #[test]
    fn canonicalizes_all_glyphs_to_sentinel() {
        let opts = DecodeOptions::default();
        let n = normalize("10ABC~21XYZ|17280430^99", &opts);
        assert_eq!(n.normalized, "10ABC\u{1D}21XYZ\u{1D}17280430\u{1D}99");
        assert!(n.separators_present);
    }

    #[test]
    fn angle_gs_sequence_is_one_sentinel() {
        let opts = DecodeOptions::default();
        let n = normalize("10ABC<GS>21XYZ", &opts);
        assert_eq!(n.normalized, "10ABC\u{1D}21XYZ");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let opts = DecodeOptions::default();
        let n = normalize("  0101234 \n", &opts);
        assert_eq!(n.normalized, "0101234");
    }

    #[test]
    fn separators_present_without_normalizing() {
        let opts = DecodeOptions {
            normalize_separators: false,
            ..DecodeOptions::default()
        };
        let n = normalize("10ABC~21XYZ", &opts);
        assert!(n.separators_present);
        assert_eq!(n.normalized, "10ABC~21XYZ");
    }

    #[test]
    fn prefix_stripping_is_case_sensitive() {
        let opts = DecodeOptions::default();
        let n = normalize("]D20101234", &opts);
        assert_eq!(n.symbology, None);
    }
}
