//! GS1 Decoder Core: a pure function that decodes a GS1 element string
//! (concatenated Application Identifier/value pairs) into a structured,
//! validated result — the AI dictionary, the fast-path tokenizer, and the
//! beam-search reconstructor for separator-stripped input.

pub mod ai;
pub mod format;
pub mod normalize;
pub mod options;
mod reconstruct;
pub mod result;
mod tokenizer;
pub mod validators;

pub use options::DecodeOptions;
pub use result::{Alternative, DecodedElement, DecodeResult, DiagnosticTag, TypedValue};

use result::DiagnosticTag::{AmbiguousParse, InvalidFormat};
use tokenizer::TokenizeOutcome;

/// Decodes `raw` into a [`DecodeResult`]. Every call is independent; there
/// is no shared mutable state on the hot path beyond the read-only
/// [`ai::DICTIONARY`].
#[must_use]
pub fn decode(raw: &str, options: DecodeOptions) -> DecodeResult {
    let normalized = normalize::normalize(raw, &options);

    if normalized.normalized.is_empty() {
        return DecodeResult {
            raw: raw.to_owned(),
            normalized: normalized.normalized,
            symbology: normalized.symbology,
            separators_present: normalized.separators_present,
            elements: Vec::new(),
            errors: vec![InvalidFormat],
            warnings: Vec::new(),
            confidence: 0.0,
            alternatives: Vec::new(),
        };
    }

    let (elements, mut errors, warnings, mut confidence, alternatives) =
        match tokenizer::tokenize(&normalized.normalized, &options) {
            TokenizeOutcome::Complete(result) => {
                (result.elements, result.errors, result.warnings, 1.0, Vec::new())
            }
            TokenizeOutcome::Ambiguous { seed, position } => {
                if options.allow_ambiguous {
                    let out =
                        reconstruct::reconstruct(&normalized.normalized, seed, position, &options);
                    (out.elements, out.errors, out.warnings, out.confidence, out.alternatives)
                } else {
                    let mut errors = seed.errors;
                    errors.push(AmbiguousParse);
                    (seed.elements, errors, seed.warnings, 0.0, Vec::new())
                }
            }
        };

    if options.strict_mode && elements.iter().any(|e| !e.valid) {
        log::debug!("strict_mode: element-level validation failure forces confidence=0");
        errors.push(InvalidFormat);
        confidence = 0.0;
    }

    DecodeResult {
        raw: raw.to_owned(),
        normalized: normalized.normalized,
        symbology: normalized.symbology,
        separators_present: normalized.separators_present,
        elements,
        errors,
        warnings,
        confidence,
        alternatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_invalid_format_with_zero_confidence() {
        let result = decode("", DecodeOptions::default());
        assert!(result.elements.is_empty());
        assert_eq!(result.errors, vec![DiagnosticTag::InvalidFormat]);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn well_formed_input_with_sentinels_round_trips() {
        let input = "0106286740000249\u{1D}10ABC";
        let result = decode(input, DecodeOptions::default());
        assert_eq!(result.elements.len(), 2);
        assert_eq!(result.elements[0].ai, "01");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn strict_mode_zeroes_confidence_on_element_failure() {
        let opts = DecodeOptions {
            strict_mode: true,
            ..DecodeOptions::default()
        };
        // AI 01 value with a deliberately wrong check digit, terminated by a
        // sentinel so the tokenizer takes the fast path (no ambiguity).
        let input = "0106286740000240\u{1D}10ABC";
        let result = decode(input, opts);
        assert_eq!(result.confidence, 0.0);
        assert!(result.errors.contains(&DiagnosticTag::InvalidFormat));
    }
}
