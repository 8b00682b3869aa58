//! Fast-path Tokenizer: a single left-to-right pass over a normalized
//! element string.
//!
//! State machine: `Start -> ReadAI -> (FixedValue | VariableValue) ->
//! (Separator | End | AmbiguityDetected)`. `UnknownAI` records an error and
//! skips to the next sentinel or end rather than aborting the whole pass —
//! the same "keep going, tag the damage" posture the validators take.
//!
//! Offsets throughout are byte offsets. AI codes, the sentinel, and the
//! digit/CSET82 value bytes this component deals with are single-byte
//! ASCII, so byte offsets and character offsets coincide for any input
//! that actually conforms to the AI specs being matched.

use crate::ai::{Dictionary, DICTIONARY};
use crate::normalize::SENTINEL;
use crate::options::DecodeOptions;
use crate::result::{DecodedElement, DiagnosticTag};
use crate::validators;

const SENTINEL_BYTE: u8 = SENTINEL as u8;

/// Elements and top-level diagnostics accumulated by a tokenizer pass,
/// whether it ran to completion or was handed off as a reconstructor seed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenizeResult {
    pub elements: Vec<DecodedElement>,
    pub errors: Vec<DiagnosticTag>,
    pub warnings: Vec<DiagnosticTag>,
}

/// Outcome of a tokenizer pass.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenizeOutcome {
    /// The pass consumed the entire input without structural ambiguity.
    Complete(TokenizeResult),
    /// A variable-length value admitted a recognizable continuation AI with
    /// no sentinel to disambiguate; `seed` holds everything decided so far
    /// and `position` is where the reconstructor should resume (the start
    /// of the ambiguous AI, so it may reconsider shorter AI candidates too).
    Ambiguous {
        seed: TokenizeResult,
        position: usize,
    },
}

/// Runs the fast-path tokenizer over `normalized`.
#[must_use]
pub fn tokenize(normalized: &str, options: &DecodeOptions) -> TokenizeOutcome {
    let dict = &*DICTIONARY;
    let bytes = normalized.as_bytes();
    let len = bytes.len();
    let mut pos = 0usize;
    let mut elements = Vec::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    while pos < len {
        if bytes[pos] == SENTINEL_BYTE {
            pos += 1;
            continue;
        }

        let Some(m) = dict.longest_match(normalized, pos) else {
            errors.push(DiagnosticTag::UnknownAi);
            pos = find_sentinel(bytes, pos).map_or(len, |p| p + 1);
            continue;
        };

        let ai_start = pos;
        let value_start = pos + m.len;
        let spec = m.spec;

        if let Some(fixed) = spec.fixed_length {
            let fixed = fixed as usize;
            if value_start + fixed > len {
                errors.push(DiagnosticTag::TruncatedData);
                let raw_value = normalized[value_start..].to_owned();
                push_element(&mut elements, spec, raw_value, (ai_start, len), options);
                break;
            }
            let end = value_start + fixed;
            let raw_value = normalized[value_start..end].to_owned();
            push_element(&mut elements, spec, raw_value, (ai_start, end), options);
            pos = end;
            if pos < len && bytes[pos] == SENTINEL_BYTE {
                warnings.push(DiagnosticTag::ExtraSeparator);
                pos += 1;
            }
        } else {
            let min_len = spec.min_length as usize;
            let max_len = spec.max_length as usize;
            let sentinel_pos = find_sentinel(bytes, value_start);
            let boundary = sentinel_pos.unwrap_or(len);

            if sentinel_pos.is_none() {
                if let Some(split) =
                    detect_continuation(dict, normalized, value_start, min_len, max_len, boundary)
                {
                    log::debug!(
                        "ambiguous variable-length value at {value_start}, continuation split at +{split}"
                    );
                    return TokenizeOutcome::Ambiguous {
                        seed: TokenizeResult {
                            elements,
                            errors,
                            warnings,
                        },
                        position: ai_start,
                    };
                }
            }

            let raw_value = normalized[value_start..boundary].to_owned();
            push_element(&mut elements, spec, raw_value, (ai_start, boundary), options);
            pos = sentinel_pos.map_or(boundary, |p| p + 1);
        }
    }

    TokenizeOutcome::Complete(TokenizeResult {
        elements,
        errors,
        warnings,
    })
}

fn push_element(
    elements: &mut Vec<DecodedElement>,
    spec: &crate::ai::AiSpec,
    raw_value: String,
    span: (usize, usize),
    options: &DecodeOptions,
) {
    let errs = validators::validate(spec, &raw_value, options.century_pivot);
    let typed = validators::typed_value(spec, &raw_value, options.century_pivot);
    elements.push(DecodedElement::new(spec.code.clone(), raw_value, typed, errs, span));
}

fn find_sentinel(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == SENTINEL_BYTE).map(|i| i + from)
}

/// Is there a split point `l` in `[min_len, max_len)` (strictly short of the
/// to-end baseline) where `input[value_start + l..]` begins a dictionary AI
/// prefix that itself admits a conforming value (enough bytes remain for
/// its own declared length)? If so the value's true length is ambiguous: a
/// shorter read would also be valid, and the remainder would start a
/// recognizable, satisfiable AI.
fn detect_continuation(
    dict: &Dictionary,
    input: &str,
    value_start: usize,
    min_len: usize,
    max_len: usize,
    boundary: usize,
) -> Option<usize> {
    let full = boundary - value_start;
    if full == 0 {
        return None;
    }
    let upper = max_len.min(full.saturating_sub(1));
    for l in min_len..=upper {
        let split_pos = value_start + l;
        if split_pos >= boundary {
            break;
        }
        let Some(m) = dict.longest_match(input, split_pos) else {
            continue;
        };
        let remaining = boundary - (split_pos + m.len);
        let fits = match m.spec.fixed_length {
            Some(fixed) => remaining >= fixed as usize,
            None => remaining >= m.spec.min_length as usize,
        };
        if fits {
            return Some(l);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(outcome: TokenizeOutcome) -> TokenizeResult {
        match outcome {
            TokenizeOutcome::Complete(r) => r,
            TokenizeOutcome::Ambiguous { .. } => panic!("expected Complete, got Ambiguous"),
        }
    }

    #[test]
    fn fixed_then_variable_to_end_round_trips() {
        let opts = DecodeOptions::default();
        let input = "0106286740000249\u{1D}10ABC";
        let r = complete(tokenize(input, &opts));
        assert_eq!(r.elements.len(), 2);
        assert_eq!(r.elements[0].ai, "01");
        assert_eq!(r.elements[0].raw_value, "06286740000249");
        assert_eq!(r.elements[1].ai, "10");
        assert_eq!(r.elements[1].raw_value, "ABC");
        assert!(r.errors.is_empty());
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn extra_separator_after_fixed_length_is_tolerated() {
        let opts = DecodeOptions::default();
        let input = "0106286740000249\u{1D}";
        let r = complete(tokenize(input, &opts));
        assert_eq!(r.elements.len(), 1);
        assert_eq!(r.warnings, vec![DiagnosticTag::ExtraSeparator]);
    }

    #[test]
    fn unknown_ai_is_skipped_to_next_sentinel() {
        let opts = DecodeOptions::default();
        let input = "88ZZZ\u{1D}10ABC";
        let r = complete(tokenize(input, &opts));
        assert_eq!(r.errors, vec![DiagnosticTag::UnknownAi]);
        assert_eq!(r.elements.len(), 1);
        assert_eq!(r.elements[0].ai, "10");
    }

    #[test]
    fn variable_length_with_continuation_split_is_ambiguous() {
        let opts = DecodeOptions::default();
        let input = "21ABCDEF17270214";
        match tokenize(input, &opts) {
            TokenizeOutcome::Ambiguous { position, seed } => {
                assert_eq!(position, 0);
                assert!(seed.elements.is_empty());
            }
            TokenizeOutcome::Complete(_) => panic!("expected ambiguity"),
        }
    }

    #[test]
    fn variable_length_to_end_without_continuation_is_final() {
        let opts = DecodeOptions::default();
        let input = "21ABCDEFGHIJ";
        let r = complete(tokenize(input, &opts));
        assert_eq!(r.elements.len(), 1);
        assert_eq!(r.elements[0].raw_value, "ABCDEFGHIJ");
    }

    #[test]
    fn truncated_fixed_length_value_is_flagged() {
        let opts = DecodeOptions::default();
        let input = "010628674000"; // AI 01 needs 14 digits, only 10 remain
        let r = complete(tokenize(input, &opts));
        assert_eq!(r.errors, vec![DiagnosticTag::TruncatedData]);
        assert_eq!(r.elements.len(), 1);
    }
}
