//! Beam-Search Reconstructor: resolves the element boundaries the
//! fast-path tokenizer could not, by exploring length hypotheses under an
//! additive scoring function.
//!
//! The search runs as an explicit width-capped beam rather than
//! call-stack recursion, so fair tiebreaking across same-depth states is
//! trivial and termination is bounded by `max_depth` regardless of input
//! shape.

mod score;

use std::cmp::Ordering;

use crate::ai::DICTIONARY;
use crate::normalize::SENTINEL;
use crate::options::DecodeOptions;
use crate::result::{Alternative, DecodedElement, DiagnosticTag, TypedValue};
use crate::tokenizer::TokenizeResult;
use crate::validators;

const SENTINEL_BYTE: u8 = SENTINEL as u8;

/// `60/ln(0.85/0.15)`: chosen so a 60-point score gap between the top two
/// parses maps to a confidence of roughly 0.85.
const CONFIDENCE_TAU: f64 = 34.588;

/// Result of the reconstructor: the winning parse plus its alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructOutput {
    pub elements: Vec<DecodedElement>,
    pub errors: Vec<DiagnosticTag>,
    pub warnings: Vec<DiagnosticTag>,
    pub confidence: f64,
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone)]
struct BeamState {
    pos: usize,
    new_elements: Vec<DecodedElement>,
    score: f64,
}

/// Runs the beam search starting at `position` (the tokenizer's seed
/// position), then assembles `seed.elements ++ winning_tail` into a full
/// result.
#[must_use]
pub fn reconstruct(
    normalized: &str,
    seed: TokenizeResult,
    position: usize,
    options: &DecodeOptions,
) -> ReconstructOutput {
    let dict = &*DICTIONARY;
    let len = normalized.len();

    let mut frontier = vec![BeamState {
        pos: position,
        new_elements: Vec::new(),
        score: 0.0,
    }];
    let mut completed: Vec<BeamState> = Vec::new();
    let mut depth = 0;

    while !frontier.is_empty() && depth < options.max_depth {
        let mut next = Vec::new();
        for state in &frontier {
            if state.pos >= len {
                completed.push(state.clone());
                continue;
            }
            next.extend(expand(state, normalized, dict, options));
        }
        if next.is_empty() {
            break;
        }
        next.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        next.truncate(options.beam_width);
        frontier = next;
        depth += 1;
    }
    for state in frontier {
        if state.pos >= len {
            completed.push(state);
        }
    }

    if completed.is_empty() {
        log::debug!("reconstructor found no complete parse from position {position}");
        let mut errors = seed.errors.clone();
        errors.push(DiagnosticTag::InvalidFormat);
        return ReconstructOutput {
            elements: seed.elements,
            errors,
            warnings: seed.warnings,
            confidence: 0.0,
            alternatives: Vec::new(),
        };
    }

    let mut parses: Vec<(Vec<DecodedElement>, f64)> = completed
        .into_iter()
        .map(|state| {
            let mut elements = seed.elements.clone();
            elements.extend(state.new_elements);
            (elements, state.score)
        })
        .collect();

    for (elements, path_score) in &mut parses {
        *path_score += score::path_level_score(elements, options.vendor_internal_ai_whitelist);
    }
    let shortest = parses.iter().map(|(e, _)| e.len()).min().unwrap_or(0);
    for (elements, path_score) in &mut parses {
        if elements.len() == shortest {
            *path_score += 10.0;
        }
    }

    parses.sort_by(compare_parses);

    let confidence_raw = if parses.len() < 2 {
        1.0
    } else {
        sigmoid((parses[0].1 - parses[1].1) / CONFIDENCE_TAU)
    };

    let (mut elements, _) = parses[0].clone();
    let mut confidence = confidence_raw;

    let winner_has_day_unspecified = elements
        .iter()
        .any(|e| matches!(e.typed_value, TypedValue::Date { day_unspecified: true, .. }));
    if winner_has_day_unspecified {
        confidence = confidence.min(0.9);
    }

    // AI 01 present but no complete parse carries a valid check digit for
    // it: keep the best-effort parse but cap confidence and flag it.
    if let Some(ai01) = elements.iter_mut().find(|e| e.ai == "01") {
        if ai01.errors.contains(&DiagnosticTag::InvalidCheckDigit) {
            ai01.errors.push(DiagnosticTag::CheckDigitFailure);
            ai01.valid = false;
            confidence = confidence.min(0.4);
        }
    }

    let alternatives = parses
        .iter()
        .take(options.max_alternatives)
        .map(|(elements, path_score)| Alternative {
            elements: elements.clone(),
            score: *path_score,
        })
        .collect();

    ReconstructOutput {
        elements,
        errors: seed.errors,
        warnings: seed.warnings,
        confidence,
        alternatives,
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Score-descending, with the deterministic tiebreak chain applied
/// between parses within 10 points of each other.
fn compare_parses(a: &(Vec<DecodedElement>, f64), b: &(Vec<DecodedElement>, f64)) -> Ordering {
    if (a.1 - b.1).abs() > 10.0 {
        return b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal);
    }
    score::tiebreak_key(&a.0).cmp(&score::tiebreak_key(&b.0))
}

/// Expands one beam state into its successors: match every dictionary AI
/// prefix at the current position, enumerate each one's candidate value
/// lengths, validate, and score.
fn expand(
    state: &BeamState,
    normalized: &str,
    dict: &crate::ai::Dictionary,
    options: &DecodeOptions,
) -> Vec<BeamState> {
    let bytes = normalized.as_bytes();
    let len = bytes.len();
    let pos = state.pos;

    if bytes[pos] == SENTINEL_BYTE {
        let mut next = state.clone();
        next.pos += 1;
        next.score += 5.0;
        return vec![next];
    }

    let mut out = Vec::new();
    for m in dict.all_prefix_matches(normalized, pos) {
        let spec = m.spec;
        let value_start = pos + m.len;

        let candidate_lengths: Vec<usize> = match spec.fixed_length {
            Some(fixed) => vec![fixed as usize],
            None => {
                let min_len = spec.min_length as usize;
                let max_len = spec.max_length as usize;
                (min_len..=max_len)
                    .filter(|&l| {
                        let end = value_start + l;
                        end <= len
                            && (end == len
                                || bytes[end] == SENTINEL_BYTE
                                || dict.longest_match(normalized, end).is_some())
                    })
                    .collect()
            }
        };

        for l in candidate_lengths {
            let end = value_start + l;
            if end > len {
                continue;
            }
            let raw_value = normalized[value_start..end].to_owned();
            let errors = validators::validate(spec, &raw_value, options.century_pivot);

            // A structurally impossible date prunes the branch outright.
            // An invalid check digit does not: a best-effort parse still
            // carrying AI 01 needs to be able to surface so the fallback
            // path below can flag it instead of losing it entirely.
            if spec.date_format.is_some() && errors.contains(&DiagnosticTag::InvalidDate) {
                continue;
            }

            let typed_value = validators::typed_value(spec, &raw_value, options.century_pivot);
            let mut score = state.score + score::element_score(spec, &raw_value, &errors);
            let mut next_pos = end;
            if bytes.get(end) == Some(&SENTINEL_BYTE) {
                score += 5.0;
                next_pos += 1;
            }

            let mut new_elements = state.new_elements.clone();
            new_elements.push(DecodedElement::new(
                spec.code.clone(),
                raw_value,
                typed_value,
                errors,
                (pos, end),
            ));

            out.push(BeamState {
                pos: next_pos,
                new_elements,
                score,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_embedded_date_ambiguity_to_canonical_split() {
        // The S3-style fragment: AI 21 immediately followed by AI 17 with no
        // sentinel between them, seeded at position 0 with no prior elements.
        let normalized = "2164SSI54CE688QZ1727021410C601";
        let seed = TokenizeResult::default();
        let opts = DecodeOptions::default();
        let out = reconstruct(normalized, seed, 0, &opts);
        let ais: Vec<&str> = out.elements.iter().map(|e| e.ai.as_str()).collect();
        assert!(ais.contains(&"17"));
        assert!(ais.contains(&"10"));
        assert!(out.confidence > 0.0);
    }

    #[test]
    fn no_complete_parse_falls_back_to_invalid_format() {
        // A seed position past a dangling unmatched suffix with no dictionary
        // AI at all yields no completed parse.
        let normalized = "88888888888888888888";
        let seed = TokenizeResult::default();
        let opts = DecodeOptions::default();
        let out = reconstruct(normalized, seed, 0, &opts);
        assert!(out.errors.contains(&DiagnosticTag::InvalidFormat));
        assert_eq!(out.confidence, 0.0);
    }
}
