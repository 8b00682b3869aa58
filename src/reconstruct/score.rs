//! Scoring functions for the beam-search reconstructor.

use crate::ai::{AiSpec, DateFormat, DICTIONARY};
use crate::options::InternalAiWhitelist;
use crate::result::DecodedElement;
use crate::result::DiagnosticTag;

/// AI 01 gets its own, larger check-digit bonus — it is the anchor
/// identifier most parses hinge on; the rest of the check-digit-bearing
/// family (00, 02, 402, 410-417, …) gets a smaller bonus of the same
/// shape rather than going unscored.
const OTHER_CHECK_DIGIT_BONUS: f64 = 300.0;
const AI01_CHECK_DIGIT_BONUS: f64 = 1000.0;

/// Per-element score contribution, computed once a candidate `(ai, value)`
/// has already passed [`crate::validators::validate`].
#[must_use]
pub fn element_score(spec: &AiSpec, raw_value: &str, errors: &[DiagnosticTag]) -> f64 {
    let mut score = 0.0;

    if spec.check_digit && !errors.contains(&DiagnosticTag::InvalidCheckDigit) {
        score += if spec.code == "01" {
            AI01_CHECK_DIGIT_BONUS
        } else {
            OTHER_CHECK_DIGIT_BONUS
        };
    }

    if let Some(format) = spec.date_format {
        if !errors.contains(&DiagnosticTag::InvalidDate) {
            let day_unspecified = matches!(format, DateFormat::YyMmD0)
                && raw_value.len() == 6
                && &raw_value[4..6] == "00";
            score += if day_unspecified { 190.0 } else { 250.0 };
        }
    }

    if spec.code == "10" {
        let l = raw_value.chars().count();
        if (2..=10).contains(&l) {
            score += 20.0;
        }
    }
    if spec.code == "21" {
        let l = raw_value.chars().count();
        if (6..=20).contains(&l) {
            score += 15.0;
        }
    }

    score
}

/// Adjustments that depend on the whole parse, applied once a candidate
/// parse is complete: canonical-order bonus, duplicate-AI penalties, and
/// the internal-AI-absorption penalty.
#[must_use]
pub fn path_level_score(elements: &[DecodedElement], whitelist: InternalAiWhitelist) -> f64 {
    let mut score = 0.0;
    let sequence: Vec<&str> = elements.iter().map(|e| e.ai.as_str()).collect();

    if sequence == ["01", "17", "10", "21"] || sequence == ["01", "21", "17", "10"] {
        score += 120.0;
    }

    for pair in elements.windows(2) {
        if pair[0].ai == "21" && pair[1].ai == "17" {
            score += 90.0;
        }
    }

    for (i, element) in elements.iter().enumerate() {
        let Some(spec) = DICTIONARY.get(&element.ai) else {
            continue;
        };
        if !spec.is_internal() || whitelist.contains_code(&element.ai) {
            continue;
        }
        let preceded_by_absorbing_ai = elements[..i].iter().rev().any(|p| p.ai == "21" || p.ai == "10");
        if preceded_by_absorbing_ai {
            score -= 200.0;
        }
    }

    let count10 = sequence.iter().filter(|&&ai| ai == "10").count();
    if count10 > 1 {
        score -= 150.0 * (count10 - 1) as f64;
    }
    let count21 = sequence.iter().filter(|&&ai| ai == "21").count();
    if count21 > 1 {
        score -= 120.0 * (count21 - 1) as f64;
    }

    score
}

/// Deterministic tiebreak key; smaller is better. Compared only between
/// parses whose scores are within 10 points of each other.
#[must_use]
pub fn tiebreak_key(elements: &[DecodedElement]) -> (u8, usize, usize, String) {
    let sequence: Vec<&str> = elements.iter().map(|e| e.ai.as_str()).collect();

    let canonical_rank: u8 =
        if sequence == ["01", "17", "10", "21"] || sequence == ["01", "21", "17", "10"] {
            0
        } else {
            1
        };

    let internal_count = elements
        .iter()
        .filter(|e| DICTIONARY.get(&e.ai).is_some_and(|s| s.is_internal()))
        .count();

    let has_21 = sequence.contains(&"21");
    let ai10_len = if has_21 {
        elements
            .iter()
            .find(|e| e.ai == "10")
            .map(|e| e.raw_value.chars().count())
            .unwrap_or(usize::MAX)
    } else {
        0
    };

    let ai_sequence = sequence.join(",");
    (canonical_rank, internal_count, ai10_len, ai_sequence)
}
