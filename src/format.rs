//! Consumer-facing helper surfaces: thin adapters over a decoded element,
//! not part of the core `decode` contract. Downstream formatting code is
//! free to replace these.

use crate::ai::DICTIONARY;
use crate::result::{DecodedElement, TypedValue};

/// Human-readable label for an AI code, falling back to the dictionary
/// title or the bare code if neither applies.
#[must_use]
pub fn friendly_name(ai: &str) -> String {
    match ai {
        "00" => "SSCC".to_owned(),
        "01" => "GTIN Code".to_owned(),
        "10" => "Batch/Lot".to_owned(),
        "17" => "Expiration Date".to_owned(),
        "21" => "Serial Number".to_owned(),
        _ => DICTIONARY
            .get(ai)
            .map(|spec| spec.title.to_owned())
            .unwrap_or_else(|| ai.to_owned()),
    }
}

/// Reformats a date-typed element's value as `dd/mm/yyyy`, or `XX/mm/yyyy`
/// when the day is unspecified. Returns `None` for non-date elements.
#[must_use]
pub fn format_date(element: &DecodedElement) -> Option<String> {
    match element.typed_value {
        TypedValue::Date {
            year,
            month,
            day,
            day_unspecified,
        } => {
            let day_part = if day_unspecified {
                "XX".to_owned()
            } else {
                format!("{day:02}")
            };
            Some(format!("{day_part}/{month:02}/{year:04}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::DiagnosticTag;

    #[test]
    fn friendly_name_covers_the_common_core_ais() {
        assert_eq!(friendly_name("01"), "GTIN Code");
        assert_eq!(friendly_name("17"), "Expiration Date");
    }

    #[test]
    fn friendly_name_falls_back_to_dictionary_title() {
        assert_eq!(friendly_name("37"), "Count of trade items contained");
    }

    #[test]
    fn friendly_name_falls_back_to_code_when_unknown() {
        assert_eq!(friendly_name("88"), "88");
    }

    #[test]
    fn format_date_renders_concrete_day() {
        let element = DecodedElement::new(
            "17".to_owned(),
            "280430".to_owned(),
            TypedValue::Date {
                year: 2028,
                month: 4,
                day: 30,
                day_unspecified: false,
            },
            Vec::<DiagnosticTag>::new(),
            (0, 6),
        );
        assert_eq!(format_date(&element).as_deref(), Some("30/04/2028"));
    }

    #[test]
    fn format_date_renders_day_unspecified() {
        let element = DecodedElement::new(
            "17".to_owned(),
            "290400".to_owned(),
            TypedValue::Date {
                year: 2029,
                month: 4,
                day: 30,
                day_unspecified: true,
            },
            Vec::<DiagnosticTag>::new(),
            (0, 6),
        );
        assert_eq!(format_date(&element).as_deref(), Some("XX/04/2029"));
    }

    #[test]
    fn format_date_returns_none_for_non_date_elements() {
        let element = DecodedElement::new(
            "10".to_owned(),
            "ABC".to_owned(),
            TypedValue::Text("ABC".to_owned()),
            Vec::<DiagnosticTag>::new(),
            (0, 3),
        );
        assert_eq!(format_date(&element), None);
    }
}
