//! A character-indexed trie on ASCII digits, giving O(k) longest-prefix
//! lookup for both "prefix of AI" and "prefix of input" queries, where `k`
//! is bounded by the longest AI code (4).

use std::collections::HashMap;

use super::table::{self, RawRow};
use super::{AiSpec, DataType, DateFormat, PriorityClass};

/// Maximum AI code length in digits.
pub const MAX_AI_LEN: usize = 4;

#[derive(Debug, Default)]
struct Node {
    children: [Option<Box<Node>>; 10],
    /// Index into `Dictionary::specs`, set only on a terminal node.
    terminal: Option<usize>,
}

impl Node {
    fn child_mut(&mut self, digit: u8) -> &mut Node {
        self.children[digit as usize].get_or_insert_with(|| Box::new(Node::default()))
    }

    fn child(&self, digit: u8) -> Option<&Node> {
        self.children[digit as usize].as_deref()
    }
}

/// The compiled AI Dictionary: a flat table of specs plus a digit trie over
/// their codes.
#[derive(Debug)]
pub struct Dictionary {
    specs: Vec<AiSpec>,
    root: Node,
    by_code: HashMap<String, usize>,
}

/// Result of a longest-prefix match against a position in some input.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub spec: &'a AiSpec,
    /// Number of digits consumed (== `spec.code.len()`).
    pub len: usize,
}

impl Dictionary {
    /// Build the dictionary from the static table.
    #[must_use]
    pub fn build() -> Self {
        let mut specs = Vec::new();
        for row in table::raw_rows() {
            specs.push(spec_from_row(&row, None));
        }
        for &(base, title) in table::DECIMAL_FAMILY {
            for n in 0..=9u8 {
                let row = RawRow {
                    code: base,
                    title,
                    fixed_length: Some(6),
                    min_length: 6,
                    max_length: 6,
                    data_type: DataType::Numeric,
                    check_digit: false,
                    date_format: None,
                    priority_class: PriorityClass::General,
                    required_with: &[],
                    exclusive_with: &[],
                };
                specs.push(spec_from_row(&row, Some(n)));
            }
        }
        for row in table::internal_rows() {
            specs.push(spec_from_row(&row, None));
        }

        let mut root = Node::default();
        let mut by_code = HashMap::with_capacity(specs.len());
        for (idx, spec) in specs.iter().enumerate() {
            debug_assert!(
                !by_code.contains_key(&spec.code),
                "duplicate AI code in static table: {}",
                spec.code
            );
            by_code.insert(spec.code.clone(), idx);

            let mut node = &mut root;
            for byte in spec.code.as_bytes() {
                let digit = byte - b'0';
                node = node.child_mut(digit);
            }
            node.terminal = Some(idx);
        }

        Self {
            specs,
            root,
            by_code,
        }
    }

    /// Number of AI specs in the dictionary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Exact lookup by AI code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&AiSpec> {
        self.by_code.get(code).map(|&idx| &self.specs[idx])
    }

    /// Returns the *longest* AI code that is a prefix of `input[offset..]`,
    /// walking the trie as far as consecutive ASCII digits and trie edges
    /// allow; the deepest terminal visited wins. O(k) in the AI length,
    /// independent of dictionary size.
    #[must_use]
    pub fn longest_match(&self, input: &str, offset: usize) -> Option<Match<'_>> {
        let bytes = input.as_bytes();
        let mut node = &self.root;
        let mut best: Option<(usize, usize)> = None; // (depth, spec_idx)

        for depth in 0..MAX_AI_LEN {
            let Some(&byte) = bytes.get(offset + depth) else {
                break;
            };
            if !byte.is_ascii_digit() {
                break;
            }
            let digit = byte - b'0';
            let Some(next) = node.child(digit) else {
                break;
            };
            node = next;
            if let Some(idx) = node.terminal {
                best = Some((depth + 1, idx));
            }
        }

        best.map(|(len, idx)| Match {
            spec: &self.specs[idx],
            len,
        })
    }

    /// Every dictionary code that is a prefix at `input[offset..]`, shortest
    /// first — not just the longest, so a caller can consider shorter AI
    /// candidates alongside the greedy match.
    #[must_use]
    pub fn all_prefix_matches(&self, input: &str, offset: usize) -> Vec<Match<'_>> {
        let bytes = input.as_bytes();
        let mut node = &self.root;
        let mut out = Vec::new();

        for depth in 0..MAX_AI_LEN {
            let Some(&byte) = bytes.get(offset + depth) else {
                break;
            };
            if !byte.is_ascii_digit() {
                break;
            }
            let digit = byte - b'0';
            let Some(next) = node.child(digit) else {
                break;
            };
            node = next;
            if let Some(idx) = node.terminal {
                out.push(Match {
                    spec: &self.specs[idx],
                    len: depth + 1,
                });
            }
        }

        out
    }
}

fn spec_from_row(row: &RawRow, decimal_position: Option<u8>) -> AiSpec {
    let code = match decimal_position {
        Some(n) => format!("{base}{n}", base = row.code),
        None => row.code.to_owned(),
    };
    AiSpec {
        code,
        title: row.title,
        is_fixed_length: row.fixed_length.is_some(),
        min_length: row.min_length,
        max_length: row.max_length,
        fixed_length: row.fixed_length,
        data_type: row.data_type,
        check_digit: row.check_digit,
        date_format: row.date_format,
        decimal_position,
        required_with: row.required_with,
        exclusive_with: row.exclusive_with,
        priority_class: row.priority_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_match_prefers_deepest_terminal() {
        let dict = Dictionary::build();
        // "37" is a code; "371234" should still match "37", not some
        // nonexistent longer code, and must report len == 2.
        let m = dict.longest_match("371234", 0).expect("match");
        assert_eq!(m.spec.code, "37");
        assert_eq!(m.len, 2);
    }

    #[test]
    fn unknown_prefix_returns_none() {
        let dict = Dictionary::build();
        assert!(dict.longest_match("88", 0).is_none());
    }

    #[test]
    fn decimal_family_expands_to_ten_codes() {
        let dict = Dictionary::build();
        for n in 0..=9 {
            let code = format!("310{n}");
            let spec = dict.get(&code).unwrap_or_else(|| panic!("missing {code}"));
            assert_eq!(spec.decimal_position, Some(n));
        }
    }

    #[test]
    fn internal_range_is_complete() {
        let dict = Dictionary::build();
        for n in 90..=99 {
            assert!(dict.get(&n.to_string()).is_some());
        }
    }

    #[test]
    fn all_prefix_matches_includes_shorter_alternatives() {
        let dict = Dictionary::build();
        let matches = dict.all_prefix_matches("371234", 0);
        let codes: Vec<&str> = matches.iter().map(|m| m.spec.code.as_str()).collect();
        assert_eq!(codes, vec!["37"]);
    }

    #[test]
    fn no_duplicate_codes() {
        let dict = Dictionary::build();
        assert_eq!(dict.by_code.len(), dict.specs.len());
    }
}
