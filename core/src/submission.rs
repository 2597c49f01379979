// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use regex::Regex;

/// An instructor-submitted workshop description from the survey table.
/// Read-only join input: never mutated after ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// External submission identifier (survey response id).
    pub id: String,

    pub title: String,
    pub description: String,

    /// Raw text; split into a list by [`split_list`] at rendering time.
    pub learning_outcomes: String,

    pub target_audience: String,

    /// Raw text; split into a list by [`split_list`] at rendering time.
    pub prerequisites: String,

    pub materials: String,
}

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s").expect("numbered pattern must compile"));

/// Splits free text into list items on numbered points ("1. "), bullet
/// points ("•") or dashes ("- ").
///
/// When the text opens with a "header:" before the first bullet/dash, the
/// header is kept as the first element and the returned flag is true.
/// Text without any list markers comes back as a single element.
pub fn split_list(raw: &str) -> (Vec<String>, bool) {
    if NUMBERED.is_match(raw) {
        let items = NUMBERED
            .split(raw)
            .map(|s| s.trim_start_matches('.').trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        return (items, false);
    }

    for marker in ["\u{2022}", "- "] {
        if !raw.contains(marker) {
            continue;
        }
        let mut parts: Vec<String> = raw.split(marker).map(|s| s.trim().to_string()).collect();
        let starts_with_marker = raw
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '\u{2022}' || c == '-');

        let mut has_header = false;
        if parts[0].contains(':') && !starts_with_marker {
            // "Header: - a - b" keeps "Header:" as its own element.
            let head = parts[0]
                .rsplit_once(": ")
                .map_or(parts[0].clone(), |(h, _)| h.to_string());
            parts[0] = format!("{}:", head.trim_end_matches(':'));
            has_header = true;
        } else {
            parts.remove(0);
        }
        parts.retain(|s| !s.is_empty());
        return (parts, has_header);
    }

    (vec![raw.to_string()], false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_numbered_list() {
        let (items, header) = split_list("1. Learn X 2. Apply Y 3. Discuss Z");
        assert_eq!(items, vec!["Learn X", "Apply Y", "Discuss Z"]);
        assert!(!header);
    }

    #[test]
    fn test_split_bullet_list() {
        let (items, header) = split_list("\u{2022} one \u{2022} two");
        assert_eq!(items, vec!["one", "two"]);
        assert!(!header);
    }

    #[test]
    fn test_split_bullet_list_with_header() {
        let (items, header) = split_list("You will learn: \u{2022} one \u{2022} two");
        assert_eq!(items[0], "You will learn:");
        assert_eq!(&items[1..], ["one", "two"]);
        assert!(header);
    }

    #[test]
    fn test_split_dash_list() {
        let (items, header) = split_list("- basic Unix - some Python");
        assert_eq!(items, vec!["basic Unix", "some Python"]);
        assert!(!header);
    }

    #[test]
    fn test_split_dash_list_with_header() {
        let (items, header) = split_list("Prerequisites: - basic Unix - some Python");
        assert_eq!(items[0], "Prerequisites:");
        assert_eq!(&items[1..], ["basic Unix", "some Python"]);
        assert!(header);
    }

    #[test]
    fn test_plain_text_is_single_element() {
        let (items, header) = split_list("No prior knowledge needed");
        assert_eq!(items, vec!["No prior knowledge needed"]);
        assert!(!header);
    }
}
