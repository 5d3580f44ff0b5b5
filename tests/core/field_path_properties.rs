//! Field Path Properties
//!
//! **Invariant**: the canonical string round-trips through the server-format
//! parser for every path built from non-empty segments without NUL.

use crate::common::*;
use proptest::prelude::*;

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

proptest! {
    #[test]
    fn prop_canonical_string_round_trips(path in arb_field_path()) {
        let canonical = path.canonical_string();
        let reparsed = FieldPath::try_parse_server_format(&canonical);
        prop_assert_eq!(reparsed, Ok(path));
    }

    #[test]
    fn prop_display_round_trips_through_from_str(path in arb_field_path()) {
        let reparsed: FieldPath = path.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn prop_identifier_segments_are_bare(segment in "[a-zA-Z_][a-zA-Z0-9_]{0,10}") {
        let path = FieldPath::from_segments([segment.clone()]);
        prop_assert_eq!(path.canonical_string(), segment);
    }

    #[test]
    fn prop_other_segments_are_quoted(segment in arb_field_segment()) {
        let canonical = FieldPath::from_segments([segment.clone()]).canonical_string();
        if is_identifier(&segment) {
            prop_assert_eq!(canonical, segment);
        } else {
            prop_assert!(canonical.starts_with('`') && canonical.ends_with('`'));
            prop_assert!(canonical.len() >= segment.len() + 2);
        }
    }

    #[test]
    fn prop_ordering_is_segment_wise(a in arb_field_path(), b in arb_field_path()) {
        prop_assert_eq!(a.cmp(&b), a.segments().cmp(b.segments()));
    }

    #[test]
    fn prop_parser_never_panics_on_fallible_path(input in ".*") {
        let _ = FieldPath::try_parse_server_format(&input);
    }
}
