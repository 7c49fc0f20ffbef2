use super::MarkdownFormat;
use crate::formats::Format;

#[test]
fn test_anchor_joins_words_with_hyphens() {
    let format = MarkdownFormat;
    assert_eq!(format.anchor(&["Getting", "Started"]), "Getting-Started");
}

#[test]
fn test_anchor_passes_case_and_punctuation_through() {
    let format = MarkdownFormat;
    assert_eq!(
        format.anchor(&["What's", "New?", "(v2.0)"]),
        "What's-New?-(v2.0)"
    );
}

#[test]
fn test_is_header_ignores_leading_whitespace() {
    let format = MarkdownFormat;
    assert!(format.is_header("# Intro"));
    assert!(format.is_header("   ## Indented\n"));
    assert!(!format.is_header("some text"));
    assert!(!format.is_header(""));
}

#[test]
fn test_depth_counts_whole_leading_token() {
    let format = MarkdownFormat;
    assert_eq!(format.depth("#"), 1);
    assert_eq!(format.depth("###"), 3);
    assert_eq!(format.depth("#1"), 2);
    assert_eq!(format.depth("##Glued"), 7);
}
