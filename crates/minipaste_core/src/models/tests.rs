//! Model-level unit tests.

use super::language::{supported_languages, Language};
use super::paste::{check_paste_size, Paste};
use crate::error::AppError;

#[test]
fn every_tag_is_lowercase_alphanumeric_and_round_trips() {
    for lang in Language::ALL {
        let tag = lang.tag();
        assert!(
            !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
            "tag not filename-safe: {}",
            tag
        );
        assert_eq!(Language::from_tag(tag), Some(lang));
    }
}

#[test]
fn unknown_or_missing_tags_fall_back_to_text() {
    for tag in [Some("cobol"), Some("PERL"), Some(""), Some(" perl"), None] {
        assert_eq!(
            Language::from_tag_or_default(tag),
            Language::Text,
            "tag: {:?}",
            tag
        );
    }
    assert_eq!(Language::from_tag_or_default(Some("ruby")), Language::Ruby);
}

#[test]
fn language_table_matches_brush_assignments() {
    let cases = [
        (Language::Text, "Plain/Text", "shBrushPlain.js"),
        (Language::C, "C/C++", "shBrushCpp.js"),
        (Language::Html, "HTML", "shBrushXml.js"),
        (Language::Xml, "XML", "shBrushXml.js"),
        (Language::Js, "JavaScript", "shBrushJScript.js"),
    ];
    for (lang, name, brush) in cases {
        assert_eq!(lang.display_name(), name);
        assert_eq!(lang.brush(), brush);
    }
    assert_eq!(supported_languages().len(), 13);
}

#[test]
fn paste_from_submission_escapes_content() {
    let paste = Paste::from_submission(
        "abc123".to_string(),
        Language::Html,
        1_700_003_600,
        "<b>bold</b> & co",
    );
    assert_eq!(paste.content, "&lt;b&gt;bold&lt;/b&gt; &amp; co");
    assert_eq!(paste.language, Language::Html);
}

#[test]
fn language_displays_as_its_tag() {
    assert_eq!(Language::Python.to_string(), "python");
    assert_eq!(Language::default(), Language::Text);
}

#[test]
fn size_limit_accepts_exact_maximum_and_rejects_one_over() {
    let limit = 1024;
    let exact = "a".repeat(limit);
    let over = "a".repeat(limit + 1);

    assert!(check_paste_size(&exact, limit).is_ok());
    let err = check_paste_size(&over, limit).expect_err("one byte over");
    assert!(matches!(err, AppError::PayloadTooLarge { limit: 1024 }));
    assert!(err.to_string().contains("1024 bytes"));
}
