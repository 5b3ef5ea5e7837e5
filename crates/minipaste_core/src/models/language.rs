//! Supported paste languages.
//!
//! Tags are embedded unescaped into record file names, so every tag is
//! lowercase ASCII alphanumeric.

use serde::{Serialize, Serializer};
use std::fmt;

/// A language tag from the closed set of supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Text,
    Bash,
    C,
    Diff,
    Erlang,
    Html,
    Js,
    Perl,
    Php,
    Python,
    Ruby,
    Sql,
    Xml,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 13] = [
        Language::Text,
        Language::Bash,
        Language::C,
        Language::Diff,
        Language::Erlang,
        Language::Html,
        Language::Js,
        Language::Perl,
        Language::Php,
        Language::Python,
        Language::Ruby,
        Language::Sql,
        Language::Xml,
    ];

    /// Tag stored in record names and submitted by forms.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Text => "text",
            Language::Bash => "bash",
            Language::C => "c",
            Language::Diff => "diff",
            Language::Erlang => "erlang",
            Language::Html => "html",
            Language::Js => "js",
            Language::Perl => "perl",
            Language::Php => "php",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Sql => "sql",
            Language::Xml => "xml",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Text => "Plain/Text",
            Language::Bash => "Bash/Shell",
            Language::C => "C/C++",
            Language::Diff => "Diff",
            Language::Erlang => "Erlang",
            Language::Html => "HTML",
            Language::Js => "JavaScript",
            Language::Perl => "Perl",
            Language::Php => "PHP",
            Language::Python => "Python",
            Language::Ruby => "Ruby",
            Language::Sql => "SQL",
            Language::Xml => "XML",
        }
    }

    /// Syntax-highlighter brush script for this language.
    pub fn brush(self) -> &'static str {
        match self {
            Language::Text => "shBrushPlain.js",
            Language::Bash => "shBrushBash.js",
            Language::C => "shBrushCpp.js",
            Language::Diff => "shBrushDiff.js",
            Language::Erlang => "shBrushErlang.js",
            Language::Html | Language::Xml => "shBrushXml.js",
            Language::Js => "shBrushJScript.js",
            Language::Perl => "shBrushPerl.js",
            Language::Php => "shBrushPhp.js",
            Language::Python => "shBrushPython.js",
            Language::Ruby => "shBrushRuby.js",
            Language::Sql => "shBrushSql.js",
        }
    }

    /// Look up a tag exactly as stored.
    ///
    /// # Returns
    /// `None` for tags outside the supported set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }

    /// Resolve an optional submitted tag, falling back to [`Language::Text`].
    pub fn from_tag_or_default(tag: Option<&str>) -> Self {
        tag.and_then(Self::from_tag).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Serializable row describing one supported language.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageInfo {
    pub tag: &'static str,
    pub name: &'static str,
    pub brush: &'static str,
}

impl From<Language> for LanguageInfo {
    fn from(value: Language) -> Self {
        Self {
            tag: value.tag(),
            name: value.display_name(),
            brush: value.brush(),
        }
    }
}

/// List every supported language with its name and brush.
pub fn supported_languages() -> Vec<LanguageInfo> {
    Language::ALL.into_iter().map(LanguageInfo::from).collect()
}
