use std::collections::HashMap;

use derive_builder::Builder;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::pattern::Span;

pub const MUST_SPLIT: &str = "must_split";
pub const MUST_NOT_SPLIT: &str = "must_not_split";
pub const MUST_SPLIT_TOO_LONG: &str = "must_split_too_long";
pub const NO_BLANK_BETWEEN: &str = "no_blank_between";
pub const CONSISTENT_NEWLINE: &str = "consistent_newline";
pub const MULTILINE_PROPERTY: &str = "multiline_property";

static MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        (
            MUST_SPLIT,
            "Object destructuring must be broken into multiple lines if there are more than {{ max }} properties.",
        ),
        (
            MUST_SPLIT_TOO_LONG,
            "Object destructuring must be broken into multiple lines if the line is longer than {{ max }}.",
        ),
        (
            MUST_NOT_SPLIT,
            "Object destructuring must not be broken into multiple lines if there are {{ max }} or less properties.",
        ),
        (
            NO_BLANK_BETWEEN,
            "Object destructuring lines cannot have blank lines between them.",
        ),
        (
            CONSISTENT_NEWLINE,
            "Object destructuring lines must be put on newlines.",
        ),
        (
            MULTILINE_PROPERTY,
            "Object destructuring with a multiline property must be put on newlines.",
        ),
    ]
    .into_iter()
    .collect()
});

static TEMPLATE_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*\w+\s*\}\}").unwrap());

/// The classification result for one pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    MustSplit,
    MustSplitTooLong,
    MustNotSplit,
    ConsistentNewline,
    NoBlankBetween,
    MultilineProperty,
}

impl ViolationKind {
    pub fn message_id(&self) -> &'static str {
        match self {
            Self::MustSplit => MUST_SPLIT,
            Self::MustSplitTooLong => MUST_SPLIT_TOO_LONG,
            Self::MustNotSplit => MUST_NOT_SPLIT,
            Self::ConsistentNewline => CONSISTENT_NEWLINE,
            Self::NoBlankBetween => NO_BLANK_BETWEEN,
            Self::MultilineProperty => MULTILINE_PROPERTY,
        }
    }
}

/// A single text replacement covering the full pattern's span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fix {
    pub span: Span,
    pub text: String,
}

#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(setter(strip_option))]
pub struct Violation {
    pub kind: ViolationKind,
    pub span: Span,
    /// The threshold involved, for verdicts that carry one.
    #[builder(default)]
    pub data: Option<usize>,
    #[builder(default)]
    pub fix: Option<Fix>,
}

impl Violation {
    pub fn message_id(&self) -> &'static str {
        self.kind.message_id()
    }

    /// The message template rendered with the diagnostic data.
    pub fn message(&self) -> String {
        let template = MESSAGES[self.kind.message_id()];
        match self.data {
            Some(value) => TEMPLATE_VARIABLE
                .replace_all(template, value.to_string().as_str())
                .into_owned(),
            None => template.to_owned(),
        }
    }
}
