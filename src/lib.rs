mod analyzer;
mod options;
mod pattern;
mod reconstruct;
mod rules;
#[cfg(test)]
mod tests;
mod text;
mod violation;

pub use analyzer::{analyze_pattern, PatternMetrics};
pub use options::{Options, OptionsError};
pub use pattern::{
    AssignmentPattern, AssignmentTarget, DefaultExpression, Item, ObjectPattern, Position,
    Property, PropertyKey, PropertyValue, RestElement, RestTarget, Span,
};
pub use reconstruct::reconstruct_pattern;
pub use rules::{check_object_pattern, RULE_NAME};
pub use text::SourceTextProvider;
pub use violation::{
    Fix, Violation, ViolationBuilder, ViolationKind, CONSISTENT_NEWLINE, MULTILINE_PROPERTY,
    MUST_NOT_SPLIT, MUST_SPLIT, MUST_SPLIT_TOO_LONG, NO_BLANK_BETWEEN,
};
