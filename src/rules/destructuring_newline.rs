use tracing::trace;

use crate::{
    analyzer::analyze_pattern,
    options::Options,
    pattern::{ObjectPattern, Span},
    reconstruct::reconstruct_pattern,
    text::SourceTextProvider,
    violation::{Fix, Violation, ViolationKind},
};

pub const RULE_NAME: &str = "destructuring-newline";

/// Checks one object pattern's layout against the configured thresholds.
///
/// `comments` is the set of comment spans lexically contained in the
/// pattern's range, used to tell comment-filled gaps from blank lines.
/// A pattern with at most one item, or without location data, never
/// reports.
pub fn check_object_pattern(
    pattern: &ObjectPattern,
    comments: &[Span],
    source: &impl SourceTextProvider,
    options: &Options,
) -> Vec<Violation> {
    if pattern.items.len() <= 1 {
        return Vec::new();
    }

    let Some(span) = pattern.span else {
        return Vec::new();
    };
    let Some(metrics) = analyze_pattern(pattern, comments, source) else {
        return Vec::new();
    };

    let max_count = if metrics.has_rest {
        options.items_with_rest()
    } else {
        options.items()
    };
    let has_many_items = pattern.items.len() > max_count;
    // the trimmed line texts do not include the line breaks themselves
    let is_long_text =
        metrics.text_length.saturating_add(metrics.line_span) > options.max_length();

    // a multiline property outweighs every other check
    if metrics.has_multiline_property && !metrics.multi_line {
        return vec![Violation {
            kind: ViolationKind::MultilineProperty,
            span,
            data: None,
            fix: None,
        }];
    }

    let multi_line_fix =
        || reconstruct_pattern(pattern, source, true).map(|text| Fix { span, text });

    let mut violations = Vec::new();

    if has_many_items || is_long_text {
        if !metrics.multi_line {
            violations.push(Violation {
                kind: if has_many_items {
                    ViolationKind::MustSplit
                } else {
                    ViolationKind::MustSplitTooLong
                },
                span,
                data: Some(if has_many_items {
                    max_count
                } else {
                    options.max_length()
                }),
                fix: multi_line_fix(),
            });
            return violations;
        }

        if metrics.in_same_line {
            violations.push(Violation {
                kind: ViolationKind::ConsistentNewline,
                span,
                data: None,
                fix: multi_line_fix(),
            });
        }
        if metrics.has_blank_between {
            violations.push(Violation {
                kind: ViolationKind::NoBlankBetween,
                span,
                data: None,
                fix: multi_line_fix(),
            });
        }
    } else if metrics.multi_line && !metrics.has_multiline_property {
        violations.push(Violation {
            kind: ViolationKind::MustNotSplit,
            span,
            data: Some(max_count),
            fix: reconstruct_pattern(pattern, source, false).map(|text| Fix { span, text }),
        });
    }

    trace!(rule = RULE_NAME, count = violations.len(), "checked object pattern");

    violations
}
