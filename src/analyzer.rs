use std::collections::HashSet;

use itertools::Itertools;
use tracing::trace;

use crate::{
    pattern::{ObjectPattern, Span},
    text::SourceTextProvider,
};

/// Layout metrics for one pattern, produced in a single forward pass over
/// adjacent item pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternMetrics {
    pub has_rest: bool,
    /// At least one item starts on a later line than the previous item
    /// ends.
    pub multi_line: bool,
    /// At least one adjacent pair shares a line.
    pub in_same_line: bool,
    /// A fully blank, non-comment line exists between two adjacent items.
    pub has_blank_between: bool,
    /// Some item's own span covers more than one line.
    pub has_multiline_property: bool,
    /// Sum of the trimmed lengths of every source line the pattern spans.
    pub text_length: usize,
    /// Number of line boundaries inside the pattern's span.
    pub line_span: usize,
}

/// Computes the metrics for `pattern`, or `None` when the pattern's span
/// cannot be determined, in which case the caller skips the pattern
/// entirely. A pair whose spans are unknown contributes nothing.
pub fn analyze_pattern(
    pattern: &ObjectPattern,
    comments: &[Span],
    source: &impl SourceTextProvider,
) -> Option<PatternMetrics> {
    let span = pattern.span?;

    let comment_lines: HashSet<usize> = comments
        .iter()
        .flat_map(|comment| comment.lines())
        .collect();

    let mut metrics = PatternMetrics {
        line_span: span.end.line - span.start.line,
        ..Default::default()
    };

    let last_pair = pattern.items.len().saturating_sub(2);
    for (index, (current, next)) in pattern.items.iter().tuple_windows().enumerate() {
        metrics.has_rest |= current.is_rest() || next.is_rest();

        let (Some(current_span), Some(next_span)) = (current.span(), next.span()) else {
            continue;
        };

        if !current_span.is_single_line() {
            metrics.has_multiline_property = true;
        }
        if index == last_pair && !next_span.is_single_line() {
            metrics.has_multiline_property = true;
        }

        if next_span.start.line != current_span.end.line {
            metrics.multi_line = true;
        } else {
            metrics.in_same_line = true;
        }

        if !metrics.has_blank_between && current_span.end.line + 1 < next_span.start.line {
            metrics.has_blank_between = (current_span.end.line + 1..next_span.start.line)
                .any(|line| !comment_lines.contains(&line));
        }
    }

    metrics.text_length = span
        .lines()
        .map(|line| source.line_text(line).map_or(0, |text| text.trim().len()))
        .sum();

    trace!(?metrics, "analyzed object pattern");

    Some(metrics)
}
