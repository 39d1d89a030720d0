use std::borrow::Cow;

use crate::pattern::Span;

/// Source-text access supplied by the host parser. The core never
/// re-derives text from a reparsed representation; every verbatim copy
/// goes through this seam.
pub trait SourceTextProvider {
    /// The text of a 1-based line, without its terminator.
    fn line_text(&self, line: usize) -> Option<&str>;

    /// The raw text covered by a span, line breaks rendered as `\n`.
    fn span_text(&self, span: Span) -> Option<Cow<'_, str>>;
}

impl SourceTextProvider for &str {
    fn line_text(&self, line: usize) -> Option<&str> {
        line.checked_sub(1).and_then(|index| self.lines().nth(index))
    }

    fn span_text(&self, span: Span) -> Option<Cow<'_, str>> {
        if span.is_single_line() {
            let line = self.line_text(span.start.line)?;
            return line
                .get(span.start.column..span.end.column)
                .map(Cow::Borrowed);
        }

        let mut text = self
            .line_text(span.start.line)?
            .get(span.start.column..)?
            .to_owned();
        for line in span.start.line + 1..span.end.line {
            text.push('\n');
            text.push_str(self.line_text(line)?);
        }
        text.push('\n');
        text.push_str(self.line_text(span.end.line)?.get(..span.end.column)?);
        Some(Cow::Owned(text))
    }
}
