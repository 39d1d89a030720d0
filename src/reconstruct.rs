use std::borrow::Cow;

use crate::{
    pattern::{
        AssignmentPattern, AssignmentTarget, DefaultExpression, Item, ObjectPattern, Property,
        PropertyKey, PropertyValue, RestTarget,
    },
    text::SourceTextProvider,
};

/// Produces a replacement string for the whole pattern in the target
/// layout, preserving exact binding semantics. Items whose shape is not
/// modeled are copied from source verbatim. Returns `None` when some
/// required source text cannot be resolved, in which case the verdict
/// goes out without a fix.
pub fn reconstruct_pattern(
    pattern: &ObjectPattern,
    source: &impl SourceTextProvider,
    multi_line: bool,
) -> Option<String> {
    let rendered = pattern
        .items
        .iter()
        .map(|item| render_item(item, source))
        .collect::<Option<Vec<_>>>()?;

    let separator = if multi_line { ",\n" } else { "," };
    let body = rendered.join(separator);

    let mut text = if multi_line {
        format!("{{\n{body}\n}}")
    } else {
        format!("{{{body}}}")
    };

    if let Some(annotation) = pattern.type_annotation {
        text.push_str(&source.span_text(annotation)?);
    }

    Some(text)
}

fn original_text<'a>(item: &Item, source: &'a impl SourceTextProvider) -> Option<Cow<'a, str>> {
    source.span_text(item.span()?)
}

fn render_item(item: &Item, source: &impl SourceTextProvider) -> Option<String> {
    match item {
        Item::Rest(rest) => match &rest.target {
            RestTarget::Identifier(name) => Some(format!("...{name}")),
            RestTarget::Other => Some(original_text(item, source)?.into_owned()),
        },
        Item::Property(property) => render_property(item, property, source),
    }
}

fn render_property(
    item: &Item,
    property: &Property,
    source: &impl SourceTextProvider,
) -> Option<String> {
    let key_string = match &property.key {
        PropertyKey::Identifier(name) => name.as_str(),
        PropertyKey::Literal(raw) => raw.as_str(),
        PropertyKey::Other => return Some(original_text(item, source)?.into_owned()),
    };

    match &property.value {
        PropertyValue::Identifier(name) => Some(if property.shorthand {
            key_string.to_owned()
        } else {
            format!("{key_string}: {name}")
        }),
        // nested patterns are not re-flowed, only their container is
        PropertyValue::Pattern(nested) => {
            let nested_text = source.span_text(nested.span?)?;
            Some(format!("{key_string}: {nested_text}"))
        }
        PropertyValue::Assignment(assignment) => {
            render_assignment(item, property, key_string, assignment, source)
        }
        PropertyValue::Other => Some(original_text(item, source)?.into_owned()),
    }
}

fn render_assignment(
    item: &Item,
    property: &Property,
    key_string: &str,
    assignment: &AssignmentPattern,
    source: &impl SourceTextProvider,
) -> Option<String> {
    let mut text = key_string.to_owned();

    match &assignment.left {
        AssignmentTarget::Identifier(name) => {
            if !property.shorthand {
                text.push_str(": ");
                text.push_str(name);
            }
        }
        AssignmentTarget::Pattern(nested) => {
            text.push_str(": ");
            text.push_str(&source.span_text(nested.span?)?);
        }
        AssignmentTarget::Other => return Some(original_text(item, source)?.into_owned()),
    }

    text.push_str(" = ");

    match &assignment.right {
        DefaultExpression::Identifier(name) => text.push_str(name),
        DefaultExpression::Literal(raw) => text.push_str(raw),
        DefaultExpression::Other { span } => text.push_str(&source.span_text((*span)?)?),
    }

    Some(text)
}
