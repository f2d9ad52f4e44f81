//! Scan-and-replace rendering of placeholder templates

use crate::fields::Fields;

use super::resolver::resolve_field;
use super::scanner::placeholders;

/// Render `template`, replacing each `${name}` with the matching field of `object`
///
/// Placeholders are replaced in order of appearance. A placeholder whose
/// field cannot be resolved is left exactly as written. Rendering never
/// fails; the object is not consulted at all when the template has no
/// placeholders.
pub fn render<T: Fields + ?Sized>(object: &T, template: &str) -> String {
    let mut output = template.to_string();
    // Spans refer to `template`; `delta` is how far `output` has shrunk
    // (negative when it grew) ahead of the next placeholder.
    let mut delta: isize = 0;

    for placeholder in placeholders(template) {
        let Some(value) = resolve_field(object, placeholder.name) else {
            continue;
        };
        let replacement = value.to_string();
        let start = shift(placeholder.span.start, delta);
        let end = shift(placeholder.span.end, delta);
        output.replace_range(start..end, &replacement);
        delta += placeholder.raw.len() as isize - replacement.len() as isize;
    }

    output
}

fn shift(offset: usize, delta: isize) -> usize {
    (offset as isize - delta) as usize
}
