//! Detection of placeholders that a render would leave in place

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::fields::Fields;

use super::scanner::{placeholders, Placeholder};

/// Placeholders in `template` that `object` cannot resolve
///
/// These are exactly the placeholders [`render`](super::render) leaves
/// untouched.
pub fn unresolved<'t, T: Fields + ?Sized>(object: &T, template: &'t str) -> Vec<Placeholder<'t>> {
    placeholders(template)
        .filter(|p| object.field(p.name).is_none())
        .collect()
}

/// Format unresolved placeholders as a warning report over the template
///
/// Returns an empty string when `missing` is empty.
pub fn check_report(template: &str, filename: &str, missing: &[Placeholder<'_>]) -> String {
    let Some(first) = missing.first() else {
        return String::new();
    };

    let mut report = Report::build(ReportKind::Warning, filename, first.span.start).with_message(
        format!("{} placeholder(s) will not be replaced", missing.len()),
    );
    for placeholder in missing {
        let message = if placeholder.name.is_empty() {
            "empty placeholder name".to_string()
        } else {
            format!("no field named '{}'", placeholder.name)
        };
        report = report.with_label(
            Label::new((filename, placeholder.span.clone()))
                .with_message(message)
                .with_color(Color::Yellow),
        );
    }

    let mut buf = Vec::new();
    if report
        .finish()
        .write((filename, Source::from(template)), &mut buf)
        .is_err()
    {
        return missing
            .iter()
            .map(|p| format!("unresolved placeholder {} at {:?}", p.raw, p.span))
            .collect::<Vec<_>>()
            .join("\n");
    }
    String::from_utf8_lossy(&buf).into_owned()
}
