//! Console writers built on [`render`]
//!
//! Each `print*` function writes to standard output and has a `write*` twin
//! that takes any [`io::Write`] sink.

use std::cmp::Ordering;
use std::io::{self, Write};

use tracing::trace;

use crate::config::RenderConfig;
use crate::error::PrintError;
use crate::fields::Fields;
use crate::printf::{sprintf, Arg};
use crate::template::render;

/// Render `object` into `format` and write the result verbatim
pub fn write_object<W, T>(out: &mut W, object: &T, format: &str) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    T: Fields + ?Sized,
{
    out.write_all(render(object, format).as_bytes())?;
    Ok(())
}

/// Render `object` into `format`, fill the remaining `%` specifiers from
/// `args`, and write the result
///
/// Field substitution runs first, so the rendered text itself is what the
/// `%` stage parses.
pub fn write_object_args<W, T>(
    out: &mut W,
    object: &T,
    format: &str,
    args: &[Arg],
) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    T: Fields + ?Sized,
{
    let rendered = render(object, format);
    let text = sprintf(&rendered, args)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// Write every element on its own line, in iteration order
pub fn write_list<W, I>(out: &mut W, items: I, format: &str) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Fields,
{
    write_list_with(out, items, format, &RenderConfig::default())
}

/// [`write_list`] with explicit configuration
pub fn write_list_with<W, I>(
    out: &mut W,
    items: I,
    format: &str,
    config: &RenderConfig,
) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Fields,
{
    let line = config.line_format(format);
    for (index, item) in items.into_iter().enumerate() {
        trace!(index, "writing element");
        write_object(out, &item, &line)?;
    }
    Ok(())
}

/// Sort the elements by their natural order, then write each on its own line
///
/// Nothing is written if any two compared elements have no order relative to
/// each other.
pub fn write_sorted<W, I>(out: &mut W, items: I, format: &str) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Fields + PartialOrd,
{
    write_sorted_with(out, items, format, &RenderConfig::default())
}

/// [`write_sorted`] with explicit configuration
pub fn write_sorted_with<W, I>(
    out: &mut W,
    items: I,
    format: &str,
    config: &RenderConfig,
) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Fields + PartialOrd,
{
    let sorted = sort_naturally(items)?;
    write_list_with(out, sorted, format, config)
}

/// Stable merge sort that fails on the first incomparable pair
///
/// Sorting runs over indices so the elements themselves move once, at the
/// end, and only when every comparison succeeded.
fn sort_naturally<I>(items: I) -> Result<Vec<I::Item>, PrintError>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut scratch = Vec::with_capacity(items.len());
    merge_sort(&items, &mut order, &mut scratch)?;

    let mut slots: Vec<Option<I::Item>> = items.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect())
}

fn merge_sort<T: PartialOrd>(
    items: &[T],
    order: &mut [usize],
    scratch: &mut Vec<usize>,
) -> Result<(), PrintError> {
    if order.len() < 2 {
        return Ok(());
    }
    let mid = order.len() / 2;
    let (left, right) = order.split_at_mut(mid);
    merge_sort(items, left, scratch)?;
    merge_sort(items, right, scratch)?;

    scratch.clear();
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        let (a, b) = (left[i], right[j]);
        // Ties take from the left run, which holds the earlier elements.
        match items[b].partial_cmp(&items[a]) {
            Some(Ordering::Less) => {
                scratch.push(b);
                j += 1;
            }
            Some(_) => {
                scratch.push(a);
                i += 1;
            }
            None => {
                return Err(PrintError::Incomparable {
                    left: a.min(b),
                    right: a.max(b),
                })
            }
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);
    order.copy_from_slice(scratch);
    Ok(())
}

/// Render `object` into `format` and print it to standard output
pub fn print<T: Fields + ?Sized>(object: &T, format: &str) -> Result<(), PrintError> {
    let mut out = io::stdout().lock();
    write_object(&mut out, object, format)?;
    out.flush()?;
    Ok(())
}

/// Render, apply positional `args`, and print to standard output
///
/// ```rust,no_run
/// use object_formatter::{args, fields, print_args};
///
/// struct Person { name: String }
/// fields!(Person { name });
///
/// let person = Person { name: "Ana".into() };
/// print_args(&person, "${name} has %d potatoes%n", &args![3]).unwrap();
/// ```
pub fn print_args<T: Fields + ?Sized>(
    object: &T,
    format: &str,
    args: &[Arg],
) -> Result<(), PrintError> {
    let mut out = io::stdout().lock();
    write_object_args(&mut out, object, format, args)?;
    out.flush()?;
    Ok(())
}

/// Print every element on its own line, in iteration order
pub fn print_list<I>(items: I, format: &str) -> Result<(), PrintError>
where
    I: IntoIterator,
    I::Item: Fields,
{
    let mut out = io::stdout().lock();
    write_list(&mut out, items, format)?;
    out.flush()?;
    Ok(())
}

/// Print every element on its own line, in natural order
pub fn print_sorted<I>(items: I, format: &str) -> Result<(), PrintError>
where
    I: IntoIterator,
    I::Item: Fields + PartialOrd,
{
    let mut out = io::stdout().lock();
    write_sorted(&mut out, items, format)?;
    out.flush()?;
    Ok(())
}
