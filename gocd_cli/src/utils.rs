//! String helpers shared by the command layer.

use std::borrow::Cow;

use heck::ToKebabCase;

/// Column stops used when expanding tabs in usage text.
pub const TAB_WIDTH: usize = 8;

/// Convert a command type name into its invocation token.
///
/// `FooBar` becomes `foo-bar`, `ScheduleStage` becomes `schedule-stage`.
pub fn dasherize_name(name: &str) -> String {
    name.to_kebab_case()
}

/// Normalize a usage body written as an indented block in source.
///
/// Blank lines at either end are dropped, the indentation shared by every
/// non-blank line is removed and whitespace-only lines become empty.
/// Relative indentation between lines is preserved.
///
/// The margin is measured over every non-blank line, the first included, so
/// a first line written directly after the opening quote (no indentation)
/// leaves the rest of the body as written. Trailing whitespace on each line
/// is dropped.
pub fn clean_usage(text: &str) -> String {
    let lines: Vec<Cow<'_, str>> = text.lines().map(expand_tabs).collect();

    let margin = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                strip_columns(line, margin).trim_end()
            }
        })
        .collect();

    let start = dedented.iter().position(|line| !line.is_empty());
    let end = dedented.iter().rposition(|line| !line.is_empty());

    match (start, end) {
        (Some(start), Some(end)) => dedented[start..=end].join("\n"),
        _ => String::new(),
    }
}

fn expand_tabs(line: &str) -> Cow<'_, str> {
    if !line.contains('\t') {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    Cow::Owned(out)
}

/// Number of leading whitespace characters.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}

/// Drop the first `columns` characters, which callers guarantee are whitespace.
fn strip_columns(line: &str, columns: usize) -> &str {
    match line.char_indices().nth(columns) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}
