//! Width-aware plain-text table rendering

use console::measure_text_width;

/// Render headers and rows as an aligned text table.
///
/// Column widths follow the widest cell, measured display-width-aware so
/// styled or non-ASCII content lines up. Returns the table as a string so
/// callers decide where it goes.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();

    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(columns) {
            let width = measure_text_width(cell);
            if width > widths[idx] {
                widths[idx] = width;
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, separator.into_iter(), &widths);

    for row in rows {
        push_row(&mut out, row.iter().cloned(), &widths);
    }

    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let mut first = true;
    for (cell, width) in cells.zip(widths) {
        if !first {
            out.push_str("  ");
        }
        first = false;

        out.push_str(&cell);
        let padding = width.saturating_sub(measure_text_width(&cell));
        out.push_str(&" ".repeat(padding));
    }
    // Trailing spaces from the last column padding are unwanted.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
