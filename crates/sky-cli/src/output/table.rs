//! Plain aligned-column table rendering for terminal output.

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: usize = 2;

/// Render headers and string rows as an aligned table with a dashed rule
/// under the header. Columns wider than the terminal budget are shrunk and
/// their cells truncated with an ellipsis.
#[must_use]
pub fn render(headers: &[String], rows: &[Vec<String>], options: TableOptions) -> String {
    let widths = column_widths(headers, rows, options.max_width);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers, &widths, false));
    lines.push("-".repeat(widths.iter().sum::<usize>() + GAP * widths.len().saturating_sub(1)));
    for row in rows {
        lines.push(format_row(row, &widths, options.color));
    }
    lines.join("\n")
}

fn column_widths(headers: &[String], rows: &[Vec<String>], max_width: Option<usize>) -> Vec<usize> {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count()])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(budget) = max_width {
        let total = |widths: &[usize]| {
            widths.iter().sum::<usize>() + GAP * widths.len().saturating_sub(1)
        };
        // Shave the widest column until the table fits or nothing can shrink.
        while total(&widths) > budget {
            let Some((index, _)) = widths
                .iter()
                .enumerate()
                .filter(|(_, width)| **width > MIN_COLUMN)
                .max_by_key(|(_, width)| **width)
            else {
                break;
            };
            widths[index] -= 1;
        }
    }

    widths
}

fn format_row(cells: &[String], widths: &[usize], color: bool) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let raw = cells.get(index).map_or("-", String::as_str);
            let text = truncate(raw, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            if color {
                format!("{}{pad}", colorize(&text))
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(&" ".repeat(GAP))
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Color the status tags the booking services emit.
fn colorize(value: &str) -> String {
    let code = match value {
        "CONFIRMED" | "PAID" | "SUCCESS" | "true" => Some("32"),
        "PENDING" | "PROCESSING" | "PARTIALLY_REFUNDED" => Some("33"),
        "CANCELLED" | "FAILED" | "false" => Some("31"),
        _ => None,
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn columns_align_across_rows() {
        let table = render(
            &headers(&["id", "status"]),
            &[
                vec!["1".into(), "PENDING".into()],
                vec!["200".into(), "CONFIRMED".into()],
            ],
            TableOptions::default(),
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        // Both data rows start their second column at the same offset.
        let offset = lines[2].find("PENDING").expect("status cell");
        assert_eq!(lines[3].find("CONFIRMED"), Some(offset));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render(
            &headers(&["id", "status"]),
            &[vec!["1".into()]],
            TableOptions::default(),
        );
        assert!(table.lines().nth(2).is_some_and(|line| line.contains('-')));
    }

    #[test]
    fn wide_columns_are_truncated_to_fit() {
        let table = render(
            &headers(&["name"]),
            &[vec!["a very long airline name that overflows".into()]],
            TableOptions {
                max_width: Some(16),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("data row");
        assert!(row.chars().count() <= 16);
        assert!(row.contains('…'));
    }

    #[test]
    fn colorize_wraps_known_status_tags() {
        assert!(colorize("CONFIRMED").contains("\u{1b}[32m"));
        assert!(colorize("PENDING").contains("\u{1b}[33m"));
        assert!(colorize("CANCELLED").contains("\u{1b}[31m"));
        assert_eq!(colorize("DEL"), "DEL");
    }
}
