//! Aligned plain-text tables.

const GAP: &str = "  ";
const MIN_WIDTH: usize = 6;
const ELLIPSIS: char = '…';

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Terminal width to fit into, if known.
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`.
///
/// Cells are padded before coloring, so escape codes never disturb
/// alignment. Only cells in a `severity` column are colored.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&clip(header, *width), *width, false)
    }));
    let mut lines = vec![header_line.clone(), "-".repeat(header_line.chars().count())];

    for row in rows {
        let cells = headers.iter().zip(&widths).enumerate().map(|(column, (header, width))| {
            let cell = clip(row.get(column).map_or("-", String::as_str), *width);
            let right = is_number(&cell);
            let padded = pad(&cell, *width, right);
            if options.color && *header == "severity" {
                paint(&cell, &padded)
            } else {
                padded
            }
        });
        lines.push(join_cells(cells));
    }

    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(GAP)
}

/// Narrow the widest columns, never below their header or `MIN_WIDTH`,
/// until the row fits or nothing more can give.
fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    let floor = |column: usize| headers[column].chars().count().max(MIN_WIDTH);

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = (0..widths.len())
            .filter(|column| widths[*column] > floor(*column))
            .max_by_key(|column| widths[*column]);
        let Some(column) = widest else {
            break;
        };
        widths[column] -= 1;
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push(ELLIPSIS);
    clipped
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Wrap the `cell` part of `padded` in the color for its severity.
fn paint(cell: &str, padded: &str) -> String {
    let code = match cell {
        "error" => "31",
        "warning" => "33",
        _ => return padded.to_string(),
    };
    let fill = &padded[cell.len()..];
    format!("\u{1b}[{code}m{cell}\u{1b}[0m{fill}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn long_cells_shrink_to_fit() {
        let rows = vec![vec!["error".to_string(), "x".repeat(80)]];
        let table = render_table(
            &["severity", "message"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn numbers_align_right_and_text_left() {
        let rows = vec![
            vec!["7".to_string(), "short".to_string()],
            vec!["1200".to_string(), "longer text".to_string()],
        ];
        let table = render_table(&["record", "message"], &rows, PLAIN);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "record  message    ");
        assert_eq!(lines[2], "     7  short      ");
        assert_eq!(lines[3], "  1200  longer text");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_table(&["record", "file"], &[vec!["3".to_string()]], PLAIN);
        assert_eq!(table.lines().nth(2), Some("     3  -     "));
    }

    #[test]
    fn severity_is_colored_only_when_asked() {
        let rows = vec![vec!["warning".to_string(), "warning".to_string()]];
        let headers = ["severity", "message"];
        let colored = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert_eq!(
            colored.lines().nth(2),
            Some("\u{1b}[33mwarning\u{1b}[0m   warning")
        );
        assert!(!render_table(&headers, &rows, PLAIN).contains('\u{1b}'));
    }
}
