//! Plain-text rendering of the current page.

use dashgrid::Grid;
use dashgrid::model::Alignment;
use dashgrid::model::ColumnSpec;
use dashgrid::model::Direction;
use dashgrid::page::PageItem;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Cells wider than this are truncated with an ellipsis.
const MAX_CELL_WIDTH: usize = 32;

const COLUMN_GAP: &str = "  ";

fn display_width(s: &str) -> usize {
    s.width()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

fn pad(s: &str, width: usize, align: Alignment) -> String {
    let gap = width.saturating_sub(display_width(s));
    match align {
        Alignment::Left => format!("{}{}", s, " ".repeat(gap)),
        Alignment::Right => format!("{}{}", " ".repeat(gap), s),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(gap - left))
        }
    }
}

fn header_label(grid: &Grid, column: &ColumnSpec) -> String {
    match grid.sort() {
        Some(sort) if sort.key == column.key && grid.config().enable_sorting => {
            let arrow = match sort.direction {
                Direction::Ascending => '↑',
                Direction::Descending => '↓',
            };
            format!("{} {}", column.label, arrow)
        }
        _ => column.label.clone(),
    }
}

/// Renders title, table, footer and page strip.
pub fn render(grid: &Grid) -> String {
    let mut lines = Vec::new();
    let config = grid.config();

    if let Some(title) = &config.title {
        lines.push(title.clone());
    }
    if let Some(description) = &config.description {
        lines.push(description.clone());
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }

    let selectable = config.enable_selection;
    let columns = grid.columns();

    let mut table: Vec<Vec<String>> = Vec::new();
    let mut header: Vec<String> = columns.iter().map(|c| header_label(grid, c)).collect();
    if selectable {
        header.insert(0, String::new());
    }
    table.push(header);

    for row in grid.page_rows() {
        let mut cells: Vec<String> = columns
            .iter()
            .map(|c| truncate_to_width(&grid.cell(row, c), MAX_CELL_WIDTH))
            .collect();
        if selectable {
            let mark = if grid.is_selected(row.id()) { "[x]" } else { "[ ]" };
            cells.insert(0, mark.to_string());
        }
        table.push(cells);
    }

    let mut aligns: Vec<Alignment> = columns.iter().map(|c| c.align).collect();
    if selectable {
        aligns.insert(0, Alignment::Left);
    }
    let widths: Vec<usize> = (0..aligns.len())
        .map(|i| {
            table
                .iter()
                .map(|cells| display_width(&cells[i]))
                .max()
                .unwrap_or(0)
        })
        .collect();

    for (n, cells) in table.iter().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .zip(&aligns)
            .map(|((cell, &width), &align)| pad(cell, width, align))
            .collect();
        lines.push(line.join(COLUMN_GAP).trim_end().to_string());
        if n == 0 {
            let rule: usize = widths.iter().sum::<usize>()
                + COLUMN_GAP.len() * widths.len().saturating_sub(1);
            lines.push("-".repeat(rule));
        }
    }

    if let Some(message) = grid.status_message() {
        lines.push(message.to_string());
    }

    lines.push(String::new());
    lines.push(footer(grid));
    if config.enable_pagination && grid.total_pages() > 1 {
        lines.push(page_strip(grid));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `Showing 11-20 of 42`, plus the selection count when rows are selected.
pub fn footer(grid: &Grid) -> String {
    let window = grid.page_window();
    let mut text = format!(
        "Showing {}-{} of {}",
        window.start_item, window.end_item, window.total_items
    );
    let selected = grid.selected_ids().len();
    if selected > 0 {
        text.push_str(&format!(" ({} selected)", selected));
    }
    text
}

/// `‹ 1 … 4 [5] 6 … 10 ›` with the arrows dropped at either end.
pub fn page_strip(grid: &Grid) -> String {
    let window = grid.page_window();
    let mut parts = Vec::new();
    if window.has_previous() {
        parts.push("‹".to_string());
    }
    for item in grid.page_numbers() {
        parts.push(match item {
            PageItem::Page(n) if n == window.current_page => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        });
    }
    if window.has_next() {
        parts.push("›".to_string());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid::config::TableConfig;
    use dashgrid::model::{ColumnType, Row};

    fn grid(n: usize) -> Grid {
        let rows = (1..=n)
            .map(|i| {
                Row::new(i.to_string())
                    .with("name", format!("Person {}", i))
                    .with("salary", (i * 1000) as i64)
            })
            .collect();
        Grid::new(vec![
            ColumnSpec::new("name", "Name"),
            ColumnSpec::new("salary", "Salary")
                .kind(ColumnType::Currency)
                .align(Alignment::Right),
        ])
        .with_config(TableConfig::default().with_items_per_page(2).with_title("Staff"))
        .with_rows(rows)
        .unwrap()
    }

    #[test]
    fn test_render_first_page() {
        let text = render(&grid(3));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Staff");
        assert_eq!(lines[2], "Name      Salary");
        assert_eq!(lines[4], "Person 1  $1,000");
        assert_eq!(lines[5], "Person 2  $2,000");
        assert!(text.contains("Showing 1-2 of 3"));
        assert!(text.contains("[1] 2 ›"));
    }

    #[test]
    fn test_page_strip_windows() {
        let mut grid = grid(20);
        grid.go_to_page(5);
        assert_eq!(page_strip(&grid), "‹ 1 … 4 [5] 6 … 10 ›");
        grid.go_to_page(10);
        assert_eq!(page_strip(&grid), "‹ 1 … 7 8 9 [10]");
    }

    #[test]
    fn test_empty_result_shows_message() {
        let mut grid = grid(3);
        grid.set_search("nobody");
        let text = render(&grid);
        assert!(text.contains("No data available"));
        assert!(text.contains("Showing 0-0 of 0"));
    }

    #[test]
    fn test_truncate_and_pad() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(pad("ab", 6, Alignment::Center), "  ab  ");
        assert_eq!(pad("ab", 4, Alignment::Right), "  ab");
    }
}
