//! Fixed-width text table for the count matrix.
//!
//! Terminals size columns in characters, so all padding math runs on
//! character counts narrowed by each label's excess visual width; that keeps
//! the `|` rules on the same screen column for any mix of wide and narrow
//! labels.

use crate::width::{display_width, excess_width};

/// Nominal width of one count cell, in display cells.
pub const CELL_WIDTH: usize = 10;

/// Format the grid under its row and column labels.
///
/// Header labels are centered, row labels and counts right-aligned, counts
/// grouped with thousands separators.
pub fn render_table(rows: &[String], cols: &[String], grid: &[Vec<u64>]) -> String {
    let label_width = rows.iter().map(|row| display_width(row)).max().unwrap_or(0);

    let mut out = String::new();

    let header: Vec<String> = cols
        .iter()
        .map(|col| {
            let field = CELL_WIDTH.saturating_sub(excess_width(col));
            format!(" {} ", pad_center(col, field))
        })
        .collect();
    out.push_str(&format!(" {} |{}\n", " ".repeat(label_width), header.join("|")));

    let rule: Vec<String> = cols.iter().map(|_| "-".repeat(CELL_WIDTH + 2)).collect();
    out.push_str(&format!("-{}-|{}\n", "-".repeat(label_width), rule.join("|")));

    for (row, cells) in rows.iter().zip(grid) {
        let field = label_width.saturating_sub(excess_width(row));
        out.push_str(&format!(" {}", pad_right_align(row, field)));
        for value in cells {
            out.push_str(&format!(
                " | {}",
                pad_right_align(&group_thousands(*value), CELL_WIDTH)
            ));
        }
        out.push('\n');
    }

    out
}

/// Decimal digits grouped in threes, e.g. `814000` -> `814,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn pad_right_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - len), s)
}

fn pad_center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe_columns(line: &str) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut cell = 0;
        for c in line.chars() {
            if c == '|' {
                offsets.push(cell);
            }
            cell += display_width(&c.to_string());
        }
        offsets
    }

    #[test]
    fn grouping_inserts_thousands_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2_000), "2,000");
        assert_eq!(group_thousands(814_000), "814,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn renders_expected_small_table() {
        let rows = vec!["上".to_string(), "中".to_string()];
        let cols = vec!["山".to_string(), "川".to_string()];
        let grid = vec![vec![100, 50], vec![2_000, 0]];

        let table = render_table(&rows, &cols, &grid);
        let lines: Vec<&str> = table.lines().map(str::trim_end).collect();
        assert_eq!(
            lines,
            vec![
                "    |     山     |     川",
                "----|------------|------------",
                " 上 |        100 |         50",
                " 中 |      2,000 |          0",
            ]
        );
    }

    #[test]
    fn rules_share_one_screen_column_for_mixed_width_labels() {
        let rows = vec!["上".to_string(), "Smith".to_string(), "小比類巻".to_string()];
        let cols = vec!["山".to_string(), "かわ".to_string(), "X".to_string()];
        let grid = vec![
            vec![100, 150, 0],
            vec![0, 0, 0],
            vec![12, 1_234_567, 3],
        ];

        let table = render_table(&rows, &cols, &grid);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);

        let header_columns = pipe_columns(lines[0]);
        assert_eq!(header_columns.len(), cols.len());
        for line in &lines[1..] {
            assert_eq!(pipe_columns(line), header_columns, "line {line:?}");
        }
    }

    #[test]
    fn rule_line_spans_the_full_table_width() {
        let rows = vec!["山田".to_string()];
        let cols = vec!["川".to_string(), "原".to_string()];
        let grid = vec![vec![1, 2]];

        let table = render_table(&rows, &cols, &grid);
        let lines: Vec<&str> = table.lines().collect();
        let label_width = display_width("山田");
        assert_eq!(
            display_width(lines[1]),
            label_width + 2 + cols.len() * (CELL_WIDTH + 3)
        );
        assert!(display_width(lines[0].trim_end()) <= display_width(lines[1]));
    }

    #[test]
    fn alternative_sets_appear_verbatim_in_the_header() {
        let rows = vec!["上".to_string()];
        let cols = vec!["川|河".to_string()];
        let grid = vec![vec![150]];

        let table = render_table(&rows, &cols, &grid);
        let header = table.lines().next().unwrap();
        assert!(header.contains("川|河"));
    }

    #[test]
    fn empty_rows_render_headers_only() {
        let table = render_table(&[], &["山".to_string()], &[]);
        assert_eq!(table.lines().count(), 2);
    }
}
