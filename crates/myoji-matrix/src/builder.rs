use myoji_core::lookup::SurnameLookup;

/// Delimiter between interchangeable suffixes inside one column label,
/// e.g. `川|河`.
pub const ALT_SEPARATOR: char = '|';
/// Token between the row set and the column set of a matrix input.
pub const AXIS_SEPARATOR: &str = "x";

/// Row and column label sets parsed out of one matrix input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixInput {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
}

impl MatrixInput {
    /// Parse `"<row1> <row2> ... x <col1> <col2|alt2> ..."`: labels are
    /// whitespace-separated, with a literal `x` token between the two sets.
    pub fn parse(input: &str) -> Option<Self> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let split = tokens.iter().position(|token| *token == AXIS_SEPARATOR)?;

        let rows: Vec<String> = tokens[..split].iter().map(|t| t.to_string()).collect();
        let cols: Vec<String> = tokens[split + 1..].iter().map(|t| t.to_string()).collect();
        if rows.is_empty() || cols.is_empty() {
            return None;
        }

        Some(Self { rows, cols })
    }
}

/// Population count for every row×column surname combination.
///
/// Cells are filled strictly sequentially in row-major order. A column label
/// may list alternative suffixes; the cell sums the counts over all of them,
/// and a failed sub-lookup contributes zero rather than aborting the grid.
/// Repeated combinations are deduplicated by the lookup service's cache, not
/// here.
pub async fn build_matrix<L: SurnameLookup>(
    lookup: &L,
    rows: &[String],
    cols: &[String],
) -> Vec<Vec<u64>> {
    let mut grid = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(cols.len());
        for col in cols {
            let mut count = 0u64;
            for alt in col.split(ALT_SEPARATOR) {
                let myoji = format!("{row}{alt}");
                match lookup.lookup(&myoji, true).await {
                    Some(record) => count += record.count_in_country,
                    None => tracing::debug!("no count for {myoji}"),
                }
            }
            cells.push(count);
        }
        grid.push(cells);
    }
    grid
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use myoji_types::SurnameRecord;

    use super::*;

    struct TableLookup {
        counts: HashMap<String, u64>,
    }

    impl TableLookup {
        fn new(entries: &[(&str, u64)]) -> Self {
            Self {
                counts: entries
                    .iter()
                    .map(|(myoji, count)| (myoji.to_string(), *count))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl SurnameLookup for TableLookup {
        async fn lookup(&self, surname: &str, _use_cache: bool) -> Option<SurnameRecord> {
            self.counts.get(surname).map(|&count| SurnameRecord {
                kanji: surname.to_string(),
                readings: vec!["よみ".to_string()],
                rank_in_country: 1,
                count_in_country: count,
                origin: None,
                origin_detail_uri: None,
            })
        }
    }

    fn labels(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn parses_rows_and_columns_around_the_x_token() {
        let input = MatrixInput::parse("上 中 下 x 山 川|河 原").unwrap();
        assert_eq!(input.rows, labels(&["上", "中", "下"]));
        assert_eq!(input.cols, labels(&["山", "川|河", "原"]));
    }

    #[test]
    fn input_without_the_x_token_is_rejected() {
        assert_eq!(MatrixInput::parse("上 中 下"), None);
    }

    #[test]
    fn input_with_an_empty_side_is_rejected() {
        assert_eq!(MatrixInput::parse("x 山 川"), None);
        assert_eq!(MatrixInput::parse("上 中 x"), None);
        assert_eq!(MatrixInput::parse("x"), None);
    }

    #[tokio::test]
    async fn sums_counts_over_column_alternatives() {
        let lookup = TableLookup::new(&[("上山", 100), ("上川", 50)]);
        let grid = build_matrix(&lookup, &labels(&["上"]), &labels(&["山|川"])).await;
        assert_eq!(grid, vec![vec![150]]);
    }

    #[tokio::test]
    async fn failed_alternative_contributes_zero() {
        let lookup = TableLookup::new(&[("上山", 100)]);
        let grid = build_matrix(&lookup, &labels(&["上"]), &labels(&["山|川"])).await;
        assert_eq!(grid, vec![vec![100]]);
    }

    #[tokio::test]
    async fn cell_with_no_resolvable_surname_is_zero() {
        let lookup = TableLookup::new(&[]);
        let grid = build_matrix(&lookup, &labels(&["上"]), &labels(&["山", "川|河"])).await;
        assert_eq!(grid, vec![vec![0, 0]]);
    }

    #[tokio::test]
    async fn grid_is_row_major_and_rectangular() {
        let lookup = TableLookup::new(&[
            ("上山", 1),
            ("上川", 2),
            ("中山", 3),
            ("中川", 4),
        ]);
        let grid = build_matrix(
            &lookup,
            &labels(&["上", "中"]),
            &labels(&["山", "川"]),
        )
        .await;
        assert_eq!(grid, vec![vec![1, 2], vec![3, 4]]);
    }
}
