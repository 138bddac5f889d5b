use unicode_width::UnicodeWidthChar;

/// Terminal cells the string occupies in an East Asian context: Fullwidth,
/// Wide and Ambiguous characters take two cells, everything else one.
pub fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| UnicodeWidthChar::width_cjk(c).unwrap_or(1))
        .sum()
}

/// Cells the string gains over its character count from double-width
/// characters. Padding math works in characters, so fields holding wide text
/// are narrowed by this much to stay visually aligned.
pub fn excess_width(s: &str) -> usize {
    display_width(s).saturating_sub(s.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_characters_take_two_cells() {
        assert_eq!(display_width("山田"), 4);
    }

    #[test]
    fn narrow_characters_take_one_cell() {
        assert_eq!(display_width("Smith"), 5);
    }

    #[test]
    fn mixed_strings_sum_per_character() {
        assert_eq!(display_width("山田Smith"), 9);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn kana_is_wide() {
        assert_eq!(display_width("やまだ"), 6);
    }

    #[test]
    fn excess_counts_only_the_extra_cells() {
        assert_eq!(excess_width("山田"), 2);
        assert_eq!(excess_width("Smith"), 0);
        assert_eq!(excess_width("山田Smith"), 2);
    }
}
