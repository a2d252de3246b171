//! Character classification and column math shared by the scanner and the layout

/// Tab width for visual column calculations
pub const TABULATOR_WIDTH: usize = 4;

/// Check if a character forms part of a word (letter, digit or underscore)
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Convert a character column to visual column (screen position).
/// Accounts for tab expansion when converting character index to screen position.
pub fn char_col_to_visual_col(text: &str, char_col: usize) -> usize {
    let mut visual_col = 0;

    for (i, ch) in text.chars().enumerate() {
        if i >= char_col {
            break;
        }

        if ch == '\t' {
            let tab_width = TABULATOR_WIDTH - (visual_col % TABULATOR_WIDTH);
            visual_col += tab_width;
        } else {
            visual_col += 1;
        }
    }

    visual_col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('é'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('.'));
    }

    #[test]
    fn test_visual_col_expands_tabs() {
        assert_eq!(char_col_to_visual_col("abc", 2), 2);
        assert_eq!(char_col_to_visual_col("\tx", 1), 4);
        assert_eq!(char_col_to_visual_col("ab\tx", 3), 4);
        assert_eq!(char_col_to_visual_col("abcd\tx", 5), 8);
    }
}
