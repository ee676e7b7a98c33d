#![cfg(test)]
mod tests {
    use crate::tools::clean::utils::{
        normalize_whitespace, remove_control_chars, remove_zero_width_chars,
    };
    use crate::tools::clean::*;

    #[test]
    fn test_zero_width_characters() {
        assert_eq!(remove_zero_width_chars("hello\u{200B}world"), "helloworld");
        assert_eq!(remove_zero_width_chars("test\u{200C}ing"), "testing");
        assert_eq!(remove_zero_width_chars("word\u{200D}join"), "wordjoin");
        assert_eq!(remove_zero_width_chars("\u{FEFF}text"), "text");
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(remove_control_chars("hello\x00world"), "helloworld");
        assert_eq!(remove_control_chars("keep\nnewline"), "keep\nnewline");
        assert_eq!(remove_control_chars("keep\ttab"), "keep\ttab");
    }

    #[test]
    fn test_whitespace_normalization() {
        assert_eq!(normalize_whitespace("hello   world"), "hello world");
        assert_eq!(normalize_whitespace("  trim  me  "), "trim me");
        assert_eq!(normalize_whitespace("multiple\n\n\nlines"), "multiple lines");
        assert_eq!(normalize_whitespace("lots\t\t\tof\t\ttabs"), "lots of tabs");
    }

    #[test]
    fn test_clean_text_handles_crlf_and_nbsp() {
        assert_eq!(clean_text("First\r\nSecond\u{00A0}\u{00A0}Third"), "First Second Third");
    }

    #[test]
    fn test_clean_text_empty_and_whitespace() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t  "), "");
    }

    #[test]
    fn test_word_count_ignores_empty_tokens() {
        assert_eq!(word_count("a  b\n\nc"), 3);
        assert_eq!(word_count("   "), 0);
    }
}
