use super::Style;

/// Whether `ch` belongs to the sanitization alphabet of `style`.
///
/// Snake keeps everything; its only normalization is the whitespace pass in
/// the tokenizer.
pub fn keeps(style: Style, ch: char) -> bool {
    match style {
        Style::Snake => true,
        Style::Camel => is_word_char(ch) || ch.is_whitespace() || ch == '-',
        Style::Dot => is_word_char(ch) || ch.is_whitespace() || ch == '-' || ch == '.',
        Style::Kebab => ch.is_ascii_alphanumeric() || ch == '-',
    }
}

/// Strip every character outside the alphabet of `style`.
///
/// For kebab this is the second pass; the tokenizer applies it after
/// boundaries have been decided on the raw text.
pub fn sanitize(text: &str, style: Style) -> String {
    text.chars().filter(|&ch| keeps(style, ch)).collect()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_drops_punctuation() {
        assert_eq!(sanitize("hello world! test", Style::Camel), "hello world test");
        assert_eq!(sanitize("a_b-c.d", Style::Camel), "a_b-cd");
    }

    #[test]
    fn test_dot_keeps_its_join_character() {
        assert_eq!(sanitize("hello.world?", Style::Dot), "hello.world");
    }

    #[test]
    fn test_non_ascii_letters_are_removed() {
        assert_eq!(sanitize("café au lait", Style::Camel), "caf au lait");
        assert_eq!(sanitize("naïve-ok", Style::Kebab), "nave-ok");
    }

    #[test]
    fn test_kebab_alphabet() {
        assert_eq!(sanitize("user-full name!", Style::Kebab), "user-fullname");
    }

    #[test]
    fn test_snake_is_untouched() {
        assert_eq!(sanitize("Keep_ME! as is", Style::Snake), "Keep_ME! as is");
    }
}
