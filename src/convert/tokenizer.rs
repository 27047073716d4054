use super::{sanitizer, Style};
use crate::error::CaseError;

/// Ordered words extracted from the input, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Words(Vec<String>);

impl Words {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl IntoIterator for Words {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Words {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Separator,
    Other,
}

impl CharClass {
    fn is_letter(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper)
    }
}

fn classify(style: Style, ch: char) -> CharClass {
    if is_separator(style, ch) {
        CharClass::Separator
    } else if ch.is_ascii_lowercase() {
        CharClass::Lower
    } else if ch.is_ascii_uppercase() {
        CharClass::Upper
    } else if ch.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

fn is_separator(style: Style, ch: char) -> bool {
    match style {
        Style::Snake => ch.is_whitespace(),
        Style::Camel | Style::Kebab => ch.is_whitespace() || ch == '_' || ch == '-',
        Style::Dot => ch.is_whitespace() || ch == '_' || ch == '-' || ch == '.',
    }
}

/// Decide whether a word starts at `current`, given its neighbours in the
/// scanned text.
///
/// `lone_capital` is set when `prev` is an uppercase letter that itself opened
/// a word at a case change, as every capital in rendered camel output does.
fn is_boundary(
    style: Style,
    prev: CharClass,
    current: CharClass,
    next: Option<CharClass>,
    lone_capital: bool,
) -> bool {
    use CharClass::*;

    let letter_digit = style == Style::Kebab;
    match (prev, current) {
        (Lower, Upper) | (Digit, Upper) => true,
        // end of an acronym run: "HTTPSConnection" splits before the 'C'
        (Upper, Upper) => next == Some(Lower) || (style == Style::Camel && lone_capital),
        (p, Digit) if p.is_letter() => letter_digit,
        (Digit, Lower) => letter_digit,
        _ => false,
    }
}

/// Split `text` into words using the boundary rules of `style`.
///
/// Camel and dot are sanitized up front. Kebab decides boundaries on the raw
/// text and drops characters outside its alphabet as it goes, so punctuation
/// never separates two words. Snake only splits on whitespace and keeps
/// empty edge fragments so leading/trailing whitespace still renders.
pub fn tokenize(text: &str, style: Style) -> Result<Words, CaseError> {
    let words = match style {
        Style::Snake => split_whitespace_runs(text),
        Style::Camel | Style::Dot => scan(&sanitizer::sanitize(text, style), style),
        Style::Kebab => scan(text, style),
    };

    if style != Style::Snake && words.is_empty() {
        return Err(CaseError::NoValidCharacters);
    }

    Ok(words)
}

fn scan(text: &str, style: Style) -> Words {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev = CharClass::Separator;
    let mut lone_capital = false;

    for (i, &ch) in chars.iter().enumerate() {
        let class = classify(style, ch);

        if class == CharClass::Separator {
            flush(&mut current, &mut words);
            lone_capital = false;
        } else if sanitizer::keeps(style, ch) {
            let next = chars.get(i + 1).map(|&c| classify(style, c));
            let starts_word = is_boundary(style, prev, class, next, lone_capital);
            if starts_word {
                flush(&mut current, &mut words);
            }
            current.push(ch);
            lone_capital = starts_word && class == CharClass::Upper;
        } else {
            lone_capital = false;
        }

        prev = class;
    }

    flush(&mut current, &mut words);
    Words(words)
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn split_whitespace_runs(text: &str) -> Words {
    let mut fragments = vec![String::new()];
    let mut in_run = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                fragments.push(String::new());
                in_run = true;
            }
        } else {
            in_run = false;
            if let Some(last) = fragments.last_mut() {
                last.push(ch);
            }
        }
    }

    Words(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str, style: Style) -> Vec<String> {
        tokenize(text, style).unwrap().into_iter().collect()
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(words("hello__world", Style::Camel), vec!["hello", "world"]);
        assert_eq!(words("  a -_ b  ", Style::Camel), vec!["a", "b"]);
    }

    #[test]
    fn test_case_transitions() {
        assert_eq!(words("HelloWorld", Style::Dot), vec!["Hello", "World"]);
        assert_eq!(words("helloWorld", Style::Camel), vec!["hello", "World"]);
        assert_eq!(words("HTTPSConnection", Style::Kebab), vec!["HTTPS", "Connection"]);
        assert_eq!(words("ALLCAPS", Style::Kebab), vec!["ALLCAPS"]);
    }

    #[test]
    fn test_camel_capitals_after_a_case_change_are_single_letter_words() {
        assert_eq!(words("aBC", Style::Camel), vec!["a", "B", "C"]);
        assert_eq!(words("getAX", Style::Camel), vec!["get", "A", "X"]);
        assert_eq!(words("HTTPSConnection", Style::Camel), vec!["HTTPS", "Connection"]);
        // acronyms keep their run under the lowercase styles
        assert_eq!(words("aBC", Style::Kebab), vec!["a", "BC"]);
    }

    #[test]
    fn test_letter_digit_transitions_are_kebab_only() {
        assert_eq!(words("abc123def", Style::Kebab), vec!["abc", "123", "def"]);
        assert_eq!(words("abc123def", Style::Camel), vec!["abc123def"]);
        assert_eq!(words("user2Name", Style::Camel), vec!["user2", "Name"]);
    }

    #[test]
    fn test_kebab_punctuation_is_not_a_boundary() {
        assert_eq!(words("hello!world", Style::Kebab), vec!["helloworld"]);
        assert_eq!(words("user_full name!", Style::Kebab), vec!["user", "full", "name"]);
    }

    #[test]
    fn test_no_valid_characters() {
        assert_eq!(tokenize("!!!", Style::Camel), Err(CaseError::NoValidCharacters));
        assert_eq!(tokenize("-_-", Style::Kebab), Err(CaseError::NoValidCharacters));
        assert_eq!(tokenize("...", Style::Dot), Err(CaseError::NoValidCharacters));
    }

    #[test]
    fn test_snake_splits_on_whitespace_only() {
        assert_eq!(words("a  b\tc", Style::Snake), vec!["a", "b", "c"]);
        assert_eq!(words(" Mixed_Case! ", Style::Snake), vec!["", "Mixed_Case!", ""]);
        assert_eq!(words("!!!", Style::Snake), vec!["!!!"]);
    }

    #[test]
    fn test_snake_degenerates_instead_of_failing() {
        assert_eq!(words("", Style::Snake), vec![""]);
    }
}
