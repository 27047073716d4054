use super::tokenizer::Words;
use super::Style;

/// Join `words` into the canonical string for `style`.
pub fn render(words: &Words, style: Style) -> String {
    match style {
        Style::Camel => words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            })
            .collect(),
        Style::Snake | Style::Dot | Style::Kebab => {
            let separator = style.separator().unwrap_or_default();
            words
                .iter()
                .map(|word| word.to_lowercase())
                .collect::<Vec<_>>()
                .join(separator)
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
