// src/core/tokenizer.rs

/// Decides which characters belong to a word.
pub trait WordChars {
    fn is_word_char(&self, c: char) -> bool;
}

/// Letters and digits of any script, plus `_`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordChars;

impl WordChars for UnicodeWordChars {
    fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl<F> WordChars for F
where
    F: Fn(char) -> bool,
{
    fn is_word_char(&self, c: char) -> bool {
        self(c)
    }
}

/// The partial word at the end of `text`, or `""` when the text is empty or
/// ends in a non-word character.
pub fn trailing_word<'a, W: WordChars + ?Sized>(text: &'a str, chars: &W) -> &'a str {
    let start = text
        .char_indices()
        .rev()
        .take_while(|&(_, c)| chars.is_word_char(c))
        .last()
        .map_or(text.len(), |(idx, _)| idx);
    &text[start..]
}

/// Every maximal run of word characters in `text`, lowercased.
pub fn words<W: WordChars + ?Sized>(text: &str, chars: &W) -> Vec<String> {
    text.split(|c: char| !chars.is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Replaces the trailing partial word with `replacement`. If there is no
/// partial word the replacement is appended.
pub fn replace_trailing_word<W: WordChars + ?Sized>(
    text: &str,
    replacement: &str,
    chars: &W,
) -> String {
    let fragment = trailing_word(text, chars);
    let head = &text[..text.len() - fragment.len()];
    let mut out = String::with_capacity(head.len() + replacement.len());
    out.push_str(head);
    out.push_str(replacement);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_fragment() {
        let chars = UnicodeWordChars;
        assert_eq!(trailing_word("the quick fo", &chars), "fo");
        assert_eq!(trailing_word("the quick ", &chars), "");
        assert_eq!(trailing_word("", &chars), "");
        assert_eq!(trailing_word("hello", &chars), "hello");
        assert_eq!(trailing_word("a, snake_ca", &chars), "snake_ca");
        assert_eq!(trailing_word("end.", &chars), "");
        assert_eq!(trailing_word("скажи прив", &chars), "прив");
    }

    #[test]
    fn custom_predicate() {
        let letters_only = |c: char| c.is_alphabetic();
        assert_eq!(trailing_word("abc_de", &letters_only), "de");
        assert_eq!(words("x1y", &letters_only), vec!["x", "y"]);
    }

    #[test]
    fn splits_and_lowercases() {
        assert_eq!(
            words("Hello, World!  Привет_мир 42", &UnicodeWordChars),
            vec!["hello", "world", "привет_мир", "42"]
        );
        assert!(words(" ,.! ", &UnicodeWordChars).is_empty());
    }

    #[test]
    fn replaces_fragment() {
        let chars = UnicodeWordChars;
        assert_eq!(replace_trailing_word("say hel", "hello", &chars), "say hello");
        assert_eq!(replace_trailing_word("hel", "hello", &chars), "hello");
        assert_eq!(replace_trailing_word("say ", "hello", &chars), "say hello");
    }
}
