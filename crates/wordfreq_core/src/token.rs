use std::iter::Filter;
use std::str::Split;

type Separator = fn(char) -> bool;
type NonEmpty = fn(&&str) -> bool;

/// Unicode whitespace plus the four information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

fn is_non_empty(fragment: &&str) -> bool {
    !fragment.is_empty()
}

/// Iterator over the whitespace-delimited tokens of a text, in scan order.
pub struct Tokens<'a> {
    inner: Filter<Split<'a, Separator>, NonEmpty>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Splits `text` on runs of whitespace, never yielding empty fragments.
///
/// Tokens borrow from `text`; they are case- and punctuation-sensitive.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        inner: text
            .split(is_separator as Separator)
            .filter(is_non_empty as NonEmpty),
    }
}
