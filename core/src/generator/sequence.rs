use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of tokens in order, wrapping around at the end.
///
/// The palette passed to [`TokenSource::draw`] is only consulted when the list is
/// empty, so scripted boards can use any kind regardless of configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SequenceTokenSource {
    tokens: Vec<Token>,
    drawn: usize,
}

impl SequenceTokenSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, drawn: 0 }
    }

    /// How many tokens have been handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl TokenSource for SequenceTokenSource {
    fn draw(&mut self, palette: &[Token]) -> Token {
        let token = if self.tokens.is_empty() {
            palette[0]
        } else {
            self.tokens[self.drawn % self.tokens.len()]
        };
        self.drawn += 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn wraps_around() {
        use crate::Token::*;

        let mut source = SequenceTokenSource::new(vec![Kiwi, Peach]);
        let drawn = [(); 5].map(|_| source.draw(&Token::ALL));

        assert_eq!(drawn, [Kiwi, Peach, Kiwi, Peach, Kiwi]);
        assert_eq!(source.drawn(), 5);
    }

    #[test]
    fn empty_sequence_falls_back_to_palette() {
        let mut source = SequenceTokenSource::default();
        assert_eq!(source.draw(Token::palette(3)), Token::Apple);
    }
}
