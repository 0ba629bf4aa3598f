use serde::{Deserialize, Serialize};

use crate::Score;

/// A fruit kind. Palette order defines both the point weight and which kinds are
/// available when a game is configured with fewer than [`Token::COUNT`] kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Token {
    Apple,
    Orange,
    Banana,
    Grape,
    Strawberry,
    Peach,
    Kiwi,
    Pineapple,
}

impl Token {
    pub const COUNT: usize = 8;

    pub const ALL: [Token; Self::COUNT] = [
        Token::Apple,
        Token::Orange,
        Token::Banana,
        Token::Grape,
        Token::Strawberry,
        Token::Peach,
        Token::Kiwi,
        Token::Pineapple,
    ];

    /// First `kinds` tokens of the palette, clamped to `1..=COUNT`.
    pub fn palette(kinds: u8) -> &'static [Token] {
        let kinds = usize::from(kinds).clamp(1, Self::COUNT);
        &Self::ALL[..kinds]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Points awarded per cleared token, before the match-size multiplier.
    pub const fn points(self) -> Score {
        10 + 5 * self as Score
    }

    /// Display identifier shown on the tile.
    pub const fn name(self) -> &'static str {
        use Token::*;
        match self {
            Apple => "🍎",
            Orange => "🍊",
            Banana => "🍌",
            Grape => "🍇",
            Strawberry => "🍓",
            Peach => "🍑",
            Kiwi => "🥝",
            Pineapple => "🍍",
        }
    }

    /// Background colour hint for renderers.
    pub const fn color(self) -> &'static str {
        use Token::*;
        match self {
            Apple => "#ff6b6b",
            Orange => "#ffa726",
            Banana => "#ffeb3b",
            Grape => "#9c27b0",
            Strawberry => "#f44336",
            Peach => "#ffcdd2",
            Kiwi => "#8bc34a",
            Pineapple => "#ff9800",
        }
    }

    /// Single ASCII character used in text fixtures and debug output.
    pub const fn symbol(self) -> char {
        use Token::*;
        match self {
            Apple => 'a',
            Orange => 'o',
            Banana => 'b',
            Grape => 'g',
            Strawberry => 's',
            Peach => 'p',
            Kiwi => 'k',
            Pineapple => 'n',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.symbol() == symbol)
    }
}
