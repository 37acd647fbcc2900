use std::fmt;

mod tokenizer;

pub use tokenizer::tokenize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comma,
    Number,
    Identifier,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LeftParen,
    RightParen,
    EndOfExpression,
}

/// Precedence levels, weakest first.
///
/// A sub-expression keeps absorbing infix operators while the next token's
/// binding power is strictly greater than the level it was started at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BindingPower {
    Minimum,
    Identifier,
    Number,
    Additive,
    Multiplicative,
    Exponential,
    Unary,
    Parenthesis,
    Maximum,
}

impl BindingPower {
    /// The level directly beneath this one; `Minimum` is its own floor.
    pub fn below(self) -> Self {
        match self {
            BindingPower::Minimum | BindingPower::Identifier => BindingPower::Minimum,
            BindingPower::Number => BindingPower::Identifier,
            BindingPower::Additive => BindingPower::Number,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Exponential => BindingPower::Multiplicative,
            BindingPower::Unary => BindingPower::Exponential,
            BindingPower::Parenthesis => BindingPower::Unary,
            BindingPower::Maximum => BindingPower::Parenthesis,
        }
    }
}

impl TokenKind {
    /// The binding power this kind has when it appears after a complete operand.
    pub fn binding_power(self) -> BindingPower {
        match self {
            TokenKind::EndOfExpression | TokenKind::Comma | TokenKind::RightParen => {
                BindingPower::Minimum
            }
            TokenKind::Identifier => BindingPower::Identifier,
            TokenKind::Number => BindingPower::Number,
            TokenKind::Plus | TokenKind::Minus => BindingPower::Additive,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => {
                BindingPower::Multiplicative
            }
            TokenKind::Caret => BindingPower::Exponential,
            TokenKind::LeftParen => BindingPower::Parenthesis,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact slice of the source this token was read from.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn end() -> Self {
        Self::new(TokenKind::EndOfExpression, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfExpression => write!(f, "end of expression"),
            TokenKind::Number => write!(f, "number '{}'", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Tokens of one source string, always terminated by a single
/// `EndOfExpression` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn new(mut tokens: Vec<Token<'a>>) -> Self {
        tokens.push(Token::end());
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Number of tokens, counting the end marker.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true: the end marker is always present.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when the source held nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.tokens.len() == 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }
}

impl<'s, 'a> IntoIterator for &'s TokenStream<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
