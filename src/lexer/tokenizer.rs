use crate::error::TokenizerError;
use crate::lexer::{Token, TokenKind, TokenStream};
use log::{debug, trace};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "lexer/token.pest"]
struct TokenGrammar;

fn token_kind(rule: Rule) -> TokenKind {
    match rule {
        Rule::comma => TokenKind::Comma,
        Rule::number => TokenKind::Number,
        Rule::identifier => TokenKind::Identifier,
        Rule::plus => TokenKind::Plus,
        Rule::minus => TokenKind::Minus,
        Rule::star => TokenKind::Star,
        Rule::slash => TokenKind::Slash,
        Rule::percent => TokenKind::Percent,
        Rule::caret => TokenKind::Caret,
        Rule::left_paren => TokenKind::LeftParen,
        Rule::right_paren => TokenKind::RightParen,
        Rule::token => unreachable!("rule {rule:?} never produces a token"),
    }
}

/// Splits `source` into tokens, ending with an `EndOfExpression` marker.
///
/// Leading whitespace is skipped before every token. Fails on the first
/// position where no lexical rule matches.
pub fn tokenize(source: &str) -> Result<TokenStream<'_>, TokenizerError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    loop {
        let rest = &source[offset..];
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            break;
        }

        let pair = TokenGrammar::parse(Rule::token, trimmed)
            .ok()
            .and_then(|mut pairs| pairs.next())
            .ok_or_else(|| TokenizerError::UnrecognizedInput {
                offset,
                remaining: trimmed.to_string(),
            })?;

        let token = Token::new(token_kind(pair.as_rule()), pair.as_str());
        trace!("Token at {}: {:?}", offset, token);
        offset += token.text.len();
        tokens.push(token);
    }

    debug!("Tokenized {:?} into {} tokens", source, tokens.len() + 1);
    Ok(TokenStream::new(tokens))
}
