//! The tokenizer driver.

use tracing::debug;

use crate::{LexError, Span, Token, TokenSequence, TokensDescription};

/// Tokenize `source` using the definitions in `description`.
///
/// At each offset the first definition (registration order) that matches
/// there wins, regardless of match length. The whole input must be covered:
/// a position no definition matches is a [`LexError::NoMatch`], and a
/// winning match of zero length is a [`LexError::ZeroWidthMatch`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize<'src>(
    source: &'src str,
    description: &TokensDescription,
) -> Result<TokenSequence<'src>, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::SourceTooLarge { len: source.len() });
    }

    let mut tokens = Vec::new();
    let mut offset = 0;
    while offset < source.len() {
        let rest = &source[offset..];
        let Some(probe) = description.probe(rest) else {
            return Err(LexError::NoMatch {
                offset,
                remaining: rest.to_owned(),
            });
        };
        if probe.len == 0 {
            return Err(LexError::ZeroWidthMatch {
                tag: probe.tag,
                offset,
            });
        }

        let end = offset + probe.len;
        tokens.push(Token::new(
            probe.id,
            probe.tag,
            &source[offset..end],
            Span::from_offsets(offset, end),
        ));
        offset = end;
    }

    debug!(tokens = tokens.len(), "tokenized");
    Ok(TokenSequence::new(source, tokens))
}

#[cfg(test)]
mod tests;
