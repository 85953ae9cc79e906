use proc_macro::{Span, TokenTree};

use crate::into_tokens::IntoTokens;

/// Collects token trees before they are turned into a
/// [proc_macro::TokenStream].
#[derive(Default)]
pub(crate) struct TokenStream {
    tokens: Vec<TokenTree>,
}

impl TokenStream {
    /// Push a single token tree.
    pub(crate) fn push(&mut self, tt: TokenTree) {
        self.tokens.push(tt);
    }

    /// Write the given tokens using `span` for anything that is constructed.
    pub(crate) fn write<T>(&mut self, span: Span, tokens: T)
    where
        T: IntoTokens,
    {
        tokens.into_tokens(self, span);
    }

    /// Convert into a compiler token stream.
    pub(crate) fn into_token_stream(self) -> proc_macro::TokenStream {
        self.tokens.into_iter().collect()
    }
}

/// A token stream paired with the span used for the tokens written to it.
pub(crate) struct SpannedStream<'a> {
    stream: &'a mut TokenStream,
    span: Span,
}

impl<'a> SpannedStream<'a> {
    pub(crate) fn new(stream: &'a mut TokenStream, span: Span) -> Self {
        Self { stream, span }
    }

    /// Write the given tokens.
    pub(crate) fn write<T>(&mut self, tokens: T)
    where
        T: IntoTokens,
    {
        self.stream.write(self.span, tokens);
    }
}
