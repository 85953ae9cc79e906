use core::fmt;

use proc_macro::{Delimiter, Group, Literal, Span, TokenTree};

use crate::into_tokens::IntoTokens;
use crate::token_stream::TokenStream;

/// A compile error, expanded into `compile_error!(..)` at the given span.
pub(crate) struct Error {
    span: Span,
    message: String,
}

impl Error {
    pub(crate) fn new(span: Span, message: impl fmt::Display) -> Self {
        Self {
            span,
            message: message.to_string(),
        }
    }
}

impl IntoTokens for Error {
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        let mut message = Literal::string(&self.message);
        message.set_span(self.span);

        let mut group = Group::new(Delimiter::Parenthesis, TokenTree::Literal(message).into());
        group.set_span(self.span);

        stream.write(self.span, ("compile_error", '!', TokenTree::Group(group), ';'));
    }
}
