use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenTree};

use crate::token_stream::{SpannedStream, TokenStream};

/// Anything that can be written into a token stream.
pub(crate) trait IntoTokens {
    /// Write tokens, using `span` for any token constructed on the way.
    fn into_tokens(self, stream: &mut TokenStream, span: Span);
}

impl IntoTokens for () {
    #[inline]
    fn into_tokens(self, _: &mut TokenStream, _: Span) {}
}

/// Identifiers and keywords.
impl IntoTokens for &str {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        stream.push(TokenTree::Ident(Ident::new(self, span)));
    }
}

impl IntoTokens for char {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let mut p = Punct::new(self, Spacing::Alone);
        p.set_span(span);
        stream.push(TokenTree::Punct(p));
    }
}

/// Multi-character punctuation like `::` or `=>`.
impl<const N: usize> IntoTokens for [char; N] {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        for (n, c) in self.into_iter().enumerate() {
            let spacing = if n + 1 < N {
                Spacing::Joint
            } else {
                Spacing::Alone
            };

            let mut p = Punct::new(c, spacing);
            p.set_span(span);
            stream.push(TokenTree::Punct(p));
        }
    }
}

/// Existing token trees keep their own span.
impl IntoTokens for TokenTree {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        stream.push(self);
    }
}

impl IntoTokens for Literal {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        stream.push(TokenTree::Literal(self));
    }
}

impl<T> IntoTokens for Option<T>
where
    T: IntoTokens,
{
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        if let Some(tokens) = self {
            tokens.into_tokens(stream, span);
        }
    }
}

macro_rules! tuple {
    ($($ty:ident $var:ident),*) => {
        impl<$($ty,)*> IntoTokens for ($($ty,)*)
        where
            $($ty: IntoTokens,)*
        {
            #[inline]
            fn into_tokens(self, stream: &mut TokenStream, span: Span) {
                let ($($var,)*) = self;
                $($var.into_tokens(stream, span);)*
            }
        }
    };
}

tuple!(A a);
tuple!(A a, B b);
tuple!(A a, B b, C c);
tuple!(A a, B b, C c, D d);
tuple!(A a, B b, C c, D d, E e);
tuple!(A a, B b, C c, D d, E e, F f);
tuple!(A a, B b, C c, D d, E e, F f, G g);
tuple!(A a, B b, C c, D d, E e, F f, G g, H h);

/// Construct tokens from a closure.
pub(crate) fn from_fn<T>(f: T) -> FromFn<T>
where
    T: FnOnce(&mut SpannedStream<'_>),
{
    FromFn(f)
}

pub(crate) struct FromFn<T>(T);

impl<T> IntoTokens for FromFn<T>
where
    T: FnOnce(&mut SpannedStream<'_>),
{
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        (self.0)(&mut SpannedStream::new(stream, span));
    }
}

/// Wrap tokens in braces `{ .. }`.
pub(crate) fn braced<T>(tokens: T) -> Grouped<T> {
    Grouped(Delimiter::Brace, tokens)
}

/// Wrap tokens in parenthesis `( .. )`.
pub(crate) fn parens<T>(tokens: T) -> Grouped<T> {
    Grouped(Delimiter::Parenthesis, tokens)
}

pub(crate) struct Grouped<T>(Delimiter, T);

impl<T> IntoTokens for Grouped<T>
where
    T: IntoTokens,
{
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let Grouped(delimiter, tokens) = self;
        let mut inner = TokenStream::default();
        tokens.into_tokens(&mut inner, span);

        let mut group = Group::new(delimiter, inner.into_token_stream());
        group.set_span(span);
        stream.push(TokenTree::Group(group));
    }
}
