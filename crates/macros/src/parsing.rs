use core::fmt::{self, Write};
use std::collections::VecDeque;

use proc_macro::{Spacing, Span, TokenTree};

pub(crate) const COMMA: [char; 2] = [',', '\0'];
pub(crate) const EQ: [char; 2] = ['=', '\0'];

/// Scratch buffer used to compare identifiers without allocating for each of
/// them.
#[derive(Default)]
pub(crate) struct Buf {
    string: String,
}

impl Buf {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Format the given value into the buffer and return it as a string.
    pub(crate) fn display_as_str(&mut self, value: &impl fmt::Display) -> &str {
        self.string.clear();
        let _ = write!(self.string, "{value}");
        self.string.as_str()
    }
}

/// Punctuation of up to two joined characters, like `=` or `::`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Punct {
    pub(crate) span: Span,
    pub(crate) chars: [char; 2],
}

impl Punct {
    /// Number of token trees the punctuation occupies.
    pub(crate) fn len(&self) -> usize {
        self.chars.iter().take_while(|c| **c != '\0').count()
    }
}

/// Peekable token parser.
pub(crate) struct BaseParser<'a> {
    it: proc_macro::token_stream::IntoIter,
    peeked: VecDeque<TokenTree>,
    pub(crate) buf: &'a mut Buf,
}

impl<'a> BaseParser<'a> {
    pub(crate) fn new(stream: proc_macro::TokenStream, buf: &'a mut Buf) -> Self {
        Self {
            it: stream.into_iter(),
            peeked: VecDeque::new(),
            buf,
        }
    }

    /// Peek the token `n` steps ahead.
    pub(crate) fn nth(&mut self, n: usize) -> Option<&TokenTree> {
        while self.peeked.len() <= n {
            let tt = self.it.next()?;
            self.peeked.push_back(tt);
        }

        self.peeked.get(n)
    }

    /// Consume the next token.
    pub(crate) fn bump(&mut self) -> Option<TokenTree> {
        if let Some(tt) = self.peeked.pop_front() {
            return Some(tt);
        }

        self.it.next()
    }

    /// Skip over `n` tokens.
    pub(crate) fn step(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Peek the next punctuation, joining it with the following character
    /// if they are spaced jointly.
    pub(crate) fn peek_punct(&mut self) -> Option<Punct> {
        let (first, spacing, span) = match self.nth(0)? {
            TokenTree::Punct(p) => (p.as_char(), p.spacing(), p.span()),
            _ => return None,
        };

        let mut chars = [first, '\0'];

        if spacing == Spacing::Joint {
            if let Some(TokenTree::Punct(p)) = self.nth(1) {
                chars[1] = p.as_char();
            }
        }

        Some(Punct { span, chars })
    }

    /// Skip the given punctuation if it's next.
    pub(crate) fn skip_punct(&mut self, chars: [char; 2]) -> bool {
        match self.peek_punct() {
            Some(p) if p.chars == chars => {
                self.step(p.len());
                true
            }
            _ => false,
        }
    }
}
