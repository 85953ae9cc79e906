use proc_macro::{Delimiter, Group, Literal, Span, TokenTree};

use crate::entry::output::{Config, ItemOutput};
use crate::error::Error;
use crate::parsing::{BaseParser, Buf};
use crate::parsing::{Punct, COMMA, EQ};

/// A parser for the arguments provided to an entry macro.
pub(crate) struct ConfigParser<'a> {
    base: BaseParser<'a>,
    errors: &'a mut Vec<Error>,
}

impl<'a> ConfigParser<'a> {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(
        stream: proc_macro::TokenStream,
        buf: &'a mut Buf,
        errors: &'a mut Vec<Error>,
    ) -> Self {
        Self {
            base: BaseParser::new(stream, buf),
            errors,
        }
    }

    /// Parse the configuration.
    pub(crate) fn parse(mut self) -> Config {
        let mut config = Config::default();

        while self.base.nth(0).is_some() {
            if self.parse_option(&mut config).is_none() {
                self.recover();
                continue;
            }

            if !self.base.skip_punct(COMMA) {
                break;
            }
        }

        if let Some(tt) = self.base.nth(0) {
            let span = tt.span();
            self.errors.push(Error::new(span, "trailing token"));
        }

        config
    }

    /// Recover by parsing either to the next comma `,`, or end of input.
    fn recover(&mut self) {
        loop {
            if let Some(p @ Punct { chars: COMMA, .. }) = self.base.peek_punct() {
                self.base.step(p.len());
                break;
            }

            if self.base.bump().is_none() {
                break;
            }
        }
    }

    /// Parse a single option.
    fn parse_option(&mut self, config: &mut Config) -> Option<()> {
        let ident = match self.base.bump() {
            Some(TokenTree::Ident(ident)) => ident,
            tt => {
                let span = tt.map(|tt| tt.span()).unwrap_or_else(Span::call_site);
                self.errors.push(Error::new(span, "expected identifier"));
                return None;
            }
        };

        match self.base.buf.display_as_str(&ident) {
            "input" => {
                self.parse_eq(ident.span())?;

                if config.input_file.is_some() {
                    self.errors
                        .push(Error::new(ident.span(), "duplicate `input` option"));
                }

                config.input_file = Some(self.parse_literal(ident.span())?);
            }
            "expect" => {
                self.parse_eq(ident.span())?;

                if config.expect.is_some() {
                    self.errors
                        .push(Error::new(ident.span(), "duplicate `expect` option"));
                }

                config.expect = Some(self.parse_expr(ident.span())?);
            }
            name => {
                let error = Error::new(ident.span(), format!("unknown option `{name}`"));
                self.errors.push(error);
                return None;
            }
        }

        Some(())
    }

    /// Parse the next element as a literal value.
    fn parse_literal(&mut self, span: Span) -> Option<Literal> {
        match self.base.bump() {
            Some(TokenTree::Literal(literal)) => Some(literal),
            tt => {
                let span = tt.map(|tt| tt.span()).unwrap_or(span);
                self.errors.push(Error::new(span, "expected literal"));
                None
            }
        }
    }

    /// Parse an expression, which is every token up until the next top-level
    /// comma.
    fn parse_expr(&mut self, span: Span) -> Option<TokenTree> {
        let mut tokens = Vec::new();

        while self.base.nth(0).is_some() {
            if let Some(Punct { chars: COMMA, .. }) = self.base.peek_punct() {
                break;
            }

            tokens.extend(self.base.bump());
        }

        let Some(first) = tokens.first() else {
            self.errors.push(Error::new(span, "expected expression"));
            return None;
        };

        let span = first.span();
        let mut group = Group::new(Delimiter::None, tokens.into_iter().collect());
        group.set_span(span);
        Some(TokenTree::Group(group))
    }

    /// Parse the next element as an `=` punctuation.
    fn parse_eq(&mut self, span: Span) -> Option<()> {
        match self.base.peek_punct() {
            Some(p @ Punct { chars: EQ, .. }) => {
                self.base.step(p.len());
                Some(())
            }
            p => {
                let span = p.map(|p| p.span).unwrap_or(span);
                self.errors.push(Error::new(span, "expected assignment `=`"));
                None
            }
        }
    }
}

/// A parser for the item annotated with an entry macro.
pub(crate) struct ItemParser<'a> {
    base: BaseParser<'a>,
}

impl<'a> ItemParser<'a> {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: proc_macro::TokenStream, buf: &'a mut Buf) -> Self {
        Self {
            base: BaseParser::new(stream, buf),
        }
    }

    /// Parse the item, locating its name and body.
    pub(crate) fn parse(mut self, item: proc_macro::TokenStream) -> ItemOutput {
        let mut fn_name = None;
        let mut block = None;
        let mut next_is_name = false;

        while let Some(tt) = self.base.bump() {
            match &tt {
                TokenTree::Ident(ident) => {
                    if std::mem::take(&mut next_is_name) {
                        fn_name = Some(tt.clone());
                    } else if fn_name.is_none() && self.base.buf.display_as_str(ident) == "fn" {
                        next_is_name = true;
                    }
                }
                TokenTree::Group(g) if g.delimiter() == Delimiter::Brace && block.is_none() => {
                    block = Some(g.span());
                }
                _ => {}
            }
        }

        ItemOutput::new(item, fn_name, block)
    }
}
