use proc_macro::{Delimiter, Group, Literal, Span, TokenTree};

use crate::error::Error;
use crate::into_tokens::{braced, from_fn, parens, IntoTokens};
use crate::token_stream::TokenStream;

const S: [char; 2] = [':', ':'];
const T: [char; 2] = ['=', '>'];

#[derive(Default)]
pub(crate) struct Config {
    pub(crate) input_file: Option<Literal>,
    pub(crate) expect: Option<TokenTree>,
}

impl Config {
    /// Validate the parsed configuration.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.input_file.is_none() {
            errors.push(Error::new(Span::call_site(), "missing `input` argument"));
        }
    }
}

/// The parsed item output.
pub(crate) struct ItemOutput {
    item: proc_macro::TokenStream,
    fn_name: Option<TokenTree>,
    block: Option<Span>,
}

impl ItemOutput {
    pub(crate) fn new(
        item: proc_macro::TokenStream,
        fn_name: Option<TokenTree>,
        block: Option<Span>,
    ) -> Self {
        Self {
            item,
            fn_name,
            block,
        }
    }

    /// The span of the function body, used for generated code.
    pub(crate) fn block_span(&self) -> Option<Span> {
        self.block
    }

    /// Validate the parsed item.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.fn_name.is_none() || self.block.is_none() {
            errors.push(Error::new(Span::call_site(), "expected a function item"));
        }
    }

    /// Expand into the `main` function, or leave the item as-is if the
    /// configuration is incomplete.
    pub(crate) fn expand_item(self, config: Config) -> impl IntoTokens {
        from_fn(move |s| {
            let original = TokenTree::Group(Group::new(Delimiter::None, self.item));

            match (self.fn_name, config.input_file) {
                (Some(fn_name), Some(input)) => {
                    s.write(expand_main(original, fn_name, input, config.expect));
                }
                _ => {
                    s.write(original);
                }
            }
        })
    }
}

/// Expands the binary entrypoint, which embeds the original function.
fn expand_main(
    original: TokenTree,
    fn_name: TokenTree,
    input: Literal,
    expect: Option<TokenTree>,
) -> impl IntoTokens {
    let m = Mod;

    let parse_opts = (
        ("let", "opts"),
        '=',
        (m, "cli", S, "Opts", S, "parse", parens(()), '?'),
        ';',
    );

    let input_decl = (
        ("let", parens(("input", ',', "path"))),
        '=',
        (m, "input", '!', parens(input)),
        ';',
    );

    let mode = (m, "cli", S, "Mode");

    let call_mode = (
        (mode, S, "Default"),
        T,
        braced(CollectCall(fn_name.clone(), m, expect.clone())),
    );

    let bench_mode = (
        (mode, S, "Bench"),
        T,
        braced(BenchCall(fn_name, m, expect)),
    );

    let match_mode = ("match", ("opts", '.', "mode"), braced((call_mode, bench_mode)));

    let ok_return = ("Ok", parens(parens(())));

    let result = ("lib", S, "prelude", S, "Result", '<', parens(()), '>');
    let signature = ("fn", "main", parens(()), ['-', '>'], result);

    (
        signature,
        braced((original, parse_opts, input_decl, match_mode, ok_return)),
    )
}

#[derive(Debug, Clone, Copy)]
struct Mod;

impl IntoTokens for Mod {
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        stream.write(span, ("lib", S));
    }
}

/// Calls the solver once, prints and checks its answer.
struct CollectCall(TokenTree, Mod, Option<TokenTree>);

impl IntoTokens for CollectCall {
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let CollectCall(name, m, expect) = self;

        let handle_error = from_fn(move |s| {
            s.write(("return", "Err"));
            s.write(parens((
                (m, "cli", S, "error_context"),
                parens(("path", ',', "input", ',', "error")),
            )));
        });

        let call = from_fn(move |s| {
            s.write(("match", name, parens("input")));
            s.write(braced((
                ("Ok", parens("value"), T, "value", ','),
                ("Err", parens("error"), T, handle_error, ','),
            )));
        });

        stream.write(span, ("let", "value", '=', call, ';'));

        if let Some(expect) = expect {
            let expect_span = expect.span();

            stream.write(
                expect_span,
                (
                    (m, "cli", S, "check_expected"),
                    parens(('&', "value", ',', '&', expect)),
                    '?',
                    ';',
                ),
            );
        }

        stream.write(
            span,
            (
                (m, "cli", S, "print_value"),
                parens(('&', "opts", ',', '&', "value")),
                '?',
                ';',
            ),
        );
    }
}

/// Benchmarks the solver, checking every answer it produces.
struct BenchCall(TokenTree, Mod, Option<TokenTree>);

impl IntoTokens for BenchCall {
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let BenchCall(name, m, expect) = self;

        stream.write(
            span,
            (
                ("let", "mut", "b"),
                '=',
                (m, "cli", S, "Bencher", S, "new", parens(()), ';'),
            ),
        );

        let check = from_fn(move |s| match expect {
            Some(expect) => {
                s.write(('|', "value", '|'));
                s.write((
                    (m, "cli", S, "check_expected"),
                    parens(("value", ',', '&', expect)),
                ));
            }
            None => {
                s.write(('|', "_", '|', "Ok", parens(parens(()))));
            }
        });

        stream.write(
            span,
            (
                ("b", '.', "iter"),
                parens((
                    ('&', "opts", ','),
                    check,
                    ',',
                    ['|', '|'],
                    (name, parens("input")),
                )),
                ('?', ';'),
            ),
        );
    }
}
