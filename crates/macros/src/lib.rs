//! Procedural macros used by solvers.

use proc_macro::TokenStream;

mod entry;
mod error;
mod into_tokens;
mod parsing;
mod token_stream;

/// Turn a solver function into the binary entrypoint.
///
/// Supported options:
/// * `input = "dNN.txt"` - the input file, relative to `inputs/`. Required.
/// * `expect = <expr>` - the expected answer, checked on every run.
///
/// ```ignore
/// #[lib::prelude::entry(input = "d01.txt", expect = (11, 31))]
/// fn main(input: IStr) -> Result<(u32, u32)> {
///     /* .. */
/// }
/// ```
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}
