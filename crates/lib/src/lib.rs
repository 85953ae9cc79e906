pub mod cli;
pub mod grid;
pub mod input;
mod macros;

#[cfg_attr(prod, path = "env/embed.rs")]
#[cfg_attr(not(prod), path = "env/read.rs")]
#[doc(hidden)]
pub mod env;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridExt};
    pub use crate::input::{FromInput, IStr, Split, B};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub type ArrayString<const N: usize = 16> = arrayvec::ArrayString<N>;
    pub use bittle::{Bits, BitsMut};
    pub use bstr::{BStr, ByteSlice};
    pub use macros::entry;
}
