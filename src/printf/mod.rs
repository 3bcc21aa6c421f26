//! printf-style formatting
//!
//! A lenient subset of C `printf`: `%[flags][width][.precision][length]<conv>`
//! with conversions `d i u o x X f F e E g G c s` and the `%%` escape.
//! Anything the engine does not understand is copied to the output unchanged.

mod arg;
mod render;
mod spec;

pub use arg::{dispatch, stringify, Arg, ToArg, UNPRINTABLE};
pub use render::{render, render_guarded, FORMAT_ERROR};
pub use spec::{scan, Conversion, FormatSpec, Token};
