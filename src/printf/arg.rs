//! Dynamic argument values and the universal stringifier
//!
//! [`Arg`] is the borrowed, allocation-free representation of one value handed
//! to the printf engine or to a field. Building one never formats anything;
//! text is produced only when the value is actually rendered.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// Text used for values that cannot be rendered.
pub const UNPRINTABLE: &str = "[unprintable]";

/// One positional argument.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// An absent text value; renders as `null`
    Null,
    Str(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
    Float32(f32),
    Bool(bool),
    Char(char),
    /// Any value rendered through its `Display` impl
    Display(&'a dyn fmt::Display),
    /// A value with no textual rendering
    Opaque,
}

impl<'a> Arg<'a> {
    /// Wrap a value that renders itself through `Display`.
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Arg::Display(value)
    }

    /// True for integer, float, bool and char arguments.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Arg::Int(_) | Arg::UInt(_) | Arg::Float(_) | Arg::Float32(_) | Arg::Bool(_) | Arg::Char(_)
        )
    }

    /// Numeric value as a signed integer. Floats truncate toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Arg::Int(v) => Some(v),
            Arg::UInt(v) => Some(v as i64),
            Arg::Float(v) => Some(v as i64),
            Arg::Float32(v) => Some(v as i64),
            Arg::Bool(v) => Some(i64::from(v)),
            Arg::Char(v) => Some(i64::from(u32::from(v))),
            _ => None,
        }
    }

    /// Numeric value reinterpreted as unsigned, the way C casts for `%u`/`%x`/`%o`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Arg::Int(v) => Some(v as u64),
            Arg::UInt(v) => Some(v),
            Arg::Float(v) => Some(v as u64),
            Arg::Float32(v) => Some(v as u64),
            Arg::Bool(v) => Some(u64::from(v)),
            Arg::Char(v) => Some(u64::from(u32::from(v))),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Arg::Int(v) => Some(v as f64),
            Arg::UInt(v) => Some(v as f64),
            Arg::Float(v) => Some(v),
            Arg::Float32(v) => Some(f64::from(v)),
            Arg::Bool(v) => Some(if v { 1.0 } else { 0.0 }),
            Arg::Char(v) => Some(f64::from(u32::from(v))),
            _ => None,
        }
    }

    /// Render this argument as text. Never fails.
    pub fn stringify(&self) -> Cow<'a, str> {
        match *self {
            Arg::Null => Cow::Borrowed("null"),
            Arg::Str(s) => Cow::Borrowed(s),
            Arg::Int(v) => Cow::Owned(v.to_string()),
            Arg::UInt(v) => Cow::Owned(v.to_string()),
            Arg::Float(v) => Cow::Owned(v.to_string()),
            Arg::Float32(v) => Cow::Owned(v.to_string()),
            Arg::Bool(v) => Cow::Borrowed(if v { "true" } else { "false" }),
            Arg::Char(v) => Cow::Owned(v.to_string()),
            Arg::Display(value) => {
                let mut buf = String::new();
                match write!(buf, "{}", value) {
                    Ok(()) => Cow::Owned(buf),
                    Err(_) => Cow::Borrowed(UNPRINTABLE),
                }
            }
            Arg::Opaque => Cow::Borrowed(UNPRINTABLE),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("Null"),
            Arg::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Arg::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Arg::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Arg::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Arg::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            Arg::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Arg::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Arg::Display(_) => f.write_str("Display(..)"),
            Arg::Opaque => f.write_str("Opaque"),
        }
    }
}

/// Convert any supported value into an [`Arg`] and render it.
///
/// This is the single conversion used for field values, printf fallbacks
/// and direct calls.
pub fn stringify<T: ToArg + ?Sized>(value: &T) -> String {
    value.to_arg().stringify().into_owned()
}

/// Types with a built-in argument representation.
///
/// Values that only implement `Display` can be passed with
/// [`Arg::display`], or through the [`arg!`](crate::arg) macro which picks the
/// representation automatically.
pub trait ToArg {
    fn to_arg(&self) -> Arg<'_>;
}

impl<'a> ToArg for Arg<'a> {
    fn to_arg(&self) -> Arg<'_> {
        *self
    }
}

impl<T: ToArg + ?Sized> ToArg for &T {
    fn to_arg(&self) -> Arg<'_> {
        (**self).to_arg()
    }
}

impl<T: ToArg + ?Sized> ToArg for &mut T {
    fn to_arg(&self) -> Arg<'_> {
        (**self).to_arg()
    }
}

impl<T: ToArg + ?Sized> ToArg for Box<T> {
    fn to_arg(&self) -> Arg<'_> {
        (**self).to_arg()
    }
}

impl<T: ToArg> ToArg for Option<T> {
    fn to_arg(&self) -> Arg<'_> {
        match self {
            Some(value) => value.to_arg(),
            None => Arg::Null,
        }
    }
}

impl ToArg for str {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl ToArg for String {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl ToArg for Cow<'_, str> {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl ToArg for bool {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Bool(*self)
    }
}

impl ToArg for char {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Char(*self)
    }
}

impl ToArg for f64 {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Float(*self)
    }
}

impl ToArg for f32 {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Float32(*self)
    }
}

macro_rules! impl_to_arg_int {
    ($variant:ident => $($ty:ty),*) => {
        $(
            impl ToArg for $ty {
                fn to_arg(&self) -> Arg<'_> {
                    Arg::$variant((*self).into())
                }
            }
        )*
    };
}

impl_to_arg_int!(Int => i8, i16, i32, i64);
impl_to_arg_int!(UInt => u8, u16, u32, u64);

impl ToArg for isize {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Int(*self as i64)
    }
}

impl ToArg for usize {
    fn to_arg(&self) -> Arg<'_> {
        Arg::UInt(*self as u64)
    }
}

/// Compile-time capability dispatch used by [`arg!`](crate::arg).
///
/// `(&&&Wrap(&value)).redlog_arg()` resolves, in order of preference, to
/// the value's [`ToArg`] impl, its `Display` impl, or [`Arg::Opaque`].
#[doc(hidden)]
pub mod dispatch {
    use super::{Arg, ToArg};
    use std::fmt;

    pub struct Wrap<'a, T: ?Sized>(pub &'a T);

    pub trait ViaToArg<'a> {
        fn redlog_arg(&self) -> Arg<'a>;
    }

    impl<'a, T: ToArg + ?Sized> ViaToArg<'a> for &&Wrap<'a, T> {
        fn redlog_arg(&self) -> Arg<'a> {
            self.0.to_arg()
        }
    }

    pub trait ViaDisplay<'a> {
        fn redlog_arg(&self) -> Arg<'a>;
    }

    impl<'a, T: fmt::Display> ViaDisplay<'a> for &Wrap<'a, T> {
        fn redlog_arg(&self) -> Arg<'a> {
            Arg::Display(self.0)
        }
    }

    pub trait ViaOpaque<'a> {
        fn redlog_arg(&self) -> Arg<'a>;
    }

    impl<'a, T: ?Sized> ViaOpaque<'a> for Wrap<'a, T> {
        fn redlog_arg(&self) -> Arg<'a> {
            Arg::Opaque
        }
    }
}
