//! The printf engine
//!
//! Walks a format string, copies literal text, and renders each `%` token
//! against the next positional [`Arg`]. Malformed tokens and surplus tokens are
//! copied through verbatim; surplus arguments are ignored. Rendering never
//! fails.

use super::arg::Arg;
use super::spec::{scan, Conversion, FormatSpec, Token};

/// Text substituted when rendering panics.
pub const FORMAT_ERROR: &str = "[format_error]";

// Keeps hostile widths/precisions from exhausting memory.
const MAX_WIDTH: usize = 1 << 16;
const MAX_PRECISION: usize = 512;

const DEFAULT_EXP_PRECISION: usize = 6;

/// Render `format` against `args`.
///
/// ```
/// use redlog::printf::{render, Arg};
///
/// let text = render("%s has %d points (%.1f%%)", &[Arg::Str("alice"), Arg::Int(42), Arg::Float(97.26)]);
/// assert_eq!(text, "alice has 42 points (97.3%)");
/// ```
pub fn render(format: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(format.len() + 16 * args.len());
    let mut args = args.iter();
    let mut pos = 0;

    while let Some(offset) = format[pos..].find('%') {
        let start = pos + offset;
        out.push_str(&format[pos..start]);

        let rest = &format[start..];
        match rest.as_bytes().get(1) {
            // trailing lone '%'
            None => {
                out.push('%');
                return out;
            }
            Some(b'%') => {
                out.push('%');
                pos = start + 2;
                continue;
            }
            Some(_) => {}
        }

        match scan(rest) {
            Token::Spec { spec, len } => {
                match args.next() {
                    Some(arg) => render_arg(&mut out, arg, &spec),
                    None => out.push_str(&rest[..len]),
                }
                pos = start + len;
            }
            Token::Malformed { len } => {
                out.push_str(&rest[..len]);
                pos = start + len;
            }
        }
    }

    out.push_str(&format[pos..]);
    out
}

/// [`render`] with panics from user `Display` impls converted to [`FORMAT_ERROR`].
pub fn render_guarded(format: &str, args: &[Arg<'_>]) -> String {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| render(format, args)))
        .unwrap_or_else(|_| FORMAT_ERROR.to_string())
}

fn render_arg(out: &mut String, arg: &Arg<'_>, spec: &FormatSpec) {
    match format_numeric(arg, spec) {
        Some(Numeric { text, zero_pad_ok }) => pad(out, &text, spec, zero_pad_ok),
        None => {
            let text = arg.stringify();
            let text = match (spec.conversion, spec.precision) {
                (Conversion::Str, Some(max)) => truncate_chars(&text, max),
                _ => text.as_ref(),
            };
            pad(out, text, spec, false);
        }
    }
}

struct Numeric {
    text: String,
    zero_pad_ok: bool,
}

impl Numeric {
    fn finite(text: String) -> Self {
        Self {
            text,
            zero_pad_ok: true,
        }
    }
}

/// Render `arg` for a numeric conversion, `None` when it must fall back to text.
fn format_numeric(arg: &Arg<'_>, spec: &FormatSpec) -> Option<Numeric> {
    if !arg.is_numeric() {
        return None;
    }

    let numeric = match spec.conversion {
        Conversion::Signed => Numeric::finite(arg.as_i64()?.to_string()),
        Conversion::Unsigned => Numeric::finite(arg.as_u64()?.to_string()),
        Conversion::Octal => Numeric::finite(format!("{:o}", arg.as_u64()?)),
        Conversion::Hex { upper: false } => Numeric::finite(format!("{:x}", arg.as_u64()?)),
        Conversion::Hex { upper: true } => Numeric::finite(format!("{:X}", arg.as_u64()?)),
        Conversion::Fixed { upper } => float(arg, upper, |v| match spec.precision {
            Some(p) => format!("{:.*}", p.min(MAX_PRECISION), v),
            None => default_float(arg, v),
        })?,
        Conversion::Exponent { upper } => float(arg, upper, |v| {
            exponent(v, spec.precision.unwrap_or(DEFAULT_EXP_PRECISION).min(MAX_PRECISION))
        })?,
        Conversion::General { upper } => float(arg, upper, |v| match spec.precision {
            Some(p) => general(v, p.min(MAX_PRECISION)),
            None => default_float(arg, v),
        })?,
        Conversion::Char => {
            if matches!(arg, Arg::Bool(_)) {
                return None;
            }
            let ch = match arg {
                Arg::Char(c) => *c,
                _ => u32::try_from(arg.as_u64()?).ok().and_then(char::from_u32)?,
            };
            Numeric {
                text: ch.to_string(),
                zero_pad_ok: false,
            }
        }
        Conversion::Str => return None,
    };
    Some(numeric)
}

/// Shared handling of floating conversions: non-finite values and letter case.
fn float(arg: &Arg<'_>, upper: bool, render: impl FnOnce(f64) -> String) -> Option<Numeric> {
    let value = arg.as_f64()?;
    let numeric = if value.is_finite() {
        Numeric::finite(render(value))
    } else {
        let text = if value.is_nan() {
            "nan"
        } else if value.is_sign_negative() {
            "-inf"
        } else {
            "inf"
        };
        Numeric {
            text: text.to_string(),
            zero_pad_ok: false,
        }
    };
    Some(if upper {
        Numeric {
            text: numeric.text.to_uppercase(),
            ..numeric
        }
    } else {
        numeric
    })
}

/// Shortest text that round-trips, keeping `f32` values at `f32` precision.
fn default_float(arg: &Arg<'_>, value: f64) -> String {
    match arg {
        Arg::Float32(v) => v.to_string(),
        _ => value.to_string(),
    }
}

/// C-style scientific notation: `1.234500e+03`.
fn exponent(value: f64, precision: usize) -> String {
    let text = format!("{:.*e}", precision, value);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        None => text,
    }
}

/// C-style `%g` with an explicit precision.
fn general(value: f64, precision: usize) -> String {
    let significant = precision.max(1);
    if value == 0.0 {
        return "0".to_string();
    }

    let probe = format!("{:.*e}", significant - 1, value);
    let exp: i64 = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exp < -4 || exp >= significant as i64 {
        let text = exponent(value, significant - 1);
        match text.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", strip_fraction_zeros(mantissa), exp),
            None => text,
        }
    } else {
        let decimals = (significant as i64 - 1 - exp).max(0) as usize;
        strip_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Apply width. Left alignment wins over zero padding; zeros go after any sign.
fn pad(out: &mut String, text: &str, spec: &FormatSpec, zero_pad_ok: bool) {
    let width = spec.width.min(MAX_WIDTH);
    let len = text.chars().count();
    if len >= width {
        out.push_str(text);
        return;
    }
    let fill = width - len;

    if spec.left_align {
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if zero_pad_ok && spec.pads_with_zeros() {
        let (sign, digits) = match text.strip_prefix(['-', '+']) {
            Some(rest) => text.split_at(text.len() - rest.len()),
            None => ("", text),
        };
        out.push_str(sign);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    fn r(format: &str, args: &[Arg<'_>]) -> String {
        render(format, args)
    }

    struct TestObject {
        id: i32,
        name: &'static str,
    }

    impl fmt::Display for TestObject {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "TestObject{{{}, {}}}", self.id, self.name)
        }
    }

    #[test]
    fn test_basic_conversions() {
        assert_eq!(r("Value: %d", &[Arg::Int(42)]), "Value: 42");
        assert_eq!(r("Float: %.2f", &[Arg::Float(3.14159)]), "Float: 3.14");
        assert_eq!(r("String: %s", &[Arg::Str("hello")]), "String: hello");
        assert_eq!(r("Hex: %x", &[Arg::Int(255)]), "Hex: ff");
        assert_eq!(r("HEX: %X", &[Arg::Int(255)]), "HEX: FF");
        assert_eq!(r("Octal: %o", &[Arg::Int(64)]), "Octal: 100");
        assert_eq!(r("Char: %c", &[Arg::Int(65)]), "Char: A");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(r("100%%", &[]), "100%");
        assert_eq!(r("%%%%", &[]), "%%");
        assert_eq!(r("%%%%%%", &[]), "%%%");
        assert_eq!(r("%%d", &[Arg::Int(1)]), "%d");
        assert_eq!(r("%% %d %%", &[Arg::Int(42)]), "% 42 %");
        assert_eq!(r("Progress: %d%% of %d", &[Arg::Int(50), Arg::Int(100)]), "Progress: 50% of 100");
    }

    #[test]
    fn test_width_and_alignment() {
        assert_eq!(r("%08d", &[Arg::Int(42)]), "00000042");
        assert_eq!(r("%-5d|", &[Arg::Int(3)]), "3    |");
        assert_eq!(r("%5d", &[Arg::Int(123)]), "  123");
        assert_eq!(r("%-08d|", &[Arg::Int(7)]), "7       |");
        assert_eq!(r("%10s", &[Arg::Str("hello")]), "     hello");
        assert_eq!(r("%-10s|", &[Arg::Str("hello")]), "hello     |");
        assert_eq!(r("%05s", &[Arg::Str("ab")]), "   ab");
    }

    #[test]
    fn test_sign_aware_zero_padding() {
        assert_eq!(r("%06d", &[Arg::Int(-42)]), "-00042");
        assert_eq!(r("%08.2f", &[Arg::Float(-3.14159)]), "-0003.14");
        assert_eq!(r("%06f", &[Arg::Float(f64::INFINITY)]), "   inf");
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(r("%.0f", &[Arg::Float(3.9)]), "4");
        assert_eq!(r("%8.2f", &[Arg::Float(3.14159)]), "    3.14");
        assert_eq!(r("%-8.2f|", &[Arg::Float(3.14159)]), "3.14    |");
        assert_eq!(r("%f", &[Arg::Float(0.0)]), "0");
        assert_eq!(r("%f", &[Arg::Float32(3.14)]), "3.14");
        assert_eq!(r("%.2f", &[Arg::Int(2)]), "2.00");
        assert_eq!(r("%F", &[Arg::Float(f64::NAN)]), "NAN");
    }

    #[test]
    fn test_exponent_conversions() {
        assert_eq!(r("%.2e", &[Arg::Float(1234.5)]), "1.23e+03");
        assert_eq!(r("%.3E", &[Arg::Float(1234.56)]), "1.235E+03");
        assert_eq!(r("%e", &[Arg::Float(0.00012)]), "1.200000e-04");
    }

    #[test]
    fn test_general_conversions() {
        assert_eq!(r("%.3g", &[Arg::Float(1234.5)]), "1.23e+03");
        assert_eq!(r("%.4g", &[Arg::Float(3.14159)]), "3.142");
        assert_eq!(r("%.3G", &[Arg::Float(0.00001234)]), "1.23E-05");
        assert_eq!(r("%g", &[Arg::Float(2.5)]), "2.5");
    }

    #[test]
    fn test_unsigned_and_negative_hex() {
        assert_eq!(r("%u", &[Arg::Int(789)]), "789");
        assert_eq!(r("%x", &[Arg::Int(-1)]), "ffffffffffffffff");
        assert_eq!(r("%06o", &[Arg::Int(64)]), "000100");
        assert_eq!(r("%04X", &[Arg::Int(2048)]), "0800");
    }

    #[test]
    fn test_length_modifiers_and_ignored_flags() {
        assert_eq!(r("%d %ld %lu", &[Arg::Int(123), Arg::Int(456), Arg::UInt(789)]), "123 456 789");
        assert_eq!(r("%+d", &[Arg::Int(-42)]), "-42");
        assert_eq!(r("%#x", &[Arg::Int(255)]), "ff");
        assert_eq!(r("% 5d", &[Arg::Int(123)]), "  123");
    }

    #[test]
    fn test_type_fallback() {
        assert_eq!(r("%d", &[Arg::Str("hello")]), "hello");
        assert_eq!(r("%x", &[Arg::Str("hello")]), "hello");
        assert_eq!(r("%f", &[Arg::Str("hello")]), "hello");
        assert_eq!(r("%c", &[Arg::Str("hello")]), "hello");
        assert_eq!(r("%08d", &[Arg::Str("ab")]), "      ab");
        assert_eq!(r("%s", &[Arg::Null]), "null");
        assert_eq!(r("%d", &[Arg::Opaque]), "[unprintable]");
    }

    #[test]
    fn test_bool_and_char() {
        assert_eq!(r("%d %d", &[Arg::Bool(true), Arg::Bool(false)]), "1 0");
        assert_eq!(r("%s %s", &[Arg::Bool(true), Arg::Bool(false)]), "true false");
        assert_eq!(r("%c", &[Arg::Char('z')]), "z");
        assert_eq!(r("%d", &[Arg::Char('A')]), "65");
        assert_eq!(r("%c", &[Arg::Int(-5)]), "-5");
    }

    #[test]
    fn test_custom_display_values() {
        let obj = TestObject { id: 42, name: "test" };
        assert_eq!(r("Object: %s", &[Arg::display(&obj)]), "Object: TestObject{42, test}");
        assert!(r("%d", &[Arg::display(&obj)]).contains("TestObject"));
        assert!(r("%x", &[Arg::display(&obj)]).contains("TestObject"));
        assert!(r("%-30s|", &[Arg::display(&obj)]).ends_with("      |"));
    }

    #[test]
    fn test_string_precision_truncates() {
        assert_eq!(r("%.3s", &[Arg::Str("hello")]), "hel");
        assert_eq!(r("%10.3s", &[Arg::Str("hello")]), "       hel");
        assert_eq!(r("%.2s", &[Arg::Str("héllo")]), "hé");
    }

    #[test]
    fn test_argument_count_mismatch() {
        assert_eq!(r("%d %s", &[]), "%d %s");
        assert_eq!(r("%d %s %f", &[]), "%d %s %f");
        assert_eq!(r("%d %s", &[Arg::Int(42)]), "42 %s");
        assert_eq!(r("%d", &[Arg::Int(1), Arg::Int(2), Arg::Int(3)]), "1");
        assert_eq!(r("", &[Arg::Int(42), Arg::Str("ignored")]), "");
    }

    #[test]
    fn test_malformed_tokens_pass_through() {
        assert_eq!(r("incomplete %", &[]), "incomplete %");
        assert_eq!(r("incomplete %d", &[]), "incomplete %d");
        assert_eq!(r("%q", &[Arg::Int(42)]), "%q");
        assert_eq!(r("%z", &[Arg::Str("test")]), "%z");
        assert_eq!(r("%y then %d", &[Arg::Int(7)]), "%y then 7");
        assert_eq!(r("width only %12", &[Arg::Int(7)]), "width only %12");
    }

    #[test]
    fn test_multibyte_literals() {
        assert_eq!(r("héllo %s → %d", &[Arg::Str("wörld"), Arg::Int(1)]), "héllo wörld → 1");
        assert_eq!(r("%5s|", &[Arg::Str("日本")]), "   日本|");
    }

    #[test]
    fn test_complex_line() {
        let line = r(
            "[%08d] %-12s: %6.2f%% (%04X)",
            &[Arg::Int(42), Arg::Str("progress"), Arg::Float(67.89), Arg::Int(2048)],
        );
        assert_eq!(line, "[00000042] progress    :  67.89% (0800)");
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(r("%d", &[Arg::Int(i64::MIN)]), "-9223372036854775808");
        assert_eq!(r("%u", &[Arg::UInt(u64::MAX)]), "18446744073709551615");
        assert_eq!(r("%.2f", &[Arg::Float(123456.789)]), "123456.79");
    }

    #[test]
    fn test_render_guarded_catches_panics() {
        struct Explodes;
        impl fmt::Display for Explodes {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("boom")
            }
        }
        assert_eq!(render_guarded("%s", &[Arg::display(&Explodes)]), FORMAT_ERROR);
        assert_eq!(render_guarded("%s!", &[Arg::Str("ok")]), "ok!");
    }
}
