//! printf conformance tests through the public entry points

use redlog::printf::{render, Arg};
use redlog::{args, fmt};
use std::fmt as stdfmt;

#[test]
fn test_basic_format_specifiers() {
    assert_eq!(fmt!("%d", 42), "42");
    assert_eq!(fmt!("%i", -7), "-7");
    assert_eq!(fmt!("%s", "hello"), "hello");
    assert_eq!(fmt!("%c", 65), "A");
    assert_eq!(fmt!("%x", 255), "ff");
    assert_eq!(fmt!("%X", 255), "FF");
    assert_eq!(fmt!("%o", 64), "100");
    assert_eq!(fmt!("%u", 789u32), "789");
}

#[test]
fn test_width_and_precision() {
    assert_eq!(fmt!("%08d", 42), "00000042");
    assert_eq!(fmt!("%.2f", 3.14159), "3.14");
    assert_eq!(fmt!("%-5d|", 3), "3    |");
    assert_eq!(fmt!("%8.2f", 3.14159), "    3.14");
    assert_eq!(fmt!("%-8.2f|", 3.14159), "3.14    |");
    assert_eq!(fmt!("%.0f", 3.9), "4");
    assert_eq!(fmt!("%08x", 255), "000000ff");
    assert_eq!(fmt!("%06o", 64), "000100");
    assert_eq!(fmt!("%10s", "hello"), "     hello");
    assert_eq!(fmt!("%-10s|", "hello"), "hello     |");
    assert!(fmt!("%.3s", "hello").contains("hel"));
}

#[test]
fn test_float_defaults() {
    assert_eq!(fmt!("%f", 0.0), "0");
    assert_eq!(fmt!("%f", 2.5), "2.5");
    let sci = fmt!("%.2e", 1234.5);
    assert!(sci.contains("1.23"));
    assert!(sci.contains('e'));
}

#[test]
fn test_length_modifiers() {
    assert_eq!(fmt!("%d %ld %u", 123, 456i64, 789u64), "123 456 789");
    assert_eq!(fmt!("%hx", 123i16), "7b");
    assert_eq!(fmt!("%zu", 12usize), "12");
}

#[test]
fn test_escapes() {
    assert_eq!(fmt!("100%%"), "100%");
    assert_eq!(fmt!("%%%%"), "%%");
    assert_eq!(fmt!("%%d", 1), "%d");
    assert_eq!(fmt!("%% %d %%", 42), "% 42 %");
    assert_eq!(fmt!("trailing %"), "trailing %");
}

#[test]
fn test_type_mismatch_falls_back_to_text() {
    assert_eq!(fmt!("%d", "hello"), "hello");
    assert_eq!(fmt!("%x", "hello"), "hello");
    assert_eq!(fmt!("%f", "hello"), "hello");
    assert_eq!(fmt!("%d", None::<&str>), "null");
}

#[test]
fn test_argument_count_mismatch() {
    assert_eq!(render("%d %s", &[]), "%d %s");
    assert_eq!(fmt!("%d", 1, 2), "1");
    assert_eq!(fmt!("%d", 1, 2, 3), "1");
    assert_eq!(fmt!("%d %s", 42), "42 %s");
    assert_eq!(fmt!("incomplete %d"), "incomplete %d");
    assert_eq!(fmt!("", 42, "ignored"), "");
}

#[test]
fn test_malformed_specifiers_do_not_crash() {
    assert!(!fmt!("%q", 42).is_empty());
    assert!(!fmt!("%z", "test").is_empty());
    assert_eq!(fmt!("%y%d", 5), "%y5");
    assert_eq!(fmt!("%-", 5), "%-");
}

#[test]
fn test_custom_types() {
    struct Point {
        x: i32,
        y: i32,
    }

    impl stdfmt::Display for Point {
        fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
            write!(f, "Point({}, {})", self.x, self.y)
        }
    }

    struct NoDisplay;

    let p = Point { x: 1, y: 2 };
    assert_eq!(fmt!("at %s", p), "at Point(1, 2)");
    assert_eq!(fmt!("%-14s|", p), "Point(1, 2)   |");
    assert_eq!(fmt!("%s", NoDisplay), "[unprintable]");
}

#[test]
fn test_mixed_line() {
    let line = fmt!(
        "User %s (ID: %d) has %.1f%% completion",
        "alice",
        12345,
        87.5
    );
    assert_eq!(line, "User alice (ID: 12345) has 87.5% completion");
}

#[test]
fn test_args_macro_and_function_entry() {
    let values = args!("x", 1, 2.0, true, 'c');
    assert_eq!(
        redlog::fmt("%s %d %.1f %s %c", &values),
        "x 1 2.0 true c"
    );
    assert_eq!(redlog::fmt("%d", &[Arg::Bool(true)]), "1");
}

#[test]
fn test_panicking_display_yields_format_error() {
    struct Explodes;

    impl stdfmt::Display for Explodes {
        fn fmt(&self, _f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
            panic!("display failed")
        }
    }

    assert_eq!(fmt!("%s", Explodes), "[format_error]");
}
