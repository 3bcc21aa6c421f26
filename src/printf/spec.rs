//! Parser for a single `%[flags][width][.precision][length]<conv>` token

/// Conversion selected by the last character of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `d`, `i`
    Signed,
    /// `u`
    Unsigned,
    /// `o`
    Octal,
    /// `x` / `X`
    Hex { upper: bool },
    /// `f` / `F`
    Fixed { upper: bool },
    /// `e` / `E`
    Exponent { upper: bool },
    /// `g` / `G`
    General { upper: bool },
    /// `c`
    Char,
    /// `s`
    Str,
}

impl Conversion {
    pub fn from_char(c: char) -> Option<Self> {
        let conversion = match c {
            'd' | 'i' => Conversion::Signed,
            'u' => Conversion::Unsigned,
            'o' => Conversion::Octal,
            'x' => Conversion::Hex { upper: false },
            'X' => Conversion::Hex { upper: true },
            'f' => Conversion::Fixed { upper: false },
            'F' => Conversion::Fixed { upper: true },
            'e' => Conversion::Exponent { upper: false },
            'E' => Conversion::Exponent { upper: true },
            'g' => Conversion::General { upper: false },
            'G' => Conversion::General { upper: true },
            'c' => Conversion::Char,
            's' => Conversion::Str,
            _ => return None,
        };
        Some(conversion)
    }

    /// Numeric conversions are the only ones that honor zero padding.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Conversion::Char | Conversion::Str)
    }
}

/// Parsed form of one format token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub conversion: Conversion,
    /// The conversion character as written
    pub conversion_char: char,
    /// Minimum field width, 0 when absent
    pub width: usize,
    /// `None` when no digits follow the `.`, or there is no `.`
    pub precision: Option<usize>,
    pub zero_pad: bool,
    pub left_align: bool,
}

/// Outcome of scanning the text that starts at a `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A complete token spanning `len` bytes
    Spec { spec: FormatSpec, len: usize },
    /// No supported conversion character; `len` bytes were consumed and
    /// should be copied through unchanged
    Malformed { len: usize },
}

const LENGTH_MODIFIERS: &[u8] = b"hlLqjzt";

/// Scan one token at the start of `input`, which must begin with `%`.
pub fn scan(input: &str) -> Token {
    let bytes = input.as_bytes();
    debug_assert_eq!(bytes.first(), Some(&b'%'));

    let mut pos = 1;
    let mut zero_pad = false;
    let mut left_align = false;

    while let Some(&b) = bytes.get(pos) {
        match b {
            b'0' => zero_pad = true,
            b'-' => left_align = true,
            // accepted, no effect
            b'+' | b' ' | b'#' => {}
            _ => break,
        }
        pos += 1;
    }

    let (width, next) = digits(bytes, pos);
    pos = next;

    let mut precision = None;
    if bytes.get(pos) == Some(&b'.') {
        let (value, next) = digits(bytes, pos + 1);
        if next > pos + 1 {
            precision = Some(value);
        }
        pos = next;
    }

    while bytes.get(pos).is_some_and(|b| LENGTH_MODIFIERS.contains(b)) {
        pos += 1;
    }

    let conversion = bytes
        .get(pos)
        .map(|&b| b as char)
        .and_then(|c| Conversion::from_char(c).map(|conv| (c, conv)));

    match conversion {
        Some((conversion_char, conversion)) => Token::Spec {
            spec: FormatSpec {
                conversion,
                conversion_char,
                width,
                precision,
                zero_pad,
                left_align,
            },
            len: pos + 1,
        },
        None => Token::Malformed { len: pos },
    }
}

/// Longest run of ASCII digits starting at `pos`, saturating on overflow.
fn digits(bytes: &[u8], mut pos: usize) -> (usize, usize) {
    let mut value: usize = 0;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add(usize::from(b - b'0'));
        pos += 1;
    }
    (value, pos)
}

impl FormatSpec {
    /// Parse a complete token such as `"%-08.3f"`.
    ///
    /// Returns `None` when the text is not exactly one supported token.
    pub fn parse(token: &str) -> Option<Self> {
        if !token.starts_with('%') {
            return None;
        }
        match scan(token) {
            Token::Spec { spec, len } if len == token.len() => Some(spec),
            _ => None,
        }
    }

    /// Zero padding only applies to numeric conversions that are right aligned.
    pub fn pads_with_zeros(&self) -> bool {
        self.zero_pad && !self.left_align && self.conversion.is_numeric()
    }
}
