//! Reads a real-number literal from a command-line argument the way a C
//! `scanf("%lf")` conversion does: leading whitespace is skipped, the longest
//! prefix that forms a number is converted, and anything after it is ignored.
//! A prefix that starts like a number but cannot be completed (`0x`, `infin`)
//! is a failure, since the C scanner has already consumed it.

use core::iter::Peekable;
use core::str::CharIndices;
use log::trace;

// Significant bits kept while reading hex digits; the rest only feed the sticky bit.
const HEX_MANTISSA_LIMIT: u64 = 1 << 60;

// Binary exponents past this overflow or underflow any f64 regardless of mantissa.
const MAX_BINARY_EXPONENT: i32 = 100_000;

struct Scanner<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn consumec(&mut self) {
        self.chars.next();
    }

    fn peekc(&mut self) -> Option<char> {
        Some(self.chars.peek()?.1)
    }

    fn offset(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(i, _)) => i,
            None => self.text.len(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peekc() {
            // C isspace(): space, \t, \n, \v, \f, \r
            if c == ' ' || ('\t'..='\r').contains(&c) {
                self.consumec();
            } else {
                break;
            }
        }
    }

    /// Consumes an optional sign. Returns true for '-'.
    fn scan_sign(&mut self) -> bool {
        match self.peekc() {
            Some('-') => {
                self.consumec();
                true
            }
            Some('+') => {
                self.consumec();
                false
            }
            _ => false,
        }
    }

    fn skip_digits(&mut self) -> usize {
        let mut n = 0;
        while let Some(c) = self.peekc() {
            if c.is_ascii_digit() {
                self.consumec();
                n += 1;
            } else {
                break;
            }
        }
        n
    }

    /// Number of leading characters of the rest of the text that match `word`, ignoring case.
    fn match_word(&mut self, word: &str) -> usize {
        let start = self.offset();
        self.text.as_bytes()[start..]
            .iter()
            .zip(word.as_bytes())
            .take_while(|(a, b)| a.eq_ignore_ascii_case(b))
            .count()
    }

    // "inf", "infinity" or "nan". A partial "infinity" such as "infin" fails.
    fn scan_special(&mut self) -> Option<Option<f64>> {
        if self.match_word("inf") == 3 {
            let start = self.offset();
            let tail = &self.text[start + 3..];
            let matched = Scanner::new(tail).match_word("inity");
            return Some(match matched {
                0 | 5 => Some(f64::INFINITY),
                _ => None,
            });
        }
        if self.match_word("nan") == 3 {
            return Some(Some(f64::NAN));
        }
        None
    }

    // [eE][+-]?[0-9]+ (or [pP] for hex), committed to only if at least one digit follows.
    fn scan_exponent(&mut self, markers: [char; 2]) -> Option<i32> {
        let c = self.peekc()?;
        if !markers.contains(&c) {
            return None;
        }
        let mut ic = self.chars.clone();
        ic.next(); // consume the marker (in the cloned iterator)
        let mut negative = false;
        if let Some(&(_, sign)) = ic.peek() {
            if sign == '+' || sign == '-' {
                negative = sign == '-';
                ic.next();
            }
        }
        match ic.peek() {
            Some(&(_, c)) if c.is_ascii_digit() => {}
            _ => return None,
        }
        self.chars = ic;

        let mut exponent: i32 = 0;
        while let Some(c) = self.peekc() {
            match c.to_digit(10) {
                Some(d) => {
                    self.consumec();
                    exponent = (exponent * 10 + d as i32).min(MAX_BINARY_EXPONENT);
                }
                None => break,
            }
        }
        Some(if negative { -exponent } else { exponent })
    }

    fn scan_decimal(&mut self) -> Option<f64> {
        let start = self.offset();
        let mut digits = self.skip_digits();
        if self.peekc() == Some('.') {
            self.consumec();
            digits += self.skip_digits();
        }
        if digits == 0 {
            return None;
        }
        self.scan_exponent(['e', 'E']);
        let end = self.offset();
        let literal = &self.text[start..end];
        trace!("scan_decimal: literal {:?}", literal);
        literal.parse::<f64>().ok()
    }

    // 0x followed by hex digits, an optional fraction and an optional binary exponent.
    fn scan_hex(&mut self) -> Option<f64> {
        let mut mantissa: u64 = 0;
        let mut sticky = false;
        let mut exponent: i32 = 0;
        let mut digits = 0;
        let mut after_point = false;

        while let Some(c) = self.peekc() {
            if c == '.' && !after_point {
                after_point = true;
                self.consumec();
                continue;
            }
            let d = match c.to_digit(16) {
                Some(d) => d as u64,
                None => break,
            };
            self.consumec();
            digits += 1;
            if mantissa < HEX_MANTISSA_LIMIT {
                mantissa = mantissa * 16 + d;
                if after_point {
                    exponent -= 4;
                }
            } else {
                sticky |= d != 0;
                if !after_point {
                    exponent += 4;
                }
            }
        }
        if digits == 0 {
            // glibc reads a bare "0x." as zero but rejects "0x"
            return if after_point { Some(0.0) } else { None };
        }

        if let Some(e) = self.scan_exponent(['p', 'P']) {
            exponent = (exponent + e).max(-MAX_BINARY_EXPONENT).min(MAX_BINARY_EXPONENT);
        }
        trace!(
            "scan_hex: mantissa = {:#x}, sticky = {}, exponent = {}",
            mantissa,
            sticky,
            exponent
        );
        Some(hex_to_f64(mantissa, sticky, exponent))
    }

    fn scan_number(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let negative = self.scan_sign();

        let value = if let Some(special) = self.scan_special() {
            special?
        } else if self.match_word("0x") == 2 {
            self.consumec();
            self.consumec();
            self.scan_hex()?
        } else {
            self.scan_decimal()?
        };

        Some(if negative { -value } else { value })
    }
}

/// Rounds `mantissa` (plus a sticky bit for dropped non-zero digits) to 53 bits,
/// half to even, and scales it by 2^exponent.
fn hex_to_f64(mantissa: u64, sticky: bool, exponent: i32) -> f64 {
    if mantissa == 0 {
        return 0.0;
    }
    let mut m = mantissa;
    let mut e = exponent;
    let bits = 64 - m.leading_zeros() as i32;
    if bits > 53 {
        let shift = (bits - 53) as u32;
        let rem = m & ((1u64 << shift) - 1);
        let half = 1u64 << (shift - 1);
        m >>= shift;
        e += shift as i32;
        if rem > half || (rem == half && (sticky || m & 1 == 1)) {
            m += 1;
        }
    }
    scale_by_power_of_two(m as f64, e)
}

fn scale_by_power_of_two(mut x: f64, mut e: i32) -> f64 {
    while e > 1000 {
        x *= 2f64.powi(1000);
        e -= 1000;
    }
    while e < -1000 {
        x *= 2f64.powi(-1000);
        e += 1000;
    }
    x * 2f64.powi(e)
}

/// Converts the leading real-number literal of `text`. Returns `None` when
/// `text` does not begin with one.
pub fn scan_f64(text: &str) -> Option<f64> {
    let value = Scanner::new(text).scan_number();
    trace!("scan_f64: {:?} -> {:?}", text, value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use log::info;

    fn case(input: &str, expected: Option<f64>) {
        info!("case: input = {:?}", input);
        assert_eq!(scan_f64(input), expected, "input = {:?}", input);
    }

    #[test]
    fn scan_test() {
        init_test();
        case("0", Some(0.0));
        case("1", Some(1.0));
        case("-6", Some(-6.0));
        case("+11", Some(11.0));
        case("2.5", Some(2.5));
        case("-.5", Some(-0.5));
        case("3.", Some(3.0));
        case("1e3", Some(1000.0));
        case("1.5E-2", Some(0.015));
        case("-2e+1", Some(-20.0));
        case("  \t7", Some(7.0));
    }

    #[test]
    fn trailing_text_is_ignored() {
        init_test();
        case("12abc", Some(12.0));
        case("1.5.6", Some(1.5));
        case("4e", Some(4.0));
        case("4e+", Some(4.0));
        case("2x", Some(2.0));
    }

    #[test]
    fn rejects_non_numbers() {
        init_test();
        for input in ["", " ", "abc", "-", "+", ".", "-.", "e5", "x1"].iter() {
            case(input, None);
        }
    }

    #[test]
    fn special_words() {
        init_test();
        case("inf", Some(f64::INFINITY));
        case("-Infinity", Some(f64::NEG_INFINITY));
        case("INFx", Some(f64::INFINITY));
        case("infinityx", Some(f64::INFINITY));
        case("in", None);
        case("infin", None);
        case("infi", None);
        case("INFINIT", None);
        case("na", None);
        assert!(scan_f64("nan").map_or(false, |x| x.is_nan()));
        assert!(scan_f64("nanx").map_or(false, |x| x.is_nan()));
        assert!(scan_f64("-nan").map_or(false, |x| x.is_nan() && x.is_sign_negative()));
    }

    #[test]
    fn hex_literals() {
        init_test();
        case("0x10", Some(16.0));
        case("-0x10", Some(-16.0));
        case("0X1p4", Some(16.0));
        case("0x1.8", Some(1.5));
        case("0x.8", Some(0.5));
        case("0x1P-2", Some(0.25));
        case("0x1p", Some(1.0));
        case("0x1p+", Some(1.0));
        case("0xAbC", Some(2748.0));
        case("0x", None);
        case("0xg", None);
        case("0x.", Some(0.0));
        case("0x.p5", Some(0.0));
    }

    #[test]
    fn hex_literals_round_half_to_even() {
        init_test();
        // 54 significant bits, exactly halfway: rounds up to the even neighbour 2.0
        case("0x1.fffffffffffff8p0", Some(2.0));
        // halfway below an even mantissa stays put
        case("0x1.00000000000008p0", Some(1.0));
        // any non-zero digit past the kept ones breaks the tie upward
        case("0x1.000000000000080001p0", Some(1.0 + f64::EPSILON));
        case("0x123456789abcdef0123", Some(5.3730036427316852e+21));
        case("0x1p-1074", Some(f64::from_bits(1)));
        case("0x1p99999999999", Some(f64::INFINITY));
    }
}
