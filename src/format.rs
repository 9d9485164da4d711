use crate::complex::Complex;

/// Significant digits printed for each part of a root.
pub const ROOT_PRECISION: usize = 16;

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Formats `x` the way C's `printf("%.*g", precision, x)` does.
pub fn format_g(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return if x.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if x.is_infinite() {
        return if x < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // The decimal exponent has to be taken after rounding to `precision` digits.
    let sci = format!("{:.*e}", precision - 1, x);
    // `{:e}` on a finite value always writes "<mantissa>e<integer exponent>".
    let split = sci.find('e').expect("`{:e}` output has an exponent");
    let mantissa = &sci[..split];
    let exponent: i32 = sci[split + 1..]
        .parse()
        .expect("`{:e}` exponent is an integer");

    if exponent < -4 || exponent >= precision as i32 {
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, x);
        trim_fraction(&fixed).to_string()
    }
}

/// One output line: the real part, then ` + |im| i` or ` - |im| i` when the
/// imaginary part is non-zero.
pub fn format_root(root: &Complex) -> String {
    let mut line = format_g(root.re, ROOT_PRECISION);
    if root.im != 0.0 {
        line.push_str(if root.im < 0.0 { " - " } else { " + " });
        line.push_str(&format_g(root.im.abs(), ROOT_PRECISION));
        line.push_str(" i");
    }
    line
}
