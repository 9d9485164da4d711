//! Command-line boundary: `cubic c3 c2 c1 c0`.

use crate::error::Error;
use crate::format::format_root;
use crate::scan::scan_f64;
use crate::solver::Cubic;
use log::debug;

pub const NUM_COEFFICIENTS: usize = 4;

/// Parses the coefficients in order, stopping at the first one that is not a number.
/// The leading coefficient is checked only after all four have been read.
pub fn parse_coefficients<S: AsRef<str>>(args: &[S]) -> Result<Cubic, Error> {
    if args.len() != NUM_COEFFICIENTS {
        return Err(Error::UsageError);
    }

    let mut c = [0.0f64; NUM_COEFFICIENTS];
    for (value, arg) in c.iter_mut().zip(args.iter()) {
        let arg = arg.as_ref();
        *value = scan_f64(arg).ok_or_else(|| Error::ParseError(arg.to_string()))?;
    }
    debug!("coefficients: {:?}", c);

    Cubic::new(c[0], c[1], c[2], c[3])
}

/// Runs one invocation and returns the three output lines, one per root.
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<Vec<String>, Error> {
    let cubic = parse_coefficients(args)?;
    Ok(cubic.roots().iter().map(format_root).collect())
}
