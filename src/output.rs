//! Textual rendering of vectors, as a column of numbers
//!
//! This output is meant for humans reading diagnostics, in the spirit of a
//! numpy column array, and is not meant to be parsed back.

use crate::numeric::{floats, Float};

use std::fmt::{self, Display, Result, Write};

/// Default number of significant digits in vector output
///
/// One less than the actual machine type precision, so that rounding noise in
/// the last digit does not show up in the output.
///
pub const SIG_DIGITS: usize = (floats::DIGITS - 1) as usize;

/// Write a sequence of numbers as a column array
///
/// `[[a]\n [b]\n [c]]`, each entry being written in engineering notation with
/// `sig_digits` significant digits.
///
pub fn write_column(
    writer: &mut impl Write,
    components: impl IntoIterator<Item = Float>,
    sig_digits: usize,
) -> Result {
    write!(writer, "[")?;
    for (idx, x) in components.into_iter().enumerate() {
        if idx > 0 {
            write!(writer, "\n ")?;
        }
        write!(writer, "[")?;
        write_engineering(writer, x, sig_digits)?;
        write!(writer, "]")?;
    }
    write!(writer, "]")
}

/// Write a floating-point number using "engineering" notation
///
/// Analogous to the %g format of the C printf function, this method switches
/// between naive and scientific notation for floating-point numbers when the
/// number being printed becomes so small that printing leading zeroes could end
/// up larger than the scientific notation, or so large that we would be forced
/// to print more significant digits than requested.
///
pub fn write_engineering(writer: &mut impl Write, x: Float, sig_digits: usize) -> Result {
    let mut precision = sig_digits.max(1) - 1;
    if x == 0. {
        // Zero is special because you can't take its log
        write!(writer, "0")
    } else if !x.is_finite() {
        // Neither can you take the log of infinities and NaNs
        write!(writer, "{}", x)
    } else {
        // Otherwise, use log to evaluate order of magnitude
        let log_x = x.abs().log10();
        if log_x >= -3. && log_x < (sig_digits as Float) {
            // Print using naive notation
            //
            // Since Rust's precision controls number of digits after the
            // decimal point, we must adjust it depending on magnitude in order
            // to operate at a constant number of significant digits.
            precision = (precision as isize - log_x.trunc() as isize).max(0) as usize;

            // Numbers smaller than 1 must get one extra digit since the leading
            // zero does not count as a significant digit.
            if log_x < 0. {
                precision += 1
            }

            // People don't normally expect trailing zeros or decimal point in
            // naive notation, but be careful with integer numbers...
            let str_with_zeros = format!("{:.1$}", x, precision);
            if str_with_zeros.contains('.') {
                write!(
                    writer,
                    "{}",
                    str_with_zeros.trim_end_matches('0').trim_end_matches('.')
                )
            } else {
                write!(writer, "{}", str_with_zeros)
            }
        } else {
            // Print using scientific notation
            write!(writer, "{:.1$e}", x, precision)
        }
    }
}

/// Scalar wrapper which displays its value in engineering notation
///
/// The formatter's precision, if any, sets the number of significant digits.
/// Otherwise, `SIG_DIGITS` are used.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Engineering(pub Float);
//
impl Display for Engineering {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result {
        let sig_digits = fmt.precision().unwrap_or(SIG_DIGITS);
        write_engineering(fmt, self.0, sig_digits)
    }
}
