//! The diagnostic formatter: parameter banner and truncated numeric display.
//!
//! Output conventions follow the encryption library's own example helpers:
//! a slash-framed banner for parameters, and indented bracketed listings
//! that show a head/tail window of long sequences with a single `...`
//! marker standing in for the elided middle.
//!
//! Every routine comes in two forms: a `write_*` primitive generic over
//! [`fmt::Write`] whose errors propagate to the caller, and a `print_*`
//! convenience that renders to stdout. Tests target the `write_*` layer.

use std::fmt::{self, Write};

use itertools::Itertools;

use crate::params::{EncryptionParams, Scheme};

/// Default head/tail window for [`print_vector`].
pub const DEFAULT_PRINT_SIZE: usize = 4;
/// Default head/tail window for [`print_matrix`].
pub const DEFAULT_MATRIX_PRINT_SIZE: usize = 5;
/// Default fractional digits for numeric display.
pub const DEFAULT_PRECISION: usize = 3;

/// Lowercase hex rendering without a `0x` prefix.
pub fn int_to_hex_string(value: u64) -> String {
    format!("{value:x}")
}

/// Render the parameter banner for `parms` into `w`.
///
/// Layout:
/// ```text
/// /
/// | Encryption parameters
/// | scheme: bfv
/// | poly_modulus_degree: 8192
/// | coeff_modulus size: 80(50 + 30) bits
/// | plain_modulus: 1032193
/// \
/// ```
///
/// The `plain_modulus` line appears only for BFV; the coefficient-modulus
/// bit counts are listed in the order the snapshot carries them.
///
/// Panics if `coeff_modulus` is empty, or if a BFV snapshot carries no
/// plaintext modulus. Both are caller errors.
pub fn write_parameters<W: Write>(w: &mut W, parms: &EncryptionParams) -> fmt::Result {
    assert!(
        !parms.coeff_modulus.is_empty(),
        "EncryptionParams must carry at least one coeff_modulus entry"
    );
    writeln!(w, "/")?;
    writeln!(w, "| Encryption parameters")?;
    writeln!(w, "| scheme: {}", parms.scheme.name())?;
    writeln!(w, "| poly_modulus_degree: {}", parms.poly_modulus_degree)?;
    writeln!(
        w,
        "| coeff_modulus size: {}({}) bits",
        parms.total_coeff_modulus_bits(),
        parms.coeff_modulus.iter().map(|m| m.bit_count).join(" + "),
    )?;
    if parms.scheme == Scheme::Bfv {
        match parms.plain_modulus {
            Some(t) => writeln!(w, "| plain_modulus: {t}")?,
            None => panic!("BFV snapshot without a plain_modulus"),
        }
    }
    writeln!(w, "\\")
}

/// Print the parameter banner for `parms` to stdout.
pub fn print_parameters(parms: &EncryptionParams) {
    print!("{}", render(|w| write_parameters(w, parms)));
}

/// Render a bracketed listing of `vec` into `w`, eliding the middle.
///
/// Sequences of at most `2 * print_size` elements are printed in full;
/// longer ones show the first and last `print_size` elements around a
/// single ` ...,` marker. Values are fixed-point formatted to `prec`
/// fractional digits with the standard formatter's rounding (nearest,
/// ties resolved on the exact binary value). A blank line frames the
/// listing on both sides.
pub fn write_vector<W: Write>(
    w: &mut W,
    vec: &[f64],
    print_size: usize,
    prec: usize,
) -> fmt::Result {
    let slot_count = vec.len();
    writeln!(w)?;
    write!(w, "    [")?;
    if slot_count <= 2 * print_size {
        for (i, v) in vec.iter().enumerate() {
            write!(w, " {v:.prec$}")?;
            if i != slot_count - 1 {
                write!(w, ",")?;
            } else {
                writeln!(w, " ]")?;
            }
        }
    } else {
        for v in &vec[..print_size] {
            write!(w, " {v:.prec$},")?;
        }
        write!(w, " ...,")?;
        for (i, v) in vec.iter().enumerate().skip(slot_count - print_size) {
            write!(w, " {v:.prec$}")?;
            if i != slot_count - 1 {
                write!(w, ",")?;
            } else {
                writeln!(w, " ]")?;
            }
        }
    }
    writeln!(w)
}

/// Print a bracketed, middle-elided listing of `vec` to stdout.
pub fn print_vector(vec: &[f64], print_size: usize, prec: usize) {
    print!("{}", render(|w| write_vector(w, vec, print_size, prec)));
}

/// Render a two-row, row-major `matrix` into `w`.
///
/// Each row gets its own bracketed line with a head/tail window of
/// `print_size` and one elision marker, computed over the offset windows
/// `0..row_size` and `row_size..2*row_size`. The marker is emitted even
/// when `row_size == 2 * print_size` and the windows cover the whole row.
///
/// The caller guarantees `row_size >= 2 * print_size` and
/// `matrix.len() >= 2 * row_size`; violations surface as out-of-range
/// panics, never as silently truncated or padded output.
pub fn write_matrix<W: Write>(
    w: &mut W,
    matrix: &[f64],
    row_size: usize,
    print_size: usize,
    prec: usize,
) -> fmt::Result {
    writeln!(w)?;
    write_row(w, &matrix[..row_size], print_size, prec)?;
    write_row(w, &matrix[row_size..2 * row_size], print_size, prec)?;
    writeln!(w)
}

/// Print a two-row, row-major matrix to stdout.
pub fn print_matrix(matrix: &[f64], row_size: usize, print_size: usize, prec: usize) {
    print!("{}", render(|w| write_matrix(w, matrix, row_size, print_size, prec)));
}

fn write_row<W: Write>(w: &mut W, row: &[f64], print_size: usize, prec: usize) -> fmt::Result {
    let row_size = row.len();
    write!(w, "    [")?;
    for v in &row[..print_size] {
        write!(w, " {v:.prec$},")?;
    }
    write!(w, " ...,")?;
    for (i, v) in row.iter().enumerate().skip(row_size - print_size) {
        write!(w, " {v:.prec$}")?;
        if i != row_size - 1 {
            write!(w, ",")?;
        } else {
            writeln!(w, " ]")?;
        }
    }
    Ok(())
}

fn render(f: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    f(&mut out).expect("formatting into a String cannot fail");
    out
}
