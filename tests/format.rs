//! Integration tests: rendered diagnostics match the binding's example
//! helpers line for line.

use he_diag::params::{EncryptionParams, Modulus, Scheme};
use he_diag::{write_matrix, write_parameters, write_vector};

fn banner(parms: &EncryptionParams) -> String {
    let mut out = String::new();
    write_parameters(&mut out, parms).unwrap();
    out
}

fn vector(vec: &[f64], print_size: usize, prec: usize) -> String {
    let mut out = String::new();
    write_vector(&mut out, vec, print_size, prec).unwrap();
    out
}

/// Count of fixed-point numeric tokens in a rendered listing.
fn numeric_tokens(out: &str) -> usize {
    out.split(|c: char| c == ' ' || c == ',' || c == '\n')
        .filter(|tok| !tok.is_empty() && tok.chars().next().unwrap().is_ascii_digit())
        .count()
}

#[test]
fn test_bfv_banner_carries_plain_modulus() {
    let parms = EncryptionParams::bfv(8192, &[50, 30], 1032193);
    let out = banner(&parms);
    assert!(out.contains("| coeff_modulus size: 80(50 + 30) bits\n"));
    assert!(out.contains("| plain_modulus: 1032193\n"));
    assert!(out.starts_with("/\n"));
    assert!(out.ends_with("\\\n"));
}

#[test]
fn test_ckks_and_none_banners_omit_plain_modulus() {
    let ckks = EncryptionParams::ckks(16384, &[60, 40, 40, 60]);
    assert!(!banner(&ckks).contains("plain_modulus"));

    let none = EncryptionParams {
        scheme: Scheme::from_id(99),
        poly_modulus_degree: 2048,
        coeff_modulus: vec![Modulus::from_value(0xffffee001)],
        plain_modulus: Some(65537),
    };
    let out = banner(&none);
    assert!(out.contains("| scheme: none\n"));
    assert!(
        !out.contains("plain_modulus"),
        "plain_modulus is a BFV-only line"
    );
}

#[test]
fn test_banner_sum_matches_entries() {
    let chains: [&[u32]; 3] = [&[50, 30], &[60, 40, 40, 60], &[36]];
    for bits in chains {
        let parms = EncryptionParams::ckks(8192, bits);
        let sum: u32 = bits.iter().sum();
        let out = banner(&parms);
        assert!(
            out.contains(&format!("coeff_modulus size: {sum}(")),
            "sum {sum} missing from banner for chain {bits:?}: {out}"
        );
    }
}

#[test]
fn test_vector_prints_all_when_short() {
    for n in 0..=8usize {
        let vec: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let out = vector(&vec, 4, 3);
        assert_eq!(numeric_tokens(&out), n, "all {n} elements printed");
        assert!(!out.contains("..."), "no marker for n={n} <= 2*print_size");
    }
}

#[test]
fn test_vector_elides_when_long() {
    for n in [9usize, 10, 64, 4096] {
        let vec: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let out = vector(&vec, 4, 3);
        assert_eq!(numeric_tokens(&out), 8, "2*print_size tokens for n={n}");
        assert_eq!(out.matches("...").count(), 1, "exactly one marker for n={n}");
    }
}

#[test]
fn test_vector_head_and_tail_window() {
    let vec: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let out = vector(&vec, 3, 0);
    assert_eq!(out, "\n    [ 0, 1, 2, ..., 17, 18, 19 ]\n\n");
}

#[test]
fn test_spec_examples() {
    let out = vector(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 1);
    assert!(out.contains("[ 1.0, 2.0, ..., 5.0, 6.0 ]"));

    let out = vector(&[1.0, 2.0, 3.0], 4, 3);
    assert_eq!(numeric_tokens(&out), 3);
    assert!(!out.contains("..."));
}

#[test]
fn test_matrix_rows_follow_offset_windows() {
    let row_size = 16;
    let matrix: Vec<f64> = (0..2 * row_size).map(|i| i as f64).collect();
    let mut out = String::new();
    write_matrix(&mut out, &matrix, row_size, 5, 0).unwrap();

    let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2, "one line per row");
    assert_eq!(lines[0], "    [ 0, 1, 2, 3, 4, ..., 11, 12, 13, 14, 15 ]");
    assert_eq!(lines[1], "    [ 16, 17, 18, 19, 20, ..., 27, 28, 29, 30, 31 ]");
}

#[test]
fn test_matrix_ignores_trailing_slots() {
    // A decoded batch often carries more slots than the two displayed rows;
    // everything past 2*row_size is ignored.
    let row_size = 10;
    let matrix: Vec<f64> = (0..64).map(|i| i as f64).collect();
    let mut out = String::new();
    write_matrix(&mut out, &matrix, row_size, 5, 0).unwrap();
    assert!(out.contains("[ 0, 1, 2, 3, 4, ..., 5, 6, 7, 8, 9 ]"));
    assert!(out.contains("[ 10, 11, 12, 13, 14, ..., 15, 16, 17, 18, 19 ]"));
    assert!(!out.contains("63"));
}
