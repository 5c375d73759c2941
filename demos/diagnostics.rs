//! Renders sample parameter banners and decoded-style vectors.
//!
//! Run with `cargo run --example diagnostics`. The snapshots are built
//! locally; in a real program they come from the encryption library's
//! context query interface.

use he_diag::display::{
    self, DEFAULT_MATRIX_PRINT_SIZE, DEFAULT_PRECISION, DEFAULT_PRINT_SIZE,
};
use he_diag::params::EncryptionParams;
use rand::Rng;
use tracing::info;

fn main() {
    tracing_subscriber::fmt::init();

    let bfv = EncryptionParams::bfv(8192, &[50, 30], 1_032_193);
    info!("BFV context");
    display::print_parameters(&bfv);
    info!(
        "plain_modulus in hex: {}",
        display::int_to_hex_string(1_032_193)
    );

    let ckks = EncryptionParams::ckks(16384, &[60, 40, 40, 60]);
    info!("CKKS context");
    display::print_parameters(&ckks);

    // A decoded-result-like vector: long enough that the middle is elided.
    let mut rng = rand::thread_rng();
    let slots: Vec<f64> = (0..64).map(|_| rng.gen_range(-1.0..1.0)).collect();
    info!("decoded slots, head/tail window of {DEFAULT_PRINT_SIZE}");
    display::print_vector(&slots, DEFAULT_PRINT_SIZE, DEFAULT_PRECISION);

    // Two batched rows, row-major.
    let row_size = 32;
    let matrix: Vec<f64> = (0..2 * row_size).map(|i| i as f64 * 0.5).collect();
    info!("batched rows, head/tail window of {DEFAULT_MATRIX_PRINT_SIZE}");
    display::print_matrix(&matrix, row_size, DEFAULT_MATRIX_PRINT_SIZE, DEFAULT_PRECISION);
}
