//! Checksum computation core for the crcview file-integrity tool.
//!
//! Five interchangeable algorithms behind one selector: a 16-bit CRC over
//! an embedded reference table, CRC-32/ISO-HDLC, and MD5/SHA-1/SHA-256
//! delegated to the RustCrypto crates. Callers hand in a fully-read byte
//! buffer and get back a [`Digest`] they can format as uppercase hex.

mod algorithm;
mod crc16;
mod crc32;
mod engine;
mod format;
mod io;

pub use algorithm::{Algorithm, Digest};
pub use engine::compute;
pub use io::{checksum_file, ChecksumError};

/// Convenience: compute and format in one call.
pub fn checksum_hex(data: &[u8], algorithm: Algorithm) -> String {
    compute(data, algorithm).to_hex()
}
