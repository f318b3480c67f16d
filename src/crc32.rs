//! CRC-32/ISO-HDLC (the IEEE 802.3 checksum used by zip, gzip and PNG).
//!
//! Reflected, table-driven, byte-at-a-time. Polynomial 0xEDB88320
//! (bit-reversed 0x04C11DB7), initial value 0xFFFFFFFF, final XOR
//! 0xFFFFFFFF.

/// Reflected polynomial for LSB-first processing.
const POLYNOMIAL: u32 = 0xEDB8_8320;

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLYNOMIAL;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Standard CRC-32 lookup table, built once at compile time and shared
/// read-only by every computation.
static CRC32_TABLE: [u32; 256] = build_table();

/// Computes the CRC-32 of `data`.
pub fn checksum(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFF_u32;
    for &byte in data {
        let index = ((crc ^ byte as u32) & 0xFF) as usize;
        crc = (crc >> 8) ^ CRC32_TABLE[index];
    }
    !crc
}
