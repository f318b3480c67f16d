//! Rendering of digests as uppercase hexadecimal display strings.

use std::fmt;

use crate::algorithm::Digest;

impl Digest {
    /// Formats the digest as uppercase hex with its algorithm's fixed
    /// width: 4 digits for CRC-16, 8 for CRC-32, and two digits per byte
    /// for the hash algorithms (32/40/64).
    pub fn to_hex(&self) -> String {
        match self {
            Digest::Crc16(value) => format!("{value:04X}"),
            Digest::Crc32(value) => format!("{value:08X}"),
            Digest::Md5(bytes) => hex::encode_upper(bytes),
            Digest::Sha1(bytes) => hex::encode_upper(bytes),
            Digest::Sha256(bytes) => hex::encode_upper(bytes),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
