/// Checksum and hash algorithms supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// 16-bit CRC over the embedded lookup table
    Crc16,
    /// CRC-32/ISO-HDLC (IEEE 802.3 polynomial)
    Crc32,
    /// MD5 (128-bit)
    Md5,
    /// SHA-1 (160-bit)
    Sha1,
    /// SHA-256 (256-bit)
    Sha256,
}

impl Algorithm {
    /// Every supported algorithm, in selector order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Crc16,
        Algorithm::Crc32,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
    ];

    /// Human-readable name, as shown in a selector.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Crc16 => "CRC-16",
            Algorithm::Crc32 => "CRC-32",
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
        }
    }

    /// Width of the formatted digest in hex characters.
    pub fn hex_width(&self) -> usize {
        match self {
            Algorithm::Crc16 => 4,
            Algorithm::Crc32 => 8,
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha256 => 64,
        }
    }
}

/// Result of one checksum computation.
///
/// The tag travels with the value, so a digest can always be formatted
/// without knowing which algorithm produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    Crc16(u16),
    Crc32(u32),
    Md5([u8; 16]),
    Sha1([u8; 20]),
    Sha256([u8; 32]),
}

impl Digest {
    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Digest::Crc16(_) => Algorithm::Crc16,
            Digest::Crc32(_) => Algorithm::Crc32,
            Digest::Md5(_) => Algorithm::Md5,
            Digest::Sha1(_) => Algorithm::Sha1,
            Digest::Sha256(_) => Algorithm::Sha256,
        }
    }
}
