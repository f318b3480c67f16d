use md5::Md5;
use sha1::Sha1;
use sha2::{Digest as _, Sha256};

use crate::algorithm::{Algorithm, Digest};
use crate::{crc16, crc32};

/// Computes the digest of `data` under the selected algorithm.
///
/// Pure and infallible: the buffer is borrowed for the duration of the
/// call, an empty buffer is valid for every algorithm, and the result
/// depends on nothing but the bytes and the selector.
pub fn compute(data: &[u8], algorithm: Algorithm) -> Digest {
    match algorithm {
        Algorithm::Crc16 => Digest::Crc16(crc16::checksum(data)),
        Algorithm::Crc32 => Digest::Crc32(crc32::checksum(data)),
        Algorithm::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(data);
            Digest::Md5(hasher.finalize().into())
        }
        Algorithm::Sha1 => {
            let mut hasher = Sha1::new();
            hasher.update(data);
            Digest::Sha1(hasher.finalize().into())
        }
        Algorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            Digest::Sha256(hasher.finalize().into())
        }
    }
}
