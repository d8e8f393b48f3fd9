//! CRC32 checksum engine (CRC-32/ISO-HDLC, the zlib/gzip/PNG variant).
//!
//! Table-driven, one byte per iteration. The table trades 1 KB of static
//! memory for 8 precomputed polynomial-division steps per byte and is built
//! in a const context, so it exists before main and is never written again.

use crate::{MkError, MkResult};

/// Reflected form of the CRC32 generator polynomial 0x04C11DB7.
const CRC32_POLY: u32 = 0xEDB8_8320;

/// 256-entry lookup table: entry `i` is the CRC32 remainder of the single
/// byte value `i`, eight shift-and-conditional-XOR steps against the
/// reflected polynomial.
const fn make_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0u32;
    while i < 256 {
        let mut crc = i;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC32_POLY;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
}

static TABLE: [u32; 256] = make_table();

/// Compute the CRC32 of a byte slice.
///
/// Accumulator starts at `0xFFFF_FFFF` and is inverted after the last byte,
/// per ISO 3309. Total over all inputs; the empty slice yields 0.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for &b in data {
        let idx = ((crc ^ b as u32) & 0xFF) as usize;
        crc = (crc >> 8) ^ TABLE[idx];
    }
    crc ^ 0xFFFF_FFFF
}

/// Compute the CRC32 of a string under a strict Latin-1 encoding.
///
/// Each char becomes one byte; a char above U+00FF has no single-byte
/// representation and fails with [`MkError::Encoding`]. There is no fallback
/// encoding to substitute, so the error propagates to the caller as-is.
pub fn crc32_str(text: &str) -> MkResult<u32> {
    let bytes = encode_latin1(text)?;
    Ok(crc32(&bytes))
}

/// Encode `text` as Latin-1, one byte per char.
fn encode_latin1(text: &str) -> MkResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let code = ch as u32;
        if code > 0xFF {
            return Err(MkError::Encoding(ch));
        }
        bytes.push(code as u8);
    }
    Ok(bytes)
}

/// Incremental CRC32 state, for inputs that arrive in chunks.
///
/// Any partitioning of the input produces the same result as the one-shot
/// [`crc32`] function.
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self { state: 0xFFFF_FFFF }
    }
}

impl Crc32 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a chunk of input into the accumulator.
    pub fn update(&mut self, data: &[u8]) {
        for &b in data {
            let idx = ((self.state ^ b as u32) & 0xFF) as usize;
            self.state = (self.state >> 8) ^ TABLE[idx];
        }
    }

    /// Raw accumulator before the final inversion.
    ///
    /// The parental-control key schedule consumes this value rather than the
    /// finalized checksum; see [`crate::masterkey`].
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Finish: invert the accumulator and return the checksum.
    pub fn finalize(&self) -> u32 {
        self.state ^ 0xFFFF_FFFF
    }
}
