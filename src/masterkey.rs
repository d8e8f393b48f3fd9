//! Parental-control master key derivation.
//!
//! The console derives its reset code from the displayed date (MMDD) and the
//! last four digits of the serial number: the eight digits are run through
//! CRC32 and the un-inverted accumulator is folded down to a 5-digit code.

use crate::crc32::Crc32;
use crate::{MkError, MkResult};

/// Additive constant in the key schedule.
const ROLL: u32 = 0x14C1;
/// XOR mask applied to the CRC accumulator.
const XOR_MASK: u32 = 0xAAAA;
/// The key is reduced to 5 decimal digits.
const MODULUS: u32 = 100_000;

/// A computed master key for one serial number / date pair.
///
/// Validation and the key computation both happen in [`MasterKey::new`];
/// a constructed value always holds a valid key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterKey {
    serial: String,
    date: String,
    key: u32,
}

impl MasterKey {
    /// Validate inputs and compute the reset code.
    ///
    /// `serial` is the 8-digit device serial (or confirmation number);
    /// `month` and `day` are the console's displayed date, two digits each.
    pub fn new(serial: &str, month: &str, day: &str) -> MkResult<Self> {
        if serial.len() != 8 || !serial.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MkError::InvalidSerial);
        }
        let date = format!("{month}{day}");
        if date.len() != 4 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MkError::InvalidDate);
        }
        let key = schedule(&date, &serial[4..8]);
        Ok(Self {
            serial: serial.to_string(),
            date,
            key,
        })
    }

    /// The 5-digit reset code.
    pub fn key(&self) -> u32 {
        self.key
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// The MMDD digest prefix.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Short form of [`MasterKey::new`] for callers that only want the code.
pub fn master_key(serial: &str, month: &str, day: &str) -> MkResult<u32> {
    MasterKey::new(serial, month, day).map(|mk| mk.key())
}

/// Run the key schedule over the 8-digit digest `MMDD || serial[4..8]`.
///
/// The console consumes the CRC accumulator before the final inversion, so
/// this reads [`Crc32::state`] instead of the finalized checksum.
fn schedule(date: &str, serial_tail: &str) -> u32 {
    let mut crc = Crc32::new();
    crc.update(date.as_bytes());
    crc.update(serial_tail.as_bytes());
    ((crc.state() ^ XOR_MASK).wrapping_add(ROLL)) % MODULUS
}
