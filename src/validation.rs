/// Validation tests for the checksum engine and key schedule.
///
/// These tests verify:
/// 1. **Reference vectors** - the engine matches published CRC-32/ISO-HDLC values
/// 2. **Determinism** - repeated calls yield identical results
/// 3. **Chunking equivalence** - incremental state matches the one-shot fold
/// 4. **Sensitivity** - single-bit flips change the checksum
/// 5. **End-to-end** - serial/date pairs map to their known reset codes
#[cfg(test)]
mod tests {
    use crate::crc32::{crc32, crc32_str, Crc32};
    use crate::masterkey::master_key;

    // ---------------------------------------------------------------
    // Reference vectors (cross-checked against zlib)
    // ---------------------------------------------------------------

    const VECTORS: &[(&[u8], u32)] = &[
        (b"", 0x0000_0000),
        (b"123456789", 0xCBF4_3926),
        (b"12263620", 0x7DBB_79C1),
        (b"hello", 0x3610_A686),
        (b"abc", 0x3524_41C2),
        (b"54033620", 0x1F09_6C7A),
        (b"1226", 0x6CF6_B0CE),
        (b"0", 0xF4DB_DF21),
        (b"\x00", 0xD202_EF8D),
        (b"master key", 0xB8BB_E0D9),
    ];

    #[test]
    fn reference_vectors() {
        for &(input, expected) in VECTORS {
            assert_eq!(
                crc32(input),
                expected,
                "crc32({:?}) mismatch",
                String::from_utf8_lossy(input)
            );
        }
    }

    #[test]
    fn determinism() {
        for &(input, _) in VECTORS {
            assert_eq!(crc32(input), crc32(input));
        }
    }

    #[test]
    fn string_entry_point_matches_byte_fold() {
        assert_eq!(crc32_str("12263620").unwrap(), crc32(b"12263620"));
        assert_eq!(crc32_str("master key").unwrap(), crc32(b"master key"));
    }

    // ---------------------------------------------------------------
    // Chunking: any partition of the input gives the same checksum
    // ---------------------------------------------------------------

    #[test]
    fn chunked_equals_one_shot() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1024).collect();
        let expected = crc32(&data);
        for chunk_size in [1, 2, 3, 7, 64, 1024] {
            let mut c = Crc32::new();
            for chunk in data.chunks(chunk_size) {
                c.update(chunk);
            }
            assert_eq!(c.finalize(), expected, "chunk size {chunk_size}");
        }
    }

    // ---------------------------------------------------------------
    // Sensitivity: flipping any sampled bit must change the output
    // ---------------------------------------------------------------

    #[test]
    fn single_bit_flips_change_checksum() {
        let base = b"12263620".to_vec();
        let expected = crc32(&base);
        for byte_idx in 0..base.len() {
            for bit in 0..8 {
                let mut flipped = base.clone();
                flipped[byte_idx] ^= 1 << bit;
                assert_ne!(
                    crc32(&flipped),
                    expected,
                    "flip of byte {byte_idx} bit {bit} went undetected"
                );
            }
        }
    }

    #[test]
    fn distinct_serials_give_distinct_keys() {
        // Not guaranteed in general (the key space is 100k), but these
        // particular pairs must differ.
        let a = master_key("54033620", "12", "26").unwrap();
        let b = master_key("54033621", "12", "26").unwrap();
        let c = master_key("54033620", "12", "27").unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    // ---------------------------------------------------------------
    // End-to-end reset codes
    // ---------------------------------------------------------------

    #[test]
    fn end_to_end_reset_codes() {
        let cases = [
            ("54033620", "12", "26", 11253),
            ("12345678", "01", "01", 43176),
            ("00000000", "12", "31", 1056),
            ("99999999", "06", "15", 55122),
            ("12263620", "03", "07", 98214),
        ];
        for (serial, month, day, expected) in cases {
            assert_eq!(
                master_key(serial, month, day).unwrap(),
                expected,
                "key for {serial} {month}/{day}"
            );
        }
    }
}
