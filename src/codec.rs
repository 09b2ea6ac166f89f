//! The WS2 obfuscation codec: a byte-wise 2-bit rotate.
//!
//! There is no header, key, or IV — every byte is transformed independently,
//! so `decode` and `encode` are mutual inverses over buffers of any length.

/// Rotate a single byte right by 2 bits.
#[inline]
pub fn ror2(byte: u8) -> u8 {
    ((byte >> 2) | (byte << 6)) & 0xFF
}

/// Rotate a single byte left by 2 bits.
#[inline]
pub fn rol2(byte: u8) -> u8 {
    ((byte << 2) | (byte >> 6)) & 0xFF
}

/// Decode (de-obfuscate) an entire buffer.
pub fn decode(data: &[u8]) -> Vec<u8> {
    data.iter().copied().map(ror2).collect()
}

/// Encode (obfuscate) an entire buffer.
pub fn encode(data: &[u8]) -> Vec<u8> {
    data.iter().copied().map(rol2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_rotate_is_involutive() {
        for b in 0u16..=255 {
            let b = b as u8;
            assert_eq!(rol2(ror2(b)), b);
            assert_eq!(ror2(rol2(b)), b);
        }
    }

    #[test]
    fn buffer_round_trips() {
        let data = b"The quick brown fox jumps over the lazy dog.".to_vec();
        assert_eq!(decode(&encode(&data)), data);
        assert_eq!(encode(&decode(&data)), data);
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(decode(&[]), Vec::<u8>::new());
        assert_eq!(encode(&[]), Vec::<u8>::new());
    }
}
