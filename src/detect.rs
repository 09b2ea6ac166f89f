//! Auto-detector: decide whether a buffer is obfuscated, with no header
//! signal, by scoring how many opcodes a purely syntactic walk can validate.

use crate::codec;
use crate::opcodes::{self, ArgType};
use crate::types::Encryption;

/// Walk up to `limit` instructions, skipping argument bytes using only the
/// signature's static widths (never full decoding). Stops and returns the
/// accumulated score on the first unknown opcode, on EOF, or on a
/// `CountedArray` argument (whose variable length this walker cannot skip
/// with confidence).
fn check_validity(data: &[u8], limit: usize) -> usize {
    let mut offset = 0usize;
    let mut valid = 0usize;
    let mut checked = 0usize;

    while checked < limit {
        if offset >= data.len() {
            break;
        }
        let opcode = data[offset];
        offset += 1;

        let signature = match opcodes::signature(opcode) {
            Some(sig) => sig,
            None => return valid,
        };

        valid += 1;
        checked += 1;

        for arg in signature {
            match arg {
                ArgType::U8 => offset += 1,
                ArgType::U16 => offset += 2,
                ArgType::U32 | ArgType::F32 => offset += 4,
                ArgType::Str16 => {
                    while offset + 1 < data.len() {
                        if data[offset] == 0 && data[offset + 1] == 0 {
                            offset += 2;
                            break;
                        }
                        offset += 2;
                    }
                }
                ArgType::Empty => {}
                ArgType::CountedArray(_) => return valid,
            }
            if offset > data.len() {
                return valid;
            }
        }
    }
    valid
}

/// Decide whether `data` is obfuscated, escalating the sample size when
/// plain and decoded scores tie.
pub fn detect(data: &[u8]) -> Encryption {
    if data.is_empty() {
        return Encryption::Decrypted;
    }

    let decoded_sample = codec::decode(&data[..data.len().min(2000)]);

    let mut score_plain = check_validity(data, 20);
    let mut score_decoded = check_validity(&decoded_sample, 20);

    if score_plain == score_decoded && score_plain > 0 {
        score_plain = check_validity(data, 100);
        score_decoded = check_validity(&decoded_sample, 100);
    }

    if score_plain == score_decoded && score_plain > 0 {
        score_plain = check_validity(data, 500);
        let decoded_large = codec::decode(&data[..data.len().min(10_000)]);
        score_decoded = check_validity(&decoded_large, 500);
    }

    if score_decoded > score_plain {
        Encryption::Encrypted
    } else {
        Encryption::Decrypted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_decrypted() {
        assert_eq!(detect(&[]), Encryption::Decrypted);
    }

    #[test]
    fn plain_nops_detect_as_decrypted() {
        // opcode 0x13 takes no arguments and decodes (ror2) to 0xC4, which
        // the table does not recognise, so plaintext should win decisively.
        let data = vec![0x13u8; 40];
        assert_eq!(detect(&data), Encryption::Decrypted);
    }

    #[test]
    fn encoded_nops_detect_as_encrypted() {
        let plain = vec![0x13u8; 40];
        let obfuscated = codec::encode(&plain);
        assert_eq!(detect(&obfuscated), Encryption::Encrypted);
    }
}
