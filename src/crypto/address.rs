//! Base58check encoding
//!
//! Consumes the per-network version prefixes supplied by the chain
//! parameters; the prefix bytes decide which leading characters a rendered
//! address gets and which network it belongs to.

use super::hash_bytes;

/// Encode a payload under a version prefix with a 4-byte checksum appended
pub fn encode_base58check(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + 4);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    let checksum = hash_bytes(&data);
    data.extend_from_slice(&checksum.0[..4]);
    bs58::encode(data).into_string()
}

/// Decode a base58check string, splitting off `prefix_len` version bytes
///
/// Returns `None` on invalid base58, truncated input, or checksum mismatch.
pub fn decode_base58check(encoded: &str, prefix_len: usize) -> Option<(Vec<u8>, Vec<u8>)> {
    let decoded = bs58::decode(encoded).into_vec().ok()?;
    if decoded.len() < prefix_len + 4 {
        return None;
    }
    let (body, checksum) = decoded.split_at(decoded.len() - 4);
    let expected = hash_bytes(body);
    if checksum != &expected.0[..4] {
        return None;
    }
    Some((body[..prefix_len].to_vec(), body[prefix_len..].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let payload = [0x11u8; 20];
        let encoded = encode_base58check(&[55], &payload);
        let (prefix, decoded) = decode_base58check(&encoded, 1).unwrap();
        assert_eq!(prefix, vec![55]);
        assert_eq!(decoded, payload.to_vec());
    }

    #[test]
    fn test_different_prefixes_encode_differently() {
        let payload = [0x22u8; 20];
        let main = encode_base58check(&[55], &payload);
        let test = encode_base58check(&[88], &payload);
        assert_ne!(main, test);
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let encoded = encode_base58check(&[9], &[0x33u8; 20]);
        let mut chars: Vec<char> = encoded.chars().collect();
        let last = *chars.last().unwrap();
        *chars.last_mut().unwrap() = if last == '2' { '3' } else { '2' };
        let corrupted: String = chars.into_iter().collect();
        assert!(decode_base58check(&corrupted, 1).is_none());
    }

    #[test]
    fn test_four_byte_prefix() {
        let xpub_prefix = [0x04, 0x88, 0xB2, 0x1E];
        let payload = [0x44u8; 33];
        let encoded = encode_base58check(&xpub_prefix, &payload);
        let (prefix, decoded) = decode_base58check(&encoded, 4).unwrap();
        assert_eq!(prefix, xpub_prefix.to_vec());
        assert_eq!(decoded, payload.to_vec());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_base58check("not-base58-0OIl", 1).is_none());
        assert!(decode_base58check("", 1).is_none());
    }
}
