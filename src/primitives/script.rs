//! Minimal script byte-builder
//!
//! Only what the genesis coinbase needs: small integer pushes, short data
//! pushes, and OP_CHECKSIG. The byte layout is consensus-critical; changing
//! a single encoding rule changes every genesis hash downstream.

use serde::{Deserialize, Serialize};

/// OP_CHECKSIG opcode
pub const OP_CHECKSIG: u8 = 0xac;

/// Largest direct-length data push (larger pushes need OP_PUSHDATA opcodes)
const MAX_DIRECT_PUSH: usize = 75;

/// A script under construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Push an integer using minimal little-endian number encoding
    ///
    /// The significant bytes are emitted low-to-high; a zero byte is appended
    /// when the top byte would otherwise read as a sign bit.
    pub fn push_int(mut self, value: i64) -> Self {
        if value == 0 {
            self.0.push(0x00);
            return self;
        }
        let negative = value < 0;
        let mut n = value.unsigned_abs();
        let mut bytes = Vec::new();
        while n > 0 {
            bytes.push((n & 0xff) as u8);
            n >>= 8;
        }
        if bytes.last().copied().unwrap_or(0) & 0x80 != 0 {
            bytes.push(if negative { 0x80 } else { 0x00 });
        } else if negative {
            let last = bytes.last_mut().unwrap();
            *last |= 0x80;
        }
        self.0.push(bytes.len() as u8);
        self.0.extend_from_slice(&bytes);
        self
    }

    /// Push a short data blob with a direct one-byte length prefix
    pub fn push_data(mut self, data: &[u8]) -> Self {
        debug_assert!(data.len() <= MAX_DIRECT_PUSH);
        self.0.push(data.len() as u8);
        self.0.extend_from_slice(data);
        self
    }

    /// Append a raw opcode
    pub fn push_opcode(mut self, op: u8) -> Self {
        self.0.push(op);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_int_small() {
        let script = Script::new().push_int(4);
        assert_eq!(script.as_bytes(), &[0x01, 0x04]);
    }

    #[test]
    fn test_push_int_zero() {
        let script = Script::new().push_int(0);
        assert_eq!(script.as_bytes(), &[0x00]);
    }

    #[test]
    fn test_push_int_difficulty_constant() {
        // 486604799 == 0x1d00ffff, the value embedded in the coinbase script
        let script = Script::new().push_int(486604799);
        assert_eq!(script.as_bytes(), &[0x04, 0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_int_sign_padding() {
        // 0x80 would read as negative without a trailing zero byte
        let script = Script::new().push_int(128);
        assert_eq!(script.as_bytes(), &[0x02, 0x80, 0x00]);
    }

    #[test]
    fn test_push_int_negative() {
        let script = Script::new().push_int(-5);
        assert_eq!(script.as_bytes(), &[0x01, 0x85]);
    }

    #[test]
    fn test_push_data_length_prefix() {
        let script = Script::new().push_data(b"abc");
        assert_eq!(script.as_bytes(), &[0x03, b'a', b'b', b'c']);
    }

    #[test]
    fn test_pay_to_pubkey_shape() {
        let pubkey = [0x04u8; 65];
        let script = Script::new().push_data(&pubkey).push_opcode(OP_CHECKSIG);
        assert_eq!(script.len(), 1 + 65 + 1);
        assert_eq!(script.as_bytes()[0], 65);
        assert_eq!(*script.as_bytes().last().unwrap(), OP_CHECKSIG);
    }
}
