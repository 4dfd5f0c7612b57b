#![cfg(test)]

use crate::bytes::{Bytes, FromBytes};
use crate::Result;

pub trait FromHex: FromBytes {
    /// Construct a type from a hex string of bytes.
    fn from_hex(s: &str) -> Result<Self> {
        let b = hex::decode(s).unwrap();
        Self::from_bytes(&mut Bytes::new(&b))
    }
}

impl<T> FromHex for T where T: FromBytes {}
