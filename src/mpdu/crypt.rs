//! Defines the layer-2 encryption headers.
//!
//! When the protected flag is set, the bytes after the variable MAC header
//! describe one of three ciphers. The variants differ in header size and in
//! how many trailing integrity bytes must be stripped from the frame body.

use crate::prelude::*;

/// The extended IV bit in the key ID octet. Clear for WEP, set for TKIP and
/// CCMP.
const EXT_IV: u8 = 0x20;

/// A WEP encryption header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wep {
    iv: [u8; 3],
    key_byte: u8,
}

impl FromBytes for Wep {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        let iv = bytes.read()?;
        let key_byte = bytes.read()?;
        Ok(Self { iv, key_byte })
    }
}

impl Wep {
    /// Returns the 24-bit initialization vector.
    pub fn iv(&self) -> [u8; 3] {
        self.iv
    }

    /// Returns the key index.
    pub fn key_id(&self) -> u8 {
        self.key_byte >> 6
    }
}

/// A TKIP encryption header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tkip {
    tsc1: u8,
    wep_seed: u8,
    tsc0: u8,
    key_byte: u8,
    tsc2: u8,
    tsc3: u8,
    tsc4: u8,
    tsc5: u8,
}

impl FromBytes for Tkip {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        let tsc1 = bytes.read()?;
        let wep_seed = bytes.read()?;
        let tsc0 = bytes.read()?;
        let key_byte = bytes.read()?;
        let tsc2 = bytes.read()?;
        let tsc3 = bytes.read()?;
        let tsc4 = bytes.read()?;
        let tsc5 = bytes.read()?;
        Ok(Self {
            tsc1,
            wep_seed,
            tsc0,
            key_byte,
            tsc2,
            tsc3,
            tsc4,
            tsc5,
        })
    }
}

impl Tkip {
    /// Returns the 48-bit TKIP sequence counter.
    pub fn tsc(&self) -> u64 {
        u64::from(self.tsc0)
            | u64::from(self.tsc1) << 8
            | u64::from(self.tsc2) << 16
            | u64::from(self.tsc3) << 24
            | u64::from(self.tsc4) << 32
            | u64::from(self.tsc5) << 40
    }

    /// Returns the WEP seed octet.
    pub fn wep_seed(&self) -> u8 {
        self.wep_seed
    }

    /// Returns the key index.
    pub fn key_id(&self) -> u8 {
        self.key_byte >> 6
    }
}

/// A CCMP encryption header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ccmp {
    pn0: u8,
    pn1: u8,
    key_byte: u8,
    pn2: u8,
    pn3: u8,
    pn4: u8,
    pn5: u8,
}

impl FromBytes for Ccmp {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        let pn0 = bytes.read()?;
        let pn1 = bytes.read()?;
        bytes.advance(1)?; // reserved
        let key_byte = bytes.read()?;
        let pn2 = bytes.read()?;
        let pn3 = bytes.read()?;
        let pn4 = bytes.read()?;
        let pn5 = bytes.read()?;
        Ok(Self {
            pn0,
            pn1,
            key_byte,
            pn2,
            pn3,
            pn4,
            pn5,
        })
    }
}

impl Ccmp {
    /// Returns the 48-bit packet number.
    pub fn pn(&self) -> u64 {
        u64::from(self.pn0)
            | u64::from(self.pn1) << 8
            | u64::from(self.pn2) << 16
            | u64::from(self.pn3) << 24
            | u64::from(self.pn4) << 32
            | u64::from(self.pn5) << 40
    }

    /// Returns the key index.
    pub fn key_id(&self) -> u8 {
        self.key_byte >> 6
    }
}

/// A decoded encryption header.
///
/// TKIP is the cipher branded as WPA; there is no separate variant for the
/// marketing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Crypt {
    Wep(Wep),
    Tkip(Tkip),
    Ccmp(Ccmp),
}

impl FromBytes for Crypt {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        // sniff the variant before consuming anything so that a failed
        // decode leaves the cursor where it was
        if bytes.remaining() < 4 {
            return Err(Error::MalformedCrypt);
        }
        let head = bytes.slice(4)?;
        if head[3] & EXT_IV == 0 {
            return Ok(Self::Wep(bytes.read()?));
        }
        bytes.slice(8)?;
        // TKIP derives byte 1 from TSC1
        if head[1] == (head[0] | 0x20) & 0x7f {
            Ok(Self::Tkip(bytes.read()?))
        } else {
            Ok(Self::Ccmp(bytes.read()?))
        }
    }
}

impl Crypt {
    /// Returns the size of the encryption header in bytes.
    pub fn header_len(&self) -> usize {
        match self {
            Self::Wep(_) => 4,
            Self::Tkip(_) | Self::Ccmp(_) => 8,
        }
    }

    /// Returns the number of integrity bytes at the end of the frame body.
    ///
    /// WEP carries a 4-byte ICV, TKIP an 8-byte MIC plus the 4-byte ICV,
    /// and CCMP an 8-byte MIC.
    pub fn trailer_len(&self) -> usize {
        match self {
            Self::Wep(_) => 4,
            Self::Tkip(_) => 12,
            Self::Ccmp(_) => 8,
        }
    }

    /// Returns the key index common to all variants.
    pub fn key_id(&self) -> u8 {
        match self {
            Self::Wep(wep) => wep.key_id(),
            Self::Tkip(tkip) => tkip.key_id(),
            Self::Ccmp(ccmp) => ccmp.key_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wep() {
        let crypt = Crypt::from_hex("11223340").unwrap();
        match crypt {
            Crypt::Wep(wep) => {
                assert_eq!(wep.iv(), [0x11, 0x22, 0x33]);
                assert_eq!(wep.key_id(), 1);
            }
            crypt => panic!("not WEP: {:?}", crypt),
        }
        assert_eq!(crypt.header_len(), 4);
        assert_eq!(crypt.trailer_len(), 4);
    }

    #[test]
    fn tkip() {
        // byte 1 is (TSC1 | 0x20) & 0x7f
        let crypt = Crypt::from_hex("0c2c01200a0b0c0d").unwrap();
        match crypt {
            Crypt::Tkip(tkip) => {
                assert_eq!(tkip.wep_seed(), 0x2c);
                assert_eq!(tkip.key_id(), 0);
                assert_eq!(tkip.tsc(), 0x0d0c_0b0a_0c01);
            }
            crypt => panic!("not TKIP: {:?}", crypt),
        }
        assert_eq!(crypt.trailer_len(), 12);
    }

    #[test]
    fn ccmp() {
        let crypt = Crypt::from_hex("0100002000000000").unwrap();
        match crypt {
            Crypt::Ccmp(ccmp) => {
                assert_eq!(ccmp.pn(), 1);
                assert_eq!(ccmp.key_id(), 0);
            }
            crypt => panic!("not CCMP: {:?}", crypt),
        }
        assert_eq!(crypt.header_len(), 8);
        assert_eq!(crypt.trailer_len(), 8);
    }

    #[test]
    fn ccmp_nonzero_reserved_byte() {
        // EXT-IV set and not the TKIP seed pattern is CCMP, whatever the
        // reserved byte holds
        let crypt = Crypt::from_hex("0102ff2000000000").unwrap();
        assert!(matches!(crypt, Crypt::Ccmp(_)));
    }

    #[test]
    fn short_header_is_malformed() {
        let result = Crypt::from_hex("010203");
        assert_eq!(result.unwrap_err(), Error::MalformedCrypt);
    }
}
