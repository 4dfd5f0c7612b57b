//! Defines the frame control and duration fields.

use crate::prelude::*;

/// The type of an 802.11 frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    Management,
    Control,
    Data,
    Reserved,
}

impl FrameType {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Management,
            1 => Self::Control,
            2 => Self::Data,
            _ => Self::Reserved,
        }
    }
}

/// Control frame subtypes referenced by the address-shape selection.
pub mod ctrl {
    pub const WRAPPER: u8 = 7;
    pub const BLOCK_ACK_REQ: u8 = 8;
    pub const BLOCK_ACK: u8 = 9;
    pub const PS_POLL: u8 = 10;
    pub const RTS: u8 = 11;
    pub const CTS: u8 = 12;
    pub const ACK: u8 = 13;
    pub const CF_END: u8 = 14;
    pub const CF_END_ACK: u8 = 15;
}

impl_bitflags! {
    /// Flags from the frame control field.
    pub struct Flags: u8 {
        /// The frame is headed to the distribution system.
        const TO_DS = 0x01;
        /// The frame is leaving the distribution system.
        const FROM_DS = 0x02;
        /// More fragments of the MSDU follow.
        const MORE_FRAG = 0x04;
        /// The frame is a retransmission.
        const RETRY = 0x08;
        /// The STA will be in power-save mode after this frame.
        const PWR_MGMT = 0x10;
        /// The AP has more frames buffered for the STA.
        const MORE_DATA = 0x20;
        /// The frame body is encrypted.
        const PROTECTED = 0x40;
        /// Frames are strictly ordered, or an HT control field is present.
        const ORDER = 0x80;
    }
}

/// The first two bytes of the MAC header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameControl {
    version: u8,
    frame_type: FrameType,
    subtype: u8,
    flags: Flags,
}

impl FromBytes for FrameControl {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        let b: u8 = bytes.read()?;
        let flags = bytes.read()?;
        Ok(Self {
            version: b & 0x03,
            frame_type: FrameType::from_bits(b >> 2),
            subtype: b >> 4,
            flags,
        })
    }
}

impl FrameControl {
    /// Returns the protocol version, zero for every published standard.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the frame type.
    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    /// Returns the frame subtype.
    pub fn subtype(&self) -> u8 {
        self.subtype
    }

    /// Returns the frame control flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether this is a QoS data frame, which carries a QoS control field.
    pub fn is_qos_data(&self) -> bool {
        self.frame_type == FrameType::Data && self.subtype & 0x08 != 0
    }

    /// Whether the frame carries a fourth address (WDS, both DS flags set).
    pub fn has_addr4(&self) -> bool {
        self.frame_type == FrameType::Data
            && self.flags.contains(Flags::TO_DS | Flags::FROM_DS)
    }
}

/// The duration/ID field.
///
/// The interpretation of the 16-bit word depends on its high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duration {
    /// Virtual carrier sense duration in microseconds.
    Vcs(u16),
    /// The fixed value transmitted during the contention-free period.
    Cfp,
    /// The association ID of the transmitting STA (PS-Poll frames).
    Aid(u16),
    /// A reserved encoding, kept raw.
    Reserved(u16),
}

impl Duration {
    fn from_bits(bits: u16) -> Self {
        if bits & 0x8000 == 0 {
            Self::Vcs(bits & 0x7fff)
        } else if bits >> 14 == 0b10 {
            Self::Cfp
        } else {
            match bits & 0x3fff {
                aid @ 1..=2007 => Self::Aid(aid),
                _ => Self::Reserved(bits),
            }
        }
    }
}

impl FromBytes for Duration {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        Ok(Self::from_bits(bytes.read()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qos_data_to_ds() {
        let fc = FrameControl::from_hex("8841").unwrap();
        assert_eq!(fc.version(), 0);
        assert_eq!(fc.frame_type(), FrameType::Data);
        assert_eq!(fc.subtype(), 8);
        assert_eq!(fc.flags(), Flags::PROTECTED | Flags::TO_DS);
        assert!(fc.is_qos_data());
        assert!(!fc.has_addr4());
    }

    #[test]
    fn rts() {
        let fc = FrameControl::from_hex("b400").unwrap();
        assert_eq!(fc.frame_type(), FrameType::Control);
        assert_eq!(fc.subtype(), ctrl::RTS);
        assert!(!fc.is_qos_data());
    }

    #[test]
    fn wds_data() {
        let fc = FrameControl::from_hex("0803").unwrap();
        assert_eq!(fc.frame_type(), FrameType::Data);
        assert_eq!(fc.subtype(), 0);
        assert!(fc.has_addr4());
    }

    #[test]
    fn duration_taggings() {
        let duration = Duration::from_hex("2c00").unwrap();
        assert_eq!(duration, Duration::Vcs(44));

        let duration = Duration::from_hex("0080").unwrap();
        assert_eq!(duration, Duration::Cfp);

        let duration = Duration::from_hex("01c0").unwrap();
        assert_eq!(duration, Duration::Aid(1));

        // AID above 2007 is reserved
        let duration = Duration::from_hex("ffff").unwrap();
        assert_eq!(duration, Duration::Reserved(0xffff));
    }
}
