//! Defines the sequence, QoS, and HT control fields.

use crate::prelude::*;

/// The sequence control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqControl {
    frag_no: u8,
    seq_no: u16,
}

impl FromBytes for SeqControl {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        let bits: u16 = bytes.read()?;
        Ok(Self {
            frag_no: (bits & 0x000f) as u8,
            seq_no: bits >> 4,
        })
    }
}

impl SeqControl {
    /// Returns the fragment number of the MSDU.
    pub fn frag_no(&self) -> u8 {
        self.frag_no
    }

    /// Returns the sequence number of the MSDU.
    pub fn seq_no(&self) -> u16 {
        self.seq_no
    }
}

/// The acknowledgement policy of a QoS data frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckPolicy {
    /// Normal acknowledgement.
    Normal,
    /// No acknowledgement expected.
    NoAck,
    /// No explicit acknowledgement (PSMP/scheduled).
    NoExplicitAck,
    /// Block acknowledgement.
    BlockAck,
}

/// The QoS control field, present in QoS data subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QosControl {
    bits: u16,
}

impl FromBytes for QosControl {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        Ok(Self {
            bits: bytes.read()?,
        })
    }
}

impl QosControl {
    /// Returns the traffic identifier.
    pub fn tid(&self) -> u8 {
        (self.bits & 0x000f) as u8
    }

    /// Returns the end of service period bit.
    pub fn eosp(&self) -> bool {
        self.bits & 0x0010 != 0
    }

    /// Returns the acknowledgement policy.
    pub fn ack_policy(&self) -> AckPolicy {
        match (self.bits >> 5) & 0x03 {
            0 => AckPolicy::Normal,
            1 => AckPolicy::NoAck,
            2 => AckPolicy::NoExplicitAck,
            _ => AckPolicy::BlockAck,
        }
    }

    /// Whether the frame body is an A-MSDU.
    ///
    /// Decomposition of the aggregate is left to the caller.
    pub fn amsdu(&self) -> bool {
        self.bits & 0x0080 != 0
    }

    /// Returns the TXOP duration request or queue size octet.
    pub fn txop(&self) -> u8 {
        (self.bits >> 8) as u8
    }

    /// Returns the raw QoS control bits.
    pub const fn into_inner(self) -> u16 {
        self.bits
    }
}

impl_newtype! {
    /// The HT control field.
    ///
    /// Present when the order flag is set on a QoS data or management
    /// frame. The interior is not decoded, the raw word is kept.
    pub struct HtControl(pub u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_control() {
        // fragment 0, sequence 960
        let seq = SeqControl::from_hex("003c").unwrap();
        assert_eq!(seq.frag_no(), 0);
        assert_eq!(seq.seq_no(), 960);

        // fragment 2, sequence 1
        let seq = SeqControl::from_hex("1200").unwrap();
        assert_eq!(seq.frag_no(), 2);
        assert_eq!(seq.seq_no(), 1);
    }

    #[test]
    fn qos_control() {
        let qos = QosControl::from_hex("0000").unwrap();
        assert_eq!(qos.tid(), 0);
        assert!(!qos.eosp());
        assert_eq!(qos.ack_policy(), AckPolicy::Normal);
        assert!(!qos.amsdu());
        assert_eq!(qos.txop(), 0);

        // TID 5, no-ack, A-MSDU, TXOP 32
        let qos = QosControl::from_hex("a520").unwrap();
        assert_eq!(qos.tid(), 5);
        assert_eq!(qos.ack_policy(), AckPolicy::NoAck);
        assert!(qos.amsdu());
        assert_eq!(qos.txop(), 32);
    }
}
