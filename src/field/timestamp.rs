//! Defines the Timestamp field.

use std::time::Duration;

use crate::prelude::*;

impl_enum! {
    /// The time unit.
    pub enum Unit: u8 {
        Millis = 0,
        Micros = 1,
        Nanos = 2,
    }
}

impl_enum! {
    /// The sampling position.
    pub enum SamplingPosition: u8 {
        /// First MPDU bit/symbol.
        StartMpdu = 0,
        /// Signal acquisition at start of PLCP.
        PlcpSigAcq = 1,
        /// End of PPDU.
        EndPpdu = 2,
        /// End of MPDU.
        EndMpdu = 3,
        /// Unknown or vendor defined.
        Unknown = 15,
    }
}

impl_bitflags! {
    /// Flags describing the timestamp.
    pub struct Flags: u8 {
        /// 32-bit counter.
        const BIT32 = 0x01;
        /// Accuracy field is known.
        const ACCURACY = 0x02;
    }
}

/// The time the frame was transmitted or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    ts: u64,
    accuracy: u16,
    unit_position: u8,
    flags: Flags,
}

impl FromBytes for Timestamp {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        let ts = bytes.read()?;
        let accuracy = bytes.read()?;
        let unit_position = bytes.read()?;
        let flags = bytes.read()?;
        Ok(Self {
            ts,
            accuracy,
            unit_position,
            flags,
        })
    }
}

impl Unit {
    fn duration(&self, ts: u64) -> Duration {
        match self {
            Self::Millis => Duration::from_millis(ts),
            Self::Micros => Duration::from_micros(ts),
            Self::Nanos => Duration::from_nanos(ts),
        }
    }
}

impl Timestamp {
    /// Returns the raw timestamp value.
    pub fn ts(&self) -> u64 {
        self.ts
    }

    /// Returns the time unit of the timestamp.
    pub fn unit(&self) -> Option<Unit> {
        Unit::from_bits(self.unit_position & 0x0f)
    }

    /// Returns the timestamp as a duration since the device epoch.
    pub fn duration(&self) -> Option<Duration> {
        self.unit().map(|unit| unit.duration(self.ts))
    }

    /// Returns the accuracy of the timestamp as a duration.
    pub fn accuracy(&self) -> Option<Duration> {
        self.flags
            .contains(Flags::ACCURACY)
            .some(|| self.unit().map(|unit| unit.duration(self.accuracy.into())))
            .flatten()
    }

    /// Returns the sampling position of the timestamp.
    pub fn sampling_position(&self) -> Option<SamplingPosition> {
        SamplingPosition::from_bits(self.unit_position >> 4)
    }

    /// Returns the flags describing the timestamp.
    pub const fn flags(&self) -> Flags {
        self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let timestamp = Timestamp::from_hex("221100000000000034000103").unwrap();
        assert_eq!(timestamp.ts(), 0x1122);
        assert_eq!(timestamp.unit(), Some(Unit::Micros));
        assert_eq!(timestamp.sampling_position(), Some(SamplingPosition::StartMpdu));
        assert_eq!(timestamp.duration(), Some(Duration::from_micros(0x1122)));
        assert_eq!(timestamp.accuracy(), Some(Duration::from_micros(0x34)));
    }
}
