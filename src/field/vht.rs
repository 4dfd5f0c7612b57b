//! Defines the VHT field.

use crate::field::Fec;
use crate::prelude::*;

impl_bitflags! {
    /// Indicates what VHT information is known.
    pub struct Known: u16 {
        /// The space-time block coding is known.
        const STBC = 0x0001;
        /// The TXOP_PS_NOT_ALLOWED is known.
        const TXOP_PS_NA = 0x0002;
        /// The guard interval is known.
        const GI = 0x0004;
        /// The short GI NSYM disambiguation is known.
        const SGI_NSYM_DIS = 0x0008;
        /// The LDPC extra OFDM symbol is known.
        const LDPC_EXTRA_OFDM_SYM = 0x0010;
        /// The beamformed information is known.
        const BEAMFORMED = 0x0020;
        /// The bandwidth is known.
        const BANDWIDTH = 0x0040;
        /// The group ID is known.
        const GROUP_ID = 0x0080;
        /// The partial AID is known.
        const PARTIAL_AID = 0x0100;
    }
}

impl_bitflags! {
    /// Flags describing the VHT information.
    pub struct Flags: u8 {
        /// Encodes the space-time block coding.
        const STBC = 0x01;
        /// Encodes whether STAs may not doze during TXOP.
        const TXOP_PS_NA = 0x02;
        /// Encodes the guard interval.
        const SGI = 0x04;
        /// Encodes the short GI NSYM disambiguation.
        const SGI_NSYM_M10_9 = 0x08;
        /// Encodes the LDPC extra OFDM symbol.
        const LDPC_EXTRA_OFDM_SYM = 0x10;
        /// Encodes whether this frame was beamformed.
        const BEAMFORMED = 0x20;
    }
}

/// A VHT user.
///
/// The VHT field encodes the MCS and NSS for up to four users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    /// The 802.11ac MCS index.
    index: u8,
    /// The number of spatial streams (range 1 - 8).
    nss: u8,
    /// The FEC type.
    fec: Fec,
}

impl User {
    /// Returns the 802.11ac MCS index.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Returns the number of spatial streams.
    pub fn nss(&self) -> u8 {
        self.nss
    }

    /// Returns the FEC type.
    pub fn fec(&self) -> Fec {
        self.fec
    }
}

/// The VHT information.
///
/// The IEEE 802.11ac data rate index.
///
/// Other rate fields: [`Rate`](../struct.Rate.html),
/// [`Mcs`](../mcs/struct.Mcs.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vht {
    /// Indicates which information is known.
    known: Known,
    /// Contains various encoded information.
    flags: Flags,
    /// Encodes the bandwidth.
    bandwidth: u8,
    /// Encodes the MCS and NSS for up to four users.
    mcs_nss: [u8; 4],
    /// Encodes the FEC for up to four users.
    coding: u8,
    /// The group ID of the frame.
    group_id: u8,
    /// A non-unique identifier of a STA.
    partial_aid: u16,
}

impl FromBytes for Vht {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        let known = bytes.read()?;
        let flags = bytes.read()?;
        let bandwidth = bytes.read()?;
        let mcs_nss = bytes.read()?;
        let coding = bytes.read()?;
        let group_id = bytes.read()?;
        let partial_aid = bytes.read()?;
        Ok(Self {
            known,
            flags,
            bandwidth,
            mcs_nss,
            coding,
            group_id,
            partial_aid,
        })
    }
}

impl Vht {
    /// Whether all spatial streams of all users have STBC.
    pub fn stbc(&self) -> Option<bool> {
        self.known
            .contains(Known::STBC)
            .some(|| self.flags.contains(Flags::STBC))
    }

    /// Whether STAs may not doze during TXOP.
    pub fn txop_ps_na(&self) -> Option<bool> {
        self.known
            .contains(Known::TXOP_PS_NA)
            .some(|| self.flags.contains(Flags::TXOP_PS_NA))
    }

    /// Whether the frame used a short guard interval.
    pub fn sgi(&self) -> Option<bool> {
        self.known
            .contains(Known::GI)
            .some(|| self.flags.contains(Flags::SGI))
    }

    /// Whether the frame was beamformed.
    pub fn beamformed(&self) -> Option<bool> {
        self.known
            .contains(Known::BEAMFORMED)
            .some(|| self.flags.contains(Flags::BEAMFORMED))
    }

    /// Returns the bandwidth in MHz.
    ///
    /// Sideband encodings collapse to the bandwidth of the whole channel
    /// actually in use.
    pub fn bandwidth(&self) -> Option<u8> {
        self.known.contains(Known::BANDWIDTH).some(|| ())?;
        match self.bandwidth & 0x1f {
            0 => Some(20),
            1..=3 => Some(40),
            4..=10 => Some(80),
            11..=25 => Some(160),
            _ => None,
        }
    }

    /// Returns the group ID of the frame.
    ///
    /// Zero for a frame sent to an AP, 63 for other directed frames.
    pub fn group_id(&self) -> Option<u8> {
        self.known.contains(Known::GROUP_ID).some(|| self.group_id)
    }

    /// Returns the partial AID.
    pub fn partial_aid(&self) -> Option<u16> {
        self.known
            .contains(Known::PARTIAL_AID)
            .some(|| self.partial_aid)
    }

    /// Returns the users in this frame.
    ///
    /// A user slot with zero spatial streams is not in use and is returned
    /// as `None`.
    pub fn users(&self) -> [Option<User>; 4] {
        let mut users = [None; 4];
        for (i, user) in users.iter_mut().enumerate() {
            let nss = self.mcs_nss[i] & 0x0f;
            if nss == 0 {
                continue;
            }
            *user = Some(User {
                index: self.mcs_nss[i] >> 4,
                nss,
                fec: Fec::from_bool(self.coding & (1 << i) != 0),
            });
        }
        users
    }

    /// Returns the raw known information.
    pub const fn known(&self) -> Known {
        self.known
    }

    /// Returns the raw flags.
    pub const fn flags(&self) -> Flags {
        self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        // known: GI | BANDWIDTH | GROUP_ID, flags: SGI, 80 MHz, one user
        // with MCS 7 and 2 spatial streams, LDPC
        let vht = Vht::from_hex("c400040472000000013f0000").unwrap();
        assert_eq!(vht.sgi(), Some(true));
        assert_eq!(vht.bandwidth(), Some(80));
        assert_eq!(vht.group_id(), Some(63));
        assert_eq!(vht.partial_aid(), None);
        assert_eq!(vht.stbc(), None);

        let users = vht.users();
        assert_eq!(
            users[0],
            Some(User {
                index: 7,
                nss: 2,
                fec: Fec::Ldpc
            })
        );
        assert_eq!(users[1], None);
    }
}
