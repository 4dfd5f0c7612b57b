//! A parser for radiotap and IEEE 802.11 MPDU monitor-mode captures.
//!
//! A frame captured in monitor mode is two adjacent headers: a
//! [radiotap](http://www.radiotap.org/) pseudo-header prepended by the
//! capture driver describing the physical-layer conditions, then the 802.11
//! MAC frame itself. [`parse`](fn.parse.html) decodes both and returns a
//! [`Frame`](struct.Frame.html); the decoders are also usable on their own
//! through [`radiotap::parse`](radiotap/fn.parse.html) and
//! [`mpdu::parse`](mpdu/fn.parse.html).
//!
//! Both decoders are pure functions over a borrowed byte slice. They never
//! read past the buffer: a malformed length aborts the parse, while a field
//! that cannot be decoded is recorded on the returned record's error list
//! and decoding carries on where that is safe.

#[macro_use]
mod macros;

pub mod bytes;
pub mod dot11u;
pub mod error;
pub mod field;
pub mod mpdu;
pub mod radiotap;

mod hex;
mod prelude;
mod util;

pub use crate::error::{Error, Result};
pub use crate::mpdu::{MacAddr, Mpdu};
pub use crate::radiotap::Radiotap;

/// A fully parsed capture: the radiotap header and the MPDU behind it.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Frame {
    /// The capture metadata prepended by the driver.
    pub radiotap: Radiotap,
    /// The MAC frame.
    pub mpdu: Mpdu,
}

/// Parses a complete monitor-mode capture.
///
/// Decodes the radiotap header, then the MPDU that follows it. Whether the
/// MPDU carries a trailing FCS is taken from the radiotap flags field. When
/// the radiotap data padding flag is set, the MPDU start is aligned to a
/// 4-byte boundary within the capture.
///
/// # Errors
///
/// Fatal errors are a bad radiotap version, a radiotap length inconsistent
/// with the capture, and a capture too short to hold the smallest MPDU.
/// Field-level failures are recorded on the returned records instead.
pub fn parse(capture: &[u8]) -> Result<Frame> {
    let radiotap = radiotap::parse(capture)?;

    let mut start = radiotap.length();
    if radiotap.has_datapad() {
        start = (start + 3) & !3;
    }
    if start > capture.len() {
        return Err(Error::Truncated {
            context: "mpdu",
            required: start,
            available: capture.len(),
        });
    }

    let mpdu = mpdu::parse(&capture[start..], radiotap.has_fcs())?;
    Ok(Frame { radiotap, mpdu })
}

impl Frame {
    /// Returns the data rate in megabits per second.
    pub fn rate(&self) -> Option<f32> {
        self.radiotap.rate()
    }

    /// Returns the antenna signal in dBm.
    pub fn signal_dbm(&self) -> Option<i8> {
        self.radiotap.signal_dbm()
    }

    /// Returns the first address of the MAC frame, the receiver.
    pub fn addr1(&self) -> Option<MacAddr> {
        self.mpdu.addr1
    }

    /// Returns the second address of the MAC frame.
    pub fn addr2(&self) -> Option<MacAddr> {
        self.mpdu.addr2
    }

    /// Returns the third address of the MAC frame.
    pub fn addr3(&self) -> Option<MacAddr> {
        self.mpdu.addr3
    }

    /// Returns the fourth address of the MAC frame, present only on WDS
    /// data frames.
    pub fn addr4(&self) -> Option<MacAddr> {
        self.mpdu.addr4
    }
}
