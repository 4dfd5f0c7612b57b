//! The 802.11 MPDU decoder.
//!
//! [`parse`](fn.parse.html) decodes the MAC header of a single frame: frame
//! control, duration, the addresses the type/subtype calls for, sequence and
//! QoS control, HT control, and the layer-2 encryption header. The caller
//! tells the decoder whether a trailing FCS is present, typically from the
//! radiotap flags field.

pub mod crypt;
pub mod fc;
pub mod qos;

use std::fmt;
use std::result;

use crate::prelude::*;

pub use self::crypt::Crypt;
pub use self::fc::{Duration, FrameControl, FrameType};
pub use self::qos::{HtControl, QosControl, SeqControl};

/// The smallest decodable frame: frame control, duration, and one address.
const MIN_SIZE: usize = 10;

/// A 48-bit MAC address.
///
/// Displays as six colon-separated lowercase hex pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr([u8; 6]);

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl FromBytes for MacAddr {
    fn from_bytes(bytes: &mut Bytes) -> Result<Self> {
        Ok(Self(bytes.read()?))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}

impl MacAddr {
    /// Returns the raw octets of the address.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

/// A field of the MPDU header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Field {
    FrameControl,
    Duration,
    Fcs,
    Addr1,
    Addr2,
    Addr3,
    SeqControl,
    Addr4,
    QosControl,
    HtControl,
    Crypt,
}

/// An error that occurred while decoding a single MPDU field.
///
/// These are accumulated on the [`Mpdu`](struct.Mpdu.html) record instead of
/// aborting the parse.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    field: Field,
    error: Error,
}

impl FieldError {
    /// The field that failed to decode.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The reason the field failed to decode.
    pub fn error(&self) -> &Error {
        &self.error
    }
}

/// A parsed 802.11 MAC frame.
///
/// Address fields hold the raw transmitted order; their roles (RA, TA, DA,
/// SA, BSSID) depend on the frame type and DS flags. For data frames:
/// neither DS flag means DA, SA, BSSID; to-DS means BSSID, SA, DA; from-DS
/// means DA, BSSID, SA; both mean RA, TA, DA with addr4 carrying the SA.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Mpdu {
    pub frame_control: FrameControl,
    pub duration: Duration,
    pub addr1: Option<MacAddr>,
    pub addr2: Option<MacAddr>,
    pub addr3: Option<MacAddr>,
    pub addr4: Option<MacAddr>,
    pub seq_control: Option<SeqControl>,
    pub qos: Option<QosControl>,
    pub ht_control: Option<HtControl>,
    pub crypt: Option<Crypt>,
    pub fcs: Option<u32>,
    size: usize,
    offset: usize,
    stripped: usize,
    present: Vec<Field>,
    errors: Vec<FieldError>,
}

fn read_into<T: FromBytes>(bytes: &mut Bytes, field: Field) -> result::Result<T, FieldError> {
    bytes.read().map_err(|error| FieldError { field, error })
}

impl Mpdu {
    /// Returns the total size of the frame in bytes, including any trailer.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of header bytes consumed from the front.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of trailer bytes consumed from the back: the
    /// encryption integrity bytes plus the FCS.
    pub fn stripped(&self) -> usize {
        self.stripped
    }

    /// Returns the fields that were decoded, in decode order.
    pub fn present(&self) -> &[Field] {
        &self.present
    }

    /// Returns the errors recorded for fields that failed to decode.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn push(&mut self, field: Field) {
        self.present.push(field);
    }

    /// Decodes everything after the duration field. The cursor is clamped
    /// so header fields can never run into the FCS.
    fn walk(&mut self, bytes: &mut Bytes) -> result::Result<(), FieldError> {
        let fc = self.frame_control;

        match fc.frame_type() {
            FrameType::Management => {
                self.addr1 = Some(read_into(bytes, Field::Addr1)?);
                self.push(Field::Addr1);
                self.addr2 = Some(read_into(bytes, Field::Addr2)?);
                self.push(Field::Addr2);
                self.addr3 = Some(read_into(bytes, Field::Addr3)?);
                self.push(Field::Addr3);
                self.seq_control = Some(read_into(bytes, Field::SeqControl)?);
                self.push(Field::SeqControl);
            }
            FrameType::Control => {
                self.addr1 = Some(read_into(bytes, Field::Addr1)?);
                self.push(Field::Addr1);
                match fc.subtype() {
                    fc::ctrl::CTS | fc::ctrl::ACK => {}
                    fc::ctrl::RTS
                    | fc::ctrl::PS_POLL
                    | fc::ctrl::BLOCK_ACK_REQ
                    | fc::ctrl::BLOCK_ACK
                    | fc::ctrl::CF_END
                    | fc::ctrl::CF_END_ACK => {
                        self.addr2 = Some(read_into(bytes, Field::Addr2)?);
                        self.push(Field::Addr2);
                    }
                    fc::ctrl::WRAPPER => {
                        // the carried frame is not decoded
                        return Err(FieldError {
                            field: Field::FrameControl,
                            error: Error::Unsupported("ctrl-wrapper"),
                        });
                    }
                    _ => {}
                }
            }
            FrameType::Data => {
                self.addr1 = Some(read_into(bytes, Field::Addr1)?);
                self.push(Field::Addr1);
                self.addr2 = Some(read_into(bytes, Field::Addr2)?);
                self.push(Field::Addr2);
                self.addr3 = Some(read_into(bytes, Field::Addr3)?);
                self.push(Field::Addr3);
                self.seq_control = Some(read_into(bytes, Field::SeqControl)?);
                self.push(Field::SeqControl);
                if fc.has_addr4() {
                    self.addr4 = Some(read_into(bytes, Field::Addr4)?);
                    self.push(Field::Addr4);
                }
                if fc.is_qos_data() {
                    self.qos = Some(read_into(bytes, Field::QosControl)?);
                    self.push(Field::QosControl);
                }
            }
            FrameType::Reserved => return Ok(()),
        }

        if fc.flags().contains(fc::Flags::ORDER)
            && !matches!(fc.frame_type(), FrameType::Control)
        {
            self.ht_control = Some(read_into(bytes, Field::HtControl)?);
            self.push(Field::HtControl);
        }

        if fc.flags().contains(fc::Flags::PROTECTED) {
            let crypt: Crypt = read_into(bytes, Field::Crypt)?;
            if bytes.remaining() < crypt.trailer_len() {
                return Err(FieldError {
                    field: Field::Crypt,
                    error: Error::MalformedCrypt,
                });
            }
            self.stripped += crypt.trailer_len();
            self.crypt = Some(crypt);
            self.push(Field::Crypt);
        }

        Ok(())
    }
}

/// Parses an MPDU.
///
/// The buffer starts at the first byte of the MAC frame, typically
/// `capture[radiotap.length()..]`. `has_fcs` says whether the last four
/// bytes are a frame check sequence, which monitor-mode drivers advertise in
/// the radiotap flags field.
///
/// # Errors
///
/// Only a buffer too short to hold the frame control, duration, and first
/// address is fatal. Every later failure is recorded on
/// [`Mpdu::errors`](struct.Mpdu.html#method.errors), decoding of subsequent
/// header fields stops, and the partial record is returned.
pub fn parse(bytes: &[u8], has_fcs: bool) -> Result<Mpdu> {
    if bytes.len() < MIN_SIZE {
        return Err(Error::Truncated {
            context: "framectrl",
            required: MIN_SIZE,
            available: bytes.len(),
        });
    }

    let end = if has_fcs {
        bytes.len() - 4
    } else {
        bytes.len()
    };
    let mut cursor = Bytes::new(&bytes[..end]);

    let frame_control = cursor.read().context("framectrl")?;
    let duration = cursor.read().context("duration")?;

    let mut mpdu = Mpdu {
        frame_control,
        duration,
        addr1: None,
        addr2: None,
        addr3: None,
        addr4: None,
        seq_control: None,
        qos: None,
        ht_control: None,
        crypt: None,
        fcs: None,
        size: bytes.len(),
        offset: 0,
        stripped: 0,
        present: vec![Field::FrameControl, Field::Duration],
        errors: Vec::new(),
    };

    if has_fcs {
        let len = bytes.len();
        mpdu.fcs = Some(u32::from_le_bytes([
            bytes[len - 4],
            bytes[len - 3],
            bytes[len - 2],
            bytes[len - 1],
        ]));
        mpdu.stripped = 4;
        mpdu.push(Field::Fcs);
    }

    if let Err(error) = mpdu.walk(&mut cursor) {
        mpdu.errors.push(error);
    }
    mpdu.offset = cursor.pos();

    Ok(mpdu)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> MacAddr {
        let mut octets = [0; 6];
        for (i, part) in s.split(':').enumerate() {
            octets[i] = u8::from_str_radix(part, 16).unwrap();
        }
        MacAddr(octets)
    }

    #[test]
    fn mac_addr_display() {
        let mac = MacAddr([0x04, 0xa1, 0x51, 0xd0, 0xdc, 0x0f]);
        assert_eq!(mac.to_string(), "04:a1:51:d0:dc:0f");
    }

    #[test]
    fn management_beacon() {
        // beacon: broadcast RA, seq 100
        let mut frame = hex::decode(
            "80000000ffffffffffffb034956e3002b034956e30024006",
        )
        .unwrap();
        frame.extend_from_slice(&[0; 32]);

        let mpdu = parse(&frame, false).unwrap();
        assert_eq!(mpdu.frame_control.frame_type(), FrameType::Management);
        assert_eq!(mpdu.frame_control.subtype(), 8);
        assert_eq!(mpdu.addr1, Some(addr("ff:ff:ff:ff:ff:ff")));
        assert_eq!(mpdu.addr2, Some(addr("b0:34:95:6e:30:02")));
        assert_eq!(mpdu.addr3, Some(addr("b0:34:95:6e:30:02")));
        assert_eq!(mpdu.addr4, None);
        assert_eq!(mpdu.seq_control.unwrap().seq_no(), 100);
        assert_eq!(mpdu.offset(), 24);
        assert_eq!(mpdu.stripped(), 0);
        assert!(mpdu.errors().is_empty());
    }

    #[test]
    fn cts_has_one_address() {
        let frame = hex::decode("c4007a01acb57d8d3b30").unwrap();
        let mpdu = parse(&frame, false).unwrap();
        assert_eq!(mpdu.frame_control.frame_type(), FrameType::Control);
        assert_eq!(mpdu.frame_control.subtype(), fc::ctrl::CTS);
        assert_eq!(mpdu.duration, Duration::Vcs(378));
        assert_eq!(mpdu.addr1, Some(addr("ac:b5:7d:8d:3b:30")));
        assert_eq!(mpdu.addr2, None);
        assert_eq!(mpdu.offset(), 10);
    }

    #[test]
    fn ps_poll_duration_is_aid() {
        let frame =
            hex::decode("a40101c0b034956e3002acb57d8d3b30").unwrap();
        let mpdu = parse(&frame, false).unwrap();
        assert_eq!(mpdu.frame_control.subtype(), fc::ctrl::PS_POLL);
        assert_eq!(mpdu.duration, Duration::Aid(1));
        assert_eq!(mpdu.addr1, Some(addr("b0:34:95:6e:30:02")));
        assert_eq!(mpdu.addr2, Some(addr("ac:b5:7d:8d:3b:30")));
    }

    #[test]
    fn wds_data_has_four_addresses() {
        let mut frame = hex::decode(
            "0803000004a151d0dc0fb034956e30023c46d87e0edd0010010203040506",
        )
        .unwrap();
        frame.extend_from_slice(&[0; 16]);

        let mpdu = parse(&frame, false).unwrap();
        assert!(mpdu.frame_control.has_addr4());
        assert_eq!(mpdu.addr4, Some(addr("01:02:03:04:05:06")));
        assert_eq!(mpdu.offset(), 30);
        assert_eq!(
            mpdu.present(),
            [
                Field::FrameControl,
                Field::Duration,
                Field::Addr1,
                Field::Addr2,
                Field::Addr3,
                Field::SeqControl,
                Field::Addr4,
            ]
        );
    }

    #[test]
    fn truncated_frame_control_is_fatal() {
        let frame = [0x88, 0x41, 0x2c];
        assert_eq!(
            parse(&frame, false).unwrap_err(),
            Error::Truncated {
                context: "framectrl",
                required: MIN_SIZE,
                available: 3
            }
        );
    }

    #[test]
    fn truncated_address_is_recorded() {
        // data frame cut off inside addr3
        let frame =
            hex::decode("08010000 04a151d0dc0f b034956e3002 04a151".replace(' ', ""))
                .unwrap();
        let mpdu = parse(&frame, false).unwrap();
        assert_eq!(mpdu.addr1, Some(addr("04:a1:51:d0:dc:0f")));
        assert_eq!(mpdu.addr2, Some(addr("b0:34:95:6e:30:02")));
        assert_eq!(mpdu.addr3, None);
        assert_eq!(mpdu.offset(), 16);
        assert_eq!(mpdu.errors().len(), 1);
        assert_eq!(mpdu.errors()[0].field(), Field::Addr3);
        assert!(mpdu.offset() + mpdu.stripped() <= mpdu.size());
    }

    #[test]
    fn ctrl_wrapper_is_unsupported() {
        let mut frame = hex::decode("74000000acb57d8d3b30").unwrap();
        frame.extend_from_slice(&[0; 8]);
        let mpdu = parse(&frame, false).unwrap();
        assert_eq!(mpdu.addr1, Some(addr("ac:b5:7d:8d:3b:30")));
        assert_eq!(mpdu.errors().len(), 1);
        assert_eq!(
            *mpdu.errors()[0].error(),
            Error::Unsupported("ctrl-wrapper")
        );
    }

    #[test]
    fn protected_without_room_for_header() {
        // protected data frame with fewer than 4 bytes after the MAC header
        let mut frame = hex::decode(
            "08410000 04a151d0dc0f b034956e3002 04a151d0dc0f 003c".replace(' ', ""),
        )
        .unwrap();
        frame.extend_from_slice(&[0; 2]);
        let mpdu = parse(&frame, false).unwrap();
        assert_eq!(mpdu.errors().len(), 1);
        assert_eq!(mpdu.errors()[0].field(), Field::Crypt);
        assert_eq!(*mpdu.errors()[0].error(), Error::MalformedCrypt);
        assert_eq!(mpdu.crypt, None);
        assert_eq!(mpdu.offset(), 24);
        assert_eq!(mpdu.stripped(), 0);
    }

    #[test]
    fn protected_without_room_for_trailer() {
        // protected data frame whose body is smaller than the CCMP MIC
        let mut frame = hex::decode(
            "08410000 04a151d0dc0f b034956e3002 04a151d0dc0f 0030 0100002000000000"
                .replace(' ', ""),
        )
        .unwrap();
        frame.extend_from_slice(&[0; 4]);
        let mpdu = parse(&frame, false).unwrap();
        assert_eq!(mpdu.errors().len(), 1);
        assert_eq!(*mpdu.errors()[0].error(), Error::MalformedCrypt);
        assert_eq!(mpdu.crypt, None);
        assert!(mpdu.offset() + mpdu.stripped() <= mpdu.size());
    }
}
