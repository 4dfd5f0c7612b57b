//! The radiotap pseudo-header decoder.
//!
//! Captures taken in monitor mode start with a radiotap header describing
//! the physical-layer conditions of the capture. [`parse`](fn.parse.html)
//! decodes it into a [`Radiotap`](struct.Radiotap.html); the MPDU follows at
//! [`Radiotap::length()`](struct.Radiotap.html#method.length) bytes into the
//! buffer.

use crate::field::{self, Kind, Type, VendorNamespace};
use crate::prelude::*;

/// The radiotap header version.
const VERSION: u8 = 0;

/// The minimum length of a radiotap header.
const HEADER_SIZE: usize = 8;

/// The presence bit representing the radiotap namespace.
const PRESENCE_DEFAULT_NAMESPACE: u32 = 29;

/// The presence bit representing a vendor namespace.
const PRESENCE_VENDOR_NAMESPACE: u32 = 30;

/// The presence bit representing another presence word follows.
const PRESENCE_EXT: u32 = 31;

/// A radiotap namespace.
#[derive(Debug, Clone)]
pub enum Namespace {
    /// The default radiotap namespace.
    Default,
    /// A custom vendor namespace.
    Vendor(VendorNamespace),
}

/// A generic field yielded by the radiotap iterator.
#[derive(Debug, Clone)]
pub struct Field {
    /// This field's namespace.
    namespace: Namespace,
    /// The presence bit for this field.
    bit: u32,
}

/// An error that occurred while decoding a single radiotap field.
///
/// These are accumulated on the [`Radiotap`](struct.Radiotap.html) record
/// instead of aborting the parse.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    field: Option<Type>,
    error: Error,
}

impl FieldError {
    /// The field that failed to decode, if its presence bit had a catalog
    /// entry.
    pub fn field(&self) -> Option<Type> {
        self.field
    }

    /// The reason the field failed to decode.
    pub fn error(&self) -> &Error {
        &self.error
    }
}

/// An iterator over a radiotap capture.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// The raw bytes in this capture, clamped to the header length.
    bytes: Bytes<'a>,
    /// The expected length of the entire header.
    length: usize,
    /// The presence words in this capture.
    presence: Vec<u32>,
    /// The current bit position in the presence words.
    position: u32,
    /// The current namespace.
    namespace: Namespace,
}

/// A parsed radiotap capture.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Radiotap {
    length: usize,
    pub tsft: Option<field::Tsft>,
    pub flags: Option<field::Flags>,
    pub rate: Option<field::Rate>,
    pub channel: Option<field::Channel>,
    pub fhss: Option<field::Fhss>,
    pub antenna_signal: Option<field::AntennaSignal>,
    pub antenna_noise: Option<field::AntennaNoise>,
    pub lock_quality: Option<field::LockQuality>,
    pub tx_attenuation: Option<field::TxAttenuation>,
    pub tx_attenuation_db: Option<field::TxAttenuationDb>,
    pub tx_power: Option<field::TxPower>,
    pub antenna: Option<field::Antenna>,
    pub antenna_signal_db: Option<field::AntennaSignalDb>,
    pub antenna_noise_db: Option<field::AntennaNoiseDb>,
    pub rx_flags: Option<field::RxFlags>,
    pub tx_flags: Option<field::TxFlags>,
    pub xchannel: Option<field::XChannel>,
    pub mcs: Option<field::Mcs>,
    pub ampdu_status: Option<field::AmpduStatus>,
    pub vht: Option<field::Vht>,
    pub timestamp: Option<field::Timestamp>,
    present: Vec<Type>,
    errors: Vec<FieldError>,
}

impl Field {
    /// Returns this field's namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns this field's presence bit number.
    pub fn bit(&self) -> u32 {
        self.bit
    }
}

impl<'a> Iter<'a> {
    /// Returns a new radiotap iterator.
    ///
    /// # Errors
    ///
    /// This function will error if the radiotap version is unsupported or if
    /// the length specified in the radiotap header is inconsistent with the
    /// capture.
    pub fn new(input: &'a [u8]) -> Result<Self> {
        let mut bytes = Bytes::new(input);

        // the radiotap version, only 0 is supported
        let version = bytes.read().context("version")?;
        if version != VERSION {
            return Err(Error::UnsupportedVersion { version });
        }

        // padding byte
        bytes.advance(1).context("pad")?;

        // the total length of the entire header
        let length = bytes.read::<u16>().context("it_len")?.into();
        if length < HEADER_SIZE || length > input.len() {
            return Err(Error::InvalidLength {
                length,
                actual: input.len(),
            });
        }

        // field bodies must never be read from beyond the declared length
        let mut bytes = Bytes::new(&input[..length]);
        bytes.advance(4)?;

        // the presence words
        let mut presence = Vec::new();
        loop {
            let word = bytes.read().context("presence")?;
            presence.push(word);
            if word & (1 << PRESENCE_EXT) == 0 {
                break;
            }
        }

        Ok(Self {
            bytes,
            length,
            presence,
            position: 0,
            namespace: Namespace::Default,
        })
    }

    /// The version of the radiotap header.
    #[inline]
    pub fn version(&self) -> u8 {
        VERSION
    }

    /// The length of the entire radiotap header.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the next field in the iterator.
    pub fn next_field(&mut self) -> Result<Option<Field>> {
        loop {
            match self.presence.get((self.position / 32) as usize) {
                Some(presence) => {
                    let bit = self.position % 32;
                    self.position += 1;

                    // if the bit is not set, then continue to next bit
                    if presence & (1 << bit) == 0 {
                        continue;
                    }

                    match bit {
                        PRESENCE_DEFAULT_NAMESPACE => {
                            // switching to radiotap namespace
                            self.namespace = Namespace::Default;
                            continue;
                        }
                        PRESENCE_VENDOR_NAMESPACE => {
                            // switching to vendor namespace
                            self.bytes.align(2).context("vendor namespace")?;
                            self.namespace =
                                Namespace::Vendor(self.bytes.read().context("vendor namespace")?);
                            continue;
                        }
                        PRESENCE_EXT => {
                            // another presence word follows, nothing to emit
                            continue;
                        }
                        bit => {
                            break Ok(Some(Field {
                                namespace: self.namespace.clone(),
                                bit,
                            }));
                        }
                    }
                }
                None => break Ok(None),
            }
        }
    }

    /// Skip the given kind of field.
    pub fn skip<T: Kind>(&mut self, kind: T) -> Result<()> {
        self.bytes.align(kind.align())?;
        self.bytes.advance(kind.size())?;
        Ok(())
    }

    /// Skip the given vendor namespace.
    pub fn skip_vns(&mut self, vns: &VendorNamespace) -> Result<()> {
        self.bytes.advance(vns.skip_length())
    }

    /// Reads the given kind of field.
    pub fn read<T: Kind, U: FromBytes>(&mut self, kind: T) -> Result<U> {
        self.bytes.align(kind.align())?;
        let field = U::from_bytes(&mut self.bytes.bytes(kind.size())?)?;
        self.bytes.advance(kind.size())?;
        Ok(field)
    }
}

/// Parses a radiotap header from the front of a capture.
///
/// # Errors
///
/// Only a bad version or an inconsistent header length abort the parse.
/// Failures while decoding an individual field are recorded on
/// [`Radiotap::errors`](struct.Radiotap.html#method.errors) and decoding
/// continues with the next advertised field.
pub fn parse(bytes: &[u8]) -> Result<Radiotap> {
    let mut iter = Iter::new(bytes)?;
    let mut radiotap = Radiotap {
        length: iter.length(),
        ..Radiotap::default()
    };

    macro_rules! read_field {
        ($kind:expr, $field:ident) => {
            match iter.read($kind) {
                Ok(value) => {
                    radiotap.$field = Some(value);
                    radiotap.present.push($kind);
                }
                Err(error) => radiotap.errors.push(FieldError {
                    field: Some($kind),
                    error,
                }),
            }
        };
    }

    loop {
        let field = match iter.next_field() {
            Ok(Some(field)) => field,
            Ok(None) => break,
            // a truncated vendor namespace header; keep what was decoded
            Err(error) => {
                radiotap.errors.push(FieldError { field: None, error });
                break;
            }
        };
        match field.namespace() {
            Namespace::Default => {
                let kind = match Type::from_bit(field.bit()) {
                    // we cannot continue here because we don't
                    // know how to advance the iterator
                    None => {
                        radiotap.errors.push(FieldError {
                            field: None,
                            error: Error::UnknownField { bit: field.bit() },
                        });
                        break;
                    }
                    Some(kind) => kind,
                };
                match kind {
                    Type::Tsft => read_field!(kind, tsft),
                    Type::Flags => read_field!(kind, flags),
                    Type::Rate => read_field!(kind, rate),
                    Type::Channel => read_field!(kind, channel),
                    Type::Fhss => read_field!(kind, fhss),
                    Type::AntennaSignal => read_field!(kind, antenna_signal),
                    Type::AntennaNoise => read_field!(kind, antenna_noise),
                    Type::LockQuality => read_field!(kind, lock_quality),
                    Type::TxAttenuation => read_field!(kind, tx_attenuation),
                    Type::TxAttenuationDb => read_field!(kind, tx_attenuation_db),
                    Type::TxPower => read_field!(kind, tx_power),
                    Type::Antenna => read_field!(kind, antenna),
                    Type::AntennaSignalDb => read_field!(kind, antenna_signal_db),
                    Type::AntennaNoiseDb => read_field!(kind, antenna_noise_db),
                    Type::RxFlags => read_field!(kind, rx_flags),
                    Type::TxFlags => read_field!(kind, tx_flags),
                    Type::XChannel => read_field!(kind, xchannel),
                    Type::Mcs => read_field!(kind, mcs),
                    Type::AmpduStatus => read_field!(kind, ampdu_status),
                    Type::Vht => read_field!(kind, vht),
                    Type::Timestamp => read_field!(kind, timestamp),
                    kind => {
                        if let Err(error) = iter.skip(kind) {
                            radiotap.errors.push(FieldError {
                                field: Some(kind),
                                error,
                            });
                        }
                    }
                }
            }
            Namespace::Vendor(vns) => {
                if let Err(error) = iter.skip_vns(vns) {
                    radiotap.errors.push(FieldError { field: None, error });
                    break;
                }
            }
        }
    }
    Ok(radiotap)
}

impl Radiotap {
    /// Returns the length of the entire radiotap header.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the field types that were decoded, in walk order.
    pub fn present(&self) -> &[Type] {
        &self.present
    }

    /// Returns the errors recorded for fields that failed to decode.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the data rate in megabits per second.
    ///
    /// Prefers the legacy rate field; falls back to the rate derived from
    /// the MCS index, bandwidth, and guard interval.
    pub fn rate(&self) -> Option<f32> {
        if let Some(rate) = &self.rate {
            return Some(rate.to_mbps());
        }
        self.mcs.as_ref().and_then(|mcs| mcs.to_mbps())
    }

    /// Returns flags describing the channel, if the channel field was
    /// decoded.
    pub fn channel_flags(&self) -> Option<field::channel::Flags> {
        self.channel.as_ref().map(|channel| channel.flags())
    }

    /// Returns the antenna signal in dBm.
    pub fn signal_dbm(&self) -> Option<i8> {
        self.antenna_signal.map(|signal| signal.into_inner())
    }

    /// Whether the MPDU that follows this header carries a trailing FCS.
    pub fn has_fcs(&self) -> bool {
        self.flags
            .map_or(false, |flags| flags.contains(field::Flags::FCS))
    }

    /// Whether there is padding between the 802.11 header and the payload.
    pub fn has_datapad(&self) -> bool {
        self.flags
            .map_or(false, |flags| flags.contains(field::Flags::DATA_PAD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        // Radiotap Header v0, Length 56
        //     Header version: 0
        //     Header pad: 0
        //     Header length: 56
        //     Present flags
        //         Present flags word: 0xc000086f
        //         Present flags word: 0x40000001
        //     MAC timestamp: 77325725
        //     Flags: 0x12
        //     Data Rate: 24.0 Mb/s
        //     Channel frequency: 2437 [BG 6]
        //     Channel flags: 0x0480, 2 GHz spectrum, Dynamic CCK-OFDM
        //     Antenna signal: -76dBm
        //     Antenna noise: -89dBm
        //     Antenna: 0
        //     Vendor namespace: Broadcom-0
        //         Vendor OUI: 00:10:18 (Broadcom)
        //         Vendor sub namespace: 0
        //         Vendor data length: 3
        //         Vendor data
        //     Vendor namespace: Broadcom-3
        //         Vendor OUI: 00:10:18 (Broadcom)
        //         Vendor sub namespace: 3
        //         Vendor data length: 6
        //         Vendor data

        let capture = hex::decode(
            "000038006f0800c001000040040030309de59b040000000012308509\
             8004b4a7008700101800030002000000001018030600400002000000",
        )
        .unwrap();

        let radiotap = parse(&capture).unwrap();
        assert_eq!(radiotap.length(), 56);
        assert_eq!(radiotap.tsft.unwrap().into_inner(), 77325725);
        assert_eq!(
            radiotap.flags.unwrap(),
            field::Flags::PREAMBLE | field::Flags::FCS
        );
        assert_eq!(radiotap.rate(), Some(24.0));
        assert_eq!(radiotap.signal_dbm(), Some(-76));
        assert_eq!(
            radiotap.channel_flags(),
            Some(field::channel::Flags::GHZ2 | field::channel::Flags::DYNAMIC)
        );
        assert_eq!(
            radiotap.present(),
            [
                Type::Tsft,
                Type::Flags,
                Type::Rate,
                Type::Channel,
                Type::AntennaSignal,
                Type::AntennaNoise,
                Type::Antenna,
            ]
        );
        assert!(radiotap.errors().is_empty());
        assert!(radiotap.has_fcs());
    }

    #[test]
    fn bad_version() {
        let capture = hex::decode("01000a00000000000000").unwrap();
        assert_eq!(
            parse(&capture).unwrap_err(),
            Error::UnsupportedVersion { version: 1 }
        );
    }

    #[test]
    fn bad_length_too_long() {
        let capture = hex::decode("00000b00000000000000").unwrap();
        assert_eq!(
            parse(&capture).unwrap_err(),
            Error::InvalidLength {
                length: 11,
                actual: 10
            }
        );
    }

    #[test]
    fn bad_length_too_short() {
        let capture = hex::decode("00000400000000000000").unwrap();
        assert_eq!(
            parse(&capture).unwrap_err(),
            Error::InvalidLength {
                length: 4,
                actual: 10
            }
        );
    }

    #[test]
    fn field_error_is_recorded() {
        // channel advertised but the header ends before its body
        let capture = hex::decode("00000a00080000008500").unwrap();
        let radiotap = parse(&capture).unwrap();
        assert!(radiotap.channel.is_none());
        assert!(radiotap.present().is_empty());
        assert_eq!(radiotap.errors().len(), 1);
        assert_eq!(radiotap.errors()[0].field(), Some(Type::Channel));
    }

    #[test]
    fn unknown_bit_aborts_walk() {
        // bit 28 has no catalog entry
        let capture = hex::decode("00000c000000001000000000").unwrap();
        let radiotap = parse(&capture).unwrap();
        assert_eq!(radiotap.errors().len(), 1);
        assert_eq!(radiotap.errors()[0].field(), None);
        assert_eq!(
            *radiotap.errors()[0].error(),
            Error::UnknownField { bit: 28 }
        );
    }
}
