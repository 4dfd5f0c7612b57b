//! 802.11u interworking constants.
//!
//! Management frames on hotspot-capable networks reference these values in
//! their Interworking and ANQP information elements. The element bodies
//! themselves are above the MAC header and are not parsed by this crate;
//! the enumerations are provided so callers interpreting those elements do
//! not have to restate the tables.

impl_enum! {
    /// The access network type advertised in the Interworking element.
    #[non_exhaustive]
    pub enum AccessNetworkType: u8 {
        /// Private network.
        Private = 0,
        /// Private network with guest access.
        PrivateGuest = 1,
        /// Chargeable public network.
        ChargeablePublic = 2,
        /// Free public network.
        FreePublic = 3,
        /// Personal device network.
        Personal = 4,
        /// Emergency services only network.
        EmergencyOnly = 5,
        /// Test or experimental network.
        Test = 14,
        /// Wildcard, matches any access network type.
        Wildcard = 15,
    }
}

impl_enum! {
    /// The venue group advertised in the venue info field.
    #[non_exhaustive]
    pub enum VenueGroup: u8 {
        Unspecified = 0,
        Assembly = 1,
        Business = 2,
        Educational = 3,
        FactoryIndustrial = 4,
        Institutional = 5,
        Mercantile = 6,
        Residential = 7,
        Storage = 8,
        UtilityMisc = 9,
        Vehicular = 10,
        Outdoor = 11,
    }
}

/// ANQP info IDs, the query/response element identifiers carried in GAS
/// frames.
pub mod anqp {
    pub const QUERY_LIST: u16 = 256;
    pub const CAPABILITY_LIST: u16 = 257;
    pub const VENUE_NAME: u16 = 258;
    pub const EMERGENCY_CALL_NUMBER: u16 = 259;
    pub const NETWORK_AUTH_TYPE: u16 = 260;
    pub const ROAMING_CONSORTIUM: u16 = 261;
    pub const IP_ADDR_TYPE_AVAILABILITY: u16 = 262;
    pub const NAI_REALM: u16 = 263;
    pub const CELLULAR_NETWORK: u16 = 264;
    pub const AP_GEOSPATIAL_LOCATION: u16 = 265;
    pub const AP_CIVIC_LOCATION: u16 = 266;
    pub const AP_LOCATION_PUBLIC_URI: u16 = 267;
    pub const DOMAIN_NAME: u16 = 268;
    pub const EMERGENCY_ALERT_URI: u16 = 269;
    pub const EMERGENCY_NAI: u16 = 271;
    pub const VENDOR_SPECIFIC: u16 = 56797;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_network_type() {
        assert_eq!(
            AccessNetworkType::from_bits(3),
            Some(AccessNetworkType::FreePublic)
        );
        assert_eq!(AccessNetworkType::from_bits(6), None);
        assert_eq!(
            AccessNetworkType::from_bits(15),
            Some(AccessNetworkType::Wildcard)
        );
    }

    #[test]
    fn venue_group() {
        assert_eq!(VenueGroup::from_bits(7), Some(VenueGroup::Residential));
        assert_eq!(VenueGroup::from_bits(12), None);
    }
}
