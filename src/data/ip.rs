//! IP address and subnet mask validation.
//!
//! Range checks follow the usual filter semantics:
//! - private IPv4: `10.0.0.0/8`, `172.16.0.0/12`, `192.168.0.0/16`
//! - reserved IPv4: `0.0.0.0/8`, `127.0.0.0/8`, `169.254.0.0/16`, `240.0.0.0/4`
//! - private IPv6: `fc00::/7`
//! - reserved IPv6: `::`, `::1`, `::ffff:0:0/96`, `fe80::/10`
//!
//! Successful validators return the input unchanged.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::ValidationError;

/// Address range an address was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpScope {
    Public,
    Private,
}

impl fmt::Display for IpScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpScope::Public => write!(f, "public"),
            IpScope::Private => write!(f, "private"),
        }
    }
}

fn is_private_v4(ip: Ipv4Addr) -> bool {
    ip.is_private()
}

fn is_reserved_v4(ip: Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    a == 0 || a == 127 || (a == 169 && b == 254) || a >= 240
}

fn is_private_v6(ip: Ipv6Addr) -> bool {
    ip.segments()[0] & 0xfe00 == 0xfc00
}

fn is_reserved_v6(ip: Ipv6Addr) -> bool {
    let segments = ip.segments();
    ip.is_unspecified()
        || ip.is_loopback()
        || (segments[..5].iter().all(|s| *s == 0) && segments[5] == 0xffff)
        || (segments[0] & 0xffc0 == 0xfe80)
}

fn parse_v4(address: &str) -> Result<Ipv4Addr, ValidationError> {
    address.parse().map_err(|_| ValidationError::InvalidIp {
        address: address.to_string(),
        kind: "IPv4",
    })
}

fn parse_v6(address: &str) -> Result<Ipv6Addr, ValidationError> {
    address.parse().map_err(|_| ValidationError::InvalidIp {
        address: address.to_string(),
        kind: "IPv6",
    })
}

fn out_of_range(address: &str, scope: IpScope) -> ValidationError {
    ValidationError::OutOfRange {
        address: address.to_string(),
        scope,
    }
}

/// Validate any IPv4 or IPv6 address.
pub fn validate_ip(address: &str) -> Result<String, ValidationError> {
    address
        .parse::<IpAddr>()
        .map(|_| address.to_string())
        .map_err(|_| ValidationError::InvalidIp {
            address: address.to_string(),
            kind: "IP",
        })
}

/// Validate an IPv4 address.
pub fn validate_ipv4(address: &str) -> Result<String, ValidationError> {
    parse_v4(address).map(|_| address.to_string())
}

/// Validate an IPv6 address.
pub fn validate_ipv6(address: &str) -> Result<String, ValidationError> {
    parse_v6(address).map(|_| address.to_string())
}

/// Validate an IPv4 address outside the private and reserved ranges.
pub fn validate_public_ipv4(address: &str) -> Result<String, ValidationError> {
    let ip = parse_v4(address)?;
    if is_private_v4(ip) || is_reserved_v4(ip) {
        return Err(out_of_range(address, IpScope::Public));
    }
    Ok(address.to_string())
}

/// Validate an IPv4 address inside the private ranges.
pub fn validate_private_ipv4(address: &str) -> Result<String, ValidationError> {
    let ip = parse_v4(address)?;
    if !is_private_v4(ip) {
        return Err(out_of_range(address, IpScope::Private));
    }
    Ok(address.to_string())
}

/// Validate an IPv6 address outside the private and reserved ranges.
pub fn validate_public_ipv6(address: &str) -> Result<String, ValidationError> {
    let ip = parse_v6(address)?;
    if is_private_v6(ip) || is_reserved_v6(ip) {
        return Err(out_of_range(address, IpScope::Public));
    }
    Ok(address.to_string())
}

/// Validate an IPv6 address inside `fc00::/7`. The loopback `::1` also counts
/// as private.
pub fn validate_private_ipv6(address: &str) -> Result<String, ValidationError> {
    let ip = parse_v6(address)?;
    if !(is_private_v6(ip) || ip.is_loopback()) {
        return Err(out_of_range(address, IpScope::Private));
    }
    Ok(address.to_string())
}

/// Validate an IPv4 subnet mask: contiguous one bits followed by zeros.
pub fn validate_subnet_mask(address: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidSubnetMask(address.to_string());
    let mask = u32::from(parse_v4(address).map_err(|_| invalid())?);
    if mask.leading_ones() + mask.trailing_zeros() != 32 {
        return Err(invalid());
    }
    Ok(address.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PRIVATE_V6: &str = "FC80:0000:0000:0000:903A:1C1A:E802:11E4";

    #[rstest]
    #[case("192.168.0.1")]
    #[case("::1")]
    #[case(PRIVATE_V6)]
    fn test_valid_general_ip(#[case] address: &str) {
        assert_eq!(validate_ip(address).unwrap(), address);
    }

    #[rstest]
    #[case("256.71.83.1")]
    #[case("not an ip")]
    #[case("")]
    fn test_invalid_general_ip(#[case] address: &str) {
        assert!(validate_ip(address).is_err());
    }

    #[rstest]
    fn test_ipv4_rejects_ipv6() {
        assert!(validate_ipv4(PRIVATE_V6).is_err());
        assert!(validate_ipv4("10.0.0.1").is_ok());
    }

    #[rstest]
    fn test_ipv6_rejects_ipv4() {
        assert!(validate_ipv6("10.0.0.1").is_err());
        assert!(validate_ipv6("2001:db8::1").is_ok());
    }

    #[rstest]
    #[case("207.124.51.1", true)]
    #[case("8.8.8.8", true)]
    #[case("127.0.0.1", false)]
    #[case("192.168.0.1", false)]
    #[case("10.1.2.3", false)]
    #[case("172.20.0.1", false)]
    #[case("169.254.1.1", false)]
    #[case("0.1.2.3", false)]
    #[case("250.0.0.1", false)]
    fn test_public_ipv4(#[case] address: &str, #[case] public: bool) {
        assert_eq!(validate_public_ipv4(address).is_ok(), public);
    }

    #[rstest]
    #[case("192.168.0.1", true)]
    #[case("172.31.255.255", true)]
    #[case("127.0.0.1", false)]
    #[case("207.124.51.1", false)]
    fn test_private_ipv4(#[case] address: &str, #[case] private: bool) {
        assert_eq!(validate_private_ipv4(address).is_ok(), private);
    }

    #[rstest]
    fn test_private_ipv6() {
        assert_eq!(validate_private_ipv6(PRIVATE_V6).unwrap(), PRIVATE_V6);
        assert_eq!(validate_private_ipv6("::1").unwrap(), "::1");
        assert!(matches!(
            validate_private_ipv6("2001:4860:4860::8888"),
            Err(ValidationError::OutOfRange {
                scope: IpScope::Private,
                ..
            })
        ));
    }

    #[rstest]
    #[case("2001:4860:4860::8888", true)]
    #[case(PRIVATE_V6, false)]
    #[case("::1", false)]
    #[case("fe80::1", false)]
    #[case("::ffff:192.168.0.1", false)]
    fn test_public_ipv6(#[case] address: &str, #[case] public: bool) {
        assert_eq!(validate_public_ipv6(address).is_ok(), public);
    }

    #[rstest]
    #[case("255.255.255.0", true)]
    #[case("255.255.0.0", true)]
    #[case("255.255.255.252", true)]
    #[case("0.0.0.0", true)]
    #[case("192.168.0.1", false)]
    #[case("255.0.255.0", false)]
    #[case("255.255.255", false)]
    fn test_subnet_mask(#[case] address: &str, #[case] valid: bool) {
        assert_eq!(validate_subnet_mask(address).is_ok(), valid);
    }
}
