//! IPv4 range expansion.

use crate::error::IpamError;
use std::net::Ipv4Addr;

/// Expands an inclusive `start`..`end` pair into the ordered addresses in
/// between.
///
/// Bulk reservations are restricted to a single /24-equivalent block: the
/// two addresses must agree in their first three octets, and `start` must
/// not be after `end`. Pure function; the result is strictly ascending.
pub fn expand_range(start: &str, end: &str) -> Result<Vec<Ipv4Addr>, IpamError> {
    let start_addr: Ipv4Addr = start
        .trim()
        .parse()
        .map_err(|_| IpamError::Format(start.to_string()))?;
    let end_addr: Ipv4Addr = end
        .trim()
        .parse()
        .map_err(|_| IpamError::Format(end.to_string()))?;

    let s = start_addr.octets();
    let e = end_addr.octets();
    if s[..3] != e[..3] {
        return Err(IpamError::RangeTooLarge {
            start: start_addr.to_string(),
            end: end_addr.to_string(),
        });
    }
    if s[3] > e[3] {
        return Err(IpamError::RangeOrder {
            start: start_addr.to_string(),
            end: end_addr.to_string(),
        });
    }

    Ok((s[3]..=e[3])
        .map(|last| Ipv4Addr::new(s[0], s[1], s[2], last))
        .collect())
}
