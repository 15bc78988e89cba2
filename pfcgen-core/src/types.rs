//! Common types used throughout pfcgen

use std::fmt;

/// Number of 802.1p priority classes a PFC frame addresses
pub const PRIORITY_CLASSES: usize = 8;

/// MAC Address (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    /// Create a new MAC address
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Zero MAC address (00:00:00:00:00:00)
    pub const fn zero() -> Self {
        Self([0x00, 0x00, 0x00, 0x00, 0x00, 0x00])
    }

    /// Get bytes as slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Check if this is a multicast address (bit 0 of first octet is 1)
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 == 0x01
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_display() {
        let mac = MacAddr::new([0x01, 0x80, 0xC2, 0x00, 0x00, 0x01]);
        assert_eq!(mac.to_string(), "01:80:c2:00:00:01");
    }

    #[test]
    fn test_mac_multicast() {
        assert!(MacAddr::new([0x01, 0x80, 0xC2, 0x00, 0x00, 0x01]).is_multicast());
        assert!(!MacAddr::zero().is_multicast());
    }
}
