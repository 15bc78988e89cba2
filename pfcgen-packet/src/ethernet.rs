//! Ethernet constants for MAC Control frames
//!
//! PFC rides in the MAC Control sublayer: a reserved multicast destination,
//! EtherType 0x8808 and a 16-bit opcode ahead of the control parameters.

use bytes::{BufMut, BytesMut};
use pfcgen_core::MacAddr;

/// MAC Control multicast address (01:80:C2:00:00:01), shared by PAUSE and PFC
pub const PFC_MULTICAST: MacAddr = MacAddr::new([0x01, 0x80, 0xC2, 0x00, 0x00, 0x01]);

/// Fixed source address stamped on generated frames. Not the NIC's own address.
pub const PLACEHOLDER_SOURCE: MacAddr = MacAddr::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);

/// MAC Control EtherType
pub const ETHERTYPE_MAC_CONTROL: u16 = 0x8808;

/// MAC Control opcode for 802.1Qbb Priority-based Flow Control
pub const OPCODE_PFC: u16 = 0x0101;

/// Write destination, source and EtherType into `buffer`.
pub fn put_header(buffer: &mut BytesMut, destination: MacAddr, source: MacAddr, ethertype: u16) {
    buffer.put_slice(destination.as_bytes());
    buffer.put_slice(source.as_bytes());
    buffer.put_u16(ethertype);
}
