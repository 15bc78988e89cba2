//! Priority Flow Control (IEEE 802.1Qbb) frame construction
//!
//! Frame layout:
//!
//! ```text
//! offset  len  field
//!      0    6  destination  01:80:C2:00:00:01
//!      6    6  source       placeholder
//!     12    2  ethertype    0x8808
//!     14    2  opcode       0x0101
//!     16    2  class enable vector, 0x00 then E7..E0
//!     18   16  pause time per class 0..7, big-endian quanta
//!     34   26  zero padding
//!     60    2  checksum, low byte first
//!     62    2  zero trailer
//! ```

use bytes::{BufMut, BytesMut};
use pfcgen_core::{Error, GeneratorConfig, MacAddr, Result, PRIORITY_CLASSES};
use std::fmt;

use crate::checksum::{complement_pairs, validate_checksum};
use crate::ethernet::{
    put_header, ETHERTYPE_MAC_CONTROL, OPCODE_PFC, PFC_MULTICAST, PLACEHOLDER_SOURCE,
};

/// Header, opcode, enable vector and eight quanta
pub const FIELDS_LEN: usize = 34;

/// Zero bytes appended after the fields
pub const PADDING_LEN: usize = 26;

/// Fields plus padding; the span covered by the checksum
pub const PADDED_LEN: usize = FIELDS_LEN + PADDING_LEN;

/// Checksum field width
pub const CHECKSUM_LEN: usize = 2;

/// Zero bytes after the checksum
pub const TRAILER_LEN: usize = 2;

/// Total bytes handed to the link layer
pub const WIRE_LEN: usize = PADDED_LEN + CHECKSUM_LEN + TRAILER_LEN;

const ENABLE_VECTOR_OFFSET: usize = 16;

// The checksum sums byte pairs, so the span it covers must have even length.
const _: () = assert!(PADDED_LEN % 2 == 0);

/// Enable flag and pause time for one priority class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityClass {
    /// Class bit in the enable vector
    pub enabled: bool,
    /// Pause time in quanta (512 bit times each). Sent whether or not the
    /// class is enabled.
    pub quantum: u16,
}

/// Per-class settings for all eight priorities, indexed by class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassConfig {
    classes: [PriorityClass; PRIORITY_CLASSES],
}

impl ClassConfig {
    /// All classes disabled with zero quanta
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enable bit for `class`
    pub fn enable(mut self, class: usize) -> Result<Self> {
        self.slot(class)?.enabled = true;
        Ok(self)
    }

    /// Set the pause time for `class` without touching its enable bit
    pub fn set_quantum(mut self, class: usize, quanta: u16) -> Result<Self> {
        self.slot(class)?.quantum = quanta;
        Ok(self)
    }

    /// Enable `class` and give it `quanta`. Zero quanta is an explicit resume.
    pub fn pause(self, class: usize, quanta: u16) -> Result<Self> {
        self.enable(class)?.set_quantum(class, quanta)
    }

    /// Settings for `class`, `None` past class 7
    pub fn class(&self, class: usize) -> Option<&PriorityClass> {
        self.classes.get(class)
    }

    /// Class enable vector: bit `i` set when class `i` is enabled, upper byte zero.
    pub fn enable_vector(&self) -> u16 {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.enabled)
            .fold(0u8, |vector, (i, _)| vector | (1 << i)) as u16
    }

    /// Pause times in class order
    pub fn quanta(&self) -> [u16; PRIORITY_CLASSES] {
        self.classes.map(|c| c.quantum)
    }

    fn slot(&mut self, class: usize) -> Result<&mut PriorityClass> {
        self.classes.get_mut(class).ok_or_else(|| {
            Error::invalid_parameter(
                "class",
                format!("{} is out of range, classes are 0-7", class),
            )
        })
    }
}

impl From<&GeneratorConfig> for ClassConfig {
    fn from(config: &GeneratorConfig) -> Self {
        let mut classes = [PriorityClass::default(); PRIORITY_CLASSES];
        for (i, class) in classes.iter_mut().enumerate() {
            class.enabled = config.enabled[i];
            class.quantum = config.quanta[i];
        }
        Self { classes }
    }
}

/// A PFC frame before serialization
#[derive(Debug, Clone)]
pub struct PfcFrame {
    /// Destination MAC address
    pub destination: MacAddr,
    /// Source MAC address
    pub source: MacAddr,
    /// Enable bits and pause times
    pub classes: ClassConfig,
}

impl PfcFrame {
    /// Frame to the PFC multicast address from the placeholder source
    pub fn new(classes: ClassConfig) -> Self {
        Self {
            destination: PFC_MULTICAST,
            source: PLACEHOLDER_SOURCE,
            classes,
        }
    }

    /// Override the source MAC address
    pub fn with_source(mut self, source: MacAddr) -> Self {
        self.source = source;
        self
    }

    /// Encode header, opcode, enable vector and quanta.
    pub fn fields(&self) -> [u8; FIELDS_LEN] {
        let mut buffer = BytesMut::with_capacity(FIELDS_LEN);

        put_header(
            &mut buffer,
            self.destination,
            self.source,
            ETHERTYPE_MAC_CONTROL,
        );
        buffer.put_u16(OPCODE_PFC);
        buffer.put_u16(self.classes.enable_vector());
        for quantum in self.classes.quanta() {
            buffer.put_u16(quantum);
        }

        let mut fields = [0u8; FIELDS_LEN];
        fields.copy_from_slice(&buffer);
        fields
    }

    /// Serialize, pad and checksum into the bytes that go on the wire.
    pub fn build(&self) -> WireFrame {
        let padded = pad(&self.fields());
        let checksum = sum_words(&padded);

        let mut bytes = [0u8; WIRE_LEN];
        bytes[..PADDED_LEN].copy_from_slice(&padded);
        bytes[PADDED_LEN..PADDED_LEN + CHECKSUM_LEN].copy_from_slice(&checksum.to_le_bytes());

        WireFrame { bytes, checksum }
    }
}

impl From<&GeneratorConfig> for PfcFrame {
    fn from(config: &GeneratorConfig) -> Self {
        Self::new(ClassConfig::from(config))
    }
}

/// Checksum of the padded span.
fn sum_words(padded: &[u8; PADDED_LEN]) -> u16 {
    complement_pairs(padded)
}

/// Append the fixed run of zero padding.
pub fn pad(fields: &[u8; FIELDS_LEN]) -> [u8; PADDED_LEN] {
    let mut padded = [0u8; PADDED_LEN];
    padded[..FIELDS_LEN].copy_from_slice(fields);
    padded
}

/// A finished, immutable PFC frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireFrame {
    bytes: [u8; WIRE_LEN],
    checksum: u16,
}

impl WireFrame {
    /// The bytes to put on the wire
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame length, always [`WIRE_LEN`]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true; present alongside [`WireFrame::len`]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Checksum as stored at offset 60
    pub fn checksum(&self) -> u16 {
        self.checksum
    }

    /// Class enable vector as encoded at offset 16
    pub fn enable_vector(&self) -> u16 {
        u16::from_be_bytes([
            self.bytes[ENABLE_VECTOR_OFFSET],
            self.bytes[ENABLE_VECTOR_OFFSET + 1],
        ])
    }

    /// Re-sum the padded fields together with the stored checksum.
    pub fn verify(&self) -> bool {
        validate_checksum(&self.bytes[..PADDED_LEN + CHECKSUM_LEN])
    }
}

impl AsRef<[u8]> for WireFrame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Hex dump, 16 bytes per line with offsets
impl fmt::Display for WireFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, chunk) in self.bytes.chunks(16).enumerate() {
            if line > 0 {
                writeln!(f)?;
            }
            write!(f, "{:04x}:", line * 16)?;
            for byte in chunk {
                write!(f, " {:02x}", byte)?;
            }
        }
        Ok(())
    }
}
