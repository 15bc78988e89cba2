//! Priority Flow Control frame construction for pfcgen
//!
//! This crate turns a set of per-class enable flags and pause times into the
//! exact bytes of an IEEE 802.1Qbb PFC frame:
//!
//! - [`ethernet`] - MAC Control addresses, EtherType and opcode
//! - [`pfc`] - class configuration, field encoding, padding and the finished [`WireFrame`]
//! - [`checksum`] - the one's-complement checksum appended to every frame
//!
//! # Quick Start
//!
//! ```rust
//! use pfcgen_packet::{ClassConfig, PfcFrame};
//!
//! let classes = ClassConfig::new()
//!     .pause(0, 100)
//!     .unwrap()
//!     .pause(7, 65535)
//!     .unwrap();
//!
//! let frame = PfcFrame::new(classes).build();
//! assert_eq!(frame.len(), 64);
//! assert_eq!(frame.enable_vector(), 0x0081);
//! assert!(frame.verify());
//! ```

pub mod checksum;
pub mod ethernet;
pub mod pfc;

// Re-export commonly used types for convenience
pub use checksum::{checksum_accumulate, pfc_checksum, validate_checksum};
pub use ethernet::{ETHERTYPE_MAC_CONTROL, OPCODE_PFC, PFC_MULTICAST, PLACEHOLDER_SOURCE};
pub use pfc::{ClassConfig, PfcFrame, PriorityClass, WireFrame, WIRE_LEN};
