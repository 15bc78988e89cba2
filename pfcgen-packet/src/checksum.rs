//! Checksum calculation for generated PFC frames
//!
//! A 16-bit one's-complement sum in the style of RFC 1071, with one
//! difference: each byte pair is accumulated as `b[i] + (b[i + 1] << 8)`,
//! low byte first. Frames produced by earlier versions of this tool carry
//! checksums computed that way, so the pair order must not change.

use pfcgen_core::{Error, Result};

/// Sum `data` as low-byte-first 16-bit words and fold the carries.
///
/// The fold is one end-around step followed by a single add, which is
/// enough for any input shorter than 128 KiB. Only the low 16 bits of the
/// result are meaningful.
///
/// `data` must have even length.
pub fn checksum_accumulate(data: &[u8]) -> Result<u32> {
    if data.len() % 2 != 0 {
        return Err(Error::packet_construction(format!(
            "checksum input must have even length, got {} bytes",
            data.len()
        )));
    }
    Ok(fold_pairs(data))
}

/// Checksum of data whose even length the caller has already guaranteed.
pub(crate) fn complement_pairs(data: &[u8]) -> u16 {
    debug_assert!(data.len() % 2 == 0);
    (!fold_pairs(data) & 0xFFFF) as u16
}

fn fold_pairs(data: &[u8]) -> u32 {
    let mut sum: u32 = data
        .chunks_exact(2)
        .map(|pair| pair[0] as u32 + ((pair[1] as u32) << 8))
        .sum();

    sum = (sum >> 16) + (sum & 0xFFFF);
    sum += sum >> 16;

    sum & 0xFFFF
}

/// Checksum of `data`: the one's complement of the folded sum.
///
/// # Examples
///
/// ```
/// use pfcgen_packet::checksum::pfc_checksum;
///
/// let checksum = pfc_checksum(&[0x01, 0x00, 0x02, 0x00]).unwrap();
/// assert_eq!(checksum, !0x0003u16);
/// ```
pub fn pfc_checksum(data: &[u8]) -> Result<u16> {
    let sum = checksum_accumulate(data)?;
    Ok((!sum & 0xFFFF) as u16)
}

/// Check data that already contains its checksum field (stored low byte
/// first). A correct frame folds to `0xFFFF`.
pub fn validate_checksum(data: &[u8]) -> bool {
    matches!(checksum_accumulate(data), Ok(0xFFFF))
}
