//! Module for the pixel data structure.

use bytemuck::{Pod, Zeroable};

/// Blue/Green/Red, u8 per channel.
///
/// This is the channel order of 24 bits per pixel BMP data, so a row of pixel
/// bytes from a file can be cast directly into a slice of this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct BGR8 {
  pub b: u8,
  pub g: u8,
  pub r: u8,
}
impl BGR8 {
  /// Makes a pixel with all three channels set to the same value.
  #[inline]
  #[must_use]
  pub const fn splat(y: u8) -> Self {
    Self { b: y, g: y, r: y }
  }
}
impl From<[u8; 3]> for BGR8 {
  #[inline]
  fn from([b, g, r]: [u8; 3]) -> Self {
    Self { b, g, r }
  }
}
impl From<BGR8> for [u8; 3] {
  #[inline]
  fn from(BGR8 { b, g, r }: BGR8) -> Self {
    [b, g, r]
  }
}
