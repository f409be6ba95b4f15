//! These are the on-disk header structs, all fields kept as little-endian
//! bytes so that each struct has an alignment of 1 and no padding.
//!
//! Users get the native-int forms, [FileHeader](super::FileHeader) and
//! [InfoHeader](super::InfoHeader), instead.

use pack1::*;

/// `BI_RGB`, the only compression value this crate expects to see.
pub(crate) const BI_RGB: u32 = 0;

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapFileHeader {
  pub ty: [u8; 2],
  pub file_size: U32LE,
  pub reserved: U32LE,
  pub bitmap_offset: U32LE,
}

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapInfoHeader {
  /// size of the struct, 40 for this version.
  pub size: U32LE,

  /// width in pixels.
  pub width: I32LE,

  /// height in pixels. when height is positive the bitmap is bottom up. when
  /// the height is negative the bitmap is top down.
  pub height: I32LE,

  /// must be 1
  pub planes: U16LE,

  /// 24 for `[b,g,r]` data
  pub bits_per_pixel: U16LE,

  /// `BI_RGB`
  pub compression: U32LE,

  /// If non-zero, the size of the pixel data in bytes.
  pub image_size: U32LE,

  /// pixels per meter of the intended device, wide
  pub pixels_per_meter_x: I32LE,

  /// pixels per meter of the intended device, tall
  pub pixels_per_meter_y: I32LE,

  /// The number of color table entries that are used.
  pub colors_used: U32LE,

  /// The number of colors that are important, if zero then all colors are
  /// important.
  pub important_colors: U32LE,
}

#[test]
fn test_raw_header_sizes() {
  assert_eq!(core::mem::size_of::<BitmapFileHeader>(), 14);
  assert_eq!(core::mem::size_of::<BitmapInfoHeader>(), 40);
  assert_eq!(core::mem::align_of::<BitmapInfoHeader>(), 1);
}
