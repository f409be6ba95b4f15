use super::*;
use crate::util::*;

/// The 40 byte info header that follows the [FileHeader].
///
/// Only `width` and `height` mean anything to this crate, the rest of the
/// fields are carried along so they can be written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[allow(missing_docs)]
pub struct InfoHeader {
  /// Declared size of the info header. This crate always reads and writes
  /// exactly 40 bytes no matter what this says.
  pub header_size: u32,

  /// Image pixel width.
  pub width: i32,

  /// Image pixel height.
  ///
  /// * A positive height indicates that the rows are stored bottom-up.
  /// * A negative height indicates that the rows are stored top-down.
  pub height: i32,

  pub color_planes: u16,
  pub bits_per_pixel: u16,
  pub compression: u32,
  pub image_size: u32,
  pub horizontal_resolution: i32,
  pub vertical_resolution: i32,
  pub colors_in_palette: u32,
  pub important_colors: u32,
}
impl From<BitmapInfoHeader> for InfoHeader {
  #[inline]
  fn from(raw: BitmapInfoHeader) -> Self {
    Self {
      header_size: raw.size.get(),
      width: raw.width.get(),
      height: raw.height.get(),
      color_planes: raw.planes.get(),
      bits_per_pixel: raw.bits_per_pixel.get(),
      compression: raw.compression.get(),
      image_size: raw.image_size.get(),
      horizontal_resolution: raw.pixels_per_meter_x.get(),
      vertical_resolution: raw.pixels_per_meter_y.get(),
      colors_in_palette: raw.colors_used.get(),
      important_colors: raw.important_colors.get(),
    }
  }
}
impl From<InfoHeader> for BitmapInfoHeader {
  #[inline]
  fn from(h: InfoHeader) -> Self {
    Self {
      size: h.header_size.into(),
      width: h.width.into(),
      height: h.height.into(),
      planes: h.color_planes.into(),
      bits_per_pixel: h.bits_per_pixel.into(),
      compression: h.compression.into(),
      image_size: h.image_size.into(),
      pixels_per_meter_x: h.horizontal_resolution.into(),
      pixels_per_meter_y: h.vertical_resolution.into(),
      colors_used: h.colors_in_palette.into(),
      important_colors: h.important_colors.into(),
    }
  }
}
impl From<InfoHeader> for [u8; 40] {
  #[inline]
  fn from(h: InfoHeader) -> Self {
    bytemuck::cast(BitmapInfoHeader::from(h))
  }
}
impl InfoHeader {
  /// The number of bytes this header takes up in a file.
  pub const SIZE: usize = 40;

  /// Tries to get the info header and remaining bytes.
  ///
  /// No field is validated here.
  #[inline]
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), BmpError> {
    let (raw, rest) = try_pull_pod::<BitmapInfoHeader>(bytes)?;
    Ok((Self::from(raw), rest))
  }

  /// If the rows are stored top-down (negative height).
  #[inline]
  #[must_use]
  pub const fn origin_top_left(&self) -> bool {
    self.height.is_negative()
  }

  /// The width and (absolute) height of the pixel grid this header describes.
  ///
  /// ## Failure
  /// * A width that isn't positive, or a height of zero:
  ///   [WidthOrHeightZero](BmpError::WidthOrHeightZero)
  /// * More pixels, or more bytes per row, than `usize` can count:
  ///   [DimensionsTooLarge](BmpError::DimensionsTooLarge)
  #[inline]
  pub fn grid_dimensions(&self) -> Result<(u32, u32), BmpError> {
    if self.width <= 0 || self.height == 0 {
      return Err(BmpError::WidthOrHeightZero);
    }
    let width = self.width.unsigned_abs();
    let height = self.height.unsigned_abs();
    padded_bytes_per_line(width)?
      .checked_mul(usize::try_from(height)?)
      .ok_or(BmpError::DimensionsTooLarge)?;
    Ok((width, height))
  }

  /// Logs anything about the header that this crate is going to ignore.
  pub(crate) fn warn_if_unusual(&self) {
    if self.header_size != Self::SIZE as u32 {
      log::warn!("info header claims {} bytes, reading it as 40", self.header_size);
    }
    if self.bits_per_pixel != 24 {
      log::warn!("{} bits per pixel, decoding as 24", self.bits_per_pixel);
    }
    if self.compression != BI_RGB {
      log::warn!("compression {} is not supported, decoding as uncompressed", self.compression);
    }
  }
}
