//! Converting between the padded pixel rows of a file and a [Bitmap].
//!
//! Layout note: the decoder skips a row's padding just *before* reading each
//! row after the first, so it never needs the padding of the final row. The
//! encoder writes padding before each row after the first and then once more
//! at the very end, which gives the complete layout where every row is
//! followed by its padding.

use super::*;
#[cfg(feature = "alloc")]
use crate::{Bitmap, BGR8};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// The number of zero bytes that follow each 24bpp row of the given width.
///
/// Only `width % 4` matters, so this can't overflow.
#[inline]
#[must_use]
pub const fn padding_bytes_per_line(width: u32) -> usize {
  ((4 - ((width % 4) * 3) % 4) % 4) as usize
}

/// The number of bytes each 24bpp row takes in the file, padding included.
#[inline]
pub fn padded_bytes_per_line(width: u32) -> Result<usize, BmpError> {
  usize::try_from(width)?
    .checked_mul(3)
    .and_then(|bytes| bytes.checked_add(padding_bytes_per_line(width)))
    .ok_or(BmpError::DimensionsTooLarge)
}

/// The smallest pixel region the decoder will accept, which is every row with
/// its padding except that the final row's padding can be missing.
#[inline]
pub fn bmp_min_pixel_data_len(width: u32, height: u32) -> Result<usize, BmpError> {
  padded_bytes_per_line(width)?
    .checked_mul(usize::try_from(height)?)
    .ok_or(BmpError::DimensionsTooLarge)
    .map(|total| total.saturating_sub(padding_bytes_per_line(width)))
}

/// Somewhere the decoder can pull pixel rows from.
#[cfg(feature = "alloc")]
pub(crate) trait PixelSource {
  type Error;

  /// Skips over `count` bytes of padding.
  fn skip(&mut self, count: usize) -> Result<(), Self::Error>;

  /// Fills all of `buf` with the next bytes.
  fn fill(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}
#[cfg(feature = "alloc")]
impl PixelSource for &[u8] {
  type Error = BmpError;

  #[inline]
  fn skip(&mut self, count: usize) -> Result<(), BmpError> {
    *self = self.get(count..).ok_or(BmpError::InsufficientBytes)?;
    Ok(())
  }

  #[inline]
  fn fill(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
    let (head, tail) = self.split_at_checked(buf.len()).ok_or(BmpError::InsufficientBytes)?;
    buf.copy_from_slice(head);
    *self = tail;
    Ok(())
  }
}

/// Runs the row loop shared by every decoder: padding is skipped before each
/// row after the first, then the row is filled.
#[cfg(feature = "alloc")]
pub(crate) fn bmp_fill_rows<S: PixelSource>(
  bitmap: &mut Bitmap<BGR8>, source: &mut S,
) -> Result<(), S::Error> {
  let pad = padding_bytes_per_line(bitmap.width);
  let width = bitmap.width as usize;
  if width == 0 {
    return Ok(());
  }
  for (y, row) in bitmap.pixels.chunks_exact_mut(width).enumerate() {
    if y > 0 {
      source.skip(pad)?;
    }
    source.fill(bytemuck::cast_slice_mut(row))?;
  }
  Ok(())
}

/// Runs the row loop shared by every encoder.
///
/// `op` gets each run of bytes in file order: padding before every row after
/// the first, the row's pixels, and a final padding after the last row.
#[cfg(feature = "alloc")]
pub(crate) fn bmp_for_each_chunk<E>(
  bitmap: &Bitmap<BGR8>, mut op: impl FnMut(&[u8]) -> Result<(), E>,
) -> Result<(), E> {
  let pad = &[0_u8; 3][..padding_bytes_per_line(bitmap.width)];
  for (y, row) in bitmap.rows().enumerate() {
    if y > 0 {
      op(pad)?;
    }
    op(bytemuck::cast_slice(row))?;
  }
  op(pad)
}

/// Decodes the pixel data of a 24bpp BMP.
///
/// * `bytes` is the **entire** file, the pixel data is found using
///   `file_header.pixel_data_offset`.
/// * The dimensions come from `info_header`. A negative height just means the
///   rows are top-down, the grid is `|height|` rows either way and they're
///   kept in storage order.
///
/// ## Failure
/// * Unusable dimensions, see [InfoHeader::grid_dimensions].
/// * Not enough bytes after the offset:
///   [InsufficientBytes](BmpError::InsufficientBytes). This is checked before
///   the grid is allocated.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub fn bmp_try_pixels(
  bytes: &[u8], file_header: FileHeader, info_header: InfoHeader,
) -> Result<Bitmap<BGR8>, BmpError> {
  let (width, height) = info_header.grid_dimensions()?;
  let offset = usize::try_from(file_header.pixel_data_offset)?;
  let mut rest = bytes.get(offset..).ok_or(BmpError::InsufficientBytes)?;
  let needed = bmp_min_pixel_data_len(width, height)?;
  if rest.len() < needed {
    log::trace!("pixel data needs {needed} bytes, only {} are present", rest.len());
    return Err(BmpError::InsufficientBytes);
  }
  let mut bitmap = Bitmap::try_new(width, height)?;
  bmp_fill_rows(&mut bitmap, &mut rest)?;
  log::trace!("decoded {width}x{height} pixels from offset {offset}");
  Ok(bitmap)
}

/// Encodes the pixel data region for the bitmap, every row followed by its
/// zero padding.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub fn bmp_pixel_data_bytes(bitmap: &Bitmap<BGR8>) -> Result<Vec<u8>, BmpError> {
  let total = padded_bytes_per_line(bitmap.width)?
    .checked_mul(usize::try_from(bitmap.height)?)
    .ok_or(BmpError::DimensionsTooLarge)?;
  let mut out = Vec::new();
  out.try_reserve_exact(total)?;
  bmp_for_each_chunk(bitmap, |bytes| {
    out.extend_from_slice(bytes);
    Ok::<(), BmpError>(())
  })?;
  Ok(out)
}

/// Encodes a complete BMP file.
///
/// The headers are written as given, no size field is recomputed. The pixel
/// data is then placed at `file_header.pixel_data_offset`: a gap after the
/// headers is zero filled, and an offset that points inside the headers
/// overwrites those header bytes.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub fn bmp_encode(
  file_header: FileHeader, info_header: InfoHeader, bitmap: &Bitmap<BGR8>,
) -> Result<Vec<u8>, BmpError> {
  let pixel_bytes = bmp_pixel_data_bytes(bitmap)?;
  let offset = usize::try_from(file_header.pixel_data_offset)?;
  let end = offset.checked_add(pixel_bytes.len()).ok_or(BmpError::DimensionsTooLarge)?;
  let mut out = Vec::new();
  out.try_reserve_exact(end.max(HEADERS_SIZE))?;
  out.extend_from_slice(&bmp_header_bytes(file_header, info_header));
  if out.len() < end {
    out.resize(end, 0);
  }
  out[offset..end].copy_from_slice(&pixel_bytes);
  Ok(out)
}
