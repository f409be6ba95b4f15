//! Reading and writing BMP data through `std::io` streams and file paths.
//!
//! These are the calls a program makes: [decode_headers], [decode_pixels],
//! filter the [Bitmap] however it likes, then [encode]. Each path based call
//! opens the file itself and closes it before returning.

use super::*;
use crate::{Bitmap, BGR8};
use std::{
  fs::File,
  io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write},
  path::Path,
};

/// Reads the file header, checks the signature, then reads the info header.
///
/// The signature is checked before anything else is read, so a file that
/// isn't a BMP at all is reported as such even if it's very short.
pub fn read_headers<R: Read>(r: &mut R) -> Result<(FileHeader, InfoHeader), BmpError> {
  let mut a = [0_u8; FileHeader::SIZE];
  r.read_exact(&mut a)?;
  let (file_header, _) = FileHeader::try_from_bytes(&a)?;
  let mut a = [0_u8; InfoHeader::SIZE];
  r.read_exact(&mut a)?;
  let (info_header, _) = InfoHeader::try_from_bytes(&a)?;
  log::trace!("{file_header:?}");
  log::trace!("{info_header:?}");
  info_header.warn_if_unusual();
  Ok((file_header, info_header))
}

/// Writes both headers, in file order, exactly as given.
pub fn write_headers<W: Write>(
  w: &mut W, file_header: FileHeader, info_header: InfoHeader,
) -> Result<(), BmpError> {
  w.write_all(&bmp_header_bytes(file_header, info_header))?;
  Ok(())
}

struct ReadSource<'r, R>(&'r mut R);
impl<R: Read> PixelSource for ReadSource<'_, R> {
  type Error = std::io::Error;

  #[inline]
  fn skip(&mut self, count: usize) -> Result<(), Self::Error> {
    // padding is never more than 3 bytes
    let mut scratch = [0_u8; 3];
    self.0.read_exact(&mut scratch[..count])
  }

  #[inline]
  fn fill(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
    self.0.read_exact(buf)
  }
}

/// Reads the pixel data that the headers describe.
///
/// The stream is positioned at `file_header.pixel_data_offset` first, and its
/// length is checked against the dimensions before the grid is allocated.
///
/// ## Failure
/// * Unusable dimensions, see [InfoHeader::grid_dimensions].
/// * The stream being too short:
///   [InsufficientBytes](BmpError::InsufficientBytes).
/// * Any other I/O error: [Io](BmpError::Io).
pub fn read_pixels<R: Read + Seek>(
  r: &mut R, file_header: FileHeader, info_header: InfoHeader,
) -> Result<Bitmap<BGR8>, BmpError> {
  let (width, height) = info_header.grid_dimensions()?;
  let offset = u64::from(file_header.pixel_data_offset);
  let stream_len = r.seek(SeekFrom::End(0))?;
  let available = stream_len.saturating_sub(offset);
  let needed = bmp_min_pixel_data_len(width, height)?;
  if available < u64::try_from(needed)? {
    log::trace!("pixel data needs {needed} bytes, only {available} are present");
    return Err(BmpError::InsufficientBytes);
  }
  r.seek(SeekFrom::Start(offset))?;
  let mut bitmap = Bitmap::try_new(width, height)?;
  bmp_fill_rows(&mut bitmap, &mut ReadSource(r))?;
  log::trace!("decoded {width}x{height} pixels from offset {offset}");
  Ok(bitmap)
}

/// Writes the pixel rows starting at `pixel_data_offset`.
///
/// Padding goes before every row after the first and once more after the last
/// row. Seeking past the end of a file and then writing fills the gap with
/// zeros.
pub fn write_pixels<W: Write + Seek>(
  w: &mut W, pixel_data_offset: u32, bitmap: &Bitmap<BGR8>,
) -> Result<(), BmpError> {
  w.seek(SeekFrom::Start(u64::from(pixel_data_offset)))?;
  bmp_for_each_chunk(bitmap, |bytes| w.write_all(bytes))?;
  Ok(())
}

/// Opens the file and reads its headers.
pub fn decode_headers(path: impl AsRef<Path>) -> Result<(FileHeader, InfoHeader), BmpError> {
  let mut r = BufReader::new(File::open(path)?);
  read_headers(&mut r)
}

/// Opens the file and reads the pixel data that the headers describe.
pub fn decode_pixels(
  path: impl AsRef<Path>, file_header: FileHeader, info_header: InfoHeader,
) -> Result<Bitmap<BGR8>, BmpError> {
  let mut r = BufReader::new(File::open(path)?);
  read_pixels(&mut r, file_header, info_header)
}

/// Creates (or truncates) the file and writes a complete BMP into it.
///
/// If this fails partway through the file is left however far it got. Write
/// to a temporary path and rename it if you need all-or-nothing.
pub fn encode(
  path: impl AsRef<Path>, file_header: FileHeader, info_header: InfoHeader,
  bitmap: &Bitmap<BGR8>,
) -> Result<(), BmpError> {
  let path = path.as_ref();
  let mut w = BufWriter::new(File::create(path)?);
  write_headers(&mut w, file_header, info_header)?;
  write_pixels(&mut w, file_header.pixel_data_offset, bitmap)?;
  w.flush()?;
  log::debug!("saved {}x{} image to `{}`", bitmap.width, bitmap.height, path.display());
  Ok(())
}
