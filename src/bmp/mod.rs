#![forbid(unsafe_code)]

//! Module for Windows Bitmap files (BMP), 24 bits per pixel only.
//!
//! ## The Format
//!
//! Note: All multi-byte values in BMP are always little-endian encoded.
//!
//! * A bitmap file always starts with a "file header". This is always 14 bytes.
//!   * The tag `BM`.
//!   * A total size of the file.
//!   * 4 reserved bytes.
//!   * The position of the pixel data within the file.
//! * Next is an "info header". This crate only knows the 40 byte version, and
//!   reads exactly 40 bytes here whatever the header says its own size is.
//! * Next there **might** be a gap in the data. The offset of the pixel array
//!   was given in the file header, use that to skip past the gap (if any).
//! * Next there is the pixel array. Each pixel is `[b,g,r]` within `[u8; 3]`.
//!   Each row of pixels is followed by 0 to 3 zero bytes so that every row
//!   starts on a multiple of 4 bytes from the start of the pixel array.
//!
//! Rows are bottom-up when the height is positive and top-down when it's
//! negative. The [Bitmap](crate::Bitmap) you get from decoding keeps the rows
//! in storage order either way, and encoding writes them back in that same
//! order, so an unchanged image round-trips byte for byte.
//!
//! ## Trusting The Header
//!
//! Parsing the headers only checks the signature. Everything else is checked
//! at the point it's needed: the pixel decoder refuses a width that isn't
//! positive, a height of zero, and dimensions too big to address, before it
//! allocates anything.

use crate::BmpError;

mod raw_headers;
pub(crate) use raw_headers::*;

mod file_header;
pub use file_header::*;

mod info_header;
pub use info_header::*;

mod pixel_data;
pub use pixel_data::*;

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub mod io;

/// The number of bytes taken by both headers together.
pub const HEADERS_SIZE: usize = FileHeader::SIZE + InfoHeader::SIZE;

/// Parses both headers from the start of the file's bytes.
///
/// On success you also get the bytes that follow the info header.
#[inline]
pub fn bmp_try_headers(bytes: &[u8]) -> Result<(FileHeader, InfoHeader, &[u8]), BmpError> {
  let (file_header, rest) = FileHeader::try_from_bytes(bytes)?;
  let (info_header, rest) = InfoHeader::try_from_bytes(rest)?;
  log::trace!("{file_header:?}");
  log::trace!("{info_header:?}");
  info_header.warn_if_unusual();
  Ok((file_header, info_header, rest))
}

/// Serializes both headers, in file order.
#[inline]
#[must_use]
pub fn bmp_header_bytes(file_header: FileHeader, info_header: InfoHeader) -> [u8; HEADERS_SIZE] {
  let mut a = [0; HEADERS_SIZE];
  a[..FileHeader::SIZE].copy_from_slice(&<[u8; FileHeader::SIZE]>::from(file_header));
  a[FileHeader::SIZE..].copy_from_slice(&<[u8; InfoHeader::SIZE]>::from(info_header));
  a
}
