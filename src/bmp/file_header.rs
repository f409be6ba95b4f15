use super::*;
use crate::util::*;

/// The signature at the start of every supported file, `b"BM"` read as a
/// little-endian `u16`.
pub const BMP_SIGNATURE: u16 = 0x4D42;

/// The header at the start of all BMP files.
///
/// Only the signature is checked when parsing. Every other field is kept
/// exactly as it was found and written back out the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FileHeader {
  /// The two signature bytes, `b"BM"` in any file this crate accepts.
  pub signature: [u8; 2],

  /// The total size of the file, as declared by the file.
  pub file_size: u32,

  /// Reserved, usually zero.
  pub reserved: u32,

  /// The byte index within the file where the pixel data starts.
  pub pixel_data_offset: u32,
}
impl From<BitmapFileHeader> for FileHeader {
  #[inline]
  fn from(raw: BitmapFileHeader) -> Self {
    Self {
      signature: raw.ty,
      file_size: raw.file_size.get(),
      reserved: raw.reserved.get(),
      pixel_data_offset: raw.bitmap_offset.get(),
    }
  }
}
impl From<FileHeader> for BitmapFileHeader {
  #[inline]
  fn from(h: FileHeader) -> Self {
    Self {
      ty: h.signature,
      file_size: h.file_size.into(),
      reserved: h.reserved.into(),
      bitmap_offset: h.pixel_data_offset.into(),
    }
  }
}
impl From<FileHeader> for [u8; 14] {
  #[inline]
  fn from(h: FileHeader) -> Self {
    bytemuck::cast(BitmapFileHeader::from(h))
  }
}
impl FileHeader {
  /// The number of bytes this header takes up in a file.
  pub const SIZE: usize = 14;

  /// If the signature is the one BMP signature this crate supports.
  #[inline]
  #[must_use]
  pub const fn has_bmp_signature(&self) -> bool {
    u16::from_le_bytes(self.signature) == BMP_SIGNATURE
  }

  /// Tries to get the file header and remaining bytes from the bytes of a BMP
  /// file.
  ///
  /// The bytes from here should be used to get the [InfoHeader].
  ///
  /// ## Failure
  /// * Less than 14 bytes: [InsufficientBytes](BmpError::InsufficientBytes)
  /// * Not starting with `BM`:
  ///   [ThisIsProbablyNotABmpFile](BmpError::ThisIsProbablyNotABmpFile)
  #[inline]
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), BmpError> {
    let (raw, rest) = try_pull_pod::<BitmapFileHeader>(bytes)?;
    let header = Self::from(raw);
    if header.has_bmp_signature() {
      Ok((header, rest))
    } else {
      Err(BmpError::ThisIsProbablyNotABmpFile)
    }
  }
}
