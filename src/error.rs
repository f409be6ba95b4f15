use core::num::TryFromIntError;

/// An error from the `bmpfx` crate.
///
/// Every variant is either an I/O problem (the bytes aren't there, or the
/// operating system refused us) or a format problem (the bytes are there but
/// they don't describe an image we can work with). Use
/// [is_io_error](Self::is_io_error) and
/// [is_format_error](Self::is_format_error) to tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BmpError {
  /// The file doesn't start with `BM`.
  ThisIsProbablyNotABmpFile,

  /// The input ended before everything we needed was read.
  InsufficientBytes,

  /// The declared width is zero or negative, or the declared height is zero.
  WidthOrHeightZero,

  /// The declared dimensions don't fit in this platform's address space.
  DimensionsTooLarge,

  /// The allocator couldn't give us enough space.
  #[cfg(feature = "alloc")]
  Alloc,

  /// The operating system reported an error while reading or writing.
  #[cfg(feature = "std")]
  Io(std::io::ErrorKind),
}
impl BmpError {
  /// If this error means the data couldn't be read or written.
  #[inline]
  #[must_use]
  pub const fn is_io_error(self) -> bool {
    match self {
      Self::InsufficientBytes => true,
      #[cfg(feature = "std")]
      Self::Io(_) => true,
      _ => false,
    }
  }

  /// If this error means the data was read but isn't a usable bitmap.
  #[inline]
  #[must_use]
  pub const fn is_format_error(self) -> bool {
    matches!(
      self,
      Self::ThisIsProbablyNotABmpFile | Self::WidthOrHeightZero | Self::DimensionsTooLarge
    )
  }
}
#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for BmpError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
impl From<TryFromIntError> for BmpError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::DimensionsTooLarge
  }
}
#[cfg(feature = "std")]
impl From<std::io::Error> for BmpError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e.kind())
  }
}
