#![forbid(unsafe_code)]

//! Provides the heap-allocated image type.

use alloc::vec::Vec;

use crate::{BmpError, BGR8};

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
///
/// You don't ever need to call this function yourself, but it's how
/// [Bitmap] converts 2d coordinates into index values within its pixel vector.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  (y as usize) * (width as usize) + (x as usize)
}

/// A direct-color image.
///
/// The pixels are stored row-major: all of row 0, then all of row 1, and so
/// on. Rows are kept in the order they were stored in the source file, so for
/// a bottom-up BMP row 0 is the bottom of the picture.
///
/// The fields are public, but if `pixels.len()` isn't `width * height` the
/// methods of this type might panic.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Bitmap<P = BGR8> {
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<P>,
}
impl<P: Clone + Default> Bitmap<P> {
  /// Makes a new bitmap with every pixel set to the default value.
  ///
  /// ## Failure
  /// * `width * height` overflowing `usize` gives
  ///   [DimensionsTooLarge](BmpError::DimensionsTooLarge).
  /// * The allocator refusing the request gives [Alloc](BmpError::Alloc).
  #[inline]
  pub fn try_new(width: u32, height: u32) -> Result<Self, BmpError> {
    let count = usize::try_from(width)?
      .checked_mul(usize::try_from(height)?)
      .ok_or(BmpError::DimensionsTooLarge)?;
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(count)?;
    pixels.resize(count, P::default());
    Ok(Self { width, height, pixels })
  }
}
impl<P> Bitmap<P> {
  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<&P> {
    if x < self.width && y < self.height {
      self.pixels.get(xy_width_to_index(x, y, self.width))
    } else {
      None
    }
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut P> {
    if x < self.width && y < self.height {
      self.pixels.get_mut(xy_width_to_index(x, y, self.width))
    } else {
      None
    }
  }

  /// Gets the pixel at a signed position, `None` if that's off the image.
  ///
  /// Neighborhood filters walk one step past every edge, this saves them from
  /// doing the sign checks over and over.
  #[inline]
  #[must_use]
  pub(crate) fn get_signed(&self, x: i64, y: i64) -> Option<&P> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    self.get(x, y)
  }

  /// Iterates the rows of the image, each row is `width` pixels long.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
    // a width of 0 would panic chunks_exact, and such an image has no pixels
    let w = (self.width as usize).max(1);
    self.pixels.chunks_exact(w).take(self.height as usize)
  }
}
