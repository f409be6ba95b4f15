//! Pixel filters for [Bitmap] images.
//!
//! Grayscale and sepia work on each pixel alone, so they update the image in
//! place. Blur and edge detection look at each pixel's neighbors, so they read
//! from the untouched image and build a whole new one, which then replaces
//! the old image in a single assignment.
//!
//! None of this keeps any state between calls, filters can be applied in any
//! order and any number of times.

use crate::{Bitmap, BGR8};
use alloc::vec::Vec;

/// Picks one of the filters in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKind {
  /// See [grayscale]
  Grayscale,
  /// See [sepia]
  Sepia,
  /// See [blur]
  Blur,
  /// See [edge_detect]
  Edges,
}
impl FilterKind {
  /// All filters, in menu order.
  pub const ALL: [Self; 4] = [Self::Grayscale, Self::Sepia, Self::Blur, Self::Edges];

  /// A short human readable name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Grayscale => "Grayscale",
      Self::Sepia => "Sepia",
      Self::Blur => "Blur",
      Self::Edges => "Edge",
    }
  }
}

/// Applies the filter selected by `kind` to the whole image.
pub fn apply_filter(kind: FilterKind, bitmap: &mut Bitmap<BGR8>) {
  log::debug!("applying {} filter to {}x{} image", kind.name(), bitmap.width, bitmap.height);
  match kind {
    FilterKind::Grayscale => grayscale(bitmap),
    FilterKind::Sepia => sepia(bitmap),
    FilterKind::Blur => blur(bitmap),
    FilterKind::Edges => edge_detect(bitmap),
  }
  log::trace!("{} filter done", kind.name());
}

/// Sets all three channels to the (truncated) mean of the three channels.
#[inline]
#[must_use]
pub const fn grayscale_pixel(BGR8 { b, g, r }: BGR8) -> BGR8 {
  let sum = b as u16 + g as u16 + r as u16;
  BGR8::splat((sum / 3) as u8)
}

/// Converts every pixel with [grayscale_pixel].
pub fn grayscale(bitmap: &mut Bitmap<BGR8>) {
  bitmap.pixels.iter_mut().for_each(|px| *px = grayscale_pixel(*px));
}

/// Rounds a non-negative value to the nearest integer (halves go up) and
/// saturates at 255.
#[inline]
fn round_to_u8(value: f64) -> u8 {
  let rounded = (value + 0.5) as u32;
  rounded.min(255) as u8
}

/// The classic sepia tone matrix, each output channel is computed from the
/// original red, green, and blue of the pixel.
#[inline]
#[must_use]
pub fn sepia_pixel(BGR8 { b, g, r }: BGR8) -> BGR8 {
  let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
  BGR8 {
    b: round_to_u8(0.272 * r + 0.534 * g + 0.131 * b),
    g: round_to_u8(0.349 * r + 0.686 * g + 0.168 * b),
    r: round_to_u8(0.393 * r + 0.769 * g + 0.189 * b),
  }
}

/// Converts every pixel with [sepia_pixel].
pub fn sepia(bitmap: &mut Bitmap<BGR8>) {
  bitmap.pixels.iter_mut().for_each(|px| *px = sepia_pixel(*px));
}

/// Builds a new image of the same size by calling `op` for each position.
fn map_positions(
  src: &Bitmap<BGR8>, op: impl Fn(&Bitmap<BGR8>, u32, u32) -> BGR8,
) -> Bitmap<BGR8> {
  let mut pixels = Vec::with_capacity(src.pixels.len());
  for y in 0..src.height {
    for x in 0..src.width {
      pixels.push(op(src, x, y));
    }
  }
  Bitmap { width: src.width, height: src.height, pixels }
}

/// The 3x3 box blur of one position.
///
/// Only neighbors that are actually on the image count. A corner pixel is the
/// mean of 4 pixels, an edge pixel of 6, and an interior pixel of 9.
#[must_use]
pub fn box_blur_at(src: &Bitmap<BGR8>, x: u32, y: u32) -> BGR8 {
  let (x, y) = (i64::from(x), i64::from(y));
  let mut sums = [0_u32; 3];
  let mut count = 0_u32;
  for ny in (y - 1)..=(y + 1) {
    for nx in (x - 1)..=(x + 1) {
      if let Some(&BGR8 { b, g, r }) = src.get_signed(nx, ny) {
        sums[0] += u32::from(b);
        sums[1] += u32::from(g);
        sums[2] += u32::from(r);
        count += 1;
      }
    }
  }
  // the center is always on the image, so the count is at least 1
  let count = count.max(1);
  BGR8 { b: (sums[0] / count) as u8, g: (sums[1] / count) as u8, r: (sums[2] / count) as u8 }
}

/// A new image where every pixel is [box_blur_at] of the source.
#[must_use]
pub fn blurred(src: &Bitmap<BGR8>) -> Bitmap<BGR8> {
  map_positions(src, box_blur_at)
}

/// Replaces the image with its [blurred] form.
pub fn blur(bitmap: &mut Bitmap<BGR8>) {
  *bitmap = blurred(bitmap);
}

/// Sobel kernel for the horizontal gradient, indexed `[row][column]`.
pub const SOBEL_GX: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Sobel kernel for the vertical gradient, indexed `[row][column]`.
pub const SOBEL_GY: [[i32; 3]; 3] = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// `round(sqrt(n))`, computed exactly with integers.
#[inline]
#[must_use]
fn rounded_sqrt(n: u32) -> u32 {
  let s = n.isqrt();
  // sqrt(n) >= s + 0.5 exactly when n > s*s + s, for integer n
  if n > s * s + s {
    s + 1
  } else {
    s
  }
}

/// The Sobel gradient magnitude of one position, per channel.
///
/// Kernel row 0 lines up with `y - 1` and kernel column 0 with `x - 1`.
/// Neighbors off the image count as 0, their kernel weight is simply unused.
#[must_use]
pub fn sobel_at(src: &Bitmap<BGR8>, x: u32, y: u32) -> BGR8 {
  let (x, y) = (i64::from(x), i64::from(y));
  let mut gx = [0_i32; 3];
  let mut gy = [0_i32; 3];
  for (ky, ny) in ((y - 1)..=(y + 1)).enumerate() {
    for (kx, nx) in ((x - 1)..=(x + 1)).enumerate() {
      let Some(&BGR8 { b, g, r }) = src.get_signed(nx, ny) else { continue };
      for (c, v) in [b, g, r].into_iter().enumerate() {
        gx[c] += SOBEL_GX[ky][kx] * i32::from(v);
        gy[c] += SOBEL_GY[ky][kx] * i32::from(v);
      }
    }
  }
  let magnitude = |c: usize| -> u8 {
    let n = gx[c].unsigned_abs().pow(2) + gy[c].unsigned_abs().pow(2);
    rounded_sqrt(n).min(255) as u8
  };
  BGR8 { b: magnitude(0), g: magnitude(1), r: magnitude(2) }
}

/// A new image where every pixel is [sobel_at] of the source.
#[must_use]
pub fn edges(src: &Bitmap<BGR8>) -> Bitmap<BGR8> {
  map_positions(src, sobel_at)
}

/// Replaces the image with its [edges] form.
pub fn edge_detect(bitmap: &mut Bitmap<BGR8>) {
  *bitmap = edges(bitmap);
}
