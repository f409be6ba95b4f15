#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for filtering 24-bit Windows Bitmap (BMP) images.
//!
//! The work is split into three layers:
//! * [bmp] parses and writes the fixed 54-byte header layout and translates
//!   the row-padded pixel region to and from a dense [Bitmap].
//! * [filtering] has the pixel transforms (grayscale, sepia, box blur, and
//!   Sobel edge detection). Every filter is a plain function of the current
//!   grid, so a caller can chain as many of them as it likes.
//! * With the `std` feature, [bmp::io] wraps all of that in a path based API
//!   for programs that just want to read a file, filter it, and save it.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod util;

pub mod pixels;
pub use pixels::*;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub mod image;
#[cfg(feature = "alloc")]
pub use image::Bitmap;

pub mod bmp;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub mod filtering;
#[cfg(feature = "alloc")]
pub use filtering::{apply_filter, FilterKind};
