use super::{hand_made_bmp, rand_bytes, temp_path};
use bmpfx::{
  bmp::{io::*, *},
  BmpError, BGR8,
};

fn sample_2x3() -> Vec<u8> {
  // width 2 needs 2 bytes of padding per row
  hand_made_bmp(
    2,
    3,
    &[
      &[[10, 20, 30], [40, 50, 60]],
      &[[70, 80, 90], [100, 110, 120]],
      &[[1, 2, 3], [4, 5, 6]],
    ],
  )
}

#[test]
fn test_bytes_round_trip_is_identical() {
  for bytes in [
    sample_2x3(),
    hand_made_bmp(1, 1, &[&[[7, 8, 9]]]),
    hand_made_bmp(
      3,
      -2,
      &[&[[1, 1, 1], [2, 2, 2], [3, 3, 3]], &[[4, 4, 4], [5, 5, 5], [6, 6, 6]]],
    ),
    hand_made_bmp(4, 1, &[&[[9, 9, 9], [8, 8, 8], [7, 7, 7], [6, 6, 6]]]),
  ] {
    let (fh, ih, _) = bmp_try_headers(&bytes).unwrap();
    let bitmap = bmp_try_pixels(&bytes, fh, ih).unwrap();
    assert_eq!(bmp_encode(fh, ih, &bitmap).unwrap(), bytes);
  }
}

#[test]
fn test_file_round_trip_is_identical() {
  let bytes = sample_2x3();
  let input = temp_path("round_trip_in.bmp");
  let output = temp_path("round_trip_out.bmp");
  std::fs::write(&input, &bytes).unwrap();
  let (fh, ih) = decode_headers(&input).unwrap();
  let bitmap = decode_pixels(&input, fh, ih).unwrap();
  encode(&output, fh, ih, &bitmap).unwrap();
  assert_eq!(std::fs::read(&output).unwrap(), bytes);
  let _ = std::fs::remove_file(input);
  let _ = std::fs::remove_file(output);
}

#[test]
fn test_pixels_decode_in_storage_order() {
  let bytes = sample_2x3();
  let (fh, ih, _) = bmp_try_headers(&bytes).unwrap();
  let bitmap = bmp_try_pixels(&bytes, fh, ih).unwrap();
  assert_eq!((bitmap.width, bitmap.height), (2, 3));
  assert_eq!(bitmap.get(0, 0), Some(&BGR8 { b: 10, g: 20, r: 30 }));
  assert_eq!(bitmap.get(1, 1), Some(&BGR8 { b: 100, g: 110, r: 120 }));
  assert_eq!(bitmap.get(1, 2), Some(&BGR8 { b: 4, g: 5, r: 6 }));
}

#[test]
fn test_negative_height_decodes_top_down_rows() {
  let rows: [&[[u8; 3]]; 4] = [
    &[[1, 1, 1], [2, 2, 2]],
    &[[3, 3, 3], [4, 4, 4]],
    &[[5, 5, 5], [6, 6, 6]],
    &[[7, 7, 7], [8, 8, 8]],
  ];
  let top_down = hand_made_bmp(2, -4, &rows);
  let bottom_up = hand_made_bmp(2, 4, &rows);
  let (fh, ih, _) = bmp_try_headers(&top_down).unwrap();
  assert_eq!(ih.height, -4);
  assert!(ih.origin_top_left());
  let a = bmp_try_pixels(&top_down, fh, ih).unwrap();
  let (fh2, ih2, _) = bmp_try_headers(&bottom_up).unwrap();
  let b = bmp_try_pixels(&bottom_up, fh2, ih2).unwrap();
  // same padding rules, same storage order
  assert_eq!(a.height, 4);
  assert_eq!(a.pixels, b.pixels);
  assert_eq!(a.get(0, 0), Some(&BGR8::splat(1)));
  assert_eq!(a.get(1, 3), Some(&BGR8::splat(8)));
  // and the stored height goes back out unchanged
  assert_eq!(bmp_encode(fh, ih, &a).unwrap(), top_down);
}

#[test]
fn test_final_row_padding_is_optional_when_reading() {
  let bytes = sample_2x3();
  let short = &bytes[..bytes.len() - 2];
  let (fh, ih, _) = bmp_try_headers(short).unwrap();
  let bitmap = bmp_try_pixels(short, fh, ih).unwrap();
  // the encoder always writes the final padding
  assert_eq!(bmp_encode(fh, ih, &bitmap).unwrap(), bytes);
  let shorter = &bytes[..bytes.len() - 3];
  assert_eq!(bmp_try_pixels(shorter, fh, ih), Err(BmpError::InsufficientBytes));
}

#[test]
fn test_padding_is_written_as_zero() {
  let bytes = sample_2x3();
  let (fh, ih, _) = bmp_try_headers(&bytes).unwrap();
  let mut dirty = bytes.clone();
  // garbage in the padding of the first two rows
  dirty[54 + 6] = 0xAA;
  dirty[54 + 7] = 0xBB;
  dirty[54 + 14] = 0xCC;
  let bitmap = bmp_try_pixels(&dirty, fh, ih).unwrap();
  assert_eq!(bmp_encode(fh, ih, &bitmap).unwrap(), bytes);
}

#[test]
fn test_pixel_data_offset_gap() {
  let mut bytes = sample_2x3();
  // move the pixel data 6 bytes further into the file
  bytes.splice(54..54, [0_u8; 6]);
  bytes[10..14].copy_from_slice(&60_u32.to_le_bytes());
  let (fh, ih, _) = bmp_try_headers(&bytes).unwrap();
  assert_eq!(fh.pixel_data_offset, 60);
  let bitmap = bmp_try_pixels(&bytes, fh, ih).unwrap();
  assert_eq!(bitmap.get(0, 0), Some(&BGR8 { b: 10, g: 20, r: 30 }));
  assert_eq!(bmp_encode(fh, ih, &bitmap).unwrap(), bytes);
}

#[test]
fn test_header_fields_pass_through() {
  let mut bytes = sample_2x3();
  // odd values in fields this crate doesn't care about
  bytes[2..6].copy_from_slice(&12345_u32.to_le_bytes());
  bytes[6..10].copy_from_slice(&0xDEAD_BEEF_u32.to_le_bytes());
  bytes[46..50].copy_from_slice(&77_u32.to_le_bytes());
  let (fh, ih, rest) = bmp_try_headers(&bytes).unwrap();
  assert_eq!(rest.len(), bytes.len() - HEADERS_SIZE);
  assert_eq!(fh.file_size, 12345);
  assert_eq!(fh.reserved, 0xDEAD_BEEF);
  assert_eq!(ih.colors_in_palette, 77);
  assert_eq!(ih.horizontal_resolution, 2835);
  assert_eq!(bmp_header_bytes(fh, ih), bytes[..HEADERS_SIZE]);
}

#[test]
fn test_signature_is_checked() {
  let mut bytes = sample_2x3();
  bytes[0..2].copy_from_slice(b"BA");
  let e = bmp_try_headers(&bytes).unwrap_err();
  assert_eq!(e, BmpError::ThisIsProbablyNotABmpFile);
  assert!(e.is_format_error());
  assert!(!e.is_io_error());
}

#[test]
fn test_truncated_headers() {
  let bytes = sample_2x3();
  for len in [0, 1, 13, 14, 30, 53] {
    let e = bmp_try_headers(&bytes[..len]).unwrap_err();
    assert_eq!(e, BmpError::InsufficientBytes, "len {len}");
    assert!(e.is_io_error());
  }
}

#[test]
fn test_bad_dimensions_are_format_errors() {
  let bytes = sample_2x3();
  let (fh, ih, _) = bmp_try_headers(&bytes).unwrap();
  for (width, height) in [(0, 3), (-2, 3), (2, 0)] {
    let ih = InfoHeader { width, height, ..ih };
    let e = bmp_try_pixels(&bytes, fh, ih).unwrap_err();
    assert_eq!(e, BmpError::WidthOrHeightZero);
    assert!(e.is_format_error());
  }
  // huge dimensions are noticed before anything is allocated
  let ih = InfoHeader { width: i32::MAX, height: i32::MIN, ..ih };
  assert!(bmp_try_pixels(&bytes, fh, ih).is_err());
}

#[test]
fn test_offset_past_the_end() {
  let bytes = sample_2x3();
  let (fh, ih, _) = bmp_try_headers(&bytes).unwrap();
  let fh = FileHeader { pixel_data_offset: 10_000, ..fh };
  assert_eq!(bmp_try_pixels(&bytes, fh, ih), Err(BmpError::InsufficientBytes));
}

#[test]
fn test_missing_file_is_io_error() {
  let e = decode_headers(temp_path("does_not_exist.bmp")).unwrap_err();
  assert_eq!(e, BmpError::Io(std::io::ErrorKind::NotFound));
  assert!(e.is_io_error());
}

#[test]
fn test_random_bytes_do_not_panic_decoder() {
  // even totally random data should never panic the decoder!
  for _ in 0..10 {
    let mut v = rand_bytes(1024);
    let _ = bmp_try_headers(&v);
    // give it a real signature so that it goes on to the pixels
    v[0..2].copy_from_slice(b"BM");
    if let Ok((fh, ih, _)) = bmp_try_headers(&v) {
      let _ = bmp_try_pixels(&v, fh, ih);
    }
  }
}
