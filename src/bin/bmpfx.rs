use bmpfx::{
  apply_filter,
  bmp::{io::*, FileHeader, InfoHeader},
  Bitmap, BmpError, FilterKind,
};

use clap::Parser;
use log::LevelFilter;
use std::{
  io::{BufRead, Write},
  path::{Path, PathBuf},
  process::ExitCode,
};

/// Applies pixel filters to a 24-bit BMP image, saving after every choice.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
  /// The BMP file to read.
  input: PathBuf,

  /// Where the filtered image is saved.
  output: PathBuf,

  /// More logging: `-v` for debug, `-vv` for trace.
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}
impl Cli {
  fn log_level(&self) -> LevelFilter {
    match self.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    }
  }
}

/// One entry of the interactive filter menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
  /// Apply this filter, then save.
  Filter(FilterKind),
  /// Save one last time and stop.
  SaveAndExit,
}
impl MenuChoice {
  /// Filters are `1..=4` in [FilterKind::ALL] order.
  const SAVE_AND_EXIT_NUMBER: u32 = 5;

  const fn from_menu_number(n: u32) -> Option<Self> {
    Some(match n {
      1 => Self::Filter(FilterKind::Grayscale),
      2 => Self::Filter(FilterKind::Sepia),
      3 => Self::Filter(FilterKind::Blur),
      4 => Self::Filter(FilterKind::Edges),
      Self::SAVE_AND_EXIT_NUMBER => Self::SaveAndExit,
      _ => return None,
    })
  }

  /// Surrounding whitespace is ignored.
  fn parse(input: &str) -> Option<Self> {
    input.trim().parse::<u32>().ok().and_then(Self::from_menu_number)
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  env_logger::Builder::new().filter_level(cli.log_level()).init();
  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      log::error!("{e:?}");
      println!("{}", describe_error(e));
      ExitCode::FAILURE
    }
  }
}

fn describe_error(e: BmpError) -> &'static str {
  if e.is_format_error() {
    match e {
      BmpError::ThisIsProbablyNotABmpFile => "File is not a BMP image!",
      _ => "The BMP header describes an image that can't be decoded!",
    }
  } else if e.is_io_error() {
    "Failed to read or write the file!"
  } else {
    "Not enough memory for the image!"
  }
}

fn run(cli: &Cli) -> Result<(), BmpError> {
  let (file_header, info_header) = decode_headers(&cli.input)?;
  print_headers(&file_header, &info_header);
  let mut bitmap = decode_pixels(&cli.input, file_header, info_header)?;
  let session = Session { output: &cli.output, file_header, info_header };
  session.run(&mut std::io::stdin().lock(), &mut std::io::stdout().lock(), &mut bitmap)
}

/// Where and how each save of the session is written.
struct Session<'p> {
  output: &'p Path,
  file_header: FileHeader,
  info_header: InfoHeader,
}
impl Session<'_> {
  /// Shows the menu, then applies and saves choices read from `input` until
  /// the exit choice or the end of the input.
  fn run<R: BufRead, W: Write>(
    &self, input: &mut R, out: &mut W, bitmap: &mut Bitmap,
  ) -> Result<(), BmpError> {
    writeln!(out)?;
    for (i, kind) in FilterKind::ALL.into_iter().enumerate() {
      writeln!(out, "{}: \t {}", kind.name(), i + 1)?;
    }
    writeln!(out, "Exit: \t {}", MenuChoice::SAVE_AND_EXIT_NUMBER)?;
    writeln!(out)?;
    loop {
      let choice = next_choice(input, out)?;
      if let MenuChoice::Filter(kind) = choice {
        apply_filter(kind, bitmap);
      }
      encode(self.output, self.file_header, self.info_header, bitmap)?;
      writeln!(out, "Saved `{}`", self.output.display())?;
      if choice == MenuChoice::SaveAndExit {
        return Ok(());
      }
    }
  }
}

/// Prompts until a line names a menu entry. Lines that aren't UTF-8 are just
/// more wrong input.
fn next_choice<R: BufRead, W: Write>(
  input: &mut R, out: &mut W,
) -> Result<MenuChoice, BmpError> {
  let mut line = Vec::new();
  loop {
    write!(out, "Select filter: ")?;
    out.flush()?;
    line.clear();
    if input.read_until(b'\n', &mut line)? == 0 {
      // input closed, treat it like choosing to exit
      return Ok(MenuChoice::SaveAndExit);
    }
    match MenuChoice::parse(&String::from_utf8_lossy(&line)) {
      Some(choice) => return Ok(choice),
      None => writeln!(out, "Wrong input, try again!")?,
    }
  }
}

fn print_headers(file_header: &FileHeader, info_header: &InfoHeader) {
  println!("Header field: {:x}", u16::from_le_bytes(file_header.signature));
  println!("File size: {}", file_header.file_size);
  println!("Bitmap data address: {:x}", file_header.pixel_data_offset);
  println!("Header size: {}", info_header.header_size);
  println!("Width in pixel: {}", info_header.width);
  println!("Height in pixel: {}", info_header.height);
  println!("Color planes: {}", info_header.color_planes);
  println!("Bits per pixel: {}", info_header.bits_per_pixel);
  println!("Compression method: {}", info_header.compression);
  println!("Image size: {}", info_header.image_size);
  println!("Horizontal resolution: {}", info_header.horizontal_resolution);
  println!("Vertical resolution: {}", info_header.vertical_resolution);
  println!("Colors in palette: {}", info_header.colors_in_palette);
  println!("Important colors: {}", info_header.important_colors);
}
