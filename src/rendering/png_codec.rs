//! PNG decode to greyscale and encode of annotated overlays.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use point_grid::{GrayImage, RgbImage};

use crate::error::ImageError;

/// Read a PNG file as 8-bit greyscale.
pub fn read_gray_png(path: &Path) -> Result<GrayImage, ImageError> {
    let file = File::open(path)?;
    decode_gray(BufReader::new(file))
}

/// Write an RGB overlay as an 8-bit RGB PNG, replacing any existing file.
pub fn write_rgb_png(path: &Path, image: &RgbImage) -> Result<(), ImageError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    encode_rgb(image, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Decode PNG data to 8-bit greyscale.
///
/// Palette, low bit depth and 16-bit images are normalised to 8 bits per
/// channel first. Alpha is dropped. Color images are reduced to luma with
/// Rec. 601 weights.
pub fn decode_gray<R: Read>(reader: R) -> Result<GrayImage, ImageError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != png::BitDepth::Eight {
        return Err(ImageError::UnsupportedLayout(format!(
            "bit depth {:?} after normalisation",
            bit_depth
        )));
    }

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];
    let (width, height) = (info.width as usize, info.height as usize);

    let luma = match color_type {
        png::ColorType::Grayscale => data.to_vec(),
        png::ColorType::GrayscaleAlpha => data.chunks_exact(2).map(|px| px[0]).collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|px| luma(px[0], px[1], px[2]))
            .collect(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|px| luma(px[0], px[1], px[2]))
            .collect(),
        png::ColorType::Indexed => {
            return Err(ImageError::UnsupportedLayout(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    Ok(GrayImage::new(width, height, luma)?)
}

/// Encode an RGB image as an 8-bit RGB PNG.
pub fn encode_rgb<W: Write>(image: &RgbImage, writer: W) -> Result<(), ImageError> {
    let mut encoder = png::Encoder::new(writer, image.width() as u32, image.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_bytes())?;
    writer.finish()?;
    Ok(())
}

/// Encode a greyscale image as an 8-bit greyscale PNG.
pub fn encode_gray<W: Write>(image: &GrayImage, writer: W) -> Result<(), ImageError> {
    let mut encoder = png::Encoder::new(writer, image.width() as u32, image.height() as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_bytes())?;
    writer.finish()?;
    Ok(())
}

/// Rec. 601 luma, rounded.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}
