//! PNG writer for 8-bit RGBA images.

use super::ImageError;
use super::checksum::Crc32;
use super::zlib::compress_stored;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;
const BYTES_PER_PIXEL: usize = 4;

/// Encodes a row-major RGBA buffer as a PNG file.
///
/// The output is always signature, IHDR, a single IDAT and IEND. Scanlines
/// use filter type 0 and the image data is stored uncompressed.
pub fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::Encoding(format!(
            "image dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }

    let stride = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| ImageError::Encoding("row size overflows".to_string()))?;
    let expected = stride
        .checked_mul(height as usize)
        .ok_or_else(|| ImageError::Encoding("image size overflows".to_string()))?;
    if pixels.len() != expected {
        return Err(ImageError::Encoding(format!(
            "pixel buffer holds {} bytes, expected {} for {}x{} RGBA",
            pixels.len(),
            expected,
            width,
            height
        )));
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);

    let idat = compress_stored(&scanlines(pixels, stride));

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + ihdr.len() + idat.len() + 3 * 12);
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr)?;
    write_chunk(&mut out, b"IDAT", &idat)?;
    write_chunk(&mut out, b"IEND", &[])?;
    Ok(out)
}

/// Prefixes every row with its filter-type byte.
fn scanlines(pixels: &[u8], stride: usize) -> Vec<u8> {
    let rows = pixels.len() / stride;
    let mut raw = Vec::with_capacity(rows * (stride + 1));
    for row in pixels.chunks_exact(stride) {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

/// Appends one chunk: length, type, data, CRC-32 of type and data.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) -> Result<(), ImageError> {
    let len = u32::try_from(data.len()).map_err(|_| {
        ImageError::Encoding(format!(
            "{} chunk of {} bytes exceeds the PNG length limit",
            String::from_utf8_lossy(chunk_type),
            data.len()
        ))
    })?;

    let mut crc = Crc32::new();
    crc.update(chunk_type);
    crc.update(data);

    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
    Ok(())
}
