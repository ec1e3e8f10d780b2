//! zlib stream made only of stored (uncompressed) deflate blocks.

use super::checksum::adler32;

/// CMF 0x78 (deflate, 32K window), FLG 0x01 (no dictionary, FCHECK so the
/// pair is a multiple of 31).
const ZLIB_HEADER: [u8; 2] = [0x78, 0x01];

/// Largest payload a stored block can carry.
pub const MAX_STORED_BLOCK: usize = 65535;

/// Wraps `data` in a zlib stream without compressing it.
///
/// Empty input still yields one final, empty stored block.
pub fn compress_stored(data: &[u8]) -> Vec<u8> {
    let blocks = data.len().div_ceil(MAX_STORED_BLOCK).max(1);
    let mut out = Vec::with_capacity(ZLIB_HEADER.len() + data.len() + blocks * 5 + 4);
    out.extend_from_slice(&ZLIB_HEADER);

    if data.is_empty() {
        write_stored_block(&mut out, &[], true);
    } else {
        let mut chunks = data.chunks(MAX_STORED_BLOCK).peekable();
        while let Some(chunk) = chunks.next() {
            write_stored_block(&mut out, chunk, chunks.peek().is_none());
        }
    }

    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

fn write_stored_block(out: &mut Vec<u8>, chunk: &[u8], is_final: bool) {
    // BTYPE 00 in bits 1-2, BFINAL in bit 0. The block header is byte aligned
    // because every preceding block ends on a byte boundary.
    out.push(u8::from(is_final));
    let len = chunk.len() as u16;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(chunk);
}
