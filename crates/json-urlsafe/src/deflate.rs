//! zlib compression and ceiling-bounded inflation.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::error::InflateError;

const INITIAL_INFLATE_CAPACITY: usize = 4 * 1024;

/// Compresses `data` into a complete zlib stream.
pub(crate) fn compress(data: &[u8], level: Compression) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 16), level);
    encoder.write_all(data)?;
    encoder.finish()
}

/// Inflates a zlib stream, refusing to produce more than `limit` bytes.
///
/// The output buffer never grows past `limit + 1` bytes, so a small input that
/// expands without bound is rejected after bounded work. Bytes following the
/// end of the zlib stream are ignored.
pub(crate) fn inflate(data: &[u8], limit: usize) -> Result<Vec<u8>, InflateError> {
    let hard_cap = limit.saturating_add(1);
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(INITIAL_INFLATE_CAPACITY.min(hard_cap));

    loop {
        if out.len() == out.capacity() {
            let grow = out.capacity().max(INITIAL_INFLATE_CAPACITY).min(hard_cap - out.len());
            out.reserve_exact(grow);
        }

        let total_in = inflater.total_in();
        let total_out = inflater.total_out();
        let consumed = usize::try_from(total_in).unwrap_or(data.len()).min(data.len());
        let status = inflater.decompress_vec(&data[consumed..], &mut out, FlushDecompress::None)?;

        if out.len() > limit {
            return Err(InflateError::TooLarge { limit });
        }

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() == total_in && inflater.total_out() == total_out;
                if stalled && out.len() < out.capacity() {
                    return Err(InflateError::Truncated);
                }
            }
        }
    }
}
