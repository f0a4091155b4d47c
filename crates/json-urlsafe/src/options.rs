//! Codec configuration.

/// Default ceiling on inflated payload size (1 MiB).
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 1024 * 1024;

/// Default zlib compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Options for [`Codec`](crate::Codec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Largest payload, in bytes, that decoding will inflate. Default is 1 MiB.
    pub max_decompressed_size: usize,
    /// zlib level from 0 (store) to 9 (best). Default is 6.
    pub compression_level: u32,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl CodecOptions {
    /// Sets the inflate ceiling; a payload of exactly `limit` bytes still decodes.
    pub fn with_max_decompressed_size(mut self, limit: usize) -> Self {
        self.max_decompressed_size = limit;
        self
    }

    /// Levels above 9 are clamped to 9.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    pub(crate) fn compression(&self) -> flate2::Compression {
        flate2::Compression::new(self.compression_level.min(9))
    }
}
