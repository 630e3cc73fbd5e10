use std::error::Error as StdError;
use std::{
    fmt::{Debug, Display},
    io,
};

/// Errors returned by methods in this crate.
///
/// Each validation point in the parse pipeline has its own kind; a parse
/// stops at the first failure and the caller never receives a partially
/// populated [`WaveFile`](super::WaveFile).
#[derive(Debug)]
pub enum Error {
    /// An input argument was empty or otherwise unusable
    InvalidValue,

    /// The path does not name a readable wave file, or opening it failed
    FileError(io::Error),

    /// The sample buffer could not be allocated
    Fail,

    /// The file does not begin with a `RIFF` or `RIFX` signature
    InvalidDescriptorId,

    /// The descriptor declares a zero chunk size, or the size field is
    /// truncated
    InvalidDescriptorSize,

    /// The descriptor form type is not `WAVE`
    InvalidDescriptorFormat,

    /// The chunk sequence is corrupt: a chunk header is truncated or an
    /// unrecognized chunk declares a zero size
    InvalidWaveFormat,

    /// The stream ended before a `fmt ` chunk was found
    ChunkFormatNotFound,

    /// The stream ended before a `data` chunk was found
    ChunkDataNotFound,

    /// The `fmt ` chunk declares a zero size, or its size field or
    /// extension trailer is truncated
    InvalidChunkFmtSize,

    /// The audio format code is not integer PCM (1) or IEEE float (3)
    InvalidChunkFmtAudioFormat,

    /// The channel count is zero or truncated
    InvalidChunkFmtChannels,

    /// The sample rate is zero or truncated
    InvalidChunkFmtSampleRate,

    /// The byte rate is zero or truncated
    InvalidChunkFmtByteRate,

    /// The block alignment is zero or truncated
    InvalidChunkFmtBlockAlign,

    /// The bits-per-sample value is truncated, or is not recognized for
    /// the declared audio format code
    InvalidChunkFmtBitsPerSample,

    /// The `data` chunk declares a zero size, or its size field is
    /// truncated
    InvalidChunkDataSize,

    /// The `data` payload is shorter than declared, or its length does not
    /// align to the sample unit size
    InvalidChunkDataData,
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}
