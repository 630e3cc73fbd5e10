use std::fs::File;
use std::io;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

use byteorder::{ByteOrder, NativeEndian};
use dasp_sample::Sample as _; // Expose to_sample()

use super::data::WaveData;
use super::descriptor::WaveDescriptor;
use super::endian::Endianness;
use super::errors::Error;
use super::fmt::WaveFormat;
use super::fourcc::{WriteFourCC, DATA_SIG, FMT__SIG};
use super::parser::{Event, Parser};
use super::pcm_type::PcmType;
use super::samples::{Sample, I24};

/// A fully parsed and validated wave file.
///
/// ```
/// use wavbuf::{WaveFile, PcmType};
///
/// let bytes: Vec<u8> = vec![
///     0x52, 0x49, 0x46, 0x46, 0x28, 0x00, 0x00, 0x00, // RIFF, size 40
///     0x57, 0x41, 0x56, 0x45, // WAVE
///     0x66, 0x6d, 0x74, 0x20, 0x10, 0x00, 0x00, 0x00, // fmt , size 16
///     0x01, 0x00, 0x01, 0x00, // integer PCM, mono
///     0x44, 0xAC, 0x00, 0x00, // 44100 Hz
///     0x88, 0x58, 0x01, 0x00, // 88200 bytes/sec
///     0x02, 0x00, 0x10, 0x00, // block align 2, 16 bits
///     0x64, 0x61, 0x74, 0x61, 0x04, 0x00, 0x00, 0x00, // data, size 4
///     0x01, 0x00, 0x02, 0x00,
/// ];
///
/// let w = WaveFile::read(std::io::Cursor::new(bytes)).unwrap();
/// assert_eq!(w.format.sample_rate, 44100);
/// assert_eq!(w.pcm_type(), PcmType::Signed16);
/// assert_eq!(w.samples::<i16>(), [1, 2]);
/// ```
///
/// The aggregate is constructed atomically: a caller either receives a
/// value whose every part passed validation, or an [`Error`] and nothing
/// else. Once returned it is immutable, and it owns its sample buffer
/// exclusively. Buffers allocated by a failed parse are dropped before
/// the error is returned.
#[derive(Debug)]
pub struct WaveFile {
    /// The RIFF/RIFX chunk descriptor
    pub descriptor: WaveDescriptor,

    /// The decoded `fmt ` chunk
    pub format: WaveFormat,

    pcm_type: PcmType,
    data: WaveData,
}

impl WaveFile {
    /// Parse the wave file at `path`.
    ///
    /// This is the top-level entry point. The path must be non-empty,
    /// must end in `.wav` or `.wave` (exact, case-sensitive suffix
    /// match), and must name a regular file; anything else is rejected
    /// before the file is opened.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(Error::InvalidValue);
        }

        if !is_wave_path(&path.to_string_lossy()) {
            return Err(Error::FileError(io::Error::new(
                io::ErrorKind::InvalidInput,
                "expected a path ending in .wav or .wave",
            )));
        }

        let metadata = std::fs::metadata(path).map_err(Error::FileError)?;
        if !metadata.is_file() {
            return Err(Error::FileError(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let f = File::open(path).map_err(Error::FileError)?;
        Self::read(BufReader::new(f))
    }

    /// Run the parse pipeline over any seekable stream positioned on a
    /// wave descriptor.
    ///
    /// The stream is scanned once; the descriptor, `fmt ` and `data`
    /// chunks are decoded, the payload length is checked against the
    /// sample unit size, and a big-endian (`RIFX`) payload is byte-swapped
    /// to host order in place.
    pub fn read<R: Read + Seek>(reader: R) -> Result<Self, Error> {
        let mut descriptor = None;
        let mut format_found = None;
        let mut data = None;

        for event in Parser::make(reader)? {
            match event {
                Event::ReadDescriptor { descriptor: d } => descriptor = Some(d),
                Event::ReadFormat { format, pcm_type } => format_found = Some((format, pcm_type)),
                Event::ReadData { data: d } => data = Some(d),
                Event::SkippedChunk { signature, length } => {
                    log::debug!("skipping unrecognized chunk {:?}, {} bytes", signature, length);
                }
                Event::Failed { error } => return Err(error),
                Event::StartParse | Event::FinishParse => {}
            }
        }

        // a drained event stream without a Failed event has produced all
        // three chunks
        let descriptor = descriptor.ok_or(Error::InvalidWaveFormat)?;
        let (format, pcm_type) = format_found.ok_or(Error::ChunkFormatNotFound)?;
        let mut data = data.ok_or(Error::ChunkDataNotFound)?;

        data.validate_alignment(pcm_type)?;

        if descriptor.endianness() == Endianness::Big {
            data.correct_endianness(pcm_type);
        }

        log::debug!(
            "parsed {:?} wave: {} Hz, {} channel(s), {} bytes of samples",
            pcm_type,
            format.sample_rate,
            format.channel_count,
            data.len()
        );

        Ok(WaveFile {
            descriptor,
            format,
            pcm_type,
            data,
        })
    }

    /// Sample encoding derived from the `fmt ` chunk.
    pub fn pcm_type(&self) -> PcmType {
        self.pcm_type
    }

    /// The validated, host-native sample payload.
    pub fn data(&self) -> &WaveData {
        &self.data
    }

    /// Count of single-channel sample values in the payload.
    pub fn sample_count(&self) -> usize {
        self.data.len() / self.pcm_type.unit_size()
    }

    /// Count of complete audio frames in the payload.
    pub fn frame_count(&self) -> u64 {
        self.data.len() as u64 / self.format.block_align as u64
    }

    /// Decode the payload into a vector of samples of type `S`.
    ///
    /// Conversion between encodings applies no dithering; if dithering is
    /// required it will need to be applied manually.
    pub fn samples<S: Sample>(&self) -> Vec<S> {
        use PcmType::*;

        let bytes = self.data.bytes();
        match self.pcm_type {
            Unsigned8 => bytes.iter().map(|b| b.to_sample()).collect(),
            Signed16 => bytes
                .chunks_exact(2)
                .map(|c| NativeEndian::read_i16(c).to_sample())
                .collect(),
            Signed24 => bytes
                .chunks_exact(3)
                .map(|c| I24::from(NativeEndian::read_i24(c)).to_sample())
                .collect(),
            Signed32 => bytes
                .chunks_exact(4)
                .map(|c| NativeEndian::read_i32(c).to_sample())
                .collect(),
            Float32 => bytes
                .chunks_exact(4)
                .map(|c| NativeEndian::read_f32(c).to_sample())
                .collect(),
            Float64 => bytes
                .chunks_exact(8)
                .map(|c| NativeEndian::read_f64(c).to_sample())
                .collect(),
        }
    }

    /// Free the sample buffer now instead of waiting for drop.
    ///
    /// Idempotent; calling it on an already-released value is a no-op.
    /// The descriptor and format metadata remain readable.
    pub fn release(&mut self) {
        self.data.release();
    }

    /// Re-serialize the descriptor, `fmt ` and `data` chunks with the
    /// byte order the descriptor declares.
    ///
    /// For a file that contained only those chunks this reproduces the
    /// original byte stream exactly, the RIFX payload flip included.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        let endianness = self.descriptor.endianness();

        self.descriptor.write(writer).map_err(Error::FileError)?;

        writer.write_fourcc(FMT__SIG).map_err(Error::FileError)?;
        self.format
            .write(writer, endianness)
            .map_err(Error::FileError)?;

        writer.write_fourcc(DATA_SIG).map_err(Error::FileError)?;
        self.data
            .write(writer, endianness, self.pcm_type)
            .map_err(Error::FileError)?;

        Ok(())
    }
}

// Exact suffix match, deliberately case-sensitive.
fn is_wave_path(path: &str) -> bool {
    path.ends_with(".wav") || path.ends_with(".wave")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_wave_file_success() {
        assert!(is_wave_path("sound.wav"));
        assert!(is_wave_path("sound.wave"));
        assert!(is_wave_path("dir.with.dots/sound.wav"));
    }

    #[test]
    fn test_is_wave_file_not_a_wav() {
        assert!(!is_wave_path("sound.mp3"));
        assert!(!is_wave_path("sound.wav.bak"));
        assert!(!is_wave_path("soundwav"));
    }

    #[test]
    fn test_is_wave_file_short() {
        assert!(!is_wave_path("a"));
        assert!(is_wave_path(".wav"));
    }

    #[test]
    fn test_is_wave_file_case_sensitive() {
        assert!(!is_wave_path("sound.WAV"));
        assert!(!is_wave_path("sound.Wave"));
    }
}
