use std::io;
use std::io::SeekFrom::Current;
use std::io::{Read, Seek, Write};

use super::endian::Endianness;
use super::errors::Error;
use super::pcm_type::PcmType;

/// WAV file data format record.
///
/// The `fmt ` chunk describes the binary structure of the data chunk's
/// sample payload. Every multi-byte field is decoded with the byte order
/// the descriptor declared.
#[derive(Debug, Copy, Clone)]
pub struct WaveFormat {
    /// Declared size of the chunk payload, not counting the tag and the
    /// size field itself
    pub size: u32,

    /// Audio format code, stored as read.
    ///
    /// 1 is integer PCM and 3 is IEEE float; every other code is rejected
    /// during classification.
    pub audio_format: u16,

    /// Count of audio channels in each frame
    pub channel_count: u16,

    /// Sample rate of the audio data
    pub sample_rate: u32,

    /// Count of bytes per second
    ///
    /// By rule, this is `block_align * sample_rate`
    pub byte_rate: u32,

    /// Count of bytes per audio frame
    ///
    /// By rule, this is `channel_count * bits_per_sample / 8`
    pub block_align: u16,

    /// Count of bits stored in the file per sample
    pub bits_per_sample: u16,

    /// Size of the format extension, zero when the chunk carries none.
    ///
    /// PCM files normally have none; the field exists so chunks longer
    /// than 16 bytes are consumed in full instead of desynchronizing the
    /// chunk scan.
    pub extension_size: u16,
}

impl WaveFormat {
    /// Read and validate a `fmt ` chunk whose tag has already been
    /// consumed.
    ///
    /// Fields are read in wire order and each is validated as soon as it
    /// is decoded, so a failure reports the exact field at fault. The
    /// audio format code is the exception: it is stored raw and judged
    /// together with bits-per-sample by [`PcmType::classify`].
    pub fn read<R: Read + Seek>(
        reader: &mut R,
        endianness: Endianness,
    ) -> Result<(Self, PcmType), Error> {
        let size = endianness
            .read_u32(reader)
            .map_err(|_| Error::InvalidChunkFmtSize)?;
        if size == 0 {
            return Err(Error::InvalidChunkFmtSize);
        }

        let audio_format = endianness
            .read_u16(reader)
            .map_err(|_| Error::InvalidChunkFmtAudioFormat)?;

        let channel_count = endianness
            .read_u16(reader)
            .map_err(|_| Error::InvalidChunkFmtChannels)?;
        if channel_count == 0 {
            return Err(Error::InvalidChunkFmtChannels);
        }

        let sample_rate = endianness
            .read_u32(reader)
            .map_err(|_| Error::InvalidChunkFmtSampleRate)?;
        if sample_rate == 0 {
            return Err(Error::InvalidChunkFmtSampleRate);
        }

        let byte_rate = endianness
            .read_u32(reader)
            .map_err(|_| Error::InvalidChunkFmtByteRate)?;
        if byte_rate == 0 {
            return Err(Error::InvalidChunkFmtByteRate);
        }

        let block_align = endianness
            .read_u16(reader)
            .map_err(|_| Error::InvalidChunkFmtBlockAlign)?;
        if block_align == 0 {
            return Err(Error::InvalidChunkFmtBlockAlign);
        }

        let bits_per_sample = endianness
            .read_u16(reader)
            .map_err(|_| Error::InvalidChunkFmtBitsPerSample)?;

        // Chunks longer than the 16 canonical bytes carry an extension
        // size field and possibly extension bytes; consume everything the
        // size field declared.
        let mut extension_size: u16 = 0;
        if size > 16 {
            if size >= 18 {
                extension_size = endianness
                    .read_u16(reader)
                    .map_err(|_| Error::InvalidChunkFmtSize)?;
                reader
                    .seek(Current((size - 18) as i64))
                    .map_err(|_| Error::InvalidChunkFmtSize)?;
            } else {
                reader
                    .seek(Current((size - 16) as i64))
                    .map_err(|_| Error::InvalidChunkFmtSize)?;
            }
        }

        let pcm_type = PcmType::classify(audio_format, bits_per_sample)?;

        Ok((
            WaveFormat {
                size,
                audio_format,
                channel_count,
                sample_rate,
                byte_rate,
                block_align,
                bits_per_sample,
                extension_size,
            },
            pcm_type,
        ))
    }

    /// Write back everything [`read`](Self::read) consumed, size field
    /// included, re-encoded with the given byte order.
    ///
    /// Extension bytes beyond the extension size field are not retained
    /// by `read` and are written back as zeroes.
    pub fn write<W: Write>(&self, writer: &mut W, endianness: Endianness) -> Result<(), io::Error> {
        endianness.write_u32(writer, self.size)?;
        endianness.write_u16(writer, self.audio_format)?;
        endianness.write_u16(writer, self.channel_count)?;
        endianness.write_u32(writer, self.sample_rate)?;
        endianness.write_u32(writer, self.byte_rate)?;
        endianness.write_u16(writer, self.block_align)?;
        endianness.write_u16(writer, self.bits_per_sample)?;

        if self.size >= 18 {
            endianness.write_u16(writer, self.extension_size)?;
            writer.write_all(&vec![0u8; (self.size - 18) as usize])?;
        } else if self.size > 16 {
            writer.write_all(&vec![0u8; (self.size - 16) as usize])?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn canonical_fmt() -> Vec<u8> {
        let mut bytes = vec![];
        bytes.extend_from_slice(&16u32.to_le_bytes()); // size
        bytes.extend_from_slice(&1u16.to_le_bytes()); // audio format
        bytes.extend_from_slice(&1u16.to_le_bytes()); // channels
        bytes.extend_from_slice(&44100u32.to_le_bytes()); // sample rate
        bytes.extend_from_slice(&88200u32.to_le_bytes()); // byte rate
        bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
        bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
        bytes
    }

    #[test]
    fn test_read_canonical() {
        let mut c = Cursor::new(canonical_fmt());
        let (format, pcm_type) = WaveFormat::read(&mut c, Endianness::Little).unwrap();

        assert_eq!(format.size, 16);
        assert_eq!(format.audio_format, 1);
        assert_eq!(format.channel_count, 1);
        assert_eq!(format.sample_rate, 44100);
        assert_eq!(format.byte_rate, 88200);
        assert_eq!(format.block_align, 2);
        assert_eq!(format.bits_per_sample, 16);
        assert_eq!(format.extension_size, 0);
        assert_eq!(pcm_type, PcmType::Signed16);
    }

    #[test]
    fn test_zero_fields_report_the_field() {
        let mut cases: Vec<(usize, Error)> = vec![];
        cases.push((0, Error::InvalidChunkFmtSize)); // size
        cases.push((6, Error::InvalidChunkFmtChannels)); // channels
        cases.push((8, Error::InvalidChunkFmtSampleRate)); // sample rate
        cases.push((12, Error::InvalidChunkFmtByteRate)); // byte rate
        cases.push((16, Error::InvalidChunkFmtBlockAlign)); // block align

        for (offset, expected) in cases.drain(..) {
            let mut bytes = canonical_fmt();
            let width = match offset {
                0 | 8 | 12 => 4,
                _ => 2,
            };
            for b in bytes[offset..offset + width].iter_mut() {
                *b = 0;
            }

            let mut c = Cursor::new(bytes);
            let result = WaveFormat::read(&mut c, Endianness::Little);
            match result {
                Err(e) => assert_eq!(
                    std::mem::discriminant(&e),
                    std::mem::discriminant(&expected)
                ),
                Ok(_) => panic!("zeroed field at {} did not fail", offset),
            }
        }
    }

    #[test]
    fn test_truncated_chunk() {
        let mut bytes = canonical_fmt();
        bytes.truncate(10);
        let mut c = Cursor::new(bytes);
        match WaveFormat::read(&mut c, Endianness::Little) {
            Err(Error::InvalidChunkFmtSampleRate) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_extended_chunk_consumed_in_full() {
        let mut bytes = canonical_fmt();
        bytes[0] = 18; // declared size now includes the extension field
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(b"next");

        let mut c = Cursor::new(bytes);
        let (format, _) = WaveFormat::read(&mut c, Endianness::Little).unwrap();
        assert_eq!(format.extension_size, 0);

        // reader must now sit exactly at the trailing marker
        use crate::fourcc::{FourCC, ReadFourCC};
        assert_eq!(c.read_fourcc().unwrap(), FourCC::make(b"next"));
    }

    #[test]
    fn test_big_endian_fields() {
        let mut bytes = vec![];
        bytes.extend_from_slice(&16u32.to_be_bytes());
        bytes.extend_from_slice(&3u16.to_be_bytes());
        bytes.extend_from_slice(&2u16.to_be_bytes());
        bytes.extend_from_slice(&48000u32.to_be_bytes());
        bytes.extend_from_slice(&384000u32.to_be_bytes());
        bytes.extend_from_slice(&8u16.to_be_bytes());
        bytes.extend_from_slice(&32u16.to_be_bytes());

        let mut c = Cursor::new(bytes);
        let (format, pcm_type) = WaveFormat::read(&mut c, Endianness::Big).unwrap();
        assert_eq!(format.sample_rate, 48000);
        assert_eq!(format.channel_count, 2);
        assert_eq!(pcm_type, PcmType::Float32);
    }

    #[test]
    fn test_write_round_trip() {
        let source = canonical_fmt();
        let (format, _) =
            WaveFormat::read(&mut Cursor::new(source.clone()), Endianness::Little).unwrap();

        let mut out: Vec<u8> = vec![];
        format.write(&mut out, Endianness::Little).unwrap();
        assert_eq!(out, source);
    }
}
