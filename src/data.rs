use std::io;
use std::io::{Read, Write};

use super::endian::{self, Endianness};
use super::errors::Error;
use super::pcm_type::PcmType;

/// The sample payload of a wave file.
///
/// The buffer is owned exclusively and sized exactly to the declared
/// chunk length. At read time it holds the bytes as they appeared on
/// disk; after the endianness pass it is host-native and ready to hand to
/// an audio backend.
#[derive(Debug)]
pub struct WaveData {
    /// Declared byte length of the payload
    pub size: u32,

    bytes: Vec<u8>,
}

impl WaveData {
    /// Read a `data` chunk whose tag has already been consumed.
    ///
    /// The payload is stored as opaque bytes; sample-width interpretation
    /// happens in the later validation and endianness stages.
    pub fn read<R: Read>(reader: &mut R, endianness: Endianness) -> Result<Self, Error> {
        let size = endianness
            .read_u32(reader)
            .map_err(|_| Error::InvalidChunkDataSize)?;
        if size == 0 {
            return Err(Error::InvalidChunkDataSize);
        }

        let mut bytes: Vec<u8> = Vec::new();
        bytes
            .try_reserve_exact(size as usize)
            .map_err(|_| Error::Fail)?;
        bytes.resize(size as usize, 0);

        reader
            .read_exact(&mut bytes)
            .map_err(|_| Error::InvalidChunkDataData)?;

        Ok(WaveData { size, bytes })
    }

    /// The sample payload.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check the payload length against the sample unit implied by
    /// `pcm_type`.
    ///
    /// 24-bit payloads must divide evenly by 3; every other encoding is
    /// checked against a 2-byte modulus.
    pub fn validate_alignment(&self, pcm_type: PcmType) -> Result<(), Error> {
        if self.size % pcm_type.alignment_modulus() != 0 {
            return Err(Error::InvalidChunkDataData);
        }
        Ok(())
    }

    /// Byte-swap every sample in place, converting a big-endian payload
    /// to host order. Runs once, after all other validation.
    pub(crate) fn correct_endianness(&mut self, pcm_type: PcmType) {
        endian::swap_units(&mut self.bytes, pcm_type.unit_size());
    }

    /// Drop the payload buffer, leaving the chunk empty. Idempotent.
    pub(crate) fn release(&mut self) {
        self.bytes = Vec::new();
    }

    /// Write back everything [`read`](Self::read) consumed, re-encoded
    /// with the given byte order. A big-endian target gets each sample's
    /// bytes flipped back on the way out; the in-memory buffer is not
    /// disturbed.
    pub fn write<W: Write>(
        &self,
        writer: &mut W,
        endianness: Endianness,
        pcm_type: PcmType,
    ) -> Result<(), io::Error> {
        endianness.write_u32(writer, self.size)?;

        let unit_size = pcm_type.unit_size();
        if endianness == Endianness::Big && unit_size > 1 {
            let mut unit = [0u8; 8];
            for sample in self.bytes.chunks_exact(unit_size) {
                for (slot, byte) in unit.iter_mut().zip(sample.iter().rev()) {
                    *slot = *byte;
                }
                writer.write_all(&unit[..unit_size])?;
            }
        } else {
            writer.write_all(&self.bytes)?;
        }

        Ok(())
    }
}
