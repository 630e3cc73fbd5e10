use std::io;
use std::io::{Read, Write};

use super::endian::Endianness;
use super::errors::Error;
use super::fourcc::{FourCC, ReadFourCC, WriteFourCC, RIFF_SIG, RIFX_SIG, WAVE_SIG};

/// The 12-byte chunk descriptor at the head of every wave file.
///
/// `RIFF` declares a little-endian file; `RIFX` declares that every
/// multi-byte field, sample payload included, is stored big-endian. The
/// form type must be `WAVE` in either case.
#[derive(Debug, Copy, Clone)]
pub struct WaveDescriptor {
    /// Container magic, `RIFF` or `RIFX`
    pub magic: FourCC,

    /// Declared size of the remainder of the file
    pub size: u32,

    /// Form type, always `WAVE`
    pub format: FourCC,
}

impl WaveDescriptor {
    /// Read and validate a descriptor from the head of `reader`.
    ///
    /// Advances the stream by exactly 12 bytes on success. Any failure,
    /// including a short read, aborts with the error for the field being
    /// read at the time.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let magic = reader
            .read_fourcc()
            .map_err(|_| Error::InvalidDescriptorId)?;

        if magic != RIFF_SIG && magic != RIFX_SIG {
            return Err(Error::InvalidDescriptorId);
        }

        // the size field is already subject to the RIFX byte order
        let endianness = endianness_for(magic);
        let size = endianness
            .read_u32(reader)
            .map_err(|_| Error::InvalidDescriptorSize)?;

        if size == 0 {
            return Err(Error::InvalidDescriptorSize);
        }

        let format = reader
            .read_fourcc()
            .map_err(|_| Error::InvalidDescriptorFormat)?;

        if format != WAVE_SIG {
            return Err(Error::InvalidDescriptorFormat);
        }

        Ok(WaveDescriptor {
            magic,
            size,
            format,
        })
    }

    /// Byte order declared by the descriptor magic.
    pub fn endianness(&self) -> Endianness {
        endianness_for(self.magic)
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), io::Error> {
        writer.write_fourcc(self.magic)?;
        self.endianness().write_u32(writer, self.size)?;
        writer.write_fourcc(self.format)
    }
}

fn endianness_for(magic: FourCC) -> Endianness {
    if magic == RIFX_SIG {
        Endianness::Big
    } else {
        Endianness::Little
    }
}
