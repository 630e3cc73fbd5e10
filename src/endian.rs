use std::io;
use std::io::{Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

/// Byte order of the multi-byte fields in a wave stream.
///
/// Standard `RIFF` files encode every integer field little-endian; `RIFX`
/// files encode them big-endian and additionally store the sample payload
/// big-endian. The value is derived once from the descriptor magic and
/// passed explicitly into every decode call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn read_u16<R: Read>(self, reader: &mut R) -> Result<u16, io::Error> {
        match self {
            Endianness::Little => reader.read_u16::<LittleEndian>(),
            Endianness::Big => reader.read_u16::<BigEndian>(),
        }
    }

    pub fn read_u32<R: Read>(self, reader: &mut R) -> Result<u32, io::Error> {
        match self {
            Endianness::Little => reader.read_u32::<LittleEndian>(),
            Endianness::Big => reader.read_u32::<BigEndian>(),
        }
    }

    pub fn write_u16<W: Write>(self, writer: &mut W, value: u16) -> Result<(), io::Error> {
        match self {
            Endianness::Little => writer.write_u16::<LittleEndian>(value),
            Endianness::Big => writer.write_u16::<BigEndian>(value),
        }
    }

    pub fn write_u32<W: Write>(self, writer: &mut W, value: u32) -> Result<(), io::Error> {
        match self {
            Endianness::Little => writer.write_u32::<LittleEndian>(value),
            Endianness::Big => writer.write_u32::<BigEndian>(value),
        }
    }
}

/// Reverse the byte order of every `unit_size`-wide sample in `buffer`,
/// in place.
///
/// Reversal works on raw bytes, so float samples keep their bit pattern.
/// A trailing partial unit, possible when the declared length only meets
/// the legacy 2-byte modulus, is left untouched.
pub fn swap_units(buffer: &mut [u8], unit_size: usize) {
    if unit_size < 2 {
        return;
    }

    for unit in buffer.chunks_exact_mut(unit_size) {
        unit.reverse();
    }
}
