use std::io;
use std::io::SeekFrom::{Current, Start};
use std::io::{Read, Seek};

use super::data::WaveData;
use super::descriptor::WaveDescriptor;
use super::endian::Endianness;
use super::errors::Error;
use super::fmt::WaveFormat;
use super::fourcc::{FourCC, ReadFourCC, DATA_SIG, FMT__SIG};
use super::pcm_type::PcmType;

/// Parse progress notifications.
///
/// A [`Parser`] emits one event per step; the decoded chunk payloads ride
/// along on the events that produced them.
#[derive(Debug)]
pub enum Event {
    StartParse,
    ReadDescriptor {
        descriptor: WaveDescriptor,
    },
    ReadFormat {
        format: WaveFormat,
        pcm_type: PcmType,
    },
    ReadData {
        data: WaveData,
    },
    SkippedChunk {
        signature: FourCC,
        length: u32,
    },
    Failed {
        error: Error,
    },
    FinishParse,
}

#[derive(Debug)]
enum State {
    New,
    ReadyForDescriptor,
    ReadyForChunk {
        endianness: Endianness,
        found_fmt: bool,
        found_data: bool,
    },
    Error,
    Complete,
}

/// Streaming scanner over the chunk sequence of a wave file.
///
/// The scanner dispatches the first `fmt ` and the first `data` chunk to
/// their readers and seeks past everything else by its declared size. A
/// second occurrence of either tag counts as an unrecognized chunk. The
/// scan ends when both chunks are in hand, or with a terminal error when
/// the stream runs out or a chunk header is corrupt.
pub struct Parser<R: Read + Seek> {
    stream: R,
    state: State,
}

impl<R: Read + Seek> Parser<R> {
    /// Wrap a stream, rewinding it to the start of the descriptor.
    pub fn make(stream: R) -> Result<Self, Error> {
        let mut the_stream = stream;
        the_stream.seek(Start(0)).map_err(Error::FileError)?;
        Ok(Parser {
            stream: the_stream,
            state: State::New,
        })
    }
}

impl<R: Read + Seek> Iterator for Parser<R> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        let (event, next_state) = self.advance();
        self.state = next_state;
        event
    }
}

impl<R: Read + Seek> Parser<R> {
    fn parse_descriptor(&mut self) -> Result<(Event, State), Error> {
        let descriptor = WaveDescriptor::read(&mut self.stream)?;

        let next_state = State::ReadyForChunk {
            endianness: descriptor.endianness(),
            found_fmt: false,
            found_data: false,
        };

        Ok((Event::ReadDescriptor { descriptor }, next_state))
    }

    fn enter_chunk(
        &mut self,
        endianness: Endianness,
        found_fmt: bool,
        found_data: bool,
    ) -> Result<(Event, State), Error> {
        if found_fmt && found_data {
            return Ok((Event::FinishParse, State::Complete));
        }

        let signature = match self.stream.read_fourcc() {
            Ok(signature) => signature,
            Err(e) => return Err(exhausted_error(e, found_fmt)),
        };

        if signature == FMT__SIG && !found_fmt {
            let (format, pcm_type) = WaveFormat::read(&mut self.stream, endianness)?;
            let state = State::ReadyForChunk {
                endianness,
                found_fmt: true,
                found_data,
            };
            Ok((Event::ReadFormat { format, pcm_type }, state))
        } else if signature == DATA_SIG && !found_data {
            let data = WaveData::read(&mut self.stream, endianness)?;
            let state = State::ReadyForChunk {
                endianness,
                found_fmt,
                found_data: true,
            };
            Ok((Event::ReadData { data }, state))
        } else {
            // unrecognized chunk, seek past its declared payload; a zero
            // size here is corruption, not a benign empty chunk
            let length = endianness
                .read_u32(&mut self.stream)
                .map_err(|_| Error::InvalidWaveFormat)?;
            if length == 0 {
                return Err(Error::InvalidWaveFormat);
            }

            self.stream
                .seek(Current(length as i64))
                .map_err(|_| Error::InvalidWaveFormat)?;

            let state = State::ReadyForChunk {
                endianness,
                found_fmt,
                found_data,
            };
            Ok((Event::SkippedChunk { signature, length }, state))
        }
    }

    fn handle_state(&mut self) -> Result<(Option<Event>, State), Error> {
        match self.state {
            State::New => Ok((Some(Event::StartParse), State::ReadyForDescriptor)),
            State::ReadyForDescriptor => {
                let (event, state) = self.parse_descriptor()?;
                Ok((Some(event), state))
            }
            State::ReadyForChunk {
                endianness,
                found_fmt,
                found_data,
            } => {
                let (event, state) = self.enter_chunk(endianness, found_fmt, found_data)?;
                Ok((Some(event), state))
            }
            State::Error => Ok((Some(Event::FinishParse), State::Complete)),
            State::Complete => Ok((None, State::Complete)),
        }
    }

    fn advance(&mut self) -> (Option<Event>, State) {
        match self.handle_state() {
            Ok((event, state)) => (event, state),
            Err(error) => (Some(Event::Failed { error }), State::Error),
        }
    }
}

// A clean end-of-stream at a tag boundary means the file simply never
// contained the chunk still being looked for; anything else is corruption.
fn exhausted_error(e: io::Error, found_fmt: bool) -> Error {
    if e.kind() != io::ErrorKind::UnexpectedEof {
        Error::InvalidWaveFormat
    } else if !found_fmt {
        Error::ChunkFormatNotFound
    } else {
        Error::ChunkDataNotFound
    }
}
