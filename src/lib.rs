/*!
# wavbuf

RIFF/WAVE parser that loads a validated, host-native PCM sample buffer.

## Objectives

This package reads a whole wave file into memory in one pass, checking the
chunk layout, the sample encoding and the byte order as it goes, and hands
back the decoded sample payload together with its format metadata. It is
the file-reading half of an audio playback stack; queueing the buffer on
an output device is a job for another crate.

Wave features supported:

- Integer linear PCM (tag 0x0001) at 8, 16, 24 and 32 bits per sample
- IEEE float linear PCM (tag 0x0003) at 32 and 64 bits per sample
- `RIFX` (big-endian) files, with the sample payload byte-swapped to host
  order after validation
- Unknown chunks (`LIST`, `JUNK`, metadata of any stripe) skipped by their
  declared size

Things that are _not_ in the scope of this package:

- Broad codec support. There are a little more than one-hundred registered
  wave codecs; only the two linear PCM tags above are read.
- Playback transport, device enumeration, or timing.
- Streaming decode of files too large to hold in memory.

## Resources

### Implementation of Wave Files
- [Peter Kabal, McGill University](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/WAVE.html)
- [WAVE PCM soundfile format](http://soundfile.sapp.org/doc/WaveFormat/)
- [How wave files work](https://wavefilegem.com/how_wave_files_work.html)
- [Multimedia Programming Interface and Data Specifications 1.0](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/Docs/riffmci.pdf)
  (August 1991), IBM Corporation and Microsoft Corporation

### Implementation of Wave format `fmt` chunk
- [MSDN WAVEFORMATEX](https://docs.microsoft.com/en-us/windows/win32/api/mmeapi/ns-mmeapi-waveformatex)
*/

extern crate byteorder;
extern crate dasp_sample;

mod fourcc;
mod errors;
mod endian;
mod pcm_type;

mod parser;

mod descriptor;
mod fmt;
mod data;

mod samples;
mod wavefile;

pub use errors::Error;
pub use endian::Endianness;
pub use descriptor::WaveDescriptor;
pub use fmt::WaveFormat;
pub use pcm_type::PcmType;
pub use data::WaveData;
pub use samples::{Sample, I24};
pub use wavefile::WaveFile;
