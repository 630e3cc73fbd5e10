extern crate wavbuf;

use std::fs;
use std::io::Write;

use wavbuf::{Error, PcmType, WaveFile};

fn minimal_wave_bytes() -> Vec<u8> {
    vec![
        b'R', b'I', b'F', b'F', 24, 0, 0, 0, b'W', b'A', b'V', b'E', //
        b'f', b'm', b't', b' ', 16, 0, 0, 0, //
        1, 0, 1, 0, //
        0x44, 0xAC, 0, 0, //
        0x88, 0x58, 1, 0, //
        2, 0, 16, 0, //
        b'd', b'a', b't', b'a', 4, 0, 0, 0, //
        0x01, 0x00, 0x02, 0x00,
    ]
}

#[test]
fn test_parse_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");

    let mut f = fs::File::create(&path).unwrap();
    f.write_all(&minimal_wave_bytes()).unwrap();
    drop(f);

    let w = WaveFile::parse(&path).unwrap();
    assert_eq!(w.pcm_type(), PcmType::Signed16);
    assert_eq!(w.samples::<i16>(), [1, 2]);
}

#[test]
fn test_wave_suffix_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wave");

    fs::write(&path, minimal_wave_bytes()).unwrap();
    assert!(WaveFile::parse(&path).is_ok());
}

#[test]
fn test_empty_path() {
    match WaveFile::parse("") {
        Err(Error::InvalidValue) => (),
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.aif");
    fs::write(&path, minimal_wave_bytes()).unwrap();

    match WaveFile::parse(&path) {
        Err(Error::FileError(_)) => (),
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.wav");
    fs::create_dir(&path).unwrap();

    match WaveFile::parse(&path) {
        Err(Error::FileError(_)) => (),
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such.wav");

    match WaveFile::parse(&path) {
        Err(Error::FileError(_)) => (),
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    }
}
