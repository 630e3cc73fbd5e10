//! wavedump.rs
//!
//! This program reads a wave file through the full validation pipeline
//! and prints a summary of what it found.

extern crate wavbuf;

#[macro_use]
extern crate clap;
use clap::{App, Arg};

use wavbuf::WaveFile;

fn main() {
    env_logger::init();

    let matches = App::new("wavedump")
        .version(crate_version!())
        .about("Print the descriptor, format and data summary of a wave file.")
        .arg(
            Arg::with_name("samples")
                .long("samples")
                .short("n")
                .takes_value(true)
                .help("Print the first N decoded samples as 32-bit floats"),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Input wave file")
                .required(true),
        )
        .get_matches();

    let path = matches.value_of("INPUT").unwrap();

    let wave = match WaveFile::parse(path) {
        Ok(wave) => wave,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    };

    println!(
        "descriptor:      {:?}, {} bytes declared",
        wave.descriptor.magic, wave.descriptor.size
    );
    println!("encoding:        {:?}", wave.pcm_type());
    println!("channels:        {}", wave.format.channel_count);
    println!("sample rate:     {} Hz", wave.format.sample_rate);
    println!("bits per sample: {}", wave.format.bits_per_sample);
    println!(
        "data:            {} bytes, {} frame(s)",
        wave.data().len(),
        wave.frame_count()
    );

    if let Some(count) = matches.value_of("samples") {
        let count: usize = match count.parse() {
            Ok(count) => count,
            Err(_) => {
                eprintln!("--samples expects a number");
                std::process::exit(1);
            }
        };

        for (n, sample) in wave.samples::<f32>().iter().take(count).enumerate() {
            println!("{:8}: {:+.6}", n, sample);
        }
    }
}
