/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

mod decode;
mod error;
mod output;

use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use pixel_packer::OutputFormat;

use crate::{decode::Decoded, error::ConvertError};

#[derive(FromArgs, Debug)]
/// Convert an image into raw big-endian RGB565 or ARGB8888 pixel data
struct Convert {
    /// input image path
    #[argh(positional)]
    input: PathBuf,

    /// output file path
    #[argh(positional)]
    output: PathBuf,

    /// packed pixel format: rgb565, argb8888
    #[argh(positional)]
    format: OutputFormat,

    /// pack on a single thread
    #[argh(switch)]
    single_threaded: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cmd: Convert = argh::from_env();

    match run(&cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: &Convert) -> Result<(), ConvertError> {
    let img = Decoded::for_format(decode::open(&cmd.input)?, cmd.format);
    let (width, height) = img.dimensions();

    let data = if cmd.single_threaded {
        pixel_packer::pack_serial(&img, cmd.format)?
    } else {
        pixel_packer::pack(&img, cmd.format)?
    };

    output::write_atomic(&cmd.output, &data)?;

    log::info!(
        "Wrote {}x{} {} image data to {}",
        width,
        height,
        cmd.format,
        cmd.output.display()
    );

    Ok(())
}
