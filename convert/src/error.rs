/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{io, path::PathBuf};

use pixel_packer::PackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Pack(#[from] PackError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
