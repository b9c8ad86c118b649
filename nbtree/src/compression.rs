//! Gzip detection and the choice of output compression.
//!
//! Minecraft gzips most standalone NBT files (`level.dat`, player data) but
//! not all of them. [`Sniffed`] looks at the first two bytes of a stream and
//! decompresses only if they are the gzip magic number.

use std::io::{self, Chain, Cursor, Read};

use flate2::read::GzDecoder;
use log::debug;

use crate::error::Result;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Compression applied when writing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Plain NBT.
    #[default]
    None,
    /// Gzip with the default compression level.
    Gzip,
}

type Replayed<R> = Chain<Cursor<Vec<u8>>, R>;

/// A reader that transparently decompresses gzipped input.
///
/// The bytes read to detect the format are put back in front of the stream,
/// so nothing is lost when the input turns out to be plain, even if it is
/// shorter than the magic number.
pub enum Sniffed<R: Read> {
    Plain(Replayed<R>),
    Gzip(GzDecoder<Replayed<R>>),
}

impl<R: Read> Sniffed<R> {
    pub fn new(mut reader: R) -> Result<Self> {
        let mut head = Vec::with_capacity(GZIP_MAGIC.len());
        (&mut reader)
            .take(GZIP_MAGIC.len() as u64)
            .read_to_end(&mut head)?;

        let is_gzip = head == GZIP_MAGIC;
        let replayed = Cursor::new(head).chain(reader);

        if is_gzip {
            debug!("input is gzip compressed");
            Ok(Sniffed::Gzip(GzDecoder::new(replayed)))
        } else {
            debug!("input is uncompressed");
            Ok(Sniffed::Plain(replayed))
        }
    }

    pub fn is_gzip(&self) -> bool {
        matches!(self, Sniffed::Gzip(_))
    }
}

impl<R: Read> Read for Sniffed<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Sniffed::Plain(r) => r.read(buf),
            Sniffed::Gzip(r) => r.read(buf),
        }
    }
}
