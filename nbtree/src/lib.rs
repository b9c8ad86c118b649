//! nbtree reads and writes NBT data, the binary tree format used by
//! *Minecraft: Java Edition* to store world data, player inventories and
//! similar.
//!
//! * For the in-memory tree see [`Value`], [`Compound`] and [`List`].
//! * For the binary codec see [`de::Decoder`] and [`ser::Encoder`].
//! * For decoding only selected parts of a document see [`filter`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//!
//! The stringified form (SNBT) of any value is available through its
//! `Display` implementation. Parsing SNBT lives in the `nbtree-snbt` crate.
//!
//! # Quick example
//!
//! Read a gzipped `level.dat`, but only keep the spawn coordinates. Everything
//! else in the file is skipped over without being built in memory.
//!
//!```no_run
//! use nbtree::filter::NbtFilter;
//!
//! # fn main() -> nbtree::error::Result<()> {
//! let file = std::fs::File::open("level.dat")?;
//! let filter = NbtFilter::with(["Data.SpawnX", "Data.SpawnY", "Data.SpawnZ"]);
//!
//! let level = nbtree::from_reader_filtered(file, &filter)?;
//! println!("spawn x: {:?}", level.get_path("Data.SpawnX"));
//! println!("{}", level);
//! # Ok(())
//! # }
//! ```
//!
//! Gzip compression is detected from the first two bytes of the input, so the
//! same functions read compressed and uncompressed files.

use std::convert::TryFrom;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;

pub mod compression;
pub mod de;
pub mod error;
pub mod filter;
pub mod ser;

mod arrays;
mod input;
mod value;

pub use arrays::*;
pub use compression::Compression;
pub use input::ReadNbt;
pub use ser::WriteNbt;
pub use value::*;

#[cfg(test)]
mod test;

use compression::Sniffed;
use de::Decoder;
use error::Result;
use filter::{FilteredDecoder, NbtFilter};
use ser::Encoder;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl Tag {
    /// Look up a tag by its numeric id. Unknown ids give `None`. The id `-1`
    /// is reserved to mean [`Tag::End`], which is what an exhausted
    /// byte-at-a-time reader reports.
    pub fn from_id(id: i32) -> Option<Tag> {
        match id {
            -1 => Some(Tag::End),
            0..=12 => Tag::try_from(id as u8).ok(),
            _ => None,
        }
    }

    /// The binary id of this tag.
    pub fn id(self) -> u8 {
        u8::from(self)
    }

    /// Whether a value of this tag can be stored in a compound or list. Only
    /// [`Tag::End`] cannot.
    pub fn is_storable(self) -> bool {
        self != Tag::End
    }
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The ids are part of the wire
// format and never change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
            Tag::LongArray => "TAG_Long_Array",
        })
    }
}

/// Read a complete NBT document from `reader`. Gzipped input is detected and
/// decompressed transparently. The name of the root compound is discarded.
pub fn from_reader<R: Read>(reader: R) -> Result<Compound> {
    let input = Sniffed::new(reader)?;
    Decoder::new(input).read_document()
}

/// Read a complete NBT document from a byte slice. See [`from_reader`].
pub fn from_bytes(input: &[u8]) -> Result<Compound> {
    from_reader(input)
}

/// Read an NBT document from `reader`, keeping only the parts of it selected
/// by `filter`. Excluded parts are skipped without being decoded.
pub fn from_reader_filtered<R: Read>(reader: R, filter: &NbtFilter) -> Result<Compound> {
    let input = Sniffed::new(reader)?;
    FilteredDecoder::new(input).read_document(filter)
}

/// Byte slice version of [`from_reader_filtered`].
pub fn from_bytes_filtered(input: &[u8], filter: &NbtFilter) -> Result<Compound> {
    from_reader_filtered(input, filter)
}

/// Write `compound` as a complete NBT document with an empty root name.
/// Gzip output is finished before this returns.
pub fn to_writer<W: Write>(writer: W, compound: &Compound, compression: Compression) -> Result<()> {
    match compression {
        Compression::None => {
            let mut encoder = Encoder::new(writer);
            encoder.write_document(Some(compound), "")?;
            encoder.flush()
        }
        Compression::Gzip => {
            let gz = flate2::write::GzEncoder::new(writer, flate2::Compression::default());
            let mut encoder = Encoder::new(gz);
            encoder.write_document(Some(compound), "")?;
            encoder.into_inner().finish()?;
            Ok(())
        }
    }
}

/// Write `compound` as a complete NBT document into a new vector.
pub fn to_bytes(compound: &Compound, compression: Compression) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    to_writer(&mut out, compound, compression)?;
    Ok(out)
}

/// Read an NBT file, compressed or not.
pub fn read_file(path: impl AsRef<Path>) -> Result<Compound> {
    let path = path.as_ref();
    debug!("reading nbt from {}", path.display());
    from_reader(BufReader::new(File::open(path)?))
}

/// Write `compound` to the file at `path`, creating any missing parent
/// directories first.
pub fn write_file(path: impl AsRef<Path>, compound: &Compound, compression: Compression) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("writing nbt to {} ({:?})", path.display(), compression);
    let mut out = BufWriter::new(File::create(path)?);
    to_writer(&mut out, compound, compression)?;
    out.flush()?;
    Ok(())
}
