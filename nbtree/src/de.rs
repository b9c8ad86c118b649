//! Decoding of binary NBT into a [`Compound`] tree.
//!
//! [`Decoder`] reads from any [`Read`]. It does no decompression itself; wrap
//! the input in [`Sniffed`](crate::compression::Sniffed) (or use
//! [`from_reader`](crate::from_reader)) to handle gzipped data.
//!
//! ```
//! use nbtree::de::Decoder;
//! use nbtree::Value;
//!
//! // TAG_Compound "" { TAG_Int "DataVersion": 3465 }
//! let data = [
//!     10, 0, 0, 3, 0, 11, b'D', b'a', b't', b'a', b'V', b'e', b'r', b's', b'i', b'o', b'n',
//!     0, 0, 13, 137, 0,
//! ];
//!
//! let root = Decoder::new(&data[..]).read_document().unwrap();
//! assert_eq!(root.get("DataVersion"), Some(&Value::Int(3465)));
//! ```

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::error::{Error, Result};
use crate::input::ReadNbt;
use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

/// Upper bound on how many elements are reserved up front from a length
/// prefix. Longer arrays and lists still decode, they just grow as they go, so
/// a corrupt length cannot make us allocate gigabytes before hitting EOF.
const MAX_PREALLOC: usize = 4096;

/// How many compounds and lists may be open at once, counting the root. Deeper
/// input is a parse error rather than a stack overflow.
pub const MAX_DEPTH: usize = 512;

pub(crate) fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::parse(format!(
            "nbt is nested deeper than {} compounds and lists",
            MAX_DEPTH
        )));
    }
    Ok(())
}

/// Read the tag and name that start a document. Returns `None` if the document
/// is a lone End tag, which stands for an absent root.
pub(crate) fn read_root_header<R: Read + ?Sized>(reader: &mut R) -> Result<Option<String>> {
    match reader.read_tag()? {
        Tag::End => Ok(None),
        Tag::Compound => Ok(Some(reader.read_size_prefixed_string()?)),
        other => Err(Error::parse(format!(
            "expected {} at nbt root, but got {}",
            Tag::Compound,
            other
        ))),
    }
}

/// Decodes values from the binary format, fully materializing everything it
/// reads.
pub struct Decoder<R: Read> {
    reader: R,
    depth: usize,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, depth: 0 }
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read a whole document: a `TAG_Compound` id, the root name (discarded)
    /// and the compound body. A document that is only an End tag gives an
    /// empty compound.
    pub fn read_document(&mut self) -> Result<Compound> {
        match read_root_header(&mut self.reader)? {
            None => Ok(Compound::new()),
            Some(name) => {
                debug!("reading root compound {:?}", name);
                self.read_compound()
            }
        }
    }

    /// Read the body of a compound: named entries up to and including the
    /// End tag that closes it.
    pub fn read_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        let compound = self.read_entries();
        self.leave();
        compound
    }

    /// Read the body of a list: the element tag, the element count, then each
    /// element. A count of zero or less gives an empty list.
    pub fn read_list(&mut self) -> Result<List> {
        self.enter()?;
        let list = self.read_elements();
        self.leave();
        list
    }

    /// Number of compounds and lists currently open.
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter(&mut self) -> Result<()> {
        check_depth(self.depth + 1)?;
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    fn read_entries(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();

        loop {
            let tag = self.reader.read_tag()?;
            if tag == Tag::End {
                break;
            }

            let name = self.reader.read_size_prefixed_string()?;
            let value = self.read_value(tag)?;
            compound.insert(name, value);
        }

        Ok(compound)
    }

    fn read_elements(&mut self) -> Result<List> {
        let element_tag = self.reader.read_tag()?;
        let size = self.reader.read_i32::<BigEndian>()?;
        if size <= 0 {
            return Ok(List::new(element_tag));
        }

        if element_tag == Tag::End {
            return Err(Error::parse(format!(
                "list of {} claims {} elements",
                Tag::End,
                size
            )));
        }

        let size = size as usize;
        let mut list = List::with_capacity(element_tag, size.min(MAX_PREALLOC));
        for _ in 0..size {
            let value = self.read_value(element_tag)?;
            list.push(value)?;
        }

        Ok(list)
    }

    /// Read the payload of a value with the given tag.
    pub fn read_value(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::Byte => Value::Byte(self.reader.read_i8()?),
            Tag::Short => Value::Short(self.reader.read_i16::<BigEndian>()?),
            Tag::Int => Value::Int(self.reader.read_i32::<BigEndian>()?),
            Tag::Long => Value::Long(self.reader.read_i64::<BigEndian>()?),
            Tag::Float => Value::Float(self.reader.read_f32::<BigEndian>()?),
            Tag::Double => Value::Double(self.reader.read_f64::<BigEndian>()?),
            Tag::String => Value::String(self.reader.read_size_prefixed_string()?),
            Tag::ByteArray => Value::ByteArray(self.read_byte_array()?),
            Tag::IntArray => Value::IntArray(self.read_int_array()?),
            Tag::LongArray => Value::LongArray(self.read_long_array()?),
            Tag::List => Value::List(self.read_list()?),
            Tag::Compound => Value::Compound(self.read_compound()?),
            Tag::End => {
                return Err(Error::parse(format!(
                    "{} cannot be read as a value",
                    Tag::End
                )))
            }
        })
    }

    pub fn read_byte_array(&mut self) -> Result<ByteArray> {
        let len = self.reader.read_array_len("TAG_Byte_Array")?;

        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() < len {
            return Err(Error::unexpected_eof());
        }

        Ok(buf.into_iter().map(|b| b as i8).collect())
    }

    pub fn read_int_array(&mut self) -> Result<IntArray> {
        let len = self.reader.read_array_len("TAG_Int_Array")?;

        let mut data = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            data.push(self.reader.read_i32::<BigEndian>()?);
        }

        Ok(IntArray::new(data))
    }

    pub fn read_long_array(&mut self) -> Result<LongArray> {
        let len = self.reader.read_array_len("TAG_Long_Array")?;

        let mut data = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            data.push(self.reader.read_i64::<BigEndian>()?);
        }

        Ok(LongArray::new(data))
    }
}
