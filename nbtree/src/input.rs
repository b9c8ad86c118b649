use std::convert::TryFrom;
use std::io::{self, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::de::check_depth;
use crate::error::{Error, Result};
use crate::Tag;

/// Low level reads of the pieces NBT is built from, available on every
/// [`Read`]. All multi-byte values are big-endian.
///
/// The `skip_*` methods advance past data without decoding or allocating it;
/// they only read the lengths needed to know how far to go.
pub trait ReadNbt: Read {
    /// Read a one byte tag id. Unknown ids are a parse error.
    fn read_tag(&mut self) -> Result<Tag> {
        let tag = self.read_u8()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    /// Read a string prefixed by its unsigned 16 bit length. The bytes are
    /// Java's modified UTF-8, which is also a superset of plain UTF-8 for
    /// everything Minecraft writes.
    fn read_size_prefixed_string(&mut self) -> Result<String> {
        let len = self.read_u16::<BigEndian>()? as usize;

        let mut buf = vec![0; len];
        self.read_exact(&mut buf[..])?;

        Ok(cesu8::from_java_cesu8(&buf[..])
            .map_err(|_| Error::nonunicode_string(&buf))?
            .into_owned())
    }

    /// Read the signed 32 bit length of an array. `what` names the array for
    /// the error message if the length is negative.
    fn read_array_len(&mut self, what: &str) -> Result<usize> {
        let len = self.read_i32::<BigEndian>()?;
        usize::try_from(len).map_err(|_| Error::negative_len(what, len))
    }

    fn skip_bytes(&mut self, n: u64) -> Result<()> {
        let skipped = io::copy(&mut (&mut *self).take(n), &mut io::sink())?;
        if skipped < n {
            return Err(Error::unexpected_eof());
        }
        Ok(())
    }

    fn skip_str(&mut self) -> Result<()> {
        let len = self.read_u16::<BigEndian>()?;
        self.skip_bytes(len as u64)
    }

    /// Skip the payload of a value with the given tag, including everything
    /// nested inside lists and compounds.
    fn skip_value(&mut self, tag: Tag) -> Result<()> {
        skip_nested(self, tag, 0)
    }
}

/// Skip a value that sits inside `depth` open compounds and lists. Nesting
/// is held to the same limit as decoding.
pub(crate) fn skip_nested<R: ReadNbt + ?Sized>(reader: &mut R, tag: Tag, depth: usize) -> Result<()> {
    match tag {
        Tag::Byte => reader.skip_bytes(1),
        Tag::Short => reader.skip_bytes(2),
        Tag::Int | Tag::Float => reader.skip_bytes(4),
        Tag::Long | Tag::Double => reader.skip_bytes(8),
        Tag::String => reader.skip_str(),
        Tag::ByteArray => {
            let len = reader.read_array_len("TAG_Byte_Array")?;
            reader.skip_bytes(len as u64)
        }
        Tag::IntArray => {
            let len = reader.read_array_len("TAG_Int_Array")?;
            reader.skip_bytes(len as u64 * 4)
        }
        Tag::LongArray => {
            let len = reader.read_array_len("TAG_Long_Array")?;
            reader.skip_bytes(len as u64 * 8)
        }
        Tag::Compound => {
            check_depth(depth + 1)?;
            loop {
                let tag = reader.read_tag()?;
                if tag == Tag::End {
                    break;
                }

                // the entry's name, then its value.
                reader.skip_str()?;
                skip_nested(reader, tag, depth + 1)?;
            }
            Ok(())
        }
        Tag::List => {
            check_depth(depth + 1)?;
            let element_tag = reader.read_tag()?;
            let size = reader.read_i32::<BigEndian>()?;

            // A list of End has no payload however long it claims to be.
            if element_tag != Tag::End {
                for _ in 0..size {
                    skip_nested(reader, element_tag, depth + 1)?;
                }
            }
            Ok(())
        }
        // End carries no payload.
        Tag::End => Ok(()),
    }
}

impl<R: Read + ?Sized> ReadNbt for R {}
