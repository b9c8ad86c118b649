use std::convert::TryFrom;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::Tag;

/// Low level writes of the pieces NBT is built from, available on every
/// [`Write`]. The counterpart of [`ReadNbt`](crate::ReadNbt).
pub trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    /// Write a string as Java's modified UTF-8, prefixed by its length. Fails
    /// without writing anything if the encoded string is over 65535 bytes.
    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let key = cesu8::to_java_cesu8(key);
        let len = u16::try_from(key.len()).map_err(|_| {
            Error::invariant(format!(
                "string of {} bytes is too long, the limit is {}",
                key.len(),
                u16::MAX
            ))
        })?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&key)?;
        Ok(())
    }

    /// Write the signed 32 bit length used by arrays and lists.
    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len)
            .map_err(|_| Error::invariant(format!("length {} is too large", len)))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write + ?Sized {}
