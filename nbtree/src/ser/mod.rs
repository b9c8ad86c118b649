//! Encoding of [`Compound`] trees into binary NBT.
//!
//! [`Encoder`] writes uncompressed NBT to any [`Write`]. Use
//! [`to_writer`](crate::to_writer) to also pick a [`Compression`](crate::Compression).
//!
//! Lists are written with their content tag, so an empty list of Int comes
//! back as an empty list of Int.
mod write_nbt;

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::debug;

use crate::error::Result;
use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

pub use write_nbt::WriteNbt;

pub struct Encoder<W: Write> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Write a whole document: the root compound under `root_name`, closed by
    /// an End tag. An absent root is written as a single End tag, which
    /// [`Decoder::read_document`](crate::de::Decoder::read_document) reads back
    /// as an empty compound.
    pub fn write_document(&mut self, root: Option<&Compound>, root_name: &str) -> Result<()> {
        match root {
            None => {
                debug!("writing empty document");
                self.writer.write_tag(Tag::End)
            }
            Some(root) => {
                debug!("writing root compound {:?} with {} entries", root_name, root.len());
                self.writer.write_tag(Tag::Compound)?;
                self.writer.write_size_prefixed_str(root_name)?;
                self.write_compound(root)
            }
        }
    }

    /// Write the entries of a compound followed by the End tag closing it.
    pub fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        self.write_compound_unclosed(compound)?;
        self.writer.write_tag(Tag::End)
    }

    /// Write the entries of a compound without closing it, so that more
    /// entries can follow before the caller writes the End tag.
    pub fn write_compound_unclosed(&mut self, compound: &Compound) -> Result<()> {
        for (name, value) in compound {
            self.writer.write_tag(value.tag())?;
            self.writer.write_size_prefixed_str(name)?;
            self.write_value(value)?;
        }
        Ok(())
    }

    /// Write the content tag, the length and the payload of every element.
    pub fn write_list(&mut self, list: &List) -> Result<()> {
        self.writer.write_tag(list.content_tag())?;
        self.writer.write_len(list.len())?;
        for value in list {
            self.write_value(value)?;
        }
        Ok(())
    }

    /// Write the payload of a value. The tag and name are up to the caller.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(v) => self.writer.write_i8(*v)?,
            Value::Short(v) => self.writer.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.writer.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.writer.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.writer.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.writer.write_f64::<BigEndian>(*v)?,
            Value::String(v) => self.writer.write_size_prefixed_str(v)?,
            Value::ByteArray(v) => self.write_byte_array(v)?,
            Value::IntArray(v) => self.write_int_array(v)?,
            Value::LongArray(v) => self.write_long_array(v)?,
            Value::List(v) => self.write_list(v)?,
            Value::Compound(v) => self.write_compound(v)?,
        }
        Ok(())
    }

    pub fn write_byte_array(&mut self, array: &ByteArray) -> Result<()> {
        self.writer.write_len(array.len())?;
        let bytes: Vec<u8> = array.iter().map(|b| *b as u8).collect();
        self.writer.write_all(&bytes)?;
        Ok(())
    }

    pub fn write_int_array(&mut self, array: &IntArray) -> Result<()> {
        self.writer.write_len(array.len())?;
        for v in array.iter() {
            self.writer.write_i32::<BigEndian>(*v)?;
        }
        Ok(())
    }

    pub fn write_long_array(&mut self, array: &LongArray) -> Result<()> {
        self.writer.write_len(array.len())?;
        for v in array.iter() {
            self.writer.write_i64::<BigEndian>(*v)?;
        }
        Ok(())
    }
}
