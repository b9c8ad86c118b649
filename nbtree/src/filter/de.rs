use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use crate::de::{read_root_header, Decoder};
use crate::error::{Error, Result};
use crate::input::{skip_nested, ReadNbt};
use crate::{Compound, List, Tag, Value};

use super::{FilterMode, NbtFilter};

/// A decoder that consults an [`NbtFilter`] for every compound entry it
/// meets, decoding what the filter keeps and skipping the rest.
///
/// Once no rule reaches any deeper into a value, the value is handed to a
/// plain [`Decoder`] and read in full.
pub struct FilteredDecoder<R: Read> {
    inner: Decoder<R>,
}

impl<R: Read> FilteredDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: Decoder::new(reader),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Read a whole document, keeping only what `filter` selects. A document
    /// that is only an End tag gives an empty compound.
    pub fn read_document(&mut self, filter: &NbtFilter) -> Result<Compound> {
        match read_root_header(self.inner.get_mut())? {
            None => Ok(Compound::new()),
            Some(name) => {
                debug!(
                    "reading root compound {:?} with {:?} filter of {} rules",
                    name,
                    filter.mode(),
                    filter.len()
                );
                self.read_compound(filter, 0)
            }
        }
    }

    /// Read a compound body whose keys sit at `depth` in the filter's paths.
    pub fn read_compound(&mut self, filter: &NbtFilter, depth: usize) -> Result<Compound> {
        self.inner.enter()?;
        let compound = self.read_entries(filter, depth);
        self.inner.leave();
        compound
    }

    /// Read a list body, filtering every element at the list's own depth.
    pub fn read_list(&mut self, filter: &NbtFilter, depth: usize) -> Result<List> {
        self.inner.enter()?;
        let list = self.read_elements(filter, depth);
        self.inner.leave();
        list
    }

    fn read_entries(&mut self, filter: &NbtFilter, depth: usize) -> Result<Compound> {
        let mut compound = Compound::new();

        loop {
            let reader = self.inner.get_mut();
            let tag = reader.read_tag()?;
            if tag == Tag::End {
                break;
            }
            let name = reader.read_size_prefixed_string()?;

            let matched = filter.find_match(&name, depth);
            let keep = match matched {
                Some(rule) => filter.mode() == FilterMode::Include || depth + 1 < rule.len(),
                None => filter.mode() == FilterMode::Exclude,
            };

            if !keep {
                trace!("skipping {} {:?} at depth {}", tag, name, depth);
                let open = self.inner.depth();
                skip_nested(self.inner.get_mut(), tag, open)?;
                continue;
            }

            let sub = match matched {
                Some(rule) => filter.sub_filter(rule, depth + 1)?,
                None => NbtFilter::new(filter.mode()),
            };

            let value = if sub.is_empty() {
                self.inner.read_value(tag)?
            } else {
                self.read_value(tag, &sub, depth + 1)?
            };
            compound.insert(name, value);
        }

        Ok(compound)
    }

    fn read_elements(&mut self, filter: &NbtFilter, depth: usize) -> Result<List> {
        let reader = self.inner.get_mut();
        let element_tag = reader.read_tag()?;
        let size = reader.read_i32::<BigEndian>()?;
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

        let mut list = List::new(element_tag);
        for _ in 0..size {
            let value = self.read_value(element_tag, filter, depth)?;
            list.push(value)?;
        }

        Ok(list)
    }

    fn read_value(&mut self, tag: Tag, filter: &NbtFilter, depth: usize) -> Result<Value> {
        match tag {
            Tag::Compound => Ok(Value::Compound(self.read_compound(filter, depth)?)),
            Tag::List => Ok(Value::List(self.read_list(filter, depth)?)),
            _ => self.inner.read_value(tag),
        }
    }
}
