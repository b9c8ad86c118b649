use std::convert::TryFrom;
use std::io::{self, Read};

use crate::Tag;

use builder::Builder;



mod filtered_de;
mod value;

/// Wraps a reader and counts the bytes pulled through it.
pub struct CountingReader<R> {
    inner: R,
    pub count: usize,
}

impl<R: Read> CountingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, count: 0 }
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n;
        Ok(n)
    }
}

/// A document whose root holds the list `l`, with lists nested inside it
/// until `depth` compounds and lists are open at the innermost one.
pub fn nested_lists(depth: usize) -> Vec<u8> {
    let mut builder = Builder::new().root("").start_list("l", Tag::List, 1);
    for _ in 3..depth {
        builder = builder.anon_list(Tag::List, 1);
    }
    builder.anon_list(Tag::End, 0).end_compound().build()
}

/// Run `f` on a thread with a main-thread sized stack. Unoptimized builds need
/// more than the default test thread stack for `MAX_DEPTH` levels of nesting.
pub fn on_big_stack<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(16 << 20)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8), Ok(Tag::$tag));
            assert_eq!(Tag::from_id($val), Some(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_from_id_edges() {
    assert_eq!(Tag::from_id(-1), Some(Tag::End));
    assert_eq!(Tag::from_id(-2), None);
    assert_eq!(Tag::from_id(13), None);
    assert_eq!(Tag::from_id(256), None);
}

#[test]
fn only_end_is_not_storable() {
    for id in 0..=12u8 {
        let tag = Tag::try_from(id).unwrap();
        assert_eq!(tag.is_storable(), tag != Tag::End);
        assert_eq!(tag.id(), id);
    }
}

#[test]
fn tag_names() {
    assert_eq!(Tag::ByteArray.to_string(), "TAG_Byte_Array");
    assert_eq!(Tag::Compound.to_string(), "TAG_Compound");
}
