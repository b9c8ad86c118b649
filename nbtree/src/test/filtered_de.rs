use super::builder::Builder;
use super::{nested_lists, on_big_stack, CountingReader};
use crate::de::MAX_DEPTH;
use crate::error::Result;
use crate::filter::{FilterMode, FilteredDecoder, NbtFilter};
use crate::{from_bytes, from_bytes_filtered, Compound, Tag, Value};

/// `{a:{b:1,c:2},d:3}`
fn abcd() -> Vec<u8> {
    Builder::new()
        .root("")
        .start_compound("a")
        .int("b", 1)
        .int("c", 2)
        .end_compound()
        .int("d", 3)
        .end_compound()
        .build()
}

fn compound<const N: usize>(entries: [(&str, Value); N]) -> Compound {
    entries.into_iter().collect()
}

#[test]
fn include_leaf() -> Result<()> {
    let root = from_bytes_filtered(&abcd(), &NbtFilter::with(["a.b"]))?;

    let expected = compound([("a", compound([("b", Value::Int(1))]).into())]);
    assert_eq!(root, expected);
    Ok(())
}

#[test]
fn exclude_leaf() -> Result<()> {
    let root = from_bytes_filtered(&abcd(), &NbtFilter::without(["a.b"]))?;

    let expected = compound([
        ("a", compound([("c", Value::Int(2))]).into()),
        ("d", Value::Int(3)),
    ]);
    assert_eq!(root, expected);
    Ok(())
}

#[test]
fn include_subtree() -> Result<()> {
    let root = from_bytes_filtered(&abcd(), &NbtFilter::with(["a"]))?;

    let expected = compound([(
        "a",
        compound([("b", Value::Int(1)), ("c", Value::Int(2))]).into(),
    )]);
    assert_eq!(root, expected);
    Ok(())
}

#[test]
fn exclude_subtree() -> Result<()> {
    let root = from_bytes_filtered(&abcd(), &NbtFilter::without(["a"]))?;
    assert_eq!(root, compound([("d", Value::Int(3))]));
    Ok(())
}

#[test]
fn include_siblings() -> Result<()> {
    let root = from_bytes_filtered(&abcd(), &NbtFilter::with(["a.c", "d"]))?;

    let expected = compound([
        ("a", compound([("c", Value::Int(2))]).into()),
        ("d", Value::Int(3)),
    ]);
    assert_eq!(root, expected);
    Ok(())
}

#[test]
fn empty_filters() -> Result<()> {
    let nothing = from_bytes_filtered(&abcd(), &NbtFilter::new(FilterMode::Include))?;
    assert!(nothing.is_empty());

    let everything = from_bytes_filtered(&abcd(), &NbtFilter::new(FilterMode::Exclude))?;
    assert_eq!(everything, from_bytes(&abcd())?);
    Ok(())
}

#[test]
fn path_through_a_scalar_keeps_the_scalar() -> Result<()> {
    let root = from_bytes_filtered(&abcd(), &NbtFilter::with(["d.x"]))?;
    assert_eq!(root, compound([("d", Value::Int(3))]));
    Ok(())
}

#[test]
fn paths_continue_through_list_elements() -> Result<()> {
    let payload = Builder::new()
        .root("")
        .start_list("sections", Tag::Compound, 2)
        .string("palette", "stone")
        .byte("Y", 0)
        .end_compound()
        .string("palette", "dirt")
        .byte("Y", 1)
        .end_compound()
        .int("DataVersion", 3465)
        .end_compound()
        .build();

    let root = from_bytes_filtered(&payload, &NbtFilter::with(["sections.palette"]))?;

    assert_eq!(root.len(), 1);
    let sections = root.get_list("sections").unwrap();
    assert_eq!(sections.content_tag(), Tag::Compound);
    assert_eq!(sections.len(), 2);
    for (i, palette) in ["stone", "dirt"].into_iter().enumerate() {
        assert_eq!(
            sections.get_compound(i),
            Some(&compound([("palette", palette.into())]))
        );
    }
    Ok(())
}

#[test]
fn nested_lists_keep_the_depth() -> Result<()> {
    let payload = Builder::new()
        .root("")
        .start_list("grid", Tag::List, 1)
        .anon_list(Tag::Compound, 1)
        .int("keep", 1)
        .int("drop", 2)
        .end_compound()
        .end_compound()
        .build();

    let root = from_bytes_filtered(&payload, &NbtFilter::without(["grid.drop"]))?;

    let cell = root
        .get_list("grid")
        .and_then(|grid| grid.get_list(0))
        .and_then(|row| row.get_compound(0));
    assert_eq!(cell, Some(&compound([("keep", Value::Int(1))])));
    Ok(())
}

#[test]
fn skipped_values_are_never_decoded() -> Result<()> {
    // Neither of these excluded entries can be decoded. Skipping only looks
    // at lengths, so the filtered read succeeds.
    let mut payload = Builder::new()
        .root("")
        .start_compound("junk")
        .bad_string("name")
        .start_list("ends", Tag::End, 1000)
        .long_array("longs", &[1, 2, 3])
        .end_compound()
        .start_list("more_junk", Tag::String, 1)
        .raw_str_len(1)
        .raw_bytes(&[0xff])
        .int("kept", 7)
        .end_compound()
        .build();
    let len = payload.len();
    payload.extend_from_slice(b"SENTINEL");

    assert!(from_bytes(&payload).is_err());

    let filter = NbtFilter::without(["junk", "more_junk"]);
    let mut decoder = FilteredDecoder::new(CountingReader::new(&payload[..]));
    let root = decoder.read_document(&filter)?;

    assert_eq!(root, compound([("kept", Value::Int(7))]));
    assert_eq!(decoder.into_inner().count, len);
    Ok(())
}

#[test]
fn skipping_reads_exactly_the_value() -> Result<()> {
    let mut payload = Builder::new()
        .root("")
        .start_compound("skip")
        .byte("b", 1)
        .short("s", 2)
        .int("i", 3)
        .long("l", 4)
        .float("f", 5.0)
        .double("d", 6.0)
        .string("str", "seven")
        .byte_array("ba", &[8, 8])
        .int_array("ia", &[9])
        .long_array("la", &[10, 10, 10])
        .start_list("nested", Tag::List, 2)
        .anon_list(Tag::Int, 2)
        .int_payload(11)
        .int_payload(12)
        .anon_list(Tag::Int, -3)
        .start_list("negative", Tag::Long, -1)
        .end_compound()
        .int("after", 13)
        .end_compound()
        .build();
    let len = payload.len();
    payload.extend_from_slice(&[0xff; 16]);

    let mut decoder = FilteredDecoder::new(CountingReader::new(&payload[..]));
    let root = decoder.read_document(&NbtFilter::with(["after"]))?;

    assert_eq!(root.get_int("after"), Some(13));
    assert_eq!(decoder.into_inner().count, len);
    Ok(())
}

#[test]
fn negative_array_length_is_fatal_when_skipping() {
    let payload = Builder::new()
        .root("")
        .tag(Tag::ByteArray)
        .name("bad")
        .int_payload(-1)
        .end_compound()
        .build();

    let err = from_bytes_filtered(&payload, &NbtFilter::without(["bad"])).unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn truncated_skip_is_unexpected_eof() {
    let payload = Builder::new()
        .root("")
        .tag(Tag::ByteArray)
        .name("cut")
        .int_payload(50)
        .raw_bytes(&[0; 10])
        .build();

    let err = from_bytes_filtered(&payload, &NbtFilter::without(["cut"])).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn end_root_is_empty() -> Result<()> {
    let root = from_bytes_filtered(&[0], &NbtFilter::with(["a"]))?;
    assert!(root.is_empty());
    Ok(())
}

#[test]
fn non_compound_root_is_rejected() {
    let payload = Builder::new().int("a", 1).build();
    let err = from_bytes_filtered(&payload, &NbtFilter::with(["a"])).unwrap_err();
    assert!(err.is_parse());
}

fn filtered_nested_lists(depth: usize, filter: NbtFilter) -> Result<Compound> {
    on_big_stack(move || from_bytes_filtered(&nested_lists(depth), &filter))
}

#[test]
fn nesting_limit_applies_when_skipping() -> Result<()> {
    let drop_l = NbtFilter::without(["l"]);
    assert!(filtered_nested_lists(MAX_DEPTH, drop_l.clone())?.is_empty());
    assert!(filtered_nested_lists(MAX_DEPTH + 1, drop_l)
        .unwrap_err()
        .is_parse());
    Ok(())
}

#[test]
fn nesting_limit_applies_when_keeping() -> Result<()> {
    let keep_l = NbtFilter::with(["l"]);
    assert_eq!(filtered_nested_lists(MAX_DEPTH, keep_l)?.len(), 1);

    let under_l = NbtFilter::without(["l.x"]);
    assert_eq!(filtered_nested_lists(MAX_DEPTH, under_l.clone())?.len(), 1);
    assert!(filtered_nested_lists(MAX_DEPTH + 1, under_l)
        .unwrap_err()
        .is_parse());
    Ok(())
}
