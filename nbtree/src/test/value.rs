use std::convert::TryFrom;

use crate::error::ErrorKind;
use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

/// One value of every storable kind.
fn sample(tag: Tag) -> Value {
    match tag {
        Tag::Byte => Value::Byte(1),
        Tag::Short => Value::Short(2),
        Tag::Int => Value::Int(3),
        Tag::Long => Value::Long(4),
        Tag::Float => Value::Float(5.0),
        Tag::Double => Value::Double(6.0),
        Tag::ByteArray => Value::ByteArray(ByteArray::new(vec![7])),
        Tag::String => Value::String("8".to_owned()),
        Tag::List => Value::List(List::empty()),
        Tag::Compound => Value::Compound(Compound::new()),
        Tag::IntArray => Value::IntArray(IntArray::new(vec![11])),
        Tag::LongArray => Value::LongArray(LongArray::new(vec![12])),
        Tag::End => unreachable!(),
    }
}

fn storable_tags() -> impl Iterator<Item = Tag> {
    (1..=12u8).map(|id| Tag::try_from(id).unwrap())
}

#[test]
fn value_tags_match_sample() {
    for tag in storable_tags() {
        assert_eq!(sample(tag).tag(), tag);
    }
}

#[test]
fn list_accepts_only_its_own_kind() {
    for list_tag in storable_tags() {
        for value_tag in storable_tags() {
            let original = List::from_values(list_tag, [sample(list_tag)]).unwrap();

            let mut pushed = original.clone();
            let push = pushed.push(sample(value_tag)).map(|_| ());
            let mut inserted = original.clone();
            let insert = inserted.insert(0, sample(value_tag)).map(|_| ());
            let mut set = original.clone();
            let replace = set.set(0, sample(value_tag)).map(|_| ());

            for (op, result, list) in [
                ("push", push, &pushed),
                ("insert", insert, &inserted),
                ("set", replace, &set),
            ] {
                if list_tag == value_tag {
                    assert!(result.is_ok(), "{} of {} into {} list", op, value_tag, list_tag);
                } else {
                    let err = result.unwrap_err();
                    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
                    assert_eq!(
                        list, &original,
                        "{} of {} changed a {} list",
                        op, value_tag, list_tag
                    );
                }
            }

            if list_tag == value_tag {
                assert_eq!(pushed.len(), 2);
                assert_eq!(inserted.len(), 2);
                assert_eq!(set.len(), 1);
            }
        }
    }
}

#[test]
fn end_list_accepts_nothing() {
    for tag in storable_tags() {
        let mut list = List::empty();
        assert!(list.push(sample(tag)).unwrap_err().is_invariant());
        assert!(list.is_empty());
    }
}

#[test]
fn insert_and_set_check_kind_and_bounds() {
    let mut list = List::from_values(Tag::Int, [1, 2]).unwrap();

    assert!(list.insert(0, "no").unwrap_err().is_invariant());
    assert!(list.insert(3, 0).unwrap_err().is_invariant());
    list.insert(2, 3).unwrap();
    list.insert(0, 0).unwrap();

    let ints: Vec<_> = list.iter().filter_map(Value::as_i64).collect();
    assert_eq!(ints, [0, 1, 2, 3]);

    assert_eq!(list.set(1, 10).unwrap(), Value::Int(1));
    assert!(list.set(1, 1.5).unwrap_err().is_invariant());
    assert!(list.set(4, 0).unwrap_err().is_invariant());
    assert_eq!(list.get(1), Some(&Value::Int(10)));
}

#[test]
fn list_typed_getters() {
    let ints = List::from_values(Tag::Int, [7, -1]).unwrap();
    assert_eq!(ints.get_int(0), Some(7));
    assert_eq!(ints.get_long(1), Some(-1));
    assert_eq!(ints.get_double(0), Some(7.0));
    assert_eq!(ints.get_int(2), None);
    assert_eq!(ints.get_str(0), None);
    assert_eq!(ints.get_compound(0), None);

    let doubles = List::from_values(Tag::Double, [2.7]).unwrap();
    assert_eq!(doubles.get_byte(0), Some(2));
    assert_eq!(doubles.get_float(0), Some(2.7));

    let names = List::from_values(Tag::String, ["a"]).unwrap();
    assert_eq!(names.get_str(0), Some("a"));
    assert_eq!(names.get_short(0), None);

    let mut entry = Compound::new();
    entry.insert("Name", "minecraft:stone");
    let palette = List::from_values(Tag::Compound, [entry.clone()]).unwrap();
    assert_eq!(palette.get_compound(0), Some(&entry));
    assert_eq!(
        palette.get_compound(0).and_then(|c| c.get_str("Name")),
        Some("minecraft:stone")
    );

    let arrays = List::from_values(Tag::LongArray, [LongArray::new(vec![1, 2])]).unwrap();
    assert_eq!(arrays.get_long_array(0).map(|a| a.len()), Some(2));
    assert_eq!(arrays.get_int_array(0), None);
    assert_eq!(arrays.get_byte_array(0), None);

    let nested = List::from_values(Tag::List, [ints.clone()]).unwrap();
    assert_eq!(nested.get_list(0), Some(&ints));
}

#[test]
fn try_extend_is_all_or_nothing() {
    let mut list = List::new(Tag::String);
    let values = vec![Value::from("a"), Value::from("b"), Value::Int(3)];

    assert!(list.try_extend(values).is_err());
    assert!(list.is_empty());

    list.try_extend(["a", "b"]).unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn remove_and_pop() {
    let mut list = List::from_values(Tag::Short, [1i16, 2, 3]).unwrap();
    assert_eq!(list.remove(5), None);
    assert_eq!(list.remove(0), Some(Value::Short(1)));
    assert_eq!(list.pop(), Some(Value::Short(3)));
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.content_tag(), Tag::Short);
}

#[test]
fn list_from_vec_takes_first_kind() {
    let list = List::try_from(vec![Value::Long(1), Value::Long(2)]).unwrap();
    assert_eq!(list.content_tag(), Tag::Long);

    let list = List::try_from(Vec::new()).unwrap();
    assert_eq!(list.content_tag(), Tag::End);

    assert!(List::try_from(vec![Value::Long(1), Value::Int(2)]).is_err());
}

#[test]
fn compound_basics() {
    let mut c = Compound::new();
    assert!(c.is_empty());

    assert_eq!(c.insert("a", 1), None);
    assert_eq!(c.insert("a", 2), Some(Value::Int(1)));
    assert!(c.contains_key("a"));
    assert_eq!(c.len(), 1);

    if let Some(Value::Int(v)) = c.get_mut("a") {
        *v += 1;
    }
    assert_eq!(c.get("a"), Some(&Value::Int(3)));

    assert_eq!(c.remove("a"), Some(Value::Int(3)));
    assert_eq!(c.remove("a"), None);
}

#[test]
fn compound_typed_getters() {
    let mut pos = Compound::new();
    pos.insert("x", 1.75);
    pos.insert("name", "spawn");
    pos.insert("tiles", IntArray::new(vec![1, 2]));

    let mut root = Compound::new();
    root.insert("Pos", pos);
    root.insert("count", 300i16);

    assert_eq!(root.get_double("Pos.x"), Some(1.75));
    assert_eq!(root.get_float("Pos.x"), Some(1.75));
    assert_eq!(root.get_int("Pos.x"), Some(1));
    assert_eq!(root.get_short("count"), Some(300));
    assert_eq!(root.get_long("count"), Some(300));
    assert_eq!(root.get_str("Pos.name"), Some("spawn"));
    assert_eq!(root.get_int_array("Pos.tiles").map(|a| a.len()), Some(2));

    assert_eq!(root.get_int("Pos.name"), None);
    assert_eq!(root.get_str("count"), None);
    assert_eq!(root.get_long_array("Pos.tiles"), None);
    assert_eq!(root.get_double("Pos.missing"), None);
    assert_eq!(root.get_double("count.x"), None);

    assert!(root.contains_tag("Pos", Tag::Compound));
    assert!(root.contains_tag("Pos.tiles", Tag::IntArray));
    assert!(!root.contains_tag("Pos.tiles", Tag::ByteArray));
    assert!(root.get_compound("Pos").is_some());
}

#[test]
fn path_with_escaped_dot() {
    let mut counts = Compound::new();
    counts.insert("minecraft.stone", 64);

    let mut root = Compound::new();
    root.insert("counts", counts);

    assert_eq!(root.get_int(r"counts.minecraft\.stone"), Some(64));
    assert_eq!(root.get_int("counts.minecraft.stone"), None);
}

#[test]
fn value_conversions() {
    assert_eq!(Value::from(true), Value::Byte(1));
    assert_eq!(Value::from(false), Value::Byte(0));
    // unsigned values keep their bits, not their magnitude.
    assert_eq!(Value::from(200u8), Value::Byte(-56));
    assert_eq!(Value::from(u32::MAX), Value::Int(-1));
    assert_eq!(Value::from("s").as_str(), Some("s"));

    assert_eq!(Value::Int(5), 5);
    assert_eq!(Value::Double(0.5), 0.5);
    assert_eq!(Value::Short(3), 3i64);
    assert_eq!(Value::Long(-1), -1i8);
    assert_eq!(Value::Float(0.5), 0.5f64);
    assert!(Value::Double(0.5) == 0.5f32);
    assert!(Value::Int(5) != 6i16);
    assert!(Value::from("s") == "s");
    assert!(Value::Int(5).is_number());
    assert!(!Value::from("5").is_number());
}

#[test]
fn serialize_as_json() {
    let mut root = Compound::new();
    root.insert("list", List::from_values(Tag::Byte, [1i8, 2]).unwrap());
    root.insert("arr", LongArray::new(vec![3]));

    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(json["list"], serde_json::json!([1, 2]));
    assert_eq!(json["arr"], serde_json::json!([3]));
}
