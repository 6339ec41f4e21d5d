#![allow(missing_docs)]

use thriftdoc::compact::{CollectionKind, DecodeOptions, Scalar, ThriftType, Value, decode_scalar, decode_struct};

// One struct exercising every container shape:
//   1: i32 = 150
//   2: binary = "abc"
//   3: list<i64> = [1, -1]
//   4: map<binary, i32> = {"k": 7}
//   5: struct { 1: bool = true }
const MESSAGE: &[u8] = &[
	0x15, 0xAC, 0x02, // field 1, i32, zig-zag varint 300
	0x18, 0x03, 0x61, 0x62, 0x63, // field 2, binary, len 3, "abc"
	0x19, 0x26, 0x02, 0x01, // field 3, list of 2 i64
	0x1B, 0x01, 0x85, 0x01, 0x6B, 0x0E, // field 4, map of 1 entry
	0x1C, 0x11, 0x00, // field 5, nested struct with bool-true field
	0x00, // stop
];

#[test]
fn nested_message_decodes_into_full_tree() {
	let root = decode_struct(MESSAGE, &DecodeOptions::default()).expect("message decodes");

	assert_eq!(root.id, None);
	assert_eq!(root.fields.len(), 5);
	assert_eq!(root.fields.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

	let number = root.field(1).expect("field 1 present");
	assert_eq!(number.ttype, ThriftType::I32);
	assert_eq!(number.scalar(), Some(Scalar::I64(150)));

	let name = root.field(2).expect("field 2 present");
	assert_eq!(name.ttype, ThriftType::Binary);
	assert_eq!(name.scalar(), Some(Scalar::Bytes(b"abc")));

	let Value::List(list) = &root.field(3).expect("field 3 present").value else {
		panic!("expected list field");
	};
	assert_eq!(list.id, Some(3));
	assert_eq!(list.kind, CollectionKind::List);
	assert_eq!(list.elem_type, ThriftType::I64);
	let decoded: Vec<_> = list
		.elements
		.iter()
		.map(|elem| {
			let Value::Data(bytes) = elem else {
				panic!("expected terminal element");
			};
			decode_scalar(list.elem_type, bytes).expect("element interprets")
		})
		.collect();
	assert_eq!(decoded, vec![Scalar::I64(1), Scalar::I64(-1)]);

	let Value::Map(map) = &root.field(4).expect("field 4 present").value else {
		panic!("expected map field");
	};
	assert_eq!(map.id, Some(4));
	assert_eq!(map.key_type, ThriftType::Binary);
	assert_eq!(map.value_type, ThriftType::I32);
	assert_eq!(map.entries.len(), 1);
	assert_eq!(map.entries[0].key, Value::Data(b"k"));
	assert_eq!(
		decode_scalar(map.value_type, &[0x0E]),
		Some(Scalar::I64(7))
	);

	let Value::Struct(inner) = &root.field(5).expect("field 5 present").value else {
		panic!("expected struct field");
	};
	assert_eq!(inner.id, Some(5));
	let flag = inner.field(1).expect("inner field 1 present");
	assert_eq!(flag.ttype, ThriftType::Void);
	assert_eq!(flag.scalar(), Some(Scalar::Bool(true)));
}

#[test]
fn decoded_trees_compare_structurally() {
	let opt = DecodeOptions::default();
	let first = decode_struct(MESSAGE, &opt).expect("message decodes");
	let second = decode_struct(MESSAGE, &opt).expect("message decodes again");
	assert_eq!(first, second);
}

#[test]
fn depth_limit_still_admits_this_message() {
	let opt = DecodeOptions {
		max_depth: 2,
		..DecodeOptions::default()
	};
	decode_struct(MESSAGE, &opt).expect("two levels suffice");

	let opt = DecodeOptions {
		max_depth: 1,
		..DecodeOptions::default()
	};
	decode_struct(MESSAGE, &opt).expect_err("nested containers exceed a flat-only limit");
}
