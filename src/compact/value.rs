use indexmap::IndexMap;

use crate::compact::ttype::ThriftType;
use crate::compact::varint;

/// One decoded node of the generic value tree.
///
/// Terminal payloads keep their byte-level wire form and borrow from the
/// input buffer; [`decode_scalar`] interprets them on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
	Stop,
	Data(&'a [u8]),
	Struct(StructValue<'a>),
	Map(MapValue<'a>),
	List(ListValue<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue<'a> {
	pub id: i16,
	pub ttype: ThriftType,
	pub value: Value<'a>,
}

/// Decoded struct: fields keyed by absolute field ID, in wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue<'a> {
	/// Field ID this struct occupied in its parent, if any.
	pub id: Option<i16>,
	pub fields: IndexMap<i16, FieldValue<'a>>,
}

/// Outer collection type of an unkeyed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
	List,
	Set,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapValue<'a> {
	pub id: Option<i16>,
	pub key_type: ThriftType,
	pub value_type: ThriftType,
	pub entries: Vec<MapEntry<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry<'a> {
	pub key: Value<'a>,
	pub value: Value<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListValue<'a> {
	pub id: Option<i16>,
	pub kind: CollectionKind,
	pub elem_type: ThriftType,
	pub elements: Vec<Value<'a>>,
}

/// Interpreted form of a terminal payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
	Bool(bool),
	I64(i64),
	F64(f64),
	Bytes(&'a [u8]),
}

impl<'a> StructValue<'a> {
	/// Look up a field by absolute field ID.
	pub fn field(&self, id: i16) -> Option<&FieldValue<'a>> {
		self.fields.get(&id)
	}
}

impl<'a> FieldValue<'a> {
	/// Interpret this field's payload, if it is a terminal.
	pub fn scalar(&self) -> Option<Scalar<'a>> {
		match self.value {
			Value::Data(bytes) => decode_scalar(self.ttype, bytes),
			_ => None,
		}
	}
}

impl CollectionKind {
	/// Short display name.
	pub fn name(self) -> &'static str {
		match self {
			CollectionKind::List => "list",
			CollectionKind::Set => "set",
		}
	}
}

/// Interpret a terminal payload according to its wire type.
///
/// Integer payloads are stored as their raw zig-zag LEB128 run; the zig-zag
/// is applied here, truncated to the type's width.
pub fn decode_scalar(ttype: ThriftType, bytes: &[u8]) -> Option<Scalar<'_>> {
	match ttype {
		ThriftType::Void | ThriftType::Bool => Some(Scalar::Bool(*bytes.first()? != 0)),
		ThriftType::Byte => {
			let &[byte] = bytes else { return None };
			Some(Scalar::I64(i64::from(byte as i8)))
		}
		ThriftType::Double => {
			let raw: [u8; 8] = bytes.try_into().ok()?;
			Some(Scalar::F64(f64::from_le_bytes(raw)))
		}
		ThriftType::I16 => {
			let n = varint::decode_u64(bytes)?;
			Some(Scalar::I64(i64::from(varint::zigzag16(n as u16))))
		}
		ThriftType::I32 => {
			let n = varint::decode_u64(bytes)?;
			Some(Scalar::I64(i64::from(varint::zigzag32(n as u32))))
		}
		ThriftType::I64 => Some(Scalar::I64(varint::zigzag64(varint::decode_u64(bytes)?))),
		ThriftType::Binary => Some(Scalar::Bytes(bytes)),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::{Scalar, decode_scalar};
	use crate::compact::ThriftType;

	#[test]
	fn integer_payloads_apply_zigzag_at_target_width() {
		assert_eq!(decode_scalar(ThriftType::I32, &[0xAC, 0x02]), Some(Scalar::I64(150)));
		assert_eq!(decode_scalar(ThriftType::I64, &[0x01]), Some(Scalar::I64(-1)));
		// A run wider than the target width wraps to it.
		assert_eq!(
			decode_scalar(ThriftType::I16, &[0x80, 0x80, 0x04]),
			Some(Scalar::I64(0))
		);
	}

	#[test]
	fn bool_byte_and_double_payloads_interpret_bytewise() {
		assert_eq!(decode_scalar(ThriftType::Void, &[0x01]), Some(Scalar::Bool(true)));
		assert_eq!(decode_scalar(ThriftType::Bool, &[0x00]), Some(Scalar::Bool(false)));
		assert_eq!(decode_scalar(ThriftType::Byte, &[0xFF]), Some(Scalar::I64(-1)));
		assert_eq!(
			decode_scalar(ThriftType::Double, &1.5_f64.to_le_bytes()),
			Some(Scalar::F64(1.5))
		);
	}

	#[test]
	fn malformed_or_container_payloads_are_rejected() {
		assert_eq!(decode_scalar(ThriftType::I32, &[0x80]), None);
		assert_eq!(decode_scalar(ThriftType::Double, &[0x00; 4]), None);
		assert_eq!(decode_scalar(ThriftType::Struct, &[0x00]), None);
		assert_eq!(decode_scalar(ThriftType::Byte, &[0x01, 0x02]), None);
	}
}
