use indexmap::IndexMap;

use crate::compact::bytes::Cursor;
use crate::compact::value::{CollectionKind, FieldValue, ListValue, MapEntry, MapValue, StructValue, Value};
use crate::compact::varint;
use crate::compact::{DecodeError, Result, ThriftType};

const TRUE_BYTE: &[u8] = &[0x01];
const FALSE_BYTE: &[u8] = &[0x00];

/// Runtime limits and behavior switches for compact decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum recursive nesting depth for structs and collections.
	pub max_depth: u32,
	/// Maximum element count a single collection header may declare.
	pub max_collection_len: usize,
	/// Read the short-form field-ID escape as a zig-zag varint instead of
	/// two raw big-endian bytes. The canonical compact encoding is the
	/// varint; common emitters write the raw pair, which is the default.
	pub standard_field_ids: bool,
	/// Error on collection bool element bytes other than 0 and 1.
	pub strict_bool: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_collection_len: 1 << 20,
			standard_field_ids: false,
			strict_bool: false,
		}
	}
}

/// Decode one message body as a top-level struct.
///
/// Trailing bytes beyond the struct's stop sentinel are left unread.
pub fn decode_struct<'a>(bytes: &'a [u8], opt: &DecodeOptions) -> Result<StructValue<'a>> {
	let mut cursor = Cursor::new(bytes);
	read_struct(&mut cursor, None, opt, 0)
}

/// Decode one value of a caller-specified wire type.
pub fn decode_value<'a>(bytes: &'a [u8], ttype: ThriftType, opt: &DecodeOptions) -> Result<Value<'a>> {
	let mut cursor = Cursor::new(bytes);
	read_value(&mut cursor, ttype, None, false, opt, 0)
}

fn read_struct<'a>(cursor: &mut Cursor<'a>, id: Option<i16>, opt: &DecodeOptions, depth: u32) -> Result<StructValue<'a>> {
	if depth >= opt.max_depth {
		return Err(DecodeError::DepthExceeded { max_depth: opt.max_depth });
	}

	let mut fields = IndexMap::new();
	let mut previous_id = 0_i16;

	while let Some((ttype, field_id)) = read_field_header(cursor, previous_id, opt)? {
		let value = read_value(cursor, ttype, Some(field_id), false, opt, depth + 1)?;
		fields.insert(field_id, FieldValue {
			id: field_id,
			ttype,
			value,
		});
		previous_id = field_id;
	}

	Ok(StructValue { id, fields })
}

/// Read one field header; `None` is the stop sentinel.
fn read_field_header(cursor: &mut Cursor<'_>, previous_id: i16, opt: &DecodeOptions) -> Result<Option<(ThriftType, i16)>> {
	let at = cursor.pos();
	let header = cursor.read_byte()?;
	if header == 0 {
		return Ok(None);
	}

	let delta = header >> 4;
	let nibble = header & 0x0F;
	let ttype = ThriftType::from_compact(nibble).ok_or(DecodeError::InvalidFieldType { nibble, at })?;

	let field_id = if delta == 0 {
		read_escaped_field_id(cursor, opt)?
	} else {
		previous_id.wrapping_add(i16::from(delta))
	};

	Ok(Some((ttype, field_id)))
}

fn read_escaped_field_id(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<i16> {
	if opt.standard_field_ids {
		let n = varint::read_u64(cursor)?;
		Ok(varint::zigzag16(n as u16))
	} else {
		Ok(varint::zigzag16(cursor.read_u16_be()?))
	}
}

fn read_value<'a>(
	cursor: &mut Cursor<'a>,
	ttype: ThriftType,
	id: Option<i16>,
	in_collection: bool,
	opt: &DecodeOptions,
	depth: u32,
) -> Result<Value<'a>> {
	match ttype {
		// On a struct field the type nibble already carried the truth
		// value; only collection elements have a payload byte.
		ThriftType::Void => {
			if in_collection {
				Ok(Value::Stop)
			} else {
				Ok(Value::Data(TRUE_BYTE))
			}
		}
		ThriftType::Bool => {
			if in_collection {
				let at = cursor.pos();
				let byte = cursor.read_byte()?;
				if opt.strict_bool && byte > 1 {
					return Err(DecodeError::InvalidBool { byte, at });
				}
				Ok(Value::Data(cursor.consumed_since(at)))
			} else {
				Ok(Value::Data(FALSE_BYTE))
			}
		}
		ThriftType::Byte => Ok(Value::Data(cursor.read_exact(1)?)),
		ThriftType::Double => Ok(Value::Data(cursor.read_exact(8)?)),
		ThriftType::I16 | ThriftType::I32 | ThriftType::I64 => Ok(Value::Data(varint::read_raw(cursor)?)),
		ThriftType::Binary => {
			let len = read_len(cursor)?;
			Ok(Value::Data(cursor.read_exact(len)?))
		}
		ThriftType::Struct => Ok(Value::Struct(read_struct(cursor, id, opt, depth)?)),
		ThriftType::Map => Ok(Value::Map(read_map(cursor, id, opt, depth)?)),
		ThriftType::List => Ok(Value::List(read_list_or_set(cursor, id, CollectionKind::List, opt, depth)?)),
		ThriftType::Set => Ok(Value::List(read_list_or_set(cursor, id, CollectionKind::Set, opt, depth)?)),
		ThriftType::Stop => Ok(Value::Stop),
	}
}

fn read_map<'a>(cursor: &mut Cursor<'a>, id: Option<i16>, opt: &DecodeOptions, depth: u32) -> Result<MapValue<'a>> {
	if depth >= opt.max_depth {
		return Err(DecodeError::DepthExceeded { max_depth: opt.max_depth });
	}

	// An empty map is the single byte 0; anything else is the first byte
	// of the count's varint.
	let first = cursor.read_byte()?;
	if first == 0 {
		return Ok(MapValue {
			id,
			key_type: ThriftType::Stop,
			value_type: ThriftType::Stop,
			entries: Vec::new(),
		});
	}

	let count = checked_count(varint::read_u64_seeded(cursor, first)?, opt)?;

	let at = cursor.pos();
	let types = cursor.read_byte()?;
	let key_type = ThriftType::from_compact(types >> 4).ok_or(DecodeError::InvalidFieldType {
		nibble: types >> 4,
		at,
	})?;
	let value_type = ThriftType::from_compact(types & 0x0F).ok_or(DecodeError::InvalidFieldType {
		nibble: types & 0x0F,
		at,
	})?;

	let mut entries = Vec::with_capacity(count);
	for _ in 0..count {
		let key = read_value(cursor, key_type, None, true, opt, depth + 1)?;
		let value = read_value(cursor, value_type, None, true, opt, depth + 1)?;
		entries.push(MapEntry { key, value });
	}

	Ok(MapValue {
		id,
		key_type,
		value_type,
		entries,
	})
}

fn read_list_or_set<'a>(
	cursor: &mut Cursor<'a>,
	id: Option<i16>,
	kind: CollectionKind,
	opt: &DecodeOptions,
	depth: u32,
) -> Result<ListValue<'a>> {
	if depth >= opt.max_depth {
		return Err(DecodeError::DepthExceeded { max_depth: opt.max_depth });
	}

	let at = cursor.pos();
	let header = cursor.read_byte()?;
	let short_count = header >> 4;
	let nibble = header & 0x0F;
	let elem_type = ThriftType::from_compact(nibble).ok_or(DecodeError::InvalidFieldType { nibble, at })?;

	let count = if short_count == 15 {
		checked_count(varint::read_u64(cursor)?, opt)?
	} else {
		usize::from(short_count)
	};

	let mut elements = Vec::with_capacity(count);
	for _ in 0..count {
		elements.push(read_value(cursor, elem_type, None, true, opt, depth + 1)?);
	}

	Ok(ListValue {
		id,
		kind,
		elem_type,
		elements,
	})
}

fn read_len(cursor: &mut Cursor<'_>) -> Result<usize> {
	let raw = varint::read_u64(cursor)?;
	Ok(usize::try_from(raw).unwrap_or(usize::MAX))
}

fn checked_count(raw: u64, opt: &DecodeOptions) -> Result<usize> {
	let count = usize::try_from(raw).unwrap_or(usize::MAX);
	if count > opt.max_collection_len {
		return Err(DecodeError::CollectionTooLarge {
			count,
			max: opt.max_collection_len,
		});
	}
	Ok(count)
}
