/// Thrift wire type carried as a 4-bit code in compact headers.
///
/// Codes 1 and 2 fold the boolean value into the type itself: 1 reads as
/// `Void` (bool true) and 2 as `Bool` (bool false) when used on a struct
/// field, while collection elements use `Bool` with a real payload byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThriftType {
	Stop,
	Void,
	Bool,
	Byte,
	Double,
	I16,
	I32,
	I64,
	Binary,
	Struct,
	Map,
	List,
	Set,
}

impl ThriftType {
	/// Map a compact 4-bit code to its wire type.
	pub fn from_compact(nibble: u8) -> Option<Self> {
		match nibble {
			0 => Some(ThriftType::Stop),
			1 => Some(ThriftType::Void),
			2 => Some(ThriftType::Bool),
			3 => Some(ThriftType::Byte),
			4 => Some(ThriftType::I16),
			5 => Some(ThriftType::I32),
			6 => Some(ThriftType::I64),
			7 => Some(ThriftType::Double),
			8 => Some(ThriftType::Binary),
			9 => Some(ThriftType::List),
			10 => Some(ThriftType::Set),
			11 => Some(ThriftType::Map),
			12 => Some(ThriftType::Struct),
			_ => None,
		}
	}

	/// Return the compact 4-bit code for this type.
	pub fn compact_code(self) -> u8 {
		match self {
			ThriftType::Stop => 0,
			ThriftType::Void => 1,
			ThriftType::Bool => 2,
			ThriftType::Byte => 3,
			ThriftType::I16 => 4,
			ThriftType::I32 => 5,
			ThriftType::I64 => 6,
			ThriftType::Double => 7,
			ThriftType::Binary => 8,
			ThriftType::List => 9,
			ThriftType::Set => 10,
			ThriftType::Map => 11,
			ThriftType::Struct => 12,
		}
	}

	/// Short display name.
	pub fn name(self) -> &'static str {
		match self {
			ThriftType::Stop => "stop",
			ThriftType::Void => "void",
			ThriftType::Bool => "bool",
			ThriftType::Byte => "byte",
			ThriftType::Double => "double",
			ThriftType::I16 => "i16",
			ThriftType::I32 => "i32",
			ThriftType::I64 => "i64",
			ThriftType::Binary => "binary",
			ThriftType::Struct => "struct",
			ThriftType::Map => "map",
			ThriftType::List => "list",
			ThriftType::Set => "set",
		}
	}

	/// Parse a display name back to a wire type.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"stop" => Some(ThriftType::Stop),
			"void" => Some(ThriftType::Void),
			"bool" => Some(ThriftType::Bool),
			"byte" => Some(ThriftType::Byte),
			"double" => Some(ThriftType::Double),
			"i16" => Some(ThriftType::I16),
			"i32" => Some(ThriftType::I32),
			"i64" => Some(ThriftType::I64),
			"binary" | "string" => Some(ThriftType::Binary),
			"struct" => Some(ThriftType::Struct),
			"map" => Some(ThriftType::Map),
			"list" => Some(ThriftType::List),
			"set" => Some(ThriftType::Set),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::ThriftType;

	#[test]
	fn compact_codes_round_trip() {
		for nibble in 0..=12 {
			let ttype = ThriftType::from_compact(nibble).expect("defined code");
			assert_eq!(ttype.compact_code(), nibble);
		}
	}

	#[test]
	fn undefined_codes_are_rejected() {
		for nibble in 13..=255_u8 {
			assert_eq!(ThriftType::from_compact(nibble), None);
		}
	}

	#[test]
	fn names_round_trip() {
		for nibble in 0..=12 {
			let ttype = ThriftType::from_compact(nibble).expect("defined code");
			assert_eq!(ThriftType::from_name(ttype.name()), Some(ttype));
		}
		assert_eq!(ThriftType::from_name("string"), Some(ThriftType::Binary));
		assert_eq!(ThriftType::from_name("i8"), None);
	}
}
