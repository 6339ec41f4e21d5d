use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding compact-protocol bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON serialization failure in CLI output.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Not enough bytes remained for a requested read.
	#[error("buffer overflow at offset {at}: need {need} bytes, remaining {rem}")]
	BufferOverflow {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A 4-bit type code did not map to a known wire type.
	#[error("invalid field type {nibble:#x} at offset {at}")]
	InvalidFieldType {
		/// Offending 4-bit code.
		nibble: u8,
		/// Cursor offset of the byte carrying the code.
		at: usize,
	},
	/// A varint run had no terminator within the 64-bit byte ceiling.
	#[error("malformed varint at offset {at}")]
	MalformedVarint {
		/// Cursor offset where the run was abandoned.
		at: usize,
	},
	/// Strict mode found a collection bool element byte outside 0 and 1.
	#[error("invalid bool byte {byte:#04x} at offset {at}")]
	InvalidBool {
		/// Offending payload byte.
		byte: u8,
		/// Cursor offset of the payload byte.
		at: usize,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Collection header declared more elements than the configured limit.
	#[error("collection too large: count={count}, max={max}")]
	CollectionTooLarge {
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// CLI wire-type name argument was invalid.
	#[error("invalid type name: {name}")]
	InvalidTypeName {
		/// User-provided type name.
		name: String,
	},
}
