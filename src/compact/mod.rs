mod bytes;
mod decode;
mod error;
mod ttype;
mod value;
mod varint;

/// Decoding entry points and options.
pub use decode::{DecodeOptions, decode_struct, decode_value};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Wire type tags.
pub use ttype::ThriftType;
/// Decoded value tree and scalar interpretation.
pub use value::{CollectionKind, FieldValue, ListValue, MapEntry, MapValue, Scalar, StructValue, Value, decode_scalar};
