use thriftdoc::compact::{DecodeError, Result, ThriftType};

/// Parse a CLI wire-type name argument.
pub(crate) fn parse_type_name(name: &str) -> Result<ThriftType> {
	ThriftType::from_name(name).ok_or_else(|| DecodeError::InvalidTypeName { name: name.to_owned() })
}
