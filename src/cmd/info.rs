use std::fs;
use std::path::PathBuf;

use thriftdoc::compact::{DecodeOptions, Value, decode_struct};

/// Print a top-level summary of one compact message.
pub fn run(path: PathBuf) -> thriftdoc::compact::Result<()> {
	let bytes = fs::read(&path)?;
	let root = decode_struct(&bytes, &DecodeOptions::default())?;

	println!("path: {}", path.display());
	println!("bytes: {}", bytes.len());
	println!("fields: {}", root.fields.len());
	for field in root.fields.values() {
		println!("  {} {}: {}", field.id, field.ttype.name(), summarize(&field.value));
	}

	Ok(())
}

fn summarize(value: &Value<'_>) -> String {
	match value {
		Value::Stop => "-".to_owned(),
		Value::Data(bytes) => format!("{} bytes", bytes.len()),
		Value::Struct(item) => format!("struct, {} fields", item.fields.len()),
		Value::Map(map) => format!("map<{}, {}>, {} entries", map.key_type.name(), map.value_type.name(), map.entries.len()),
		Value::List(list) => format!("{}<{}>, {} elements", list.kind.name(), list.elem_type.name(), list.elements.len()),
	}
}
