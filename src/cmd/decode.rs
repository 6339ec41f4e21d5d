use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value as JsonValue};
use thriftdoc::compact::{DecodeOptions, Scalar, ThriftType, Value, decode_scalar, decode_value};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::parse_type_name;

/// Decode and print one compact message.
pub fn run(
	path: PathBuf,
	type_name: Option<String>,
	json: bool,
	max_depth: Option<u32>,
	standard_ids: bool,
	strict_bool: bool,
) -> thriftdoc::compact::Result<()> {
	let mut opt = DecodeOptions::default();
	if let Some(depth) = max_depth {
		opt.max_depth = depth;
	}
	opt.standard_field_ids = standard_ids;
	opt.strict_bool = strict_bool;

	let ttype = match type_name.as_deref() {
		Some(name) => parse_type_name(name)?,
		None => ThriftType::Struct,
	};

	let bytes = fs::read(&path)?;
	let value = decode_value(&bytes, ttype, &opt)?;

	if json {
		let payload = DecodeJson {
			path: path.display().to_string(),
			bytes: bytes.len(),
			root_type: ttype.name().to_owned(),
			value: value_to_json(ttype, &value),
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
	} else {
		println!("path: {}", path.display());
		println!("bytes: {}", bytes.len());
		println!("decoded:");
		print_value(ttype, &value, 1, 0, PrintOptions::default());
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	bytes: usize,
	#[serde(rename = "type")]
	root_type: String,
	value: JsonValue,
}

fn value_to_json(ttype: ThriftType, value: &Value<'_>) -> JsonValue {
	match value {
		Value::Stop => JsonValue::Null,
		Value::Data(bytes) => data_to_json(ttype, bytes),
		Value::Struct(item) => {
			let fields: Map<String, JsonValue> = item
				.fields
				.values()
				.map(|field| {
					let mut entry = Map::new();
					entry.insert("type".to_owned(), serde_json::json!(field.ttype.name()));
					entry.insert("value".to_owned(), value_to_json(field.ttype, &field.value));
					(field.id.to_string(), JsonValue::Object(entry))
				})
				.collect();

			let mut out = Map::new();
			out.insert("type".to_owned(), serde_json::json!("struct"));
			out.insert("fields".to_owned(), JsonValue::Object(fields));
			JsonValue::Object(out)
		}
		Value::Map(map) => {
			let entries: Vec<JsonValue> = map
				.entries
				.iter()
				.map(|entry| {
					serde_json::json!({
						"key": value_to_json(map.key_type, &entry.key),
						"value": value_to_json(map.value_type, &entry.value),
					})
				})
				.collect();

			serde_json::json!({
				"type": "map",
				"key_type": map.key_type.name(),
				"value_type": map.value_type.name(),
				"entries": entries,
			})
		}
		Value::List(list) => {
			let elements: Vec<JsonValue> = list.elements.iter().map(|elem| value_to_json(list.elem_type, elem)).collect();
			serde_json::json!({
				"type": list.kind.name(),
				"elem_type": list.elem_type.name(),
				"elements": elements,
			})
		}
	}
}

fn data_to_json(ttype: ThriftType, bytes: &[u8]) -> JsonValue {
	match decode_scalar(ttype, bytes) {
		Some(Scalar::Bool(v)) => serde_json::json!(v),
		Some(Scalar::I64(v)) => serde_json::json!(v),
		Some(Scalar::F64(v)) => serde_json::json!(v),
		Some(Scalar::Bytes(raw)) => match std::str::from_utf8(raw) {
			Ok(text) => serde_json::json!(text),
			Err(_) => serde_json::json!(raw),
		},
		None => serde_json::json!(bytes),
	}
}
