use thriftdoc::compact::{Scalar, ThriftType, Value, decode_scalar};

/// Output truncation limits for decoded value printing.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single struct.
	pub max_fields_per_struct: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for collections.
	pub max_elements: usize,
	/// Maximum recursive print depth for nested values.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_struct: 80,
			max_string_len: 200,
			max_elements: 16,
			max_print_depth: 8,
		}
	}
}

/// Print a decoded value as an indented tree.
pub fn print_value(ttype: ThriftType, value: &Value<'_>, indent: usize, depth: u32, opt: PrintOptions) {
	let pad = "  ".repeat(indent);

	if depth > opt.max_print_depth {
		println!("{pad}...");
		return;
	}

	match value {
		Value::Stop => println!("{pad}-"),
		Value::Data(bytes) => println!("{pad}{}", render_data(ttype, bytes, opt)),
		Value::Struct(item) => {
			println!("{pad}struct ({} fields):", item.fields.len());
			for (shown, field) in item.fields.values().enumerate() {
				if shown == opt.max_fields_per_struct {
					println!("{pad}  ... ({} more fields)", item.fields.len() - shown);
					break;
				}
				match &field.value {
					Value::Stop => println!("{pad}  {} {}: -", field.id, field.ttype.name()),
					Value::Data(bytes) => {
						println!("{pad}  {} {}: {}", field.id, field.ttype.name(), render_data(field.ttype, bytes, opt));
					}
					nested => {
						println!("{pad}  {} {}:", field.id, field.ttype.name());
						print_value(field.ttype, nested, indent + 2, depth + 1, opt);
					}
				}
			}
		}
		Value::Map(map) => {
			println!("{pad}map<{}, {}> ({} entries):", map.key_type.name(), map.value_type.name(), map.entries.len());
			for (shown, entry) in map.entries.iter().enumerate() {
				if shown == opt.max_elements {
					println!("{pad}  ... ({} more entries)", map.entries.len() - shown);
					break;
				}
				println!("{pad}  key:");
				print_value(map.key_type, &entry.key, indent + 2, depth + 1, opt);
				println!("{pad}  value:");
				print_value(map.value_type, &entry.value, indent + 2, depth + 1, opt);
			}
		}
		Value::List(list) => {
			println!("{pad}{}<{}> ({} elements):", list.kind.name(), list.elem_type.name(), list.elements.len());
			for (shown, elem) in list.elements.iter().enumerate() {
				if shown == opt.max_elements {
					println!("{pad}  ... ({} more elements)", list.elements.len() - shown);
					break;
				}
				print_value(list.elem_type, elem, indent + 1, depth + 1, opt);
			}
		}
	}
}

fn render_data(ttype: ThriftType, bytes: &[u8], opt: PrintOptions) -> String {
	match decode_scalar(ttype, bytes) {
		Some(Scalar::Bool(v)) => v.to_string(),
		Some(Scalar::I64(v)) => v.to_string(),
		Some(Scalar::F64(v)) => v.to_string(),
		Some(Scalar::Bytes(raw)) => render_bytes(raw, opt),
		None => format!("<{} raw bytes>", bytes.len()),
	}
}

fn render_bytes(raw: &[u8], opt: PrintOptions) -> String {
	match std::str::from_utf8(raw) {
		Ok(text) if text.chars().count() <= opt.max_string_len => format!("{text:?}"),
		Ok(text) => {
			let clipped: String = text.chars().take(opt.max_string_len).collect();
			format!("{clipped:?}..")
		}
		Err(_) => {
			let mut out = String::from("0x");
			for byte in raw.iter().take(opt.max_elements) {
				out.push_str(&format!("{byte:02x}"));
			}
			if raw.len() > opt.max_elements {
				out.push_str("..");
			}
			out
		}
	}
}
