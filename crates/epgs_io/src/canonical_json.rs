//! Canonical JSON (spec §4.1).
//! - Objects: keys sorted lexicographically (UTF-8 byte order) at every depth
//! - Arrays: order preserved (caller responsible for stable ordering)
//! - Output: compact (no extra spaces), ASCII-only, no trailing newline
//! - Numbers: serde_json's formatter (ryu-backed for floats) — shortest
//!   round-trip decimal, identical across platforms for a given f64 bit
//!   pattern; this is what makes fixed-width floats in scenarios hash
//!   identically everywhere.
//!
//! Grounded on `vm_io::canonical_json::write_canonical_value`.

#![forbid(unsafe_code)]

use serde::Serialize;
use serde_json::Value;

use crate::IoError;

/// Convert any `Serialize` value into canonical JSON bytes.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, IoError> {
    let v = serde_json::to_value(value)?;
    Ok(to_canonical_json_bytes(&v))
}

/// Convert a `serde_json::Value` to canonical JSON bytes (compact, ASCII-only,
/// no trailing newline).
pub fn to_canonical_json_bytes(v: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(256);
    write_canonical_value(v, &mut out);
    out
}

/// Convenience: canonical JSON as a `String`.
pub fn canonical_json_string(v: &Value) -> String {
    // `write_canonical_value` only ever emits ASCII bytes (strings are
    // escaped through `serde_json::to_string`, which escapes non-ASCII).
    String::from_utf8(to_canonical_json_bytes(v)).expect("canonical JSON is always valid UTF-8")
}

fn write_canonical_value(v: &Value, out: &mut Vec<u8>) {
    match v {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
        Value::Number(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Value::String(s) => write_ascii_escaped_string(s, out),
        Value::Array(arr) => {
            out.push(b'[');
            for (i, elem) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical_value(elem, out);
            }
            out.push(b']');
        }
        Value::Object(map) => {
            out.push(b'{');
            let mut keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
            keys.sort_unstable();
            for (i, k) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_ascii_escaped_string(k, out);
                out.push(b':');
                write_canonical_value(&map[k], out);
            }
            out.push(b'}');
        }
    }
}

/// Write a JSON string literal with all non-ASCII code points escaped
/// (`\uXXXX`, surrogate pairs for astral codepoints), per spec §4.1.
fn write_ascii_escaped_string(s: &str, out: &mut Vec<u8>) {
    out.push(b'"');
    for c in s.chars() {
        match c {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            c if (c as u32) < 0x20 => {
                out.extend_from_slice(format!("\\u{:04x}", c as u32).as_bytes());
            }
            c if c.is_ascii() => out.push(c as u8),
            c => {
                let cp = c as u32;
                if cp <= 0xFFFF {
                    out.extend_from_slice(format!("\\u{cp:04x}").as_bytes());
                } else {
                    // Encode as a UTF-16 surrogate pair.
                    let v = cp - 0x10000;
                    let hi = 0xD800 + (v >> 10);
                    let lo = 0xDC00 + (v & 0x3FF);
                    out.extend_from_slice(format!("\\u{hi:04x}\\u{lo:04x}").as_bytes());
                }
            }
        }
    }
    out.push(b'"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_are_sorted_arrays_preserved() {
        let v = json!({
            "b": 1,
            "a": { "y": 1, "x": 2 },
            "arr": [ {"k":2,"j":1}, 3, "z" ]
        });
        let s = canonical_json_string(&v);
        assert_eq!(s, r#"{"a":{"x":2,"y":1},"arr":[{"j":1,"k":2},3,"z"],"b":1}"#);
    }

    #[test]
    fn no_trailing_newline_no_whitespace() {
        let v = json!({"a": 1, "b": 2});
        let bytes = to_canonical_json_bytes(&v);
        assert!(!bytes.ends_with(b"\n"));
        assert!(!bytes.contains(&b' '));
    }

    #[test]
    fn non_ascii_is_escaped() {
        let v = json!({"name": "café"});
        let s = canonical_json_string(&v);
        assert!(s.is_ascii());
        assert_eq!(s, r#"{"name":"caf\u00e9"}"#);
    }

    #[test]
    fn is_a_function_of_key_order() {
        let a = json!({"x": 1, "y": 2});
        let b = json!({"y": 2, "x": 1});
        assert_eq!(canonical_json_string(&a), canonical_json_string(&b));
    }

    #[test]
    fn floats_round_trip_shortest_form() {
        let v = json!({"phi": 0.75, "rate": 0.05});
        let s = canonical_json_string(&v);
        assert_eq!(s, r#"{"phi":0.75,"rate":0.05}"#);
    }
}
