//! Property-value decoding.
//!
//! The backend ships every property value base64-encoded. A value that fails
//! to decode aborts conversion of the whole result; partial elements are
//! never produced.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use thiserror::Error;

/// A property value that was not validly encoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
	#[error("property value {0:?} is not valid base64: {1}")]
	NotBase64(String, String),
	#[error("property value {0:?} decoded to non-UTF-8 bytes")]
	NotUtf8(String),
}

/// Decode one encoded property value into its display string.
pub fn decode_property(encoded: &str) -> Result<String, DecodeError> {
	let bytes = STANDARD
		.decode(encoded)
		.map_err(|e| DecodeError::NotBase64(encoded.to_string(), e.to_string()))?;
	let decoded =
		String::from_utf8(bytes).map_err(|_| DecodeError::NotUtf8(encoded.to_string()))?;
	debug!("decoded property {encoded:?} -> {decoded:?}");
	Ok(decoded)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_standard_base64() {
		assert_eq!(decode_property("QWxpY2U=").unwrap(), "Alice");
		assert_eq!(decode_property("").unwrap(), "");
	}

	#[test]
	fn decode_is_deterministic() {
		let first = decode_property("Qm9i").unwrap();
		let second = decode_property("Qm9i").unwrap();
		assert_eq!(first, second);
		assert_eq!(first, "Bob");
	}

	#[test]
	fn rejects_invalid_base64() {
		let err = decode_property("not base64!").unwrap_err();
		assert!(matches!(err, DecodeError::NotBase64(..)));
	}

	#[test]
	fn rejects_non_utf8_payload() {
		// 0xFF 0xFE is valid base64 content but not valid UTF-8.
		let err = decode_property("//4=").unwrap_err();
		assert!(matches!(err, DecodeError::NotUtf8(..)));
	}
}
