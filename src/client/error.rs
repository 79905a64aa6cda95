//! Error taxonomy for the query pipeline.
//!
//! Every failure a fetch can hit is normalized into one of three kinds before
//! it reaches the notification sink; none of them are allowed to escape the
//! executor boundary.

use thiserror::Error;

use super::decode::DecodeError;

/// A failure anywhere on a query path.
#[derive(Clone, Debug, Error)]
pub enum ClientError {
	/// A property value failed to decode.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// The query endpoint answered with a non-success status. `message` is
	/// the response body, verbatim.
	#[error("query failed with status {status}: {message}")]
	Http { status: u16, message: String },
	/// The request never produced a response, or the body could not be read
	/// or parsed.
	#[error("request failed: {0}")]
	Transport(String),
}

impl ClientError {
	/// The string handed to the notification sink. HTTP failures surface the
	/// server's error body untouched; everything else uses the display form.
	pub fn user_message(&self) -> String {
		match self {
			ClientError::Http { message, .. } => message.clone(),
			other => other.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn http_error_surfaces_body_verbatim() {
		let err = ClientError::Http {
			status: 400,
			message: "syntax error at line 2".into(),
		};
		assert_eq!(err.user_message(), "syntax error at line 2");
	}

	#[test]
	fn decode_error_keeps_its_display_form() {
		let err = ClientError::from(DecodeError::NotUtf8("//4=".into()));
		assert_eq!(
			err.user_message(),
			"property value \"//4=\" decoded to non-UTF-8 bytes"
		);
	}

	#[test]
	fn transport_error_keeps_its_display_form() {
		let err = ClientError::Transport("connection refused".into());
		assert_eq!(err.user_message(), "request failed: connection refused");
	}
}
