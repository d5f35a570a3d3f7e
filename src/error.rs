use thiserror::Error;

/// An error caused by the user rather than by the program.
///
/// The operation that raised it must be abandoned and rolled back, and the
/// message shown to the user as a warning. `debug` carries the details for
/// logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}\n----------------------------------\n{debug}")]
pub struct UserError {
	pub message: String,
	pub debug: String,
}

impl UserError {
	pub fn new(message: impl Into<String>, debug: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			debug: debug.into(),
		}
	}
}
