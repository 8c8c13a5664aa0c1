// openmeta-core/src/ports/error.rs

use miette::Diagnostic;
use thiserror::Error;

/// Failures raised by a remote metadata client.
///
/// The exchange services never build, catch or translate these: they reach the
/// connector exactly as the client produced them.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Invalid parameter '{parameter}': {message}")]
    #[diagnostic(code(openmeta::remote::invalid_parameter))]
    InvalidParameter { parameter: String, message: String },

    #[error("User '{user_id}' is not authorized: {message}")]
    #[diagnostic(code(openmeta::remote::user_not_authorized))]
    UserNotAuthorized { user_id: String, message: String },

    #[error("Metadata server error: {message}")]
    #[diagnostic(
        code(openmeta::remote::property_server),
        help("The remote metadata server failed; check its audit log.")
    )]
    PropertyServer { message: String },
}
