//! Plugin errors.

use std::error;
use std::fmt;
use std::io;

use prost::{DecodeError, EncodeError};

/// A specialized `Result` type for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while running the plugin.
///
/// `RequestDecode`, `ResponseEncode` and `Io` are process-level failures: the binary reports them
/// on stderr and exits with a non-zero status. Every other variant is a generation failure and is
/// handed back to `protoc` through `CodeGeneratorResponse.error`.
#[derive(Debug)]
pub enum Error {
    /// The bytes read from stdin are not a valid `CodeGeneratorRequest`.
    RequestDecode(DecodeError),
    /// The request is inconsistent, or the plugin parameter is invalid.
    PluginInit(String),
    /// The helper template could not be parsed or instantiated.
    TemplateExpansion(String),
    /// Two eligible files would be written to the same output file.
    DuplicateOutput {
        filename: String,
        first: String,
        second: String,
    },
    /// A generated filename does not live under the `module=` prefix.
    ModulePrefix { filename: String, module: String },
    /// The `CodeGeneratorResponse` could not be encoded.
    ResponseEncode(EncodeError),
    /// Reading stdin or writing stdout failed.
    Io(io::Error),
}

impl Error {
    pub(crate) fn plugin_init(msg: impl Into<String>) -> Error {
        Error::PluginInit(msg.into())
    }

    pub(crate) fn template(msg: impl Into<String>) -> Error {
        Error::TemplateExpansion(msg.into())
    }

    /// Whether the error should be reported through the response rather than by aborting the
    /// process.
    pub fn is_generation_error(&self) -> bool {
        !matches!(
            self,
            Error::RequestDecode(_) | Error::ResponseEncode(_) | Error::Io(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RequestDecode(error) => {
                write!(f, "invalid CodeGeneratorRequest: {}", error)
            }
            Error::PluginInit(msg) => f.write_str(msg),
            Error::TemplateExpansion(msg) => write!(f, "helper template: {}", msg),
            Error::DuplicateOutput {
                filename,
                first,
                second,
            } => write!(
                f,
                "{:?} and {:?} both generate {:?}",
                first, second, filename
            ),
            Error::ModulePrefix { filename, module } => write!(
                f,
                "{}: generated file does not match prefix {:?}",
                filename, module
            ),
            Error::ResponseEncode(error) => {
                write!(f, "failed to encode CodeGeneratorResponse: {}", error)
            }
            Error::Io(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::RequestDecode(error) => Some(error),
            Error::ResponseEncode(error) => Some(error),
            Error::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Error {
        Error::RequestDecode(error)
    }
}

impl From<EncodeError> for Error {
    fn from(error: EncodeError) -> Error {
        Error::ResponseEncode(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}
