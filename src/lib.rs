//! `protoc-gen-go-helpers` is a `protoc` plugin which adds `Marshal`, `Unmarshal` and `Equal`
//! methods to the Go structs `protoc-gen-go` generates for an organization's messages.
//!
//! For every requested `.proto` file whose Go import path contains `go.temporal.io`, the plugin
//! writes a companion `<name>.go-helpers.go` file into the same Go package:
//!
//! ```go
//! func (val *WorkflowExecution) Marshal() ([]byte, error)
//! func (val *WorkflowExecution) Unmarshal(buf []byte) error
//! func (this *WorkflowExecution) Equal(that interface{}) bool
//! ```
//!
//! Files pulled in only as dependencies, and files of third-party packages, are left alone.
//!
//! ## Usage
//!
//! ```bash
//! $ protoc --go_out=. --go-helpers_out=. --go-helpers_opt=paths=source_relative \
//!     temporal/api/common/v1/message.proto
//! ```
//!
//! The options understood by the plugin are documented on [`Config::new_from_opts`].

mod code_generator;
mod config;
mod error;
mod filter;
mod go_package;
mod ident;
mod plugin;
mod template;

use itertools::Itertools;
use log::{debug, error};
use prost::Message;
use prost_types::compiler::code_generator_response::{self, Feature};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

pub use crate::code_generator::FILE_SUFFIX;
pub use crate::config::{Config, PathType, DEFAULT_NAMESPACE};
pub use crate::error::{Error, Result};
pub use crate::go_package::{GoImportPath, GoPackageName};
pub use crate::plugin::File;
pub use crate::template::TemplateContext;

impl Config {
    /// Generates the companion files for `request`.
    ///
    /// Fails as a whole: either every eligible file is generated or an error is returned.
    pub fn generate(
        &self,
        request: CodeGeneratorRequest,
    ) -> Result<Vec<code_generator_response::File>> {
        debug!(
            "files to generate: {}",
            request.file_to_generate.iter().join(", ")
        );
        let files = plugin::resolve_files(self, request)?;
        code_generator::generate(self, &files)
    }

    /// Processes a `CodeGeneratorRequest` into the response to hand back to `protoc`.
    ///
    /// Generation errors are reported through the response's `error` field, in which case it
    /// carries no files. The plugin process itself does not abort on them: it still writes the
    /// response and exits with status 0, and `protoc` fails the compilation and prints the error.
    pub fn run_plugin(&self, request: CodeGeneratorRequest) -> CodeGeneratorResponse {
        response(self.generate(request))
    }
}

/// Runs the plugin with the configuration given by the request's `parameter`.
///
/// Every failure past decoding, including an invalid parameter or an inconsistent file graph, is
/// returned in the response's `error` field rather than aborting the process. Only failures to
/// decode the request or to encode and write the response make the binary exit with a non-zero
/// status.
pub fn run_plugin(request: CodeGeneratorRequest) -> CodeGeneratorResponse {
    match Config::new_from_opts(request.parameter()) {
        Ok(config) => config.run_plugin(request),
        Err(error) => response(Err(error)),
    }
}

/// Decodes a `CodeGeneratorRequest` read from `protoc`.
pub fn decode_request(buf: &[u8]) -> Result<CodeGeneratorRequest> {
    Ok(CodeGeneratorRequest::decode(buf)?)
}

/// Encodes a `CodeGeneratorResponse` for `protoc`.
pub fn encode_response(response: &CodeGeneratorResponse) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(response.encoded_len());
    response.encode(&mut out)?;
    Ok(out)
}

fn response(generated: Result<Vec<code_generator_response::File>>) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };
    match generated {
        Ok(files) => response.file = files,
        Err(err) => {
            debug_assert!(err.is_generation_error(), "process-level error: {}", err);
            error!("{}", err);
            response.error = Some(err.to_string());
        }
    }
    response
}
