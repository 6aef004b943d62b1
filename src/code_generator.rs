use itertools::Itertools;
use log::{debug, trace};
use prost_types::compiler::code_generator_response;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filter;
use crate::ident::to_go_camel;
use crate::plugin::File;
use crate::template::TemplateContext;

/// Suffix appended to the generated filename prefix of every companion file.
pub const FILE_SUFFIX: &str = ".go-helpers.go";

/// Generates the companion file of every eligible file, in the order given.
pub fn generate(config: &Config, files: &[File]) -> Result<Vec<code_generator_response::File>> {
    let mut outputs = Vec::new();
    for file in files {
        match filter::check(file, &config.namespace) {
            Ok(()) => outputs.push((output_filename(config, file)?, file)),
            Err(skip) => debug!("skipping {:?}: {}", file.name(), skip),
        }
    }

    if let Some(filename) = outputs.iter().map(|(name, _)| name).duplicates().next() {
        let mut sources = outputs
            .iter()
            .filter(|(name, _)| name == filename)
            .map(|(_, file)| file.name().to_owned());
        return Err(Error::DuplicateOutput {
            filename: filename.clone(),
            first: sources.next().unwrap_or_default(),
            second: sources.next().unwrap_or_default(),
        });
    }

    let mut generated = Vec::with_capacity(outputs.len());
    for (name, file) in outputs {
        let mut buf = String::new();
        CodeGenerator::generate(file, &mut buf)?;

        debug!("generated {:?} from {:?}", name, file.name());
        generated.push(code_generator_response::File {
            name: Some(name),
            content: Some(buf),
            ..Default::default()
        });
    }

    Ok(generated)
}

fn output_filename(config: &Config, file: &File) -> Result<String> {
    let name = format!("{}{}", file.generated_filename_prefix, FILE_SUFFIX);
    match config.module {
        Some(ref module) => {
            let prefix = format!("{}/", module);
            match name.strip_prefix(&prefix) {
                Some(stripped) => Ok(stripped.to_owned()),
                None => Err(Error::ModulePrefix {
                    filename: name,
                    module: module.clone(),
                }),
            }
        }
        None => Ok(name),
    }
}

struct CodeGenerator<'a> {
    file: &'a File,
    buf: &'a mut String,
}

impl<'a> CodeGenerator<'a> {
    fn generate(file: &'a File, buf: &'a mut String) -> Result<()> {
        let mut code_gen = CodeGenerator { file, buf };

        code_gen.append_header();
        for message in &file.proto.message_type {
            code_gen.append_helpers(message.name())?;
        }
        Ok(())
    }

    fn append_header(&mut self) {
        self.buf
            .push_str("// Code generated by protoc-gen-go-helpers. DO NOT EDIT.\n");
        self.buf.push_str("// source: ");
        self.buf.push_str(self.file.name());
        self.buf.push_str("\n\npackage ");
        self.buf.push_str(self.file.go_package_name.as_str());
        self.buf
            .push_str("\n\nimport \"google.golang.org/protobuf/proto\"\n");
    }

    fn append_helpers(&mut self, message_name: &str) -> Result<()> {
        let type_name = to_go_camel(message_name);
        trace!("  message: {:?}, type: {}", message_name, type_name);

        TemplateContext {
            type_name: &type_name,
        }
        .expand(self.buf)
    }
}
