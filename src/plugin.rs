//! The plugin's view of a `CodeGeneratorRequest`.
//!
//! Every `.proto` file in the request is resolved to the Go package it is generated into, and
//! flagged for generation if `protoc` asked for it.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use log::debug;
use prost_types::compiler::CodeGeneratorRequest;
use prost_types::FileDescriptorProto;

use crate::config::{Config, PathType};
use crate::error::{Error, Result};
use crate::go_package::{split_go_package, GoImportPath, GoPackageName};

const GO_PACKAGE_DOCS: &str =
    "See https://protobuf.dev/reference/go/go-generated#package for more information.";

/// A `.proto` file described by the request.
#[derive(Clone, Debug)]
pub struct File {
    pub proto: FileDescriptorProto,
    /// Whether `protoc` asked for code to be generated for this file, as opposed to it being
    /// present only as a dependency.
    pub generate: bool,
    pub go_import_path: GoImportPath,
    pub go_package_name: GoPackageName,
    /// Output path of generated files, minus the extension.
    pub generated_filename_prefix: String,
}

impl File {
    pub fn name(&self) -> &str {
        self.proto.name()
    }
}

/// Resolves every file in `request` against `config`.
///
/// Files are returned in request order, which `protoc` guarantees to be topological.
pub fn resolve_files(config: &Config, request: CodeGeneratorRequest) -> Result<Vec<File>> {
    let to_generate: HashSet<&str> = request.file_to_generate.iter().map(String::as_str).collect();
    let described: HashSet<&str> = request.proto_file.iter().map(|file| file.name()).collect();
    if let Some(missing) = request
        .file_to_generate
        .iter()
        .find(|name| !described.contains(name.as_str()))
    {
        return Err(Error::plugin_init(format!(
            "no descriptor for generated file: {}",
            missing
        )));
    }

    let mut package_names: HashMap<GoImportPath, (GoPackageName, String)> = HashMap::new();
    let mut files = Vec::with_capacity(request.proto_file.len());

    for proto in &request.proto_file {
        let name = proto.name();
        let go_import_path = resolve_import_path(config, proto)?;
        let go_package_name = resolve_package_name(config, proto, &go_import_path);

        match package_names.entry(go_import_path.clone()) {
            Entry::Occupied(entry) => {
                let (other_package, other_file) = entry.get();
                if *other_package != go_package_name {
                    return Err(Error::plugin_init(format!(
                        "Go package {} has inconsistent names {} ({}) and {} ({})",
                        go_import_path, other_package, other_file, go_package_name, name
                    )));
                }
            }
            Entry::Vacant(entry) => {
                entry.insert((go_package_name.clone(), name.to_owned()));
            }
        }

        let generate = to_generate.contains(name);
        let generated_filename_prefix =
            generated_filename_prefix(config.paths, name, &go_import_path);

        debug!(
            "file: {:?}, import path: {}, package: {}, generate: {}",
            name, go_import_path, go_package_name, generate
        );

        files.push(File {
            proto: proto.clone(),
            generate,
            go_import_path,
            go_package_name,
            generated_filename_prefix,
        });
    }

    Ok(files)
}

fn resolve_import_path(config: &Config, proto: &FileDescriptorProto) -> Result<GoImportPath> {
    let name = proto.name();
    let import_path = match config.import_paths.get(name) {
        Some(path) => path.clone(),
        None => GoImportPath::new(split_go_package(go_package_option(proto)).0),
    };

    if import_path.is_empty() {
        return Err(Error::plugin_init(format!(
            "unable to determine Go import path for {:?}\n\n\
             Please specify either:\n\
             \t• a \"go_package\" option in the .proto source file, or\n\
             \t• a \"M\" argument on the command line.\n\n{}",
            name, GO_PACKAGE_DOCS
        )));
    }
    if !import_path.is_qualified() {
        return Err(Error::plugin_init(format!(
            "invalid Go import path {:?} for {:?}\n\n\
             The import path must contain at least one period ('.') or path separator ('/') \
             character.\n\n{}",
            import_path.as_str(),
            name,
            GO_PACKAGE_DOCS
        )));
    }
    Ok(import_path)
}

fn resolve_package_name(
    config: &Config,
    proto: &FileDescriptorProto,
    import_path: &GoImportPath,
) -> GoPackageName {
    let explicit = config
        .package_names
        .get(proto.name())
        .map(String::as_str)
        .unwrap_or_else(|| split_go_package(go_package_option(proto)).1);
    if explicit.is_empty() {
        GoPackageName::from_import_path(import_path)
    } else {
        GoPackageName::new(explicit)
    }
}

fn go_package_option(proto: &FileDescriptorProto) -> &str {
    proto
        .options
        .as_ref()
        .map(|options| options.go_package())
        .unwrap_or("")
}

/// The file name without its `.proto` extension, placed according to `paths`.
fn generated_filename_prefix(paths: PathType, name: &str, import_path: &GoImportPath) -> String {
    let stem = name
        .strip_suffix(".proto")
        .or_else(|| name.strip_suffix(".protodevel"))
        .unwrap_or(name);
    match paths {
        PathType::Import => {
            let base = stem.rsplit('/').next().unwrap_or(stem);
            import_path.join(base)
        }
        PathType::SourceRelative => stem.to_owned(),
    }
}
