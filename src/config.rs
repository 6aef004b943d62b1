use std::collections::HashMap;

use log::warn;

use crate::error::{Error, Result};
use crate::go_package::{split_go_package, GoImportPath};

/// Import paths containing this substring belong to the organization; only their files get
/// helpers.
pub const DEFAULT_NAMESPACE: &str = "go.temporal.io";

/// How output filenames are derived from input files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathType {
    /// Output goes under the directory named after the Go import path.
    #[default]
    Import,
    /// Output goes next to the input `.proto` file.
    SourceRelative,
}

/// Configuration options for the plugin.
///
/// Built from the parameter string `protoc` passes along (`--go-helpers_opt=...`).
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) namespace: String,
    pub(crate) paths: PathType,
    pub(crate) module: Option<String>,
    pub(crate) import_paths: HashMap<String, GoImportPath>,
    pub(crate) package_names: HashMap<String, String>,
}

impl Config {
    /// Creates a new plugin configuration with default options.
    pub fn new() -> Config {
        Config::default()
    }

    /// Creates a configuration from a comma separated list of `key=value` options.
    ///
    /// Recognized options:
    ///
    ///  - `paths=import` or `paths=source_relative`
    ///  - `module=<prefix>`, stripped from every output filename
    ///  - `M<file.proto>=<import path>[;<package name>]`
    ///  - `annotate_code`, accepted for compatibility and ignored
    ///
    /// Unrecognized options are logged and ignored.
    pub fn new_from_opts(opts: &str) -> Result<Config> {
        let mut config = Config::new();
        for opt in opts.split(',').map(str::trim).filter(|opt| !opt.is_empty()) {
            let (key, value) = match opt.find('=') {
                Some(idx) => (&opt[..idx], &opt[idx + 1..]),
                None => (opt, ""),
            };
            match key {
                "paths" => {
                    config.paths = match value {
                        "import" => PathType::Import,
                        "source_relative" => PathType::SourceRelative,
                        _ => {
                            return Err(Error::plugin_init(format!(
                                r#"unknown path type {:?}: want "import" or "source_relative""#,
                                value
                            )))
                        }
                    };
                }
                "module" => config.module = Some(value.to_owned()),
                "annotate_code" => {}
                _ if key.len() > 1 && key.starts_with('M') => {
                    config.map_file(&key[1..], value);
                }
                _ => warn!("ignoring unknown parameter: {:?}", opt),
            }
        }
        Ok(config)
    }

    /// Configures the substring an import path must contain for its files to receive helpers.
    pub fn namespace(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.namespace = namespace.into();
        self
    }

    /// Configures how output filenames are derived.
    pub fn paths(&mut self, paths: PathType) -> &mut Self {
        self.paths = paths;
        self
    }

    /// Configures a prefix stripped from every output filename.
    pub fn module(&mut self, module: impl Into<String>) -> &mut Self {
        self.module = Some(module.into());
        self
    }

    /// Overrides the Go import path, and optionally the package name, of a `.proto` file.
    ///
    /// `value` has the same `<import path>[;<package name>]` form as the `go_package` option.
    pub fn map_file(&mut self, proto_file: &str, value: &str) -> &mut Self {
        let (import_path, package_name) = split_go_package(value);
        if !import_path.is_empty() {
            self.import_paths
                .insert(proto_file.to_owned(), GoImportPath::new(import_path));
        }
        if !package_name.is_empty() {
            self.package_names
                .insert(proto_file.to_owned(), package_name.to_owned());
        }
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            paths: PathType::default(),
            module: None,
            import_paths: HashMap::new(),
            package_names: HashMap::new(),
        }
    }
}
