use std::fmt;

use crate::ident::to_go_sanitized;

/// The Go import path of the package a `.proto` file is generated into.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GoImportPath(String);

impl GoImportPath {
    pub fn new(path: impl Into<String>) -> Self {
        GoImportPath(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the path has at least one `.` or `/`.
    ///
    /// A bare word is almost always a package name given where an import path was expected.
    pub fn is_qualified(&self) -> bool {
        self.0.contains('.') || self.0.contains('/')
    }

    /// The last element of the path.
    pub fn base(&self) -> &str {
        let trimmed = self.0.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }

    /// Joins `name` onto the import path with a `/`.
    pub fn join(&self, name: &str) -> String {
        if self.0.is_empty() {
            name.to_owned()
        } else {
            format!("{}/{}", self.0.trim_end_matches('/'), name)
        }
    }
}

impl fmt::Display for GoImportPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The name in the `package` clause of a generated Go file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GoPackageName(String);

impl GoPackageName {
    /// Construct a package name from a user-supplied name, sanitizing it into a Go identifier.
    pub fn new(name: &str) -> Self {
        GoPackageName(to_go_sanitized(name))
    }

    /// Derive the package name from the last element of an import path.
    pub fn from_import_path(path: &GoImportPath) -> Self {
        GoPackageName::new(path.base())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoPackageName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a `go_package` option value (or an `M` parameter value) into its import path and
/// explicit package name.
///
/// The two halves are separated by the last `;`. Either half may be empty.
pub fn split_go_package(value: &str) -> (&str, &str) {
    match value.rfind(';') {
        Some(idx) => (&value[..idx], &value[idx + 1..]),
        None => (value, ""),
    }
}
