use std::fmt;

use crate::plugin::File;

/// Why a file does not get helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    /// The file is only present as a dependency of the requested files.
    NotRequested,
    /// The file's Go package is outside the organization's namespace.
    ForeignPackage,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::NotRequested => f.write_str("not requested"),
            Skip::ForeignPackage => f.write_str("foreign package"),
        }
    }
}

/// Decides whether helpers are generated for `file`.
///
/// A file is eligible when `protoc` asked for it and its Go import path contains `namespace`.
pub fn check(file: &File, namespace: &str) -> Result<(), Skip> {
    if !file.generate {
        Err(Skip::NotRequested)
    } else if !file.go_import_path.as_str().contains(namespace) {
        Err(Skip::ForeignPackage)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go_package::{GoImportPath, GoPackageName};

    fn file(import_path: &str, generate: bool) -> File {
        let go_import_path = GoImportPath::new(import_path);
        File {
            proto: Default::default(),
            generate,
            go_package_name: GoPackageName::from_import_path(&go_import_path),
            generated_filename_prefix: go_import_path.join("x"),
            go_import_path,
        }
    }

    #[test]
    fn test_check() {
        assert_eq!(Ok(()), check(&file("go.temporal.io/api/foo", true), "go.temporal.io"));
        assert_eq!(
            Err(Skip::NotRequested),
            check(&file("go.temporal.io/api/baz", false), "go.temporal.io")
        );
        assert_eq!(
            Err(Skip::ForeignPackage),
            check(&file("github.com/other/bar", true), "go.temporal.io")
        );
        assert_eq!(
            Err(Skip::NotRequested),
            check(&file("github.com/other/bar", false), "go.temporal.io")
        );
        // Substring, not prefix, match.
        assert_eq!(
            Ok(()),
            check(&file("example.com/mirror/go.temporal.io/api", true), "go.temporal.io")
        );
    }
}
