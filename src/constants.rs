//! Common constants used throughout monogen.

/// Template directory shipped with the crate, used when `--template` is not given.
pub const DEFAULT_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Project name used when none is given on the command line.
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Scope emitted when sanitization leaves nothing behind.
pub const DEFAULT_SCOPE: &str = "my-app";

/// Optional ignore file read from the template root
pub const IGNORE_FILE: &str = ".monogenignore";

/// Dependency cache directory never traversed by the rewriters
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Manifest file name of every package
pub const MANIFEST_FILE: &str = "package.json";

/// Version constraint written for in-repo dependencies
pub const WORKSPACE_LINK: &str = "workspace:*";

/// Manifest sections holding dependency-name to version-constraint mappings
pub const DEPENDENCY_SECTIONS: [&str; 3] = ["dependencies", "devDependencies", "peerDependencies"];

/// Root manifest scripts that reference workspace packages by name
pub const REWRITTEN_SCRIPTS: [&str; 2] = ["dev", "build"];

/// Extensions of source files whose cross-package imports get rewritten
pub const SOURCE_EXTENSIONS: [&str; 6] = [".ts", ".tsx", ".js", ".jsx", ".mts", ".cts"];

/// File name suffixes of text files that carry placeholder tokens
pub const TEXT_EXTENSIONS: [&str; 10] =
    [".ts", ".tsx", ".js", ".jsx", ".json", ".md", ".yaml", ".yml", ".env", ".d.ts"];

/// Placeholder replaced with the project name
pub const PROJECT_NAME_TOKEN: &str = "__PROJECT_NAME__";

/// Placeholder replaced with the scope
pub const SCOPE_TOKEN: &str = "__SCOPE__";

/// Placeholder replaced with the database identifier
pub const DB_NAME_TOKEN: &str = "__DB_NAME__";
