//! Loading the schema and operation documents named on the command line.

use crate::ExitCode;
use apollo_compiler::{ast, Schema};
use graphql_introspect::{introspection_json_to_sdl, IntrospectionError};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read schema {}: {source}", .path.display())]
    SchemaRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid introspection result in {}: {source}", .path.display())]
    Introspection {
        path: PathBuf,
        source: IntrospectionError,
    },

    #[error("Invalid schema {}:\n{message}", .path.display())]
    Schema { path: PathBuf, message: String },

    #[error("Invalid document pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to match documents: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Failed to walk document directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to parse {}:\n{message}", .path.display())]
    Document { path: PathBuf, message: String },
}

impl LoadError {
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::SchemaRead { .. } | Self::Introspection { .. } | Self::Schema { .. } => {
                ExitCode::SchemaError
            }
            Self::Pattern { .. } => ExitCode::UsageError,
            Self::Io { .. } | Self::Glob(_) | Self::Walk(_) => ExitCode::IoError,
            Self::Document { .. } => ExitCode::ParseError,
        }
    }
}

/// Load a schema from SDL, or from an introspection result when the file
/// has a `.json` extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_schema(path: &Path) -> Result<Schema, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;

    let is_introspection = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let sdl = if is_introspection {
        tracing::debug!("Converting introspection result to SDL");
        introspection_json_to_sdl(&contents).map_err(|source| LoadError::Introspection {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        contents
    };

    let schema = Schema::parse(sdl, path).map_err(|with_errors| LoadError::Schema {
        path: path.to_path_buf(),
        message: with_errors.errors.to_string(),
    })?;
    tracing::debug!(types = schema.types.len(), "Schema loaded");
    Ok(schema)
}

/// Load every document `pattern` names and merge their definitions, in
/// file order, into one document.
///
/// `pattern` may be a directory (searched recursively for `extensions`),
/// a single file, or a glob. Matching nothing yields an empty document.
#[tracing::instrument(skip(extensions))]
pub fn load_documents(pattern: &str, extensions: &[String]) -> Result<ast::Document, LoadError> {
    let files = find_document_files(pattern, extensions)?;
    tracing::debug!(files = files.len(), "Document files found");

    let mut merged = ast::Document::new();
    for file in &files {
        let source = fs::read_to_string(file).map_err(|source| LoadError::Io {
            path: file.clone(),
            source,
        })?;
        if source.trim().is_empty() {
            tracing::trace!(path = %file.display(), "Skipping empty document");
            continue;
        }

        let document =
            ast::Document::parse(source, file).map_err(|with_errors| LoadError::Document {
                path: file.clone(),
                message: with_errors.errors.to_string(),
            })?;
        merged.definitions.extend(document.definitions);
    }

    tracing::debug!(definitions = merged.definitions.len(), "Documents merged");
    Ok(merged)
}

fn find_document_files(pattern: &str, extensions: &[String]) -> Result<Vec<PathBuf>, LoadError> {
    let path = Path::new(pattern);
    if path.is_dir() {
        return walk_directory(path, extensions);
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let paths = glob::glob(pattern).map_err(|source| LoadError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in paths {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn walk_directory(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
