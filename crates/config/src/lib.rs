//! Optional configuration for the type reference resolver.
//!
//! A `.graphql-types.yml` (or `.yaml` / `.json`) file next to the project
//! can replace the type policy and choose which document files are loaded:
//!
//! ```yaml
//! policy:
//!   denylist: [_VInputParsingError_]
//!   forcedInclude: [Common_GovernmentId]
//! documents:
//!   extensions: [graphql, gql]
//! ```

mod config;
mod error;
mod loader;

pub use config::{DocumentsConfig, PolicyConfig, TypesConfig, DEFAULT_DOCUMENT_EXTENSIONS};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str};
