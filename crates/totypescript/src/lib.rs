//! Convert JavaScript and CoffeeScript sources to TypeScript.
//!
//! The pieces, leaves first:
//! - [`source`]: opening documents and persisting results
//! - [`adapter`]: per-language views of a document (content + logical name)
//! - [`apply`]: running one transform over one document and saving it
//! - [`batch`]: walking a tree and collecting a [`batch::BatchOutcome`]
//! - [`commands`]: the CLI surface

pub mod adapter;
pub mod apply;
pub mod batch;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod source;

pub use apply::{Applied, Applier, TransformKind};
pub use batch::{BatchDriver, BatchOutcome};
pub use config::Config;
pub use error::TransformError;
pub use source::{Language, SourceUnit};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TOTYPESCRIPT_LOG";

/// Initialize tracing on stderr, filtered by `TOTYPESCRIPT_LOG`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "totypescript=debug,totypescript_transforms=debug,totypescript_tools=debug"
    } else {
        "totypescript=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
