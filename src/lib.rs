//! gitbar application library
//!
//! Exposes the command-line host (arguments, config, adapters) for testing
//! and for embedding the dispatcher elsewhere.

pub mod adapters;
pub mod cli;
pub mod config;

use anyhow::Result;
use gitbar_core::ports::{Notifier, ProcessSpawner};
use gitbar_core::{ContextResolver, Dispatcher};
use std::sync::Arc;

use crate::adapters::{fs::FsMarkerLookup, locator::InstallLocator, workspace::SessionWorkspace};
use crate::cli::CliArgs;
use crate::config::Config;

/// Wires the filesystem-backed resolver to the given spawner and notifier.
///
/// This is the composition root shared by `main` and the integration tests.
pub fn build_dispatcher(
    cli_args: &CliArgs,
    config: &Config,
    spawner: Arc<dyn ProcessSpawner>,
    notifier: Arc<dyn Notifier>,
) -> Result<Dispatcher> {
    let workspace = SessionWorkspace::from_cli(cli_args)?;
    let locator = InstallLocator::from_config(&config.tools);

    let resolver = ContextResolver::new(
        Arc::new(workspace),
        Arc::new(locator),
        Arc::new(FsMarkerLookup),
    )
    .with_marker(config.repository.marker.clone());

    Ok(Dispatcher::new(resolver, spawner, notifier))
}
