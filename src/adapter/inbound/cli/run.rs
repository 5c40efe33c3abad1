//! Handler for a single order invocation.

use std::io;

use tracing::info;

use super::command::Cli;
use super::{output, paths};
use crate::application::{dispatch, Context, Outcome};
use crate::domain::Action;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_order_store;
use crate::infrastructure::config::Config;

/// Load configuration, dispatch the requested action, and print its result.
///
/// An unsupported action is reported before configuration is read.
///
/// # Errors
/// Configuration, validation, connection, statement and output errors.
pub async fn execute(cli: Cli) -> Result<()> {
    let action = cli.action();
    if let Action::Unsupported(_) = action {
        output::unsupported(&mut io::stdout().lock())?;
        return Ok(());
    }

    let mut config = Config::resolve(cli.config.as_deref(), &paths::default_config())?
        .with_env_overrides(|name| std::env::var(name).ok());
    if let Some(url) = &cli.database {
        config.database.url.clone_from(url);
    }
    config.init_logging(cli.verbose);

    let store = build_order_store(&config);
    let outcome = dispatch(&store, &action, &cli.options(), Context::from_env()).await?;

    let mut stdout = io::stdout().lock();
    match outcome {
        Outcome::Rows(result) => {
            info!(rows = result.rows().count(), "action completed");
            output::render(&mut stdout, &result)?;
        }
        Outcome::Unsupported(name) => {
            info!(action = %name, "action not supported");
            output::unsupported(&mut stdout)?;
        }
    }
    Ok(())
}
