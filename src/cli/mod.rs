mod handlers;
pub mod parse;

use std::process::ExitCode;

pub use handlers::config;
pub use parse::Cli;

use crate::{core::error::GraphError, render::Renderer};

/// Dispatch a parsed command line. `--help` reports failure, like any
/// invocation that did not plot.
pub fn run(cli: &Cli) -> Result<ExitCode, GraphError> {
    let renderer = if cli.ascii {
        Renderer::ascii()
    } else {
        Renderer::unicode()
    };

    if cli.help {
        handlers::help(&renderer)?;
        return Ok(ExitCode::FAILURE);
    }
    if cli.showcase {
        handlers::tour(&renderer)?;
        return Ok(ExitCode::SUCCESS);
    }
    handlers::plot(cli, &renderer)?;
    Ok(ExitCode::SUCCESS)
}
