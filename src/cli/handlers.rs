use std::{io, time::Instant};

use clap::CommandFactory;

use crate::{
    core::{
        color::AnsiCode, config::RenderConfig, data::read_values, error::GraphError,
    },
    render::Renderer,
    showcase,
};

use super::parse::Cli;

/// Build the render configuration the flags describe.
pub fn config(cli: &Cli) -> Result<RenderConfig, GraphError> {
    Ok(RenderConfig::builder()
        .rows(cli.height)
        .columns(cli.width)
        .boxed(!cli.no_box)
        .color(!cli.no_color)
        .fill(AnsiCode::from_name(&cli.color)?)
        .title(cli.title.as_str())
        .min_opt(cli.min)
        .max_opt(cli.max)
        .build()?)
}

/// Read stdin and print the plot.
pub fn plot(cli: &Cli, renderer: &Renderer) -> Result<(), GraphError> {
    let cfg = config(cli)?;

    let t_ingest = Instant::now();
    let data = read_values(io::stdin().lock())?;
    log::debug!(
        "stdin ingest: {} µs ({} values)",
        t_ingest.elapsed().as_micros(),
        data.len()
    );

    let t_render = Instant::now();
    let plot = renderer.render(&data, &cfg)?;
    log::debug!("render: {} µs", t_render.elapsed().as_micros());

    println!("{plot}");
    Ok(())
}

/// Usage text with an example plot.
pub fn help(renderer: &Renderer) -> Result<(), GraphError> {
    let usage = Cli::command().render_help();
    println!(
        "{usage}\nPlot stuff like this:\n\n{}\n\nValues to be plotted are read from STDIN.\n",
        showcase::gaussian(renderer)?
    );
    Ok(())
}

pub fn tour(renderer: &Renderer) -> Result<(), GraphError> {
    print!("{}", showcase::showcase(renderer)?);
    Ok(())
}
