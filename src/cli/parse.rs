use clap::{ArgAction, Parser};

/// Top-level CLI structure.
///
/// `-h/--help` is handled by hand so it can show an example plot and exit
/// with a failure status.
#[derive(Parser, Debug)]
#[command(
    name = "sparkline",
    about = "Plot numbers read from stdin as a compact terminal sparkline",
    disable_help_flag = true
)]
pub struct Cli {
    /// Upper plot y-limit (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
    /// Lower plot y-limit (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Plot height in lines
    #[arg(long, default_value_t = 10)]
    pub height: usize,
    /// Plot width in characters (0 = one column per value)
    #[arg(long, default_value_t = 0)]
    pub width: usize,

    /// Plot title
    #[arg(long, default_value = "SimplePlot")]
    pub title: String,

    /// Disable enclosing box
    #[arg(long)]
    pub no_box: bool,
    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
    /// Plot color (name or `#RRGGBB`)
    #[arg(long, default_value = "blue")]
    pub color: String,
    /// Use plain ASCII instead of Unicode block glyphs
    #[arg(long)]
    pub ascii: bool,

    /// Print a tour of example plots and exit
    #[arg(long)]
    pub showcase: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print help
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    pub help: bool,
}
