use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linecmp::areas::input::InputSource;
use linecmp::artifacts::core::{OutputSink, show_paged};
use linecmp::artifacts::render::RenderFlags;
use linecmp::commands::compare::{CompareOptions, Comparison};
use linecmp::{ColorMode, DEFAULT_MAX_CELLS, OutputFormat};

#[derive(Parser)]
#[command(
    name = "linecmp",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two texts line by line",
    long_about = "Compares two texts line by line using a longest common subsequence, \
    and prints every line as kept, removed or added, numbered on both sides.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    #[arg(index = 1, help = "The original text file, or - for stdin")]
    left: InputSource,
    #[arg(index = 2, help = "The modified text file, or - for stdin")]
    right: InputSource,
    #[arg(long, help = "Pretty-print both inputs as JSON before comparing")]
    json: bool,
    #[arg(
        long,
        env = "LINECMP_MAX_CELLS",
        default_value_t = DEFAULT_MAX_CELLS,
        help = "Refuse inputs whose comparison table exceeds this many cells (0 for no limit)"
    )]
    max_cells: usize,
}

impl InputArgs {
    fn options(&self, format: OutputFormat, render: RenderFlags) -> CompareOptions {
        CompareOptions {
            json: self.json,
            max_cells: (self.max_cells > 0).then_some(self.max_cells),
            format,
            render,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the line-by-line differences",
        long_about = "This command prints one row per line of both inputs, \
        with the left and right line numbers and a marker: '-' removed, '+' added, blank kept."
    )]
    Diff {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Rows, help = "The output format")]
        format: OutputFormat,
        #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to color rows")]
        color: ColorMode,
        #[arg(long, help = "Do not print the line number gutter")]
        no_line_numbers: bool,
        #[arg(long, help = "Do not page the output")]
        no_pager: bool,
    },
    #[command(
        name = "stat",
        about = "Count equal, removed and added lines",
        long_about = "This command prints how many lines are kept, removed and added."
    )]
    Stat {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Rows, help = "The output format")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Diff {
            input,
            format,
            color,
            no_line_numbers,
            no_pager,
        } => {
            let mut render = RenderFlags::default();
            render.set(RenderFlags::LINE_NUMBERS, !no_line_numbers);
            render.set(RenderFlags::COLOR, color.apply());

            let paging =
                !no_pager && format == OutputFormat::Rows && std::env::var_os("NO_PAGER").is_none();
            let sink = OutputSink::detect(paging);
            let pager = sink.pager_handle();

            let comparison = Comparison::new(input.left.clone(), input.right.clone(), Box::new(sink))?;
            comparison.diff(&input.options(format, render))?;
            drop(comparison);

            show_paged(pager)?
        }
        Commands::Stat { input, format } => {
            let comparison = Comparison::new(
                input.left.clone(),
                input.right.clone(),
                Box::new(std::io::stdout()),
            )?;

            comparison.stat(&input.options(format, RenderFlags::default()))?
        }
    }

    Ok(())
}
