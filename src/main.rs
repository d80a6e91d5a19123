use clap::{Parser, Subcommand};
use std::path::PathBuf;

use anyhow::{Context, bail};
use imgfilter::config::{DEFAULT_MAX_PREVIEW, MAX_PREVIEW_LIMIT};
use imgfilter::{Command, Dispatcher, NoticeLevel, Settings};

#[derive(Parser)]
#[command(name = "imgfilter")]
#[command(about = "Preview and save simple image filters")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Image to open at startup
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Largest preview edge in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_PREVIEW,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PREVIEW_LIMIT))
    )]
    max_preview: u32,

    /// Brightness filter factor
    #[arg(long, default_value_t = 1.2)]
    brightness: f32,

    /// Contrast filter factor
    #[arg(long, default_value_t = 1.5)]
    contrast: f32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one filter to a file without opening a window
    Apply {
        /// Filter name (see `filters`)
        #[arg(short, long)]
        filter: String,

        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path; format follows the extension, PNG when there is none
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
    /// List the available filters
    Filters,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings::new()
            .with_max_preview(self.max_preview)
            .with_brightness(self.brightness)
            .with_contrast(self.contrast)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    imgfilter::init_logger(args.verbose);

    let settings = args.settings();

    match args.command {
        Some(Commands::Apply {
            filter,
            input,
            output,
        }) => apply(&settings, &filter, input, output),
        Some(Commands::Filters) => {
            let dispatcher = Dispatcher::new(&settings);
            for filter in dispatcher.bank().iter() {
                println!("{:<12} {}", filter.name(), filter.label());
            }
            Ok(())
        }
        None => launch(settings, args.image),
    }
}

/// Open, filter and save through the same dispatcher the window uses
fn apply(settings: &Settings, filter: &str, input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let mut dispatcher = Dispatcher::headless(settings);
    let filter = dispatcher
        .bank()
        .get(filter)
        .context("Run `imgfilter filters` for the list of names")?;

    for command in [
        Command::Open(input),
        Command::ApplyFilter(filter),
        Command::Save(output),
    ] {
        let outcome = dispatcher.dispatch(command);
        if let Some(notice) = outcome.notice {
            match notice.level {
                NoticeLevel::Error => bail!("{}", notice.message),
                NoticeLevel::Info => println!("{}", notice.message),
            }
        }
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn launch(settings: Settings, image: Option<PathBuf>) -> anyhow::Result<()> {
    imgfilter::gui::run(settings, image)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn launch(_settings: Settings, _image: Option<PathBuf>) -> anyhow::Result<()> {
    bail!("built without the `gui` feature; use `imgfilter apply` instead")
}
