mod commands;
mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{HELP, ShellCommand};
use people_common::{SharedWinners, Winners};
use pipeline::Decade;
use presentation::{
    ChangeTracker, Container, PeopleViewModel, Property, TODAYS_WINNERS, ViewModelError,
};
use sources::sample::sample_people;
use sources::{
    DelayedReader, FailingReader, FlakyReader, InMemoryReader, JsonFileReader, PersonReader,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

/// Shown to the user for any data source failure; details go to the log.
const FAULT_NOTICE: &str =
    "Something bad happened. Please contact the Help Desk for more information.";

/// People Viewer - browse people and pick today's winners
#[derive(Parser)]
#[command(name = "people-viewer")]
#[command(
    about = "Browse people, filter them by decade and pick today's winners",
    long_about = None
)]
struct Cli {
    /// JSON file holding an array of people (defaults to a built-in sample)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Delay every fetch by this many milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,

    /// Share of fetches that fail, between 0 and 1
    #[arg(long)]
    failure_rate: Option<f64>,

    /// Make every fetch fail
    #[arg(long)]
    always_fail: bool,

    /// Keep running after a data source failure
    #[arg(long)]
    keep_going: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive shell (the default)
    Shell,

    /// Fetch once and print the visible people
    List {
        /// Hide a decade; repeat for more (70s, 80s, 90s, 00s, 10s)
        #[arg(long, value_parser = parse_decade)]
        exclude: Vec<Decade>,

        /// Seconds to wait for the data source
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },
}

fn parse_decade(raw: &str) -> std::result::Result<Decade, String> {
    Decade::from_label(raw).ok_or_else(|| format!("unknown decade '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let reader = build_reader(&cli)?;
    let winners = Winners::for_today().into_shared();
    let container = Container::new()
        .bind_reader(reader)
        .bind_winners(TODAYS_WINNERS, winners.clone());

    let mut view_model = PeopleViewModel::new(container);
    view_model
        .initialize()
        .context("Failed to start the people view model")?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&mut view_model, &winners, cli.keep_going).await,
        Commands::List {
            exclude,
            timeout_secs,
        } => run_list(&mut view_model, &exclude, Duration::from_secs(timeout_secs)).await,
    }
}

/// Pick the data reader from the flags.
fn build_reader(cli: &Cli) -> Result<Arc<dyn PersonReader>> {
    if cli.always_fail {
        warn!("Every fetch will fail (--always-fail)");
        return Ok(Arc::new(FailingReader::default()));
    }

    let mut reader: Arc<dyn PersonReader> = match &cli.data_file {
        Some(path) => {
            info!(path = %path.display(), "Reading people from file");
            Arc::new(JsonFileReader::new(path))
        }
        None => Arc::new(InMemoryReader::new(sample_people())),
    };

    if cli.delay_ms > 0 {
        reader = Arc::new(DelayedReader::new(reader, Duration::from_millis(cli.delay_ms)));
    }

    if let Some(rate) = cli.failure_rate {
        if !(0.0..=1.0).contains(&rate) {
            bail!("--failure-rate must be between 0 and 1, got {}", rate);
        }
        reader = Arc::new(FlakyReader::new(reader, rate));
    }

    Ok(reader)
}

/// Handle the 'list' command
async fn run_list(
    view_model: &mut PeopleViewModel,
    exclude: &[Decade],
    timeout: Duration,
) -> Result<ExitCode> {
    match view_model.settle(timeout).await {
        Ok(true) => {}
        Ok(false) => bail!("Timed out after {:?} waiting for the data source", timeout),
        Err(err) => return Ok(report_fault(&err)),
    }

    for decade in exclude {
        view_model.set_include(*decade, false);
    }
    render::print_people(view_model.people(), &view_model.filters());
    Ok(ExitCode::SUCCESS)
}

/// Handle the interactive shell
///
/// Reads commands from stdin and applies fetch results as they arrive,
/// both on this task.
async fn run_shell(
    view_model: &mut PeopleViewModel,
    winners: &SharedWinners,
    keep_going: bool,
) -> Result<ExitCode> {
    let changes = view_model.track_changes();
    winners
        .lock()
        .subscribe(|change| println!("{}", render::describe_change(change)));

    println!("{}", "People Viewer".bold().blue());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let outcome = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match ShellCommand::parse(&line) {
                    Ok(Some(ShellCommand::Quit)) => break,
                    Ok(Some(command)) => execute(view_model, winners, command).await,
                    Ok(None) => Ok(()),
                    Err(err) => {
                        println!("{}", err.to_string().yellow());
                        Ok(())
                    }
                }
            }
            outcome = view_model.next_completion() => outcome,
        };

        render_changes(view_model, &changes);

        if let Err(err) = outcome {
            let code = report_fault(&err);
            if !keep_going {
                return Ok(code);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn execute(
    view_model: &mut PeopleViewModel,
    winners: &SharedWinners,
    command: ShellCommand,
) -> presentation::Result<()> {
    match command {
        ShellCommand::People => {
            render::print_people(view_model.people(), &view_model.filters());
        }
        ShellCommand::Refresh => {
            view_model.refresh_people()?;
        }
        ShellCommand::Filter(decade, include) => {
            view_model.set_include(decade, include);
        }
        ShellCommand::Filters => render::print_filters(&view_model.filters()),
        ShellCommand::Add(id) => {
            let person = view_model.people().iter().find(|p| p.id == id).cloned();
            match person {
                None => println!("{}", format!("No visible person with id {}", id).yellow()),
                Some(person) => {
                    if !view_model.add_to_winners(Some(&person))? {
                        println!("{} is already one of today's winners", person);
                    }
                }
            }
        }
        ShellCommand::Remove(id) => {
            let person = winners
                .lock()
                .selected_people()
                .iter()
                .find(|p| p.id == id)
                .cloned();
            if !view_model.remove_from_winners(person.as_ref())? {
                println!("{}", format!("Person {} is not one of today's winners", id).yellow());
            }
        }
        ShellCommand::Clear => view_model.clear_winners()?,
        ShellCommand::Winners => render::print_winners(&winners.lock()),
        ShellCommand::Show(id) => {
            let reader = view_model
                .data_reader()
                .cloned()
                .ok_or(ViewModelError::NotInitialized)?;
            match reader.get_person(id).await {
                Ok(Some(person)) => render::print_person(&person),
                Ok(None) => println!("{}", format!("No person with id {}", id).yellow()),
                Err(err) => {
                    warn!(id, error = %err, "Person lookup failed");
                    println!("{}", format!("Lookup failed: {}", err).red());
                }
            }
        }
        ShellCommand::Done => println!("{}", "Saved".green()),
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => {}
    }
    Ok(())
}

/// Redraw whatever the view model announced since the last redraw.
fn render_changes(view_model: &PeopleViewModel, changes: &ChangeTracker) {
    if changes.contains(Property::People) {
        if view_model.is_fetching() && view_model.people().is_empty() {
            println!("Loading people...");
        } else {
            render::print_people(view_model.people(), &view_model.filters());
        }
    }
    if changes.contains(Property::LastRefreshTime) {
        if let Some(at) = view_model.last_refresh_time() {
            render::print_refreshed(at);
        }
    }
    changes.reset();
}

/// Log the failure in full and show the user the generic notice.
fn report_fault(err: &ViewModelError) -> ExitCode {
    error!(error = ?err, "Unhandled data source failure");
    eprintln!("{}", FAULT_NOTICE.red().bold());
    ExitCode::FAILURE
}

fn prompt() {
    print!("{}", "people> ".bold());
    if let Err(err) = std::io::stdout().flush() {
        warn!(error = %err, "Failed to flush stdout");
    }
}
