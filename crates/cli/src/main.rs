//! `errwrap-demo` CLI entry-point.
//!
//! Runs one of the sample failure scenarios and prints what `errwrap`
//! makes of the resulting chain.
//!
//! Available sub-commands:
//! - `stack`: the nested multi-line trace.
//! - `list`: one trace entry per wrapped layer.
//! - `code`: the resolved status code.
//! - `log`: emit the chain as a tracing event.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use errwrap::TraceOptions;
use samples::Scenario;

#[derive(Parser)]
#[command(
    name = "errwrap-demo",
    about = "Inspect layered error chains built by the sample application",
    version
)]
struct Cli {
    /// Maximum number of errors visited when walking a chain.
    #[arg(
        long,
        global = true,
        env = "ERRWRAP_MAX_DEPTH",
        default_value_t = errwrap::MAX_DEPTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_depth: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the nested stack of the scenario's error.
    Stack {
        #[arg(long, value_enum, default_value_t = ScenarioArg::Offline)]
        scenario: ScenarioArg,
    },
    /// Print one line per wrapped layer.
    List {
        #[arg(long, value_enum, default_value_t = ScenarioArg::Offline)]
        scenario: ScenarioArg,
    },
    /// Print the resolved status code (0 when none was set).
    Code {
        #[arg(long, value_enum, default_value_t = ScenarioArg::Conflict)]
        scenario: ScenarioArg,
    },
    /// Emit the error through the tracing subscriber.
    Log {
        #[arg(long, value_enum, default_value_t = ScenarioArg::Conflict)]
        scenario: ScenarioArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Offline,
    Missing,
    Conflict,
    Override,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Offline => Scenario::Offline,
            ScenarioArg::Missing => Scenario::Missing,
            ScenarioArg::Conflict => Scenario::Conflict,
            ScenarioArg::Override => Scenario::Override,
        }
    }
}

fn run(scenario: ScenarioArg) -> anyhow::Result<errwrap::WrappedError> {
    info!("Running scenario {scenario:?}");
    Scenario::from(scenario)
        .run()
        .ok_or_else(|| anyhow::anyhow!("scenario {scenario:?} did not fail"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let options = TraceOptions::new().max_depth(cli.max_depth);

    match cli.command {
        Command::Stack { scenario } => {
            let err = run(scenario)?;
            println!("{}", errwrap::stack_with(Some(&err), &options));
        }
        Command::List { scenario } => {
            let err = run(scenario)?;
            for entry in errwrap::list_stacks_with(Some(&err), &options) {
                println!("{entry}");
            }
        }
        Command::Code { scenario } => {
            let err = run(scenario)?;
            println!("{}", errwrap::code_with(Some(&err), &options));
        }
        Command::Log { scenario } => {
            let err = run(scenario)?;
            errwrap::report::log_with(&err, &options);
        }
    }

    Ok(())
}
