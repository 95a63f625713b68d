use clap::{Parser, Subcommand};

use self::run::{RunArg, TaskArg};
use crate::task;

mod run;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run every task in the manifest
    Run(RunArg),
    /// Run a single task by name
    Task(TaskArg),
    /// List the task manifest
    List,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Run(RunArg::default())) {
        Mode::Run(arg) => run::run_batch(&arg),
        Mode::Task(arg) => run::run_single(&arg),
        Mode::List => {
            for def in task::MANIFEST {
                println!("{:<20} {}", def.name, def.summary);
            }
            Ok(())
        }
    }
}
