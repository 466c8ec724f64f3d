//! # TL - Interactive Task List
//!
//! A small line-based task manager for the terminal. Each task has free-text
//! content, a due date, a due time and a priority. The list is kept in a JSON
//! file between runs and every listing colours tasks by priority and by how
//! close they are to their due date (overdue, due today, in time).
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a session using ./tasklist.json
//! tl
//!
//! # Or point it at another file
//! tl --db ~/notes/tasks.json
//! ```
//!
//! ## Commands
//!
//! - `add` - Create a task (priority, date, time, then content lines ended by an empty line)
//! - `print` - Show all tasks as a table
//! - `edit` - Change one field of a task
//! - `delete` - Remove a task
//! - `end` - Save and quit
//!
//! Commands and field names are case-insensitive. The task file is only
//! written when the session ends with `end`. Set `RUST_LOG=info` to see
//! storage diagnostics on stderr.

use std::io;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod fields;
pub mod prompt;
pub mod task;
pub mod render {
    pub mod colors;
    pub mod table;
}

use cli::Cli;
use cmd::run_session;
use db::TaskList;
use prompt::Console;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> error::Result<()> {
    let mut list = TaskList::load(&cli.db)?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_session(&mut list, &mut console)?;
    list.save(&cli.db)
}
