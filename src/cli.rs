use std::path::PathBuf;

use clap::Parser;

use crate::db::DEFAULT_DB_FILE;

/// Interactive, file-backed task list.
/// Storage defaults to ./tasklist.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "tl", version, about = "Interactive task list manager")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,
}
