pub mod parse;
pub mod session;
pub mod slug;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(version)]
#[command(about = "Scaffold session directories from issue-form submissions", long_about = None)]
pub struct Cli {
    /// Config file; relative paths resolve against --root. Optional.
    #[arg(short, long, default_value = "scaffold.toml")]
    pub config: PathBuf,

    /// Repository root that template, sessions and slug-file paths hang off.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new session directory from an issue body
    Session {
        #[arg(long, env = "ISSUE_BODY", default_value = "", hide_env_values = true)]
        body: String,
        #[arg(long, env = "ISSUE_TITLE", default_value = "")]
        title: String,
        #[arg(long, env = "ISSUE_NUMBER", default_value = "?")]
        number: String,
        /// Report what would be created without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the parsed issue-form fields as JSON
    Parse {
        #[arg(long, env = "ISSUE_BODY", default_value = "", hide_env_values = true)]
        body: String,
    },
    /// Print the slug for a presenter and title
    Slug {
        #[arg(long, default_value = "")]
        presenter: String,
        #[arg(long)]
        title: String,
    },
}
