//! Command line arguments and their dispatch.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use techblog_core::Connection;

use crate::{
    add_from_file, base_dir, init, load_connspec, prompt, run_scenario, session, write_post,
    write_recent, write_stats, Result, DEFAULT_AUTHOR,
};

#[derive(Parser, Debug)]
#[command(name = "techblog", version, about = "Adds posts to a TechBlog database")]
pub struct Cli {
    /// Database file. Overrides the connection saved by `techblog init`
    #[arg(long, global = true, env = "TECHBLOG_DB")]
    pub db: Option<String>,

    /// Email of the author of new posts, unless a post file names one
    #[arg(long, global = true, env = "TECHBLOG_AUTHOR", default_value = DEFAULT_AUTHOR)]
    pub author: String,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// Without a command, offers the canned example posts
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create the database and remember it for later commands
    Init {
        /// Path of the SQLite database file
        conn: String,
    },
    #[command(flatten)]
    Store(StoreCommand),
}

/// Commands that run against an open database.
#[derive(Subcommand, Debug, PartialEq)]
pub enum StoreCommand {
    /// Add a post described by a JSON file
    Add { file: PathBuf },
    /// List the most recent posts
    Recent {
        #[arg(short = 'n', long, default_value_t = 5)]
        limit: u32,
    },
    /// Show one post
    Show {
        id: i64,
        /// Print the rendered HTML document
        #[arg(long)]
        html: bool,
    },
    /// Count the rows of each table
    Stats,
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let dir = base_dir()?;
    let command = match cli.command {
        Some(Command::Init { conn }) => return init(&conn, &dir),
        Some(Command::Store(command)) => Some(command),
        None => None,
    };
    let spec = load_connspec(cli.db.as_deref(), &dir)?;
    let mut out = std::io::stdout().lock();
    session(&spec, |conn| {
        run_store_command(
            conn,
            command,
            &cli.author,
            &mut std::io::stdin().lock(),
            &mut out,
        )
    })
}

/// Run `command` on an open database. Without a command the interactive
/// prompt reads its answer from `input`.
pub fn run_store_command(
    conn: &mut Connection,
    command: Option<StoreCommand>,
    author: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Some(StoreCommand::Add { file }) => {
            let id = add_from_file(conn, &file, author)?;
            writeln!(out, "Added post {id}")?;
            Ok(())
        }
        Some(StoreCommand::Recent { limit }) => write_recent(&*conn, limit, out),
        Some(StoreCommand::Show { id, html }) => write_post(&*conn, id, html, out),
        Some(StoreCommand::Stats) => write_stats(&*conn, out),
        None => {
            let scenario = prompt(&mut *input, &mut *out)?;
            run_scenario(conn, scenario, author, out)
        }
    }
}
