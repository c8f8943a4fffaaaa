use clap::Parser;
use techblog_cli::cli::{run, Cli};
use techblog_cli::handle_error;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    handle_error(run(cli));
}
