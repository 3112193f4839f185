//! jot - quick local notes with autosave and a markdown preview

pub mod cli;
pub mod domain;
pub mod render;
pub mod session;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_edit, handle_export, handle_import, handle_list, handle_new,
        handle_preview, handle_rm, handle_search, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::New(args) => handle_new(args, &data_dir),
        Command::List(args) => handle_list(args, &data_dir),
        Command::Search(args) => handle_search(args, &data_dir),
        Command::Show(args) => handle_show(args, &data_dir),
        Command::Edit(args) => handle_edit(args, &data_dir, &config),
        Command::Rm(args) => handle_rm(args, &data_dir),
        Command::Export(args) => handle_export(args, &data_dir, verbose),
        Command::Import(args) => handle_import(args, &data_dir, verbose),
        Command::Preview(args) => handle_preview(args, &data_dir),
        Command::Completions(args) => handle_completions(args),
    }
}
