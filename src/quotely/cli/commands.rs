use super::console::TerminalConsole;
use super::setup::{init_logging, Cli};
use clap::Parser;
use quotely::commands::{CmdMessage, CmdResult};
use quotely::config::{resolve_data_dir, QuotelyConfig};
use quotely::error::Result;
use quotely::session::{Console, Session};
use quotely::store::fs::FileStore;
use tracing::info;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone(), cli.global);
    let (config, config_warning) = QuotelyConfig::load_or_default(&data_dir);
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let store = FileStore::new(&data_dir, &config.data_file);
    info!(path = %store.path().display(), "starting quotely");
    let (mut session, outcome) = Session::open(store);

    let mut console = TerminalConsole::new();
    console.welcome(session.book().company_name.as_str());
    let mut startup = CmdResult::default();
    if let Some(warning) = config_warning {
        startup.add_message(CmdMessage::warning(warning));
    }
    if let Some(warning) = outcome.warning() {
        startup.add_message(warning);
    }
    console.show(&startup);

    session.run(&mut console)
}
