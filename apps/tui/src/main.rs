mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use event::HeadlessOptions;
use trade_area_dashboard::config::{init_app_config, load_catalog};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    logging::init(&config)?;

    let catalog = load_catalog(&config)?;
    let mut app = App::new(catalog);

    if args.headless || !is_terminal() {
        let options = HeadlessOptions {
            json: args.json,
            location: args.location,
        };
        return event::run_headless(&mut app, &options);
    }

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app);

    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
