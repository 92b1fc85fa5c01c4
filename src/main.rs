use std::io;

use clap::Parser;
use reigo::{
    anki::AnkiConnect,
    cli::Cli,
    mining,
    settings::Settings,
    ReigoError,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ReigoError> {
    let cli = Cli::parse();

    let settings_path = cli.settings_path();
    let mut settings = Settings::load(&settings_path)?;
    cli.apply(&mut settings);
    settings.validate()?;

    if cli.save_settings {
        settings.save(&settings_path)?;
    }

    let store = AnkiConnect::new(&settings.endpoint)?;
    log::info!("Using AnkiConnect at {}", store.endpoint());
    if !settings.write_back {
        log::info!("Dry run: notes will not be updated (pass --write to update them)");
    }

    let characters = cli.feed(&settings).load(&store)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    mining::run(&store, &characters, &settings.sources, &settings.run_options(), &mut out)?;
    Ok(())
}
