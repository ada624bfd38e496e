use clap::Parser;
use log::info;

use titlenote::{App, Cli, CollectionStore, Config, KvStore, Result};

fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn main() {
    initialize_logger();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.data_dir)?;
    info!("Using data directory: {}", config.data_dir.display());

    let storage = KvStore::new(config.data_dir.clone())?;
    let store = CollectionStore::open(storage);

    let mut app = App::new(store, cli.verbose);
    app.run(cli.command)
}
