use aockit::{Args, commands, config, logging};
use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    dotenv::dotenv().ok();

    let config = config::load_config();
    logging::init(&config.log_file, args.verbose)?;
    log::debug!("Running {:?} with {:?}", args.command, config);

    commands::run(args, config).await
}
