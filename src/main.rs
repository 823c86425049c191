use anyhow::Result;
use clap::Parser;

use vimrc_loader::cli::CliArgs;

mod runtime;

fn main() -> Result<()> {
    vimrc_loader::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let stdout = std::io::stdout();
    let code = runtime::run(config, &mut stdout.lock())?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
