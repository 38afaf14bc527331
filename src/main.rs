use anyhow::{anyhow, Result};

use siesta::{boot, cli};

fn main() -> Result<()> {
    boot::init_common();

    let matches = cli::parse_args();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| anyhow!("Failed to create tokio runtime: {err}"))?;

    runtime.block_on(cli::actions::handle_sort_once(&matches))
}
