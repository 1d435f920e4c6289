use std::io;

use anyhow::Result;
use tracing::info;

use boundless_shell::Shell;

fn main() -> Result<()> {
    // stdout carries shell replies; keep logs off it.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("boundless starting");

    let shell = Shell::new(io::stdout().lock())?;
    shell.run(io::stdin().lock())?;
    Ok(())
}
