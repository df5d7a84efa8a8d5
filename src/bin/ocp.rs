use solid_demos::utils::logger;
use solid_demos::{Demo, OcpDemo};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let stdout = std::io::stdout();
    OcpDemo::default().run(&mut stdout.lock())?;
    Ok(())
}
