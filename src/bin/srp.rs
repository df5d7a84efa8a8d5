use solid_demos::utils::logger;
use solid_demos::{Demo, SrpDemo};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let stdout = std::io::stdout();
    SrpDemo::default().run(&mut stdout.lock())?;
    Ok(())
}
