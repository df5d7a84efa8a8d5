use solid_demos::utils::logger;
use solid_demos::{Demo, DipDemo};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let stdout = std::io::stdout();
    DipDemo::default().run(&mut stdout.lock())?;
    Ok(())
}
