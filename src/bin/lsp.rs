use solid_demos::utils::logger;
use solid_demos::{Demo, LspDemo};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let stdout = std::io::stdout();
    LspDemo::default().run(&mut stdout.lock())?;
    Ok(())
}
