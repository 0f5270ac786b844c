use anyhow::Result;
use clap::{Parser, ValueEnum};
use classic_snake::game::GameConfig;
use classic_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "classic-snake")]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "human")]
    mode: Mode,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Human,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Board geometry and pacing are fixed constants, not flags
    let config = GameConfig::default();

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}
