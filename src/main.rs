use anyhow::Result;
use clap::{Parser, Subcommand};

use carrito::cli::{handle_item_command, handle_lists_command, ItemCommands, ListsCommands};
use carrito::config::{CarritoPaths, Settings};
use carrito::storage::{FileStore, ListRepository};

#[derive(Parser)]
#[command(
    name = "carrito",
    version,
    about = "Terminal-based shopping list manager with budget tracking",
    long_about = "carrito manages your shopping lists from the terminal: plain \
                  checklists, or budgeted lists with priced and categorized items \
                  (DOP). Lists are stored locally as JSON and can be shared as a \
                  read-only link."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List management commands
    #[command(subcommand, alias = "l")]
    List(ListsCommands),

    /// Item management commands
    #[command(subcommand, alias = "i")]
    Item(ItemCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CarritoPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = FileStore::new(paths.data_dir());
    let repo = ListRepository::new(store);

    match cli.command {
        Commands::List(cmd) => handle_lists_command(&repo, &settings, cmd)?,
        Commands::Item(cmd) => handle_item_command(&repo, cmd)?,
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Share base URL: {}", settings.share_base_url);
        }
    }

    Ok(())
}
