mod commands;
mod config;
mod supabase;

use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    cmd_aisles, cmd_assign_aisles, cmd_category, cmd_check_keys, cmd_cookbook, cmd_fridge_list,
    cmd_fridge_stock, cmd_retag, cmd_seed_ingredients, cmd_seed_products, cmd_seed_tags,
};
use crate::config::Config;
use crate::supabase::SupabaseClient;

#[derive(Parser)]
#[command(
    name = "crisper",
    version,
    about = "Seeding and inspection tools for the crisper grocery backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the hosted backend with catalog data
    Seed {
        #[command(subcommand)]
        command: SeedCommands,
    },
    /// Manage a user's fridge contents
    Fridge {
        #[command(subcommand)]
        command: FridgeCommands,
    },
    /// List the store's aisle tags
    Aisles {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a category page: the tag's products, by slug
    Category {
        /// Tag slug (e.g. "produce")
        slug: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the user's favorite recipes
    Cookbook {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Smoke-check configured API keys without writing anything
    CheckKeys,
}

#[derive(Subcommand)]
enum SeedCommands {
    /// Insert the standard aisle, dietary, and special tags
    Tags {
        /// Preview without making changes
        #[arg(long)]
        dry_run: bool,
        /// Pause between records in milliseconds (0 disables)
        #[arg(long, default_value = "100")]
        delay_ms: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Insert the common-grocery catalog
    Products {
        /// Preview without making changes
        #[arg(long)]
        dry_run: bool,
        /// Pause between records in milliseconds (0 disables)
        #[arg(long, default_value = "100")]
        delay_ms: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Insert the recipe ingredient sets and their tags
    Ingredients {
        /// Preview without making changes
        #[arg(long)]
        dry_run: bool,
        /// Pause between records in milliseconds (0 disables)
        #[arg(long, default_value = "100")]
        delay_ms: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// File every product under its aisle tag
    Assign {
        /// Preview without making changes
        #[arg(long)]
        dry_run: bool,
        /// Pause between records in milliseconds (0 disables)
        #[arg(long, default_value = "50")]
        delay_ms: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reapply the legacy nine-tag layout to the catalog
    Retag {
        /// Preview without making changes
        #[arg(long)]
        dry_run: bool,
        /// Pause between records in milliseconds (0 disables)
        #[arg(long, default_value = "100")]
        delay_ms: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum FridgeCommands {
    /// Stock the starter fridge for a user
    Stock {
        /// User id (UUID); defaults to the authenticated user
        #[arg(long)]
        user: Option<String>,
        /// Preview without making changes
        #[arg(long)]
        dry_run: bool,
        /// Pause between records in milliseconds (0 disables)
        #[arg(long, default_value = "100")]
        delay_ms: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List a user's fridge contents
    List {
        /// User id (UUID); defaults to the authenticated user
        #[arg(long)]
        user: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn writes(command: &Commands) -> bool {
    matches!(command, Commands::Seed { .. })
        || matches!(
            command,
            Commands::Fridge {
                command: FridgeCommands::Stock { .. }
            }
        )
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load();

    // check-keys must run even with an incomplete environment
    if let Commands::CheckKeys = cli.command {
        return cmd_check_keys(&config).await;
    }

    let key = if writes(&cli.command) {
        config.service_key()?
    } else {
        config.api_key()?
    };
    let client = Arc::new(SupabaseClient::new(config.supabase_url()?, key)?);

    match cli.command {
        Commands::Seed { command } => match command {
            SeedCommands::Tags {
                dry_run,
                delay_ms,
                json,
            } => cmd_seed_tags(client, dry_run, delay_ms, json).await,
            SeedCommands::Products {
                dry_run,
                delay_ms,
                json,
            } => cmd_seed_products(client, dry_run, delay_ms, json).await,
            SeedCommands::Ingredients {
                dry_run,
                delay_ms,
                json,
            } => cmd_seed_ingredients(client, dry_run, delay_ms, json).await,
            SeedCommands::Assign {
                dry_run,
                delay_ms,
                json,
            } => cmd_assign_aisles(client, dry_run, delay_ms, json).await,
            SeedCommands::Retag {
                dry_run,
                delay_ms,
                json,
            } => cmd_retag(client, dry_run, delay_ms, json).await,
        },
        Commands::Fridge { command } => match command {
            FridgeCommands::Stock {
                user,
                dry_run,
                delay_ms,
                json,
            } => cmd_fridge_stock(client, user, dry_run, delay_ms, json).await,
            FridgeCommands::List { user, json } => cmd_fridge_list(client, user, json).await,
        },
        Commands::Aisles { json } => cmd_aisles(client, json).await,
        Commands::Category { slug, json } => cmd_category(client, slug, json).await,
        Commands::Cookbook { json } => cmd_cookbook(client, json).await,
        Commands::CheckKeys => unreachable!(),
    }
}
