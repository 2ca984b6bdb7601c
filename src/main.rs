use clap::{Parser, Subcommand};
use resto_admin::utils::{logger, validation::Validate};
use resto_admin::{
    AccessDecision, AccessGate, AdminError, CliConfig, ConfigProvider, Dashboard,
    FeaturedSelector, HttpIdentityProvider, JsonCatalog, JsonStore, Period,
};

#[derive(Parser, Debug)]
#[command(name = "resto-admin", version, about = "Restaurant directory admin tool")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve admin access and show the dashboard overview
    Status {
        #[arg(long)]
        month: Option<u8>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Sign in against the identity provider
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and show the redirect target
    Logout,
    /// Manage the featured-restaurant list for a period
    Featured {
        #[command(subcommand)]
        command: FeaturedCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FeaturedCommands {
    List {
        #[arg(long)]
        month: Option<u8>,
        #[arg(long)]
        year: Option<i32>,
    },
    Add {
        restaurant_id: String,
        #[arg(long)]
        month: Option<u8>,
        #[arg(long)]
        year: Option<i32>,
    },
    Remove {
        restaurant_id: String,
        #[arg(long)]
        month: Option<u8>,
        #[arg(long)]
        year: Option<i32>,
    },
}

fn period_from(month: Option<u8>, year: Option<i32>) -> Result<Period, AdminError> {
    let current = Period::current();
    Period::new(
        month.unwrap_or_else(|| current.month()),
        year.unwrap_or_else(|| current.year()),
    )
}

async fn run(cli: Cli) -> Result<(), AdminError> {
    let config = cli.config;
    config.validate()?;

    let provider = HttpIdentityProvider::new(config.auth_url(), config.auth_api_key());

    match cli.command {
        Commands::Status { month, year } => {
            let period = period_from(month, year)?;
            let gate = AccessGate::new(provider, config.clone());

            match gate.resolve_access().await {
                AccessDecision::Allow(email) => println!("✅ Signed in as {}", email),
                AccessDecision::AllowDemo(email) => {
                    println!("⚠️ Demo mode (no identity provider): acting as {}", email)
                }
                AccessDecision::Redirect(target) => {
                    println!("🔒 Not signed in, go to {}", target);
                    return Ok(());
                }
            }

            let dashboard = Dashboard::new(
                JsonStore::new(config.data_path()),
                JsonCatalog::new(config.data_path()),
                config,
            );
            let overview = dashboard.overview(period).await;
            println!(
                "📊 {}: {} featured, {} slots free, {} restaurants in catalog",
                period, overview.featured_count, overview.slots_free, overview.restaurant_count
            );
        }
        Commands::Login { email, password } => {
            let gate = AccessGate::new(provider, config);
            let identity = gate.login(&email, &password).await?;
            println!("✅ Signed in as {}", identity.email);
        }
        Commands::Logout => {
            let gate = AccessGate::new(provider, config);
            if let AccessDecision::Redirect(target) = gate.logout().await {
                println!("👋 Signed out, go to {}", target);
            }
        }
        Commands::Featured { command } => {
            let selector = FeaturedSelector::new(
                JsonStore::new(config.data_path()),
                JsonCatalog::new(config.data_path()),
                config,
            );

            match command {
                FeaturedCommands::List { month, year } => {
                    let period = period_from(month, year)?;
                    let list = selector.list(period).await?;
                    println!("📋 {} featured in {}", list.total, period);
                    for entry in list.entries {
                        println!("{}\t{}", entry.rank, entry.restaurant_id);
                    }
                }
                FeaturedCommands::Add {
                    restaurant_id,
                    month,
                    year,
                } => {
                    let period = period_from(month, year)?;
                    let entry = selector.add(period, &restaurant_id).await?;
                    println!(
                        "✅ Featured {} in {} at rank {}",
                        entry.restaurant_id, period, entry.rank
                    );
                }
                FeaturedCommands::Remove {
                    restaurant_id,
                    month,
                    year,
                } => {
                    let period = period_from(month, year)?;
                    selector.remove(period, &restaurant_id).await?;
                    println!("✅ Removed {} from {}", restaurant_id, period);
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.config.json_logs {
        logger::init_service_logger();
    } else {
        logger::init_cli_logger(cli.config.verbose);
    }

    tracing::info!("Starting resto-admin CLI");
    if cli.config.verbose {
        tracing::debug!("CLI config: {:?}", cli.config);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = if e.is_user_error() { 2 } else { 1 };
        std::process::exit(exit_code);
    }

    Ok(())
}
