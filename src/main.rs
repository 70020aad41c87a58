use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use streambot::application::errors::BotError;
use streambot::application::messaging::MessageDispatcher;
use streambot::application::services::{ChatBot, CommandRegistry, CooldownTracker};
use streambot::commands::default_commands;
use streambot::domain::traits::Transport;
use streambot::infrastructure::adapters::{ConsoleAdapter, ConsoleInput};
use streambot::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "streambot")]
#[command(about = "Chat command bot for stream channels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run {
        /// Chat as this user on the console
        #[arg(short, long, default_value = "console")]
        user: String,
    },
    /// Show version
    Version,
    /// Print an example config
    InitConfig,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { user } => {
            let (config, load_error) = load_config(&cli.config);
            init_logging(config.logging.debug);
            if let Some(e) = load_error {
                tracing::warn!("Failed to load config: {}, using defaults", e);
            }

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to start runtime: {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = rt.block_on(run_bot(config, user)) {
                tracing::error!("Bot stopped: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("streambot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into()),
        )
        .init();
}

fn load_config(path: &str) -> (Config, Option<String>) {
    if std::path::Path::new(path).exists() {
        match Config::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::load_env(), Some(e.to_string())),
        }
    } else {
        (Config::load_env(), None)
    }
}

async fn run_bot(config: Config, console_user: String) -> Result<(), BotError> {
    config.validate()?;

    let transport: Arc<dyn Transport> = Arc::new(ConsoleAdapter::new(&config.bot.username));
    transport.start().await?;
    let login = transport.bot_info().username;
    tracing::info!("Bot started: @{}", login);

    let registry = Arc::new(CommandRegistry::new());
    registry.register_all(default_commands());

    let cooldowns = Arc::new(CooldownTracker::new());
    let bot = Arc::new(ChatBot::new(
        Arc::clone(&transport),
        Arc::clone(&registry),
        &config.bot.prefix,
    ));

    let dispatcher = MessageDispatcher::new(
        &config.bot.prefix,
        Arc::clone(&registry),
        Arc::clone(&cooldowns),
        bot,
    )
    .with_bot_identity(&login);

    let sweeper = spawn_cooldown_sweep(
        Arc::clone(&cooldowns),
        config.cooldowns.sweep_interval_seconds,
    );

    tracing::info!("Bot is running!");
    tracing::info!("Command prefix: {}", config.bot.prefix);
    tracing::info!("Channels: {}", config.bot.channels.join(", "));

    // Console mode chats in the first configured channel
    let channel = config.bot.channels.first().cloned().unwrap_or_default();
    let mut input = ConsoleInput::new(channel).with_user(console_user);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down...");
                break;
            }
            event = input.next_event() => match event {
                Ok(Some(message)) => {
                    tracing::debug!("[{}] {}: {}", message.channel, message.user, message.text);
                    dispatcher.handle(message).await;
                }
                Ok(None) => {
                    tracing::info!("Input closed, shutting down");
                    break;
                }
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            },
        }
    }

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    Ok(())
}

/// Periodically evict expired cooldown entries
fn spawn_cooldown_sweep(
    cooldowns: Arc<CooldownTracker>,
    interval_secs: u64,
) -> Option<tokio::task::JoinHandle<()>> {
    if interval_secs == 0 {
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            let removed = cooldowns.purge_expired(chrono::Utc::now().timestamp_millis());
            if removed > 0 {
                tracing::debug!("Evicted {} expired cooldown entries", removed);
            }
        }
    }))
}

fn init_config() {
    match serde_yaml::to_string(&Config::example()) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
        }
        Err(e) => {
            eprintln!("Failed to render default config: {}", e);
            std::process::exit(1);
        }
    }
}
