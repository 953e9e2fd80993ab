use std::io::Write as _;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use memebot_backend::config::BotConfig;
use memebot_backend::message::{InboundMessage, SenderType};
use memebot_backend::routes;
use memebot_backend::services::chat::GroupMeClient;
use memebot_backend::services::dispatcher;
use memebot_backend::services::factory::{HttpFactoryClient, ResponseGenerator};
use memebot_backend::services::parser;
use memebot_backend::services::response::ResponseUnit;
use memebot_backend::state::AppState;

#[derive(Parser)]
#[command(name = "memebot", about = "Webhook backend for the GroupMe meme bot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the command pipeline from the terminal without posting to chat
    Local {
        /// Message to process once; omit for an interactive prompt
        message: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = BotConfig::from_env().context("reading configuration")?;

    match cli.command {
        Some(Command::Local { message }) => run_local(config, message).await,
        None => serve(config).await,
    }
}

async fn serve(config: BotConfig) -> anyhow::Result<()> {
    if config.bot_token.is_empty() {
        tracing::warn!("BOT_TOKEN is empty; the bot hub will reject outbound sends");
    }
    let factory = Arc::new(HttpFactoryClient::new(&config));
    let chat = Arc::new(GroupMeClient::new(&config));
    let state = Arc::new(AppState::new(config, factory, chat));

    let app = routes::create_router().with_state(Arc::clone(&state));
    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr)
        .await
        .with_context(|| format!("binding {}", state.config.bind_addr))?;
    tracing::info!("memebot listening on {}", state.config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Local testing mode: feed messages through parse -> dispatch and print
/// what would have been sent.
async fn run_local(config: BotConfig, message: Option<String>) -> anyhow::Result<()> {
    let factory = HttpFactoryClient::new(&config);
    match message {
        Some(text) => print_responses(&config, &factory, &text).await,
        None => loop {
            print!("> ");
            std::io::stdout().flush()?;
            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            print_responses(&config, &factory, line.trim_end()).await;
        },
    }
    Ok(())
}

async fn print_responses(config: &BotConfig, factory: &dyn ResponseGenerator, text: &str) {
    let message = InboundMessage {
        text: text.to_string(),
        sender_type: SenderType::User,
        group_id: "local".to_string(),
    };
    let Some(parsed) = parser::parse_command(&message, &config.prefix) else {
        return;
    };
    let response = dispatcher::dispatch(&parsed, factory, &config.prefix).await;
    for unit in response.flatten() {
        match unit {
            ResponseUnit::Empty => {}
            ResponseUnit::Text(text) => println!("{text}"),
            ResponseUnit::TextWithImage { text, image_url } => println!("{text} [{image_url}]"),
        }
    }
}
