//! BondhuBot CLI
//!
//! Command-line client for a running BondhuBot gateway:
//! - Ask a single question
//! - Chat interactively
//! - List chat modes
//! - Check gateway health
//! - Generate a config file

use bondhu::chat::{format_time, ChatSession, Sender};
use bondhu::client::{GatewayClient, DEFAULT_GATEWAY_URL};
use bondhu::mode::ChatMode;
use bondhu::GatewayRequest;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bondhu")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the BondhuBot gateway")]
#[command(long_about = "BondhuBot is a bilingual (English/Bangla) AI assistant.\nTalk to it from the terminal through a running gateway.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Gateway URL
    #[arg(long, default_value = DEFAULT_GATEWAY_URL, global = true)]
    pub gateway_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one message and print the reply
    Ask {
        /// Message text
        message: String,
        /// Chat mode (translate, write, code)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Interactive chat session
    Chat {
        /// Chat mode (translate, write, code)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// List chat modes
    Modes,

    /// Show gateway health
    Health,

    /// Generate default gateway config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = GatewayClient::new(cli.gateway_url.as_str());

    match cli.command {
        Commands::Ask { message, mode } => {
            let mode = ChatMode::from_query(mode.as_deref());
            if message.trim().is_empty() {
                eprintln!("Message is empty");
                std::process::exit(1);
            }

            match client.send(&GatewayRequest::new(message, mode)).await {
                Ok(reply) => println!("{}", reply),
                Err(e) => {
                    eprintln!("Request failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Chat { mode } => {
            run_chat(&client, ChatMode::from_query(mode.as_deref())).await?;
        }

        Commands::Modes => {
            println!("{:<10} {:<20} {}", "Mode", "Title", "Description");
            println!("{}", "-".repeat(70));

            for mode in ChatMode::ALL {
                let profile = mode.profile();
                println!(
                    "{:<10} {:<20} {}",
                    mode.as_str(),
                    profile.title,
                    profile.description
                );
            }
        }

        Commands::Health => match client.health().await {
            Ok(health) => {
                println!("BondhuBot gateway v{}", health.version);
                println!();
                println!("Status: {}", health.status);
                println!("Provider: {}", health.provider);
                println!(
                    "Credential: {}",
                    if health.credential_configured { "configured" } else { "missing" }
                );
                println!();
                println!("Uptime: {}", format_duration(health.uptime_seconds));
            }
            Err(e) => {
                eprintln!("Cannot connect to BondhuBot gateway at {}", client.base_url());
                eprintln!("Error: {}", e);
                eprintln!();
                eprintln!("Make sure the gateway is running:");
                eprintln!("  cargo run --bin bondhu-gateway");
                std::process::exit(1);
            }
        },

        Commands::Config { output } => {
            let config = bondhu::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Read lines from stdin and drive a chat session until EOF or `/quit`
async fn run_chat(client: &GatewayClient, mode: ChatMode) -> anyhow::Result<()> {
    let mut session = ChatSession::new(mode);
    let profile = mode.profile();

    println!("{} - {}", profile.title, profile.description);
    println!("Type /quit to exit.");
    println!();
    if let Some(greeting) = session.messages().first() {
        print_message(greeting.sender, &greeting.text, &greeting.time_label());
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim() == "/quit" {
            break;
        }

        let Ok(exchange) = session.submit(&line) else {
            continue;
        };

        println!("...");
        let outcome = client.send(exchange.request()).await;
        let reply = session.settle(exchange, outcome);
        print_message(reply.sender, &reply.text, &format_time(&reply.timestamp));
    }

    Ok(())
}

fn print_message(sender: Sender, text: &str, time: &str) {
    let who = match sender {
        Sender::User => "You",
        Sender::Assistant => "BondhuBot",
    };
    println!("[{}] {}:", time, who);
    println!("{}", text);
    println!();
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
