use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guide_agents::ItineraryAssistant;
use guide_catalog::{Catalog, CategoryFilter};
use guide_core::{AssistantConfig, AssistantReply, ADD_TO_FAVORITES, SHOW_ON_MAP};
use guide_observability::{init_tracing, AppMetrics};
use guide_storage::MemoryStore;

#[derive(Debug, Parser)]
#[command(name = "guide")]
#[command(about = "Karelia travel guide CLI")]
struct Cli {
    #[arg(long, env = "GUIDE_CATALOG_PATH", default_value = "data/catalog.geojson")]
    catalog: PathBuf,

    /// Pins the choice of canned replies.
    #[arg(long, env = "GUIDE_REPLY_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Chat {
        #[arg(long, env = "GUIDE_THINKING_DELAY_MS", default_value_t = 500)]
        delay_ms: u64,
    },
    Ask {
        text: String,
        #[arg(long)]
        json: bool,
    },
    Browse {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    Show {
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("guide_cli");
    let cli = Cli::parse();

    let assistant = build_assistant(&cli.catalog, cli.seed)?;

    match cli.command {
        Command::Chat { delay_ms } => run_chat(&assistant, Duration::from_millis(delay_ms)).await?,
        Command::Ask { text, json } => {
            let reply = assistant.handle_message(&text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}", reply.reply_text);
            }
        }
        Command::Browse { category, page } => {
            let filter = CategoryFilter::parse(category.as_deref())?;
            let page = assistant.browse(filter, page);
            for point in &page.items {
                println!(
                    "{} {} [{}]",
                    point.category.icon(),
                    point.name,
                    point.category.display_name()
                );
            }
            println!(
                "-- page {} ({} of {} shown{})",
                page.page,
                page.items.len(),
                page.total,
                if page.has_more { ", more available" } else { "" }
            );
        }
        Command::Show { name } => {
            let details = assistant.point_details(&name)?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
    }

    Ok(())
}

async fn run_chat(assistant: &ItineraryAssistant<MemoryStore>, delay: Duration) -> Result<()> {
    let mut last_reply: Option<AssistantReply> = None;

    println!("Karelia guide chat. ':map' and ':fav' apply the last suggestions, 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        match message {
            ":map" => {
                let names = suggested_names(last_reply.as_ref(), SHOW_ON_MAP);
                let view = assistant.show_on_map(&names);
                println!("\n{}", view.message);
                for point in &view.points {
                    println!(
                        "  {} ({:.4}, {:.4})",
                        point.name, point.coordinates.latitude, point.coordinates.longitude
                    );
                }
                println!();
            }
            ":fav" => {
                let names = suggested_names(last_reply.as_ref(), ADD_TO_FAVORITES);
                let update = assistant.add_to_favorites(&names)?;
                println!("\n{}\n", update.message);
            }
            _ => {
                tokio::time::sleep(delay).await;
                let reply = assistant.handle_message(message)?;
                println!("\n{}\n", reply.reply_text);

                for action in &reply.suggested_actions {
                    println!("[{}]", action.label);
                }
                if !reply.suggested_actions.is_empty() {
                    println!();
                }

                last_reply = Some(reply);
            }
        }
    }

    Ok(())
}

fn suggested_names(reply: Option<&AssistantReply>, action_type: &str) -> Vec<String> {
    reply
        .map(|reply| reply.action_names(action_type))
        .unwrap_or_default()
}

fn build_assistant(catalog_path: &Path, seed: Option<u64>) -> Result<ItineraryAssistant<MemoryStore>> {
    let catalog = Catalog::from_path(catalog_path)
        .with_context(|| format!("failed loading catalog from {}", catalog_path.display()))?;
    tracing::info!(points = catalog.len(), "catalog loaded");

    Ok(ItineraryAssistant::new(
        Arc::new(catalog),
        Arc::new(MemoryStore::new()),
        AssistantConfig::from_env(),
        AppMetrics::shared(),
        seed,
    ))
}
