//! RSS Aggregator dashboard
//!
//! A terminal front-end for the aggregator's GraphQL API. It shows users,
//! feeds and posts, and looks up the feeds a user follows by name.
//!
//! The page is written to stdout after every input line; see `/help` for the
//! commands.

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod view;

#[cfg(test)]
mod test_utils;


use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::GraphQlClient;
use app::{help_text, parse_command, Command, Dashboard};
use config::Config;
use view::render_page;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rssagg_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(endpoint = %config.graphql_url, "Starting RSS aggregator dashboard");

    let client = Arc::new(GraphQlClient::from_config(&config)?);
    let mut dashboard = Dashboard::new(client);

    dashboard.load().await;
    println!("{}", render_page(&dashboard));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{}", help_text());
                continue;
            }
            Ok(Command::Refresh) => dashboard.load().await,
            Ok(Command::Search(event)) => dashboard.handle(event).await,
            Err(e) => {
                eprintln!("{} (type /help for commands)", e);
                continue;
            }
        }
        println!("{}", render_page(&dashboard));
    }

    tracing::info!("Dashboard closed");
    Ok(())
}
