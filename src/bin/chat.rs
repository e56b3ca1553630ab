//! Terminal front-end for the chat widget.
//!
//! Run with: `cargo run --bin portfolio-chat`
//!
//! Type a question, pick a starter with its number, or use:
//! `/open`, `/close`, `/clear`, `/go` (activate the last follow-up), `/quit`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use portfolio_site::chatbot::{ChatWidget, EphemeralHistory, Message, Navigator, Role};
use portfolio_site::site::{Route, SiteConfig};
use portfolio_site::start_portfolio;

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        println!("  -> navigating to {} ({})", route.label(), route.path());
    }
}

fn print_message(message: &Message) {
    let who = match message.role {
        Role::User => "you",
        Role::Assistant => "bot",
    };
    println!("[{} {who}] {}", message.timestamp.format("%H:%M"), message.content);
    if let Some(tag) = message.follow_up() {
        let control = tag.control();
        println!("  {} {} (type /go)", control.icon, control.label);
    }
}

fn print_suggestions(widget: &ChatWidget) {
    let suggestions = widget.visible_suggestions();
    if suggestions.is_empty() {
        return;
    }
    println!("Welcome! Pick a question:");
    for item in &suggestions {
        println!("  {}. {} {}", item.id, item.icon, item.label);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    start_portfolio::init_tracing();

    let config = SiteConfig::from_env().context("loading configuration")?;
    let mut widget = ChatWidget::new(
        &config.chatbot,
        Arc::new(TerminalNavigator),
        Arc::new(EphemeralHistory),
    )
    .context("assembling chat widget")?;

    widget.shell_mut().toggle_open();
    print_suggestions(&widget);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let input = line.trim_end_matches(['\r', '\n']);
        match input {
            "/quit" => break,
            "/open" => {
                if !widget.shell().is_open() {
                    widget.shell_mut().toggle_open();
                }
                print_suggestions(&widget);
                continue;
            }
            "/close" => {
                widget.shell_mut().close();
                println!("(closed)");
                continue;
            }
            "/clear" => {
                widget.shell().clear_history();
                print_suggestions(&widget);
                continue;
            }
            "/go" => {
                let last = widget
                    .state()
                    .messages
                    .iter()
                    .rev()
                    .find(|m| m.follow_up().is_some())
                    .map(|m| m.id);
                if !last.is_some_and(|id| widget.activate_action(id)) {
                    println!("(nothing to open)");
                }
                continue;
            }
            _ => {}
        }

        if !widget.shell().is_open() {
            println!("(widget is closed, type /open)");
            continue;
        }

        let before = widget.state().messages.len();
        let is_starter =
            widget.state().messages.is_empty() && widget.suggestions().find(input).is_some();
        let submitted = if is_starter {
            widget.select_suggestion(input)
        } else {
            widget.submit(input)
        };
        if submitted.is_none() {
            continue;
        }

        println!("...");
        widget.wait_idle().await;
        for message in widget.state().messages.iter().skip(before) {
            print_message(message);
        }
    }

    Ok(())
}
