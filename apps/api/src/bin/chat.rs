//! Terminal chat client. Runs the same session dispatcher as the browser
//! widget, answering locally by default or against a running server when
//! `--url` is given.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use navigator::chat::{
    main_menu_buttons, ChatButton, ChatSession, HttpBackend, Message, MessageBody, MessageContent,
    Role,
};
use navigator::knowledge::Knowledge;

#[derive(Parser, Debug)]
#[command(name = "chat", version, about = "Terminal client for the portfolio chat")]
struct Args {
    /// Base URL of a running server. Answers locally when omitted.
    #[arg(long)]
    url: Option<String>,

    /// Directory holding portfolio.json and assistant.json.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they do not interleave with the conversation.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let knowledge = Arc::new(Knowledge::load(&args.data_dir)?);
    let mut session = match args.url {
        Some(url) => ChatSession::with_backend(knowledge, Box::new(HttpBackend::new(url))),
        None => ChatSession::new(knowledge),
    };

    println!("(type a message, /press <button-id>, or /quit)");
    let mut shown = 0;
    print_new(session.messages(), &mut shown);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        let line = line.trim();

        if line == "/quit" {
            break;
        }
        if line == "/press" {
            println!("usage: /press <button-id>");
            continue;
        }
        if let Some(id) = line.strip_prefix("/press ") {
            let id = id.trim();
            match find_button(session.messages(), id) {
                Some(button) => session.press_button(button).await,
                None => println!("no button '{id}' on screen"),
            }
        } else {
            session.submit_text(line).await;
        }
        print_new(session.messages(), &mut shown);
    }

    Ok(())
}

/// Prints assistant messages appended since the last call. User entries are
/// skipped; the person at the keyboard just typed them.
fn print_new(messages: &[Message], shown: &mut usize) {
    for message in &messages[*shown..] {
        if message.role == Role::Assistant {
            match &message.content {
                MessageBody::Text(text) => println!("\nbot> {text}\n"),
                MessageBody::Rich(content) => print_reply(content),
            }
        }
    }
    *shown = messages.len();
}

fn print_reply(content: &MessageContent) {
    println!("\nbot> {}", content.message);

    let mut flags = Vec::new();
    if content.portfolio {
        flags.push("portfolio");
    }
    if content.contact {
        flags.push("contact");
    }
    if content.resume {
        flags.push("resume");
    }
    if content.work {
        flags.push("work");
    }
    if !flags.is_empty() {
        println!("     [shows: {}]", flags.join(", "));
    }
    if let Some(meta) = &content.metadata {
        println!("     [level {}: {}]", meta.level, meta.section);
    }
    for button in &content.buttons {
        println!("     ({}) {}", button.id, button.text);
    }
    println!();
}

/// Buttons currently on screen: the persistent main menu plus whatever the
/// latest assistant reply offered. Matched by id or by action.
fn find_button(messages: &[Message], id: &str) -> Option<ChatButton> {
    let mut buttons = main_menu_buttons();
    let latest_reply = messages.iter().rev().find_map(|m| match &m.content {
        MessageBody::Rich(content) if m.role == Role::Assistant => Some(content),
        _ => None,
    });
    if let Some(content) = latest_reply {
        buttons.extend(content.buttons.iter().cloned());
    }
    buttons.into_iter().find(|b| b.id == id || b.action == id)
}
