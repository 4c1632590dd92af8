//! Interactive chat application for conversing with Kelly.
//!
//! This binary provides a REPL interface for chatting with Kelly, an AI
//! scientist-poet persona served through the Groq API.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! kelly-chat
//!
//! # Specify a model
//! kelly-chat --model llama-3.1-8b-instant
//!
//! # Replace the persona
//! kelly-chat --system "You are a helpful coding assistant"
//!
//! # Disable colors (useful for piping output)
//! kelly-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear conversation history
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use std::path::PathBuf;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use kelly::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, Renderer, help_text,
    parse_command,
};
use kelly::{Groq, credentials, persona};

/// Main entry point for the kelly-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("kelly-chat [OPTIONS]");
    let secrets_path = args.secrets.clone().map(PathBuf::from);
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    // The key is resolved exactly once; absence is fatal before any
    // remote call is made.
    let api_key = match credentials::resolve(None, secrets_path.as_deref()) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("{err}\n");
            eprintln!("{}", credentials::remediation());
            std::process::exit(1);
        }
    };

    let client = Groq::new(Some(api_key))?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("Kelly Chat (model: {})", session.model());
    println!("Type /help for commands, /quit to exit\n");
    renderer.print_greeting(persona::GREETING);

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Conversation cleared.\n");
                            renderer.print_greeting(persona::GREETING);
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to the API; on failure the session
                // is unchanged and the user may resubmit.
                if let Err(e) = session.send(line, &mut renderer).await {
                    renderer.print_error(&e.to_string());
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn print_stats(session: &ChatSession<Groq>) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Model: {}", stats.model);
    println!("      Messages: {}", stats.message_count);
    println!("      Max tokens: {}", stats.max_tokens);
    println!("      Temperature: {:.2}", stats.temperature);
    println!("      Top-p: {:.2}", stats.top_p);
    println!(
        "      Total tokens: {} in / {} out ({} requests)",
        stats.total_prompt_tokens, stats.total_completion_tokens, stats.total_requests
    );
    if let Some(prompt) = stats.last_turn_prompt_tokens {
        let completion = stats.last_turn_completion_tokens.unwrap_or(0);
        println!("      Last turn tokens: {prompt} in / {completion} out");
    }
}
