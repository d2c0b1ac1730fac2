use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;

#[derive(Parser, Debug)]
#[command(name = "anan", version, about = "Daily revenue reports for Massage Royal An An")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the chat reply for one sales message
    Reply {
        /// Message text; reads stdin when omitted
        text: Vec<String>,
    },

    /// Show the parsed record and breakdown as JSON, without the template
    Inspect {
        /// Message text; reads stdin when omitted
        text: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Reply { text } => {
            let msg = message_text(text)?;
            print!("{}", anan_core::reply(&msg));
        }

        Command::Inspect { text } => {
            let msg = message_text(text)?;
            let input = anan_core::parse_message(&msg)
                .with_context(|| format!("parsing message {msg:?}"))?;
            let breakdown = anan_core::calculate(&input);

            println!("{}", serde_json::to_string_pretty(&input)?);
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
    }

    Ok(())
}

fn message_text(args: Vec<String>) -> Result<String> {
    if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading message from stdin")?;
        Ok(buf)
    } else {
        Ok(args.join(" "))
    }
}
