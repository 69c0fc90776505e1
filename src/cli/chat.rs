//! Chat command handlers (interactive + single message).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use cinebot::Assistant;

use super::load_assistant;

/// Interactive chat on stdin/stdout.
pub(crate) fn cmd_chat(data: Option<PathBuf>) -> Result<()> {
    let mut assistant = load_assistant(data)?;

    println!("Cinebot - I'm a movie expert! Ask me about movies.");
    println!("Teach me with 'Learn: <title>: <attribute> -> <answer>'. Type 'quit' or 'exit' to stop.");
    println!();

    let stdin = io::stdin();
    run_session(&mut assistant, stdin.lock(), io::stdout())
}

/// Answer a single message.
pub(crate) fn cmd_ask(data: Option<PathBuf>, message: &str) -> Result<()> {
    let mut assistant = load_assistant(data)?;
    println!("{}", assistant.handle_input(message.trim()));
    Ok(())
}

/// Read messages line by line until EOF or `quit`/`exit`, writing one reply
/// per message.
pub(crate) fn run_session<R, W>(assistant: &mut Assistant, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                // EOF
                writeln!(output)?;
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    writeln!(output, "Goodbye!")?;
                    break;
                }

                let reply = assistant.handle_input(line);
                writeln!(output)?;
                writeln!(output, "{}", reply)?;
                writeln!(output)?;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    Ok(())
}
