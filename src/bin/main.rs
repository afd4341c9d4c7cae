use autocomplete_core::{AutocompleteConfig, AutocompleteSession};
use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AutocompleteConfig::load_or_default(Path::new(&path)),
        None => AutocompleteConfig::default(),
    };
    let mut session = AutocompleteSession::from_file_or_new(&config);
    let mut input = String::new();
    let mut ghost = String::new();

    println!("Chat autocomplete demo. Type 'exit' to save and quit.");
    println!("---------------------------------------------------------------");

    loop {
        let completions = session.completions(&input);
        print_ui(&input, &ghost, &completions)?;

        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            break;
        }
        let cmd = line.trim_end_matches(['\r', '\n']);

        match cmd {
            "exit" => break,
            "" => {
                // Enter - send the message and learn its words
                let learned = session.learn_input(&input);
                println!("\nSent: '{}' ({} words learned)", input, learned);
                input.clear();
                ghost.clear();
                session.reset();
            }
            ":g" => {
                if !ghost.is_empty() {
                    if let Some(accepted) = session.accept_best(&input) {
                        input = accepted;
                    }
                    ghost.clear();
                }
            }
            ":b" => {
                input.pop();
                ghost = session.append_suggestion(&input);
            }
            s if pick_index(s).is_some() => {
                // Select completion :1, :2 etc
                if let Some(n) = pick_index(s).filter(|&n| n > 0 && n <= completions.len()) {
                    input = session.accept_completion(&input, &completions[n - 1]);
                    ghost.clear();
                }
            }
            s => {
                input.push_str(s);
                ghost = session.append_suggestion(&input);
            }
        }
    }

    println!("\nSaving dictionary...");
    match session.save_dictionary() {
        Ok(()) => {
            if let Some(path) = session.dictionary_path() {
                println!("Dictionary saved to '{}'", path.display());
            }
        }
        Err(e) => eprintln!("[ERROR] Could not save dictionary: {}", e),
    }
    Ok(())
}

/// `:N` with only digits after the colon; anything else (":)", ":D") is text.
fn pick_index(cmd: &str) -> Option<usize> {
    let digits = cmd.strip_prefix(':')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn print_ui(input: &str, ghost: &str, completions: &[String]) -> std::io::Result<()> {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("Chat Autocomplete Demo");
    println!("---------------------------------------------------------------");
    println!("Type text and press [Enter] to append it, empty line sends.");
    println!("':g' accepts the ghost, ':b' deletes a char, ':1', ':2' pick a completion.\n");

    println!("Input: [{}{}]", input, ghost.dark_grey());

    if !completions.is_empty() {
        println!("\nCompletions:");
        for (i, word) in completions.iter().enumerate() {
            println!("  :{}: {}", i + 1, word);
        }
    } else {
        println!("\nNo completions.");
    }
    print!("\n> ");
    stdout().flush()
}
