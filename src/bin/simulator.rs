use autocomplete_core::{AutocompleteConfig, AutocompleteSession};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Line protocol for a host UI, one command per line on stdin:
//   INPUT <text>     -> GHOST <suffix>
//   COMPLETE <text>  -> CANDIDATE <i> <word> ... END
//   COMMIT <text>    -> OK <words learned>
//   SAVE             -> OK | ERR <message>
//   EXIT             saves and quits
fn main() -> io::Result<()> {
    // Logs go to stderr, stdout carries the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    tracing::info!("autocomplete simulator starting");

    let config = match std::env::var_os("CHAT_AUTOCOMPLETE_CONFIG") {
        Some(path) => AutocompleteConfig::load_or_default(Path::new(&path)),
        None => AutocompleteConfig::default(),
    };
    let mut session = AutocompleteSession::from_file_or_new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        tracing::debug!("<- {:?}", line);
        let (command, arg) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        match command {
            "INPUT" => {
                let ghost = session.append_suggestion(arg);
                reply(&mut stdout, &format!("GHOST {}", ghost))?;
            }
            "COMPLETE" => {
                for (i, word) in session.completions(arg).iter().enumerate() {
                    reply(&mut stdout, &format!("CANDIDATE {} {}", i, word))?;
                }
                reply(&mut stdout, "END")?;
            }
            "COMMIT" => {
                let learned = session.learn_input(arg);
                session.reset();
                reply(&mut stdout, &format!("OK {}", learned))?;
            }
            "SAVE" => match session.save_dictionary() {
                Ok(()) => reply(&mut stdout, "OK")?,
                Err(e) => reply(&mut stdout, &format!("ERR {}", e))?,
            },
            "EXIT" => break,
            _ => {
                tracing::warn!("unknown command {:?}", command);
                reply(&mut stdout, "ERR unknown command")?;
            }
        }
    }

    tracing::info!("saving dictionary and shutting down");
    if let Err(e) = session.save_dictionary() {
        tracing::error!("error saving dictionary: {}", e);
    }
    Ok(())
}

fn reply(stdout: &mut impl Write, message: &str) -> io::Result<()> {
    tracing::debug!("-> {:?}", message);
    writeln!(stdout, "{}", message)?;
    stdout.flush()
}
