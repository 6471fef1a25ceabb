//! Interactive terminal front end for the todo list
//!
//! Reads one command per line from stdin and redraws after every action.

use std::io::{self, Write};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_core::state::AppState;
use todo_core::task::{ConfirmationGate, MemoryTaskStore, TracingObserver};
use todo_core::Settings;
use todo_view::intent::is_affirmative;
use todo_view::{render, Intent};

const HELP: &str = "\
commands:
  add <text>            create a task from the current draft
  toggle <id>           flip a task's completion
  done <id> | undo <id> mark a task completed or pending
  priority <level>      draft priority: high, medium, low
  due [YYYY-MM-DD]      draft due date, empty clears it
  filter <name>         all, active, completed
  search [text]         filter by text, empty clears it
  mode [create|none]    show or hide the create form
  json                  print the current snapshot
  help | quit";

/// Asks on the terminal before a completion change
struct TerminalConfirm;

impl ConfirmationGate for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_view=info,todo_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = Settings::from_env();
    tracing::info!(?settings, "Starting todo view");

    let mut store = MemoryTaskStore::new();
    if settings.log_mutations {
        store = store.with_observer(TracingObserver);
    }
    if settings.confirm_status_changes {
        store = store.with_confirmation(TerminalConfirm);
    }

    let mut state = AppState::with_settings(store, settings);
    state.subscribe(|snapshot| println!("{}", render(snapshot)));
    println!("{}", render(state.snapshot()));
    println!("{HELP}");

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "json" => println!("{}", state.snapshot().to_json()?),
            command => {
                let result = command
                    .parse::<Intent>()
                    .and_then(|intent| intent.apply(&mut state));
                if let Err(e) = result {
                    tracing::warn!("{}", e);
                    println!("error: {e}");
                }
            }
        }
    }

    tracing::info!("Bye");
    Ok(())
}
