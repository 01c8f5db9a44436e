//! Todo List Entry Point
//!
//! Seeds a collection from config and prints the owner's list.

mod config;

use std::io::{self, Write};
use std::process::ExitCode;

use todo_lib::TodoCollection;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let path = config::config_path(
        std::env::args().nth(1),
        std::env::var_os(config::CONFIG_ENV),
    );
    let config = config::load_config(path.as_deref())?;

    // The list is still printed when the log directory is unusable
    if let Err(e) = rolling_logger::init_logger(&config.log_dir, "TodoList") {
        eprintln!("Logging disabled: {}", e);
    }

    let collection = TodoCollection::new(config.owner, config.items).map_err(|e| {
        let _ = rolling_logger::error(&format!("Invalid seed items: {}", e));
        e.to_string()
    })?;
    log::info!(
        "Loaded {} todo item(s) for {}",
        collection.len(),
        collection.owner_name()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_list(&collection, &mut out).map_err(|e| format!("Failed to write list: {}", e))?;
    out.flush().map_err(|e| format!("Failed to write list: {}", e))
}

fn print_list<W: Write>(collection: &TodoCollection, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}'s Todo List", collection.owner_name())?;
    writeln!(out, "{} items to do", collection.get_counts().incomplete)?;
    for item in collection.get_items(true) {
        item.print_details(out)?;
    }
    Ok(())
}
