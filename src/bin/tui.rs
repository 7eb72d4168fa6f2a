use anyhow::Result;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_help();
        return Ok(());
    }

    init_logging();

    quickdo::tui::run()
}

// Best-effort file logging; the TUI owns the terminal, so nothing may
// print to stdout/stderr while it runs.
fn init_logging() {
    let path = env::temp_dir().join("quickdo.log");
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Warn, Config::default(), file);
    }
}

fn print_help() {
    println!(
        "Quickdo v{} - Minimal single-screen TUI to-do list",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    quickdo                 Start the interactive list");
    println!("    quickdo --help          Show this help message");
    println!();
    println!("KEYBINDINGS:");
    println!("    a                 Open the add-task dialog");
    println!("    Enter (dialog)    Confirm the new task (blank input is rejected)");
    println!("    Esc (dialog)      Cancel the dialog");
    println!("    j/k, Up/Down      Move the selection (wraps around)");
    println!("    d, Delete         Delete the selected row");
    println!("    Enter             Delete the selected task by title (first match)");
    println!("    q                 Quit (the list is not saved)");
    println!();
    println!("NOTES:");
    println!("    Tasks live in memory for the lifetime of the screen only.");
    println!("    There is no persistence, no sync, and no configuration.");
}
