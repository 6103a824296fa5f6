//! `--watch` mode — re-render on filesystem changes

use super::args::Args;
use super::extract::{Workspace, prepare, print_view};
use mdextract::helpers::has_note_extension;
use mdextract::render;

/// Run watch mode with file change detection
pub(crate) fn run_watch_mode(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    use colored::Colorize;
    use notify_debouncer_full::{new_debouncer, notify::*};
    use std::sync::mpsc::channel;
    use std::time::Duration;

    let Workspace {
        config,
        mut host,
        session,
    } = prepare(args)?;

    println!("{}", "Starting watch mode...".cyan().bold());
    println!();

    // Initial render
    print_view(&render(&session, &mut host), args, &config);
    println!();

    // Set up file watcher with debouncing (300ms)
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(Duration::from_millis(300), None, tx)?;

    let vault = host.vault().to_path_buf();
    debouncer.watch(&vault, RecursiveMode::Recursive)?;
    println!(
        "{} Watching: {}",
        "✓".green(),
        vault.display().to_string().cyan()
    );
    println!();
    println!("{} Press {} to exit", "▸".cyan(), "Ctrl+C".yellow().bold());
    println!();

    // Main watch loop
    loop {
        match rx.recv() {
            Ok(result) => match result {
                Ok(events) => {
                    // The last note touched in this batch is the one being edited
                    let changed = events
                        .iter()
                        .flat_map(|event| event.paths.iter())
                        .filter(|path| has_note_extension(path, &config.extensions) && path.is_file())
                        .last()
                        .cloned();
                    let Some(path) = changed else {
                        continue;
                    };

                    if host.active_path() == Some(path.as_path()) {
                        println!("{} File changed, re-rendering...", "▸".cyan());
                    } else {
                        println!("{} Switched to {}", "▸".cyan(), path.display());
                        if let Err(e) = host.open(&path) {
                            eprintln!("{} {}", "Error:".red().bold(), e);
                            continue;
                        }
                    }
                    print_view(&render(&session, &mut host), args, &config);
                    println!();
                }
                Err(errors) => {
                    for error in errors {
                        eprintln!("{} Watch error: {:?}", "Error:".red().bold(), error);
                    }
                }
            },
            Err(e) => {
                eprintln!("{} Channel error: {}", "Error:".red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
