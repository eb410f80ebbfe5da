//! Interactive edit command
//!
//! Usage: tripjot edit
//!
//! A line-based session over the transient draft buffer: plain lines
//! accumulate into the draft, colon-commands drive the store. The draft
//! lives and dies with the session and is never persisted.

use clap::Args;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tripjot_core::Draft;
use tripjot_store::{KeyValueBackend, PreferenceStore};

#[derive(Debug, Args)]
pub struct EditArgs {}

/// Execute edit command
pub fn execute(_args: EditArgs, db: &Path) -> Result<(), Box<dyn Error>> {
    let mut store = super::open_store(db)?;
    let mut draft = Draft::new();

    println!("Type your preferences; lines accumulate into the draft.");
    println!("Commands: :save :show :clear :list :load <N> :delete <N> :wipe :quit");

    let stdin = io::stdin();
    let mut out = io::stdout();

    loop {
        print!("> ");
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n');

        if !handle_line(line, &mut draft, &mut store)? {
            break;
        }
    }

    Ok(())
}

/// Apply one input line to the session; false means quit
fn handle_line<B: KeyValueBackend>(
    line: &str,
    draft: &mut Draft,
    store: &mut PreferenceStore<B>,
) -> Result<bool, Box<dyn Error>> {
    let command = line.trim();

    match command {
        ":quit" | ":q" => return Ok(false),
        ":save" => {
            // Mirrors the disabled submit button: an empty draft saves nothing
            if draft.is_empty() {
                println!("Draft is empty, nothing to save.");
            } else {
                let entry = store.save(draft.trimmed())?;
                draft.clear();
                println!("✓ Saved {}", entry.id);
            }
        }
        ":show" => {
            if draft.is_empty() {
                println!("(draft is empty)");
            } else {
                println!("{}", draft.as_str());
            }
        }
        ":clear" => {
            if draft.is_empty() {
                println!("Draft is already empty.");
            } else {
                draft.clear();
                println!("✓ Draft cleared");
            }
        }
        ":list" => {
            if store.entries().is_empty() {
                println!("No preferences saved yet.");
            }
            for (i, entry) in store.entries().iter().enumerate() {
                println!("{:>3}. {}  {}", i + 1, entry.created_at, entry.text);
            }
        }
        ":wipe" => {
            store.remove_all()?;
            println!("✓ Cleared all saved preferences");
        }
        _ if command.starts_with(":load") => match parse_index(command, ":load", store) {
            Some(idx) => {
                draft.set(store.entries()[idx].text.clone());
                println!("✓ Loaded entry {} into the draft", idx + 1);
            }
            None => println!("Usage: :load <N> with N from the :list output"),
        },
        _ if command.starts_with(":delete") => match parse_index(command, ":delete", store) {
            Some(idx) => {
                let id = store.entries()[idx].id.clone();
                store.remove(&id)?;
                println!("✓ Deleted entry {}", idx + 1);
            }
            None => println!("Usage: :delete <N> with N from the :list output"),
        },
        _ if command.starts_with(':') => {
            println!("Unknown command: {}", command);
        }
        _ => draft.push_line(line),
    }

    Ok(true)
}

/// Parse a 1-based list index argument, None when missing or out of range
fn parse_index<B: KeyValueBackend>(
    command: &str,
    name: &str,
    store: &PreferenceStore<B>,
) -> Option<usize> {
    let n: usize = command.strip_prefix(name)?.trim().parse().ok()?;
    if n == 0 || n > store.entries().len() {
        return None;
    }
    Some(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripjot_store::MemoryBackend;

    fn session() -> (Draft, PreferenceStore<MemoryBackend>) {
        let store = PreferenceStore::initialize(MemoryBackend::new()).unwrap();
        (Draft::new(), store)
    }

    fn feed(
        lines: &[&str],
        draft: &mut Draft,
        store: &mut PreferenceStore<MemoryBackend>,
    ) -> bool {
        let mut keep_going = true;
        for line in lines {
            keep_going = handle_line(line, draft, store).unwrap();
        }
        keep_going
    }

    #[test]
    fn test_lines_accumulate_and_save_clears_draft() {
        let (mut draft, mut store) = session();

        feed(
            &["Summer in Greece", "budget 800", ":save"],
            &mut draft,
            &mut store,
        );

        assert!(draft.is_empty(), "draft resets after a successful save");
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].text, "Summer in Greece\nbudget 800");
    }

    #[test]
    fn test_save_on_empty_draft_is_a_no_op() {
        let (mut draft, mut store) = session();

        feed(&["   ", ":save"], &mut draft, &mut store);

        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_load_copies_text_back_into_draft() {
        let (mut draft, mut store) = session();
        store.save("Beach trip, budget 500").unwrap();

        feed(&[":load 1"], &mut draft, &mut store);

        assert_eq!(draft.as_str(), "Beach trip, budget 500");
        // The stored entry is untouched; resubmitting creates a new one
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn test_delete_by_index_and_wipe() {
        let (mut draft, mut store) = session();
        store.save("first").unwrap();
        store.save("second").unwrap();

        feed(&[":delete 2"], &mut draft, &mut store);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].text, "second");

        feed(&[":wipe"], &mut draft, &mut store);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_quit_stops_the_session() {
        let (mut draft, mut store) = session();
        assert!(!feed(&[":quit"], &mut draft, &mut store));
    }

    #[test]
    fn test_parse_index_rejects_out_of_range() {
        let (_, mut store) = session();
        store.save("only one").unwrap();

        assert_eq!(parse_index(":load 1", ":load", &store), Some(0));
        assert_eq!(parse_index(":load 2", ":load", &store), None);
        assert_eq!(parse_index(":load 0", ":load", &store), None);
        assert_eq!(parse_index(":load x", ":load", &store), None);
        assert_eq!(parse_index(":load", ":load", &store), None);
    }
}
