use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use glossa_lib::answer::{check_answer, TokenCheck, Verdict};
use glossa_lib::catalog::CatalogStore;
use glossa_lib::learn::{EntryView, LearnService};
use glossa_lib::settings::SettingsStore;
use glossa_lib::vocabulary::ExcelVocabularyReader;

use super::OutputFormat;

/// Open the learn service over the default app data directory
fn open_service() -> Result<LearnService<ExcelVocabularyReader>> {
    let data_dir =
        SettingsStore::default_base_dir().context("Failed to get data directory")?;

    let mut settings_store = SettingsStore::new(data_dir.clone());
    let learn_settings = settings_store
        .get()
        .context("Failed to load settings")?
        .learn
        .clone();

    Ok(LearnService::new(
        learn_settings,
        ExcelVocabularyReader,
        CatalogStore::new(data_dir),
    ))
}

pub fn list(format: &OutputFormat) -> Result<()> {
    let mut service = open_service()?;
    let vocabularies = service
        .load_vocabulary_list()
        .context("Failed to load vocabulary list")?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&vocabularies)?);
        return Ok(());
    }

    if vocabularies.is_empty() {
        println!("No vocabularies registered. Add one with: glossa-cli add <path>");
        return Ok(());
    }

    for vocabulary in vocabularies {
        let sessions: Vec<String> = vocabulary.sessions.iter().map(|s| s.display()).collect();
        let last = vocabulary
            .last_session_time()
            .map(|t| {
                t.with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<28} {:>7} {:>7} {:>7}  last: {}",
            vocabulary.file_name, sessions[0], sessions[1], sessions[2], last
        );
        if vocabulary.has_errors() {
            println!("  ! {}", vocabulary.error_message);
        }
    }

    Ok(())
}

pub fn add(path: &str) -> Result<()> {
    let mut service = open_service()?;
    service.load_vocabulary_list()?;

    if service.catalog().find_by_path(path).is_some() {
        bail!("'{}' is already registered", path);
    }

    let added = service
        .add_vocabulary_file(path)
        .context("Failed to register vocabulary")?;

    if added.has_errors() {
        println!("Added {} ({})", added.file_name, added.error_message);
    } else {
        println!("Added {}", added.file_name);
    }
    Ok(())
}

pub fn remove(path: &str) -> Result<()> {
    let mut service = open_service()?;
    service.load_vocabulary_list()?;

    if service.catalog().find_by_path(path).is_none() {
        bail!("'{}' is not registered", path);
    }

    service
        .remove_vocabulary_file(path)
        .context("Failed to remove vocabulary")?;
    println!("Removed {}", path);
    Ok(())
}

pub fn drill(path: &str, session: usize, restart: bool) -> Result<()> {
    if !(1..=3).contains(&session) {
        bail!("session must be between 1 and 3");
    }

    let mut service = open_service()?;
    service.load_vocabulary_list()?;

    let vocabulary = service
        .start_session(path, session - 1, !restart)
        .context("Failed to start session")?;

    println!(
        "{} session {}: type the translation, '?' for tips, empty line to stop",
        vocabulary.file_name, session
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut current = service.current_entry();

    while let Some(entry) = current {
        print_prompt(&entry);
        let mut used_tips = false;

        // Read answers for this entry until one is fully correct
        loop {
            print!("> ");
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            let input = line.trim();

            if input.is_empty() {
                return Ok(());
            }

            if input == "?" {
                used_tips = true;
                print_tips(&entry);
                continue;
            }

            let check = check_answer(input, &entry.entry.translation);
            match check.verdict {
                Verdict::Correct => break,
                Verdict::Similar => {
                    println!("  close: {}", render_hint(&check.tokens));
                }
                Verdict::Wrong => {
                    println!("  no.");
                }
            }
        }

        let recorded = service.record_answer(&entry.entry.term, !used_tips)?;
        print_result(&recorded);
        current = service.next_entry()?;
    }

    println!("Session complete.");
    Ok(())
}

fn print_prompt(entry: &EntryView) {
    let tip = if entry.entry.term_tip.is_empty() {
        String::new()
    } else {
        format!(" ({})", entry.entry.term_tip)
    };

    println!(
        "\n[{}-{}  {}/{}] {}{}",
        entry.session.queue_index + 1,
        entry.session.queue_count,
        entry.session.learned_entries,
        entry.session.total_entries,
        entry.entry.term,
        tip
    );
}

fn print_tips(entry: &EntryView) {
    println!("  {}", entry.entry.translation);
    if !entry.entry.transcription.is_empty() {
        println!("  [{}]", entry.entry.transcription);
    }
    if !entry.entry.translation_example.is_empty() {
        println!("  {}", entry.entry.translation_example);
    }
}

fn print_result(entry: &EntryView) {
    let mark = if entry.learned { "learned" } else { "ok" };
    println!(
        "  {} ({}/{})",
        mark, entry.correct_answers, entry.total_attempts
    );
}

/// Render a similar answer the way the GUI does: matched tokens shown,
/// wrong words blanked out
fn render_hint(tokens: &[TokenCheck]) -> String {
    let mut hint = String::new();

    for token in tokens {
        if !hint.is_empty() && !token.no_space_before() {
            hint.push(' ');
        }

        if token.matched {
            hint.push_str(&token.text);
        } else {
            hint.push_str(&"_".repeat(token.text.chars().count()));
        }
    }

    hint
}
