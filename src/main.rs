use clap::Parser;
use daybook::application::{init, EntryStore};
use daybook::cli::{
    format_calendar, format_entry_list, format_frequency_series, format_mood_series,
    format_tag_list, Cli, Commands,
};
use daybook::error::DaybookError;
use daybook::infrastructure::{Config, DirBlobStore};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the journal, load its config and open the store. A corrupt
/// entries blob is discarded with a warning rather than failing.
fn open_store() -> Result<(EntryStore<DirBlobStore>, Config), DaybookError> {
    let blobs = DirBlobStore::discover()?;
    let config = Config::load_from_dir(&blobs.root)?;
    let store = EntryStore::open(blobs)?;

    if store.recovered_from_corruption() {
        eprintln!("Warning: stored entries were unreadable and have been discarded");
    }

    Ok((store, config))
}

fn run(cli: Cli) -> Result<(), DaybookError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::Add {
            title,
            content,
            tags,
            mood,
        } => {
            let (mut store, _) = open_store()?;
            let saved = store.create_or_update(&title, &content, &tags, mood, None)?;
            if saved {
                println!("Added entry [{}]", store.entries()[0].id);
            } else {
                println!("Nothing saved: title and content are required");
            }
            Ok(())
        }

        Commands::Edit {
            id,
            title,
            content,
            tags,
            mood,
        } => {
            let (mut store, _) = open_store()?;
            if !store.begin_edit(id) {
                println!("No entry with id {}", id);
                return Ok(());
            }

            let draft = store.draft_mut();
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(content) = content {
                draft.content = content;
            }
            if let Some(tags) = tags {
                draft.tags_text = tags;
            }
            if let Some(mood) = mood {
                draft.mood = mood;
            }

            if store.submit_draft()? {
                println!("Updated entry [{}]", id);
            } else {
                println!("Nothing saved: title and content are required");
            }
            Ok(())
        }

        Commands::Delete { id } => {
            let (mut store, _) = open_store()?;
            if store.delete(id)? {
                println!("Deleted entry [{}]", id);
            } else {
                println!("No entry with id {}", id);
            }
            Ok(())
        }

        Commands::List { search, tag } => {
            let (store, config) = open_store()?;
            let entries = store.filter(&search, &tag);
            print!("{}", pad_list(format_entry_list(&entries, &config.date_format)));
            Ok(())
        }

        Commands::Tags => {
            let (store, _) = open_store()?;
            print!("{}", pad_list(format_tag_list(&store.distinct_tags())));
            Ok(())
        }

        Commands::Mood => {
            let (store, config) = open_store()?;
            print!(
                "{}",
                pad_list(format_mood_series(&store.mood_series(&config.date_format)))
            );
            Ok(())
        }

        Commands::Frequency => {
            let (store, config) = open_store()?;
            print!(
                "{}",
                pad_list(format_frequency_series(
                    &store.frequency_series(&config.date_format)
                ))
            );
            Ok(())
        }

        Commands::Calendar => {
            let (store, config) = open_store()?;
            print!(
                "{}",
                pad_list(format_calendar(&store.calendar_events(), &config.date_format))
            );
            Ok(())
        }

        Commands::Theme { value } => {
            let (mut store, _) = open_store()?;
            match value {
                None => {
                    println!("{}", if store.dark_mode()? { "dark" } else { "light" });
                    Ok(())
                }
                Some(value) => {
                    let dark = match value.as_str() {
                        "dark" => true,
                        "light" => false,
                        other => {
                            return Err(DaybookError::Config(format!(
                                "Invalid theme: '{}'. Valid themes are: dark, light",
                                other
                            )))
                        }
                    };
                    store.set_dark_mode(dark)?;
                    println!("Theme set to {}", value);
                    Ok(())
                }
            }
        }

        Commands::Config { key, value, list } => {
            let blobs = DirBlobStore::discover()?;

            if list {
                let config = Config::load_from_dir(&blobs.root)?;
                println!("date_format = {}", config.date_format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                let mut config = Config::load_from_dir(&blobs.root)?;
                if let Some(v) = value {
                    config.set(&k, &v)?;
                    config.save_to_dir(&blobs.root)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", config.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: daybook config [--list | <key> [<value>]]");
                println!("Valid keys: date_format, created");
                Ok(())
            }
        }
    }
}

/// Listing output ends with a newline even for the empty-placeholder case
fn pad_list(formatted: String) -> String {
    if formatted.ends_with('\n') {
        formatted
    } else {
        format!("{}\n", formatted)
    }
}
