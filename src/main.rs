use clap::Parser;
use oof_tracker::application::{
    export_to_file, import_from_file, init::init, ConfigService, ImportOutcome, Session,
};
use oof_tracker::cli::{format_holidays, format_month, format_totals, Cli, Commands};
use oof_tracker::domain::{SetOutcome, ThemeMode, Year};
use oof_tracker::error::{OofError, Result};
use oof_tracker::infrastructure::config::system_prefers_dark;
use oof_tracker::infrastructure::{FileKeyValueStore, FileSystemRepository, TrackerRepository};
use std::io::{self, BufRead, Write};

fn main() {
    let cli = Cli::parse();
    oof_tracker::logging::init(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the tracker and open a session for its effective year
fn open_session() -> Result<(FileSystemRepository, Session<FileKeyValueStore>)> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let session = Session::open(config.effective_year(), repo.storage())?;
    Ok((repo, session))
}

/// Ask on stdin whether to replace the current entries
fn confirm_replace(year: Year) -> Result<bool> {
    print!("Replace existing entries for {} with imported data? [y/N] ", year);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("oof - Time-off tracker");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path, year } => {
            let year = match year {
                Some(raw) => raw.parse::<Year>().map_err(OofError::Config)?,
                None => Year::default(),
            };
            init(&path, year)
        }
        Commands::Show { month } => {
            let (_, session) = open_session()?;
            let grids = session.grids(month)?;
            let rendered: Vec<String> = grids
                .iter()
                .map(|grid| format_month(grid, session.entries()))
                .collect();
            println!("{}", rendered.join("\n"));
            print!("{}", format_totals(&session.totals()));
            Ok(())
        }
        Commands::Set { date, value } => {
            let (_, mut session) = open_session()?;
            let date = session.parse_date(&date)?;
            match session.set_entry(date, &value)? {
                SetOutcome::Ignored => {
                    println!("Unchanged: '{}' is not a whole number.", value.trim())
                }
                SetOutcome::Stored(_) | SetOutcome::Cleared => println!("Saved."),
            }
            print!("{}", format_totals(&session.totals()));
            Ok(())
        }
        Commands::Clear { date } => {
            let (_, mut session) = open_session()?;
            let date = session.parse_date(&date)?;
            session.set_entry(date, "")?;
            println!("Saved.");
            print!("{}", format_totals(&session.totals()));
            Ok(())
        }
        Commands::Totals => {
            let (_, session) = open_session()?;
            print!("{}", format_totals(&session.totals()));
            Ok(())
        }
        Commands::Holidays => {
            let (_, session) = open_session()?;
            print!("{}", format_holidays(session.holidays()));
            Ok(())
        }
        Commands::Export { output, stdout } => {
            let (_, session) = open_session()?;
            if stdout {
                println!("{}", session.export_json(chrono::Utc::now())?);
            } else {
                let path = export_to_file(&session, output.as_deref())?;
                println!("Export complete: {}", path.display());
            }
            Ok(())
        }
        Commands::Import { file, yes } => {
            let (_, mut session) = open_session()?;
            let outcome = import_from_file(&mut session, &file, |session| {
                if yes {
                    Ok(true)
                } else {
                    confirm_replace(session.year())
                }
            })?;
            match outcome {
                ImportOutcome::Imported(count) => {
                    println!("Import complete: {} entries.", count);
                    print!("{}", format_totals(&session.totals()));
                }
                ImportOutcome::Canceled => println!("Import canceled."),
            }
            Ok(())
        }
        Commands::Theme { mode } => {
            let (_, mut session) = open_session()?;
            let mode = match mode {
                Some(raw) => {
                    let mode: ThemeMode = raw.parse().map_err(OofError::Config)?;
                    session.set_theme_mode(mode)?;
                    println!("Theme set to {}.", mode);
                    mode
                }
                None => session.theme_mode()?,
            };
            println!("mode = {}", mode);
            println!("theme = {}", mode.resolve(system_prefers_dark()));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("year = {}", config.effective_year());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v.trim());
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: oof config [--list | <key> [<value>]]");
                println!("Valid keys: year, created");
                Ok(())
            }
        }
    }
}
