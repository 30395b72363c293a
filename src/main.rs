use clap::Parser;
use std::time::Duration;
use zenith::application::{
    init::init, BreathingSessionDriver, CalendarService, ConfigService, RecordService,
};
use zenith::cli::{
    format_emotion_list, format_month_grid, format_record_list, format_session_line,
    format_tip_list, Cli, Commands,
};
use zenith::domain::{format_clock, MonthRef};
use zenith::error::ZenithError;
use zenith::infrastructure::JsonFileStore;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ZenithError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Config { key, value, list } => {
            let store = JsonFileStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("breathing_secs = {}", config.breathing_secs);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: zenith config [--list | <key> [<value>]]");
                println!("Valid keys: breathing_secs, created");
                Ok(())
            }
        }
        Commands::Add {
            title,
            content,
            emotion,
        } => {
            let store = JsonFileStore::discover()?;
            let service = RecordService::new(store);
            let record = service.add(&title, &content, emotion.as_deref())?;
            println!(
                "Added record {} {}",
                record.id.as_deref().unwrap_or("-"),
                record.emotion_emoji.as_deref().unwrap_or("")
            );
            Ok(())
        }
        Commands::List => {
            let store = JsonFileStore::discover()?;
            let service = RecordService::new(store);
            let records = service.list()?;
            print!("{}", format_record_list(&records));
            Ok(())
        }
        Commands::Delete { id } => {
            let store = JsonFileStore::discover()?;
            let service = RecordService::new(store);
            service.delete(&id)?;
            println!("Deleted record {}", id);
            Ok(())
        }
        Commands::Emotions => {
            print!("{}", format_emotion_list());
            Ok(())
        }
        Commands::Tips => {
            print!("{}", format_tip_list());
            Ok(())
        }
        Commands::Calendar { month } => {
            let store = JsonFileStore::discover()?;
            let month = match month {
                Some(input) => {
                    MonthRef::parse(&input).ok_or(ZenithError::InvalidMonth(input))?
                }
                None => MonthRef::containing(chrono::Local::now().date_naive()),
            };
            let service = CalendarService::new(store);
            let grid = service.month_view(month)?;
            print!("{}", format_month_grid(&grid));
            Ok(())
        }
        Commands::Breathe { seconds } => {
            let duration = match seconds {
                Some(secs) => secs,
                None => JsonFileStore::discover()?.load_config()?.breathing_secs,
            };
            run_breathing_session(duration)
        }
    }
}

/// Run one breathing session to completion, printing a line per second.
fn run_breathing_session(duration: u32) -> Result<(), ZenithError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        let driver = BreathingSessionDriver::new();
        if !driver.start(duration).await {
            println!("Duration must be greater than zero");
            return Ok(());
        }

        println!("Ejercicio de Respiración: {}", format_clock(duration));
        loop {
            let snapshot = driver.snapshot().await;
            if !snapshot.active {
                break;
            }
            println!("{}", format_session_line(&snapshot));
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
        println!("Sesión completada");
        Ok(())
    })
}
