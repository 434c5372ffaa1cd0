use carpark::api::CarParkApi;
use carpark::commands::{CmdMessage, MessageLevel};
use carpark::config::CarParkConfig;
use carpark::error::{CarParkError, Result};
use carpark::ledger::ParkingLedger;
use carpark::store::fs::CsvStore;
use carpark::store::RecordStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("An unexpected error occurred: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CarParkApi<CsvStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config is handled before a ledger exists so `config capacity N` works
    // on an empty data dir too.
    if let Commands::Config { key, value } = &cli.command {
        return handle_config(&data_dir(&cli), key.as_deref(), value.as_deref());
    }

    let mut ctx = init_context(&cli)?;
    match cli.command {
        Commands::Enter { registration } => handle_enter(&mut ctx, &registration),
        Commands::Exit { registration } => handle_exit(&mut ctx, &registration),
        Commands::Spaces => handle_spaces(&ctx),
        Commands::Query { ticket } => handle_query(&ctx, &ticket),
        Commands::Config { .. } => unreachable!("handled above"),
    }
}

fn data_dir(cli: &Cli) -> PathBuf {
    cli.data_dir.clone().unwrap_or_else(|| {
        ProjectDirs::from("com", "carpark", "carpark")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli);
    let config = CarParkConfig::load(&data_dir)?;

    let mut store = CsvStore::new(data_dir.join(&config.data_file));
    if store.ensure_exists()? {
        print_messages(&[CmdMessage::info(
            "A new data file has been created to store the parking records.",
        )]);
    }

    let ledger = ParkingLedger::new(store, config.capacity, config.hourly_rate)?;
    Ok(AppContext {
        api: CarParkApi::new(ledger),
    })
}

fn handle_enter(ctx: &mut AppContext, registration: &str) -> Result<()> {
    let result = ctx.api.enter(registration)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_exit(ctx: &mut AppContext, registration: &str) -> Result<()> {
    let result = ctx.api.exit(registration)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_spaces(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.availability()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_query(ctx: &AppContext, ticket: &str) -> Result<()> {
    let result = ctx.api.query_by_ticket(ticket)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &std::path::Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = CarParkConfig::load(data_dir)?;

    match (key, value) {
        (None, _) => {
            println!("capacity = {}", config.capacity);
            println!("hourly-rate = {:.2}", config.hourly_rate);
            println!("data-file = {}", config.data_file);
        }
        (Some("capacity"), None) => println!("capacity = {}", config.capacity),
        (Some("capacity"), Some(v)) => {
            let capacity: u32 = v
                .parse()
                .map_err(|_| CarParkError::Api(format!("Invalid capacity: {}", v)))?;
            config.set_capacity(capacity);
            config.save(data_dir)?;
            println!("capacity = {}", config.capacity);
        }
        (Some("hourly-rate"), None) => println!("hourly-rate = {:.2}", config.hourly_rate),
        (Some("hourly-rate"), Some(v)) => {
            let rate: f64 = v
                .parse()
                .map_err(|_| CarParkError::Api(format!("Invalid hourly rate: {}", v)))?;
            config.hourly_rate = rate;
            config.save(data_dir)?;
            println!("hourly-rate = {:.2}", config.hourly_rate);
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.normal()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
