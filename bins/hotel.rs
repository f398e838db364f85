use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use configs::{AppConfig, LogFormat, StoreConfig};
use dotenvy::dotenv;
use serde::Serialize;
use service::{BookingOutcome, HotelSystem};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "hotel", version, about = "Manage hotels, customers and reservations")]
struct Cli {
    /// TOML config file (overrides `CONFIG_PATH`)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Keep all three stores in this directory
    #[arg(long, global = true)]
    data_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Hotel(HotelCommand),
    #[command(subcommand)]
    Customer(CustomerCommand),
    #[command(subcommand)]
    Reservation(ReservationCommand),
}

#[derive(Debug, Subcommand)]
enum HotelCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long, allow_negative_numbers = true)]
        rooms: i64,
    },
    Delete(IdArg),
    Get(IdArg),
    List,
}

#[derive(Debug, Subcommand)]
enum CustomerCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    Delete(IdArg),
    Get(IdArg),
    List,
}

#[derive(Debug, Subcommand)]
enum ReservationCommand {
    Create {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        hotel: String,
    },
    Cancel(IdArg),
    Get(IdArg),
    List,
}

#[derive(Debug, Args)]
struct IdArg {
    id: String,
}

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut cfg = match &cli.config {
        Some(path) => configs::load_from_file(path)?,
        None => configs::load_default()?,
    };
    if let Some(dir) = &cli.data_dir {
        cfg.stores = StoreConfig::in_dir(dir);
    }
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a found record, or report the missing id as a failure.
fn print_found<T: Serialize>(kind: &str, id: &str, record: Option<T>) -> anyhow::Result<bool> {
    match record {
        Some(r) => print_json(&r).map(|_| true),
        None => {
            error!(kind, %id, "record not found");
            Ok(false)
        }
    }
}

fn report_removed(kind: &str, id: &str, removed: bool) -> bool {
    if removed {
        info!(kind, %id, "record removed");
    } else {
        error!(kind, %id, "record not found");
    }
    removed
}

fn run(command: Command, sys: &HotelSystem) -> anyhow::Result<bool> {
    match command {
        Command::Hotel(cmd) => match cmd {
            HotelCommand::Create { name, location, rooms } => {
                print_json(&sys.hotels.create(&name, &location, rooms)?)?;
                Ok(true)
            }
            HotelCommand::Delete(IdArg { id }) => Ok(report_removed("hotel", &id, sys.hotels.delete(&id)?)),
            HotelCommand::Get(IdArg { id }) => print_found("hotel", &id, sys.hotels.get(&id)),
            HotelCommand::List => print_json(&sys.hotels.list()).map(|_| true),
        },
        Command::Customer(cmd) => match cmd {
            CustomerCommand::Create { name, email } => {
                print_json(&sys.customers.create(&name, &email)?)?;
                Ok(true)
            }
            CustomerCommand::Delete(IdArg { id }) => Ok(report_removed("customer", &id, sys.customers.delete(&id)?)),
            CustomerCommand::Get(IdArg { id }) => print_found("customer", &id, sys.customers.get(&id)),
            CustomerCommand::List => print_json(&sys.customers.list()).map(|_| true),
        },
        Command::Reservation(cmd) => match cmd {
            ReservationCommand::Create { customer, hotel } => {
                match sys.reservations.try_create(&customer, &hotel)? {
                    BookingOutcome::Booked(r) => print_json(&r).map(|_| true),
                    BookingOutcome::Refused(refusal) => {
                        error!(reason = refusal.reason(), "{refusal}");
                        Ok(false)
                    }
                }
            }
            ReservationCommand::Cancel(IdArg { id }) => {
                Ok(report_removed("reservation", &id, sys.reservations.cancel(&id)?))
            }
            ReservationCommand::Get(IdArg { id }) => print_found("reservation", &id, sys.reservations.get(&id)),
            ReservationCommand::List => print_json(&sys.reservations.list()).map(|_| true),
        },
    }
}

fn main() -> ExitCode {
    // .env may set RUST_LOG, CONFIG_PATH or the *_STORE overrides
    dotenv().ok();
    let cli = Cli::parse();

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(event = "config_invalid", error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };
    init_logging(cfg.logging.format);

    let run_id = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |info| {
        error!(event = "panic", %run_id, message = %info, "unhandled panic occurred");
    }));

    let stores = &cfg.stores;
    if let Err(e) = common::env::ensure_store_dirs(&[&stores.hotels_path, &stores.customers_path, &stores.reservations_path]) {
        error!(event = "store_dirs_failed", error = %e, "cannot prepare store directories");
        return ExitCode::FAILURE;
    }

    let sys = match HotelSystem::from_config(stores) {
        Ok(sys) => sys,
        Err(e) => {
            error!(event = "init_failed", error = %e, "cannot open stores");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &sys) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(event = "command_failed", %run_id, error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}
