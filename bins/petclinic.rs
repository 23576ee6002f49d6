use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use configs::AppConfig;
use models::Id;
use service::bootstrap::{self, SeedData};
use service::services::{search_owners, CrudService, VisitService};
use service::Clinic;

#[derive(Parser, Debug)]
#[clap(name = "petclinic", version = env!("CARGO_PKG_VERSION"), about = "Veterinary clinic records")]
struct Cli {
    /// TOML config file (defaults to $CONFIG_PATH, then config.toml)
    #[clap(long)]
    config: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find owners by last name fragment; lists everybody without one
    Owners {
        #[clap(long)]
        last_name: Option<String>,
    },
    /// Show one owner with pets and their visits
    Owner { id: Id },
    /// List vets with their specialties
    Vets,
    /// List pet types
    PetTypes,
    /// List visits of a pet
    Visits {
        #[clap(long)]
        pet_id: Id,
    },
}

fn seed_data(cfg: &AppConfig) -> anyhow::Result<Option<SeedData>> {
    if let Some(path) = &cfg.bootstrap.seed_file {
        return Ok(Some(SeedData::from_file(path)?));
    }
    if cfg.bootstrap.load_sample_data {
        return Ok(Some(SeedData::sample()));
    }
    Ok(None)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct PetDetails {
    #[serde(flatten)]
    pet: models::Pet,
    visits: Vec<models::Visit>,
}

#[derive(Serialize)]
struct OwnerDetails {
    owner: models::Owner,
    pets: Vec<PetDetails>,
}

fn run_command(clinic: &Clinic, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Owners { last_name } => {
            let result = search_owners(&clinic.owners, last_name.as_deref());
            info!(event = "owner_search", matches = result.len(), "owner search finished");
            print_json(&result)
        }
        Command::Owner { id } => {
            let Some(owner) = clinic.owners.find_by_id(id) else {
                warn!(owner_id = id, "owner not found");
                return Err(service::errors::ServiceError::not_found("owner").into());
            };
            let pets = clinic
                .owners
                .pets()
                .find_all_by_owner_id(id)
                .into_iter()
                .map(|pet| {
                    let visits = pet.id.map(|pid| clinic.visits.find_all_by_pet_id(pid)).unwrap_or_default();
                    PetDetails { pet, visits }
                })
                .collect();
            print_json(&OwnerDetails { owner, pets })
        }
        Command::Vets => {
            let mut vets = clinic.vets.find_all();
            vets.sort_by_key(|v| v.id);
            print_json(&vets)
        }
        Command::PetTypes => {
            let mut types = clinic.owners.pet_types().find_all();
            types.sort_by_key(|t| t.id);
            print_json(&types)
        }
        Command::Visits { pet_id } => print_json(&clinic.visits.find_all_by_pet_id(pet_id)),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate(cli.config.as_deref())?;
    common::utils::logging::init_logging(&cfg.logging.format);

    let mut clinic = Clinic::new(&cfg.storage);
    if let Some(seed) = seed_data(&cfg)? {
        let summary = bootstrap::load(&mut clinic, seed);
        info!(
            event = "bootstrap",
            owners = summary.owners,
            vets = summary.vets,
            visits = summary.visits,
            "clinic data loaded"
        );
    }

    run_command(&clinic, cli.command)
}

fn main() -> std::process::ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "petclinic",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    match run(cli) {
        Ok(()) => {
            info!(service = "petclinic", event = "stop", %service_id, pid, version, "done");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "petclinic", event = "run_failed", %service_id, error = %e, "petclinic failed");
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
