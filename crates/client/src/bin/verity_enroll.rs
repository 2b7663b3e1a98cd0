//! Submit one beta enrollment from the command line.
//!
//! Drives the same form controller the landing page uses: fields are set,
//! validated locally, then posted once to the enrollment endpoint.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verity_client::{FormController, HttpTransport, Phase};
use verity_core::enrollment::FieldUpdate;
use verity_core::options::{Crm, DataPain, LeadVolume};

#[derive(Debug, Parser)]
#[command(name = "verity-enroll", about = "Enroll in the Verity private beta")]
struct Args {
    /// Base URL of the enrollment server.
    #[arg(long, env = "VERITY_ENDPOINT", default_value = "http://localhost:3000")]
    endpoint: String,

    /// Work email.
    #[arg(long, default_value = "")]
    email: String,

    /// Company name.
    #[arg(long, default_value = "")]
    company: String,

    /// Current CRM (HubSpot, Salesforce, Pipedrive, Zoho, Other).
    #[arg(long, default_value = "")]
    crm: String,

    /// Primary data pain (silent_drift, stale_records, human_error, overwrites).
    #[arg(long, default_value = "")]
    data_pain: String,

    /// Monthly lead volume (<100, 100–1,000, 1,000+).
    #[arg(long, default_value = "")]
    lead_volume: String,

    /// Confirm the beta commitment.
    #[arg(long)]
    commit: bool,

    /// Print the accepted option values and exit.
    #[arg(long)]
    list_options: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verity_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if args.list_options {
        print_options();
        return ExitCode::SUCCESS;
    }

    let mut controller = FormController::new(HttpTransport::new(&args.endpoint));
    controller.set_field(FieldUpdate::Email(args.email));
    controller.set_field(FieldUpdate::Company(args.company));
    controller.set_field(FieldUpdate::Crm(args.crm));
    controller.set_field(FieldUpdate::DataPain(args.data_pain));
    controller.set_field(FieldUpdate::LeadVolume(args.lead_volume));
    controller.set_field(FieldUpdate::Commitment(args.commit));

    match controller.submit().await {
        Phase::Submitted => {
            println!("Enrolled successfully");
            ExitCode::SUCCESS
        }
        _ => {
            for (field, message) in controller.errors().iter() {
                eprintln!("{field}: {message}");
            }
            ExitCode::FAILURE
        }
    }
}

fn print_options() {
    let crms: Vec<_> = Crm::ALL.iter().map(Crm::as_str).collect();
    println!("crm:         {}", crms.join(", "));

    println!("data-pain:");
    for pain in DataPain::ALL {
        println!("  {:<14} {} ({})", pain.as_str(), pain.label(), pain.description());
    }

    let volumes: Vec<_> = LeadVolume::ALL.iter().map(LeadVolume::as_str).collect();
    println!("lead-volume: {}", volumes.join(", "));
}
