//! Command-line access to the campus back-office API.
//!
//! Every subcommand maps onto one `AdminApi` call over a `reqwest`
//! transport and prints the response as pretty JSON on stdout. Diagnostics
//! go to stderr through `tracing` and stay silent unless `RUST_LOG` is set.

mod error;
mod fields;

use std::path::{Path, PathBuf};

use campus_api::AdminApi;
use campus_api::http::ReqwestTransport;
use campus_api::types::{ClubPayload, ClusterPayload, CredentialsPayload, DepartmentPayload, StudentPayload};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

type Api = AdminApi<ReqwestTransport>;

#[derive(Parser, Debug)]
#[command(name = "campus-cli", about = "Campus back-office API CLI")]
struct Cli {
    #[arg(long, env = "CAMPUS_API_URL", default_value = "http://127.0.0.1:8001/api")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Status,
    Clusters(ClustersCommand),
    Staff(StaffCommand),
    Departments(DepartmentsCommand),
    Students(StudentsCommand),
    Clubs(ClubsCommand),
}

// =============================================================================
// SUBCOMMANDS
// =============================================================================

/// JSON-bodied CRUD shared by clusters and clubs.
#[derive(Subcommand, Debug)]
enum ToggleableSubcommand {
    List,
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    Toggle {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct ClustersCommand {
    #[command(subcommand)]
    command: ToggleableSubcommand,
}

#[derive(Args, Debug)]
struct ClubsCommand {
    #[command(subcommand)]
    command: ToggleableSubcommand,
}

#[derive(Args, Debug)]
struct DepartmentsCommand {
    #[command(subcommand)]
    command: DepartmentSubcommand,
}

#[derive(Subcommand, Debug)]
enum DepartmentSubcommand {
    List,
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct StaffCommand {
    #[command(subcommand)]
    command: StaffSubcommand,
}

#[derive(Args, Debug)]
struct StaffForm {
    /// Form field as KEY=VALUE; repeatable.
    #[arg(long = "field", value_name = "KEY=VALUE")]
    fields: Vec<String>,

    /// Photo file attached to the form.
    #[arg(long)]
    photo: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum StaffSubcommand {
    List,
    Create {
        #[command(flatten)]
        form: StaffForm,
    },
    Update {
        id: i64,
        #[command(flatten)]
        form: StaffForm,
    },
    Delete {
        id: i64,
    },
    Toggle {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct StudentsCommand {
    #[command(subcommand)]
    command: StudentSubcommand,
}

#[derive(Subcommand, Debug)]
enum StudentSubcommand {
    List,
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    SendCredentials {
        id: i64,
    },
    ToggleClubChange {
        id: i64,
    },
    ResetPassword {
        id: i64,
    },
    GeneratePassword {
        id: i64,
    },
    SetCredentials {
        id: i64,
        #[arg(long)]
        username: String,
        #[arg(long)]
        temp_password: String,
    },
    /// Save the bulk-upload spreadsheet template.
    Template {
        #[arg(long)]
        output: PathBuf,
    },
    /// Upload a spreadsheet of students.
    BulkUpload {
        path: PathBuf,
    },
}

// =============================================================================
// ENTRY
// =============================================================================

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let cli = Cli::parse();
    let api = AdminApi::new(ReqwestTransport::new(cli.api_url)?);
    tracing::debug!(base_url = api.transport().base_url(), "campus-cli start");

    match cli.command {
        Command::Status => print_json(&api.status().await?),
        Command::Clusters(clusters) => run_clusters(&api, clusters.command).await,
        Command::Staff(staff) => run_staff(&api, staff.command).await,
        Command::Departments(departments) => run_departments(&api, departments.command).await,
        Command::Students(students) => run_students(&api, students.command).await,
        Command::Clubs(clubs) => run_clubs(&api, clubs.command).await,
    }
}

async fn run_clusters(api: &Api, command: ToggleableSubcommand) -> Result<(), CliError> {
    match command {
        ToggleableSubcommand::List => print_json(&api.list_clusters().await?),
        ToggleableSubcommand::Create { data } => {
            let payload: ClusterPayload = parse_data(&data)?;
            print_json(&api.create_cluster(&payload).await?)
        }
        ToggleableSubcommand::Update { id, data } => {
            let payload: ClusterPayload = parse_data(&data)?;
            print_json(&api.update_cluster(id, &payload).await?)
        }
        ToggleableSubcommand::Delete { id } => print_json(&api.delete_cluster(id).await?),
        ToggleableSubcommand::Toggle { id } => print_json(&api.toggle_cluster(id).await?),
    }
}

async fn run_clubs(api: &Api, command: ToggleableSubcommand) -> Result<(), CliError> {
    match command {
        ToggleableSubcommand::List => print_json(&api.list_clubs().await?),
        ToggleableSubcommand::Create { data } => {
            let payload: ClubPayload = parse_data(&data)?;
            print_json(&api.create_club(&payload).await?)
        }
        ToggleableSubcommand::Update { id, data } => {
            let payload: ClubPayload = parse_data(&data)?;
            print_json(&api.update_club(id, &payload).await?)
        }
        ToggleableSubcommand::Delete { id } => print_json(&api.delete_club(id).await?),
        ToggleableSubcommand::Toggle { id } => print_json(&api.toggle_club(id).await?),
    }
}

async fn run_departments(api: &Api, command: DepartmentSubcommand) -> Result<(), CliError> {
    match command {
        DepartmentSubcommand::List => print_json(&api.list_departments().await?),
        DepartmentSubcommand::Create { data } => {
            let payload: DepartmentPayload = parse_data(&data)?;
            print_json(&api.create_department(&payload).await?)
        }
        DepartmentSubcommand::Update { id, data } => {
            let payload: DepartmentPayload = parse_data(&data)?;
            print_json(&api.update_department(id, &payload).await?)
        }
        DepartmentSubcommand::Delete { id } => print_json(&api.delete_department(id).await?),
    }
}

async fn run_staff(api: &Api, command: StaffSubcommand) -> Result<(), CliError> {
    match command {
        StaffSubcommand::List => print_json(&api.list_staff().await?),
        StaffSubcommand::Create { form } => {
            let payload = staff_form(&form)?;
            print_json(&api.create_staff(&payload).await?)
        }
        StaffSubcommand::Update { id, form } => {
            let payload = staff_form(&form)?;
            print_json(&api.update_staff(id, &payload).await?)
        }
        StaffSubcommand::Delete { id } => print_json(&api.delete_staff(id).await?),
        StaffSubcommand::Toggle { id } => print_json(&api.toggle_staff(id).await?),
    }
}

async fn run_students(api: &Api, command: StudentSubcommand) -> Result<(), CliError> {
    match command {
        StudentSubcommand::List => print_json(&api.list_students().await?),
        StudentSubcommand::Create { data } => {
            let payload: StudentPayload = parse_data(&data)?;
            print_json(&api.create_student(&payload).await?)
        }
        StudentSubcommand::Update { id, data } => {
            let payload: StudentPayload = parse_data(&data)?;
            print_json(&api.update_student(id, &payload).await?)
        }
        StudentSubcommand::Delete { id } => print_json(&api.delete_student(id).await?),
        StudentSubcommand::SendCredentials { id } => print_json(&api.send_credentials(id).await?),
        StudentSubcommand::ToggleClubChange { id } => print_json(&api.toggle_club_change(id).await?),
        StudentSubcommand::ResetPassword { id } => print_json(&api.reset_password(id).await?),
        StudentSubcommand::GeneratePassword { id } => print_json(&api.generate_password(id).await?),
        StudentSubcommand::SetCredentials { id, username, temp_password } => {
            let payload = CredentialsPayload { username, temp_password };
            print_json(&api.update_credentials(id, &payload).await?)
        }
        StudentSubcommand::Template { output } => {
            let bytes = api.download_template().await?;
            write_file(&output, &bytes)?;
            print_json(&json!({ "path": output.display().to_string(), "bytes": bytes.len() }))
        }
        StudentSubcommand::BulkUpload { path } => {
            let upload = fields::read_upload(&path)?;
            print_json(&api.bulk_upload_students(upload).await?)
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn parse_data<T: DeserializeOwned>(data: &str) -> Result<T, CliError> {
    Ok(serde_json::from_str(data)?)
}

fn staff_form(form: &StaffForm) -> Result<campus_api::types::StaffPayload, CliError> {
    let pairs = form.fields.iter().map(|raw| fields::parse_field(raw)).collect::<Result<Vec<_>, _>>()?;
    let photo = form.photo.as_deref().map(fields::read_upload).transpose()?;
    fields::staff_payload(&pairs, photo)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    std::fs::write(path, bytes).map_err(|source| CliError::Io { path: path.to_owned(), source })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
