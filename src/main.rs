//! auvet - command line front end for the AuVet client core.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use auvet::adapters::{FileSessionStore, HttpGateways};
use auvet::application::{
    LoginCommand, LoginHandler, LoginOutcome, LogoutHandler, PendingClinicChoice, SessionHandle,
};
use auvet::config::{AppConfig, ConfigError};
use auvet::domain::clinic::ClinicId;
use auvet::domain::session::{LoginError, ResolvedSession};
use auvet::domain::tax_id::{self, validate_cnpj, validate_cpf, Validation};
use auvet::ports::{GatewayError, SessionStore, SessionStoreError};

#[derive(Debug, Parser)]
#[command(name = "auvet")]
#[command(about = "AuVet client: CPF/CNPJ checks and clinic login")]
#[command(
    after_help = "Environment:\n  AUVET_PASSWORD   Login password (prompted on stdin when unset)\n  RUST_LOG         Log filter override"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a CPF
    CheckCpf { value: String },
    /// Validate a CNPJ
    CheckCnpj { value: String },
    /// Print a CPF or CNPJ with separators
    Format { value: String },
    /// Log in and select the working clinic
    Login {
        cpf: String,
        #[arg(long, env = "AUVET_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// End the current session
    Logout,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("'{0}' is not one of the listed clinics")]
    InvalidChoice(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Store(#[from] SessionStoreError),

    #[error("Could not read input: {0}")]
    Input(#[from] io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let result = match cli.command {
        Command::CheckCpf { value } => Ok(report(validate_cpf(&value))),
        Command::CheckCnpj { value } => Ok(report(validate_cnpj(&value))),
        Command::Format { value } => {
            println!("{}", tax_id::format(&value));
            Ok(true)
        }
        Command::Login { cpf, password } => login(&config, &cpf, password).await.map(|_| true),
        Command::Logout => logout(&config).await.map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

/// Prints the outcome of a validation; returns whether it passed.
fn report(validation: Validation) -> bool {
    match validation.into_result() {
        Ok(()) => {
            println!("valid");
            true
        }
        Err(err) => {
            println!("invalid: {err} [{}]", err.code());
            false
        }
    }
}

fn session_store(config: &AppConfig) -> Arc<dyn SessionStore> {
    Arc::new(FileSessionStore::new(&config.storage.clinic_file))
}

async fn login(config: &AppConfig, cpf: &str, password: Option<String>) -> Result<(), CliError> {
    let store = session_store(config);
    let gateways = HttpGateways::from_config(&config.api)?;
    let handler = LoginHandler::new(
        gateways.auth,
        gateways.memberships.clone(),
        gateways.memberships,
        store,
        SessionHandle::new(),
    );

    let secret = match password {
        Some(secret) => secret,
        None => prompt("Password: ")?,
    };

    let resolved = match handler.submit(LoginCommand::new(cpf, secret)).await? {
        LoginOutcome::Ready(resolved) => resolved,
        LoginOutcome::ChooseClinic(pending) => {
            let clinic_id = pick_clinic(&pending)?;
            handler.choose_clinic(pending, &clinic_id).await?
        }
    };

    print_session(&resolved);
    Ok(())
}

async fn logout(config: &AppConfig) -> Result<(), CliError> {
    LogoutHandler::new(session_store(config), SessionHandle::new())
        .handle()
        .await?;
    println!("logged out");
    Ok(())
}

fn pick_clinic(pending: &PendingClinicChoice) -> Result<ClinicId, CliError> {
    println!("Select a clinic:");
    for (i, clinic) in pending.clinics().iter().enumerate() {
        let name = if clinic.clinic_name.is_empty() {
            "(unnamed)"
        } else {
            clinic.clinic_name.as_str()
        };
        println!(
            "  {}) {} - {}",
            i + 1,
            name,
            tax_id::format(clinic.clinic_id.as_str())
        );
    }

    let answer = prompt("Clinic number: ")?;
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| pending.clinics().get(i))
        .map(|clinic| clinic.clinic_id.clone())
        .ok_or(CliError::InvalidChoice(answer))
}

fn prompt(label: &str) -> Result<String, CliError> {
    eprint!("{label}");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_session(resolved: &ResolvedSession) {
    println!("role: {}", resolved.role());
    println!("clinic: {}", tax_id::format(resolved.clinic_id().as_str()));
    println!("dashboard: {}", resolved.role().dashboard_path());
    println!("established: {}", resolved.established_at());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_use_kebab_case_names() {
        let cli = Cli::try_parse_from(["auvet", "check-cpf", "111.444.777-35"]).unwrap();
        assert!(matches!(cli.command, Command::CheckCpf { value } if value == "111.444.777-35"));

        let cli = Cli::try_parse_from(["auvet", "check-cnpj", "11222333000181"]).unwrap();
        assert!(matches!(cli.command, Command::CheckCnpj { .. }));

        let cli = Cli::try_parse_from(["auvet", "logout"]).unwrap();
        assert!(matches!(cli.command, Command::Logout));
    }

    #[test]
    fn login_takes_password_flag() {
        let cli =
            Cli::try_parse_from(["auvet", "login", "52998224725", "--password", "pw"]).unwrap();
        match cli.command {
            Command::Login { cpf, password } => {
                assert_eq!(cpf, "52998224725");
                assert_eq!(password.as_deref(), Some("pw"));
            }
            _ => panic!("expected login"),
        }
    }

    #[test]
    fn missing_value_is_a_usage_error() {
        let err = Cli::try_parse_from(["auvet", "format"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
