use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;
use zapharvest_config::ConfigError;
use zapharvest_core::CoreError;
use zapharvest_fetch::FetchError;
use zapharvest_store::error::{StoreError, StoreErrorKind};

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            });
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(fetch_err) = cause.downcast_ref::<FetchError>() {
            return ExitCode::from(fetch_exit_code(fetch_err));
        }
        if cause.downcast_ref::<CoreError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::NotFound => EXIT_NOT_FOUND,
        StoreErrorKind::InvalidDataPath
        | StoreErrorKind::DuplicateNumber
        | StoreErrorKind::Core => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::InvalidRow
        | StoreErrorKind::Migration
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidRecentLimit(_)
        | ConfigError::InvalidFetchTimeout(_)
        | ConfigError::EmptyUserAgent
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn fetch_exit_code(err: &FetchError) -> u8 {
    match err {
        FetchError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => EXIT_NOT_FOUND,
        FetchError::Io(_) => EXIT_FAILURE,
        FetchError::InvalidSource(_) | FetchError::Unavailable(_) => EXIT_INVALID_INPUT,
        #[cfg(feature = "http-fetch")]
        FetchError::Http(_) => EXIT_FAILURE,
        #[cfg(feature = "http-fetch")]
        FetchError::Url(_) => EXIT_INVALID_INPUT,
    }
}
