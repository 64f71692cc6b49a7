use anyhow::Result;
use std::env;
use std::path::MAIN_SEPARATOR;

use crate::cli::{Cli, Commands};

pub const SEPARATOR_ENV: &str = "TOOLBELT_PATH_SEPARATOR";
pub const KEY_FIELD_ENV: &str = "TOOLBELT_KEY_FIELD";
pub const DEFAULT_KEY_FIELD: &str = "id";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn resolve_separator(cli: &Cli) -> Result<char> {
    separator_from(cli.separator.as_deref(), env::var(SEPARATOR_ENV).ok())
}

pub fn resolve_key_field(cli: &Cli) -> String {
    let flag = match &cli.command {
        Commands::Reconcile { key, .. } => key.as_deref(),
        _ => None,
    };
    key_field_from(flag, env::var(KEY_FIELD_ENV).ok())
}

pub fn resolve_log_filter(cli: &Cli) -> String {
    if cli.verbose {
        return "debug".to_string();
    }
    env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn separator_from(flag: Option<&str>, env_value: Option<String>) -> Result<char> {
    let raw = match (flag, env_value.as_deref()) {
        (Some(flag), _) => flag,
        (None, Some(value)) if !value.is_empty() => value,
        _ => return Ok(MAIN_SEPARATOR),
    };

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(sep), None) => Ok(sep),
        _ => anyhow::bail!("Path separator must be a single character, got {raw:?}"),
    }
}

fn key_field_from(flag: Option<&str>, env_value: Option<String>) -> String {
    if let Some(flag) = flag {
        return flag.to_string();
    }
    env_value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_KEY_FIELD.to_string())
}
