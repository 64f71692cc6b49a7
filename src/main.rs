use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Value, json};
use std::path::Path;
use toolbelt::arrays::contains_duplicates;
use toolbelt::batch::{BatchUpdater, Reconciliation};
use toolbelt::bytes::format_bytes_with_precision;
use toolbelt::cli::{CaseStyle, Cli, Commands, OutputFormat};
use toolbelt::config::{DEFAULT_LOG_FILTER, resolve_key_field, resolve_log_filter, resolve_separator};
use toolbelt::fqcn::{
    extract_domain_and_entity, extract_namespace, namespace_to_filepath_with, path_to_namespace,
    short_class_name,
};
use toolbelt::strings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&resolve_log_filter(&cli));

    let output = run(&cli)?;
    write_output(&output, cli.format)
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct CommandOutput {
    json: Value,
    text: String,
}

impl CommandOutput {
    fn new(json: Value, text: impl Into<String>) -> Self {
        Self {
            json,
            text: text.into(),
        }
    }
}

fn run(cli: &Cli) -> Result<CommandOutput> {
    let output = match &cli.command {
        Commands::Bytes { bytes, precision } => {
            let formatted = format_bytes_with_precision(*bytes, *precision);
            CommandOutput::new(json!({ "bytes": bytes, "formatted": formatted }), formatted)
        }
        Commands::Case { style, value } => {
            let converted = convert_case(*style, value);
            CommandOutput::new(json!({ "input": value, "output": converted }), converted)
        }
        Commands::Token { length } => {
            let token = strings::generate_url_friendly_string(*length);
            CommandOutput::new(json!({ "token": token }), token)
        }
        Commands::Duplicates { values } => {
            let found = contains_duplicates(values);
            CommandOutput::new(
                json!({ "values": values, "contains_duplicates": found }),
                found.to_string(),
            )
        }
        Commands::Domain { fqcn } => {
            let parsed = extract_domain_and_entity(fqcn)?;
            let text = format!("domain: {}\nentity: {}", parsed.domain, parsed.entity);
            CommandOutput::new(serde_json::to_value(&parsed)?, text)
        }
        Commands::ShortName { fqcn, lowercase } => {
            let name = short_class_name(fqcn, *lowercase);
            CommandOutput::new(json!({ "fqcn": fqcn, "short_name": name }), name)
        }
        Commands::Namespace { fqcn } => {
            let namespace = extract_namespace(fqcn);
            CommandOutput::new(json!({ "fqcn": fqcn, "namespace": namespace }), namespace)
        }
        Commands::NsToPath {
            namespace,
            base_namespace,
            base_dir,
        } => {
            let separator = resolve_separator(cli)?;
            let path = namespace_to_filepath_with(namespace, base_namespace, base_dir, separator);
            CommandOutput::new(json!({ "namespace": namespace, "path": path }), path)
        }
        Commands::PathToNs {
            path,
            base_namespace,
            base_dir,
        } => {
            let namespace = path_to_namespace(path, base_namespace, base_dir);
            CommandOutput::new(json!({ "path": path, "namespace": namespace }), namespace)
        }
        Commands::Reconcile {
            entities,
            inputs,
            ..
        } => {
            let key_field = resolve_key_field(cli);
            let entities = load_documents(entities)?;
            let inputs = load_documents(inputs)?;
            let reconciliation = reconcile_documents(&entities, &inputs, &key_field)?;
            let text = reconciliation_text(&reconciliation);
            CommandOutput::new(serde_json::to_value(&reconciliation)?, text)
        }
    };

    Ok(output)
}

fn convert_case(style: CaseStyle, value: &str) -> String {
    match style {
        CaseStyle::Kebab => strings::to_kebab_case(value),
        CaseStyle::Snake => strings::to_snake_case(value),
        CaseStyle::Lower => strings::to_lowercase(value),
        CaseStyle::Sanitize => strings::sanitize_lowercase(value),
        CaseStyle::FirstLower => strings::first_to_lowercase(value),
    }
}

fn load_documents(path: &Path) -> Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        _ => anyhow::bail!("Expected a JSON array in {}", path.display()),
    }
}

fn document_key(document: &Value, field: &str) -> Result<Option<String>> {
    match document.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => anyhow::bail!("`{field}` must be a string or a number, got {other}"),
    }
}

fn reconcile_documents(
    entities: &[Value],
    inputs: &[Value],
    key_field: &str,
) -> Result<Reconciliation> {
    let updater = BatchUpdater::try_new(
        entities.iter().enumerate(),
        |(idx, document)| -> Result<String> {
            document_key(document, key_field)
                .with_context(|| format!("Invalid key on entity #{idx}"))?
                .with_context(|| format!("Entity #{idx} has no `{key_field}`"))
        },
        inputs.iter().enumerate(),
        |(idx, document)| -> Result<Option<String>> {
            document_key(document, key_field).with_context(|| format!("Invalid key on input #{idx}"))
        },
    )?;

    Ok(updater.reconciliation())
}

fn reconciliation_text(reconciliation: &Reconciliation) -> String {
    let mut out = String::new();
    for (label, keys) in [
        ("create", &reconciliation.to_create),
        ("update", &reconciliation.to_update),
        ("remove", &reconciliation.to_remove),
    ] {
        for key in keys {
            out.push_str(&format!("{label} {key}\n"));
        }
    }
    out
}

fn write_output(output: &CommandOutput, format: OutputFormat) -> Result<()> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&output.json)?,
        OutputFormat::Text => output.text.clone(),
    };

    print!("{content}");
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}
