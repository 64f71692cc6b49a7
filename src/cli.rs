use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "toolbelt")]
#[command(about = "Reconcile keyed batches and convert class names, namespaces, cases and byte sizes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Directory separator used by `ns-to-path`.
    #[arg(long, value_name = "CHAR", global = true)]
    pub separator: Option<String>,

    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    Bytes {
        #[arg(allow_negative_numbers = true)]
        bytes: i64,

        #[arg(long, value_name = "N", default_value_t = 2)]
        precision: usize,
    },
    Case {
        #[arg(value_enum)]
        style: CaseStyle,

        value: String,
    },
    Token {
        length: usize,
    },
    Duplicates {
        values: Vec<String>,
    },
    Domain {
        fqcn: String,
    },
    ShortName {
        fqcn: String,

        #[arg(long)]
        lowercase: bool,
    },
    Namespace {
        fqcn: String,
    },
    NsToPath {
        namespace: String,

        #[arg(long = "base-ns", value_name = "NS", default_value = "")]
        base_namespace: String,

        #[arg(long, value_name = "DIR", default_value = "")]
        base_dir: String,
    },
    PathToNs {
        path: String,

        #[arg(long = "base-ns", value_name = "NS", default_value = "")]
        base_namespace: String,

        #[arg(long, value_name = "DIR", default_value = "")]
        base_dir: String,
    },
    Reconcile {
        #[arg(value_name = "ENTITIES")]
        entities: PathBuf,

        #[arg(value_name = "INPUTS")]
        inputs: PathBuf,

        #[arg(long, value_name = "FIELD")]
        key: Option<String>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum CaseStyle {
    Kebab,
    Snake,
    Lower,
    Sanitize,
    FirstLower,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
