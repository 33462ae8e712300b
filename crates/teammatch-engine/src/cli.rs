use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use teammatch_types::AlignmentMethod;

#[derive(Parser)]
#[command(name = "teammatch")]
#[command(about = "Match project roles to candidates by semantic skill similarity.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum MethodArg {
    Dot,
    Cosine,
}

impl From<MethodArg> for AlignmentMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Dot => Self::Dot,
            MethodArg::Cosine => Self::Cosine,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run a match over role and member JSON files, print the outcome JSON.
    Match {
        /// Roles file: name-keyed map or list of role specs.
        #[arg(long)]
        roles: PathBuf,

        /// Members file: list of member records.
        #[arg(long)]
        members: PathBuf,

        /// Keep only the strongest-K entries per member category.
        #[arg(long)]
        top_k: Option<usize>,

        /// Skills category weight.
        #[arg(long, default_value_t = 2.0)]
        skills_weight: f64,

        /// Languages category weight.
        #[arg(long, default_value_t = 2.0)]
        languages_weight: f64,

        /// Keywords category weight.
        #[arg(long, default_value_t = 1.0)]
        keywords_weight: f64,

        /// Disable the domain alignment boost stage.
        #[arg(long)]
        no_domain_boost: bool,

        /// Domain boost strength in [0, 1].
        #[arg(long, default_value_t = 0.35)]
        strength: f64,

        /// Softmax temperature for the domain distributions.
        #[arg(long, default_value_t = 0.7)]
        anchor_temperature: f64,

        /// Alignment method between domain distributions.
        #[arg(long, value_enum, default_value = "dot")]
        method: MethodArg,

        /// Anchor catalogue override: JSON list of {name, seed}.
        #[arg(long)]
        anchors: Option<PathBuf>,

        /// Softmax temperature for the display scores in reports.
        #[arg(long, default_value_t = 0.6)]
        softmax_temperature: f64,

        /// Embedding gateway settings YAML (env vars override).
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Use the deterministic local hash encoder instead of the gateway.
        #[arg(long)]
        offline: bool,

        /// Pretty-print the outcome JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the built-in domain anchor catalogue.
    Anchors,
    /// Print the JSON Schemas for the input files and the outcome.
    Schema,
}
