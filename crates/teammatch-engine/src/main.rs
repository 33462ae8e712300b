//! teammatch CLI: file-driven role-to-candidate matching.
//!
//! Reads roles and members from JSON files, runs the engine against the
//! configured embedding gateway (or the offline hash encoder), and prints
//! the outcome JSON on stdout.
//!
//! Logging: set `RUST_LOG=teammatch_engine=debug` to see engine logs on
//! stderr.

mod cli;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use teammatch_embed::{EmbedSettings, HashEncoder, HttpEmbeddingClient};
use teammatch_engine::MatchEngine;
use teammatch_types::{
    CategoryWeights, DomainAnchor, DomainBoostOptions, MatchOptions, MatchOutcome, MemberRecord,
    RolesInput, default_domain_anchors,
};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("teammatch_engine=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match cli.command {
        Command::Match {
            roles,
            members,
            top_k,
            skills_weight,
            languages_weight,
            keywords_weight,
            no_domain_boost,
            strength,
            anchor_temperature,
            method,
            anchors,
            softmax_temperature,
            settings,
            offline,
            pretty,
        } => {
            let roles: RolesInput = read_json(&roles)?;
            let members: Vec<MemberRecord> = read_json(&members)?;
            let anchors: Option<Vec<DomainAnchor>> = match anchors {
                Some(path) => Some(read_json(&path)?),
                None => None,
            };
            let options = MatchOptions {
                top_k,
                weights: CategoryWeights {
                    skills: skills_weight,
                    languages: languages_weight,
                    keywords: keywords_weight,
                },
                domain_boost: DomainBoostOptions {
                    enabled: !no_domain_boost,
                    strength,
                    anchors,
                    temperature: anchor_temperature,
                    method: method.into(),
                },
                softmax_temperature,
            };

            let outcome = run_match(roles, &members, &options, settings, offline).await?;
            print_json(&outcome, pretty)?;
            Ok(())
        }
        Command::Anchors => print_json(&default_domain_anchors(), true),
        Command::Schema => {
            let schemas = serde_json::json!({
                "roles": schemars::schema_for!(RolesInput),
                "members": schemars::schema_for!(Vec<MemberRecord>),
                "options": schemars::schema_for!(MatchOptions),
                "outcome": schemars::schema_for!(MatchOutcome),
            });
            print_json(&schemas, true)
        }
    }
}

async fn run_match(
    roles: RolesInput,
    members: &[MemberRecord],
    options: &MatchOptions,
    settings: Option<PathBuf>,
    offline: bool,
) -> anyhow::Result<MatchOutcome> {
    if offline {
        let engine = MatchEngine::new(HashEncoder::default());
        return Ok(engine.match_roles(roles, members, options).await?);
    }
    let settings = match settings {
        Some(path) => EmbedSettings::load(&path)?,
        None => EmbedSettings::from_env(),
    };
    let client = HttpEmbeddingClient::from_settings(&settings)
        .context("embedding gateway configuration")?;
    let engine = MatchEngine::new(client);
    Ok(engine.match_roles(roles, members, options).await?)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
