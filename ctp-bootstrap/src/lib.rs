//! Bootstrap command for the extension's custom types.
//!
//! Resolves connection settings from a config file and the command line,
//! loads the payment and interaction drafts (bundled or from disk), checks
//! that they define every field the payment handlers write, and reconciles
//! both against the project.

use anyhow::{bail, Context, Result};
use clap::Parser;
use ctp_client::{ClientConfig, CtpClient};
use ctp_interaction::{builtin_handlers, missing_custom_fields, missing_interaction_fields};
use ctp_sync::{ensure_all, BootstrapReport, ReconcileContext, TypeReconciler};
use ctp_types::{interface_interaction_type_draft, payment_custom_type_draft, TypeDraft};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ctp-bootstrap")]
#[command(about = "Create or update the Adyen extension's custom types")]
pub struct Args {
    /// JSON file with connection settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project key (overrides the config file)
    #[arg(long, env = "CTP_PROJECT_KEY")]
    pub project_key: Option<String>,

    /// Platform API base URL (overrides the config file)
    #[arg(long, env = "CTP_API_URL")]
    pub api_url: Option<String>,

    /// Bearer access token (overrides the config file)
    #[arg(long, env = "CTP_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Replacement payment type draft
    #[arg(long)]
    pub payment_type: Option<PathBuf>,

    /// Replacement interface interaction type draft
    #[arg(long)]
    pub interaction_type: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Merges the config file (if any) with command-line overrides and
/// validates the result.
pub fn load_client_config(args: &Args) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            serde_json::from_str::<ClientConfig>(&raw)
                .with_context(|| format!("invalid config file {}", path.display()))?
        }
        None => ClientConfig::default(),
    };

    if let Some(project_key) = &args.project_key {
        config.project_key = project_key.clone();
    }
    if let Some(api_url) = &args.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(access_token) = &args.access_token {
        config.access_token = access_token.clone();
    }

    config.validate().context("incomplete connection settings")?;
    debug!(?config, "resolved client configuration");
    Ok(config)
}

fn load_draft(
    path: Option<&Path>,
    bundled: fn() -> ctp_types::Result<TypeDraft>,
) -> Result<TypeDraft> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read draft {}", path.display()))?;
            TypeDraft::from_json(&raw).with_context(|| format!("invalid draft {}", path.display()))
        }
        None => bundled().context("bundled draft is invalid"),
    }
}

/// Loads the payment and interaction drafts, in that order, and checks that
/// they define every field the payment handlers use.
pub fn load_drafts(args: &Args) -> Result<Vec<TypeDraft>> {
    let payment = load_draft(args.payment_type.as_deref(), payment_custom_type_draft)?;
    let interaction = load_draft(
        args.interaction_type.as_deref(),
        interface_interaction_type_draft,
    )?;

    let missing = missing_custom_fields(&builtin_handlers(), &payment);
    if !missing.is_empty() {
        bail!(
            "payment type {} is missing handler fields: {}",
            payment.key,
            missing.join(", ")
        );
    }
    let missing = missing_interaction_fields(&interaction);
    if !missing.is_empty() {
        bail!(
            "interaction type {} is missing fields: {}",
            interaction.key,
            missing.join(", ")
        );
    }
    if payment.key == interaction.key {
        bail!("payment and interaction types share the key {}", payment.key);
    }

    Ok(vec![payment, interaction])
}

/// Resolves settings, loads drafts and reconciles them.
pub async fn run(args: &Args) -> Result<BootstrapReport> {
    let config = load_client_config(args)?;
    let drafts = load_drafts(args)?;

    let ctx = ReconcileContext::new(config.project_key.clone());
    let client = CtpClient::new(config).context("failed to create platform client")?;
    let reconciler = TypeReconciler::new(Arc::new(client));

    info!(
        commercetools_project_key = %ctx.project_key(),
        types = drafts.len(),
        "reconciling custom types"
    );
    Ok(ensure_all(&reconciler, &ctx, &drafts).await)
}
