//! showtime - ticket-booking catalog CLI.

/// Application configuration (TOML).
mod config;
/// Home page feed.
mod home;
/// Not-found notices.
mod notice;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{AppConfig, BASE_URL_ENV, resolve_config_path};
use crate::home::load_home;
use crate::notice::NotFoundNotice;
use showtime_api::catalog::{CatalogClient, DEFAULT_BASE_URL, LocalCatalogApi, ResourceKind};

/// User-Agent sent with every catalog request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config/data directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Backend origin (overrides `SHOWTIME_API_URL` and config).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List a whole collection (movies, events, plays, sports, activities, offers, giftcards).
    List(ListArgs),
    /// Show a single item by ID.
    Show(ShowArgs),
    /// Fetch the home page feed (movies and events).
    Home,
    /// Inspect or edit the config file.
    Config(ConfigCommand),
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
struct ListArgs {
    /// Resource kind (e.g. "movies").
    kind: ResourceKind,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
struct ShowArgs {
    /// Resource kind (e.g. "events").
    kind: ResourceKind,
    /// Item ID.
    id: String,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Print the config file path and the effective base URL.
    Show,
    /// Store the backend origin in the config file.
    SetBaseUrl(SetBaseUrlArgs),
}

/// Arguments for the `config set-base-url` subcommand.
#[derive(clap::Args)]
struct SetBaseUrlArgs {
    /// Backend origin (e.g. "http://localhost:8000/").
    url: String,
}

/// Builds the catalog client from flag, environment and config.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the base URL is invalid,
/// or the client fails to build.
fn build_client(base_url: Option<&str>, dir: Option<&PathBuf>) -> Result<CatalogClient> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    let env_url = std::env::var(BASE_URL_ENV).ok();

    let mut builder = CatalogClient::builder().user_agent(USER_AGENT);
    if let Some(url) = config.resolve_base_url(base_url, env_url.as_deref())? {
        builder = builder.base_url(url);
    }
    builder.build().context("failed to build API client")
}

/// Pretty-prints a JSON value.
fn to_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to format JSON")
}

/// Runs the `list` subcommand.
///
/// # Errors
///
/// Returns the client's `FetchError` or decode error unchanged.
#[instrument(skip_all)]
async fn run_list(client: &(impl LocalCatalogApi + Sync), args: &ListArgs) -> Result<()> {
    let value = client.fetch_collection(args.kind).await?;

    tracing::info!("{}", to_pretty(&value)?);
    if let Some(items) = value.as_array() {
        tracing::info!("Total: {} {}", items.len(), args.kind);
    }

    Ok(())
}

/// Runs the `show` subcommand.
///
/// Renders the not-found notice when the backend has no such item.
///
/// # Errors
///
/// Returns an error if the fetch fails or the item does not exist.
#[instrument(skip_all)]
async fn run_show(client: &(impl LocalCatalogApi + Sync), args: &ShowArgs) -> Result<()> {
    let Some(item) = client.fetch_item(args.kind, &args.id).await? else {
        NotFoundNotice::for_kind(args.kind).log();
        bail!("{} not found: {}", args.kind.noun(), args.id);
    };

    tracing::info!("{}", to_pretty(&item)?);
    Ok(())
}

/// Runs the `home` subcommand.
///
/// # Errors
///
/// Returns an error if neither movies nor events could be loaded.
#[instrument(skip_all)]
async fn run_home(client: &(impl LocalCatalogApi + Sync)) -> Result<()> {
    let feed = load_home(client).await;
    feed.report()
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or holds an invalid URL.
fn run_config_show(base_url: Option<&str>, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    let env_url = std::env::var(BASE_URL_ENV).ok();

    let effective = config
        .resolve_base_url(base_url, env_url.as_deref())?
        .map_or_else(|| String::from(DEFAULT_BASE_URL), String::from);

    tracing::info!("Config file: {}", config_path.display());
    tracing::info!("Base URL: {effective}");
    Ok(())
}

/// Runs the `config set-base-url` subcommand.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the config cannot be written.
fn run_config_set_base_url(args: &SetBaseUrlArgs, dir: Option<&PathBuf>) -> Result<()> {
    let url = Url::parse(args.url.trim())
        .with_context(|| format!("invalid base URL: {}", args.url))?;

    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).context("failed to load config")?;
    config.api.base_url = Some(String::from(url.as_str()));
    config.save(&config_path).context("failed to save config")?;

    tracing::info!("Saved base URL {} to {}", url, config_path.display());
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let base_url = cli.base_url.as_deref();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::List(args) => run_list(&build_client(base_url, dir)?, &args).await,
        Commands::Show(args) => run_show(&build_client(base_url, dir)?, &args).await,
        Commands::Home => run_home(&build_client(base_url, dir)?).await,
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Show => run_config_show(base_url, dir),
            ConfigSubcommands::SetBaseUrl(args) => run_config_set_base_url(&args, dir),
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use clap::CommandFactory;
    use serde_json::json;
    use showtime_api::catalog::FetchError;

    use super::*;
    use crate::test_support::StubCatalog;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_kind() {
        // Arrange & Act
        let cli = Cli::try_parse_from(["showtime", "list", "sports"]).unwrap();

        // Assert
        assert!(matches!(
            cli.command,
            Commands::List(ListArgs {
                kind: ResourceKind::Sports
            })
        ));
    }

    #[test]
    fn test_parse_show_with_global_flags() {
        // Arrange & Act
        let cli = Cli::try_parse_from([
            "showtime",
            "show",
            "event",
            "e42",
            "--base-url",
            "http://backend:8000/",
        ])
        .unwrap();

        // Assert
        assert_eq!(cli.base_url.as_deref(), Some("http://backend:8000/"));
        let Commands::Show(args) = cli.command else {
            panic!("expected show subcommand");
        };
        assert_eq!(args.kind, ResourceKind::Events);
        assert_eq!(args.id, "e42");
    }

    #[test]
    fn test_parse_unknown_kind_fails() {
        let result = Cli::try_parse_from(["showtime", "list", "concerts"]);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_list_collection() {
        // Arrange
        let client = StubCatalog::default().with_collection(
            ResourceKind::GiftCards,
            json!([{"id": "gc1", "title": "Birthday Card"}]),
        );
        let args = ListArgs {
            kind: ResourceKind::GiftCards,
        };

        // Act & Assert
        run_list(&client, &args).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_list_propagates_fetch_error() {
        // Arrange
        let client = StubCatalog::default();
        let args = ListArgs {
            kind: ResourceKind::Plays,
        };

        // Act
        let err = run_list(&client, &args).await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "Failed to fetch plays");
        assert!(err.downcast_ref::<FetchError>().is_some());
    }

    #[tokio::test]
    async fn test_run_show_found_item() {
        // Arrange
        let client = StubCatalog::default().with_item(
            ResourceKind::Movies,
            "1",
            json!({"id": "1", "title": "Inception"}),
        );
        let args = ShowArgs {
            kind: ResourceKind::Movies,
            id: String::from("1"),
        };

        // Act & Assert
        run_show(&client, &args).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_show_missing_item_fails() {
        // Arrange
        let client = StubCatalog::default().with_item(
            ResourceKind::Movies,
            "1",
            json!({"id": "1", "title": "Inception"}),
        );
        let args = ShowArgs {
            kind: ResourceKind::Movies,
            id: String::from("missing"),
        };

        // Act
        let err = run_show(&client, &args).await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "movie not found: missing");
        assert!(err.downcast_ref::<FetchError>().is_none());
    }

    #[test]
    fn test_build_client_uses_flag_over_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().to_path_buf();
        let mut config = AppConfig::default();
        config.api.base_url = Some(String::from("http://from-config:8000/"));
        config.save(&config_dir.join("config.toml")).unwrap();

        // Act
        let client = build_client(Some("http://from-flag:9000/"), Some(&config_dir)).unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://from-flag:9000/");
    }
}
