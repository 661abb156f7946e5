//! `vmc` CLI entry point.
//!
//! This binary is the composition root for the workspace. Responsibilities:
//!
//! 1. **Parse configuration** from flags and environment variables (`clap`).
//! 2. **Wire observability** with `tracing-subscriber` (text or JSON on stderr)
//!    and an optional OpenTelemetry OTLP exporter; see [`telemetry`].
//! 3. **Construct infrastructure** (`ConnectorConfig`, `Connector`,
//!    `SddcsClient`) for the subcommands that reach VMC or NSX-T.
//! 4. **Dispatch** to the helpers in the `provider` crate and print the result
//!    on stdout.

mod telemetry;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use connector::{ConnectorConfig, SddcsClient};
use model::{OrgId, SddcId};
use provider::{API_TOKEN_ENV, DEFAULT_CSP_URL, DEFAULT_VMC_URL};
use std::time::Duration;
use telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "vmc", version, about = "VMware Cloud on AWS provider helpers")]
struct Cli {
    /// Log output format.
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogFormat::Text,
        env = "VMC_LOG_FORMAT"
    )]
    log_format: LogFormat,

    /// OTLP/gRPC collector endpoint; spans are exported when set.
    #[arg(long, global = true, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    otlp_endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the numeric code for a storage capacity label (0 if unknown).
    StorageCapacity { label: String },

    /// Convert an API deployment type (SINGLE_AZ / MULTI_AZ) to its display form.
    DeployType { value: String },

    /// Validate an identifier or endpoint.
    Validate {
        #[command(subcommand)]
        target: ValidateTarget,
    },

    /// Expand a licensing block given as a JSON array of at most one object.
    Licensing { json: String },

    /// Show an SDDC summary including its total host count.
    Sddc {
        #[arg(long)]
        org_id: OrgId,

        #[arg(long)]
        sddc_id: SddcId,

        #[arg(long, env = "VMC_URL", default_value = DEFAULT_VMC_URL)]
        vmc_url: String,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Authenticate against an NSX-T reverse proxy and print the resolved root.
    NsxtConnect {
        #[arg(long)]
        reverse_proxy_url: String,

        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

#[derive(Debug, Subcommand)]
enum ValidateTarget {
    Uuid { value: String },
    Url { value: String },
}

#[derive(Debug, Args)]
struct ConnectionArgs {
    /// Cloud Services Platform URL used for token exchange.
    #[arg(long, env = "CSP_URL", default_value = DEFAULT_CSP_URL)]
    csp_url: String,

    /// Environment variable holding the API token.
    #[arg(long, default_value = API_TOKEN_ENV)]
    api_token_var: String,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl ConnectionArgs {
    fn into_config(self) -> ConnectorConfig {
        ConnectorConfig::default()
            .with_csp_url(self.csp_url)
            .with_api_token_var(self.api_token_var)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let telemetry = telemetry::init(cli.log_format, cli.otlp_endpoint.as_deref())?;

    let result = run(cli.command).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "command failed");
    }

    telemetry.shutdown();
    result
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::StorageCapacity { label } => {
            println!("{}", provider::convert_storage_capacity_to_int(&label));
        }
        Command::DeployType { value } => {
            println!("{}", provider::convert_deploy_type(&value));
        }
        Command::Validate { target } => {
            match target {
                ValidateTarget::Uuid { value } => provider::is_valid_uuid(&value)
                    .with_context(|| format!("'{value}' is not a valid UUID"))?,
                ValidateTarget::Url { value } => provider::is_valid_url(&value)
                    .with_context(|| format!("'{value}' is not a valid URL"))?,
            }
            println!("ok");
        }
        Command::Licensing { json } => {
            let records: Vec<serde_json::Value> =
                serde_json::from_str(&json).context("licensing input must be a JSON array")?;
            match provider::expand_msft_license_config(&records)? {
                Some(config) => println!("{}", serde_json::to_string_pretty(&config)?),
                None => println!("null"),
            }
        }
        Command::Sddc {
            org_id,
            sddc_id,
            vmc_url,
            connection,
        } => {
            let config = connection.into_config();
            let connector = connector::vmc_connector_with(&config, &vmc_url).await?;
            let client = SddcsClient::new(&connector);
            let sddc = provider::get_sddc(&client, &org_id, &sddc_id)
                .await
                .with_context(|| format!("fetching sddc {sddc_id} in org {org_id}"))?;

            let deployment_type = sddc
                .resource_config
                .as_ref()
                .and_then(|rc| rc.deployment_type.as_deref())
                .map_or("", provider::convert_deploy_type);

            println!("name:            {}", sddc.name.as_deref().unwrap_or(""));
            println!("state:           {}", sddc.sddc_state.as_deref().unwrap_or(""));
            let reverse_proxy = sddc
                .resource_config
                .as_ref()
                .and_then(|rc| rc.nsx_api_public_endpoint_url.as_deref())
                .unwrap_or("");

            println!("deployment_type: {deployment_type}");
            println!("nsxt_proxy_url:  {reverse_proxy}");
            println!("total_hosts:     {}", provider::total_sddc_hosts(Some(&sddc)));
        }
        Command::NsxtConnect {
            reverse_proxy_url,
            connection,
        } => {
            let config = connection.into_config();
            let connector =
                connector::nsxt_reverse_proxy_connector_with(&config, &reverse_proxy_url).await?;
            tracing::info!(
                base_url = %connector.base_url(),
                expires_at = %connector.session().expires_at(),
                scope = connector.session().scope().unwrap_or(""),
                "connected to NSX-T reverse proxy"
            );
            println!("{}", connector.base_url());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sddc_requires_uuid_ids() {
        let parsed = Cli::try_parse_from([
            "vmc",
            "sddc",
            "--org-id",
            "5f4e3d2c-1b0a-4f9e-8d7c-6b5a49382716",
            "--sddc-id",
            "not-a-uuid",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn connection_defaults() {
        let cli = Cli::try_parse_from([
            "vmc",
            "nsxt-connect",
            "--reverse-proxy-url",
            "https://nsx.example/sks-nsxt-manager",
        ])
        .unwrap();

        match cli.command {
            Command::NsxtConnect { connection, .. } => {
                let config = connection.into_config();
                assert_eq!(config.api_token_var, "API_TOKEN");
                assert_eq!(config.timeout, Duration::from_secs(30));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn validate_subcommands_parse() {
        let cli =
            Cli::try_parse_from(["vmc", "validate", "url", "https://example.com/path"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Validate { target: ValidateTarget::Url { .. } }
        ));
    }

    #[tokio::test]
    async fn invalid_uuid_fails_the_command() {
        let result = run(Command::Validate {
            target: ValidateTarget::Uuid {
                value: "not-a-uuid".into(),
            },
        })
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn malformed_licensing_json_fails_the_command() {
        let result = run(Command::Licensing {
            json: r#"[{"mssql_licensing": 1, "windows_licensing": "enabled"}]"#.into(),
        })
        .await;
        assert!(result.is_err());
    }
}
