use anyhow::{Context, Result};
use clap::Parser;
use fhir_api::{ClientConfig, FHIR_BASE_URL, FhirClient, LOCAL_FHIR_BASE_URL};

/// fhir-api - FHIR server HTTP client
///
/// Sends requests to a FHIR server with `Cache-Control: no-cache` set.
///
/// Examples:
///   fhir-api url Patient/123           # Print the resolved request URL
///   fhir-api get metadata              # Fetch the server's CapabilityStatement
///   fhir-api --local get Patient       # Use a local server on port 8080
#[derive(Parser, Debug)]
#[command(author, version = env!("FHIR_API_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// FHIR server base URL (also via FHIR_BASE_URL)
    #[arg(
        long = "base-url",
        env = "FHIR_BASE_URL",
        value_name = "URL",
        default_value = FHIR_BASE_URL,
        global = true
    )]
    base_url: String,

    /// Use a local server at http://localhost:8080/fhir/ (overrides --base-url)
    #[arg(long, global = true)]
    local: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the URL a path resolves to, without sending a request
    Url(PathArgs),

    /// Send a GET request and print the response body
    Get(PathArgs),
}

#[derive(clap::Args, Debug)]
struct PathArgs {
    /// Path relative to the base URL, or an absolute URL
    #[arg(value_name = "PATH")]
    path: String,
}

impl Cli {
    fn base_url(&self) -> &str {
        if self.local {
            LOCAL_FHIR_BASE_URL
        } else {
            &self.base_url
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let client = FhirClient::new(ClientConfig::new(cli.base_url()))?;

    match cli.command {
        Commands::Url(args) => println!("{}", client.url(&args.path)),
        Commands::Get(args) => {
            let url = client.url(&args.path);
            let response = client
                .get(&args.path)
                .send()
                .await
                .with_context(|| format!("Failed to send request to {}", url))?
                .error_for_status()
                .with_context(|| format!("Request to {} failed", url))?;
            let body = response
                .text()
                .await
                .context("Failed to read response body")?;
            println!("{}", body);
        }
    }
    Ok(())
}
