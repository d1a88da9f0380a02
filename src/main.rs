use clap::{Parser, Subcommand};
use site_interactions::{config, logging, output};
use std::path::PathBuf;
use tracing::{debug, level_filters::LevelFilter};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup; called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    logging::parse_level(value)
        .ok_or_else(|| format!("'{value}' is not one of off, error, warn, info, debug, trace"))
}

#[derive(Parser)]
#[command(name = "site-interactions")]
#[command(about = "Client-side interactions for a real-estate landing page")]
#[command(long_about = "\
Client-side interactions for a real-estate landing page

The interactions ship as a WebAssembly module. This binary works with their
configuration: a sparse TOML overlay on top of the stock defaults, embedded
in the page as

  <script type=\"application/toml\" id=\"site-interactions-config\">
  [scroll]
  anchor_offset = 96
  </script>

Run 'site-interactions gen-config' to print every option with its default,
and 'site-interactions check --config FILE' to validate an overlay before
embedding it.")]
#[command(version = version_string())]
struct Cli {
    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn", value_parser = parse_log_level, global = true)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock config with all options documented
    GenConfig,
    /// Validate a config overlay and summarise the resulting behaviour
    Check {
        /// Overlay file; the stock defaults are checked when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the fully resolved config as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Check { config: path, json } => {
            let resolved = match &path {
                Some(path) => {
                    debug!(path = %path.display(), "loading overlay");
                    config::load_config(path)?
                }
                None => config::resolve_config(None)?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                output::print_check_output(&resolved, path.as_deref());
                println!();
                println!("==> Config is valid");
            }
        }
    }
    Ok(())
}
