use clap::{Parser, Subcommand};
use hearthwiki::site::SiteMetadata;
use hearthwiki::{config, output, sources};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hearthwiki")]
#[command(about = "Build configuration for the Hearthwiki static archive")]
#[command(long_about = "\
Build configuration for the Hearthwiki static archive

The external generator consumes this configuration at startup. The layout
it is told about:

  src/                 # Input root (templates, content)
  ├── assets/          # Passthrough copy + watch target
  └── css/             # Passthrough copy + watch target
  public/              # Output root the generator writes into

Templates may call the 'year' shortcode (current four-digit year) and read
the site metadata record. The metadata URL comes from the URL environment
variable on deploy hosts and falls back to http://localhost:8080 locally.

Run 'hearthwiki plan' to see the effective configuration.")]
#[command(version)]
struct Cli {
    /// Project root the passthrough sources are resolved against
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the effective build plan
    Plan {
        /// Emit the plan as a JSON manifest
        #[arg(long)]
        json: bool,
    },
    /// Survey passthrough sources on disk
    Check,
    /// Print the site metadata record
    Metadata {
        /// Emit the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Invoke a registered shortcode and print its value
    Shortcode {
        /// Shortcode name, e.g. "year"
        name: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let plan = config::build_plan();

    match cli.command {
        Command::Plan { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&plan.manifest())?);
            } else {
                output::print_plan(&plan);
            }
        }
        Command::Check => {
            let reports = sources::survey(&cli.root, plan.passthrough_copies())?;
            output::print_survey(&reports);
            let missing = reports.iter().filter(|r| !r.exists).count();
            if missing > 0 {
                return Err(format!("{missing} passthrough source(s) missing").into());
            }
        }
        Command::Metadata { json } => {
            let meta = SiteMetadata::from_env();
            if json {
                println!("{}", serde_json::to_string_pretty(&meta)?);
            } else {
                output::print_metadata(&meta);
            }
        }
        Command::Shortcode { name } => {
            println!("{}", plan.invoke_shortcode(&name)?);
        }
    }

    Ok(())
}
