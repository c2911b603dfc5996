use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ini::Ini;

/// Print an INI file, or read one typed value from it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the INI file.
    path: PathBuf,

    /// Section to query. Requires `--key`.
    #[arg(short, long, requires = "key")]
    section: Option<String>,

    /// Key to query. Requires `--section`.
    #[arg(short, long, requires = "section")]
    key: Option<String>,

    /// How to read the queried value.
    #[arg(long = "as", value_enum, default_value_t = Kind::String)]
    kind: Kind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Int,
    Float,
    String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ini=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let ini = Ini::open(&cli.path)
        .with_context(|| format!("failed to parse {}", cli.path.display()))?;

    match (cli.section, cli.key) {
        (Some(section), Some(key)) => {
            let value = match cli.kind {
                Kind::Int => ini.get::<i64>(&section, &key)?.to_string(),
                Kind::Float => ini.get::<f64>(&section, &key)?.to_string(),
                Kind::String => ini.get::<String>(&section, &key)?,
            };
            println!("{section}, {key}: {value}");
        }
        (None, None) => {
            for section in ini.sections() {
                println!("[{}]", section.name());

                for entry in section.entries() {
                    println!("{} = {}", entry.key(), entry.value());
                }

                println!();
            }
        }
        _ => bail!("--section and --key must be given together"),
    }

    Ok(())
}
