use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use greeklish_cli::commands::{config_ops, convert_ops};
use greeklish_cli::trace_init::init_tracing;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "greektool", about = "Greeklish detection and expansion diagnostics")]
struct Cli {
    /// Custom transliteration table TOML
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify text and show the deciding rule
    Classify {
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List Greek spelling variants for text
    Variants {
        text: String,
        /// Maximum number of variants
        #[arg(short, long, default_value = "5")]
        n: usize,
        /// Branch budget (defaults to twice the variant count)
        #[arg(long)]
        expansions: Option<usize>,
    },
    /// Expand a search query into space-joined variants
    Expand {
        query: String,
        /// Maximum number of variants
        #[arg(short, long, default_value = "3")]
        n: usize,
        /// Language code; only Greek languages are expanded
        #[arg(long)]
        lang: Option<String>,
    },
    /// Expand queries from a file (one per line) into JSONL
    Batch {
        input_file: PathBuf,
        output_file: PathBuf,
        /// Maximum number of variants per query
        #[arg(short, long, default_value = "3")]
        n: usize,
    },
    /// Export the default transliteration table as TOML
    TableExport,
    /// Validate a custom transliteration table TOML file
    TableValidate { file: PathBuf },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate { file: PathBuf },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    die!(
        config_ops::load_custom(cli.table.as_deref(), cli.settings.as_deref()),
        "Error loading configuration: {}"
    );

    match cli.command {
        Command::Classify { text, json } => {
            println!("{}", die!(convert_ops::classify_report(&text, json), "Error: {}"));
        }
        Command::Variants { text, n, expansions } => {
            println!("{}", convert_ops::variants_report(&text, n, expansions));
        }
        Command::Expand { query, n, lang } => {
            println!("{}", convert_ops::expand_report(&query, n, lang.as_deref()));
        }
        Command::Batch {
            input_file,
            output_file,
            n,
        } => {
            let count = die!(
                convert_ops::batch(&input_file, &output_file, n),
                "Error running batch: {}"
            );
            eprintln!("Wrote {count} entries to {}", output_file.display());
        }
        Command::TableExport => print!("{}", config_ops::table_export()),
        Command::TableValidate { file } => {
            println!("{}", die!(config_ops::table_validate(&file), "Error: {}"));
        }
        Command::SettingsExport => print!("{}", config_ops::settings_export()),
        Command::SettingsValidate { file } => {
            println!("{}", die!(config_ops::settings_validate(&file), "Error: {}"));
        }
    }
}
