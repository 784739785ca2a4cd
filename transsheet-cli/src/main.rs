use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use transsheet_cli::make_mod::{ModArgs, run_mod_command};
use transsheet_cli::make_sheet::{SheetArgs, run_sheet_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a translation sheet from a source string file.
    Sheet {
        /// The source string file (JSON)
        #[arg(short, long)]
        input: String,

        /// The sheet to write (CSV)
        #[arg(short, long)]
        sheet: String,

        /// Volunteer translation file (JSON); Japanese values pre-fill the sheet
        #[arg(short, long)]
        fan: Option<String>,

        /// Machine translation CSV (Key,Value,No)
        #[arg(short, long)]
        umm: Option<String>,

        /// Rows per sheet file; 0 writes a single file, otherwise at least 5000
        #[arg(short = 'n', long, default_value_t = 0)]
        rows: usize,

        /// Tag CR/LF in cells as well as TAB
        #[arg(short, long)]
        tag: bool,

        /// Write only the Key and English columns
        #[arg(long)]
        compare: bool,

        /// Overwrite existing sheet files
        #[arg(short = 'r', long = "replace")]
        replace: bool,
    },

    /// Build the translated string file from a source file and sheets.
    Mod {
        /// The source string file (JSON)
        #[arg(short, long)]
        input: String,

        /// The translated file to write
        #[arg(short, long)]
        output: String,

        /// Sheet file (CSV) or a directory searched recursively for sheets
        #[arg(short, long)]
        sheet: String,

        /// Glossary file (CSV)
        #[arg(short, long)]
        glossary: Option<String>,

        /// Mark put in front of machine translated text
        #[arg(short = 'k', long, default_value = "")]
        mark: String,

        /// Prefix each string with its reference ID
        #[arg(short = 'e', long = "refid")]
        refid: bool,

        /// Write a MOD CSV (Key,Value,No) instead of JSON
        #[arg(short, long)]
        umm: bool,

        /// Use machine translation when there is no human translation
        #[arg(short, long)]
        machine: bool,

        /// Use machine translation even when it contains `{`, `<` or `[`
        #[arg(short = 'f', long = "forcemt")]
        force: bool,

        /// Overwrite the output file
        #[arg(short = 'r', long = "replace")]
        replace: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.commands {
        Commands::Sheet {
            input,
            sheet,
            fan,
            umm,
            rows,
            tag,
            compare,
            replace,
        } => run_sheet_command(&SheetArgs {
            input,
            sheet,
            fan,
            umm,
            rows_per_sheet: rows,
            tag_controls: tag,
            compare,
            overwrite: replace,
        }),
        Commands::Mod {
            input,
            output,
            sheet,
            glossary,
            mark,
            refid,
            umm,
            machine,
            force,
            replace,
        } => run_mod_command(&ModArgs {
            input,
            output,
            sheet,
            glossary,
            mark,
            reference_id: refid,
            mod_csv: umm,
            machine,
            force_machine: force,
            overwrite: replace,
        }),
        Commands::Completions { shell } => {
            let mut command = Args::command();
            clap_complete::generate(shell, &mut command, "transsheet", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
