//! gbhwdb CLI - Export hardware database submissions to CSV
//!
//! # Export Commands
//!
//! ```bash
//! gbhwdb export dmg data/dmg.json -o dmg.csv   # One console
//! gbhwdb export-all data/ build/csv/           # Every <console>.json in data/
//! ```
//!
//! # Lookup Commands
//!
//! ```bash
//! gbhwdb columns cgb                # CSV header of a console export
//! gbhwdb consoles                   # Console codes and names
//! gbhwdb games --layout             # Known cartridges and board layouts
//! gbhwdb parse-label mask-rom "DMG-TRA-1 ..."
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use gbhwdb::{
    console_column_names, export_all, export_json, game_config, game_configs, parse_gen1_cpu,
    parse_mask_rom, ConsoleType, Destination, ExportConfig,
};
use gbhwdb::logs::{log_info, log_info_indent, log_success};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gbhwdb")]
#[command(about = "Export Game Boy hardware database submissions to CSV", long_about = None)]
struct Cli {
    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the submissions of one console to CSV
    Export {
        /// Console code (dmg, sgb, mgb, mgl, sgb2, cgb, agb, ags, gbs, oxy)
        console: ConsoleType,

        /// Input JSON file (array of submissions)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Site root of the generated url column
        #[arg(long)]
        site_root: Option<String>,
    },

    /// Export every console found as <code>.json in a directory
    ExportAll {
        /// Directory with <code>.json files
        input_dir: PathBuf,

        /// Directory receiving <code>.csv files
        output_dir: PathBuf,

        /// Site root of the generated url column
        #[arg(long)]
        site_root: Option<String>,
    },

    /// Show the CSV columns of a console export
    Columns {
        /// Console code
        console: ConsoleType,
    },

    /// List console codes and names
    Consoles,

    /// List known cartridges
    Games {
        /// Also show the board layout of each cartridge
        #[arg(short, long)]
        layout: bool,
    },

    /// Parse a chip label and print the result as JSON
    ParseLabel {
        /// Chip family
        kind: LabelKind,

        /// Label text
        label: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LabelKind {
    /// DMG-CPU / SGB-CPU
    Gen1Cpu,
    /// Cartridge mask ROM
    MaskRom,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    gbhwdb::logs::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Export {
            console,
            input,
            output,
            site_root,
        } => cmd_export(console, &input, output, site_root.as_deref()),

        Commands::ExportAll {
            input_dir,
            output_dir,
            site_root,
        } => cmd_export_all(&input_dir, &output_dir, site_root.as_deref()).await,

        Commands::Columns { console } => cmd_columns(console),

        Commands::Consoles => cmd_consoles(),

        Commands::Games { layout } => cmd_games(layout),

        Commands::ParseLabel { kind, label } => cmd_parse_label(kind, &label),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(site_root: Option<&str>) -> ExportConfig {
    let config = ExportConfig::from_env();
    match site_root {
        Some(root) => config.with_site_root(root),
        None => config,
    }
}

fn cmd_export(
    console: ConsoleType,
    input: &Path,
    output: Option<PathBuf>,
    site_root: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(site_root);
    let destination = match output {
        Some(path) => Destination::File(path),
        None => Destination::Stdout,
    };

    let summary = export_json(console, input, &destination, &config)?;
    log_success(format!(
        "✨ Done: {} {} submissions, {} columns",
        summary.records,
        console.name(),
        summary.columns
    ));
    Ok(())
}

async fn cmd_export_all(
    input_dir: &Path,
    output_dir: &Path,
    site_root: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(site_root);
    log_info(format!("📂 Exporting {} to {}", input_dir.display(), output_dir.display()));

    let summaries = export_all(input_dir, output_dir, &config).await?;
    for summary in &summaries {
        log_info_indent(
            format!(
                "{:<5} {:>6} rows  {}",
                summary.console.code(),
                summary.records,
                summary.output
            ),
            1,
        );
    }

    log_success("✨ Done!");
    Ok(())
}

fn cmd_columns(console: ConsoleType) -> Result<(), Box<dyn std::error::Error>> {
    let names = console_column_names(console, &ExportConfig::default())?;
    for name in &names {
        println!("{}", name);
    }
    log_info(format!("{} columns", names.len()));
    Ok(())
}

fn cmd_consoles() -> Result<(), Box<dyn std::error::Error>> {
    for console in ConsoleType::ALL {
        println!("{:<5} {}", console.code(), console.name());
    }
    Ok(())
}

fn cmd_games(layout: bool) -> Result<(), Box<dyn std::error::Error>> {
    for (code, game) in game_configs() {
        println!("{:<12} {}", code, game.name);
        if layout {
            let board = game.layout.layout();
            for chip in board.chips {
                println!("    {:<3} {}", chip.designator, chip.name);
            }
            if let Some(crystal) = board.crystal {
                println!("    {:<3} Crystal", crystal);
            }
            if board.battery {
                println!("    battery");
            }
        }
    }
    Ok(())
}

fn cmd_parse_label(kind: LabelKind, label: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = match kind {
        LabelKind::Gen1Cpu => parse_gen1_cpu(label).map(|cpu| serde_json::to_string_pretty(&cpu)),
        LabelKind::MaskRom => parse_mask_rom(label).map(|rom| {
            if let Some(game) = game_config(&rom.rom_code) {
                log_info(format!("🎮 {}", game.name));
            }
            serde_json::to_string_pretty(&rom)
        }),
    };

    match json {
        Some(json) => {
            println!("{}", json?);
            Ok(())
        }
        None => Err(format!("Unrecognized label: {}", label).into()),
    }
}
