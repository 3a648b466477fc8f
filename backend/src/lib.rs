//! # gbhwdb - Game Boy hardware database export
//!
//! Flattens hand-documented console submissions (nested, mostly optional
//! board and chip records) into one CSV per console, for spreadsheet use.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  JSON file  │────▶│ Submissions │────▶│   Columns   │────▶│  CSV file   │
//! │ (1 console) │     │  (models)   │     │ (flatten)   │     │ (sink)      │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gbhwdb::{export_json_file, ConsoleType, ExportConfig};
//! use std::path::Path;
//!
//! let summary = export_json_file(
//!     ConsoleType::Cgb,
//!     Path::new("data/cgb.json"),
//!     Path::new("build/cgb.csv"),
//!     &ExportConfig::from_env(),
//! )?;
//! println!("Exported {} submissions", summary.records);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Layered error types
//! - [`logs`] - Export progress log
//! - [`config`] - Export settings and static lookup tables
//! - [`models`] - Submission, board and chip records
//! - [`export`] - Column combinators, console column lists, CSV sink, pipeline
//! - [`parser`] - Chip label parsers

// Core modules
pub mod error;
pub mod logs;

// Static data
pub mod config;
pub mod models;

// Export
pub mod export;

// Label parsing
pub mod parser;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ExportError,
    ExportResult,
    LabelError,
    LabelResult,
    PipelineError,
    PipelineResult,
    SpecError,
    SpecResult,
};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{
    game_config,
    game_configs,
    CartChip,
    CartChipRole,
    CartLayout,
    CartLayoutId,
    ConsoleType,
    ExportConfig,
    GameConfig,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Chip, Dated, Submission};

// =============================================================================
// Re-exports - Columns
// =============================================================================

pub use export::{
    chip_columns,
    console_column_names,
    console_spec,
    field,
    generate,
    lift,
    Column,
    ColumnSpec,
    ConsoleMetadata,
    Generated,
    Row,
};

// =============================================================================
// Re-exports - CSV Sink & Pipeline
// =============================================================================

pub use export::{
    export_all,
    export_json,
    export_json_file,
    export_json_file_async,
    export_records,
    write_csv,
    CsvSink,
    Destination,
    ExportSummary,
    SinkState,
};

// =============================================================================
// Re-exports - Label parsers
// =============================================================================

pub use parser::{parse_gen1_cpu, parse_mask_rom, Gen1Cpu, Manufacturer, MaskRom};
