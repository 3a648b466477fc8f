//! Column lists of every console export.
//!
//! Each console's metadata type knows its own columns through
//! [`ConsoleMetadata`]; the shared submission columns (`type`, `title`,
//! `slug`, `url`, `contributor`) are prepended by [`console_spec`].
//!
//! Column names are part of the published CSV format. Some of them don't
//! follow the field they come from (AGB, AGS and GBS export mainboard `u4`
//! as `u2_*`) and must stay that way.

use serde::de::DeserializeOwned;

use crate::config::{ConsoleType, ExportConfig};
use crate::error::SpecResult;
use crate::models::*;

use super::columns::{field, generate, lift, Column, ColumnSpec, Generated};
use super::format;

/// Per-console metadata with a fixed column layout.
pub trait ConsoleMetadata: DeserializeOwned + Send + Sync + 'static {
    const CONSOLE: ConsoleType;

    /// Columns of the metadata, in export order.
    fn columns() -> Vec<Column<Self>>;
}

/// Call a function generic over [`ConsoleMetadata`] for a runtime console.
macro_rules! dispatch_console {
    ($console:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $console {
            $crate::config::ConsoleType::Dmg => $func::<$crate::models::DmgMetadata>($($arg),*),
            $crate::config::ConsoleType::Sgb => $func::<$crate::models::SgbMetadata>($($arg),*),
            $crate::config::ConsoleType::Mgb => $func::<$crate::models::MgbMetadata>($($arg),*),
            $crate::config::ConsoleType::Mgl => $func::<$crate::models::MglMetadata>($($arg),*),
            $crate::config::ConsoleType::Sgb2 => $func::<$crate::models::Sgb2Metadata>($($arg),*),
            $crate::config::ConsoleType::Cgb => $func::<$crate::models::CgbMetadata>($($arg),*),
            $crate::config::ConsoleType::Agb => $func::<$crate::models::AgbMetadata>($($arg),*),
            $crate::config::ConsoleType::Ags => $func::<$crate::models::AgsMetadata>($($arg),*),
            $crate::config::ConsoleType::Gbs => $func::<$crate::models::GbsMetadata>($($arg),*),
            $crate::config::ConsoleType::Oxy => $func::<$crate::models::OxyMetadata>($($arg),*),
        }
    };
}

pub(crate) use dispatch_console;

// =============================================================================
// Shared groups
// =============================================================================

/// Columns every submission starts with.
pub fn submission_columns<M: 'static>(config: &ExportConfig) -> Vec<Column<Submission<M>>> {
    let config = config.clone();
    vec![
        field("", "type", |s: &Submission<M>| &s.console),
        field("", "title", |s: &Submission<M>| &s.title),
        field("", "slug", |s: &Submission<M>| &s.slug),
        generate("", "url", move |s: &Submission<M>| {
            Generated::Value(config.submission_url(s.console, &s.slug))
        }),
        field("", "contributor", |s: &Submission<M>| &s.contributor),
    ]
}

/// The nine columns describing one chip, named `<prefix>_*`.
pub fn chip_columns(prefix: &str) -> Vec<Column<Chip>> {
    vec![
        field(prefix, "type", |c: &Chip| &c.kind),
        field(prefix, "label", |c: &Chip| &c.label),
        field(prefix, "manufacturer", |c: &Chip| &c.manufacturer),
        generate(prefix, "manufacturer_name", |c: &Chip| {
            format::manufacturer(c.manufacturer.as_deref())
        }),
        generate(prefix, "calendar_short", |c: &Chip| format::short_calendar(c)),
        generate(prefix, "calendar", |c: &Chip| format::calendar(c)),
        field(prefix, "year", |c: &Chip| &c.year),
        field(prefix, "month", |c: &Chip| &c.month),
        field(prefix, "week", |c: &Chip| &c.week),
    ]
}

fn chip<M, F>(prefix: &str, get: F) -> Vec<Column<M>>
where
    M: 'static,
    F: Fn(&M) -> Option<&Chip> + Send + Sync + 'static,
{
    lift(get, chip_columns(prefix))
}

fn calendar_columns<T: Dated + 'static>(prefix: &str) -> Vec<Column<T>> {
    vec![
        generate(prefix, "calendar_short", |t: &T| format::short_calendar(t)),
        generate(prefix, "calendar", |t: &T| format::calendar(t)),
    ]
}

/// Validated column specification of a console export.
pub fn console_spec<M: ConsoleMetadata>(
    config: &ExportConfig,
) -> SpecResult<ColumnSpec<Submission<M>>> {
    ColumnSpec::new(
        [
            submission_columns(config),
            lift(|s: &Submission<M>| s.metadata.as_ref(), M::columns()),
        ]
        .concat(),
    )
}

fn column_names<M: ConsoleMetadata>(config: &ExportConfig) -> SpecResult<Vec<String>> {
    let spec = console_spec::<M>(config)?;
    Ok(spec.names().into_iter().map(String::from).collect())
}

/// CSV header of a console export.
pub fn console_column_names(
    console: ConsoleType,
    config: &ExportConfig,
) -> SpecResult<Vec<String>> {
    dispatch_console!(console, column_names(config))
}

// =============================================================================
// Consoles
// =============================================================================

impl ConsoleMetadata for DmgMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Dmg;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![
                field("", "color", |m: &Self| &m.color),
                field("", "screws", |m: &Self| &m.screws),
            ],
            calendar_columns(""),
            vec![
                field("", "year", |m: &Self| &m.year),
                field("", "month", |m: &Self| &m.month),
            ],
            lift(
                |m: &Self| Some(&m.mainboard),
                vec![
                    field("mainboard", "type", |b: &DmgMainboard| &b.kind),
                    field("mainboard", "extra_label", |b: &DmgMainboard| &b.extra_label),
                    field("mainboard", "stamp", |b: &DmgMainboard| &b.stamp),
                    field("mainboard", "circled_letters", |b: &DmgMainboard| &b.circled_letters),
                ],
            ),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("video_ram", |m: &Self| m.mainboard.video_ram.as_ref()),
            chip("amplifier", |m: &Self| m.mainboard.amplifier.as_ref()),
            chip("crystal", |m: &Self| m.mainboard.crystal.as_ref()),
            lift(
                |m: &Self| m.lcd_board.as_ref(),
                [
                    vec![
                        field("lcd_board", "type", |b: &DmgLcdBoard| &b.kind),
                        field("lcd_board", "circled_letters", |b: &DmgLcdBoard| &b.circled_letters),
                        field("lcd_board", "stamp", |b: &DmgLcdBoard| &b.stamp),
                    ],
                    calendar_columns("lcd_board"),
                    vec![
                        field("lcd_board", "year", |b: &DmgLcdBoard| &b.year),
                        field("lcd_board", "month", |b: &DmgLcdBoard| &b.month),
                    ],
                ]
                .concat(),
            ),
            chip("column_driver", |m: &Self| {
                m.lcd_board.as_ref().and_then(|b| b.column_driver.as_ref())
            }),
            chip("row_driver", |m: &Self| {
                m.lcd_board.as_ref().and_then(|b| b.row_driver.as_ref())
            }),
            chip("regulator", |m: &Self| {
                m.lcd_board.as_ref().and_then(|b| b.regulator.as_ref())
            }),
            lift(
                |m: &Self| m.power_board.as_ref(),
                [
                    vec![
                        field("power_board", "type", |b: &DmgPowerBoard| &b.kind),
                        field("power_board", "label", |b: &DmgPowerBoard| &b.label),
                    ],
                    calendar_columns("power_board"),
                    vec![
                        field("power_board", "year", |b: &DmgPowerBoard| &b.year),
                        field("power_board", "month", |b: &DmgPowerBoard| &b.month),
                    ],
                ]
                .concat(),
            ),
            lift(
                |m: &Self| m.jack_board.as_ref(),
                vec![
                    field("jack_board", "type", |b: &DmgJackBoard| &b.kind),
                    field("jack_board", "extra_label", |b: &DmgJackBoard| &b.extra_label),
                ],
            ),
        ]
        .concat()
    }
}

impl ConsoleMetadata for SgbMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Sgb;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "stamp", |m: &Self| &m.stamp)],
            lift(
                |m: &Self| Some(&m.mainboard),
                [
                    vec![
                        field("mainboard", "type", |b: &SgbMainboard| &b.kind),
                        field("mainboard", "circled_letters", |b: &SgbMainboard| &b.circled_letters),
                        field("mainboard", "letter_at_top_right", |b: &SgbMainboard| {
                            &b.letter_at_top_right
                        }),
                    ],
                    calendar_columns("mainboard"),
                    vec![
                        field("mainboard", "year", |b: &SgbMainboard| &b.year),
                        field("mainboard", "month", |b: &SgbMainboard| &b.month),
                    ],
                ]
                .concat(),
            ),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("icd2", |m: &Self| m.mainboard.icd2.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("video_ram", |m: &Self| m.mainboard.video_ram.as_ref()),
            chip("rom", |m: &Self| m.mainboard.rom.as_ref()),
            chip("cic", |m: &Self| m.mainboard.cic.as_ref()),
        ]
        .concat()
    }
}

/// Mainboard columns shared by the MGB, MGL, CGB, AGB and AGS exports.
macro_rules! numbered_mainboard_columns {
    ($board:ty) => {
        [
            vec![
                field("mainboard", "type", |b: &$board| &b.kind),
                field("mainboard", "number_pair", |b: &$board| &b.number_pair),
                field("mainboard", "stamp", |b: &$board| &b.stamp),
                field("mainboard", "circled_letters", |b: &$board| &b.circled_letters),
            ],
            calendar_columns("mainboard"),
            vec![
                field("mainboard", "year", |b: &$board| &b.year),
                field("mainboard", "month", |b: &$board| &b.month),
            ],
        ]
        .concat()
    };
}

impl ConsoleMetadata for MgbMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Mgb;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "color", |m: &Self| &m.color)],
            calendar_columns(""),
            vec![
                field("", "year", |m: &Self| &m.year),
                field("", "month", |m: &Self| &m.month),
            ],
            lift(|m: &Self| Some(&m.mainboard), numbered_mainboard_columns!(MgbMainboard)),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("amplifier", |m: &Self| m.mainboard.amplifier.as_ref()),
            chip("regulator", |m: &Self| m.mainboard.regulator.as_ref()),
            chip("crystal", |m: &Self| m.mainboard.crystal.as_ref()),
            chip("column_driver", |m: &Self| {
                m.lcd.as_ref().and_then(|lcd| lcd.column_driver.as_ref())
            }),
            chip("row_driver", |m: &Self| {
                m.lcd.as_ref().and_then(|lcd| lcd.row_driver.as_ref())
            }),
        ]
        .concat()
    }
}

impl ConsoleMetadata for MglMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Mgl;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "color", |m: &Self| &m.color)],
            calendar_columns(""),
            vec![
                field("", "year", |m: &Self| &m.year),
                field("", "week", |m: &Self| &m.week),
            ],
            lift(|m: &Self| Some(&m.mainboard), numbered_mainboard_columns!(MglMainboard)),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("amplifier", |m: &Self| m.mainboard.amplifier.as_ref()),
            chip("regulator", |m: &Self| m.mainboard.regulator.as_ref()),
            chip("crystal", |m: &Self| m.mainboard.crystal.as_ref()),
            chip("t1", |m: &Self| m.mainboard.t1.as_ref()),
        ]
        .concat()
    }
}

impl ConsoleMetadata for Sgb2Metadata {
    const CONSOLE: ConsoleType = ConsoleType::Sgb2;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "stamp", |m: &Self| &m.stamp)],
            lift(
                |m: &Self| Some(&m.mainboard),
                [
                    vec![
                        field("mainboard", "type", |b: &Sgb2Mainboard| &b.kind),
                        field("mainboard", "circled_letters", |b: &Sgb2Mainboard| &b.circled_letters),
                        field("mainboard", "letter_at_top_right", |b: &Sgb2Mainboard| {
                            &b.letter_at_top_right
                        }),
                    ],
                    calendar_columns("mainboard"),
                    vec![
                        field("mainboard", "year", |b: &Sgb2Mainboard| &b.year),
                        field("mainboard", "month", |b: &Sgb2Mainboard| &b.month),
                    ],
                ]
                .concat(),
            ),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("icd2", |m: &Self| m.mainboard.icd2.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("rom", |m: &Self| m.mainboard.rom.as_ref()),
            chip("cic", |m: &Self| m.mainboard.cic.as_ref()),
            chip("coil", |m: &Self| m.mainboard.coil.as_ref()),
            chip("crystal", |m: &Self| m.mainboard.crystal.as_ref()),
        ]
        .concat()
    }
}

impl ConsoleMetadata for CgbMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Cgb;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "color", |m: &Self| &m.color)],
            calendar_columns(""),
            vec![
                field("", "year", |m: &Self| &m.year),
                field("", "month", |m: &Self| &m.month),
                field("", "week", |m: &Self| &m.week),
            ],
            lift(|m: &Self| Some(&m.mainboard), numbered_mainboard_columns!(CgbMainboard)),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("amplifier", |m: &Self| m.mainboard.amplifier.as_ref()),
            chip("regulator", |m: &Self| m.mainboard.regulator.as_ref()),
            chip("crystal", |m: &Self| m.mainboard.crystal.as_ref()),
        ]
        .concat()
    }
}

impl ConsoleMetadata for AgbMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Agb;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "color", |m: &Self| &m.color)],
            calendar_columns(""),
            vec![
                field("", "year", |m: &Self| &m.year),
                field("", "week", |m: &Self| &m.week),
            ],
            lift(|m: &Self| Some(&m.mainboard), numbered_mainboard_columns!(AgbMainboard)),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("regulator", |m: &Self| m.mainboard.regulator.as_ref()),
            chip("amplifier", |m: &Self| m.mainboard.amplifier.as_ref()),
            chip("u2", |m: &Self| m.mainboard.u4.as_ref()),
            chip("crystal", |m: &Self| m.mainboard.crystal.as_ref()),
        ]
        .concat()
    }
}

impl ConsoleMetadata for AgsMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Ags;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "color", |m: &Self| &m.color)],
            lift(|m: &Self| Some(&m.mainboard), numbered_mainboard_columns!(AgsMainboard)),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("amplifier", |m: &Self| m.mainboard.amplifier.as_ref()),
            chip("u2", |m: &Self| m.mainboard.u4.as_ref()),
            chip("u5", |m: &Self| m.mainboard.u5.as_ref()),
            chip("crystal", |m: &Self| m.mainboard.crystal.as_ref()),
        ]
        .concat()
    }
}

impl ConsoleMetadata for GbsMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Gbs;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "color", |m: &Self| &m.color)],
            calendar_columns(""),
            vec![
                field("", "year", |m: &Self| &m.year),
                field("", "week", |m: &Self| &m.week),
            ],
            lift(
                |m: &Self| Some(&m.mainboard),
                [
                    vec![
                        field("mainboard", "type", |b: &GbsMainboard| &b.kind),
                        field("mainboard", "number_pair", |b: &GbsMainboard| &b.number_pair),
                        field("mainboard", "stamp", |b: &GbsMainboard| &b.stamp),
                        field("mainboard", "stamp_front", |b: &GbsMainboard| &b.stamp_front),
                        field("mainboard", "stamp_back", |b: &GbsMainboard| &b.stamp_back),
                        field("mainboard", "circled_letters", |b: &GbsMainboard| &b.circled_letters),
                    ],
                    calendar_columns("mainboard"),
                    vec![
                        field("mainboard", "year", |b: &GbsMainboard| &b.year),
                        field("mainboard", "month", |b: &GbsMainboard| &b.month),
                    ],
                ]
                .concat(),
            ),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("work_ram", |m: &Self| m.mainboard.work_ram.as_ref()),
            chip("u2", |m: &Self| m.mainboard.u4.as_ref()),
            chip("u5", |m: &Self| m.mainboard.u5.as_ref()),
            chip("u6", |m: &Self| m.mainboard.u6.as_ref()),
            chip("crystal", |m: &Self| m.mainboard.crystal.as_ref()),
        ]
        .concat()
    }
}

impl ConsoleMetadata for OxyMetadata {
    const CONSOLE: ConsoleType = ConsoleType::Oxy;

    fn columns() -> Vec<Column<Self>> {
        [
            vec![field("", "color", |m: &Self| &m.color)],
            lift(
                |m: &Self| Some(&m.mainboard),
                [
                    vec![
                        field("mainboard", "type", |b: &OxyMainboard| &b.kind),
                        field("mainboard", "circled_letters", |b: &OxyMainboard| &b.circled_letters),
                    ],
                    calendar_columns("mainboard"),
                    vec![
                        field("mainboard", "year", |b: &OxyMainboard| &b.year),
                        field("mainboard", "month", |b: &OxyMainboard| &b.month),
                    ],
                ]
                .concat(),
            ),
            chip("cpu", |m: &Self| m.mainboard.cpu.as_ref()),
            chip("u2", |m: &Self| m.mainboard.u2.as_ref()),
            chip("u4", |m: &Self| m.mainboard.u4.as_ref()),
            chip("u5", |m: &Self| m.mainboard.u5.as_ref()),
        ]
        .concat()
    }
}
