//! Console specific metadata and boards.
//!
//! Mainboards are always present inside metadata (an empty one if the
//! submission didn't describe it); secondary boards are optional.

use serde::{Deserialize, Serialize};

use super::{impl_dated, lenient, lenient_or_default, Chip};

// =============================================================================
// DMG - Game Boy
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmgMetadata {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub screws: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: DmgMainboard,
    #[serde(deserialize_with = "lenient")]
    pub lcd_board: Option<DmgLcdBoard>,
    #[serde(deserialize_with = "lenient")]
    pub power_board: Option<DmgPowerBoard>,
    #[serde(deserialize_with = "lenient")]
    pub jack_board: Option<DmgJackBoard>,
}

impl_dated!(DmgMetadata { month });

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmgMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub extra_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub video_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub amplifier: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub crystal: Option<Chip>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmgLcdBoard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub column_driver: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub row_driver: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub regulator: Option<Chip>,
}

impl_dated!(DmgLcdBoard { month });

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmgPowerBoard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
}

impl_dated!(DmgPowerBoard { month });

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmgJackBoard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub extra_label: Option<String>,
}

// =============================================================================
// SGB - Super Game Boy
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgbMetadata {
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: SgbMainboard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgbMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub letter_at_top_right: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub icd2: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub video_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub rom: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub cic: Option<Chip>,
}

impl_dated!(SgbMainboard { month });

// =============================================================================
// MGB - Game Boy Pocket
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MgbMetadata {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: MgbMainboard,
    #[serde(deserialize_with = "lenient")]
    pub lcd: Option<MgbLcd>,
}

impl_dated!(MgbMetadata { month });

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MgbMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub number_pair: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub amplifier: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub regulator: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub crystal: Option<Chip>,
}

impl_dated!(MgbMainboard { month });

/// LCD screen with its driver chips bonded on the flex cable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MgbLcd {
    #[serde(deserialize_with = "lenient")]
    pub column_driver: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub row_driver: Option<Chip>,
}

// =============================================================================
// MGL - Game Boy Light
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MglMetadata {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub week: Option<u8>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: MglMainboard,
}

impl_dated!(MglMetadata { week });

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MglMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub number_pair: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub amplifier: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub regulator: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub crystal: Option<Chip>,
    /// Backlight transformer
    #[serde(deserialize_with = "lenient")]
    pub t1: Option<Chip>,
}

impl_dated!(MglMainboard { month });

// =============================================================================
// SGB2 - Super Game Boy 2
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sgb2Metadata {
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: Sgb2Mainboard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sgb2Mainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub letter_at_top_right: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub icd2: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub rom: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub cic: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub coil: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub crystal: Option<Chip>,
}

impl_dated!(Sgb2Mainboard { month });

// =============================================================================
// CGB - Game Boy Color
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CgbMetadata {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub week: Option<u8>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: CgbMainboard,
}

impl_dated!(CgbMetadata { month, week });

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CgbMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub number_pair: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub amplifier: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub regulator: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub crystal: Option<Chip>,
}

impl_dated!(CgbMainboard { month });

// =============================================================================
// AGB - Game Boy Advance
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgbMetadata {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub week: Option<u8>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: AgbMainboard,
}

impl_dated!(AgbMetadata { week });

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgbMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub number_pair: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub regulator: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub amplifier: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u4: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub crystal: Option<Chip>,
}

impl_dated!(AgbMainboard { month });

// =============================================================================
// AGS - Game Boy Advance SP
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgsMetadata {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: AgsMainboard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgsMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub number_pair: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub amplifier: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u4: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u5: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub crystal: Option<Chip>,
}

impl_dated!(AgsMainboard { month });

// =============================================================================
// GBS - Game Boy Player
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GbsMetadata {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub week: Option<u8>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: GbsMainboard,
}

impl_dated!(GbsMetadata { week });

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GbsMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub number_pair: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp_front: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stamp_back: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub work_ram: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u4: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u5: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u6: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub crystal: Option<Chip>,
}

impl_dated!(GbsMainboard { month });

// =============================================================================
// OXY - Game Boy Micro
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OxyMetadata {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub mainboard: OxyMainboard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OxyMainboard {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub circled_letters: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u2: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u4: Option<Chip>,
    #[serde(deserialize_with = "lenient")]
    pub u5: Option<Chip>,
}

impl_dated!(OxyMainboard { month });
