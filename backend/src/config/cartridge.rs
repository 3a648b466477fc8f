//! Cartridge board layouts and known games.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a chip position on a cartridge board holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartChipRole {
    Rom,
    Mapper,
    Ram,
    RamProtector,
}

/// One chip position on a cartridge board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartChip {
    /// Silkscreen designator, e.g. `U1`
    pub designator: &'static str,
    pub name: &'static str,
    pub key: CartChipRole,
}

/// Chip positions and extras of a cartridge board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartLayout {
    pub chips: &'static [CartChip],
    /// Designator of the RTC crystal, if any
    pub crystal: Option<&'static str>,
    pub battery: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartLayoutId {
    Rom,
    RomMbc,
    RomMbcRam,
    RomMbcProtect,
    RomMbcRamXtal,
}

const U1_ROM: CartChip = CartChip { designator: "U1", name: "ROM", key: CartChipRole::Rom };
const U2_MAPPER: CartChip = CartChip { designator: "U2", name: "Mapper", key: CartChipRole::Mapper };
const U3_RAM: CartChip = CartChip { designator: "U3", name: "RAM", key: CartChipRole::Ram };
const U3_RAM_PROTECTOR: CartChip =
    CartChip { designator: "U3", name: "RAM protector", key: CartChipRole::RamProtector };
const U4_RAM_PROTECTOR: CartChip =
    CartChip { designator: "U4", name: "RAM protector", key: CartChipRole::RamProtector };

static ROM: CartLayout = CartLayout { chips: &[U1_ROM], crystal: None, battery: false };

static ROM_MBC: CartLayout = CartLayout {
    chips: &[U1_ROM, U2_MAPPER],
    crystal: None,
    battery: false,
};

static ROM_MBC_RAM: CartLayout = CartLayout {
    chips: &[U1_ROM, U2_MAPPER, U3_RAM, U4_RAM_PROTECTOR],
    crystal: None,
    battery: true,
};

static ROM_MBC_PROTECT: CartLayout = CartLayout {
    chips: &[U1_ROM, U2_MAPPER, U3_RAM_PROTECTOR],
    crystal: None,
    battery: true,
};

static ROM_MBC_RAM_XTAL: CartLayout = CartLayout {
    chips: &[U1_ROM, U2_MAPPER, U3_RAM, U4_RAM_PROTECTOR],
    crystal: Some("X1"),
    battery: true,
};

impl CartLayoutId {
    pub const ALL: [CartLayoutId; 5] = [
        CartLayoutId::Rom,
        CartLayoutId::RomMbc,
        CartLayoutId::RomMbcRam,
        CartLayoutId::RomMbcProtect,
        CartLayoutId::RomMbcRamXtal,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CartLayoutId::Rom => "rom",
            CartLayoutId::RomMbc => "rom_mbc",
            CartLayoutId::RomMbcRam => "rom_mbc_ram",
            CartLayoutId::RomMbcProtect => "rom_mbc_protect",
            CartLayoutId::RomMbcRamXtal => "rom_mbc_ram_xtal",
        }
    }

    pub fn layout(&self) -> &'static CartLayout {
        match self {
            CartLayoutId::Rom => &ROM,
            CartLayoutId::RomMbc => &ROM_MBC,
            CartLayoutId::RomMbcRam => &ROM_MBC_RAM,
            CartLayoutId::RomMbcProtect => &ROM_MBC_PROTECT,
            CartLayoutId::RomMbcRamXtal => &ROM_MBC_RAM_XTAL,
        }
    }
}

/// A known cartridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    /// No-Intro style title
    pub name: &'static str,
    pub layout: CartLayoutId,
}

const fn game(name: &'static str, layout: CartLayoutId) -> GameConfig {
    GameConfig { name, layout }
}

use CartLayoutId::{Rom, RomMbc, RomMbcProtect, RomMbcRam, RomMbcRamXtal};

const GAMES: [(&str, GameConfig); 35] = [
    ("CGB-AZ7J-0", game("Zelda no Densetsu - Fushigi no Kimi - Daichi no Shou (Japan)", RomMbcRam)),
    ("CGB-BFUP-0", game("Shrek - Fairy Tale Freakdown (USA, Europe) (En,Fr,De,Es,It)", RomMbc)),
    ("CGB-BHMJ-0", game("Hamster Paradise 2 (Japan)", RomMbcRam)),
    ("CGB-BXTJ-0", game("Pocket Monsters - Crystal Version (Japan)", RomMbcRamXtal)),
    ("CGB-BY3J-0", game("Yu-Gi-Oh! Duel Monsters III - Tri Holy God Advant (Japan)", RomMbcRam)),
    ("CGB-BY4J-0", game("Yu-Gi-Oh! Duel Monsters 4 - Battle of Great Duelist - Yuugi Deck (Japan)", RomMbcRam)),
    ("DMG-A4RJ-0", game("Bakukyuu Renpatsu!! Super B-Daman - Gekitan! Rising Valkyrie!! (Japan) (SGB Enhanced)", RomMbcRam)),
    ("DMG-AAUJ-1", game("Pocket Monsters Kin (Japan) (Rev A) (SGB Enhanced)", RomMbcRamXtal)),
    ("DMG-AD3P-1", game("Donkey Kong Land III (USA, Europe) (Rev A) (SGB Enhanced)", RomMbcRam)),
    ("DMG-ADDJ-0", game("Donkey Kong Land (Japan) (SGB Enhanced)", RomMbcRam)),
    ("DMG-ADDP-0", game("Donkey Kong Land 2 (USA, Europe) (SGB Enhanced)", RomMbcRam)),
    ("DMG-ADQJ-0", game("Dragon Quest Monsters - Terry no Wonderland (Japan) (SGB Enhanced)", RomMbcRam)),
    ("DMG-AFGE-0", game("Frogger (USA)", RomMbc)),
    ("DMG-AGOP-0", game("Hugo (Europe) (SGB Enhanced)", RomMbc)),
    ("DMG-AM3J-0", game("Momotarou Collection 2 (Japan) (SGB Enhanced)", RomMbcRam)),
    ("DMG-AYJ-0", game("Ayakashi no Shiro (Japan)", RomMbcProtect)),
    ("DMG-B7HJ-0", game("Nakayoshi Pet Series 1 - Kawaii Hamster (Japan)", RomMbcRam)),
    ("DMG-BLUJ-0", game("From TV Animation One Piece - Yume no Luffy Kaizokudan Tanjou! (Japan) (SGB Enhanced)", RomMbcRam)),
    ("DMG-BMAP-0", game("Mary-Kate and Ashley - Pocket Planner (USA, Europe)", RomMbcRamXtal)),
    ("DMG-CNE-0", game("Operation C (USA)", RomMbc)),
    ("DMG-DDE-0", game("Double Dragon (USA, Europe)", RomMbc)),
    ("DMG-F1A-1", game("F-1 Race (World) (Rev A)", RomMbcProtect)),
    ("DMG-G2E-0", game("Gauntlet II (USA, Europe)", RomMbc)),
    ("DMG-HBA-0", game("Bomber Boy (Japan)", RomMbc)),
    ("DMG-HFE-0", game("Hunt for Red October, The (USA, Europe)", RomMbc)),
    ("DMG-HQE-0", game("Chase H.Q. (USA, Europe)", RomMbc)),
    ("DMG-L6J-2", game("Super Mario Land 2 - 6-tsu no Kinka (Japan) (Rev 2)", RomMbcRam)),
    ("DMG-LDE-0", game("Little Mermaid, The (USA)", RomMbc)),
    ("DMG-MLA-1", game("Super Mario Land (World) (Rev A)", RomMbc)),
    ("DMG-NMX-0", game("Nemesis (Europe)", RomMbc)),
    ("DMG-PCE-0", game("Pac-Man (USA)", RomMbc)),
    ("DMG-Q6E-0", game("NFL Quarterback Club (USA, Europe)", RomMbc)),
    ("DMG-RWE-0", game("Mega Man - Dr. Wily's Revenge (USA)", RomMbc)),
    ("DMG-TRA-1", game("Tetris (World) (Rev A)", Rom)),
    ("DMG-YTE-0", game("Donkey Kong Land (USA, Europe) (SGB Enhanced)", RomMbcRam)),
];

static GAME_CONFIGS: Lazy<BTreeMap<&'static str, GameConfig>> =
    Lazy::new(|| GAMES.into_iter().collect());

/// Look up a cartridge by ROM code, e.g. `DMG-TRA-1`.
pub fn game_config(rom_code: &str) -> Option<&'static GameConfig> {
    GAME_CONFIGS.get(rom_code)
}

/// All known cartridges ordered by ROM code.
pub fn game_configs() -> impl Iterator<Item = (&'static str, &'static GameConfig)> {
    GAME_CONFIGS.iter().map(|(code, cfg)| (*code, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_lookup() {
        let tetris = game_config("DMG-TRA-1").unwrap();
        assert_eq!(tetris.name, "Tetris (World) (Rev A)");
        assert_eq!(tetris.layout, CartLayoutId::Rom);
        assert!(game_config("DMG-VUA-1").is_none());
    }

    #[test]
    fn test_all_games_present_and_sorted() {
        let codes: Vec<&str> = game_configs().map(|(code, _)| code).collect();
        assert_eq!(codes.len(), 35);
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_layout_designators() {
        let layout = CartLayoutId::RomMbcRam.layout();
        let designators: Vec<&str> = layout.chips.iter().map(|c| c.designator).collect();
        assert_eq!(designators, vec!["U1", "U2", "U3", "U4"]);
        assert!(layout.battery);
        assert_eq!(layout.crystal, None);

        let protect = CartLayoutId::RomMbcProtect.layout();
        assert_eq!(protect.chips[2].key, CartChipRole::RamProtector);
        assert_eq!(protect.chips[2].designator, "U3");
    }

    #[test]
    fn test_crystal_only_on_rtc_layout() {
        for id in CartLayoutId::ALL {
            let expected = if id == CartLayoutId::RomMbcRamXtal { Some("X1") } else { None };
            assert_eq!(id.layout().crystal, expected, "{}", id.code());
        }
        assert!(!CartLayoutId::Rom.layout().battery);
    }
}
