//! Cartridge mask ROMs.
//!
//! Every layout captures the ROM code (`DMG-TRA-1`, `CGB-BHMJ-0`, ...) which
//! is also the key of [`crate::config::game_config`].

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{week2, year1, year2, Manufacturer, MatcherDef, MatcherSet, Year};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MaskRom {
    pub rom_code: String,
    pub manufacturer: Option<Manufacturer>,
    pub chip_type: Option<String>,
    pub year: Option<Year>,
    pub week: Option<u8>,
}

/// Sharp, 1990 onwards: `DMG-WJA-0 S LH534M05 JAPAN E1 9606 D`
fn sharp() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ S\ (LH[[:alnum:]]{4})[[:alnum:]]{2}\ JAPAN\ [A-Z][0-9]?\ ([0-9]{2})([0-9]{2})\ [A-Z]$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::Sharp),
                chip_type: Some(map_sharp_mask_rom(&c[3]).unwrap_or(&c[3]).to_owned()),
                year: Some(year2(&c[4])?),
                week: Some(week2(&c[5])?),
            })
        },
    )
}

/// Sharp without chip type, 1989-1991: `DMG-TRA-1 SHARP JAPAN A0 9019 D`
fn sharp2() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^(DMG-[[:alnum:]]{3}-[0-9])\ SHARP\ JAPAN\ [A-Z][0-9]?\ ([0-9]{2})([0-9]{2})\ [A-Z]$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::Sharp),
                chip_type: None,
                year: Some(year2(&c[2])?),
                week: Some(week2(&c[3])?),
            })
        },
    )
}

/// Sharp, 1989 and older: `DMG-AWA-0 SHARP JAPAN 8909 D A`
fn sharp3() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^(DMG-[[:alnum:]]{3}-[0-9])\ SHARP\ JAPAN\ ([0-9]{2})([0-9]{2})\ [A-Z]\ [A-Z]$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::Sharp),
                chip_type: None,
                year: Some(year2(&c[2])?),
                week: Some(week2(&c[3])?),
            })
        },
    )
}

/// Macronix MX23C, 1999 onwards: `M003119-M MX23C1603-12A DMG-VPHP-0 G2 2C882503`
fn macronix() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^[A-Z]([0-9]{2})([0-9]{2})[0-9]{2}-M\ (MX23C[0-9]{4}-[0-9]{2}[A-Z]?[0-9]?)\ ([0-9]\ )?((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ ([0-9][0-9]\ )?[A-Z][0-9]?\ [[:alnum:]]{8,10}$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[5].to_owned(),
                manufacturer: Some(Manufacturer::Macronix),
                chip_type: Some(c[3].to_owned()),
                year: Some(year2(&c[1])?),
                week: Some(week2(&c[2])?),
            })
        },
    )
}

/// Macronix MX23C before 1999: `C9745-M MX23C4002-20 DMG-APOJ-0 E1 43824C`
fn macronix2() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^[A-Z]([0-9]{2})([0-9]{2})-M\ (MX23C[0-9]{4}-[0-9]{2}[A-Z]?[0-9]?)\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]?\ [[:alnum:]]{6}$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[4].to_owned(),
                manufacturer: Some(Manufacturer::Macronix),
                chip_type: Some(c[3].to_owned()),
                year: Some(year2(&c[1])?),
                week: Some(week2(&c[2])?),
            })
        },
    )
}

/// OKI MSM538011E: `DMG-AM6J-0 F1 M538011E-36 9085401`
fn oki_msm538011e() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ (M538011E)-[[:alnum:]]{2}\ ([0-9])([0-9]{2})[0-9]{3}[[:alnum:]]$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::Oki),
                chip_type: Some(format!("MS{}", &c[3])),
                year: Some(year1(&c[4])?),
                week: Some(week2(&c[5])?),
            })
        },
    )
}

/// OKI MR531614G: `CGB-BPTE-0 G2 R531614G-44 044232E`
fn oki_mr531614g() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ (R531614G)-[[:alnum:]]{2}\ ([0-9])([0-9]{2})[0-9]{3}[[:alnum:]]$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::Oki),
                chip_type: Some(format!("M{}", &c[3])),
                year: Some(year1(&c[4])?),
                week: Some(week2(&c[5])?),
            })
        },
    )
}

/// NEC: `NEC JAPAN DMG-SAJ-0 C1 UPD23C1001EGW-J01 9010E9702`
fn nec() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^NEC\ JAPAN\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ (UPD23C[0-9]{4}[[:alnum:]]{3,4})-[A-Z][0-9]{2}\ ([0-9]{2})([0-9]{2})[A-Z][0-9]{4}$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::Nec),
                chip_type: Some(c[3].to_owned()),
                year: Some(year2(&c[4])?),
                week: Some(week2(&c[5])?),
            })
        },
    )
}

/// NEC-style label with no maker name: `DMG-ZLE-0 E1 N-4001EAGW-J14 9329X7007`
fn nec_like() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ (N-[0-9]{4}[[:alnum:]]{3,4})-[A-Z][0-9]{2}\ ([0-9]{2})([0-9]{2})[A-Z][0-9]{4}$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: None,
                chip_type: Some(c[3].to_owned()),
                year: Some(year2(&c[4])?),
                week: Some(week2(&c[5])?),
            })
        },
    )
}

/// AT&T: `Ⓜ AT&T JAPAN DMG-Q6E-0 C1 23C1001EAGW-K37 9351E9005`
fn at_t() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^Ⓜ\ AT&T\ JAPAN\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ (23C[0-9]{4}[[:alnum:]]{3,4})-[A-Z][0-9]{2}\ ([0-9]{2})([0-9]{2})[A-Z][0-9]{4}$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::AtT),
                chip_type: Some(c[3].to_owned()),
                year: Some(year2(&c[4])?),
                week: Some(week2(&c[5])?),
            })
        },
    )
}

/// Standard Microsystems: `STANDARD MICRO DMG-BIA-0 C1 23C1001EGW-J61 9140E9017`
fn smsc() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^STANDARD\ MICRO\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ (23C[0-9]{4}[[:alnum:]]{3,4})-[A-Z][0-9]{2}\ ([0-9]{2})([0-9]{2})[A-Z][0-9]{4}$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::Smsc),
                chip_type: Some(c[3].to_owned()),
                year: Some(year2(&c[4])?),
                week: Some(week2(&c[5])?),
            })
        },
    )
}

/// Glop top, maker unknown: `LR0G150 DMG-TRA-1 97141`
fn glop_top() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^(LR0G150)\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ ([0-9]{2})([0-9]{2})[0-9]$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[2].to_owned(),
                manufacturer: None,
                chip_type: Some(c[1].to_owned()),
                year: Some(year2(&c[4])?),
                week: Some(week2(&c[5])?),
            })
        },
    )
}

/// Toshiba: `TOSHIBA 9136EAI TC531001CF DMG-NCE-0 C1 J541 JAPAN`
fn toshiba() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^TOSHIBA\ ([0-9]{2})([0-9]{2})EAI\ (TC53[0-9]{4}[A-Z]{2})\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ [A-Z][0-9]{3}\ JAPAN$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[4].to_owned(),
                manufacturer: Some(Manufacturer::Toshiba),
                chip_type: Some(c[3].to_owned()),
                year: Some(year2(&c[1])?),
                week: Some(week2(&c[2])?),
            })
        },
    )
}

/// Samsung, no date code: `SEC KM23C16120DT CGB-BHMJ-0 G2 K3N5C317GD`
fn samsung() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^SEC\ (KM23C[0-9]{4,5}[A-Z]{1,2})\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ [[:alnum:]]{10}$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[2].to_owned(),
                manufacturer: Some(Manufacturer::Samsung),
                chip_type: Some(c[1].to_owned()),
                year: None,
                week: None,
            })
        },
    )
}

/// Older Samsung: `SEC KM23C8000DG DMG-AAUJ-1 F1 KFX331U`
fn samsung2() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^SEC\ (KM23C[0-9]{4,5}[A-Z]{1,2})\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ KF[[:alnum:]]{4}[A-Z]$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[2].to_owned(),
                manufacturer: Some(Manufacturer::Samsung),
                chip_type: Some(c[1].to_owned()),
                year: None,
                week: None,
            })
        },
    )
}

/// Fujitsu: `JAPAN DMG-GKX-0 D1 1P0 AK 9328 R09`
fn fujitsu() -> MatcherDef<MaskRom> {
    MatcherDef(
        r#"^JAPAN\ ((DMG|CGB)-[[:alnum:]]{3,4}-[0-9])\ [A-Z][0-9]\ [0-9][A-Z][[:alnum:]]\ [A-Z]{2}\ ([0-9]{2})([0-9]{2})\ [A-Z][0-9]{2}$"#,
        |c| {
            Ok(MaskRom {
                rom_code: c[1].to_owned(),
                manufacturer: Some(Manufacturer::Fujitsu),
                chip_type: None,
                year: Some(year2(&c[3])?),
                week: Some(week2(&c[4])?),
            })
        },
    )
}

/// Sharp prints a shortened part number; map it to the data book name.
fn map_sharp_mask_rom(code: &str) -> Option<&'static str> {
    match code {
        // Sharp Memory Data Book 1992
        "LH5359" => Some("LH53259"),
        "LH531H" => Some("LH530800A"),
        // unknown mask ROM listing scan
        "LH5317" => Some("LH53517"),
        // JEDEC-compatible guesses
        "LH5308" => Some("LH530800"),
        "LH5314" => Some("LH53514"),
        "LH5321" => Some("LH532100"),
        // 2Mb/4Mb/8Mb/16Mb parts with several candidates, left as printed
        _ => None,
    }
}

static MATCHER: Lazy<MatcherSet<MaskRom>> = Lazy::new(|| {
    MatcherSet::new(&[
        sharp(),
        sharp2(),
        sharp3(),
        macronix(),
        macronix2(),
        oki_msm538011e(),
        oki_mr531614g(),
        nec(),
        nec_like(),
        at_t(),
        smsc(),
        glop_top(),
        toshiba(),
        samsung(),
        samsung2(),
        fujitsu(),
    ])
});

/// Parse a cartridge mask ROM label.
pub fn parse_mask_rom(text: &str) -> Option<MaskRom> {
    MATCHER.apply(text)
}
