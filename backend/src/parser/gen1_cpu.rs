//! First generation CPUs: DMG-CPU (Game Boy) and SGB-CPU (Super Game Boy).

use once_cell::sync::Lazy;
use regex::Captures;
use serde::Serialize;

use super::{week2, year2_u16, MatcherDef, MatcherSet};
use crate::error::{LabelError, LabelResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Gen1CpuKind {
    Dmg0,
    DmgA,
    DmgB,
    DmgC,
    DmgBlobB,
    DmgBlobC,
    Sgb,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Gen1Cpu {
    pub kind: Gen1CpuKind,
    pub year: Option<u16>,
    pub week: Option<u8>,
}

fn revision(c: &Captures, group: usize, allowed: &str) -> LabelResult<Gen1CpuKind> {
    match c.get(group).map(|m| m.as_str().trim()) {
        None => Ok(Gen1CpuKind::Dmg0),
        Some(rev) if allowed.contains(rev) => match rev {
            "A" => Ok(Gen1CpuKind::DmgA),
            "B" => Ok(Gen1CpuKind::DmgB),
            "C" => Ok(Gen1CpuKind::DmgC),
            _ => Err(LabelError::UnknownPart(format!("DMG-CPU {}", rev))),
        },
        Some(rev) => Err(LabelError::UnknownPart(format!("DMG-CPU {}", rev))),
    }
}

/// Early CPU with the bare Sharp part number, e.g. `DMG-CPU LR35902 8907 D`
fn dmg_cpu_lr35902() -> MatcherDef<Gen1Cpu> {
    MatcherDef(
        r#"^DMG-CPU\ LR35902\ ([0-9]{2})([0-9]{2})\ [A-Z]$"#,
        |c| {
            Ok(Gen1Cpu {
                kind: Gen1CpuKind::Dmg0,
                year: Some(year2_u16(&c[1])?),
                week: Some(week2(&c[2])?),
            })
        },
    )
}

/// Standard label, e.g. `DMG-CPU B © 1989 Nintendo JAPAN 9207 D`
fn dmg_cpu() -> MatcherDef<Gen1Cpu> {
    MatcherDef(
        r#"^DMG-CPU(\ [ABC])?\ ©\ 1989\ Nintendo\ JAPAN\ ([0-9]{2})([0-9]{2})\ [A-Z]{1,2}$"#,
        |c| {
            Ok(Gen1Cpu {
                kind: revision(c, 1, "ABC")?,
                year: Some(year2_u16(&c[2])?),
                week: Some(week2(&c[3])?),
            })
        },
    )
}

/// Shortened form found in older submissions, e.g. `DMG-CPU A 8937 D`
fn dmg_cpu_deprecated() -> MatcherDef<Gen1Cpu> {
    MatcherDef(
        r#"^DMG-CPU(\ [A-B])?\ ([0-9]{2})([0-9]{2})\ [A-Z]{1,2}$"#,
        |c| {
            Ok(Gen1Cpu {
                kind: revision(c, 1, "AB")?,
                year: Some(year2_u16(&c[2])?),
                week: Some(week2(&c[3])?),
            })
        },
    )
}

/// Glop top CPU, only a revision letter is visible
fn dmg_cpu_blob() -> MatcherDef<Gen1Cpu> {
    MatcherDef(r#"^[BC]$"#, |c| {
        let kind = match &c[0] {
            "B" => Gen1CpuKind::DmgBlobB,
            "C" => Gen1CpuKind::DmgBlobC,
            text => return Err(LabelError::UnknownPart(text.to_owned())),
        };
        Ok(Gen1Cpu { kind, year: None, week: None })
    })
}

fn sgb_cpu() -> MatcherDef<Gen1Cpu> {
    MatcherDef(
        r#"^SGB-CPU\ 01\ ©\ 1994\ Nintendo\ Ⓜ\ 1989\ Nintendo\ JAPAN\ ([0-9]{2})([0-9]{2})\ [0-9]\ [A-Z]$"#,
        |c| {
            Ok(Gen1Cpu {
                kind: Gen1CpuKind::Sgb,
                year: Some(year2_u16(&c[1])?),
                week: Some(week2(&c[2])?),
            })
        },
    )
}

static MATCHER: Lazy<MatcherSet<Gen1Cpu>> = Lazy::new(|| {
    MatcherSet::new(&[
        dmg_cpu(),
        dmg_cpu_blob(),
        dmg_cpu_lr35902(),
        dmg_cpu_deprecated(),
        sgb_cpu(),
    ])
});

/// Parse a DMG-CPU or SGB-CPU label.
pub fn parse_gen1_cpu(text: &str) -> Option<Gen1Cpu> {
    MATCHER.apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lr35902() {
        let cpu = parse_gen1_cpu("DMG-CPU LR35902 8907 D").unwrap();
        assert_eq!(cpu.kind, Gen1CpuKind::Dmg0);
        assert_eq!(cpu.year, Some(1989));
        assert_eq!(cpu.week, Some(7));
    }

    #[test]
    fn test_dmg_cpu_revisions() {
        assert_eq!(
            parse_gen1_cpu("DMG-CPU © 1989 Nintendo JAPAN 8913 D").map(|c| c.kind),
            Some(Gen1CpuKind::Dmg0)
        );
        assert_eq!(
            parse_gen1_cpu("DMG-CPU A © 1989 Nintendo JAPAN 8937 D").map(|c| c.kind),
            Some(Gen1CpuKind::DmgA)
        );
        assert_eq!(
            parse_gen1_cpu("DMG-CPU B © 1989 Nintendo JAPAN 9207 D").map(|c| c.kind),
            Some(Gen1CpuKind::DmgB)
        );
        let c = parse_gen1_cpu("DMG-CPU C © 1989 Nintendo JAPAN 9835 D").unwrap();
        assert_eq!(c.kind, Gen1CpuKind::DmgC);
        assert_eq!(c.year, Some(1998));
        assert_eq!(c.week, Some(35));
    }

    #[test]
    fn test_deprecated_form() {
        assert_eq!(
            parse_gen1_cpu("DMG-CPU A 8937 D").map(|c| c.kind),
            Some(Gen1CpuKind::DmgA)
        );
        // revision C never used the short form
        assert!(parse_gen1_cpu("DMG-CPU C 9835 D").is_none());
    }

    #[test]
    fn test_blob() {
        assert_eq!(parse_gen1_cpu("B").map(|c| c.kind), Some(Gen1CpuKind::DmgBlobB));
        assert_eq!(parse_gen1_cpu("C").unwrap().year, None);
        assert!(parse_gen1_cpu("A").is_none());
    }

    #[test]
    fn test_sgb_cpu() {
        let cpu = parse_gen1_cpu("SGB-CPU 01 © 1994 Nintendo Ⓜ 1989 Nintendo JAPAN 9434 7 D").unwrap();
        assert_eq!(cpu.kind, Gen1CpuKind::Sgb);
        assert_eq!(cpu.year, Some(1994));
        assert_eq!(cpu.week, Some(34));
    }

    #[test]
    fn test_invalid_week_rejected() {
        assert!(parse_gen1_cpu("DMG-CPU LR35902 8960 D").is_none());
    }
}
