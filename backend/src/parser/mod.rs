//! Chip label parsers.
//!
//! A label is the text printed on top of a chip package, e.g.
//! `DMG-CPU B © 1989 Nintendo JAPAN 9207 D`. Each chip family has a set of
//! known label layouts; a [`MatcherSet`] tries them in order and returns the
//! first one that both matches and yields valid fields.
//!
//! Patterns are compiled whitespace-insensitive, so a literal space must be
//! written as `\ `.

pub mod gen1_cpu;
pub mod mask_rom;

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LabelError, LabelResult};

pub use gen1_cpu::{parse_gen1_cpu, Gen1Cpu, Gen1CpuKind};
pub use mask_rom::{parse_mask_rom, MaskRom};

/// One label layout: a pattern and the conversion of its captures.
pub struct MatcherDef<T>(pub &'static str, pub fn(&Captures) -> LabelResult<T>);

/// Ordered set of compiled label layouts.
pub struct MatcherSet<T> {
    matchers: Vec<(Regex, fn(&Captures) -> LabelResult<T>)>,
}

impl<T> MatcherSet<T> {
    /// Compile all layouts.
    ///
    /// # Panics
    /// Panics if a pattern is not a valid regex.
    pub fn new(defs: &[MatcherDef<T>]) -> Self {
        let matchers = defs
            .iter()
            .map(|MatcherDef(pattern, f)| {
                let regex = RegexBuilder::new(pattern)
                    .ignore_whitespace(true)
                    .build()
                    .unwrap_or_else(|e| panic!("invalid label pattern {}: {}", pattern, e));
                (regex, *f)
            })
            .collect();
        Self { matchers }
    }

    /// Parse `text` with the first layout that accepts it.
    pub fn apply(&self, text: &str) -> Option<T> {
        self.matchers.iter().find_map(|(regex, f)| {
            regex.captures(text).and_then(|c| f(&c).ok())
        })
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

// =============================================================================
// Dates
// =============================================================================

/// Manufacturing year as printed on a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Year {
    /// Full year, e.g. 1996
    Full(u16),
    /// Last digit only; the decade is not printed
    Partial(u8),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Full(year) => write!(f, "{}", year),
            Year::Partial(digit) => write!(f, "xxx{}", digit),
        }
    }
}

fn parse_number<N: std::str::FromStr>(field: &'static str, text: &str) -> LabelResult<N> {
    text.parse::<N>().map_err(|_| LabelError::OutOfRange {
        field,
        value: text.to_owned(),
    })
}

/// Single-digit year
pub fn year1(text: &str) -> LabelResult<Year> {
    if text.len() != 1 {
        return Err(LabelError::OutOfRange { field: "year", value: text.to_owned() });
    }
    parse_number("year", text).map(Year::Partial)
}

/// Two-digit year. Game Boy production starts in 1988.
pub fn year2(text: &str) -> LabelResult<Year> {
    year2_u16(text).map(Year::Full)
}

pub fn year2_u16(text: &str) -> LabelResult<u16> {
    if text.len() != 2 {
        return Err(LabelError::OutOfRange { field: "year", value: text.to_owned() });
    }
    let value: u16 = parse_number("year", text)?;
    Ok(if value >= 88 { 1900 + value } else { 2000 + value })
}

pub fn week2(text: &str) -> LabelResult<u8> {
    let value: u8 = parse_number("week", text)?;
    if (1..=53).contains(&value) {
        Ok(value)
    } else {
        Err(LabelError::OutOfRange { field: "week", value: text.to_owned() })
    }
}

pub fn month2(text: &str) -> LabelResult<u8> {
    let value: u8 = parse_number("month", text)?;
    if (1..=12).contains(&value) {
        Ok(value)
    } else {
        Err(LabelError::OutOfRange { field: "month", value: text.to_owned() })
    }
}

// =============================================================================
// Manufacturers
// =============================================================================

/// Chip manufacturer.
///
/// Submissions store the short [`code`](Manufacturer::code); exports show the
/// [`name`](Manufacturer::name).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Manufacturer {
    AtT,
    Fujitsu,
    Macronix,
    Nec,
    Oki,
    Samsung,
    Sharp,
    Smsc,
    Toshiba,
}

impl Manufacturer {
    pub const ALL: [Manufacturer; 9] = [
        Manufacturer::AtT,
        Manufacturer::Fujitsu,
        Manufacturer::Macronix,
        Manufacturer::Nec,
        Manufacturer::Oki,
        Manufacturer::Samsung,
        Manufacturer::Sharp,
        Manufacturer::Smsc,
        Manufacturer::Toshiba,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Manufacturer::AtT => "at-t",
            Manufacturer::Fujitsu => "fujitsu",
            Manufacturer::Macronix => "macronix",
            Manufacturer::Nec => "nec",
            Manufacturer::Oki => "oki",
            Manufacturer::Samsung => "samsung",
            Manufacturer::Sharp => "sharp",
            Manufacturer::Smsc => "smsc",
            Manufacturer::Toshiba => "toshiba",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Manufacturer::AtT => "AT&T Technologies",
            Manufacturer::Fujitsu => "Fujitsu",
            Manufacturer::Macronix => "Macronix",
            Manufacturer::Nec => "NEC",
            Manufacturer::Oki => "OKI Semiconductor",
            Manufacturer::Samsung => "Samsung",
            Manufacturer::Sharp => "Sharp",
            Manufacturer::Smsc => "Standard Microsystems",
            Manufacturer::Toshiba => "Toshiba",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year2_century() {
        assert_eq!(year2("89").unwrap(), Year::Full(1989));
        assert_eq!(year2("02").unwrap(), Year::Full(2002));
        assert_eq!(year2_u16("88").unwrap(), 1988);
        assert!(year2("9").is_err());
    }

    #[test]
    fn test_year1_partial() {
        assert_eq!(year1("9").unwrap(), Year::Partial(9));
        assert_eq!(year1("9").unwrap().to_string(), "xxx9");
        assert!(year1("90").is_err());
    }

    #[test]
    fn test_week_range() {
        assert_eq!(week2("07").unwrap(), 7);
        assert_eq!(week2("53").unwrap(), 53);
        assert!(week2("00").is_err());
        assert!(week2("54").is_err());
    }

    #[test]
    fn test_month_range() {
        assert_eq!(month2("12").unwrap(), 12);
        assert!(month2("13").is_err());
    }

    #[test]
    fn test_manufacturer_codes() {
        for m in Manufacturer::ALL {
            assert_eq!(Manufacturer::from_code(m.code()), Some(m));
        }
        assert_eq!(Manufacturer::from_code("unknown"), None);
        assert_eq!(Manufacturer::Smsc.name(), "Standard Microsystems");
    }

    #[test]
    fn test_matcher_set_takes_first_valid() {
        let set: MatcherSet<u8> = MatcherSet::new(&[
            MatcherDef(r#"^W([0-9]{2})$"#, |c| week2(&c[1])),
            MatcherDef(r#"^W([0-9]+)$"#, |_| Ok(0)),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.apply("W12"), Some(12));
        // First layout matches but rejects week 99, second one accepts
        assert_eq!(set.apply("W99"), Some(0));
        assert_eq!(set.apply("X12"), None);
    }

    #[test]
    fn test_escaped_space_in_pattern() {
        let set: MatcherSet<()> = MatcherSet::new(&[MatcherDef(r#"^A\ B$"#, |_| Ok(()))]);
        assert!(set.apply("A B").is_some());
        assert!(set.apply("AB").is_none());
    }
}
