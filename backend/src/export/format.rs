//! Human readable values for generated columns.

use crate::models::Dated;

use super::columns::Generated;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u8) -> Option<&'static str> {
    MONTHS.get(usize::from(month).checked_sub(1)?).copied()
}

/// Long manufacturing date: `Week 12/1996`, `March 1996` or `1996`.
///
/// Week wins over month when both are known. Nothing is generated without a
/// year.
pub fn calendar<T: Dated>(value: &T) -> Generated<String> {
    let Some(year) = value.year() else {
        return Generated::Missing;
    };
    let text = match (value.week(), value.month().and_then(month_name)) {
        (Some(week), _) => format!("Week {}/{}", week, year),
        (None, Some(month)) => format!("{} {}", month, year),
        (None, None) => year.to_string(),
    };
    Generated::Value(text)
}

/// Sortable manufacturing date: `1996/W12`, `1996/03` or `1996`.
pub fn short_calendar<T: Dated>(value: &T) -> Generated<String> {
    let Some(year) = value.year() else {
        return Generated::Missing;
    };
    let text = match (value.week(), value.month()) {
        (Some(week), _) => format!("{}/W{:02}", year, week),
        (None, Some(month)) => format!("{}/{:02}", year, month),
        (None, None) => year.to_string(),
    };
    Generated::Value(text)
}

/// Manufacturer codes used in submissions, sorted by code.
const MANUFACTURERS: [(&str, &str); 37] = [
    ("analog", "Analog Devices"),
    ("at-t", "AT&T Technologies"),
    ("bsi", "BSI"),
    ("crosslink", "Crosslink"),
    ("fujitsu", "Fujitsu"),
    ("hudson", "Hudson"),
    ("hynix", "Hynix"),
    ("hyundai", "Hyundai"),
    ("kds", "Daishinku"),
    ("kinseki", "Kinseki"),
    ("lgs", "Lucky GoldStar"),
    ("macronix", "Macronix"),
    ("mitsubishi", "Mitsubishi"),
    ("mitsumi", "Mitsumi"),
    ("mosel-vitelic", "Mosel Vitelic"),
    ("motorola", "Motorola"),
    ("nec", "NEC"),
    ("oki", "OKI Semiconductor"),
    ("rohm", "ROHM"),
    ("samsung", "Samsung"),
    ("sanyo", "Sanyo"),
    ("seiko", "Seiko"),
    ("sharp", "Sharp"),
    ("smsc", "Standard Microsystems"),
    ("sony", "Sony"),
    ("st", "STMicroelectronics"),
    ("tdk", "TDK"),
    ("texas-instruments", "Texas Instruments"),
    ("tms", "TMS"),
    ("toshiba", "Toshiba"),
    ("unknown", "Unknown"),
    ("victronix", "Victronix"),
    ("winbond", "Winbond"),
    ("xemics", "Xemics"),
    ("xilinx", "Xilinx"),
    ("yamaha", "Yamaha"),
    ("zilog", "Zilog"),
];

/// Full name of a manufacturer code, if known.
pub fn manufacturer_name(code: &str) -> Option<&'static str> {
    MANUFACTURERS
        .binary_search_by_key(&code, |(known, _)| *known)
        .ok()
        .map(|index| MANUFACTURERS[index].1)
}

/// Full manufacturer name for a stored manufacturer code.
///
/// Unknown codes pass through unchanged.
pub fn manufacturer(code: Option<&str>) -> Generated<String> {
    match code.map(str::trim) {
        None | Some("") => Generated::Missing,
        Some(code) => Generated::Value(
            manufacturer_name(code)
                .map(String::from)
                .unwrap_or_else(|| code.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chip;

    fn chip(year: Option<u16>, month: Option<u8>, week: Option<u8>) -> Chip {
        Chip { year, month, week, ..Chip::default() }
    }

    #[test]
    fn test_calendar_precedence() {
        let value = |c: &Chip| calendar(c).into_cell();
        assert_eq!(value(&chip(Some(1996), Some(3), Some(12))), "Week 12/1996");
        assert_eq!(value(&chip(Some(1996), Some(3), None)), "March 1996");
        assert_eq!(value(&chip(Some(1996), None, None)), "1996");
        assert_eq!(calendar(&chip(None, Some(3), Some(12))), Generated::Missing);
    }

    #[test]
    fn test_short_calendar_padding() {
        let value = |c: &Chip| short_calendar(c).into_cell();
        assert_eq!(value(&chip(Some(1990), None, Some(4))), "1990/W04");
        assert_eq!(value(&chip(Some(1990), Some(11), None)), "1990/11");
        assert_eq!(value(&chip(Some(1990), None, None)), "1990");
        assert_eq!(value(&chip(None, None, None)), "");
    }

    #[test]
    fn test_calendar_ignores_invalid_month_name() {
        assert_eq!(calendar(&chip(Some(1990), Some(13), None)).into_cell(), "1990");
    }

    #[test]
    fn test_manufacturer_names() {
        assert_eq!(manufacturer(Some("sharp")).into_cell(), "Sharp");
        assert_eq!(manufacturer(Some("at-t")).into_cell(), "AT&T Technologies");
        assert_eq!(manufacturer(Some("rohm")).into_cell(), "ROHM");
        assert_eq!(manufacturer(Some("kds")).into_cell(), "Daishinku");
        assert_eq!(manufacturer(Some("acme")).into_cell(), "acme");
        assert_eq!(manufacturer(Some("")), Generated::Missing);
        assert_eq!(manufacturer(None), Generated::Missing);
    }

    #[test]
    fn test_manufacturer_table_sorted() {
        assert!(MANUFACTURERS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_manufacturer_table_covers_label_makers() {
        use crate::parser::Manufacturer;

        for maker in Manufacturer::ALL {
            assert_eq!(manufacturer_name(maker.code()), Some(maker.name()));
        }
    }
}
