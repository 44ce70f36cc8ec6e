use chrono::NaiveDate;

/// Resolve the century band encoded in the month field.
///
/// PESEL packs the century into the month digits: 1900s use the plain
/// month, later centuries add 20/40/60, and the 1800s add 80. Returns
/// `(year, month)` or `None` when the field is in no band.
pub fn decode_year_month(yy: u32, mm: u32) -> Option<(i32, u32)> {
    let (base, month) = match mm {
        1..=12 => (1900, mm),
        21..=32 => (2000, mm - 20),
        41..=52 => (2100, mm - 40),
        61..=72 => (2200, mm - 60),
        81..=92 => (1800, mm - 80),
        _ => return None,
    };
    Some((base + yy as i32, month))
}

/// Build the birth date, or `None` when the day does not exist in the
/// decoded month (Feb 30 and the like).
pub fn birth_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
