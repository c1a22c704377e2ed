//! Period expressions shared by `list`, `stats` and `export`.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

fn invalid(msg: impl Into<String>) -> AppError {
    AppError::InvalidRange(msg.into())
}

/// First and last day covered by a single period term.
///
/// - `YYYY`       → whole year
/// - `YYYY-MM`    → whole month
/// - `YYYY-MM-DD` → single day
fn bounds_of(term: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let term = term.trim();

    match term.len() {
        4 => {
            let y: i32 = term.parse().map_err(|_| invalid(format!("invalid year '{term}'")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid start date"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid end date"))?;
            Ok((d1, d2))
        }
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{term}-01"), "%Y-%m-%d")
                .map_err(|_| invalid(format!("invalid month '{term}'")))?;
            let (ny, nm) = if d1.month() == 12 {
                (d1.year() + 1, 1)
            } else {
                (d1.year(), d1.month() + 1)
            };
            let d2 = NaiveDate::from_ymd_opt(ny, nm, 1)
                .and_then(|d| d.pred_opt())
                .ok_or_else(|| invalid("invalid end date"))?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(term, "%Y-%m-%d")
                .map_err(|_| invalid(format!("invalid date '{term}'")))?;
            Ok((d, d))
        }
        _ => Err(invalid(format!("unsupported period format '{term}'"))),
    }
}

/// Parse a period expression into inclusive bounds.
///
/// Supports `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` with both sides
/// in the same shape. `all` returns `None` (no filtering).
pub fn parse_range(r: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let r = r.trim();

    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            if s.trim().len() != e.trim().len() {
                return Err(invalid("start and end must have same format"));
            }
            (bounds_of(s)?.0, bounds_of(e)?.1)
        }
        None => bounds_of(r)?,
    };

    if start > end {
        return Err(invalid(format!("range starts after it ends: {r}")));
    }

    Ok(Some((start, end)))
}
