use mighty_types::{RoleRecord, ScoreRow, WinRatios};

/// Win percentage rounded to one decimal place, or `None` without games.
pub fn win_ratio(record: &RoleRecord) -> Option<f64> {
    let total = record.total();
    if total == 0 {
        return None;
    }

    let percent = f64::from(record.win) / f64::from(total) * 100.0;
    Some((percent * 10.0).round() / 10.0)
}

pub fn win_ratios(row: &ScoreRow) -> WinRatios {
    WinRatios {
        president: win_ratio(&row.president_record),
        friend: win_ratio(&row.friend_record),
        opposition: win_ratio(&row.opposition_record),
    }
}
