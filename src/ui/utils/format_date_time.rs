use chrono::NaiveDateTime;

pub fn format_timestamp(date_time: NaiveDateTime) -> String {
    date_time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamps_render_in_iso_order() {
        let date_time = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap();
        assert_eq!(format_timestamp(date_time), "2026-03-14 09:26:53");
    }
}
