pub mod format_date_time;
