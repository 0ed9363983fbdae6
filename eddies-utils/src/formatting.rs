/// Format the time left on a shift, rounded up to the whole minute a chat
/// message can usefully show. A remainder that rounds to 60 minutes rolls
/// into the next hour.
pub fn format_remaining_shift(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let mut hours = total_seconds / 3_600;
    let mut minutes = ((total_seconds % 3_600) as u64).div_ceil(60) as i64;

    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::format_remaining_shift;

    #[test]
    fn rounds_seconds_up_to_the_minute() {
        assert_eq!(format_remaining_shift(0), "0h 0m");
        assert_eq!(format_remaining_shift(1), "0h 1m");
        assert_eq!(format_remaining_shift(60), "0h 1m");
        assert_eq!(format_remaining_shift(61), "0h 2m");
    }

    #[test]
    fn sixty_minutes_roll_into_an_hour() {
        assert_eq!(format_remaining_shift(3_599), "1h 0m");
        assert_eq!(format_remaining_shift(3 * 3_600 + 59 * 60 + 1), "4h 0m");
    }

    #[test]
    fn whole_shift_reads_as_four_hours() {
        assert_eq!(format_remaining_shift(4 * 3_600), "4h 0m");
        assert_eq!(format_remaining_shift(3 * 3_600 + 30 * 60), "3h 30m");
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(format_remaining_shift(-30), "0h 0m");
    }
}
