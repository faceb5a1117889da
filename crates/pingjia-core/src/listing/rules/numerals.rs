//! Chinese numeral conversion for floor tokens such as `十四層`.

/// Floor marker suffix.
pub const FLOOR_MARKER: char = '層';

fn digit_value(c: char) -> Option<u32> {
    match c {
        '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

/// Convert a Chinese numeral (optionally suffixed with `層`) to an integer.
///
/// Arabic numerals are returned as-is, saturating at `u32::MAX`. A bare `十`
/// or `百` counts as one ten or one hundred. Malformed input degrades to 0 or
/// a partial value.
pub fn chinese_to_number(s: &str) -> u32 {
    let trimmed = s.trim().trim_end_matches(FLOOR_MARKER).trim();
    if trimmed.is_empty() {
        return 0;
    }

    let leading_digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if !leading_digits.is_empty() {
        // Only overflow can fail here
        return leading_digits.parse::<u32>().unwrap_or(u32::MAX);
    }

    let mut result: u32 = 0;
    let mut current: u32 = 0;

    for c in trimmed.chars() {
        match c {
            '十' => {
                result = result.saturating_add(current.max(1) * 10);
                current = 0;
            }
            '百' => {
                result = result.saturating_add(current.max(1) * 100);
                current = 0;
            }
            _ => {
                if let Some(d) = digit_value(c) {
                    current = d;
                }
            }
        }
    }

    result.saturating_add(current)
}
