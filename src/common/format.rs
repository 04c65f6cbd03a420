/// Number formatting for metric cards and tables
pub mod helpers {
    /// Fixed decimals with `,` thousands separators, e.g. `61,000.50`
    pub fn format_thousands(value: f64, decimals: usize) -> String {
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let digits = int_part.len();
        let mut grouped = String::with_capacity(digits + digits / 3 + decimals + 2);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if let Some(frac_part) = frac_part {
            grouped.push('.');
            grouped.push_str(frac_part);
        }

        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        if value.is_sign_negative() && !is_zero {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Price with a dollar sign: `$61,000.50`
    pub fn format_usd(value: f64) -> String {
        format!("${}", format_thousands(value, 2))
    }

    pub fn format_percent(value: f64) -> String {
        format!("{:.2}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::helpers::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_thousands(0.0, 2), "0.00");
        assert_eq!(format_thousands(999.994, 2), "999.99");
        assert_eq!(format_thousands(999.995, 0), "1,000");
        assert_eq!(format_thousands(61000.5, 2), "61,000.50");
        assert_eq!(format_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands(-1234.5, 2), "-1,234.50");
        assert_eq!(format_thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn test_usd_and_percent() {
        assert_eq!(format_usd(61305.0), "$61,305.00");
        assert_eq!(format_percent(0.4992), "0.50%");
        assert_eq!(format_percent(-1.234), "-1.23%");
    }
}
