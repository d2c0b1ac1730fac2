//! Render the chat reply: a fixed Vietnamese template with `.`-grouped
//! currency figures.

use crate::message::ParsedInput;
use crate::revenue::RevenueBreakdown;

/// Group an integer with `.` every three digits: `1234567` -> `"1.234.567"`.
/// No decimals and no currency symbol; the template appends `đ` itself.
pub fn format_currency(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// The reply body for a successfully parsed message.
///
/// An absent date renders as an empty slot; nothing else changes.
pub fn render_report(input: &ParsedInput, breakdown: &RevenueBreakdown) -> String {
    format!(
        "Dạ anh Ba doanh thu Massage Royal An An ngày {} gồm:\n\
         \n\
         Tổng {} vé = {}đ\n\
         Tiền gốc: {}đ\n\
         Tiền ngọn NV: {}đ\n\
         Tip NV: {}đ\n\
         Tổng vé + tip: {}đ\n\
         Đã CK: {}đ\n\
         Còn lại tiền mặt: {}đ\n",
        input.date,
        breakdown.total_ve,
        format_currency(breakdown.total_revenue),
        format_currency(breakdown.tien_goc),
        format_currency(breakdown.tien_ngon_nv),
        format_currency(input.tip_nv),
        format_currency(breakdown.total_ve_tip),
        format_currency(input.da_ck),
        format_currency(breakdown.tien_mat),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revenue::calculate;

    #[test]
    fn test_format_currency_groups_with_dots() {
        assert_eq!(format_currency(1_234_567), "1.234.567");
        assert_eq!(format_currency(6_100_000), "6.100.000");
        assert_eq!(format_currency(1_000), "1.000");
    }

    #[test]
    fn test_format_currency_small_values_ungrouped() {
        assert_eq!(format_currency(0), "0");
        assert_eq!(format_currency(7), "7");
        assert_eq!(format_currency(999), "999");
    }

    #[test]
    fn test_format_currency_negative_keeps_sign() {
        assert_eq!(format_currency(-193_850_000), "-193.850.000");
        assert_eq!(format_currency(-1), "-1");
    }

    #[test]
    fn test_render_report_template() {
        let input = ParsedInput {
            date: "12/5".to_string(),
            dac_biet: 2,
            super_tt: 3,
            vip_tt: 1,
            super_bt: 0,
            tip_nv: 50_000,
            da_ck: 200_000,
        };
        let report = render_report(&input, &calculate(&input));

        assert!(report.starts_with("Dạ anh Ba doanh thu Massage Royal An An ngày 12/5 gồm:\n\n"));
        assert!(report.contains("Tổng 6 vé = 6.100.000đ\n"));
        assert!(report.contains("Tiền gốc: 3.800.000đ\n"));
        assert!(report.contains("Tiền ngọn NV: 2.300.000đ\n"));
        assert!(report.contains("Tip NV: 50.000đ\n"));
        assert!(report.contains("Tổng vé + tip: 6.150.000đ\n"));
        assert!(report.contains("Đã CK: 200.000đ\n"));
        assert!(report.ends_with("Còn lại tiền mặt: 5.950.000đ\n"));
    }

    #[test]
    fn test_render_report_empty_date() {
        let input = ParsedInput::default();
        let report = render_report(&input, &calculate(&input));
        assert!(report.contains("ngày  gồm:"));
        assert!(report.contains("Tổng 0 vé = 0đ"));
    }
}
