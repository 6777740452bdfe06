//! Display formatting shared by every table, card and modal

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters kept as-is in image file names
const FILE_NAME: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Indian digit grouping: last three digits, then pairs (1,23,45,678)
fn group_indian(mut n: u64) -> String {
    let last3 = n % 1000;
    n /= 1000;
    if n == 0 {
        return last3.to_string();
    }
    let mut pairs = Vec::new();
    while n > 0 {
        pairs.push(n % 100);
        n /= 100;
    }
    let mut out = String::new();
    for (i, pair) in pairs.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&pair.to_string());
        } else {
            out.push_str(&format!(",{:02}", pair));
        }
    }
    format!("{},{:03}", out, last3)
}

/// Minus sign for a negative amount, unless it rounds away to zero
fn sign(amount: f64, shown: u64) -> &'static str {
    if amount < 0.0 && shown > 0 {
        "-"
    } else {
        ""
    }
}

/// `₹1,23,456.00`
pub fn inr(amount: f64) -> String {
    let paise = (amount.abs() * 100.0).round() as u64;
    format!("{}₹{}.{:02}", sign(amount, paise), group_indian(paise / 100), paise % 100)
}

/// `₹1,23,456`, rounded to whole rupees
pub fn inr_grouped(amount: f64) -> String {
    let rupees = amount.abs().round() as u64;
    format!("{}₹{}", sign(amount, rupees), group_indian(rupees))
}

/// `₹123457`, rounded, no grouping
pub fn inr_rounded(amount: f64) -> String {
    let rupees = amount.abs().round() as u64;
    format!("{}₹{}", sign(amount, rupees), rupees)
}

/// `ac_repair` -> `Ac Repair`
pub fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// `out_for_delivery` -> `out for delivery`
pub fn humanize(raw: &str) -> String {
    raw.replace('_', " ")
}

/// `14:05` -> `2:05 PM`; anything unparseable is returned untouched
pub fn time_12h(raw: &str) -> String {
    let parsed = raw.split_once(':').and_then(|(h, rest)| {
        let minutes = rest.get(..2)?;
        let h: u32 = h.trim().parse().ok()?;
        let m: u32 = minutes.parse().ok()?;
        (h < 24 && m < 60).then_some((h, m))
    });
    match parsed {
        Some((h, m)) => {
            let suffix = if h >= 12 { "PM" } else { "AM" };
            let hour = match h % 12 {
                0 => 12,
                other => other,
            };
            format!("{}:{:02} {}", hour, m, suffix)
        }
        None => raw.to_string(),
    }
}

/// Cut to `max` characters and append `...` when longer
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{}...", head)
}

/// `123412341234` -> `XXXX XXXX 1234`; other inputs unchanged
pub fn mask_aadhaar(aadhaar: &str) -> String {
    if aadhaar.len() == 12 && aadhaar.is_ascii() {
        format!("XXXX XXXX {}", &aadhaar[8..])
    } else {
        aadhaar.to_string()
    }
}

/// Public URL for a stored image reference.
///
/// The backend sometimes stores full relative paths; only the final
/// component is served from the image directory.
pub fn image_url(base: &str, stored: &str) -> Option<String> {
    let name = stored.trim().rsplit(['/', '\\']).next().unwrap_or_default();
    if name.is_empty() {
        return None;
    }
    let encoded = utf8_percent_encode(name, FILE_NAME).to_string();
    if base.ends_with('/') {
        Some(format!("{}{}", base, encoded))
    } else {
        Some(format!("{}/{}", base, encoded))
    }
}

/// `-` for missing or blank values
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr() {
        assert_eq!(inr(123456.0), "₹1,23,456.00");
        assert_eq!(inr(0.5), "₹0.50");
        assert_eq!(inr(12345678.9), "₹1,23,45,678.90");
        assert_eq!(inr(999.999), "₹1,000.00");
        assert_eq!(inr_grouped(4500.0), "₹4,500");
        assert_eq!(inr_grouped(100000.0), "₹1,00,000");
        assert_eq!(inr_rounded(122.6), "₹123");
        assert_eq!(inr_rounded(-5.0), "-₹5");
        assert_eq!(inr_rounded(-0.3), "₹0");
        assert_eq!(inr_grouped(-0.3), "₹0");
        assert_eq!(inr(-0.004), "₹0.00");
        assert_eq!(inr(-0.25), "-₹0.25");
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(title_case("packers_movers"), "Packers Movers");
        assert_eq!(title_case("AC repair"), "Ac Repair");
        assert_eq!(humanize("out_for_delivery"), "out for delivery");
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("Pune")), "Pune");
    }

    #[test]
    fn test_time_12h() {
        assert_eq!(time_12h("14:05"), "2:05 PM");
        assert_eq!(time_12h("00:30"), "12:30 AM");
        assert_eq!(time_12h("12:00"), "12:00 PM");
        assert_eq!(time_12h("09:15:00"), "9:15 AM");
        assert_eq!(time_12h("later"), "later");
        assert_eq!(time_12h("25:00"), "25:00");
    }

    #[test]
    fn test_truncate() {
        let long = "a".repeat(45);
        assert_eq!(truncate(&long, 40), format!("{}...", "a".repeat(40)));
        assert_eq!(truncate("short", 40), "short");
        assert_eq!(truncate(&"é".repeat(41), 40).chars().count(), 43);
    }

    #[test]
    fn test_mask_aadhaar() {
        assert_eq!(mask_aadhaar("123456781234"), "XXXX XXXX 1234");
        assert_eq!(mask_aadhaar("1234"), "1234");
    }

    #[test]
    fn test_image_url() {
        let base = "/static/images/database_images/";
        assert_eq!(
            image_url(base, "static/uploads/my room.jpg").as_deref(),
            Some("/static/images/database_images/my%20room.jpg")
        );
        assert_eq!(image_url("/img", "a.png").as_deref(), Some("/img/a.png"));
        assert_eq!(image_url(base, "C:\\temp\\x.jpg").as_deref(), Some("/static/images/database_images/x.jpg"));
        assert_eq!(image_url(base, ""), None);
        assert_eq!(image_url(base, "dir/"), None);
    }
}
