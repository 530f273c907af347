use crate::models::{Product, Suggestion, MAX_RATING};

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// `rating` filled stars followed by empty ones, five in total.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let mut out = String::with_capacity(MAX_RATING as usize * FILLED_STAR.len_utf8());
    out.extend(std::iter::repeat(FILLED_STAR).take(filled));
    out.extend(std::iter::repeat(EMPTY_STAR).take(MAX_RATING as usize - filled));
    out
}

/// Whole pesos with `.` as thousands separator: `$12.990 CLP`.
pub fn price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };

    format!("{}${} CLP", sign, grouped)
}

pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn suggestion(suggestion: &Suggestion) -> String {
    let mut out = format!(
        "{} {}  {} • {}",
        stars(suggestion.rating),
        suggestion.id,
        suggestion.name,
        suggestion.created_at.format("%Y-%m-%d %H:%M"),
    );
    if !suggestion.title.is_empty() {
        out.push_str(&format!("\n    {}", suggestion.title));
    }
    out.push_str(&format!("\n    {}", suggestion.message));
    out
}

pub fn product(product: &Product) -> String {
    format!(
        "{:<6} {:<30} {:>16}  stock: {}",
        product.id.to_string(),
        truncate(&product.name, 28),
        price(product.price),
        product.stock,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;
    use chrono::TimeZone;

    #[test]
    fn stars_fill_from_the_left() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn price_groups_thousands() {
        assert_eq!(price(990), "$990 CLP");
        assert_eq!(price(12990), "$12.990 CLP");
        assert_eq!(price(1_250_000), "$1.250.000 CLP");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Taza", 10), "Taza");
        assert_eq!(truncate("Taza de cerámica", 6), "Taza …");
    }

    #[test]
    fn suggestion_lists_title_only_when_present() {
        let mut s = Suggestion {
            id: RecordId::Remote(4),
            name: "Ana".to_string(),
            title: String::new(),
            message: "Abrir los domingos".to_string(),
            rating: 4,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        };
        assert_eq!(
            suggestion(&s),
            "★★★★☆ 4  Ana • 2024-03-01 10:00\n    Abrir los domingos"
        );

        s.title = "Horario".to_string();
        assert!(suggestion(&s).contains("\n    Horario\n"));
    }
}
