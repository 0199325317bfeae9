//! Display formatting shared by stat counters and cards

/// Форматирование чисел с разделителями триад (`12500` -> `12,500`)
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Stat counter text: formatted value plus suffix (`12,500+`)
pub fn format_stat(value: u64, suffix: &str) -> String {
    format!("{}{}", format_number(value), suffix)
}
