use crate::analysis::round_to_cents;

/// Dollar amount with thousands separators, `$0` when absent
pub fn format_amount(value: Option<f64>) -> String {
    let Some(value) = value else {
        return "$0".to_string();
    };

    let raw = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    };
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("${}{}.{}", sign, grouped, frac),
        None => format!("${}{}", sign, grouped),
    }
}

/// Percentage rounded to 2 decimals, whole numbers without a fraction (`-41%`, `12.35%`)
pub fn format_percentage(value: f64) -> String {
    format!("{}%", round_to_cents(value))
}

/// Large amounts in billions for compact tables
pub fn format_billions(value: f64) -> String {
    format!("${:.2}B", value / 1_000_000_000.0)
}
