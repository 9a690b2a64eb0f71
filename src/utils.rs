pub mod exchange_rate;

pub fn convert_amount(value: f64, rate: f64) -> f64 {
    value * rate
}

/// Rounds the exact decimal value of `amount` to `decimals` places, ties to even.
///
/// `2.675` is stored as `2.67499...` and rounds to `2.67`; `90.125` is an exact
/// tie and rounds to `90.12`. Non-finite amounts are rejected.
pub fn round_to_decimals(amount: f64, decimals: u32) -> Result<f64, String> {
    if !amount.is_finite() {
        return Err(format!("conversion result is not a finite number: {}", amount));
    }
    format!("{:.*}", decimals as usize, amount)
        .parse::<f64>()
        .map_err(|e| format!("failed to round {}: {}", amount, e))
}

pub fn validate_currency_code(name: &str, code: &str) -> Result<(), String> {
    if code.is_empty() {
        return Err(format!("`{}` must be a non-empty currency code", name));
    }
    Ok(())
}

pub fn validate_amount(value: f64) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("`value` must be a number greater than 0, got {}", value));
    }
    Ok(())
}
