use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::new("empty_label"));
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ValidationError::new("invalid_weight"));
    }
    Ok(())
}

pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(ValidationError::new("invalid_color"));
    }
    Ok(())
}

/// Segment angles are weight / total, so the sum of all weights has to stay finite.
pub fn validate_total_weight(total: f64) -> Result<(), ValidationError> {
    if !total.is_finite() {
        return Err(ValidationError::new("total_weight_overflow"));
    }
    Ok(())
}

/// Parses a weight typed into a form field.
pub fn parse_weight(input: &str) -> Result<f64, ValidationError> {
    let weight = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::new("invalid_weight"))?;
    validate_weight(weight)?;
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_must_have_text() {
        assert!(validate_label("pizza").is_ok());
        assert!(validate_label("   ").is_err());
        assert!(validate_label("").is_err());
    }

    #[test]
    fn test_weight_must_be_positive_and_finite() {
        assert!(validate_weight(0.1).is_ok());
        assert!(validate_weight(0.0).is_err());
        assert!(validate_weight(-2.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_color_format() {
        assert!(validate_color("#E63946").is_ok());
        assert!(validate_color("#e63946").is_ok());
        assert!(validate_color("E63946").is_err());
        assert!(validate_color("#E6394").is_err());
        assert!(validate_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_total_weight_must_be_finite() {
        assert!(validate_total_weight(3.5).is_ok());
        assert!(validate_total_weight(1e308 + 1e308).is_err());
        assert!(validate_total_weight(f64::NAN).is_err());
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight(" 1.5 ").unwrap(), 1.5);
        assert!(parse_weight("abc").is_err());
        assert!(parse_weight("0").is_err());
    }
}
