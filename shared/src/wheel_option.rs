use serde::{Serialize, Deserialize};

use crate::error::{Result, WheelError};
use crate::segments::total_weight;
use crate::validation::{validate_color, validate_label, validate_total_weight, validate_weight};

/// Minimum number of options a wheel needs before it can spin.
pub const MIN_OPTIONS: usize = 2;

/// Shown in place of an option whose label is blank.
pub const UNNAMED_LABEL: &str = "(unnamed)";

/// One labeled, weighted, colored slice of the wheel.
///
/// Options have no identity of their own: they are addressed by their index
/// in the owning list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelOption {
    pub label: String,
    pub weight: f64,
    pub color: String,
}

impl WheelOption {
    /// Builds a validated option. The label is trimmed.
    pub fn new(label: &str, weight: f64, color: &str) -> Result<Self> {
        validate_label(label)?;
        validate_weight(weight)?;
        validate_color(color)?;
        Ok(Self {
            label: label.trim().to_string(),
            weight,
            color: color.to_string(),
        })
    }

    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            UNNAMED_LABEL
        } else {
            &self.label
        }
    }
}

/// The list a fresh or reset wheel starts with.
pub fn initial_options() -> Vec<WheelOption> {
    vec![
        WheelOption {
            label: "Option 1".to_string(),
            weight: 1.0,
            color: "#E63946".to_string(),
        },
        WheelOption {
            label: "Option 2".to_string(),
            weight: 1.0,
            color: "#F77F00".to_string(),
        },
    ]
}

/// Fields of an option that can be edited in place.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionEdit {
    Label(String),
    Weight(f64),
    Color(String),
}

fn check_index(options: &[WheelOption], index: usize) -> Result<()> {
    if index >= options.len() {
        return Err(WheelError::IndexOutOfRange { index, len: options.len() });
    }
    Ok(())
}

pub fn add_option(options: &mut Vec<WheelOption>, option: WheelOption) -> Result<()> {
    validate_label(&option.label)?;
    validate_weight(option.weight)?;
    validate_color(&option.color)?;
    validate_total_weight(total_weight(options) + option.weight)?;
    options.push(option);
    Ok(())
}

/// Applies `edit` to the option at `index`. Nothing changes when the new value is invalid.
pub fn edit_option(options: &mut [WheelOption], index: usize, edit: OptionEdit) -> Result<()> {
    check_index(options, index)?;
    match edit {
        OptionEdit::Label(label) => {
            validate_label(&label)?;
            options[index].label = label.trim().to_string();
        }
        OptionEdit::Weight(weight) => {
            validate_weight(weight)?;
            let others: f64 = options
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != index)
                .map(|(_, opt)| opt.weight)
                .sum();
            validate_total_weight(others + weight)?;
            options[index].weight = weight;
        }
        OptionEdit::Color(color) => {
            validate_color(&color)?;
            options[index].color = color;
        }
    }
    Ok(())
}

/// Checks a whole list, e.g. one read back from storage: enough options,
/// every field valid and a finite total weight.
pub fn check_options(options: &[WheelOption]) -> Result<()> {
    if options.len() < MIN_OPTIONS {
        return Err(WheelError::TooFewOptions { min: MIN_OPTIONS });
    }
    for option in options {
        validate_weight(option.weight)?;
        validate_color(&option.color)?;
    }
    validate_total_weight(total_weight(options))?;
    Ok(())
}

/// Removes the option at `index`, refusing to go below [`MIN_OPTIONS`].
pub fn remove_option(options: &mut Vec<WheelOption>, index: usize) -> Result<WheelOption> {
    check_index(options, index)?;
    if options.len() <= MIN_OPTIONS {
        log::warn!("refusing to remove option {}: list already at minimum", index);
        return Err(WheelError::TooFewOptions { min: MIN_OPTIONS });
    }
    Ok(options.remove(index))
}

/// True if another option (other than `except`) already uses `color`.
pub fn color_in_use(options: &[WheelOption], color: &str, except: Option<usize>) -> bool {
    options
        .iter()
        .enumerate()
        .any(|(i, opt)| Some(i) != except && opt.color.eq_ignore_ascii_case(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::compute_segments;
    use crate::validation::parse_weight;

    fn three() -> Vec<WheelOption> {
        let mut options = initial_options();
        options.push(WheelOption::new("Tacos", 2.0, "#06D6A0").unwrap());
        options
    }

    #[test]
    fn test_new_trims_and_validates() {
        let opt = WheelOption::new("  Sushi ", 1.5, "#118AB2").unwrap();
        assert_eq!(opt.label, "Sushi");
        assert!(matches!(
            WheelOption::new("  ", 1.0, "#118AB2"),
            Err(WheelError::InvalidField(_))
        ));
        assert!(WheelOption::new("x", 0.0, "#118AB2").is_err());
        assert!(WheelOption::new("x", 1.0, "blue").is_err());
    }

    #[test]
    fn test_initial_options() {
        let options = initial_options();
        assert_eq!(options.len(), MIN_OPTIONS);
        assert!(options.iter().all(|o| o.weight == 1.0));
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut options = initial_options();
        let bad = WheelOption { label: "x".into(), weight: -1.0, color: "#000000".into() };
        assert!(add_option(&mut options, bad).is_err());
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_edit_in_place() {
        let mut options = three();
        edit_option(&mut options, 2, OptionEdit::Weight(4.0)).unwrap();
        edit_option(&mut options, 0, OptionEdit::Label(" Burgers ".into())).unwrap();
        edit_option(&mut options, 1, OptionEdit::Color("#8338EC".into())).unwrap();
        assert_eq!(options[2].weight, 4.0);
        assert_eq!(options[0].label, "Burgers");
        assert_eq!(options[1].color, "#8338EC");

        assert!(edit_option(&mut options, 2, OptionEdit::Weight(0.0)).is_err());
        assert_eq!(options[2].weight, 4.0);
        assert_eq!(
            edit_option(&mut options, 7, OptionEdit::Weight(1.0)),
            Err(WheelError::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_total_weight_overflow_rejected() {
        let huge = parse_weight("1e308").unwrap();
        let mut options = initial_options();
        add_option(&mut options, WheelOption::new("big", huge, "#118AB2").unwrap()).unwrap();
        assert!(matches!(
            add_option(&mut options, WheelOption::new("bigger", huge, "#8338EC").unwrap()),
            Err(WheelError::InvalidField(_))
        ));
        assert_eq!(options.len(), 3);

        assert!(matches!(
            edit_option(&mut options, 0, OptionEdit::Weight(huge)),
            Err(WheelError::InvalidField(_))
        ));
        assert_eq!(options[0].weight, 1.0);
        // replacing the big weight itself is fine
        edit_option(&mut options, 2, OptionEdit::Weight(huge / 2.0)).unwrap();
        assert!(!compute_segments(&options, 0.0).is_empty());
    }

    #[test]
    fn test_check_options() {
        assert!(check_options(&three()).is_ok());
        assert_eq!(
            check_options(&three()[..1]),
            Err(WheelError::TooFewOptions { min: MIN_OPTIONS })
        );

        // each weight valid on its own, but the sum overflows
        let mut stored = initial_options();
        for opt in &mut stored {
            opt.weight = 1e308;
        }
        assert!(matches!(check_options(&stored), Err(WheelError::InvalidField(_))));

        let mut stored = three();
        stored[1].color = "red".into();
        assert!(check_options(&stored).is_err());
    }

    #[test]
    fn test_remove_keeps_minimum() {
        let mut options = three();
        let removed = remove_option(&mut options, 0).unwrap();
        assert_eq!(removed.label, "Option 1");
        assert_eq!(
            remove_option(&mut options, 0),
            Err(WheelError::TooFewOptions { min: MIN_OPTIONS })
        );
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_color_in_use() {
        let options = three();
        assert!(color_in_use(&options, "#e63946", None));
        assert!(!color_in_use(&options, "#E63946", Some(0)));
        assert!(!color_in_use(&options, "#123456", None));
    }

    #[test]
    fn test_display_label_placeholder() {
        let opt = WheelOption { label: " ".into(), weight: 1.0, color: "#000000".into() };
        assert_eq!(opt.display_label(), UNNAMED_LABEL);
    }
}
