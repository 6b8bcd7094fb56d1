//! Conversion configuration and validation.
//!
//! Holds the knobs a conversion run needs beyond the input file itself:
//! number formatting for the grid file, the symmetry-plane normal used when
//! mirroring, and the BEM table column names that drive strategy selection.

use crate::constants::{BEM_DIAMETER_KEY, DEFAULT_OUTPUT_EXTENSION, bem_columns};
use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number formatting used when serializing grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatFormat {
    /// Shortest round-trip representation, always with a fractional part;
    /// magnitudes below `1e-4` or from `1e16` up use a signed two-digit
    /// exponent (`6.123233995736766e-17`)
    #[default]
    Full,
    /// Fixed six decimals (`%f` style)
    Fixed6,
}

impl FloatFormat {
    /// Format a single coordinate value
    pub fn format(&self, value: f64) -> String {
        match self {
            FloatFormat::Full => format_shortest(value),
            FloatFormat::Fixed6 => format!("{:.6}", value),
        }
    }
}

fn format_shortest(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() {
        return format!("{}", value);
    }

    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let text = format!("{:e}", value);
        if let Some((mantissa, exponent)) = text.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{}e{}{:0>2}", mantissa, sign, digits);
        }
        return text;
    }

    let text = format!("{}", value);
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Cartesian axis of the output grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

/// Configuration for one conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Coordinate formatting in the grid file
    pub float_format: FloatFormat,

    /// Axis negated for mirrored stations
    pub symmetry_axis: Axis,

    /// BEM header key holding the rotor diameter
    pub diameter_key: String,

    /// BEM column holding the radial position fraction
    pub radius_column: String,

    /// BEM column holding the chord fraction
    pub chord_column: String,

    /// BEM column prefix identifying the twist angle; its presence selects
    /// the twisted rotor strategy
    pub twist_column: String,

    /// Extension given to default output paths
    pub output_extension: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            float_format: FloatFormat::Full,
            symmetry_axis: Axis::Y,
            diameter_key: BEM_DIAMETER_KEY.to_string(),
            radius_column: bem_columns::RADIUS.to_string(),
            chord_column: bem_columns::CHORD.to_string(),
            twist_column: bem_columns::TWIST.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Set the coordinate formatting
    pub fn with_float_format(mut self, float_format: FloatFormat) -> Self {
        self.float_format = float_format;
        self
    }

    /// Set the symmetry-plane normal
    pub fn with_symmetry_axis(mut self, axis: Axis) -> Self {
        self.symmetry_axis = axis;
        self
    }

    /// Set the twist column prefix
    pub fn with_twist_column(mut self, column: impl Into<String>) -> Self {
        self.twist_column = column.into();
        self
    }

    /// Set the diameter header key
    pub fn with_diameter_key(mut self, key: impl Into<String>) -> Self {
        self.diameter_key = key.into();
        self
    }

    /// Set the output extension
    pub fn with_output_extension(mut self, extension: impl Into<String>) -> Self {
        self.output_extension = extension.into();
        self
    }

    /// Check that every name the parsers rely on is usable
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("diameter_key", &self.diameter_key),
            ("radius_column", &self.radius_column),
            ("chord_column", &self.chord_column),
            ("twist_column", &self.twist_column),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(GridError::configuration(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        let extension = self.output_extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(GridError::configuration(format!(
                "Invalid output extension: '{}'",
                self.output_extension
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_format_keeps_fractional_part() {
        let format = FloatFormat::Full;
        assert_eq!(format.format(2.0), "2.0");
        assert_eq!(format.format(-5.0), "-5.0");
        assert_eq!(format.format(0.25), "0.25");
        assert_eq!(format.format(0.0), "0.0");
    }

    #[test]
    fn test_full_format_uses_exponent_outside_plain_range() {
        let format = FloatFormat::Full;
        assert_eq!(format.format(6.123233995736766e-17), "6.123233995736766e-17");
        assert_eq!(format.format(-2.5e-20), "-2.5e-20");
        assert_eq!(format.format(1e-5), "1e-05");
        assert_eq!(format.format(1e16), "1e+16");
        assert_eq!(format.format(1e-4), "0.0001");
        assert_eq!(format.format(1234.5), "1234.5");
    }

    #[test]
    fn test_fixed6_format() {
        let format = FloatFormat::Fixed6;
        assert_eq!(format.format(2.0), "2.000000");
        assert_eq!(format.format(-0.1234567), "-0.123457");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ConverterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.symmetry_axis, Axis::Y);
        assert_eq!(config.float_format, FloatFormat::Full);
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = ConverterConfig::default()
            .with_float_format(FloatFormat::Fixed6)
            .with_symmetry_axis(Axis::Z)
            .with_twist_column("Pitch")
            .with_output_extension("xyz");

        assert_eq!(config.float_format, FloatFormat::Fixed6);
        assert_eq!(config.symmetry_axis, Axis::Z);
        assert_eq!(config.twist_column, "Pitch");
        assert_eq!(config.output_extension, "xyz");
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let config = ConverterConfig::default().with_diameter_key("  ");
        assert!(matches!(
            config.validate(),
            Err(GridError::Configuration { .. })
        ));

        let config = ConverterConfig::default().with_output_extension("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{ "float_format": "fixed6", "symmetry_axis": "z" }"#)
                .unwrap();

        assert_eq!(config.float_format, FloatFormat::Fixed6);
        assert_eq!(config.symmetry_axis, Axis::Z);
        assert_eq!(config.radius_column, "Radius/R");
        assert_eq!(config.diameter_key, "Diameter");
    }
}
