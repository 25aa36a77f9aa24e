use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a hex grid. Two grids built from the same config
/// will always be identical: same IDs, same centers, same neighbors.
///
/// Configs are validated when a grid is built, see
/// [HexGrid::new](crate::HexGrid::new). Layer counts can't be negative or
/// fractional by construction, since they're stored as unsigned integers.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_not_nan"))]
pub struct GridConfig {
    /// Number of rings around the center hexagon. With 0 layers, the grid is
    /// just the center hexagon. Each layer `L` adds `6L` hexagons.
    #[validate(range(min = 0, max = 10000))]
    pub layers: u16,

    /// Linear size multiplier for hexagon geometry. With a scale of 1.0, two
    /// adjacent hexagon centers are exactly 1.0 apart horizontally. Must be
    /// positive.
    #[validate(range(min = 0.001, max = 1000000.0))]
    pub scale: f64,

    /// Vertical stretch factor applied to hexagon geometry. 1.0 gives regular
    /// hexagons, anything else squishes or stretches them along the y axis.
    /// Must be positive.
    #[validate(range(min = 0.001, max = 1000000.0))]
    pub skew: f64,
}

impl GridConfig {
    /// Create a config with the given number of layers, and unit scale and
    /// skew.
    pub fn new(layers: u16) -> Self {
        Self {
            layers,
            ..Default::default()
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layers: 10,
            scale: 1.0,
            skew: 1.0,
        }
    }
}

/// Range checks let NaN through, since every comparison with NaN is false
fn validate_not_nan(config: &GridConfig) -> Result<(), ValidationError> {
    if config.scale.is_nan() || config.skew.is_nan() {
        Err(ValidationError::new("nan"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens, assert_de_tokens_error, Token};

    #[test]
    fn test_validate_default() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(GridConfig::new(0).validate().is_ok());
    }

    #[test]
    fn test_validate_scale() {
        for scale in [0.0, -1.0, 0.0005, f64::INFINITY] {
            let config = GridConfig {
                scale,
                ..Default::default()
            };
            let errors = config.validate().unwrap_err();
            assert!(
                errors.errors().contains_key("scale"),
                "scale {} should be invalid, got {:?}",
                scale,
                errors
            );
        }
    }

    #[test]
    fn test_validate_nan() {
        let config = GridConfig {
            skew: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    /// Missing fields fall back to the defaults
    #[test]
    fn test_deserialize_partial() {
        assert_de_tokens(
            &GridConfig {
                layers: 3,
                scale: 1.0,
                skew: 1.0,
            },
            &[
                Token::Struct {
                    name: "GridConfig",
                    len: 1,
                },
                Token::Str("layers"),
                Token::U16(3),
                Token::StructEnd,
            ],
        );
    }

    /// Negative layer counts can't even be represented
    #[test]
    fn test_deserialize_negative_layers() {
        assert_de_tokens_error::<GridConfig>(
            &[
                Token::Struct {
                    name: "GridConfig",
                    len: 1,
                },
                Token::Str("layers"),
                Token::I32(-1),
                Token::StructEnd,
            ],
            "invalid value: integer `-1`, expected u16",
        );
    }
}
