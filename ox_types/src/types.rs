//! The contract every type handler implements.
//!
//! Both conversions are required. A handler that leaves one out is
//! rejected by the compiler rather than failing when first called:
//!
//! ```compile_fail
//! use ox_types::{Conversion, Type};
//!
//! struct Half;
//!
//! impl Type for Half {
//!     fn name(&self) -> &str {
//!         "half"
//!     }
//!
//!     fn parse(&self, input: &str) -> Conversion {
//!         Conversion::new(input)
//!     }
//! }
//! ```

use serde_json::Value;

use crate::conversion::Conversion;
use crate::error::TypeError;
use crate::spec::describe;

/// Converts between strings and values of one kind.
///
/// Most types are static (there is only one kind of `text`), but families
/// such as `selection` are configured per use. The name identifies the
/// family only, so two handlers may share a name and still behave
/// differently.
///
/// Where it makes sense, `parse(stringify(v))` should give back a valid
/// conversion holding `v`. [`check_round_trip`] tests that for one value.
pub trait Type: Send + Sync {
    /// The registry key for this type.
    fn name(&self) -> &str;

    /// Renders `value` as a string. A value this type never produces is a
    /// caller error.
    fn stringify(&self, value: &Value) -> Result<String, TypeError>;

    /// Converts `input` into a value. Input that does not convert is
    /// reported through the returned status, never as an error.
    fn parse(&self, input: &str) -> Conversion;
}

impl<'a> std::fmt::Debug for dyn Type + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Type").field("name", &self.name()).finish()
    }
}

/// Error for a [`Type::stringify`] call given a value of the wrong shape.
pub fn unexpected_value(ty: &dyn Type, value: &Value) -> TypeError {
    TypeError::UnexpectedValue {
        type_name: ty.name().to_string(),
        found: describe(value).to_string(),
    }
}

/// Stringifies `value` with `ty`, parses the result back and checks that
/// the same value comes out as a valid conversion.
pub fn check_round_trip(ty: &dyn Type, value: &Value) -> Result<(), TypeError> {
    let text = ty.stringify(value)?;
    let conversion = ty.parse(&text);

    if !conversion.is_valid() {
        return Err(TypeError::RoundTrip {
            type_name: ty.name().to_string(),
            detail: format!(
                "'{}' parsed as {}{}",
                text,
                conversion.status(),
                conversion
                    .message()
                    .map(|m| format!(" ({})", m))
                    .unwrap_or_default()
            ),
        });
    }

    if conversion.value() != value {
        return Err(TypeError::RoundTrip {
            type_name: ty.name().to_string(),
            detail: format!("expected {}, got {}", value, conversion.value()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;
    use serde_json::json;

    struct Integer;

    impl Type for Integer {
        fn name(&self) -> &str {
            "integer"
        }

        fn stringify(&self, value: &Value) -> Result<String, TypeError> {
            value
                .as_i64()
                .map(|n| n.to_string())
                .ok_or_else(|| unexpected_value(self, value))
        }

        fn parse(&self, input: &str) -> Conversion {
            if input.is_empty() || input == "-" {
                return Conversion::incomplete("enter a number");
            }
            match input.parse::<i64>() {
                Ok(n) => Conversion::new(n),
                Err(e) => Conversion::invalid(format!("'{}' is not an integer: {}", input, e)),
            }
        }
    }

    /// Accepts anything but always parses to the same value.
    struct Lossy;

    impl Type for Lossy {
        fn name(&self) -> &str {
            "lossy"
        }

        fn stringify(&self, value: &Value) -> Result<String, TypeError> {
            Ok(value.to_string())
        }

        fn parse(&self, _input: &str) -> Conversion {
            Conversion::new(0)
        }
    }

    #[test]
    fn test_parse_reports_status() {
        assert_eq!(Integer.parse("12").status(), Status::Valid);
        assert_eq!(Integer.parse("-").status(), Status::Incomplete);
        assert_eq!(Integer.parse("x1").status(), Status::Invalid);
        assert!(Integer.parse("x1").message().is_some());
    }

    #[test]
    fn test_stringify_wrong_shape() {
        let err = Integer.stringify(&json!("12")).unwrap_err();
        assert_eq!(
            err,
            TypeError::UnexpectedValue {
                type_name: "integer".to_string(),
                found: "a string".to_string(),
            }
        );
    }

    #[test]
    fn test_round_trip_holds() {
        for n in [0, 7, -42, i64::MAX] {
            assert_eq!(check_round_trip(&Integer, &json!(n)), Ok(()));
        }
    }

    #[test]
    fn test_round_trip_detects_changed_value() {
        let err = check_round_trip(&Lossy, &json!(5)).unwrap_err();
        assert!(matches!(err, TypeError::RoundTrip { ref type_name, .. } if type_name == "lossy"));
    }

    #[test]
    fn test_round_trip_propagates_stringify_error() {
        let err = check_round_trip(&Integer, &json!(true)).unwrap_err();
        assert!(matches!(err, TypeError::UnexpectedValue { .. }));
    }

    #[test]
    fn test_debug_shows_name() {
        let ty: &dyn Type = &Integer;
        assert_eq!(format!("{:?}", ty), "Type { name: \"integer\" }");
    }
}
