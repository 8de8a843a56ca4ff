//! haconv Core - Fundamental types
//!
//! This crate provides the core types used throughout haconv:
//! - `Value`: Runtime values passed through filters
//! - `Settings`: Unknown-unit policy and BTU standard
//! - `HaConvError`: Structured error values

mod number;
mod value;
mod error;
mod settings;

pub use number::{parse_number, ensure_finite, NumberError};
pub use value::Value;
pub use error::{HaConvError, Severity, codes};
pub use settings::{Settings, UnknownUnitPolicy, BtuStandard};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, HaConvError, Severity, Settings, UnknownUnitPolicy, BtuStandard};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_number_is_finite() {
            assert_eq!(Value::Number(2.5).to_finite(), Ok(2.5));
        }

        #[test]
        fn test_numeric_text_coerces() {
            assert_eq!(Value::from("1000").to_finite(), Ok(1000.0));
            assert_eq!(Value::from(" -4.5 ").to_finite(), Ok(-4.5));
        }

        #[test]
        fn test_bool_coerces() {
            assert_eq!(Value::Bool(true).to_finite(), Ok(1.0));
            assert_eq!(Value::Bool(false).to_finite(), Ok(0.0));
        }

        #[test]
        fn test_non_numeric_values() {
            for v in [
                Value::from("unknown"),
                Value::Null,
                Value::Number(f64::NAN),
                Value::Number(f64::INFINITY),
                Value::List(vec![Value::Number(1.0)]),
            ] {
                let err = v.to_finite().unwrap_err();
                assert_eq!(err.code, codes::NOT_NUMERIC, "value {:?}", v);
            }
        }

        #[test]
        fn test_error_propagates() {
            let e = HaConvError::undefined_filter("nope");
            let err = Value::Error(e.clone()).to_finite().unwrap_err();
            assert_eq!(err, e);
        }

        #[test]
        fn test_option_into_value() {
            assert_eq!(Value::from(Some(3.0)), Value::Number(3.0));
            assert_eq!(Value::from(None::<f64>), Value::Null);
        }

        #[test]
        fn test_display() {
            assert_eq!(Value::Number(5000.0).to_string(), "5000");
            assert_eq!(Value::Null.to_string(), "null");
            assert_eq!(
                Value::Error(HaConvError::undefined_filter("x")).to_string(),
                "#ERROR: UNDEFINED_FILTER"
            );
        }

        #[test]
        fn test_serde_tagged() {
            let json = serde_json::to_string(&Value::Number(1.5)).unwrap();
            assert_eq!(json, r#"{"type":"Number","value":1.5}"#);
            let back: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(back, Value::Number(1.5));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_display_with_suggestion() {
            let e = HaConvError::undefined_filter("kwatt");
            let s = e.to_string();
            assert!(s.starts_with("[UNDEFINED_FILTER] Unknown filter: kwatt"));
            assert!(s.contains("suggestion"));
        }

        #[test]
        fn test_number_error_maps_to_not_numeric() {
            let e: HaConvError = NumberError::ParseError("abc".to_string()).into();
            assert_eq!(e.code, codes::NOT_NUMERIC);
            assert_eq!(e.severity, Severity::Warning);
        }

        #[test]
        fn test_serialize_skips_missing_suggestion() {
            let e = HaConvError::new("X", "msg");
            let json = serde_json::to_string(&e).unwrap();
            assert!(!json.contains("suggestion"));
            assert!(json.contains(r#""severity":"error""#));
        }
    }

    mod settings_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let s = Settings::default();
            assert_eq!(s.unknown_unit_policy, UnknownUnitPolicy::AssumeBaseUnit);
            assert_eq!(s.btu_standard, BtuStandard::International);
            assert_eq!(s.btu_standard.joules(), 1055.05585262);
        }

        #[test]
        fn test_from_json_partial() {
            let s = Settings::from_json(r#"{"unknown_unit_policy": "passthrough"}"#).unwrap();
            assert_eq!(s.unknown_unit_policy, UnknownUnitPolicy::Passthrough);
            assert_eq!(s.btu_standard, BtuStandard::International);
        }

        #[test]
        fn test_from_json_full() {
            let s = Settings::from_json(
                r#"{"unknown_unit_policy": "assume-base-unit", "btu_standard": "simplified"}"#,
            )
            .unwrap();
            assert_eq!(s.unknown_unit_policy, UnknownUnitPolicy::AssumeBaseUnit);
            assert_eq!(s.btu_standard.joules(), 1055.06);
        }

        #[test]
        fn test_from_json_empty_object() {
            assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
        }

        #[test]
        fn test_from_json_rejects_bad_policy() {
            let err = Settings::from_json(r#"{"unknown_unit_policy": "guess"}"#).unwrap_err();
            assert_eq!(err.code, codes::CONFIG_ERROR);
        }

        #[test]
        fn test_from_json_rejects_unknown_field() {
            let err = Settings::from_json(r#"{"precision": 3}"#).unwrap_err();
            assert_eq!(err.code, codes::CONFIG_ERROR);
        }

        #[test]
        fn test_policy_from_str() {
            assert_eq!("passthrough".parse::<UnknownUnitPolicy>().unwrap(), UnknownUnitPolicy::Passthrough);
            assert_eq!("ASSUME_BASE_UNIT".parse::<UnknownUnitPolicy>().unwrap(), UnknownUnitPolicy::AssumeBaseUnit);
            assert!("sometimes".parse::<UnknownUnitPolicy>().is_err());
            assert_eq!(UnknownUnitPolicy::AssumeBaseUnit.to_string(), "assume-base-unit");
        }

        #[test]
        fn test_btu_from_str() {
            assert_eq!("Simplified".parse::<BtuStandard>().unwrap(), BtuStandard::Simplified);
            assert!("metric".parse::<BtuStandard>().is_err());
        }

        #[test]
        fn test_builders() {
            let s = Settings::new()
                .with_unknown_unit_policy(UnknownUnitPolicy::Passthrough)
                .with_btu_standard(BtuStandard::Simplified);
            assert_eq!(s.unknown_unit_policy, UnknownUnitPolicy::Passthrough);
            assert_eq!(s.btu_standard, BtuStandard::Simplified);
        }
    }
}
