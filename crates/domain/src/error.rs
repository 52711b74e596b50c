//! Common error types used across the workspace.
//!
//! The generation pipeline itself is total: empty registries, unassigned
//! entities and zero favorites all produce (possibly empty) output. Errors
//! only exist at the boundary where untyped host input is turned into domain
//! types, and where a host asks for a strategy by name.

/// Base error type for roomboard.
#[derive(Debug, thiserror::Error)]
pub enum RoomboardError {
    #[error("invalid host input")]
    Input(#[from] InputError),

    #[error("unknown strategy")]
    UnknownStrategy(#[from] UnknownStrategyError),
}

/// The host handed over data whose *shape* is wrong.
///
/// Absent or `null` registries are not reported here: they mean "no data".
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("`{field}` must be a JSON object")]
    NotAnObject { field: &'static str },

    #[error("`{field}` must be a string")]
    NotAString { field: &'static str },

    #[error("`{field}` entry `{key}` is malformed")]
    MalformedRecord {
        field: &'static str,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("strategy config is malformed")]
    MalformedConfig {
        #[source]
        source: serde_json::Error,
    },
}

/// No strategy is registered under the requested tag.
#[derive(Debug, thiserror::Error)]
#[error("no dashboard strategy registered as `{name}`")]
pub struct UnknownStrategyError {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_the_offending_field_when_not_an_object() {
        let err = InputError::NotAnObject { field: "areas" };
        assert_eq!(err.to_string(), "`areas` must be a JSON object");
    }

    #[test]
    fn should_keep_serde_source_for_malformed_record() {
        let source = serde_json::from_str::<serde_json::Value>("{{").unwrap_err();
        let err = InputError::MalformedRecord {
            field: "entities",
            key: "light.kitchen".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "`entities` entry `light.kitchen` is malformed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn should_convert_input_error_into_base_error() {
        let err: RoomboardError = InputError::NotAnObject { field: "states" }.into();
        assert!(matches!(err, RoomboardError::Input(_)));
    }

    #[test]
    fn should_display_unknown_strategy_name() {
        let err = UnknownStrategyError {
            name: "masonry".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no dashboard strategy registered as `masonry`"
        );
        let base: RoomboardError = err.into();
        assert!(matches!(base, RoomboardError::UnknownStrategy(_)));
    }
}
