//! Capability dialect detection.
//!
//! The sole discriminant between the two known descriptor shapes is a
//! present, truthy `alwaysMatch` property: W3C descriptors wrap their
//! fields under it, everything else is treated as a flat mapping. There is
//! no version-string sniffing and no protocol negotiation. Shapes outside
//! the two known dialects classify as flat so resolution can still attempt
//! direct field lookup.

use serde_json::Value;

/// Key wrapping the W3C capability mapping.
const ALWAYS_MATCH: &str = "alwaysMatch";

/// Which protocol generation shaped a descriptor's field layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Legacy JSON Wire Protocol or vendor-specific flat mapping.
    Flat,
    /// W3C capabilities with an `alwaysMatch` wrapper.
    W3c,
}

impl Dialect {
    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Flat => "flat",
            Dialect::W3c => "w3c",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Truthiness of a JSON value, matching the upstream reporter's notion of
/// presence: null, false, zero, and the empty string are falsy; everything
/// else (including empty mappings and arrays) is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Return true iff the descriptor carries a present, truthy `alwaysMatch`
/// property.
pub fn is_w3c(capability: &Value) -> bool {
    capability.get(ALWAYS_MATCH).map(is_truthy).unwrap_or(false)
}

/// A capability descriptor classified by dialect.
///
/// The `W3c` variant already holds the unwrapped `alwaysMatch` value, so
/// downstream field resolution operates on one concrete mapping regardless
/// of the input shape.
#[derive(Debug, Clone, Copy)]
pub enum CapabilityView<'a> {
    /// Flat legacy/vendor mapping, used as-is.
    Flat(&'a Value),
    /// W3C descriptor, unwrapped to its `alwaysMatch` value.
    W3c(&'a Value),
}

impl<'a> CapabilityView<'a> {
    /// Classify a descriptor into its dialect view.
    ///
    /// A falsy or absent `alwaysMatch` (including an explicit null) means
    /// flat; non-object input also classifies as flat and simply resolves
    /// no fields.
    pub fn classify(capability: &'a Value) -> Self {
        match capability.get(ALWAYS_MATCH) {
            Some(inner) if is_truthy(inner) => CapabilityView::W3c(inner),
            _ => CapabilityView::Flat(capability),
        }
    }

    /// The mapping field resolution reads from.
    pub fn fields(&self) -> &'a Value {
        match self {
            CapabilityView::Flat(fields) | CapabilityView::W3c(fields) => fields,
        }
    }

    /// Which dialect this view was classified as.
    pub fn dialect(&self) -> Dialect {
        match self {
            CapabilityView::Flat(_) => Dialect::Flat,
            CapabilityView::W3c(_) => Dialect::W3c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_table() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-3.5)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_is_w3c_requires_truthy_always_match() {
        assert!(is_w3c(&json!({"alwaysMatch": {}})));
        assert!(is_w3c(&json!({"alwaysMatch": {"browserName": "edge"}})));
        assert!(!is_w3c(&json!({"browserName": "chrome"})));
        assert!(!is_w3c(&json!({})));
    }

    #[test]
    fn test_null_always_match_is_flat() {
        assert!(!is_w3c(&json!({"alwaysMatch": null})));
        assert!(!is_w3c(&json!({"alwaysMatch": false})));
        assert!(!is_w3c(&json!({"alwaysMatch": 0})));
        assert!(!is_w3c(&json!({"alwaysMatch": ""})));
    }

    #[test]
    fn test_non_object_input_is_flat() {
        assert!(!is_w3c(&json!("chrome")));
        assert!(!is_w3c(&json!(42)));
        assert!(!is_w3c(&json!([1, 2, 3])));
        assert!(!is_w3c(&json!(null)));
    }

    #[test]
    fn test_classify_unwraps_w3c() {
        let capability = json!({"alwaysMatch": {"browserName": "edge"}});
        let view = CapabilityView::classify(&capability);
        assert_eq!(view.dialect(), Dialect::W3c);
        assert_eq!(view.fields()["browserName"], "edge");
    }

    #[test]
    fn test_classify_keeps_flat_as_is() {
        let capability = json!({"browserName": "chrome"});
        let view = CapabilityView::classify(&capability);
        assert_eq!(view.dialect(), Dialect::Flat);
        assert_eq!(view.fields()["browserName"], "chrome");
    }

    #[test]
    fn test_classify_null_always_match_as_flat() {
        let capability = json!({"alwaysMatch": null, "browserName": "chrome"});
        let view = CapabilityView::classify(&capability);
        assert_eq!(view.dialect(), Dialect::Flat);
        assert_eq!(view.fields()["browserName"], "chrome");
    }

    #[test]
    fn test_classify_truthy_non_mapping_always_match() {
        // A truthy non-mapping still classifies as W3C; resolution against
        // it simply finds no fields.
        let capability = json!({"alwaysMatch": "yes"});
        let view = CapabilityView::classify(&capability);
        assert_eq!(view.dialect(), Dialect::W3c);
        assert!(view.fields().get("browserName").is_none());
    }

    #[test]
    fn test_dialect_names() {
        assert_eq!(Dialect::Flat.name(), "flat");
        assert_eq!(Dialect::W3c.name(), "w3c");
        assert_eq!(Dialect::W3c.to_string(), "w3c");
    }
}
