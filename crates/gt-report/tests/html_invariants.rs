//! HTML fragment invariant tests.
//!
//! These tests validate the rendered summary fragment without a browser:
//! - Stable fragment structure (one section, heading, tag badges)
//! - Every interpolated string escaped, regardless of dialect or source
//! - Scenario list presence follows the options

use gt_report::{SessionRecord, SessionSummary, SummaryOptions};
use regex::Regex;
use serde_json::json;

/// Create a record with the given capabilities and no document.
fn record(capabilities: serde_json::Value) -> SessionRecord {
    SessionRecord {
        capabilities,
        gherkin_document: None,
    }
}

/// Create a record whose document carries the given feature and scenario
/// names.
fn record_with_scenarios(feature: &str, scenarios: &[&str]) -> SessionRecord {
    let children: Vec<serde_json::Value> = scenarios
        .iter()
        .map(|name| {
            json!({
                "type": "Scenario",
                "tags": [],
                "location": {"line": 3, "column": 3},
                "keyword": "Scenario",
                "name": name,
                "steps": []
            })
        })
        .collect();
    serde_json::from_value(json!({
        "capabilities": {"browserName": "chrome", "browserVersion": "118"},
        "gherkinDocument": {
            "feature": {
                "location": {"line": 1, "column": 1},
                "language": "en",
                "keyword": "Feature",
                "name": feature,
                "children": children
            }
        }
    }))
    .expect("build session record")
}

fn render(record: &SessionRecord) -> String {
    SessionSummary::resolve(record).to_html(&SummaryOptions::default())
}

// ============================================================================
// Fragment Structure Tests
// ============================================================================

mod structure {
    use super::*;

    #[test]
    fn test_fragment_is_a_single_section() {
        let html = render(&record(json!({"browserName": "chrome"})));
        assert_eq!(html.matches("<section").count(), 1);
        assert_eq!(html.matches("</section>").count(), 1);
        assert!(html.starts_with(r#"<section class="gt-summary""#));
    }

    #[test]
    fn test_fragment_has_heading_and_badges() {
        let html = render(&record_with_scenarios("Checkout", &["Pay by card"]));
        assert!(html.contains("<h2>Checkout</h2>"), "heading must be present");
        assert_eq!(
            html.matches(r#"<span class="gt-tag"#).count(),
            2,
            "exactly one badge per tag"
        );
        assert!(html.contains("gt-tag-browser"));
        assert!(html.contains("gt-tag-platform"));
    }

    #[test]
    fn test_dialect_attribute_reflects_classification() {
        let flat = render(&record(json!({"browserName": "chrome"})));
        assert!(flat.contains(r#"data-dialect="flat""#));

        let w3c = render(&record(json!({"alwaysMatch": {"browserName": "edge"}})));
        assert!(w3c.contains(r#"data-dialect="w3c""#));
    }

    #[test]
    fn test_scenario_list_follows_options() {
        let record = record_with_scenarios("Checkout", &["Pay by card", "Pay with cash"]);
        let summary = SessionSummary::resolve(&record);

        let with = summary.to_html(&SummaryOptions::default());
        assert_eq!(with.matches("<li>").count(), 2);

        let without = summary.to_html(&SummaryOptions {
            include_scenarios: false,
            ..SummaryOptions::default()
        });
        assert!(!without.contains("<li>"));
        assert!(!without.contains("gt-scenarios"));
    }

    #[test]
    fn test_fragment_carries_no_scripts_or_styles() {
        let html = render(&record_with_scenarios("Checkout", &["Pay by card"]));
        assert!(!html.contains("<script"));
        assert!(!html.contains("<style"));
    }
}

// ============================================================================
// Escaping Tests
// ============================================================================

mod escaping {
    use super::*;

    /// Every tag in the fragment must come from the renderer itself, never
    /// from interpolated data.
    fn assert_only_known_tags(html: &str) {
        let tag_re = Regex::new(r"</?([a-z0-9]+)").expect("compile tag regex");
        for capture in tag_re.captures_iter(html) {
            let name = capture.get(1).map(|m| m.as_str()).unwrap_or_default();
            assert!(
                matches!(name, "section" | "h2" | "div" | "span" | "ul" | "li" | "p"),
                "unexpected tag <{name}> in fragment"
            );
        }
    }

    #[test]
    fn test_markup_in_capability_fields_is_escaped() {
        let html = render(&record(json!({
            "browserName": "<img src=x onerror=alert(1)>",
            "platform": "<b>Linux</b>"
        })));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert_only_known_tags(&html);
    }

    #[test]
    fn test_markup_in_document_fields_is_escaped() {
        let html = render(&record_with_scenarios(
            "<script>document.title</script>",
            &["a </li><li> b", "quote \" and ' here"],
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        // Exactly the two real scenario items, no injected third.
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("&quot;"));
        assert!(html.contains("&apos;"));
        assert_only_known_tags(&html);
    }

    #[test]
    fn test_attribute_injection_is_neutralized() {
        let html = render(&record(json!({
            "browserName": "x\" onmouseover=\"alert(1)"
        })));
        assert!(!html.contains(r#"" onmouseover=""#));
        assert!(html.contains("&quot; onmouseover=&quot;"));
    }

    #[test]
    fn test_entity_input_is_double_escaped() {
        let html = render(&record(json!({"browserName": "&lt;chrome&gt;"})));
        assert!(html.contains("&amp;lt;chrome&amp;gt;"));
    }
}

// ============================================================================
// Text Mode Tests
// ============================================================================

mod text_mode {
    use super::*;

    #[test]
    fn test_text_output_has_fixed_lines() {
        let record = record_with_scenarios("Checkout", &["Pay by card"]);
        let text = SessionSummary::resolve(&record).to_text(&SummaryOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Checkout");
        assert_eq!(lines[1], "browser:  chrome 118");
        assert_eq!(lines[2], "platform: unknown");
        assert_eq!(lines[3], "dialect:  flat");
        assert_eq!(lines[4], "scenarios:");
        assert_eq!(lines[5], "  - Pay by card");
    }

    #[test]
    fn test_text_output_is_not_escaped() {
        // Escaping is an HTML concern; text mode prints data verbatim.
        let text = SessionSummary::resolve(&record(json!({"browserName": "a & b"})))
            .to_text(&SummaryOptions::default());
        assert!(text.contains("browser:  a & b"));
    }
}
