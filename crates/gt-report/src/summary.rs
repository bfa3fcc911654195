//! Session summary: the resolved view of one test session and its
//! text/HTML renderers.

use chrono::{DateTime, Utc};
use gt_caps::{tag_set_for, CapabilityView};
use gt_model::TagSet;
use serde::Serialize;
use tracing::{debug, info};

use crate::escape::html_escape;
use crate::record::SessionRecord;

/// Rendering options for session summaries.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Heading override; defaults to the feature name, then a generic
    /// title.
    pub title: Option<String>,

    /// Include the scenario list in rendered output.
    pub include_scenarios: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            title: None,
            include_scenarios: true,
        }
    }
}

/// Resolved view of one session: canonical tags plus document metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    /// Canonical identity tags, browser first.
    pub tags: TagSet,

    /// Which dialect the descriptor classified as (`"flat"` / `"w3c"`).
    pub dialect: String,

    /// Feature title, when a document with a non-empty title was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,

    /// Scenario names in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<String>,

    /// When this summary was produced.
    pub generated_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Resolve a record into its summary.
    ///
    /// Total: malformed capability shapes degrade to fallback tags rather
    /// than failing, so a summary always comes out.
    pub fn resolve(record: &SessionRecord) -> Self {
        let dialect = CapabilityView::classify(&record.capabilities).dialect();
        let tags = tag_set_for(&record.capabilities);

        let feature = record
            .gherkin_document
            .as_ref()
            .and_then(|document| document.feature_name())
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let scenarios = record
            .gherkin_document
            .as_ref()
            .map(|document| {
                document
                    .scenario_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        debug!(
            dialect = dialect.name(),
            browser = %tags.browser,
            platform = %tags.platform,
            "resolved session tags"
        );

        Self {
            tags,
            dialect: dialect.name().to_string(),
            feature,
            scenarios,
            generated_at: Utc::now(),
        }
    }

    /// Heading for rendered output: explicit override, then feature name,
    /// then a generic fallback.
    fn title<'a>(&'a self, options: &'a SummaryOptions) -> &'a str {
        options
            .title
            .as_deref()
            .or(self.feature.as_deref())
            .unwrap_or("Test session")
    }

    /// Render as plain text lines.
    pub fn to_text(&self, options: &SummaryOptions) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title(options)));
        out.push_str(&format!("browser:  {}\n", self.tags.browser.full_name()));
        out.push_str(&format!("platform: {}\n", self.tags.platform.full_name()));
        out.push_str(&format!("dialect:  {}\n", self.dialect));
        if options.include_scenarios && !self.scenarios.is_empty() {
            out.push_str("scenarios:\n");
            for name in &self.scenarios {
                out.push_str(&format!("  - {}\n", name));
            }
        }
        out
    }

    /// Render as an HTML fragment for report embedding.
    ///
    /// Every interpolated string goes through [`html_escape`]. The fragment
    /// carries no scripts or styles of its own; host pages style the
    /// `gt-*` classes.
    pub fn to_html(&self, options: &SummaryOptions) -> String {
        info!(
            title = self.title(options),
            scenarios = self.scenarios.len(),
            "rendering session summary fragment"
        );

        let badges = tag_badges(&self.tags);

        let mut scenario_list = String::new();
        if options.include_scenarios && !self.scenarios.is_empty() {
            let mut items = String::new();
            for name in &self.scenarios {
                items.push_str(&format!("<li>{}</li>", html_escape(name)));
            }
            scenario_list = format!("<ul class=\"gt-scenarios\">{}</ul>\n", items);
        }

        format!(
            r#"<section class="gt-summary" data-dialect="{dialect}">
<h2>{title}</h2>
<div class="gt-tags">{badges}</div>
{scenario_list}<p class="gt-generated">generated {generated_at}</p>
</section>
"#,
            dialect = html_escape(&self.dialect),
            title = html_escape(self.title(options)),
            badges = badges,
            scenario_list = scenario_list,
            generated_at = self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

/// Render a [`TagSet`] as a row of HTML badge elements.
///
/// Shared by [`SessionSummary::to_html`] and standalone tag output. Badge
/// text is escaped; the `gt-tag-*` class suffix comes from the fixed kind
/// names and needs no escaping.
pub fn tag_badges(tags: &TagSet) -> String {
    let mut badges = String::new();
    for tag in tags.as_array() {
        badges.push_str(&format!(
            r#"<span class="gt-tag gt-tag-{kind}">{text}</span>"#,
            kind = tag.kind.name(),
            text = html_escape(&tag.full_name()),
        ));
    }
    badges
}
