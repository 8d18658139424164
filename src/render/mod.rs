//! Content renderer: projects a locale's content slice into the section
//! containers of a document.
//!
//! Every section is described by a [`SectionDescriptor`] and rendered through
//! one dispatch function. Rendering erases and rebuilds each container, so it
//! can run again on every language switch.

mod sections;
mod year;

use chrono::Datelike;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::content::{resolve_path, ContentStore};
use crate::dom::{Document, Element, Node};
use crate::error::PortfolioError;
use crate::i18n::{Locale, LocaleListener};
use crate::models::{Certifications, Education, Experience, Projects, SkillSet};

pub use sections::Labels;
pub use year::{derive_year, YearCache, YearInfo};

/// Class the effects layer observes for entrance animations.
pub const ANIMATE_CLASS: &str = "animate-on-scroll";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Timeline,
    Skills,
    Education,
    Certifications,
    Projects,
}

impl SectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Timeline => "timeline",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Certifications => "certifications",
            SectionKind::Projects => "projects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub kind: SectionKind,
    /// Dotted path of the section's data inside a locale slice.
    pub content_path: &'static str,
    pub container_id: &'static str,
    /// Class carried by each rendered entry; re-armed for animation after render.
    pub item_class: &'static str,
}

pub const SECTIONS: [SectionDescriptor; 5] = [
    SectionDescriptor {
        kind: SectionKind::Timeline,
        content_path: "experience",
        container_id: "job-timeline",
        item_class: "experience-item",
    },
    SectionDescriptor {
        kind: SectionKind::Skills,
        content_path: "skills",
        container_id: "skills-container",
        item_class: "skill-category",
    },
    SectionDescriptor {
        kind: SectionKind::Education,
        content_path: "education",
        container_id: "education-container",
        item_class: "education-item",
    },
    SectionDescriptor {
        kind: SectionKind::Certifications,
        content_path: "certifications",
        container_id: "certifications-container",
        item_class: "cert-item",
    },
    SectionDescriptor {
        kind: SectionKind::Projects,
        content_path: "projects",
        container_id: "projects-grid",
        item_class: "project-card",
    },
];

enum SectionData {
    Timeline(Experience),
    Skills(SkillSet),
    Education(Education),
    Certifications(Certifications),
    Projects(Projects),
}

impl SectionData {
    fn parse(kind: SectionKind, value: &Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SectionKind::Timeline => SectionData::Timeline(Experience::deserialize(value)?),
            SectionKind::Skills => SectionData::Skills(SkillSet::deserialize(value)?),
            SectionKind::Education => SectionData::Education(Education::deserialize(value)?),
            SectionKind::Certifications => {
                SectionData::Certifications(Certifications::deserialize(value)?)
            }
            SectionKind::Projects => SectionData::Projects(Projects::deserialize(value)?),
        })
    }
}

#[derive(Debug, Default)]
pub struct RenderReport {
    /// Sections that rendered, with the number of entries each produced.
    pub rendered: Vec<(SectionKind, usize)>,
    pub failures: Vec<PortfolioError>,
    /// Entries marked for entrance animation.
    pub armed: usize,
}

impl RenderReport {
    pub fn entries(&self, kind: SectionKind) -> Option<usize> {
        self.rendered
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, count)| *count)
    }
}

pub struct ContentRenderer {
    years: YearCache,
    clock: fn() -> i32,
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self::with_clock(|| chrono::Local::now().year())
    }

    /// Uses `clock` as the current calendar year for periods without a year.
    pub fn with_clock(clock: fn() -> i32) -> Self {
        Self {
            years: YearCache::default(),
            clock,
        }
    }

    pub fn derive_year(&self, period: &str) -> YearInfo {
        self.years.get_or_derive(period, self.clock)
    }

    pub fn year_cache(&self) -> &YearCache {
        &self.years
    }

    /// Renders one section into its container, replacing previous content.
    pub fn render_section(
        &self,
        section: &SectionDescriptor,
        store: &ContentStore,
        locale: &Locale,
        document: &mut Document,
    ) -> Result<usize, PortfolioError> {
        let missing_section = || PortfolioError::MissingSection {
            section: section.kind.name(),
            path: section.content_path,
            locale: locale.to_string(),
        };

        let Some(container) = document.element_by_id_mut(section.container_id) else {
            return Err(PortfolioError::MissingContainer {
                section: section.kind.name(),
                container_id: section.container_id,
            });
        };

        let slice = store.locale(locale.as_str()).ok_or_else(missing_section)?;
        let value = resolve_path(slice, section.content_path).ok_or_else(missing_section)?;
        let data = SectionData::parse(section.kind, value).map_err(|e| {
            warn!("section {} in '{}' failed to parse: {}", section.kind.name(), locale, e);
            PortfolioError::MalformedSection {
                section: section.kind.name(),
                locale: locale.to_string(),
                reason: e.to_string(),
            }
        })?;

        let labels = self.labels(store, locale);
        let nodes = match &data {
            SectionData::Timeline(experience) => {
                sections::timeline(experience, &labels, &|period: &str| self.derive_year(period))
            }
            SectionData::Skills(skills) => sections::skills(skills),
            SectionData::Education(education) => sections::education(education, &labels),
            SectionData::Certifications(certs) => sections::certifications(certs),
            SectionData::Projects(projects) => sections::projects(projects, &labels),
        };

        container.replace_children(nodes);
        let entries = count_class(container.nodes(), section.item_class);
        debug!(
            section = section.kind.name(),
            locale = %locale,
            entries,
            "section rendered"
        );
        Ok(entries)
    }

    /// Renders every section. A failing section is logged and skipped.
    pub fn render_all(
        &self,
        store: &ContentStore,
        locale: &Locale,
        document: &mut Document,
    ) -> RenderReport {
        let mut report = RenderReport::default();

        for section in &SECTIONS {
            match self.render_section(section, store, locale, document) {
                Ok(entries) => report.rendered.push((section.kind, entries)),
                Err(err) => {
                    warn!("Skipping {} section: {}", section.kind.name(), err);
                    report.failures.push(err);
                }
            }
        }

        report.armed = rearm_animations(document, &report.rendered);
        report
    }

    fn labels(&self, store: &ContentStore, locale: &Locale) -> Labels {
        let code = locale.as_str();
        Labels {
            learn_more: store
                .resolve_text(code, "labels.learnMore")
                .unwrap_or_else(|| "Learn more".to_string()),
            focus: store
                .resolve_text(code, "labels.focus")
                .unwrap_or_else(|| "Focus".to_string()),
        }
    }
}

impl LocaleListener for ContentRenderer {
    fn locale_changed(&self, store: &ContentStore, locale: &Locale, document: &mut Document) {
        let report = self.render_all(store, locale, document);
        debug!(
            "re-rendered {} sections for '{}' ({} skipped)",
            report.rendered.len(),
            locale,
            report.failures.len()
        );
    }
}

fn count_class(nodes: &[Node], class: &str) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Element(el) => {
                usize::from(el.has_class(class)) + count_class(el.nodes(), class)
            }
            _ => 0,
        })
        .sum()
}

/// Marks freshly rendered entries so the effects layer observes them again.
fn rearm_animations(document: &mut Document, rendered: &[(SectionKind, usize)]) -> usize {
    let mut armed = 0;

    for section in SECTIONS.iter().filter(|s| rendered.iter().any(|(k, _)| *k == s.kind)) {
        let Some(container) = document.element_by_id_mut(section.container_id) else {
            continue;
        };

        let mut in_section = 0;
        container.walk_mut(&mut |el: &mut Element| {
            if el.has_class(section.item_class) {
                el.add_class(ANIMATE_CLASS);
                el.set_attr("data-animate", "pending");
                in_section += 1;
            }
        });
        container.set_attr("data-observed-items", in_section.to_string());
        armed += in_section;
    }

    armed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store(raw: &str) -> ContentStore {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        ContentStore::from_json(raw, today, today).unwrap()
    }

    fn document() -> Document {
        let body = SECTIONS.iter().fold(Element::new("body"), |body, section| {
            body.child(Element::new("div").id(section.container_id))
        });
        Document::new(body)
    }

    const CONTENT: &str = r#"{
        "en": {
            "experience": {"jobs": [
                {"title": "A", "company": "First", "location": "X", "period": "Oct 2024 – Present", "type": "Full-time", "description": "d"},
                {"title": "B", "company": "Second", "location": "Y", "period": "03/2019 – 01/2023", "type": "Full-time", "description": "d", "link": "https://second.test"}
            ]},
            "skills": {
                "categories": {"programming": "Programming", "cloud": "Cloud"},
                "items": {"programming": ["Python", "Obscure Lang"]}
            },
            "education": {"degrees": [{"degree": "MSc", "school": "University of Potsdam", "location": "P", "year": "2018"}]},
            "certifications": {"items": [{"name": "Cert", "org": "Org", "year": "2020"}]},
            "projects": {"items": [{"name": "P", "description": "d", "link": "https://p.test", "tech": ["Rust"]}]}
        },
        "de": {
            "skills": {"categories": {"programming": "Programmiersprachen"}, "items": {}}
        }
    }"#;

    fn fixed_clock() -> i32 {
        2026
    }

    #[test]
    fn renders_every_section_in_order() {
        let store = store(CONTENT);
        let renderer = ContentRenderer::with_clock(fixed_clock);
        let mut doc = document();

        let report = renderer.render_all(&store, &Locale::from("en"), &mut doc);

        assert!(report.failures.is_empty(), "{:?}", report.failures);
        assert_eq!(report.entries(SectionKind::Timeline), Some(2));
        assert_eq!(report.entries(SectionKind::Skills), Some(2));
        assert_eq!(report.armed, 7);

        let timeline = doc.element_by_id("job-timeline").unwrap().to_html();
        let first = timeline.find("First").unwrap();
        let second = timeline.find("Second").unwrap();
        assert!(first < second);
        assert!(timeline.contains("aurora-current"));
        assert!(timeline.contains("aurora-2023"));

        let skills = doc.element_by_id("skills-container").unwrap();
        let titles: Vec<_> = skills
            .element_children()
            .map(|c| c.element_children().next().unwrap().text_content())
            .collect();
        assert_eq!(titles, vec!["Programming", "Cloud"]);
        let skills_html = skills.to_html();
        assert!(skills_html.contains("wiki/Python_(programming_language)"));
        assert!(skills_html.contains("<span class=\"skill-tag\">Obscure Lang</span>"));
    }

    #[test]
    fn rerender_replaces_instead_of_appending() {
        let store = store(CONTENT);
        let renderer = ContentRenderer::with_clock(fixed_clock);
        let mut doc = document();

        renderer.render_all(&store, &Locale::from("en"), &mut doc);
        renderer.render_all(&store, &Locale::from("en"), &mut doc);

        let timeline = doc.element_by_id("job-timeline").unwrap().to_html();
        assert_eq!(timeline.matches("class=\"experience-item").count(), 2);
        let container = doc.element_by_id("job-timeline").unwrap();
        assert_eq!(container.get_attr("data-observed-items"), Some("2"));
    }

    #[test]
    fn missing_container_does_not_block_other_sections() {
        let store = store(CONTENT);
        let renderer = ContentRenderer::with_clock(fixed_clock);
        let mut doc = Document::new(Element::new("body").child(Element::new("div").id("projects-grid")));

        let report = renderer.render_all(&store, &Locale::from("en"), &mut doc);

        assert_eq!(report.entries(SectionKind::Projects), Some(1));
        assert_eq!(report.failures.len(), 4);
        assert!(report.failures.contains(&PortfolioError::MissingContainer {
            section: "timeline",
            container_id: "job-timeline",
        }));
    }

    #[test]
    fn missing_locale_fields_are_skipped() {
        let store = store(CONTENT);
        let renderer = ContentRenderer::with_clock(fixed_clock);
        let mut doc = document();

        let report = renderer.render_all(&store, &Locale::from("de"), &mut doc);

        assert_eq!(report.rendered, vec![(SectionKind::Skills, 1)]);
        assert_eq!(report.failures.len(), 4);
        assert!(matches!(
            report.failures[0],
            PortfolioError::MissingSection { section: "timeline", .. }
        ));
        let skills = doc.element_by_id("skills-container").unwrap().text_content();
        assert!(skills.contains("Programmiersprachen"));
    }

    #[test]
    fn incomplete_records_degrade_only_their_own_fields() {
        let store = store(
            r#"{"en": {
                "experience": {"jobs": [
                    {"title": "A", "company": "First", "location": "X", "period": "2020 – 2022", "type": "Full-time", "description": "d"},
                    {"title": "B", "company": "Second", "period": "2018 – 2020", "type": "Full-time", "description": "d"}
                ]},
                "education": {"degrees": [
                    {"degree": "MSc", "school": "University of Potsdam", "location": "P", "year": 2018},
                    {"degree": "BSc", "school": "Nowhere College", "location": "N", "year": "2014"}
                ]}
            }}"#,
        );
        let renderer = ContentRenderer::with_clock(fixed_clock);
        let mut doc = document();

        let report = renderer.render_all(&store, &Locale::from("en"), &mut doc);

        assert_eq!(report.entries(SectionKind::Timeline), Some(2));
        assert_eq!(report.entries(SectionKind::Education), Some(2));
        let timeline = doc.element_by_id("job-timeline").unwrap().to_html();
        assert!(timeline.contains("First"));
        assert!(timeline.contains("Second"));
        let education = doc.element_by_id("education-container").unwrap().to_html();
        assert!(education.contains("<p class=\"degree-year\">2018</p>"));
    }

    #[test]
    fn malformed_section_is_reported_and_skipped() {
        let store = store(
            r#"{"en": {
                "experience": {"jobs": "not a list"},
                "certifications": {"items": [{"name": "Cert", "org": "Org", "year": "2020"}]}
            }}"#,
        );
        let renderer = ContentRenderer::with_clock(fixed_clock);
        let mut doc = document();

        let report = renderer.render_all(&store, &Locale::from("en"), &mut doc);

        assert_eq!(report.entries(SectionKind::Certifications), Some(1));
        assert!(matches!(
            &report.failures[0],
            PortfolioError::MalformedSection { section: "timeline", locale, .. } if locale == "en"
        ));
    }

    #[test]
    fn year_derivation_is_cached_per_period() {
        let renderer = ContentRenderer::with_clock(fixed_clock);
        let first = renderer.derive_year("Spring term");
        let second = renderer.derive_year("Spring term");
        assert_eq!(first, YearInfo::Year(2026));
        assert_eq!(first, second);
        assert_eq!(renderer.year_cache().len(), 1);
    }
}
