//! Static text bindings: elements tagged with a content path.

use tracing::{debug, warn};

use crate::content::ContentStore;
use crate::dom::{html_lines, Document};
use crate::error::PortfolioError;
use crate::i18n::Locale;

/// Attribute naming the dotted content path an element displays.
pub const I18N_ATTR: &str = "data-i18n";

/// Long-form fields rendered as markup with paragraph breaks.
pub const LONG_FORM_KEYS: &[&str] = &["hero.summary", "about.content"];

const PARAGRAPH_BREAK: &str = "<br><br>";

#[derive(Debug, Default)]
pub struct BindingReport {
    pub applied: usize,
    pub missing: Vec<PortfolioError>,
}

/// Applies every `data-i18n` binding in the document for `locale`.
///
/// Unresolvable keys are logged and leave the element's current content alone.
pub fn apply_bindings(document: &mut Document, store: &ContentStore, locale: &Locale) -> BindingReport {
    let mut report = BindingReport::default();

    document.for_each_element_mut(|element| {
        let Some(key) = element.get_attr(I18N_ATTR).map(str::to_string) else {
            return;
        };

        let Some(translation) = store.resolve_text(locale.as_str(), &key) else {
            warn!("Translation not found for key: {} ({})", key, locale);
            report.missing.push(PortfolioError::MissingTranslationKey {
                key,
                locale: locale.to_string(),
            });
            return;
        };

        let takes_placeholder = matches!(element.tag(), "input" | "textarea");
        if takes_placeholder {
            element.set_attr("placeholder", translation);
        } else if LONG_FORM_KEYS.contains(&key.as_str()) {
            element.set_html(html_lines(&translation, PARAGRAPH_BREAK));
        } else {
            element.set_text(translation);
        }
        report.applied += 1;
    });

    debug!(
        "applied {} bindings for '{}' ({} missing)",
        report.applied,
        locale,
        report.missing.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use chrono::NaiveDate;

    fn store() -> ContentStore {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        ContentStore::from_json(
            r#"{
                "en": {
                    "nav": {"home": "Home"},
                    "hero": {"summary": "First <b>para</b>\nSecond para"},
                    "contact": {"form": {"name": "Your name"}}
                }
            }"#,
            today,
            today,
        )
        .unwrap()
    }

    fn document() -> Document {
        Document::new(
            Element::new("body")
                .child(Element::new("a").id("home").attr(I18N_ATTR, "nav.home").text("stale"))
                .child(Element::new("p").id("summary").attr(I18N_ATTR, "hero.summary"))
                .child(Element::new("input").id("name").attr(I18N_ATTR, "contact.form.name"))
                .child(Element::new("span").id("missing").attr(I18N_ATTR, "nav.blog").text("Blog")),
        )
    }

    #[test]
    fn applies_text_placeholder_and_long_form() {
        let mut doc = document();
        let report = apply_bindings(&mut doc, &store(), &Locale::from("en"));

        assert_eq!(report.applied, 3);
        assert_eq!(doc.element_by_id("home").unwrap().text_content(), "Home");
        assert_eq!(
            doc.element_by_id("name").unwrap().get_attr("placeholder"),
            Some("Your name")
        );
        assert_eq!(
            doc.element_by_id("summary").unwrap().to_html(),
            "<p id=\"summary\" data-i18n=\"hero.summary\">First &lt;b&gt;para&lt;/b&gt;<br><br>Second para</p>"
        );
    }

    #[test]
    fn missing_keys_leave_stale_text() {
        let mut doc = document();
        let report = apply_bindings(&mut doc, &store(), &Locale::from("en"));

        assert_eq!(doc.element_by_id("missing").unwrap().text_content(), "Blog");
        assert_eq!(
            report.missing,
            vec![PortfolioError::MissingTranslationKey {
                key: "nav.blog".to_string(),
                locale: "en".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_locale_resolves_nothing_without_panicking() {
        let mut doc = document();
        let before = doc.clone();
        let report = apply_bindings(&mut doc, &store(), &Locale::from("fr"));
        assert_eq!(report.applied, 0);
        assert_eq!(report.missing.len(), 4);
        assert_eq!(doc, before);
    }
}
