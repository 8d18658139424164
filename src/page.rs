//! Host document skeleton.
//!
//! Static text is attached through `data-i18n` paths and filled in by the
//! language selector; the dynamic sections get empty containers that the
//! renderer fills.

use crate::dom::{Document, Element};
use crate::i18n::{I18N_ATTR, ANNOUNCEMENTS_ID, SWITCH_CONTROL_CLASS};
use crate::render::{SectionKind, SECTIONS};

fn bound(tag: &str, path: &str) -> Element {
    Element::new(tag).attr(I18N_ATTR, path)
}

fn container(kind: SectionKind) -> Element {
    let id = SECTIONS
        .iter()
        .find(|s| s.kind == kind)
        .map(|s| s.container_id)
        .unwrap_or_default();
    Element::new("div").id(id).class("section-container")
}

fn section(id: &str, title_path: &str) -> Element {
    Element::new("section")
        .id(id)
        .class("content-section")
        .child(bound("h2", title_path).class("section-title"))
}

fn navigation<'a>(locales: impl IntoIterator<Item = &'a str>) -> Element {
    let links = [
        ("#home", "nav.home"),
        ("#about", "nav.about"),
        ("#experience", "nav.experience"),
        ("#projects", "nav.projects"),
        ("#contact", "nav.contact"),
    ]
    .into_iter()
    .map(|(href, path)| bound("a", path).attr("href", href).class("nav-link"));

    let switches = locales.into_iter().map(|code| {
        Element::new("a")
            .class(SWITCH_CONTROL_CLASS)
            .attr("data-lang", code)
            .attr("aria-pressed", "false")
            .text(code.to_uppercase())
    });

    Element::new("nav")
        .id("navigation")
        .attr("aria-label", "Main navigation")
        .child(Element::new("div").class("nav-links").children(links))
        .child(Element::new("div").class("language-switch").children(switches))
}

fn hero() -> Element {
    Element::new("section")
        .id("home")
        .class("hero")
        .child(bound("h1", "hero.name").class("hero-name"))
        .child(bound("p", "hero.title").class("hero-title"))
        .child(bound("p", "hero.subtitle").class("hero-subtitle"))
        .child(bound("p", "hero.summary").class("hero-summary"))
        .child(bound("span", "hero.location").class("hero-location"))
}

fn about() -> Element {
    let expertise = ["focus", "specialization", "industries", "achievements"]
        .into_iter()
        .map(|field| bound("li", &format!("about.expertise.{}", field)).class("expertise-item"));

    section("about", "about.title")
        .child(bound("div", "about.content").class("about-content"))
        .child(Element::new("ul").class("expertise").children(expertise))
}

fn contact() -> Element {
    let form = Element::new("form")
        .class("contact-form")
        .attr("method", "post")
        .attr("action", "#contact")
        .child(bound("input", "contact.form.name").attr("type", "text").attr("name", "name"))
        .child(bound("input", "contact.form.email").attr("type", "email").attr("name", "email"))
        .child(bound("textarea", "contact.form.message").attr("name", "message"))
        .child(bound("button", "contact.form.send").attr("type", "submit"));

    section("contact", "contact.title")
        .child(bound("p", "contact.subtitle").class("contact-subtitle"))
        .child(
            Element::new("ul")
                .class("contact-details")
                .child(Element::new("li").child(bound("span", "contact.email").class("contact-email")))
                .child(Element::new("li").child(bound("span", "contact.location").class("contact-location"))),
        )
        .child(form)
}

/// Builds the page body with one switch control per locale.
pub fn skeleton<'a>(locales: impl IntoIterator<Item = &'a str>) -> Document {
    let main = Element::new("main")
        .id("main")
        .child(hero())
        .child(about())
        .child(section("experience", "experience.title").child(container(SectionKind::Timeline)))
        .child(section("skills", "skills.title").child(container(SectionKind::Skills)))
        .child(
            section("education", "education.title")
                .child(container(SectionKind::Education))
                .child(bound("h3", "certifications.title").class("subsection-title"))
                .child(container(SectionKind::Certifications)),
        )
        .child(section("projects", "projects.title").child(container(SectionKind::Projects)))
        .child(contact());

    let body = Element::new("body")
        .child(bound("a", "skipToMain").attr("href", "#main").class("skip-link"))
        .child(bound("a", "skipToNav").attr("href", "#navigation").class("skip-link"))
        .child(Element::new("header").class("site-header").child(navigation(locales)))
        .child(main)
        .child(
            Element::new("div")
                .id(ANNOUNCEMENTS_ID)
                .class("sr-only")
                .attr("aria-live", "polite")
                .attr("aria-atomic", "true"),
        );

    Document::new(body)
}
