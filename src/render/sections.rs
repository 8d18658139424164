use crate::dom::{html_lines, Element, Node};
use crate::links::{school_link, skill_link};
use crate::models::{Certifications, Education, Experience, Projects, SkillSet};
use crate::render::year::YearInfo;

/// Locale-dependent labels used inside section markup.
pub struct Labels {
    pub learn_more: String,
    pub focus: String,
}

/// `<tag class=..>text</tag>`, or nothing when the field is empty.
fn field(tag: &str, class: &str, text: &str) -> Option<Element> {
    (!text.is_empty()).then(|| Element::new(tag).class(class).text(text))
}

fn external_link(href: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

pub fn timeline(
    experience: &Experience,
    labels: &Labels,
    year_of: &dyn Fn(&str) -> YearInfo,
) -> Vec<Node> {
    let total = experience.jobs.len();

    let items = experience.jobs.iter().enumerate().map(|(index, job)| {
        let year = year_of(&job.period);

        let mut card = Element::new("article")
            .class("experience-card")
            .class(&year.aurora_class())
            .attr("role", "article")
            .attr("tabindex", "0")
            .attr("aria-labelledby", format!("title-{}", index))
            .attr("aria-describedby", format!("desc-{}", index));
        if index % 2 == 0 {
            card.add_class("has-aurora");
        }

        let meta = [
            field("span", "meta-location", &job.location).map(|el| el.attr("title", "Location")),
            field("span", "meta-period", &job.period).map(|el| el.attr("title", "Time Period")),
            field("span", "meta-type", &job.kind).map(|el| el.attr("title", "Employment Type")),
        ];

        let header = Element::new("header")
            .children(field("h3", "experience-title", &job.title).map(|el| el.id(&format!("title-{}", index))))
            .children(field("h4", "company-name", &job.company))
            .child(Element::new("div").class("experience-meta").children(meta.into_iter().flatten()));

        let link = match &job.link {
            Some(href) if !href.is_empty() => external_link(href)
                .class("experience-link")
                .attr("aria-label", format!("{} {}", labels.learn_more, job.company))
                .text(&labels.learn_more),
            _ => Element::new("div"),
        };

        let footer = Element::new("footer")
            .child(link)
            .child(
                Element::new("div")
                    .class("position-number")
                    .attr("aria-label", "Position number")
                    .text(format!("#{:02}", total - index)),
            );

        let description = (!job.description.is_empty()).then(|| {
            let mut paragraph = Element::new("p").class("experience-description");
            paragraph.set_html(html_lines(&job.description, "<br>"));
            paragraph
        });

        card = card
            .child(header)
            .child(
                Element::new("div")
                    .id(&format!("desc-{}", index))
                    .class("experience-body")
                    .children(description)
                    .child(footer),
            );

        let mut item = Element::new("div")
            .class("experience-item")
            .attr("data-experience-index", index.to_string())
            .attr("data-year", year.to_string())
            .child(card);
        if year.is_active() {
            item.add_class("is-active");
        }
        item
    });

    let list = Element::new("div")
        .class("experience-list")
        .attr(
            "aria-label",
            format!("Professional experience with {} positions", total),
        )
        .children(items);

    vec![Element::new("div").class("experience-showcase").child(list).into()]
}

pub fn skills(skills: &SkillSet) -> Vec<Node> {
    skills
        .categories
        .iter()
        .map(|(key, label)| {
            let tags = skills.skills_for(key).iter().map(|skill| match skill_link(skill) {
                Some(href) => external_link(href)
                    .class("skill-tag")
                    .attr("aria-label", format!("{} (opens Wikipedia in new tab)", skill))
                    .text(skill),
                None => Element::new("span").class("skill-tag").text(skill),
            });

            Element::new("div")
                .class("skill-category")
                .attr("data-category", key.as_str())
                .child(Element::new("h4").class("skill-category-title").text(label))
                .child(Element::new("div").class("skill-tags").children(tags))
                .into()
        })
        .collect()
}

pub fn education(education: &Education, labels: &Labels) -> Vec<Node> {
    education
        .degrees
        .iter()
        .map(|degree| {
            let school = match school_link(&degree.school) {
                Some(href) => Some(
                    external_link(href)
                        .class("school-name")
                        .attr("aria-label", format!("{} (opens in new tab)", degree.school))
                        .text(&degree.school),
                ),
                None => field("p", "school-name", &degree.school),
            };

            let mut item = Element::new("div")
                .class("education-item")
                .children(field("h4", "degree-title", &degree.degree))
                .children(school)
                .children(field("p", "degree-location", &degree.location))
                .children(field("p", "degree-year", &degree.year));

            if let Some(focus) = degree.focus.as_deref().filter(|f| !f.is_empty()) {
                item = item.child(
                    Element::new("p")
                        .class("degree-focus")
                        .child(Element::new("span").class("focus-label").text(format!("{}:", labels.focus)))
                        .text(format!(" {}", focus)),
                );
            }
            item.into()
        })
        .collect()
}

pub fn certifications(certifications: &Certifications) -> Vec<Node> {
    certifications
        .items
        .iter()
        .map(|cert| {
            Element::new("div")
                .class("cert-item")
                .children(field("h4", "cert-name", &cert.name))
                .children(field("p", "cert-org", &cert.org))
                .children(field("p", "cert-year", &cert.year))
                .into()
        })
        .collect()
}

pub fn projects(projects: &Projects, labels: &Labels) -> Vec<Node> {
    projects
        .items
        .iter()
        .map(|project| {
            let tech = project
                .tech
                .iter()
                .map(|t| Element::new("span").class("tech-tag").text(t));

            let link = (!project.link.is_empty())
                .then(|| external_link(&project.link).class("project-link").text(&labels.learn_more));

            Element::new("div")
                .class("project-card")
                .child(Element::new("div").class("project-accent"))
                .child(
                    Element::new("div")
                        .class("project-content")
                        .children(field("h3", "project-name", &project.name))
                        .children(field("p", "content-block", &project.description))
                        .child(Element::new("div").class("tech-stack").children(tech))
                        .children(link),
                )
                .into()
        })
        .collect()
}
