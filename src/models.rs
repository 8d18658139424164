//! Section records. Display fields are tolerant: a missing, null or
//! non-string value degrades to an empty field instead of failing the
//! whole section.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

fn lenient_optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let text = lenient_text(deserializer)?;
    Ok((!text.is_empty()).then_some(text))
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Job {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub period: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient_optional")]
    pub title: Option<String>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Category labels and members share keys; `categories` drives display order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillSet {
    #[serde(default, deserialize_with = "lenient_optional")]
    pub title: Option<String>,
    #[serde(default)]
    pub categories: IndexMap<String, String>,
    #[serde(default)]
    pub items: IndexMap<String, Vec<String>>,
}

impl SkillSet {
    pub fn skills_for(&self, category: &str) -> &[String] {
        self.items.get(category).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Degree {
    #[serde(default, deserialize_with = "lenient_text")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub school: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub focus: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Education {
    #[serde(default, deserialize_with = "lenient_optional")]
    pub title: Option<String>,
    #[serde(default)]
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Certification {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub org: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Certifications {
    #[serde(default, deserialize_with = "lenient_optional")]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<Certification>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Projects {
    #[serde(default, deserialize_with = "lenient_optional")]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<Project>,
}
