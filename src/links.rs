//! Static reference-link tables for skills and schools.
//!
//! Lookups are by exact display name, so localized skill names carry their own
//! entries. A miss just means the entry renders without a link.

use std::collections::HashMap;
use std::sync::OnceLock;

static SKILL_LINKS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static SCHOOL_LINKS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub fn skill_link(skill: &str) -> Option<&'static str> {
    SKILL_LINKS
        .get_or_init(|| default_skill_links().into_iter().collect())
        .get(skill)
        .copied()
}

pub fn school_link(school: &str) -> Option<&'static str> {
    SCHOOL_LINKS
        .get_or_init(|| default_school_links().into_iter().collect())
        .get(school)
        .copied()
}

fn default_skill_links() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Python", "https://en.wikipedia.org/wiki/Python_(programming_language)"),
        ("SQL", "https://en.wikipedia.org/wiki/SQL"),
        ("Rust", "https://en.wikipedia.org/wiki/Rust_(programming_language)"),
        ("C#", "https://en.wikipedia.org/wiki/C_Sharp_(programming_language)"),
        ("Apache Airflow", "https://en.wikipedia.org/wiki/Apache_Airflow"),
        ("dbt", "https://en.wikipedia.org/wiki/Dbt_(data_build_tool)"),
        ("Kafka", "https://en.wikipedia.org/wiki/Apache_Kafka"),
        ("Power BI", "https://en.wikipedia.org/wiki/Microsoft_Power_BI"),
        ("Tableau", "https://en.wikipedia.org/wiki/Tableau_Software"),
        ("Regression Analysis", "https://en.wikipedia.org/wiki/Regression_analysis"),
        ("Regressionsanalyse", "https://en.wikipedia.org/wiki/Regression_analysis"),
        ("Hypothesis Testing", "https://en.wikipedia.org/wiki/Statistical_hypothesis_testing"),
        ("Hypothesentests", "https://en.wikipedia.org/wiki/Statistical_hypothesis_testing"),
        ("Time Series Analysis", "https://en.wikipedia.org/wiki/Time_series"),
        ("Zeitreihenanalyse", "https://en.wikipedia.org/wiki/Time_series"),
        ("Time Series", "https://en.wikipedia.org/wiki/Time_series"),
        ("Zeitreihen", "https://en.wikipedia.org/wiki/Time_series"),
        ("Google Cloud Platform", "https://en.wikipedia.org/wiki/Google_Cloud_Platform"),
        ("BigQuery", "https://en.wikipedia.org/wiki/BigQuery"),
        ("AWS", "https://en.wikipedia.org/wiki/Amazon_Web_Services"),
        ("Git", "https://en.wikipedia.org/wiki/Git"),
        ("Scikit-learn", "https://en.wikipedia.org/wiki/Scikit-learn"),
        ("PyTorch", "https://en.wikipedia.org/wiki/PyTorch"),
        ("TensorFlow", "https://en.wikipedia.org/wiki/TensorFlow"),
        ("Deep Learning", "https://en.wikipedia.org/wiki/Deep_learning"),
        ("Machine Learning", "https://en.wikipedia.org/wiki/Machine_learning"),
        ("Fraud Detection", "https://en.wikipedia.org/wiki/Fraud_detection"),
        ("Betrugserkennung", "https://en.wikipedia.org/wiki/Fraud_detection"),
        ("NLP", "https://en.wikipedia.org/wiki/Natural_language_processing"),
        ("RAG", "https://en.wikipedia.org/wiki/Retrieval-augmented_generation"),
        ("Customer Service", "https://en.wikipedia.org/wiki/Customer_service"),
        ("Kundenservice", "https://en.wikipedia.org/wiki/Customer_service"),
    ]
}

fn default_school_links() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Technical University of Munich", "https://www.tum.de/en/"),
        ("University of Potsdam", "https://www.uni-potsdam.de/en/"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_skill_names_resolve_to_same_article() {
        assert_eq!(skill_link("Regression Analysis"), skill_link("Regressionsanalyse"));
        assert!(skill_link("Regression Analysis").is_some());
    }

    #[test]
    fn lookups_are_exact() {
        assert!(skill_link("python").is_none());
        assert!(skill_link("Python ").is_none());
        assert!(skill_link("Cobol").is_none());
    }

    #[test]
    fn school_lookup() {
        assert_eq!(
            school_link("University of Potsdam"),
            Some("https://www.uni-potsdam.de/en/")
        );
        assert!(school_link("Unknown College").is_none());
    }
}
