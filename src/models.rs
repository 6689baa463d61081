use std::fmt;

use serde::Serialize;

/// The two catalogs a candidate can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CatalogSource {
    #[serde(rename = "SVGL")]
    Svgl,
    #[serde(rename = "Simple Icons")]
    SimpleIcons,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Svgl => write!(f, "SVGL"),
            CatalogSource::SimpleIcons => write!(f, "Simple Icons"),
        }
    }
}

/// One ranked logo-asset proposal for a brand query.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub brand_query: String,
    pub source: CatalogSource,
    pub title: String,
    pub recommended: Option<String>,
    pub fallbacks: Vec<String>,
    pub official_url: Option<String>,
    pub brand_url: Option<String>,
    pub score: u32,
}
