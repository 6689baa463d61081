use serde_json::Value;

/// Variant names emitted ahead of any others, in this order.
const PREFERRED_VARIANTS: [&str; 3] = ["light", "default", "dark"];

/// Asset link field from a catalog payload: either a bare URL or an ordered
/// variant-name to URL map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLinks {
    Single(String),
    Variants(Vec<(String, String)>),
}

impl AssetLinks {
    /// Build from a raw payload value. Strings become `Single`, objects
    /// become `Variants` keeping the payload's own key order (non-string
    /// variant values are dropped). Anything else carries no links.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(url) => Some(AssetLinks::Single(url.clone())),
            Value::Object(map) => Some(AssetLinks::Variants(
                map.iter()
                    .filter_map(|(name, v)| v.as_str().map(|url| (name.clone(), url.to_string())))
                    .collect(),
            )),
            _ => None,
        }
    }

    /// Flatten to a preference-ordered list of URLs: the named variants
    /// first, then remaining variants in their original order, all filtered
    /// to strings with an HTTP scheme. Later entries are deduplicated
    /// against earlier ones.
    pub fn flatten(&self) -> Vec<String> {
        let mut links = Vec::new();
        match self {
            AssetLinks::Single(url) => {
                if url.starts_with("http") {
                    links.push(url.clone());
                }
            }
            AssetLinks::Variants(variants) => {
                for preferred in PREFERRED_VARIANTS {
                    if let Some((_, url)) = variants.iter().find(|(name, _)| name == preferred) {
                        if url.starts_with("http") {
                            links.push(url.clone());
                        }
                    }
                }
                for (name, url) in variants {
                    if PREFERRED_VARIANTS.contains(&name.as_str()) {
                        continue;
                    }
                    if url.starts_with("http") && !links.contains(url) {
                        links.push(url.clone());
                    }
                }
            }
        }
        links
    }
}

/// Harvest links from an optional payload field.
pub fn links_from_field(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(AssetLinks::from_value)
        .map(|links| links.flatten())
        .unwrap_or_default()
}
