use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, ParsingOptions};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid svg xml: {0}")]
    Parse(#[from] roxmltree::Error),
}

/// The three sizing attributes of an SVG root element. `None` means the
/// attribute is absent; an empty string means present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgMetadata {
    pub width: Option<String>,
    pub height: Option<String>,
    pub view_box: Option<String>,
}

/// Report-facing rendering of [`SvgMetadata`]: attribute values with a
/// "missing" placeholder plus a yes/no viewBox flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvgValidation {
    pub width: String,
    pub height: String,
    #[serde(rename = "viewBox")]
    pub view_box: String,
    #[serde(rename = "hasViewBox")]
    pub has_view_box: String,
}

impl From<SvgMetadata> for SvgValidation {
    fn from(meta: SvgMetadata) -> Self {
        let has_view_box = if meta.view_box.is_some() { "yes" } else { "no" };
        SvgValidation {
            width: meta.width.unwrap_or_else(|| "missing".to_string()),
            height: meta.height.unwrap_or_else(|| "missing".to_string()),
            view_box: meta.view_box.unwrap_or_else(|| "missing".to_string()),
            has_view_box: has_view_box.to_string(),
        }
    }
}

/// Pull `width`/`height`/`viewBox` off the root element of an XML document.
/// Published SVGs may still carry a DOCTYPE, so DTDs are allowed.
pub fn extract_metadata(xml: &str) -> Result<SvgMetadata, SvgError> {
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, opts)?;
    let root = doc.root_element();
    Ok(SvgMetadata {
        width: root.attribute("width").map(str::to_string),
        height: root.attribute("height").map(str::to_string),
        view_box: root.attribute("viewBox").map(str::to_string),
    })
}

/// Inspect a local SVG file. No network access.
pub fn inspect_file(path: &Path) -> Result<SvgMetadata, SvgError> {
    if !path.exists() {
        return Err(SvgError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| SvgError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    extract_metadata(&text)
}

/// Fetch a remote SVG and report its metadata. Transport and parse failures
/// surface to the caller so they can be attached to the one candidate being
/// validated without aborting other candidates or brands.
pub async fn validate_svg_url(http: &reqwest::Client, url: &str) -> anyhow::Result<SvgValidation> {
    let body = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let meta = extract_metadata(&body)?;
    Ok(SvgValidation::from(meta))
}
