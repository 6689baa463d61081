use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::catalogs::CatalogClient;
use crate::models::Candidate;
use crate::svg::{validate_svg_url, SvgValidation};

/// Fallback URLs shown per brand in the human-readable report.
const MAX_DISPLAYED_FALLBACKS: usize = 5;

/// A ranked candidate plus the outcome of the optional SVG validation.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRow {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_validation: Option<SvgValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_validation_error: Option<String>,
}

impl From<Candidate> for CandidateRow {
    fn from(candidate: Candidate) -> Self {
        CandidateRow {
            candidate,
            svg_validation: None,
            svg_validation_error: None,
        }
    }
}

/// Ranked rows for one requested brand.
#[derive(Debug, Clone)]
pub struct BrandReport {
    pub brand: String,
    pub rows: Vec<CandidateRow>,
}

/// Look up, rank and (optionally) validate one brand. A validation failure
/// is attached to the top row and never fails the report.
pub async fn build_brand_report(
    client: &CatalogClient,
    brand: &str,
    limit: usize,
    validate: bool,
) -> BrandReport {
    let candidates = client.find_candidates(brand, limit).await;
    let mut rows: Vec<CandidateRow> = candidates.into_iter().map(CandidateRow::from).collect();
    if validate {
        if let Some(top) = rows.first_mut() {
            if let Some(url) = top.candidate.recommended.clone() {
                match validate_svg_url(client.http(), &url).await {
                    Ok(validation) => top.svg_validation = Some(validation),
                    Err(e) => top.svg_validation_error = Some(format!("{e:#}")),
                }
            }
        }
    }
    BrandReport {
        brand: brand.to_string(),
        rows,
    }
}

/// Union of fallback URLs across all rows, plus any non-top recommended URL,
/// in first-seen order with no duplicates.
pub fn fallback_union(rows: &[CandidateRow]) -> Vec<String> {
    let top_recommended = rows.first().and_then(|row| row.candidate.recommended.as_deref());
    let mut links: Vec<String> = Vec::new();
    for row in rows {
        for link in &row.candidate.fallbacks {
            if !links.iter().any(|seen| seen == link) {
                links.push(link.clone());
            }
        }
        if let Some(rec) = &row.candidate.recommended {
            if Some(rec.as_str()) != top_recommended && !links.iter().any(|seen| seen == rec) {
                links.push(rec.clone());
            }
        }
    }
    links
}

/// Human-readable rendering, one section per brand in input order. Always
/// prints something for every requested brand, even when nothing was found.
pub fn render_text(reports: &[BrandReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("Brand: {}\n", report.brand));

        let Some(top) = report.rows.first() else {
            out.push_str("  Recommended: none found\n");
            out.push_str("  Note: Try official brand assets manually.\n");
            out.push('\n');
            continue;
        };

        out.push_str(&format!(
            "  Recommended: {} (source={}, title={})\n",
            top.candidate.recommended.as_deref().unwrap_or("none"),
            top.candidate.source,
            top.candidate.title,
        ));

        let fallbacks = fallback_union(&report.rows);
        if fallbacks.is_empty() {
            out.push_str("  Fallbacks: none\n");
        } else {
            out.push_str("  Fallbacks:\n");
            for link in fallbacks.iter().take(MAX_DISPLAYED_FALLBACKS) {
                out.push_str(&format!("    - {link}\n"));
            }
        }

        out.push_str(&format!(
            "  Official URL: {}\n",
            top.candidate.official_url.as_deref().unwrap_or("unknown")
        ));
        out.push_str(&format!(
            "  Brand Guide URL: {}\n",
            top.candidate.brand_url.as_deref().unwrap_or("unknown")
        ));
        out.push_str("  License/Trademark note: brand assets may require trademark-compliant usage.\n");
        out.push_str("  Implementation note: prefer SVG with viewBox and add descriptive alt text.\n");

        if let Some(v) = &top.svg_validation {
            out.push_str(&format!(
                "  SVG Validation: width={} height={} viewBox={} hasViewBox={}\n",
                v.width, v.height, v.view_box, v.has_view_box,
            ));
        } else if let Some(err) = &top.svg_validation_error {
            out.push_str(&format!("  SVG Validation error: {err}\n"));
        }
        out.push('\n');
    }
    out
}

/// Machine-readable rendering: an object mapping each brand (input order) to
/// its rows. The advisory notes are a text-report concern and are omitted.
pub fn render_json(reports: &[BrandReport]) -> Result<String> {
    let mut out = Map::new();
    for report in reports {
        out.insert(report.brand.clone(), serde_json::to_value(&report.rows)?);
    }
    Ok(serde_json::to_string_pretty(&Value::Object(out))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogSource;

    fn candidate(
        title: &str,
        score: u32,
        recommended: Option<&str>,
        fallbacks: &[&str],
    ) -> Candidate {
        Candidate {
            brand_query: "acme".to_string(),
            source: CatalogSource::Svgl,
            title: title.to_string(),
            recommended: recommended.map(str::to_string),
            fallbacks: fallbacks.iter().map(|s| s.to_string()).collect(),
            official_url: Some("https://acme.example".to_string()),
            brand_url: None,
            score,
        }
    }

    fn report(rows: Vec<Candidate>) -> BrandReport {
        BrandReport {
            brand: "Acme".to_string(),
            rows: rows.into_iter().map(CandidateRow::from).collect(),
        }
    }

    #[test]
    fn test_fallback_union_dedupes_and_preserves_order() {
        let rows: Vec<CandidateRow> = vec![
            candidate(
                "Acme",
                100,
                Some("https://a/top.svg"),
                &["https://a/1.svg", "https://a/2.svg"],
            ),
            candidate(
                "Acme Corp",
                85,
                Some("https://a/other.svg"),
                &["https://a/2.svg", "https://a/3.svg"],
            ),
        ]
        .into_iter()
        .map(CandidateRow::from)
        .collect();

        assert_eq!(
            fallback_union(&rows),
            vec![
                "https://a/1.svg",
                "https://a/2.svg",
                "https://a/3.svg",
                "https://a/other.svg",
            ]
        );
    }

    #[test]
    fn test_fallback_union_skips_top_recommendation() {
        let rows: Vec<CandidateRow> = vec![
            candidate("Acme", 100, Some("https://a/top.svg"), &[]),
            candidate("Acme Corp", 85, Some("https://a/top.svg"), &[]),
        ]
        .into_iter()
        .map(CandidateRow::from)
        .collect();

        assert!(fallback_union(&rows).is_empty());
    }

    #[test]
    fn test_render_text_no_candidates() {
        let text = render_text(&[report(vec![])]);
        assert!(text.contains("Brand: Acme"));
        assert!(text.contains("  Recommended: none found"));
        assert!(text.contains("  Note: Try official brand assets manually."));
    }

    #[test]
    fn test_render_text_with_candidates() {
        let text = render_text(&[report(vec![
            candidate("Acme", 100, Some("https://a/top.svg"), &["https://a/alt.svg"]),
            candidate("Acme Corp", 85, Some("https://a/corp.svg"), &[]),
        ])]);
        assert!(text.contains("  Recommended: https://a/top.svg (source=SVGL, title=Acme)"));
        assert!(text.contains("    - https://a/alt.svg"));
        assert!(text.contains("    - https://a/corp.svg"));
        assert!(text.contains("  Official URL: https://acme.example"));
        assert!(text.contains("  Brand Guide URL: unknown"));
        assert!(text.contains("  License/Trademark note:"));
        assert!(text.contains("  Implementation note:"));
    }

    #[test]
    fn test_render_text_caps_displayed_fallbacks() {
        let fallbacks: Vec<String> = (1..=7).map(|i| format!("https://a/{i}.svg")).collect();
        let refs: Vec<&str> = fallbacks.iter().map(String::as_str).collect();
        let text = render_text(&[report(vec![candidate(
            "Acme",
            100,
            Some("https://a/top.svg"),
            &refs,
        )])]);
        assert!(text.contains("    - https://a/5.svg"));
        assert!(!text.contains("    - https://a/6.svg"));
    }

    #[test]
    fn test_render_text_missing_recommendation_prints_none() {
        let text = render_text(&[report(vec![candidate("Acme", 100, None, &[])])]);
        assert!(text.contains("  Recommended: none (source=SVGL, title=Acme)"));
        assert!(text.contains("  Fallbacks: none"));
    }

    #[test]
    fn test_render_text_validation_outcomes() {
        let mut ok = report(vec![candidate("Acme", 100, Some("https://a/top.svg"), &[])]);
        ok.rows[0].svg_validation = Some(crate::svg::SvgValidation {
            width: "24".to_string(),
            height: "missing".to_string(),
            view_box: "0 0 24 24".to_string(),
            has_view_box: "yes".to_string(),
        });
        let text = render_text(&[ok]);
        assert!(text
            .contains("  SVG Validation: width=24 height=missing viewBox=0 0 24 24 hasViewBox=yes"));

        let mut failed = report(vec![candidate("Acme", 100, Some("https://a/top.svg"), &[])]);
        failed.rows[0].svg_validation_error = Some("connection refused".to_string());
        let text = render_text(&[failed]);
        assert!(text.contains("  SVG Validation error: connection refused"));
    }

    #[test]
    fn test_render_json_shape() {
        let rendered = render_json(&[report(vec![candidate(
            "Acme",
            100,
            Some("https://a/top.svg"),
            &["https://a/alt.svg"],
        )])])
        .unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        let row = &value["Acme"][0];
        assert_eq!(row["brand_query"], "acme");
        assert_eq!(row["source"], "SVGL");
        assert_eq!(row["recommended"], "https://a/top.svg");
        assert_eq!(row["fallbacks"][0], "https://a/alt.svg");
        assert_eq!(row["brand_url"], Value::Null);
        assert_eq!(row["score"], 100);
        let keys = row.as_object().unwrap();
        assert!(!keys.contains_key("svg_validation"));
        assert!(!keys.contains_key("svg_validation_error"));
        assert!(!rendered.contains("License/Trademark"));
    }

    #[test]
    fn test_render_json_empty_brand_is_empty_array() {
        let rendered = render_json(&[report(vec![])]).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["Acme"], Value::Array(vec![]));
    }
}
