//! Article model shared by the generation pipeline and the history store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::seo::metrics::ArticleMetrics;

/// A generated article plus its provenance and derived metrics.
///
/// Metrics are flattened onto the wire so clients see `wordCount`,
/// `seoScore` etc. as top-level fields of the article object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(flatten)]
    pub metrics: ArticleMetrics,
    pub created_at: DateTime<Utc>,
    pub primary_keyword: String,
    pub selected_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_serializes_metrics_at_top_level() {
        let article = Article {
            id: Uuid::new_v4(),
            title: "Best 2024 Budget Laptops".to_string(),
            content: "body".to_string(),
            metrics: ArticleMetrics {
                word_count: 812,
                reading_time_minutes: 5,
                keyword_density_percent: 1.1,
                seo_score: 80,
            },
            created_at: Utc::now(),
            primary_keyword: "budget laptops".to_string(),
            selected_keywords: vec!["laptop deals".to_string()],
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["title"], "Best 2024 Budget Laptops");
        assert_eq!(json["wordCount"], 812);
        assert_eq!(json["seoScore"], 80);
        assert_eq!(json["primaryKeyword"], "budget laptops");
        assert!(json.get("metrics").is_none());
    }
}
