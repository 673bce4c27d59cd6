//! Article Store — local history of generated articles.
//!
//! The store is a small key-value surface (save, get, delete, plus a
//! newest-first listing). ContentForge only promises ephemeral history, so
//! the default backend keeps articles in process memory; swapping in a
//! durable backend means implementing `ArticleStore` and changing one line
//! in `main`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::article::Article;

/// Backend trait for article history, held in `AppState` as
/// `Arc<dyn ArticleStore>`.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Inserts an article at the front of the history.
    async fn save(&self, article: Article);

    /// Returns all stored articles, newest first.
    async fn list(&self) -> Vec<Article>;

    /// Looks up one article by id.
    async fn get(&self, id: Uuid) -> Option<Article>;

    /// Removes an article. Returns whether it existed.
    async fn delete(&self, id: Uuid) -> bool;
}

/// In-memory store backing the default deployment. History lasts for the
/// process lifetime only.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<Vec<Article>>,
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn save(&self, article: Article) {
        self.articles.write().await.insert(0, article);
    }

    async fn list(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }

    async fn get(&self, id: Uuid) -> Option<Article> {
        self.articles
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    async fn delete(&self, id: Uuid) -> bool {
        let mut articles = self.articles.write().await;
        let before = articles.len();
        articles.retain(|a| a.id != id);
        articles.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::metrics::ArticleMetrics;
    use chrono::Utc;

    fn make_article(title: &str) -> Article {
        Article {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "body".to_string(),
            metrics: ArticleMetrics {
                word_count: 1,
                reading_time_minutes: 1,
                keyword_density_percent: 0.0,
                seo_score: 20,
            },
            created_at: Utc::now(),
            primary_keyword: "keyword".to_string(),
            selected_keywords: vec![],
        }
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = InMemoryArticleStore::default();
        store.save(make_article("first")).await;
        store.save(make_article("second")).await;
        store.save(make_article("third")).await;

        let titles: Vec<String> = store.list().await.into_iter().map(|a| a.title).collect();
        assert_eq!(titles, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn get_finds_saved_article() {
        let store = InMemoryArticleStore::default();
        let article = make_article("lookup");
        let id = article.id;
        store.save(article).await;

        assert_eq!(store.get(id).await.map(|a| a.title), Some("lookup".into()));
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let store = InMemoryArticleStore::default();
        let article = make_article("doomed");
        let id = article.id;
        store.save(article).await;

        assert!(store.delete(id).await);
        assert!(!store.delete(id).await);
        assert!(store.list().await.is_empty());
    }
}
