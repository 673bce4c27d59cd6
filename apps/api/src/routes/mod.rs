pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::articles::handlers as articles;
use crate::headline::handlers as headline;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;
use crate::vision::handlers as vision;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Suggestions API
        .route("/api/v1/suggestions", post(suggestions::handle_suggestions))
        // Articles API
        .route(
            "/api/v1/articles",
            post(articles::handle_generate_article).get(articles::handle_list_articles),
        )
        .route(
            "/api/v1/articles/:id",
            get(articles::handle_get_article).delete(articles::handle_delete_article),
        )
        // Headline API
        .route(
            "/api/v1/headline/refine",
            post(headline::handle_refine_headline),
        )
        .route(
            "/api/v1/headline/alternatives",
            post(headline::handle_headline_alternatives),
        )
        // Vision API
        .route("/api/v1/image-text", post(vision::handle_image_text))
        .with_state(state)
}
