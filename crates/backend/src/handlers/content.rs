use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_job::aggregate::Job;
use contracts::domain::a002_store::aggregate::Store;
use contracts::domain::a003_office::aggregate::Office;
use contracts::domain::a004_news::aggregate::NewsArticle;
use contracts::domain::a005_division::aggregate::Division;
use contracts::domain::a006_partner::aggregate::Partner;
use contracts::domain::common::{AggregateId, Record};
use contracts::shared::content_store::ContentStore;
use contracts::shared::site_content::{ContentRegistry, SiteStat};
use std::collections::{BTreeMap, HashMap};

use crate::shared::content;

type Params = Query<HashMap<String, String>>;
type Facets = BTreeMap<String, Vec<String>>;

fn registry() -> Result<&'static ContentRegistry, StatusCode> {
    content::registry().map_err(|e| {
        tracing::error!("Site content unavailable: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Разбор id из пути: не-slug сразу 400, неизвестный id 404
fn get_one<R: Record>(store: &ContentStore<R>, raw_id: &str) -> Result<Json<R>, StatusCode> {
    let id = R::Id::from_string(raw_id).map_err(|e| {
        tracing::debug!("{}: {}", R::COLLECTION, e);
        StatusCode::BAD_REQUEST
    })?;
    match store.require(&id) {
        Ok(record) => Ok(Json(record.clone())),
        Err(e) => {
            tracing::debug!("{}", e);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// GET /api/content/jobs
pub async fn list_jobs(Query(params): Params) -> Result<Json<Vec<Job>>, StatusCode> {
    Ok(Json(content::list(&registry()?.jobs, &params)))
}

/// GET /api/content/jobs/facets
pub async fn job_facets() -> Result<Json<Facets>, StatusCode> {
    Ok(Json(registry()?.jobs.facets()))
}

/// GET /api/content/jobs/:id
pub async fn get_job(Path(id): Path<String>) -> Result<Json<Job>, StatusCode> {
    get_one(&registry()?.jobs, &id)
}

/// GET /api/content/stores
pub async fn list_stores(Query(params): Params) -> Result<Json<Vec<Store>>, StatusCode> {
    Ok(Json(content::list(&registry()?.stores, &params)))
}

/// GET /api/content/stores/facets
pub async fn store_facets() -> Result<Json<Facets>, StatusCode> {
    Ok(Json(registry()?.stores.facets()))
}

/// GET /api/content/stores/:id
pub async fn get_store(Path(id): Path<String>) -> Result<Json<Store>, StatusCode> {
    get_one(&registry()?.stores, &id)
}

/// GET /api/content/offices
pub async fn list_offices(Query(params): Params) -> Result<Json<Vec<Office>>, StatusCode> {
    Ok(Json(content::list(&registry()?.offices, &params)))
}

/// GET /api/content/offices/facets
pub async fn office_facets() -> Result<Json<Facets>, StatusCode> {
    Ok(Json(registry()?.offices.facets()))
}

/// GET /api/content/news
pub async fn list_news(Query(params): Params) -> Result<Json<Vec<NewsArticle>>, StatusCode> {
    let mut items = content::list(&registry()?.news, &params);
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    Ok(Json(items))
}

/// GET /api/content/news/:id
pub async fn get_news(Path(id): Path<String>) -> Result<Json<NewsArticle>, StatusCode> {
    get_one(&registry()?.news, &id)
}

/// GET /api/content/divisions
pub async fn list_divisions(Query(params): Params) -> Result<Json<Vec<Division>>, StatusCode> {
    Ok(Json(content::list(&registry()?.divisions, &params)))
}

/// GET /api/content/partners
pub async fn list_partners(Query(params): Params) -> Result<Json<Vec<Partner>>, StatusCode> {
    Ok(Json(content::list(&registry()?.partners, &params)))
}

/// GET /api/content/stats
pub async fn list_stats() -> Result<Json<Vec<SiteStat>>, StatusCode> {
    Ok(Json(registry()?.stats.clone()))
}
