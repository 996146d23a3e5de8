//! list-all / upsert-one / batch-sync handlers, generic over the resource kind.
use axum::{extract::rejection::JsonRejection, extract::State, routing::get, routing::post, Json, Router};
use common::types::Message;
use models::resource::{IdStrategy, Resource};
use sea_orm::IntoActiveModel;
use service::resource as store;
use tracing::info;
use utoipa::openapi::path::{OperationBuilder, PathItem, PathItemType};
use utoipa::openapi::{OpenApi, Response};

use crate::errors::JsonApiError;
use crate::state::AppState;

pub async fn list<R>(State(state): State<AppState>) -> Result<Json<Vec<R::Record>>, JsonApiError>
where
    R: Resource,
{
    let records = store::list_all::<R>(&state.db).await?;
    Ok(Json(records))
}

pub async fn upsert<R>(
    State(state): State<AppState>,
    payload: Result<Json<R::Record>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError>
where
    R: Resource,
    R::Model: IntoActiveModel<R::ActiveModel>,
    R::ActiveModel: Send + Sync,
{
    let Json(record) = payload?;
    store::upsert_one::<R>(&state.db, record).await?;
    Ok(Json(Message::new("Saved successfully")))
}

pub async fn batch<R>(
    State(state): State<AppState>,
    payload: Result<Json<Vec<R::Record>>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError>
where
    R: Resource,
    R::Model: IntoActiveModel<R::ActiveModel>,
    R::ActiveModel: Send + Sync,
{
    let Json(records) = payload?;
    let count = store::batch_sync::<R>(&state.db, records).await?;
    info!(kind = R::NAME, count, "batch synced");
    Ok(Json(Message::new(R::batch_message())))
}

/// Mount `/api/v1/<kind>/` and `/api/v1/<kind>/batch`, and describe them in `doc`.
pub fn mount<R>(router: Router<AppState>, doc: &mut OpenApi) -> Router<AppState>
where
    R: Resource,
    R::Model: IntoActiveModel<R::ActiveModel>,
    R::ActiveModel: Send + Sync,
{
    let base = format!("/api/v1/{}", R::NAME);
    describe::<R>(doc, &base);
    router
        .route(&base, get(list::<R>).post(upsert::<R>))
        .route(&format!("{base}/"), get(list::<R>).post(upsert::<R>))
        .route(&format!("{base}/batch"), post(batch::<R>))
}

fn describe<R: Resource>(doc: &mut OpenApi, base: &str) {
    let list = OperationBuilder::new()
        .tag(R::NAME)
        .summary(Some(format!("List all {}", R::LABEL.to_lowercase())))
        .response("200", Response::new("Every stored record"))
        .response("503", Response::new("Store unavailable"))
        .build();
    let upsert = OperationBuilder::new()
        .tag(R::NAME)
        .summary(Some("Create or fully replace one record"))
        .description(Some(match R::ID_STRATEGY {
            IdStrategy::CallerSupplied => "`id` is required; a record with the same `id` is replaced.",
            IdStrategy::Generated => "`id` may be omitted; the store assigns one.",
        }))
        .response("200", Response::new("Saved successfully"))
        .response("400", Response::new("Validation Error"))
        .build();
    let batch = OperationBuilder::new()
        .tag(R::NAME)
        .summary(Some(format!("Batch sync ({:?})", R::BATCH_POLICY)))
        .response("200", Response::new(R::batch_message()))
        .response("400", Response::new("Validation Error, nothing written"))
        .build();

    let mut item = PathItem::new(PathItemType::Get, list);
    item.operations.insert(PathItemType::Post, upsert);
    doc.paths.paths.insert(format!("{base}/"), item);
    doc.paths.paths.insert(format!("{base}/batch"), PathItem::new(PathItemType::Post, batch));
}
