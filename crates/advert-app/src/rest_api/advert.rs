use advert_dal::advert::{AdvertRepository, CreateAdvert};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::{Json, routing::get, routing::post};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::service::{AdvertService, Field};
use crate::service_from_request;
use crate::state::AppState;

service_from_request!(AdvertService, AdvertRepository);

const ORDER_TOKENS: [&str; 4] = ["price_desc", "price_asc", "createdat_desc", "createdat_asc"];
const DEFAULT_ORDER: &str = "createdat_desc";

#[derive(Serialize)]
struct CreatedResponse {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct GetQuery {
    fields: Option<String>,
}

// page and order_by are kept as raw strings: malformed values fall back to
// defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
struct ListQuery {
    page: Option<String>,
    order_by: Option<String>,
}

pub async fn create(
    service: AdvertService,
    payload: Result<Json<CreateAdvert>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidBody)?;
    let id = service.create_advert(payload).await?;
    Ok((StatusCode::OK, Json(CreatedResponse { id })))
}

pub async fn get_by_id(
    Path(id): Path<String>,
    Query(query): Query<GetQuery>,
    service: AdvertService,
) -> ApiResult<impl IntoResponse> {
    let id: i64 = id.parse().map_err(|_| ApiError::InvalidAdvertId)?;
    let fields = parse_fields(query.fields.as_deref().unwrap_or(""));
    let advert = service.get_advert(id, &fields).await?;
    Ok((StatusCode::OK, Json(advert)))
}

pub async fn list(
    Query(query): Query<ListQuery>,
    service: AdvertService,
) -> ApiResult<impl IntoResponse> {
    let page = query
        .page
        .as_deref()
        .and_then(|p| p.parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);
    let order_by = query
        .order_by
        .as_deref()
        .filter(|o| ORDER_TOKENS.contains(o))
        .unwrap_or(DEFAULT_ORDER);

    let adverts = service.list_adverts(page, order_by).await?;
    if adverts.is_empty() {
        return Err(ApiError::EmptyPage);
    }
    Ok((StatusCode::OK, Json(adverts)))
}

/// Parses the `fields` query value. Valid only when splitting on commas
/// yields one or two tokens and every token, lowercased, names an optional
/// field; anything else degrades silently to the empty set.
fn parse_fields(raw: &str) -> Vec<Field> {
    let tokens: Vec<&str> = raw.split(',').collect();
    if tokens.len() > 2 {
        return Vec::new();
    }
    let mut fields = Vec::new();
    for token in tokens {
        match token.to_lowercase().as_str() {
            "description" => fields.push(Field::Description),
            "pictures" => fields.push(Field::Pictures),
            _ => return Vec::new(),
        }
    }
    fields
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/create", post(create))
        .route("/get/{id}", get(get_by_id))
        .route("/list", get(list))
}
