//! Sample resource handlers whose paths carry parameters.
//!
//! They exist so the metrics labels have something to aggregate: every
//! `/{id}` request lands under one route label regardless of the id.

use crate::models::{ItemListResponse, ItemResponse, UserResponse};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

fn path_param<'r>(req: &'r HttpRequest, name: &str) -> Result<&'r str, Error> {
    req.match_info()
        .get(name)
        .ok_or_else(|| actix_web::error::ErrorBadRequest(format!("missing `{name}` parameter")))
}

fn item_id(req: &HttpRequest) -> Result<u64, Error> {
    path_param(req, "id")?
        .parse()
        .map_err(|_| actix_web::error::ErrorBadRequest("item id out of range"))
}

/// Index endpoint
#[api_v2_operation(
    summary = "Index",
    description = "Returns a plain OK.",
    tags("Items"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("OK")
}

/// List items
#[api_v2_operation(
    summary = "List Items",
    description = "Returns the ids of all items.",
    tags("Items"),
    responses((status = 200, description = "Successful response", body = ItemListResponse))
)]
pub async fn list_items() -> Result<web::Json<ItemListResponse>, Error> {
    Ok(web::Json(ItemListResponse {
        items: vec![1, 2, 3],
    }))
}

/// Item detail
#[api_v2_operation(
    summary = "Item Detail",
    description = "Returns a single item by its numeric id.",
    tags("Items"),
    responses(
        (status = 200, description = "Successful response", body = ItemResponse),
        (status = 400, description = "Invalid item id")
    )
)]
pub async fn item_detail(req: HttpRequest) -> Result<web::Json<ItemResponse>, Error> {
    Ok(web::Json(ItemResponse {
        id: item_id(&req)?,
        action: "view".to_string(),
    }))
}

/// Item edit form
#[api_v2_operation(
    summary = "Edit Item",
    description = "Returns the edit view of a single item.",
    tags("Items"),
    responses(
        (status = 200, description = "Successful response", body = ItemResponse),
        (status = 400, description = "Invalid item id")
    )
)]
pub async fn item_edit(req: HttpRequest) -> Result<web::Json<ItemResponse>, Error> {
    Ok(web::Json(ItemResponse {
        id: item_id(&req)?,
        action: "edit".to_string(),
    }))
}

/// User lookup
#[api_v2_operation(
    summary = "User Lookup",
    description = "Returns a user by UUID.",
    tags("Users"),
    responses((status = 200, description = "Successful response", body = UserResponse))
)]
pub async fn user_detail(req: HttpRequest) -> Result<web::Json<UserResponse>, Error> {
    Ok(web::Json(UserResponse {
        user_id: path_param(&req, "user_id")?.to_string(),
    }))
}
