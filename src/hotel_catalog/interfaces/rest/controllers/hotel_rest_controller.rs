use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use tracing::error;
use validator::Validate;

use crate::{
    hotel_catalog::{
        domain::{
            model::{
                commands::{
                    create_hotel_command::CreateHotelCommand,
                    delete_hotel_command::DeleteHotelCommand,
                    update_hotel_command::UpdateHotelCommand,
                },
                enums::hotel_domain_error::HotelDomainError,
                queries::{get_hotel_query::GetHotelQuery, list_hotels_query::ListHotelsQuery},
            },
            services::{
                hotel_command_service::HotelCommandService,
                hotel_query_service::HotelQueryService,
            },
        },
        interfaces::rest::resources::{
            create_hotel_request_resource::CreateHotelRequestResource,
            hotel_error_response_resource::HotelErrorResponseResource,
            hotel_resource::{HotelPageResource, HotelResource},
            list_hotels_query_resource::ListHotelsQueryResource,
            update_hotel_request_resource::UpdateHotelRequestResource,
        },
    },
    shared::infrastructure::{
        persistence::pagination::PaginationFilter, storage::file_transferer::UploadFile,
    },
    tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError,
};

pub const TENANT_HEADER: &str = "x-tenant-id";

type ErrorResponse = (StatusCode, Json<HotelErrorResponseResource>);

#[derive(Clone)]
pub struct HotelRestControllerState {
    pub command_service: Arc<dyn HotelCommandService>,
    pub query_service: Arc<dyn HotelQueryService>,
}

pub fn router(state: HotelRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/hotels", post(create_hotel).get(list_hotels))
        .route(
            "/api/v1/hotels/:hotel_id",
            get(get_hotel).put(update_hotel).delete(delete_hotel),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = "hotels",
    params(("x-tenant-id" = String, Header, description = "Tenant id")),
    request_body(content = CreateHotelRequestResource, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Hotel created with every thumbnail stored", body = HotelResource),
        (status = 400, description = "Invalid payload", body = HotelErrorResponseResource),
        (status = 404, description = "Unknown tenant", body = HotelErrorResponseResource),
        (status = 409, description = "Hotel name already in use", body = HotelErrorResponseResource),
        (status = 502, description = "A thumbnail upload failed; the hotel row was kept", body = HotelErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = HotelErrorResponseResource)
    )
)]
pub async fn create_hotel(
    State(state): State<HotelRestControllerState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<(StatusCode, Json<HotelResource>), ErrorResponse> {
    let tenant_id = parse_tenant_header(&headers)?;
    let request = read_create_form(multipart).await?;

    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = CreateHotelCommand::new(
        tenant_id,
        request.name,
        request.description,
        request.address,
        request.thumbnails,
        request.check_duplicate_name,
    )
    .map_err(map_domain_error)?;

    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(HotelResource::from(created))))
}

#[utoipa::path(
    put,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i64, Path, description = "Hotel id"),
        ("x-tenant-id" = String, Header, description = "Tenant id")
    ),
    request_body = UpdateHotelRequestResource,
    responses(
        (status = 200, description = "Hotel updated", body = HotelResource),
        (status = 400, description = "Invalid payload", body = HotelErrorResponseResource),
        (status = 404, description = "Hotel or tenant not found", body = HotelErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = HotelErrorResponseResource)
    )
)]
pub async fn update_hotel(
    State(state): State<HotelRestControllerState>,
    Path(hotel_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<UpdateHotelRequestResource>,
) -> Result<Json<HotelResource>, ErrorResponse> {
    let tenant_id = parse_tenant_header(&headers)?;

    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = UpdateHotelCommand::new(
        tenant_id,
        hotel_id,
        request.name,
        request.description,
        request.address,
    )
    .map_err(map_domain_error)?;

    let updated = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(HotelResource::from(updated)))
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i64, Path, description = "Hotel id"),
        ("x-tenant-id" = String, Header, description = "Tenant id")
    ),
    responses(
        (status = 200, description = "Hotel with grades and thumbnails", body = HotelResource),
        (status = 404, description = "Hotel or tenant not found", body = HotelErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = HotelErrorResponseResource)
    )
)]
pub async fn get_hotel(
    State(state): State<HotelRestControllerState>,
    Path(hotel_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<HotelResource>, ErrorResponse> {
    let tenant_id = parse_tenant_header(&headers)?;
    let query = GetHotelQuery::new(tenant_id, hotel_id).map_err(map_domain_error)?;

    let hotel = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| map_domain_error(HotelDomainError::HotelNotFound))?;

    Ok(Json(HotelResource::from(hotel)))
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "hotels",
    params(
        ("x-tenant-id" = String, Header, description = "Tenant id"),
        ("page" = Option<u32>, Query, description = "1-based page"),
        ("per_page" = Option<u32>, Query, description = "Page size, at most 100"),
        ("order_by" = Option<String>, Query, description = "id, name, created_at or updated_at"),
        ("order_dir" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Page of hotels", body = HotelPageResource),
        (status = 400, description = "Invalid query", body = HotelErrorResponseResource),
        (status = 404, description = "Unknown tenant", body = HotelErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = HotelErrorResponseResource)
    )
)]
pub async fn list_hotels(
    State(state): State<HotelRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<ListHotelsQueryResource>,
) -> Result<Json<HotelPageResource>, ErrorResponse> {
    let tenant_id = parse_tenant_header(&headers)?;

    if let Err(validation_error) = params.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let order_desc = params.order_desc();
    let filter = PaginationFilter::new(params.page, params.per_page, params.order_by, order_desc);
    let query = ListHotelsQuery::new(tenant_id, filter).map_err(map_domain_error)?;

    let page = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(HotelPageResource::from(page)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i64, Path, description = "Hotel id"),
        ("x-tenant-id" = String, Header, description = "Tenant id")
    ),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 404, description = "Hotel or tenant not found", body = HotelErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = HotelErrorResponseResource)
    )
)]
pub async fn delete_hotel(
    State(state): State<HotelRestControllerState>,
    Path(hotel_id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, ErrorResponse> {
    let tenant_id = parse_tenant_header(&headers)?;
    let command = DeleteHotelCommand::new(tenant_id, hotel_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

async fn read_create_form(
    mut multipart: Multipart,
) -> Result<CreateHotelRequestResource, ErrorResponse> {
    let mut request = CreateHotelRequestResource::default();

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "thumbnails" => {
                let file_name = field.file_name().unwrap_or("thumbnail").to_string();
                let content_type = field.content_type().map(str::to_string);
                let content = field.bytes().await.map_err(map_multipart_error)?;

                request.thumbnails.push(
                    (!content.is_empty()).then(|| UploadFile::new(file_name, content_type, content)),
                );
            }
            "name" => request.name = field.text().await.map_err(map_multipart_error)?,
            "description" => {
                request.description = Some(field.text().await.map_err(map_multipart_error)?)
            }
            "address" => request.address = Some(field.text().await.map_err(map_multipart_error)?),
            "check_duplicate_name" => {
                let raw = field.text().await.map_err(map_multipart_error)?;
                request.check_duplicate_name = parse_form_flag(&raw)?;
            }
            _ => {}
        }
    }

    Ok(request)
}

fn parse_form_flag(raw: &str) -> Result<bool, ErrorResponse> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "off" => Ok(false),
        "true" | "1" | "on" => Ok(true),
        other => Err(bad_request(format!(
            "check_duplicate_name must be a boolean, got {other}"
        ))),
    }
}

fn parse_tenant_header(headers: &HeaderMap) -> Result<String, ErrorResponse> {
    headers
        .get(TENANT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| bad_request(format!("missing {TENANT_HEADER} header")))
}

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(HotelErrorResponseResource { message }),
    )
}

fn map_multipart_error(error: axum::extract::multipart::MultipartError) -> ErrorResponse {
    (
        error.status(),
        Json(HotelErrorResponseResource {
            message: error.body_text(),
        }),
    )
}

fn map_domain_error(error: HotelDomainError) -> ErrorResponse {
    let status = match &error {
        HotelDomainError::InvalidHotelId
        | HotelDomainError::InvalidHotelName
        | HotelDomainError::InvalidHotelDescription
        | HotelDomainError::InvalidHotelAddress
        | HotelDomainError::EmptyPatch
        | HotelDomainError::Tenancy(TenancyDomainError::InvalidTenantId) => {
            StatusCode::BAD_REQUEST
        }
        HotelDomainError::HotelNotFound
        | HotelDomainError::Tenancy(TenancyDomainError::TenantNotFound) => StatusCode::NOT_FOUND,
        HotelDomainError::Tenancy(TenancyDomainError::TenantInactive) => StatusCode::FORBIDDEN,
        HotelDomainError::HotelNameAlreadyExists => StatusCode::CONFLICT,
        HotelDomainError::ThumbnailUploadFailed(_) => StatusCode::BAD_GATEWAY,
        HotelDomainError::InfrastructureError(_)
        | HotelDomainError::Tenancy(TenancyDomainError::InfrastructureError(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        error!(error = %error, "hotel request failed");
    }

    (
        status,
        Json(HotelErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
