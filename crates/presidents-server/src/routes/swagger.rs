//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use super::health::HealthCheck;
use crate::models::{PresidentDto, PresidentPageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::president::list_presidents,
        super::president::list_presidents_paginated,
        super::president::find_presidents_by_name,
        super::president::find_presidents_by_party,
        super::president::create_president,
        super::president::update_president,
        super::president::patch_president,
        super::president::delete_president,
    ),
    info(
        title = "Presidents API",
        version = "0.1.0",
        description = "Registry of presidents: listing, lookup by name or party, full and partial updates.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "President", description = "President records"),
    ),
    components(
        schemas(
            HealthCheck,
            PresidentDto,
            PresidentPageResponse,
        )
    ),
)]
pub struct ApiDoc;
