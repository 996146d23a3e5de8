use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct NewUserDoc {
    pub telegram_id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub telegram_id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(ToSchema)]
pub struct UploadForm {
    #[schema(format = Binary)]
    pub file: String,
}

#[derive(ToSchema)]
pub struct UploadManyForm {
    pub files: Vec<String>,
}

#[derive(ToSchema)]
pub struct UploadedDoc { pub url: String }

#[derive(ToSchema)]
pub struct UploadedManyDoc { pub urls: Vec<String> }

/// Static part of the document. The per-kind resource routes are generic,
/// so `routes::resources::mount` adds their paths at router build time.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::get_user,
        crate::routes::media::upload,
        crate::routes::media::upload_multiple,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            NewUserDoc,
            UserDoc,
            UploadForm,
            UploadManyForm,
            UploadedDoc,
            UploadedManyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "media")
    )
)]
pub struct ApiDoc;
