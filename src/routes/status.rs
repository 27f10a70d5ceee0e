use std::str::FromStr;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use tera::Tera;

use crate::domain::UserStatus;
use crate::store::StoreError;

#[derive(serde::Deserialize)]
pub struct StatusFormBody {
    pub email: String,
    pub status: String,
}

pub async fn status_form(templates: web::Data<Tera>) -> HttpResponse {
    match templates.render("update_status.html", &tera::Context::new()) {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::html()).body(body),
        Err(e) => {
            tracing::error!("Failed to render status form: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[tracing::instrument(
    name = "Updating a user's subscription status",
    skip(body, db),
    fields(
        user_email = %body.email,
        new_status = %body.status,
    ),
)]
pub async fn update_status(body: web::Form<StatusFormBody>, db: web::Data<PgPool>) -> HttpResponse {
    let status = match UserStatus::from_str(&body.status) {
        Ok(status) => status,
        Err(_) => {
            return HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(format!("{} is not a valid status", body.status))
        }
    };

    // Success is judged on statement execution alone: an email matching zero
    // rows still answers the success line.
    match set_user_status(&db, &body.email, status).await {
        Ok(_) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(format!("User status updated to {status}.")),
        Err(e) => {
            tracing::error!("Failed to update user status: {:?}", e);
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(format!("Error: {e}"))
        }
    }
}

// Zero rows affected is not a failure.
#[tracing::instrument(name = "Updating status in database", skip(db))]
pub async fn set_user_status(
    db: &PgPool,
    email: &str,
    status: UserStatus,
) -> Result<u64, StoreError> {
    let result = sqlx::query("UPDATE users SET status = $1 WHERE email = $2")
        .bind(status.to_string())
        .bind(email)
        .execute(db)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            StoreError::from(e)
        })?;

    Ok(result.rows_affected())
}
