use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use secrecy::Secret;
use sqlx::PgPool;
use tera::Tera;
use uuid::Uuid;

use crate::domain::NewUser;
use crate::password::hash_password;
use crate::store::StoreError;

#[derive(serde::Deserialize)]
pub struct RegisterFormBody {
    pub full_name: String,
    pub email: String,
    pub password: Secret<String>,
}

pub async fn register_form(templates: web::Data<Tera>) -> HttpResponse {
    match templates.render("register.html", &tera::Context::new()) {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::html()).body(body),
        Err(e) => {
            tracing::error!("Failed to render registration form: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[tracing::instrument(
    name = "Registering a new user",
    skip(body, db),
    fields(
        user_email = %body.email,
        user_full_name = %body.full_name,
    ),
)]
pub async fn register(body: web::Form<RegisterFormBody>, db: web::Data<PgPool>) -> HttpResponse {
    let new_user: NewUser = match body.0.try_into() {
        Ok(user) => user,
        Err(e) => {
            return HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(e)
        }
    };

    let password_hash = match hash_password(&new_user.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {:?}", e);
            return HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(format!("Error: {e}"));
        }
    };

    match insert_user(&db, &new_user, &password_hash).await {
        Ok(_) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body("Registered successfully!"),
        Err(e) => {
            tracing::error!("Failed to register new user: {:?}", e);
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(format!("Error: {e}"))
        }
    }
}

// `status` is left to the column default on insert.
#[tracing::instrument(name = "Persisting user to database", skip(db, new_user, password_hash))]
pub async fn insert_user(
    db: &PgPool,
    new_user: &NewUser,
    password_hash: &str,
) -> Result<(), StoreError> {
    sqlx::query(
        "INSERT INTO users (id, full_name, email, password, created_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(Uuid::new_v4())
    .bind(new_user.full_name.as_ref())
    .bind(new_user.email.as_ref())
    .bind(password_hash)
    .bind(Utc::now())
    .execute(db)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        StoreError::from(e)
    })?;

    Ok(())
}
