use crate::helpers::spawn_app;

#[tokio::test]
async fn updating_an_unknown_email_still_reports_success() {
    // GIVEN
    let app = spawn_app().await;

    // WHEN
    let result = app
        .post_status_update("email=ghost%40example.com&status=paid".to_string())
        .await;

    // THEN
    assert_eq!(200, result.status());
    assert_eq!(
        result.text().await.expect("Failed to read response body"),
        "User status updated to paid."
    );
    assert_eq!(app.user_count().await, 0);
}

#[tokio::test]
async fn updating_status_flips_only_the_matching_row() {
    // GIVEN
    let app = spawn_app().await;
    app.post_register(
        "full_name=Jane%20Doe&email=jane%40example.com&password=secret123".to_string(),
    )
    .await;
    app.post_register(
        "full_name=John%20Doe&email=john%40example.com&password=hunter2222".to_string(),
    )
    .await;

    // WHEN
    let result = app
        .post_status_update("email=jane%40example.com&status=paid".to_string())
        .await;

    // THEN
    assert_eq!(200, result.status());
    assert_eq!(
        result.text().await.expect("Failed to read response body"),
        "User status updated to paid."
    );

    let jane = fetch_status(&app.database, "jane@example.com").await;
    let john = fetch_status(&app.database, "john@example.com").await;
    assert_eq!(jane, "paid");
    assert_eq!(john, "unpaid");
}

#[tokio::test]
async fn a_paid_user_can_be_moved_back_to_unpaid() {
    // GIVEN
    let app = spawn_app().await;
    app.post_register(
        "full_name=Jane%20Doe&email=jane%40example.com&password=secret123".to_string(),
    )
    .await;
    app.post_status_update("email=jane%40example.com&status=paid".to_string())
        .await;

    // WHEN
    let result = app
        .post_status_update("email=jane%40example.com&status=unpaid".to_string())
        .await;

    // THEN
    assert_eq!(200, result.status());
    assert_eq!(fetch_status(&app.database, "jane@example.com").await, "unpaid");
}

#[tokio::test]
async fn update_returns_400_on_an_unknown_status_value() {
    // GIVEN
    let app = spawn_app().await;
    app.post_register(
        "full_name=Jane%20Doe&email=jane%40example.com&password=secret123".to_string(),
    )
    .await;

    let test_cases = [
        ("email=jane%40example.com&status=gold", "unknown status"),
        ("email=jane%40example.com&status=", "empty status"),
        ("email=jane%40example.com&status=PAID", "wrong case"),
        ("email=jane%40example.com", "missing status"),
    ];

    for (invalid_body, why_invalid_body_message) in test_cases {
        // WHEN
        let result = app.post_status_update(invalid_body.to_string()).await;

        // THEN
        assert_eq!(
            400,
            result.status(),
            "The API did not fail properly with Bad Request (400) when the body had {why_invalid_body_message}"
        );
    }

    assert_eq!(fetch_status(&app.database, "jane@example.com").await, "unpaid");
}

async fn fetch_status(database: &sqlx::PgPool, email: &str) -> String {
    let (status,): (String,) = sqlx::query_as("SELECT status FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(database)
        .await
        .expect("Failed to get user status");
    status
}
