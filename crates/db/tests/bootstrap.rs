use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    portal_db::health_check(&pool).await.unwrap();

    for table in ["admins", "clients", "client_projects", "project_files"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should exist and start empty");
    }
}

/// The project_status enum carries exactly the four lifecycle values.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_status_enum_values(pool: PgPool) {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT enumlabel::text FROM pg_enum
         JOIN pg_type ON pg_enum.enumtypid = pg_type.oid
         WHERE pg_type.typname = 'project_status'
         ORDER BY enumsortorder",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let labels: Vec<&str> = rows.iter().map(|(l,)| l.as_str()).collect();
    assert_eq!(labels, ["pending", "in_progress", "review", "completed"]);
}

/// The progress CHECK constraint rejects out-of-range values at the schema
/// level (the application clamps before it ever gets here).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_check_constraint(pool: PgPool) {
    let client: (uuid::Uuid,) = sqlx::query_as(
        "INSERT INTO clients (name, email, password_hash) VALUES ('C', 'c@example.com', 'x')
         RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let admin: (uuid::Uuid,) = sqlx::query_as(
        "INSERT INTO admins (username, email, password_hash) VALUES ('a', 'a@example.com', 'x')
         RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let result = sqlx::query(
        "INSERT INTO client_projects (name, client_id, progress, created_by)
         VALUES ('P', $1, 150, $2)",
    )
    .bind(client.0)
    .bind(admin.0)
    .execute(&pool)
    .await;

    assert!(result.is_err(), "progress 150 must violate the CHECK");
}
