//! Integration tests for SqliteUserRepository against a real database file

use database::sqlite::close;
use domain_users::*;
use sea_orm::{ConnectionTrait, DbBackend, Statement};
use test_utils::{TestDatabase, TestDataBuilder, assertions};

fn new_user(name: &str, email: &str, password_hash: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
    }
}

async fn stored_password(db: &TestDatabase, id: i64) -> String {
    let conn = db.connection().await;
    let row = conn
        .query_one_raw(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT password FROM users WHERE id = ?",
            [id.into()],
        ))
        .await
        .unwrap()
        .unwrap();
    let password: String = row.try_get("", "password").unwrap();
    close(conn).await;
    password
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connector());

    let first = repo.create(new_user("Ann", "ann@x.com", "h1")).await.unwrap();
    let second = repo.create(new_user("Ben", "ben@x.com", "h2")).await.unwrap();

    assert_eq!(first, 1);
    assert!(second > first);
    assert_eq!(db.count_users().await, 2);
}

#[tokio::test]
async fn test_service_stores_hash_not_plaintext() {
    let db = TestDatabase::new().await;
    let service = UserService::new(SqliteUserRepository::new(db.connector()));
    let builder = TestDataBuilder::from_test_name("stores_hash");
    let password = builder.password();

    let id = service
        .create_user(CreateUser {
            name: Some(builder.name("user", "main")),
            email: Some(builder.email("owner")),
            password: Some(password.clone()),
        })
        .await
        .unwrap();

    let fetched = service.get_user(id).await.unwrap();
    assert_eq!(fetched.name, builder.name("user", "main"));
    assert_eq!(fetched.email, builder.email("owner"));

    let stored = stored_password(&db, id).await;
    assertions::assert_hashed(&stored, &password, "create_user");
}

#[tokio::test]
async fn test_list_is_in_id_order() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connector());

    for (name, email) in [("Cy", "cy@x.com"), ("Al", "al@x.com"), ("Bo", "bo@x.com")] {
        repo.create(new_user(name, email, "h")).await.unwrap();
    }

    let users = repo.list().await.unwrap();
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Cy", "Al", "Bo"]);
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connector());

    let id = repo.create(new_user("Ann", "ann@x.com", "old")).await.unwrap();
    assert!(repo.update(id, new_user("Ann B", "annb@x.com", "new")).await.unwrap());

    let user = assertions::assert_some(repo.get_by_id(id).await.unwrap(), "updated user");
    assert_eq!(user.name, "Ann B");
    assert_eq!(user.email, "annb@x.com");
    assert_eq!(user.password_hash, "new");
}

#[tokio::test]
async fn test_update_missing_user_inserts_nothing() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connector());

    assert!(!repo.update(99, new_user("X", "x@x.com", "h")).await.unwrap());
    assert_eq!(db.count_users().await, 0);
}

#[tokio::test]
async fn test_delete_reports_affected_rows() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connector());

    let id = repo.create(new_user("Ann", "ann@x.com", "h")).await.unwrap();
    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.get_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_by_email_returns_first_match() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connector());

    let first = repo.create(new_user("Ann", "dup@x.com", "h1")).await.unwrap();
    repo.create(new_user("Ann 2", "dup@x.com", "h2")).await.unwrap();

    let user = repo.get_by_email("dup@x.com").await.unwrap().unwrap();
    assert_eq!(user.id, first);
    assert!(repo.get_by_email("nobody@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_search_by_name_uses_like() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connector());

    repo.create(new_user("John Doe", "john@example.com", "h")).await.unwrap();
    repo.create(new_user("Jane Smith", "jane@example.com", "h")).await.unwrap();
    repo.create(new_user("Bob Johnson", "bob@example.com", "h")).await.unwrap();

    let found = repo.search_by_name("john").await.unwrap();
    let names: Vec<_> = found.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Bob Johnson"]);

    assert!(repo.search_by_name("zed").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_binds_pattern_as_value() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connector());

    repo.create(new_user("Ann", "ann@x.com", "h")).await.unwrap();

    let found = repo.search_by_name("'; DROP TABLE users; --").await.unwrap();
    assert!(found.is_empty());
    assert_eq!(db.count_users().await, 1);
}
