use crate::utils::runners::run_database_test_with_default;
use sqlx::{Pool, Sqlite};
use user_service::domain::repository::{RepositoryError, UserRepository};
use user_service::domain::user::{NewUser, UserChanges};
use user_service::infrastructure::sqlite_user_repository::SqliteUserRepository;

fn jon() -> NewUser {
    NewUser::new(
        "Jon".to_string(),
        "jon@snow.test".to_string(),
        Some("Snow".to_string()),
    )
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_can_add_user(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let user = repository.create(&jon()).await.unwrap();
    let row = repository.select_by_id(user.id).await.unwrap();

    assert_eq!(row, user);
    assert_eq!(row.email, "jon@snow.test");
    assert!(row.updated_at.is_none());
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_returns_not_found_for_unknown_id(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let result = repository.select_by_id(999).await;

    match result {
        Err(RepositoryError::NotFound(message)) => {
            assert_eq!(message, "User with id 999 does not exist.")
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_lists_users_in_creation_order(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let iury = repository
        .create(&NewUser::new(
            "Iury".to_string(),
            "rosal@gmail.com".to_string(),
            Some("Rosal".to_string()),
        ))
        .await
        .unwrap();
    let davi = repository
        .create(&NewUser::new(
            "Davi".to_string(),
            "davi@x.com".to_string(),
            None,
        ))
        .await
        .unwrap();

    let users = repository.select_all().await.unwrap();

    assert_eq!(iury.id, 1);
    assert_eq!(iury.last_name, Some("Rosal".to_string()));
    assert_eq!(davi.last_name, None);
    assert_eq!(users, vec![iury, davi]);
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_returns_empty_list_when_there_are_no_users(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let users = repository.select_all().await.unwrap();

    assert!(users.is_empty());
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_updates_only_given_fields(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let user = repository.create(&jon()).await.unwrap();

    let updated = repository
        .update(
            user.id,
            &UserChanges::new().with_email("lord@commander.test".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "lord@commander.test");
    assert_eq!(updated.first_name, "Jon");
    assert_eq!(updated.last_name, Some("Snow".to_string()));
    assert_eq!(updated.created_at, user.created_at);
    assert!(updated.updated_at.is_some());
    assert_eq!(repository.select_by_id(user.id).await.unwrap(), updated);
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_keeps_user_unchanged_on_empty_update(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let user = repository.create(&jon()).await.unwrap();

    let updated = repository.update(user.id, &UserChanges::new()).await.unwrap();

    assert_eq!(updated, user);
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_does_not_update_missing_user(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let user = repository.create(&jon()).await.unwrap();

    let result = repository
        .update(
            user.id + 1,
            &UserChanges::new().with_first_name("Aegon".to_string()),
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    assert_eq!(repository.select_all().await.unwrap(), vec![user]);
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_deletes_user_by_id(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let user = repository.create(&jon()).await.unwrap();

    let deleted = repository.delete_by_id(user.id).await.unwrap();
    let row = repository.select_by_id(user.id).await;

    assert_eq!(deleted, user);
    match row {
        Err(RepositoryError::NotFound(_)) => {}
        Ok(user) => panic!("User {} was not deleted", user.email),
        Err(e) => panic!("Unexpected error: {}", e),
    }
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_returns_not_found_when_deleting_missing_user(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let result = repository.delete_by_id(1).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_does_not_reuse_ids_of_deleted_users(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool);
    let first = repository.create(&jon()).await.unwrap();
    repository.delete_by_id(first.id).await.unwrap();

    let second = repository.create(&jon()).await.unwrap();

    assert!(second.id > first.id);
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_reports_fault_when_pool_is_closed(pool: Pool<Sqlite>) {
    let repository = SqliteUserRepository::new(pool.clone());
    pool.close().await;

    let result = repository.select_all().await;

    assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
}

#[tokio::test]
async fn it_works_through_configured_pool() {
    run_database_test_with_default(|c| async move {
        let user = c.user_repository.create(&jon()).await.unwrap();
        let users = c.user_repository.select_all().await.unwrap();

        assert_eq!(users, vec![user]);
    })
    .await;
}
