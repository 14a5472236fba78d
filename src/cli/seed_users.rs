use crate::application::service::user_service::UserService;
use crate::domain::error::ServiceError;
use crate::domain::user::{NewUser, User};
use fake::Fake;
use fake::faker::internet::raw::FreeEmailProvider;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;

pub fn fake_user() -> NewUser {
    let first_name: String = FirstName(EN).fake();
    let last_name: String = LastName(EN).fake();
    let provider: String = FreeEmailProvider(EN).fake();
    let email = format!(
        "{}.{}@{}",
        email_local_part(&first_name),
        email_local_part(&last_name),
        provider
    );

    NewUser::new(first_name, email, Some(last_name))
}

fn email_local_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Inserts `count` users with generated names through the service. Stops at
/// the first failure.
pub async fn seed_users(
    user_service: &dyn UserService,
    count: usize,
) -> Result<Vec<User>, ServiceError> {
    let mut users = Vec::new();

    for _ in 0..count {
        let user = user_service.create_user(fake_user()).await?;
        users.push(user);
    }

    tracing::info!("Seeded {} users", users.len());

    Ok(users)
}
