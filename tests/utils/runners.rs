use crate::utils::cli::CommandFactory;
use crate::utils::config::{init_test_config_builder, init_test_database_configuration_builder};
use crate::utils::context::{AcceptanceTestContext, CliTestContext, DatabaseTestContext};
use crate::utils::db::drop_database;
use crate::utils::server::create_test_server;
use dotenvy::{dotenv, from_filename};
use std::future::Future;
use user_service::application::configuration::composed::ConfigurationBuilder;
use user_service::application::configuration::database::DatabaseConfigurationBuilder;
use user_service::application::service::user_service::create_user_service;
use user_service::infrastructure::database::create_pool;
use user_service::infrastructure::repository::create_user_repository;
use uuid::Uuid;

const NONE_CONFIGURATOR: fn(&mut ConfigurationBuilder) = |_| {};
const NONE_DATABASE_CONFIGURATOR: fn(&mut DatabaseConfigurationBuilder) = |_| {};

fn test_case_id() -> String {
    Uuid::new_v4().to_string().replace("-", "_")
}

pub async fn run_database_test_with_default<F, Fut>(test: F)
where
    F: Fn(DatabaseTestContext) -> Fut,
    Fut: Future<Output = ()>,
{
    run_database_test(NONE_DATABASE_CONFIGURATOR, test).await;
}

pub async fn run_database_test<F, Fut, C>(configurator: C, test: F)
where
    F: Fn(DatabaseTestContext) -> Fut,
    Fut: Future<Output = ()>,
    C: FnOnce(&mut DatabaseConfigurationBuilder),
{
    from_filename(".env.test").or(dotenv()).ok();
    let case = test_case_id();
    let config = init_test_database_configuration_builder(&case, configurator).build();

    let pool = create_pool(&config).await.unwrap();
    pool.migrate().await.unwrap();
    let user_repository = create_user_repository(&pool);

    test(DatabaseTestContext::new(user_repository)).await;

    drop_database(&pool, config.database_url()).await;
}

pub async fn run_integration_test_with_default<F, Fut>(test: F)
where
    F: Fn(AcceptanceTestContext) -> Fut,
    Fut: Future<Output = ()>,
{
    run_integration_test(NONE_CONFIGURATOR, test).await;
}

pub async fn run_integration_test<F, Fut, C>(configurator: C, test: F)
where
    F: Fn(AcceptanceTestContext) -> Fut,
    Fut: Future<Output = ()>,
    C: FnOnce(&mut ConfigurationBuilder),
{
    from_filename(".env.test").or(dotenv()).ok();
    let case = test_case_id();
    let config = init_test_config_builder(&case, configurator).build();

    let pool = create_pool(config.db()).await.unwrap();
    pool.migrate().await.unwrap();
    let user_repository = create_user_repository(&pool);
    let user_service = create_user_service(user_repository.clone());

    let server = create_test_server(user_service.clone());

    test(AcceptanceTestContext::new(
        user_repository,
        user_service,
        server,
    ))
    .await;

    drop_database(&pool, config.db().database_url()).await;
}

pub async fn run_cli_test_with_default<F, Fut>(test: F)
where
    F: Fn(CliTestContext) -> Fut,
    Fut: Future<Output = ()>,
{
    run_cli_test(NONE_CONFIGURATOR, test).await;
}

pub async fn run_cli_test<F, Fut, C>(configurator: C, test: F)
where
    F: Fn(CliTestContext) -> Fut,
    Fut: Future<Output = ()>,
    C: FnOnce(&mut ConfigurationBuilder),
{
    from_filename(".env.test").or(dotenv()).ok();
    let case = test_case_id();
    let config = init_test_config_builder(&case, configurator).build();

    let command_factory = CommandFactory::new(&config);

    let pool = create_pool(config.db()).await.unwrap();
    pool.migrate().await.unwrap();
    let user_repository = create_user_repository(&pool);

    test(CliTestContext::new(user_repository, command_factory)).await;

    drop_database(&pool, config.db().database_url()).await;
}
