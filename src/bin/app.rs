use clap::{Parser, Subcommand};
use std::process;
use tokio::signal;
use user_service::api::routes::routes;
use user_service::api::server_state::ServerState;
use user_service::api::dto::{CreateUserRequest, UpdateUserRequest};
use user_service::application::configuration::composed::Configuration;
use user_service::application::configuration::database::EnvNames as DatabaseEnvNames;
use user_service::application::service::user_service::create_user_service;
use user_service::cli::seed_users::seed_users;
use user_service::domain::error::ServiceError;
use user_service::domain::user::User;
use user_service::infrastructure::database::create_pool;
use user_service::infrastructure::repository::create_user_repository;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "🚀 Start the server")]
    Start,
    CreateUser {
        #[arg(short, long)]
        first_name: String,
        #[arg(short, long)]
        last_name: Option<String>,
        #[arg(short, long)]
        email: String,
    },
    GetUser {
        #[arg(short, long)]
        id: i64,
    },
    ListUsers,
    UpdateUser {
        #[arg(short, long)]
        id: i64,
        #[arg(short, long)]
        first_name: Option<String>,
        #[arg(short, long)]
        last_name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    DeleteUser {
        #[arg(short, long)]
        id: i64,
    },
    SeedUsers {
        #[arg(short, long, default_value_t = 100)]
        count: usize,
    },
    HealthCheck,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = Configuration::default();
    let cli = Cli::parse();

    setup_logging(&config);

    debug_config(&config);

    let db_pool = create_pool(config.db()).await.unwrap();
    db_pool.migrate().await.unwrap();

    let user_repository = create_user_repository(&db_pool);
    let user_service = create_user_service(user_repository);

    match cli.command {
        Some(Commands::Start) | None => {
            let port = config.app().port();
            let host = config.app().host();
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await;

            let state = ServerState::new(user_service);

            match listener {
                Ok(listener) => {
                    tracing::info!("Server started at {}", &addr);
                    axum::serve(listener, routes(state))
                        .with_graceful_shutdown(shutdown_signal())
                        .await
                        .unwrap();
                }
                Err(e) => {
                    tracing::error!("Failed to bind to port {}: {}", port, e);
                }
            }
        }
        Some(Commands::CreateUser {
            first_name,
            last_name,
            email,
        }) => {
            let request = CreateUserRequest {
                first_name,
                last_name,
                email,
            };
            if let Err(e) = request.validate() {
                fail(e.message);
            }

            let user = user_service.create_user(request.into()).await;
            print_user("User created", user);
        }
        Some(Commands::GetUser { id }) => {
            print_user("User found", user_service.get_user(id).await);
        }
        Some(Commands::ListUsers) => match user_service.get_all_users().await {
            Ok(users) => {
                println!("Found {} users", users.len());
                for user in users {
                    println!("{}", describe(&user));
                }
            }
            Err(e) => fail_with(e),
        },
        Some(Commands::UpdateUser {
            id,
            first_name,
            last_name,
            email,
        }) => {
            let request = UpdateUserRequest {
                first_name,
                last_name,
                email,
            };
            if let Err(e) = request.validate() {
                fail(e.message);
            }

            let user = user_service.update_user(id, request.into()).await;
            print_user("User updated", user);
        }
        Some(Commands::DeleteUser { id }) => {
            print_user("User deleted", user_service.delete_user(id).await);
        }
        Some(Commands::SeedUsers { count }) => {
            match seed_users(user_service.as_ref(), count).await {
                Ok(users) => println!("Seeded {} users", users.len()),
                Err(e) => fail_with(e),
            }
        }
        Some(Commands::HealthCheck) => {}
    }

    db_pool.close().await;
}

fn describe(user: &User) -> String {
    format!(
        "{} {} {} <{}> created at {}",
        user.id,
        user.first_name,
        user.last_name.as_deref().unwrap_or("-"),
        user.email,
        user.created_at.format("%Y-%m-%d %H:%M:%S")
    )
}

fn print_user(label: &str, result: Result<User, ServiceError>) {
    match result {
        Ok(user) => println!("{}: {}", label, describe(&user)),
        Err(e) => fail_with(e),
    }
}

fn fail_with(error: ServiceError) -> ! {
    fail(error.to_string())
}

fn fail(message: String) -> ! {
    eprintln!("{}", message);
    process::exit(1)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.unwrap();
        tracing::info!("Received Ctrl+C, starting graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .unwrap()
            .recv()
            .await;
        tracing::info!("Received terminate signal, starting graceful shutdown");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn setup_logging(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_max_level(config.app().log_level())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting user service");
}

fn debug_config(config: &Configuration) {
    let message = "Configuration loaded successfully";
    for (name, value) in config.envs() {
        match name.as_str() {
            DatabaseEnvNames::DATABASE_URL => {
                tracing::debug!(message, env = name, value = %mask_credentials(&value));
            }
            _ => {
                tracing::debug!(message, env = name, value = %value);
            }
        }
    }
}

fn mask_credentials(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://****{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

