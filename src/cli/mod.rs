pub mod seed_users;
