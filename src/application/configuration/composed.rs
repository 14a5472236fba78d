use crate::application::configuration::app::{AppConfiguration, AppConfigurationBuilder};
use crate::application::configuration::database::{
    DatabaseConfiguration, DatabaseConfigurationBuilder,
};
use dotenvy::{dotenv, from_filename};
use std::collections::HashMap;

pub struct ConfigurationBuilder {
    pub app: AppConfigurationBuilder,
    pub db: DatabaseConfigurationBuilder,
}

impl ConfigurationBuilder {
    pub fn new(app: AppConfigurationBuilder, db: DatabaseConfigurationBuilder) -> Self {
        ConfigurationBuilder { app, db }
    }

    pub fn build(&self) -> Configuration {
        Configuration::new(self.app.build(), self.db.build())
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    app: AppConfiguration,
    db: DatabaseConfiguration,
}

impl Configuration {
    pub fn new(app: AppConfiguration, db: DatabaseConfiguration) -> Self {
        Configuration { app, db }
    }

    pub fn load<F>(loader: F) -> Self
    where
        F: FnOnce(
            AppConfigurationBuilder,
            DatabaseConfigurationBuilder,
        ) -> (AppConfiguration, DatabaseConfiguration),
    {
        let (app, db) = loader(
            AppConfigurationBuilder::new(),
            DatabaseConfigurationBuilder::new(),
        );

        Configuration { app, db }
    }

    pub fn envs(&self) -> HashMap<String, String> {
        let mut envs = HashMap::new();
        envs.extend(self.app.envs());
        envs.extend(self.db.envs());

        envs
    }

    pub fn app(&self) -> &AppConfiguration {
        &self.app
    }

    pub fn db(&self) -> &DatabaseConfiguration {
        &self.db
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::load(|mut app, mut db| {
            from_filename(".env.local").or(dotenv()).ok();

            (app.load_env().build(), db.load_env().build())
        })
    }
}
