//! Seed the backing store with fixture users.
//!
//! Safe to run repeatedly: fixtures that already exist are skipped.

use anyhow::{Context, Result};
use users_api::database::postgres::PgUserStore;
use users_api::database::{NewUser, UserStore};

const FIXTURES: &[(&str, &str, &str)] = &[
    ("Yamashita Ayaka", "ayamashita@jfa.jp", "nadeshiko1"),
    ("Shimizu Risa", "rshimizu@jfa.jp", "nadeshiko2"),
    ("Minami Moeka", "mminami@jfa.jp", "nadeshiko3"),
];

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = users_api::config::config();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let store = PgUserStore::connect(&database_url, &config.database)
        .await
        .context("failed to connect to database")?;
    store
        .ensure_schema()
        .await
        .context("failed to prepare users table")?;

    tracing::info!("start seeding");

    for (name, email, password) in FIXTURES {
        if store.find_by_email(email).await?.is_some() {
            tracing::info!("user {} already present, skipping", email);
            continue;
        }

        let user = store
            .create(NewUser {
                name: (*name).to_string(),
                email: (*email).to_string(),
                password: (*password).to_string(),
            })
            .await?;
        tracing::info!("created user {} with id {}", user.email, user.id);
    }

    tracing::info!("seeding finished");

    Ok(())
}
