use simple_admin_core::config::load_config;
use simple_admin_db::db::connection::create_pool;
use simple_admin_service::seeder::Seeder;
use simple_admin_service::seeder::user::UserTableSeeder;
use tracing_subscriber::EnvFilter;

/// One-shot seed runner: inserts the default batch of fake users and exits.
/// A rejected insert aborts the run with a non-zero exit code.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;

    let pool = create_pool(
        &config.database.url,
        u32::from(config.database.max_connections),
    )
    .await?;

    let mut conn = pool.get().await?;

    let seeder = UserTableSeeder::default();
    seeder.seed(&mut conn).await?;

    tracing::info!(count = seeder.count, "Seeding complete");

    Ok(())
}
