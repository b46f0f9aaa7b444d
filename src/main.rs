use anyhow::Result;
use sluggable::{
    application::{
        commands::posts::CreatePostCommand, ports::ClockPort, services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        post::PostRepository,
        slug::{SlugLookup, SlugOverrides},
    },
    infrastructure::{
        database,
        repositories::{SqlitePostRepository, SqliteSlugLookup},
        time::SystemClock,
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let post_repo: Arc<dyn PostRepository> =
        Arc::new(SqlitePostRepository::new(Arc::clone(&pool)));
    let slug_lookup: Arc<dyn SlugLookup> = Arc::new(SqliteSlugLookup::for_posts(Arc::clone(&pool)));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = ApplicationServices::new(
        post_repo,
        slug_lookup,
        clock,
        config.slug_defaults().clone(),
        SlugOverrides::default(),
    );

    let titles: Vec<String> = std::env::args().skip(1).collect();
    if titles.is_empty() {
        tracing::warn!("no titles given; usage: sluggable <title>...");
        return Ok(());
    }

    for title in titles {
        let post = services
            .post_commands
            .create_post(CreatePostCommand {
                title,
                slug: None,
                overrides: SlugOverrides::default(),
            })
            .await?;
        let id = post.id.map(i64::from).unwrap_or_default();
        println!("{id}\t{}", post.slug);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
