use clap::Parser;
use quizdrill::db::Db;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL.
    #[arg(long, env, default_value = "sqlite://quizdrill.db?mode=rwc")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Mark session cookies as Secure (behind TLS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,quizdrill=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    if db.bank_is_empty().await? {
        tracing::info!("empty store, loading built-in question bank");
        db.load_bank(quizdrill::models::builtin_bank()?).await?;
        for (name, count) in db.topic_question_counts().await? {
            tracing::info!("  {name}: {count} questions");
        }
    } else {
        tracing::info!("question bank already loaded");
    }

    let state = quizdrill::AppState::new(db, args.secure_cookies);
    let routes = quizdrill::router(state);

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, routes).await?;

    Ok(())
}
