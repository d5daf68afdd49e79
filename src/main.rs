use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncWriteExt, BufReader};

use hacker_stories::cli::{render_screen, run_repl, Args};
use hacker_stories::config::Config;
use hacker_stories::fetch::{AlgoliaClient, StorySource};
use hacker_stories::logging::init_tracing;
use hacker_stories::persist::{FileStore, KeyValueStore, MemoryStore, SemiPersistent};
use hacker_stories::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let kv: Box<dyn KeyValueStore> = if args.no_persist {
        Box::new(MemoryStore::new())
    } else {
        let path = config.state_path();
        Box::new(
            FileStore::open(&path)
                .with_context(|| format!("opening state file {}", path.display()))?,
        )
    };

    let query = config
        .query_builder()
        .context("building search endpoint from config")?;
    let source = AlgoliaClient::from_config(&config.api)?;
    let search_term = SemiPersistent::new(
        kv,
        config.search.storage_key.as_str(),
        config.search.default_term.as_str(),
    );

    let mut session = Session::new(source, search_term, query);
    tracing::info!(endpoint = %config.api.base_url, "Starting session");

    run(&mut session, &args).await
}

async fn run<S: StorySource, K: KeyValueStore>(
    session: &mut Session<S, K>,
    args: &Args,
) -> anyhow::Result<()> {
    if let Some(term) = &args.term {
        session.set_search_term(term.as_str());
    }
    session.start();
    session.settle().await;

    for _ in 1..args.pages {
        if session.state().is_error() {
            break;
        }
        session.more()?;
        session.settle().await;
    }

    if let Some(key) = args.sort {
        session.sort_by(key);
        if args.reverse {
            session.sort_by(key);
        }
    }

    let mut stdout = tokio::io::stdout();
    let screen = render_screen(
        session.search_term(),
        session.state(),
        &session.visible_stories(),
        session.sort(),
    );
    stdout.write_all(screen.as_bytes()).await?;

    if args.interactive {
        run_repl(session, BufReader::new(tokio::io::stdin()), stdout).await?;
    } else {
        stdout.flush().await?;
    }

    Ok(())
}
