//! # BlogSpace CLI
//!
//! Loads posts from the API, applies one command, and prints the result.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use blogspace_core::ports::KeyValueStore;
use blogspace_core::view::Tab;
use blogspace_core::{PostDraft, PostId, PostViewModel};
use blogspace_infra::{FileStore, HttpPostRepository};

mod config;
mod render;
mod telemetry;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "blogspace", version, about = "Browse and manage BlogSpace posts")]
struct Cli {
    /// Base URL of the posts API (overrides BLOGSPACE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log more detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List posts: three featured, then one page of the rest
    List {
        #[arg(long, default_value = "all")]
        tab: Tab,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one post in full
    Show { id: PostId },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        author: String,
    },
    /// Replace a post's title, content, and author
    Edit {
        id: PostId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        author: String,
    },
    /// Delete a post
    Delete { id: PostId },
    /// Search titles and content
    Search { term: String },
    /// Suggest titles for a partial search
    Suggest { input: String },
    /// Toggle the bookmark on a post
    Bookmark { id: PostId },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    telemetry::init_telemetry(cli.verbose);

    let config = CliConfig::from_env().with_api_url(cli.api_url);
    tracing::debug!(api = %config.http.base_url, "Configuration loaded");

    let repo = Arc::new(
        HttpPostRepository::new(config.http.clone()).context("failed to build HTTP client")?,
    );
    let store = open_store(&config).await;
    let vm = PostViewModel::open(repo, store).await;

    vm.load_all().await?;
    run(&vm, cli.command).await
}

/// Pick the bookmark store: Redis when configured and reachable, else a JSON file.
async fn open_store(config: &CliConfig) -> Arc<dyn KeyValueStore> {
    #[cfg(feature = "redis")]
    if config.use_redis {
        match blogspace_infra::RedisStore::from_env().await {
            Ok(store) => return Arc::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "Redis unavailable, falling back to file store");
            }
        }
    }

    Arc::new(FileStore::new(&config.bookmarks_file))
}

async fn run(vm: &PostViewModel, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { tab, page } => {
            vm.set_tab(tab);
            vm.set_page(page);
        }
        Command::Show { id } => {
            let post = vm.fetch_post(id).await?;
            print!("{}", render::render_post(&post, vm.is_bookmarked(id)));
            return Ok(());
        }
        Command::Create {
            title,
            content,
            author,
        } => {
            vm.open_create();
            vm.set_draft(PostDraft::new(title, content, author));
            let post = vm.submit_editor().await?;
            println!("Created post {}", post.id);
        }
        Command::Edit {
            id,
            title,
            content,
            author,
        } => {
            vm.open_edit(id)?;
            vm.set_draft(PostDraft::new(title, content, author));
            let post = vm.submit_editor().await?;
            println!("Updated post {}", post.id);
        }
        Command::Delete { id } => {
            vm.delete(id).await?;
            println!("Deleted post {id}");
        }
        Command::Search { term } => {
            vm.search(&term).await;
        }
        Command::Suggest { input } => {
            for suggestion in vm.suggestions(&input) {
                println!("{suggestion}");
            }
            return Ok(());
        }
        Command::Bookmark { id } => {
            if vm.select(id).is_none() {
                anyhow::bail!("post {id} not found");
            }
            let bookmarked = vm.toggle_bookmark(id).await;
            println!(
                "Post {id} {}",
                if bookmarked { "bookmarked" } else { "unbookmarked" }
            );
            return Ok(());
        }
    }

    println!();
    print!("{}", render::render_snapshot(&vm.snapshot(), &vm.bookmarks()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list_flags() {
        let cli = Cli::try_parse_from(["blogspace", "list", "--tab", "bookmarked", "--page", "2"])
            .unwrap();
        match cli.command {
            Command::List { tab, page } => {
                assert_eq!(tab, Tab::Bookmarked);
                assert_eq!(page, 2);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_tab() {
        assert!(Cli::try_parse_from(["blogspace", "list", "--tab", "starred"]).is_err());
    }

    #[test]
    fn test_cli_create_requires_every_field() {
        assert!(Cli::try_parse_from(["blogspace", "create", "--title", "t"]).is_err());
        assert!(
            Cli::try_parse_from([
                "blogspace", "create", "--title", "t", "--content", "c", "--author", "a"
            ])
            .is_ok()
        );
    }
}
