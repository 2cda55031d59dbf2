use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use swing_core::{
    self as sc, ListingEndpoint, PagingCursor, Resource, SortSpec,
    config::Config,
    sa,
    screen::{self, AlbumWithInfoEvent, ListingEvent},
    swing_state::{AlbumHash, Favoritable},
};

mod print;
use print::Line;

#[derive(Parser)]
#[command(author, version, about = "Browse a Swing Music library", long_about = None)]
struct Args {
    /// Config file to read
    #[arg(long, default_value = Config::FILENAME)]
    config: PathBuf,

    /// Overrides the server URL from the config
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides the access token from the config
    #[arg(long)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List albums
    Albums(ListArgs),
    /// List artists
    Artists(ListArgs),
    /// List tracks
    Tracks(ListArgs),
    /// Show an album and its tracks
    Album { hash: String },
    /// Add an item to favorites, or remove it
    Favorite {
        #[arg(value_enum)]
        kind: Kind,
        hash: String,
        #[arg(long)]
        remove: bool,
    },
    /// Write the effective config to the config file
    InitConfig,
}

#[derive(clap::Args)]
struct ListArgs {
    /// Field to sort by, e.g. `created_date` or `title`
    #[arg(long)]
    sort_by: Option<String>,

    #[arg(long, value_enum)]
    order: Option<Order>,

    #[arg(long)]
    page_size: Option<usize>,

    /// Number of pages to show
    #[arg(long, default_value_t = 1)]
    pages: usize,

    /// Fetch every page
    #[arg(long, conflicts_with = "pages")]
    all: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Asc,
    Desc,
}
impl From<Order> for sa::SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => sa::SortOrder::Ascending,
            Order::Desc => sa::SortOrder::Descending,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Album,
    Artist,
    Track,
}
impl From<Kind> for sa::FavoriteType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Album => sa::FavoriteType::Album,
            Kind::Artist => sa::FavoriteType::Artist,
            Kind::Track => sa::FavoriteType::Track,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("swing=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::load(&args.config)?;
    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
    }
    if let Some(access_token) = args.access_token {
        config.server.access_token = access_token;
    }

    let client = Arc::new(sa::Client::new(
        config.server.base_url.clone(),
        config.server.access_token.clone(),
    ));
    let repository = Arc::new(sc::ApiRepository::new(client.clone()));

    match args.command {
        Command::Albums(list) => {
            run_listing(sc::AlbumListing(client), repository, &config, list).await
        }
        Command::Artists(list) => {
            run_listing(sc::ArtistListing(client), repository, &config, list).await
        }
        Command::Tracks(list) => {
            run_listing(sc::TrackListing(client), repository, &config, list).await
        }
        Command::Album { hash } => show_album(repository, AlbumHash(hash)).await,
        Command::Favorite { kind, hash, remove } => {
            use sc::FavoriteRepository as _;
            let favorite = if remove {
                repository.remove_favorite(kind.into(), &hash).await
            } else {
                repository.add_favorite(kind.into(), &hash).await
            };
            let favorite =
                favorite.with_context(|| format!("Failed to update favorite for {hash}"))?;
            println!("{hash}: favorite = {favorite}");
            Ok(())
        }
        Command::InitConfig => {
            config.save(&args.config)?;
            Ok(())
        }
    }
}

async fn run_listing<E>(
    endpoint: E,
    repository: Arc<sc::ApiRepository>,
    config: &Config,
    list: ListArgs,
) -> anyhow::Result<()>
where
    E: ListingEndpoint,
    E::Item: Favoritable + Line + Clone + Sync,
{
    let sort = SortSpec {
        sort_by: list.sort_by.unwrap_or_else(|| config.paging.sort_by.clone()),
        sort_order: list
            .order
            .map(sa::SortOrder::from)
            .unwrap_or(config.paging.sort_order),
    };
    let page_size = list.page_size.unwrap_or(config.paging.page_size);
    let endpoint = Arc::new(endpoint);

    let items = if list.all {
        let mut cursor = PagingCursor::new(endpoint, sort, page_size);
        sc::collect_all(&mut cursor, |count, total| {
            tracing::info!("Fetched {count} items ({total} total)");
        })
        .await?
    } else {
        let screen = screen::listing(endpoint, repository, sort, page_size);
        for _ in 0..list.pages {
            let before = screen.state();
            if before.end_reached() {
                break;
            }
            screen.send(ListingEvent::LoadNextPage);
            let state = screen
                .wait_for(|s| {
                    s.end_reached()
                        || s.items.pages_loaded() > before.items.pages_loaded()
                        || matches!(s.last_load, Some(Resource::Error { .. }))
                })
                .await
                .context("listing stopped before the page loaded")?;
            if let Some(Resource::Error { message, .. }) = &state.last_load {
                anyhow::bail!("{message}");
            }
        }
        screen.state().items.into_items()
    };

    for item in &items {
        println!("{}", item.line());
    }
    tracing::info!("{} items", items.len());
    Ok(())
}

async fn show_album(repository: Arc<sc::ApiRepository>, hash: AlbumHash) -> anyhow::Result<()> {
    let screen = screen::album_with_info(repository.clone(), repository);
    screen.send(AlbumWithInfoEvent::LoadAlbumWithInfo(hash));
    let state = screen
        .wait_for(|s| s.info.is_terminal())
        .await
        .context("album screen stopped before the album loaded")?;
    if let Some(message) = state.info.error_message() {
        anyhow::bail!("{message}");
    }
    print::album(&state);
    Ok(())
}
