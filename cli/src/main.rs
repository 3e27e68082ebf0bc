//! Memes feed terminal client
//!
//! Scrolls one of the site's feeds in the terminal. The screen is a
//! fixed-height window over the rendered items; scrolling it past the last
//! item brings the sentinel into view, which loads the next page.
//!
//! Configuration comes from `MEMES_FEED_*` environment variables (or a
//! `.env` file). Logs go to stderr so they do not interleave with the feed.

mod command;
mod viewport;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use memes_feed::dom::{Selector, TemplateRegistry};
use memes_feed::domain::entities::Page;
use memes_feed::domain::ports::{FeedView, PageFetcher};
use memes_feed::feed::{home_templates, my_posts_templates, Renderable};
use memes_feed::{
    ClientOptions, Config, DocumentView, FeedController, FeedError, FeedParams, FetchError,
    HttpPageFetcher, LoadOutcome, OwnedPostSummary, PageRequest, PostSummary, SiteView,
};

use command::{help_text, Command};
use viewport::Viewport;

/// A finished fetch, handed back to the event loop
type Completion<T> = (PageRequest, Result<Page<T>, FetchError>);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,memes_feed=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(base_url = %config.base_url, view = ?config.view, "Starting memes feed");

    let options = ClientOptions {
        timeout: config.timeout,
        session: config.session.clone(),
    };
    let rows = config.viewport_rows;

    match &config.view {
        SiteView::Home => {
            let fetcher = HttpPageFetcher::<PostSummary>::home(&config.base_url, &options)
                .context("Failed to build HTTP client")?;
            let params = FeedParams::Search(config.search.clone());
            run(fetcher, home_templates(), params, rows).await
        }
        SiteView::Author(username) => {
            let fetcher =
                HttpPageFetcher::<PostSummary>::author(&config.base_url, username, &options)
                    .context("Failed to build HTTP client")?;
            let params = FeedParams::Search(config.search.clone());
            run(fetcher, home_templates(), params, rows).await
        }
        SiteView::MyPosts => {
            if config.session.is_none() {
                tracing::warn!("MEMES_FEED_SESSION is not set; my-posts needs a signed-in session");
            }
            let fetcher = HttpPageFetcher::<OwnedPostSummary>::my_posts(&config.base_url, &options)
                .context("Failed to build HTTP client")?;
            let params = FeedParams::Timezone(config.timezone);
            run(fetcher, my_posts_templates(), params, rows).await
        }
    }
}

/// Event loop: stdin commands and fetch completions, one at a time
async fn run<F>(
    fetcher: F,
    templates: TemplateRegistry,
    params: FeedParams,
    rows: usize,
) -> Result<()>
where
    F: PageFetcher + 'static,
    F::Item: Renderable + 'static,
{
    let mut controller =
        FeedController::new(Arc::new(fetcher), DocumentView::new(), templates, params);
    controller
        .mount()
        .context("Sentinel template is unusable")?;

    let mut viewport = Viewport::new(rows);
    let (tx, mut rx) = mpsc::channel::<Completion<F::Item>>(4);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", help_text());
    observe(&mut controller, &viewport, &tx);
    draw(&controller, &viewport);

    loop {
        // A failed fetch is only retried once the user scrolls again.
        let mut reobserve = true;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Down => viewport.scroll_down(controller.view().item_count()),
                    Command::Up => viewport.scroll_up(),
                    Command::Search(filter) => match controller.apply_filter(&filter) {
                        Ok(()) => viewport.reset(),
                        Err(e) => println!("{}", e),
                    },
                    Command::Help => {
                        println!("{}", help_text());
                        continue;
                    }
                }
            }
            Some((request, result)) = rx.recv() => {
                match controller.complete_request(request, result) {
                    Ok(LoadOutcome::Stale) => continue,
                    Ok(_) => {}
                    Err(FeedError::Fetch(e)) => {
                        println!("Could not load memes ({}); scroll to retry", e);
                        reobserve = false;
                    }
                    Err(e) => {
                        println!("Feed stopped: {}", e);
                        reobserve = false;
                    }
                }
            }
        }

        if reobserve {
            observe(&mut controller, &viewport, &tx);
        }
        draw(&controller, &viewport);
    }

    tracing::info!("Bye");
    Ok(())
}

/// Report the sentinel's visibility and spawn a fetch if the feed asks for one
fn observe<F>(
    controller: &mut FeedController<F, DocumentView>,
    viewport: &Viewport,
    tx: &mpsc::Sender<Completion<F::Item>>,
) where
    F: PageFetcher + 'static,
    F::Item: Renderable + 'static,
{
    let entries = viewport.observe_sentinel(
        controller.view().item_count(),
        controller.view().has_sentinel(),
    );
    let Some(request) = controller.handle_intersection(&entries) else {
        return;
    };

    let fetcher = controller.fetcher();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = fetcher.fetch_page(request.page, &request.params).await;
        if tx.send((request, result)).await.is_err() {
            tracing::debug!("Event loop has exited, dropping page");
        }
    });
}

fn draw<F>(controller: &FeedController<F, DocumentView>, viewport: &Viewport)
where
    F: PageFetcher,
    F::Item: Renderable,
{
    let view = controller.view();
    let items = view.items();
    let window = viewport.window(items.len());

    println!();
    match controller.state().params() {
        FeedParams::Search(filter) if !filter.is_empty() => {
            println!("==== search: {} ({} memes) ====", filter, items.len())
        }
        _ => println!("==== {} memes ====", items.len()),
    }

    for index in window.clone() {
        println!("[{}]", index + 1);
        for line in items[index].outline() {
            println!("    {}", line);
        }
    }

    if window.end < items.len() {
        return;
    }

    let document = view.document();
    if let Some(placeholder) = document.select_first(&Selector::parse(".container-msg")) {
        println!("{}", placeholder.text_content());
    } else if controller.state().in_flight() {
        println!("Loading...");
    } else if let Some(sentinel) = document.select_first(&Selector::parse("#sentinel")) {
        let text = sentinel.text_content();
        if !text.is_empty() {
            println!("{}", text);
        }
    }
}
