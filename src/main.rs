use anyhow::Context;
use google_books::Error;

#[derive(argh::FromArgs)]
#[argh(description = "search the google books volumes api by title and author")]
pub struct Options {
    #[argh(option, description = "the title to search for", short = 't', default = "String::new()")]
    pub title: String,

    #[argh(option, description = "the author to search for", short = 'a', default = "String::new()")]
    pub author: String,

    #[argh(
        option,
        description = "the max number of results, between 1 and 40",
        short = 'n',
        default = "String::from(\"10\")"
    )]
    pub max_results: String,
}

fn main() {
    let options: Options = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let code = match real_main(options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{:?}", e);
            1
        }
    };
    std::process::exit(code);
}

/// Whether an error degrades to the "No books found!" empty state
/// instead of being fatal.
///
/// The api omits the `items` array when nothing matches, and a bad status
/// or unparseable body means no data, not a broken invocation.
fn is_empty_state(error: &Error) -> bool {
    matches!(error, Error::Parse(_) | Error::InvalidStatus(_))
}

fn real_main(options: Options) -> anyhow::Result<()> {
    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    tokio_rt.block_on(async_main(options))
}

async fn async_main(options: Options) -> anyhow::Result<()> {
    let client = google_books::Client::new();

    let books = match client
        .search(&options.title, &options.author, &options.max_results)
        .await
    {
        Ok(books) => books,
        Err(Error::Reqwest(e)) if e.is_connect() || e.is_timeout() => {
            eprintln!("No internet connection.");
            return Ok(());
        }
        Err(e) if is_empty_state(&e) => {
            tracing::warn!("recovering with no results: {}", e);
            Vec::new()
        }
        Err(e) => {
            return Err(e).context("failed to search");
        }
    };

    if books.is_empty() {
        println!("No books found!");
        return Ok(());
    }

    for (i, book) in books.iter().enumerate() {
        println!("{})", i + 1);
        if let Some(title) = book.title.as_deref() {
            println!("Title: {}", title);
        }
        if let Some(author) = book.author.as_deref() {
            println!("Author: {}", author);
        }
        if book.page_count != 0 {
            println!("Pages: {}", book.page_count);
        }
        if let Some(language) = book.language.as_deref() {
            println!("Language: {}", language);
        }
        if let Some(description) = book.description.as_deref() {
            println!("Description: {}", description);
        }
        if let Some(preview_url) = book.preview_url.as_deref() {
            println!("Preview: {}", preview_url);
        }
        if let Some(thumbnail_url) = book.thumbnail_url.as_deref() {
            println!("Thumbnail: {}", thumbnail_url);
        }
        println!();
    }

    Ok(())
}
