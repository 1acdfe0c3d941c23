/// The volumes endpoint, up to and including the `q=` parameter
pub const VOLUMES_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes?q=";

/// Join the whitespace-separated words of an input field with `+`,
/// since the api does not allow spaces in a query.
fn join_words(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join("+")
}

/// Build a volumes query url from free-form title and author input
/// and a max results setting.
///
/// A non-empty title becomes an `intitle:` clause and a non-empty author
/// an `inauthor:` clause. The author clause gets a `&` separator only when
/// a title clause is also present. `max_results` is passed through verbatim,
/// the caller is expected to only offer valid values.
///
/// This never fails. With two empty inputs it degenerates to the bare
/// endpoint followed by `&maxResults=`.
pub fn build_query(title: &str, author: &str, max_results: &str) -> String {
    let title_words = join_words(title);
    let title_clause = if title_words.is_empty() {
        String::new()
    } else {
        format!("intitle:{}", title_words)
    };

    let author_words = join_words(author);
    let author_clause = if author_words.is_empty() {
        String::new()
    } else if title_clause.is_empty() {
        format!("inauthor:{}", author_words)
    } else {
        format!("&inauthor:{}", author_words)
    };

    let query = format!(
        "{}{}{}&maxResults={}",
        VOLUMES_ENDPOINT, title_clause, author_clause, max_results
    );
    tracing::debug!("built query \"{}\"", query);

    query
}
