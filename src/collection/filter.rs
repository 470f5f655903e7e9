use crate::collection::coin::Coin;

/// Coins whose title or country contains `query` ignoring case, or whose year
/// contains it verbatim. An empty query keeps everything. Order is preserved.
pub fn filter(collection: &[Coin], query: &str) -> Vec<Coin> {
    let needle = query.to_lowercase();

    collection
        .iter()
        .filter(|coin| matches(coin, query, &needle))
        .cloned()
        .collect()
}

fn matches(coin: &Coin, query: &str, needle: &str) -> bool {
    coin.title.to_lowercase().contains(needle)
        || coin.country.to_lowercase().contains(needle)
        || coin.year.contains(query)
}
