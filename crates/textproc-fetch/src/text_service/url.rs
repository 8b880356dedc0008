//! URL construction helpers for TextService endpoints.
//!
//! Pure functions so every call builds paths the same way.

use url::Url;

use super::query::GenerateQuery;

fn with_path(base: &Url, tail: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{tail}"));
    url.set_query(None);
    url
}

/// `{base}/{kind}/{count}`, plus `order`/`gender` for word-producer kinds.
pub fn build_generate_url(base: &Url, query: &GenerateQuery) -> Url {
    let mut url = with_path(
        base,
        &format!("{}/{}", query.kind.as_path_segment(), query.effective_count()),
    );

    if query.kind.is_word_producer() && (query.order.is_some() || query.gender.is_some()) {
        let mut pairs = url.query_pairs_mut();
        if let Some(order) = query.order {
            pairs.append_pair("order", &order.to_string());
        }
        if let Some(gender) = query.gender {
            pairs.append_pair("gender", gender.as_param());
        }
    }

    url
}

/// `{base}/pattern/{count}`.
pub fn build_pattern_url(base: &Url, count: u32) -> Url {
    with_path(base, &format!("pattern/{count}"))
}
