use url::form_urlencoded;
use url::Url;

/// Deep links for subscribing to an RSS feed in third-party podcast clients
///
/// Each entry is a client name and the custom-scheme URL that opens the
/// subscribe flow in that client. Entries whose rendered string does not
/// parse as a URL are skipped.
pub fn subscribe_url_schemes(rss_url: &Url) -> Vec<(&'static str, Url)> {
    let full = rss_url.as_str();
    let scheme_prefix = format!("{}://", rss_url.scheme());
    let stripped = full.strip_prefix(&scheme_prefix).unwrap_or(full);
    let encoded: String = form_urlencoded::byte_serialize(full.as_bytes()).collect();

    let candidates = [
        ("Castro", format!("castro://subscribe/{stripped}")),
        ("Downcast", format!("downcast://{full}")),
        ("Instacast", format!("instacast://{stripped}")),
        ("Overcast", format!("overcast://x-callback-url/add?url={encoded}")),
        ("Pocket Casts", format!("pktc://subscribe/{stripped}")),
        ("Podcasts", format!("podcast://{stripped}")),
        ("Podcat", format!("podcat://{full}")),
    ];

    candidates
        .into_iter()
        .filter_map(|(name, raw)| Url::parse(&raw).ok().map(|url| (name, url)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schemes_for(rss: &str) -> Vec<(&'static str, Url)> {
        subscribe_url_schemes(&Url::parse(rss).unwrap())
    }

    #[test]
    fn generates_all_seven_clients() {
        let schemes = schemes_for("https://example.com/feed.xml");
        let names: Vec<_> = schemes.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "Castro",
                "Downcast",
                "Instacast",
                "Overcast",
                "Pocket Casts",
                "Podcasts",
                "Podcat"
            ]
        );
    }

    #[test]
    fn strips_scheme_where_the_client_expects_it() {
        let schemes = schemes_for("https://example.com/feed.xml");
        let find = |name: &str| {
            schemes
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, url)| url.as_str().to_string())
                .unwrap()
        };
        assert_eq!(find("Castro"), "castro://subscribe/example.com/feed.xml");
        assert_eq!(find("Pocket Casts"), "pktc://subscribe/example.com/feed.xml");
        assert!(find("Downcast").starts_with("downcast://"));
    }

    #[test]
    fn overcast_url_is_percent_encoded() {
        let schemes = schemes_for("https://example.com/feed.xml?a=b");
        let overcast = schemes
            .iter()
            .find(|(name, _)| *name == "Overcast")
            .map(|(_, url)| url.as_str().to_string())
            .unwrap();
        assert_eq!(
            overcast,
            "overcast://x-callback-url/add?url=https%3A%2F%2Fexample.com%2Ffeed.xml%3Fa%3Db"
        );
    }
}
