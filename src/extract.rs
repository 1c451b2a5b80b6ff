//! External identifier extraction.
//!
//! Plex exposes external ids as provider-tagged guid strings such as
//! `imdb://tt0078748`, `tmdb://603` or `tvdb://121361?lang=en`.
//! Unknown schemes are ignored so new providers on the server side do
//! not break the export; malformed ids for a known provider are
//! dropped with a warning.

use tracing::warn;

use crate::domain::{IdentifierLink, Provider};

/// Extract recognized identifier links from an item's guid strings.
///
/// Output is ordered imdb, tmdb, tvdb with at most one link per
/// provider (first valid id wins), independent of the order of the
/// input. An empty result is a normal outcome, not an error.
pub fn extract(guids: &[String]) -> Vec<IdentifierLink> {
    let mut links = Vec::new();

    for provider in Provider::ALL {
        for guid in guids {
            let lowered = guid.to_ascii_lowercase();
            let Some(rest) = lowered.strip_prefix(provider.scheme()) else {
                continue;
            };

            // Plex sometimes appends query parameters, e.g. ?lang=en
            let id = rest.split('?').next().unwrap_or_default();

            if !provider.is_valid_id(id) {
                warn!(%provider, guid = %guid, "malformed identifier, dropping");
                continue;
            }

            links.push(IdentifierLink::new(provider, id));
            break;
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extracts_all_providers_in_fixed_order() {
        let links = extract(&guids(&[
            "tvdb://121361",
            "imdb://tt0078748",
            "tmdb://348",
        ]));

        assert_eq!(links.len(), 3);
        assert_eq!(links[0], IdentifierLink::new(Provider::Imdb, "tt0078748"));
        assert_eq!(links[1], IdentifierLink::new(Provider::Tmdb, "348"));
        assert_eq!(links[2], IdentifierLink::new(Provider::Tvdb, "121361"));
    }

    #[test]
    fn test_order_independent() {
        let a = extract(&guids(&["imdb://tt0078748", "tmdb://348"]));
        let b = extract(&guids(&["tmdb://348", "imdb://tt0078748"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_idempotent() {
        let input = guids(&["imdb://tt0078748"]);
        assert_eq!(extract(&input), extract(&input));
    }

    #[test]
    fn test_query_suffix_stripped() {
        let links = extract(&guids(&["tvdb://121361?lang=en"]));
        assert_eq!(links, vec![IdentifierLink::new(Provider::Tvdb, "121361")]);
    }

    #[test]
    fn test_unknown_provider_ignored() {
        let links = extract(&guids(&["anidb://12345", "imdb://tt0078748"]));
        assert_eq!(links, vec![IdentifierLink::new(Provider::Imdb, "tt0078748")]);
    }

    #[test]
    fn test_malformed_id_dropped_but_valid_ones_kept() {
        let links = extract(&guids(&["imdb://not-an-id", "tmdb://348"]));
        assert_eq!(links, vec![IdentifierLink::new(Provider::Tmdb, "348")]);
    }

    #[test]
    fn test_at_most_one_id_per_provider() {
        let links = extract(&guids(&["tmdb://348", "tmdb://603"]));
        assert_eq!(links, vec![IdentifierLink::new(Provider::Tmdb, "348")]);
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let links = extract(&guids(&["IMDB://tt0078748"]));
        assert_eq!(links, vec![IdentifierLink::new(Provider::Imdb, "tt0078748")]);
    }

    #[test]
    fn test_no_guids_yields_empty() {
        assert!(extract(&[]).is_empty());
    }
}
