//! Catalogue snapshot model and client-side filtering.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One entry in the Pokémon catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueItem {
    /// Display name, unique within a catalogue snapshot.
    pub name: String,
    /// Upstream resource URL; its second-to-last path segment is the numeric id.
    pub url: String,
}

impl CatalogueItem {
    /// Numeric identifier encoded in the resource URL.
    pub fn id(&self) -> Result<&str, AppError> {
        extract_id(&self.url)
    }
}

/// An ordered catalogue snapshot, in upstream API order.
///
/// Immutable once fetched; filtering produces a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    items: Vec<CatalogueItem>,
}

impl Catalogue {
    pub fn new(items: Vec<CatalogueItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogueItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keep the items whose name contains `query` as a case-insensitive
    /// substring, preserving relative order. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Catalogue {
        let needle = query.to_lowercase();
        Catalogue {
            items: self
                .items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        }
    }
}

/// Extract the second-to-last slash-delimited segment of a resource reference.
///
/// PokéAPI resource URLs end in `/<id>/`. A reference with fewer than two
/// segments, no trailing slash, or an empty id segment is rejected rather
/// than silently yielding the wrong substring.
pub fn extract_id(source_ref: &str) -> Result<&str, AppError> {
    let segments: Vec<&str> = source_ref.split('/').collect();
    let trailing_empty = segments.last().is_some_and(|segment| segment.is_empty());
    if segments.len() < 2 || !trailing_empty {
        return Err(AppError::InvalidReference(source_ref.to_string()));
    }

    let id = segments[segments.len() - 2];
    if id.is_empty() {
        return Err(AppError::InvalidReference(source_ref.to_string()));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn item(name: &str, id: u32) -> CatalogueItem {
        CatalogueItem {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
        }
    }

    fn sample() -> Catalogue {
        Catalogue::new(vec![
            item("bulbasaur", 1),
            item("charmander", 4),
            item("charizard", 6),
            item("pikachu", 25),
        ])
    }

    #[test]
    fn empty_query_is_identity() {
        let catalogue = sample();
        assert_eq!(catalogue.filter(""), catalogue);
    }

    #[test]
    fn filter_matches_case_insensitive_substring() {
        let filtered = sample().filter("CHAR");
        let names: Vec<&str> =
            filtered.items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["charmander", "charizard"]);
    }

    #[test]
    fn filter_returns_exactly_the_matching_item() {
        let catalogue = Catalogue::new(vec![item("pikachu", 25), item("charmander", 4)]);
        let filtered = catalogue.filter("char");
        assert_eq!(filtered.items(), &[item("charmander", 4)]);
    }

    #[test]
    fn no_match_yields_empty_catalogue() {
        let filtered = sample().filter("mewtwo");
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_on_empty_catalogue_is_empty() {
        assert!(Catalogue::default().filter("char").is_empty());
    }

    #[test]
    fn extract_id_returns_second_to_last_segment() {
        assert_eq!(extract_id("https://api.example/resource/25/").unwrap(), "25");
        assert_eq!(
            extract_id("https://pokeapi.co/api/v2/pokemon/151/").unwrap(),
            "151"
        );
    }

    #[test]
    fn extract_id_rejects_missing_trailing_slash() {
        let err = extract_id("https://api.example/resource/25").unwrap_err();
        assert!(matches!(err, AppError::InvalidReference(_)));
    }

    #[test]
    fn extract_id_rejects_too_few_segments() {
        assert!(matches!(extract_id("/"), Err(AppError::InvalidReference(_))));
        assert!(matches!(
            extract_id("no-slashes"),
            Err(AppError::InvalidReference(_))
        ));
    }

    #[test]
    fn extract_id_rejects_empty_id_segment() {
        let err = extract_id("https://api.example//").unwrap_err();
        assert!(matches!(err, AppError::InvalidReference(_)));
    }

    // Strategy for catalogue snapshots with lowercase ASCII names, the shape
    // the upstream API serves.
    fn catalogue_strategy() -> impl Strategy<Value = Catalogue> {
        proptest::collection::vec(("[a-z]{1,12}", 1u32..1000), 0..30).prop_map(|entries| {
            Catalogue::new(
                entries
                    .into_iter()
                    .map(|(name, id)| CatalogueItem {
                        name,
                        url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
                    })
                    .collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn filter_properties((catalogue, query) in (catalogue_strategy(), "[a-zA-Z]{0,4}")) {
            let filtered = catalogue.filter(&query);
            let needle = query.to_lowercase();

            // Every surviving item matches the query.
            for item in filtered.items() {
                prop_assert!(item.name.to_lowercase().contains(&needle));
            }

            // Order-preserving: the output is a subsequence of the input.
            let mut input = catalogue.items().iter();
            for item in filtered.items() {
                prop_assert!(input.any(|candidate| candidate == item));
            }

            // Idempotent.
            prop_assert_eq!(filtered.filter(&query), filtered.clone());

            // Empty query is the identity transform.
            prop_assert_eq!(catalogue.filter(""), catalogue);
        }
    }
}
