//! List command: fetch the catalogue and report entries matching a query.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AppError, CachePolicy};
use crate::ports::CatalogueSource;
use crate::services::CachedCatalogueSource;

/// Options for the list command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Case-insensitive substring to filter names by; `None` lists everything.
    pub query: Option<String>,
    /// Cache policy override; `None` uses the configured policy.
    pub cache: Option<CachePolicy>,
}

/// One rendered catalogue row.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub name: String,
}

/// Outcome of a list operation.
#[derive(Debug, Clone, Serialize)]
pub struct ListReport {
    pub entries: Vec<ListEntry>,
    /// Catalogue size before filtering.
    pub total: usize,
    pub query: Option<String>,
    pub fetched_at: DateTime<Utc>,
    pub from_cache: bool,
}

impl ListReport {
    /// Render the report as human-readable lines.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(format!(
            "Catalogue fetched at {} ({})",
            self.fetched_at.to_rfc3339(),
            if self.from_cache { "cached" } else { "fresh" }
        ));

        for entry in &self.entries {
            lines.push(format!("#{:>3} {}", entry.id, entry.name));
        }

        match (&self.query, self.entries.is_empty()) {
            (Some(query), true) => {
                lines.push(format!("No Pokémon found matching '{}'.", query));
            }
            _ => {
                lines.push(format!("{} of {} shown", self.entries.len(), self.total));
            }
        }

        lines.join("\n")
    }
}

pub fn execute<S: CatalogueSource>(
    source: &CachedCatalogueSource<S>,
    options: &ListOptions,
) -> Result<ListReport, AppError> {
    let snapshot = source.catalogue()?;
    let query = options.query.as_deref().unwrap_or("");
    let filtered = snapshot.catalogue.filter(query);

    let entries = filtered
        .items()
        .iter()
        .map(|item| {
            Ok(ListEntry { id: item.id()?.to_string(), name: item.name.clone() })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(ListReport {
        entries,
        total: snapshot.catalogue.len(),
        query: options.query.clone(),
        fetched_at: snapshot.fetched_at,
        from_cache: snapshot.from_cache,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(entries: Vec<ListEntry>, total: usize, query: Option<&str>) -> ListReport {
        ListReport {
            entries,
            total,
            query: query.map(str::to_string),
            fetched_at: Utc::now(),
            from_cache: false,
        }
    }

    #[test]
    fn text_output_lists_ids_and_names() {
        let rendered = report(
            vec![ListEntry { id: "25".to_string(), name: "pikachu".to_string() }],
            151,
            None,
        )
        .to_text();

        assert!(rendered.contains("# 25 pikachu"));
        assert!(rendered.contains("1 of 151 shown"));
    }

    #[test]
    fn text_output_reports_empty_result_for_a_query() {
        let rendered = report(vec![], 151, Some("zzz")).to_text();
        assert!(rendered.contains("No Pokémon found matching 'zzz'."));
    }
}
