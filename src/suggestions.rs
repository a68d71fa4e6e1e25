use serde::Serialize;

use crate::model::RecipeRecord;

/// Maximum number of entries in each suggestion bucket
pub const SUGGESTION_LIMIT: usize = 5;

/// Name-search results split for a suggestion dropdown.
///
/// `starts_with` and `contains` never share a record and both keep the
/// provider's original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionBucket {
    pub starts_with: Vec<RecipeRecord>,
    pub contains: Vec<RecipeRecord>,
}

impl SuggestionBucket {
    pub fn is_empty(&self) -> bool {
        self.starts_with.is_empty() && self.contains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.starts_with.len() + self.contains.len()
    }

    /// Prefix matches first, then substring matches
    pub fn all(&self) -> impl Iterator<Item = &RecipeRecord> {
        self.starts_with.iter().chain(self.contains.iter())
    }

    pub fn into_all(self) -> Vec<RecipeRecord> {
        let mut all = self.starts_with;
        all.extend(self.contains);
        all
    }
}

/// Partition `records` by how their name matches `query`, five per bucket.
///
/// Callers should gate on a minimum query length: an empty query is a prefix
/// of every name.
pub fn partition(records: &[RecipeRecord], query: &str) -> SuggestionBucket {
    partition_with_limit(records, query, SUGGESTION_LIMIT)
}

pub fn partition_with_limit(
    records: &[RecipeRecord],
    query: &str,
    limit: usize,
) -> SuggestionBucket {
    let lower_query = query.to_lowercase();
    let mut bucket = SuggestionBucket::default();

    for record in records {
        let name = record.name().to_lowercase();
        if name.starts_with(&lower_query) {
            if bucket.starts_with.len() < limit {
                bucket.starts_with.push(record.clone());
            }
        } else if name.contains(&lower_query) && bucket.contains.len() < limit {
            bucket.contains.push(record.clone());
        }
    }

    bucket
}
