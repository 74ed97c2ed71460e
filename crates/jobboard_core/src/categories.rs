use std::collections::BTreeSet;

use crate::{CategoryFilter, Job};

/// Distinct, non-empty categories present in `jobs`, sorted ascending.
pub fn distinct_categories(jobs: &[Job]) -> Vec<String> {
    jobs.iter()
        .filter_map(Job::category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

/// Selector entries for display: the `All` sentinel followed by `categories`.
pub fn category_options(categories: &[String]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(categories.iter().cloned().map(CategoryFilter::Only))
        .collect()
}
