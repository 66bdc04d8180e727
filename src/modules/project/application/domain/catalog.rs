// src/modules/project/application/domain/catalog.rs
//
// The browse pipeline: ordering, search filter, featured filter, pagination
// and facet derivation over a snapshot of the public project collection.
// Pure functions; the store adapter is the only async boundary.

use std::collections::BTreeSet;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::text::tags::format_tag_list;

pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct BrowseRequest {
    pub search: Option<String>,
    pub featured_only: bool,
    pub page: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrowseResult {
    pub items: Vec<ProjectView>,
    pub page: u32,
    pub total_pages: u64,
    pub facets: Vec<String>,
}

/// Display order: featured first, then ascending sort_order, newest first
/// on ties. sort_order carries no uniqueness constraint, so the full tuple
/// is what makes the order deterministic.
pub fn sort_catalog(projects: &mut [ProjectView]) {
    projects.sort_by(|a, b| {
        b.is_featured
            .cmp(&a.is_featured)
            .then(a.sort_order.cmp(&b.sort_order))
            .then(b.created_at.cmp(&a.created_at))
    });
}

/// Case-insensitive substring match over title, description and the
/// formatted frameworks string. `needle` must already be trimmed and
/// lowercased.
pub fn matches_search(project: &ProjectView, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || format_tag_list(&project.frameworks)
            .to_lowercase()
            .contains(needle)
}

/// Distinct framework tags across the whole collection, sorted
/// lexicographically. Computed before any filter so the UI can always offer
/// every value.
pub fn collect_facets(projects: &[ProjectView]) -> Vec<String> {
    let tags: BTreeSet<String> = projects
        .iter()
        .flat_map(|p| p.frameworks.iter())
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    tags.into_iter().collect()
}

/// Runs the full pipeline over a snapshot of the collection.
/// An out-of-range page yields an empty item list, never an error.
pub fn browse(projects: Vec<ProjectView>, request: &BrowseRequest) -> BrowseResult {
    let facets = collect_facets(&projects);

    let mut candidates = projects;
    sort_catalog(&mut candidates);

    if let Some(search) = &request.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            candidates.retain(|p| matches_search(p, &needle));
        }
    }

    if request.featured_only {
        candidates.retain(|p| p.is_featured);
    }

    let total_pages = (candidates.len() as u64).div_ceil(PAGE_SIZE as u64);
    let page = request.page.max(1);

    let start = (page as usize - 1) * PAGE_SIZE;
    let items = if start < candidates.len() {
        candidates
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    } else {
        Vec::new()
    };

    BrowseResult {
        items,
        page,
        total_pages,
        facets,
    }
}

/// Up to `limit` projects sharing the subject's first framework tag,
/// excluding the subject itself. Tag comparison is case-insensitive.
pub fn related_projects(
    catalog: &[ProjectView],
    subject: &ProjectView,
    limit: usize,
) -> Vec<ProjectView> {
    let Some(first_tag) = subject.frameworks.first() else {
        return Vec::new();
    };
    let first_tag = first_tag.to_lowercase();

    let mut related: Vec<ProjectView> = catalog
        .iter()
        .filter(|p| p.id != subject.id)
        .filter(|p| p.frameworks.iter().any(|t| t.to_lowercase() == first_tag))
        .cloned()
        .collect();

    sort_catalog(&mut related);
    related.truncate(limit);
    related
}
