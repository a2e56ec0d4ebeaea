use serde::{Deserialize, Serialize};

use crate::models::{ItemReport, ItemType, ReportKind};

/// Optional filters for browsing reports
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    /// Matched against item name and description
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub item_type: Option<ItemType>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Predicate that holds when every supplied criterion matches.
    /// Blank text criteria count as absent.
    pub fn predicate(&self) -> impl Fn(&ItemReport) -> bool {
        let query = needle(&self.query);
        let location = needle(&self.location);
        let item_type = self.item_type;

        move |report: &ItemReport| {
            let details = report.details();
            let query_ok = query.as_ref().map_or(true, |q| {
                details.item_name.to_lowercase().contains(q.as_str())
                    || details.description.to_lowercase().contains(q.as_str())
            });
            let location_ok = location
                .as_ref()
                .map_or(true, |l| details.location.to_lowercase().contains(l.as_str()));
            let type_ok = item_type.map_or(true, |t| details.item_type == Some(t));

            query_ok && location_ok && type_ok
        }
    }

    pub fn matches(&self, report: &ItemReport) -> bool {
        (self.predicate())(report)
    }

    /// Reports passing the predicate, in the order given
    pub fn filter<'a>(&self, reports: &'a [ItemReport]) -> impl Iterator<Item = &'a ItemReport> {
        let predicate = self.predicate();
        reports.iter().filter(move |report| predicate(*report))
    }
}

fn needle(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Newest reports of one kind, newest first
pub fn recent(reports: &[ItemReport], kind: ReportKind, limit: usize) -> Vec<&ItemReport> {
    let mut newest: Vec<&ItemReport> = reports.iter().filter(|r| r.kind() == kind).collect();
    newest.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    newest.truncate(limit);
    newest
}
