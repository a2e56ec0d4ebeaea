//! Duplicate and match detection
//!
//! A new lost report is compared against recent lost reports (possible
//! duplicates); a new found report is compared against open lost reports
//! (possible matches). Results are advisory only and never block a submission.
//!
//! A candidate must share the item type, have a similar location, and reach the
//! description word-overlap threshold. Candidates are ranked by overlap, newest
//! first on ties, and capped at `max_candidates`.

pub mod similarity;

use chrono::Duration;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use tracing::debug;

use crate::config::DetectorConfig;
use crate::models::{ItemDetails, ItemReport, NewItemReport, ReportKind};
use similarity::{locations_similar, token_overlap};

/// An existing report that resembles the one being submitted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub report: &'a ItemReport,
    pub score: f64,
}

/// Ranked candidates, consumed once
#[derive(Debug)]
pub struct Candidates<'a> {
    inner: std::vec::IntoIter<Candidate<'a>>,
}

impl<'a> Candidates<'a> {
    fn new(ranked: Vec<Candidate<'a>>) -> Self {
        Self {
            inner: ranked.into_iter(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Candidates<'_> {}

impl FusedIterator for Candidates<'_> {}

#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Duplicates for lost reports, matches for found reports
    pub fn detect<'a>(&self, probe: &NewItemReport, existing: &'a [ItemReport]) -> Candidates<'a> {
        match probe.kind() {
            ReportKind::Lost => self.duplicates(probe, existing),
            ReportKind::Found => self.matches(probe, existing),
        }
    }

    /// Recent, unresolved lost reports resembling a new lost report.
    ///
    /// Only reports created within `duplicate_window_days` before the probe
    /// are considered, so an older similar report is not flagged. A window
    /// of 0, or one reaching past the earliest representable time, considers
    /// every lost report.
    pub fn duplicates<'a>(
        &self,
        probe: &NewItemReport,
        existing: &'a [ItemReport],
    ) -> Candidates<'a> {
        let window = self.config.duplicate_window_days;
        let cutoff = match window {
            0 => None,
            days => probe
                .created_at()
                .checked_sub_signed(Duration::days(i64::from(days))),
        };

        let pool = existing.iter().filter(move |r| {
            r.kind() == ReportKind::Lost
                && !r.is_resolved()
                && cutoff.map_or(true, |c| r.created_at() >= c)
        });
        self.rank(probe.details(), pool)
    }

    /// Unresolved lost reports that a new found report may belong to
    pub fn matches<'a>(&self, probe: &NewItemReport, existing: &'a [ItemReport]) -> Candidates<'a> {
        let pool = existing
            .iter()
            .filter(|r| r.kind() == ReportKind::Lost && !r.is_resolved());
        self.rank(probe.details(), pool)
    }

    /// Overlap score when `a` and `b` are similar enough to flag
    pub fn score(&self, a: &ItemDetails, b: &ItemDetails) -> Option<f64> {
        match (a.item_type, b.item_type) {
            (Some(x), Some(y)) if x == y => {}
            _ => return None,
        }
        if !locations_similar(
            &a.location,
            &b.location,
            self.config.location_distance_threshold,
        ) {
            return None;
        }
        let overlap = token_overlap(&a.description, &b.description);
        (overlap >= self.config.overlap_threshold).then_some(overlap)
    }

    fn rank<'a>(
        &self,
        probe: &ItemDetails,
        pool: impl Iterator<Item = &'a ItemReport>,
    ) -> Candidates<'a> {
        let mut ranked: Vec<Candidate<'a>> = pool
            .filter_map(|report| {
                let score = self.score(probe, report.details())?;
                debug!("Report {} scored {:.3}", report.id, score);
                Some(Candidate { report, score })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.report.created_at().cmp(&a.report.created_at()))
        });
        ranked.truncate(self.config.max_candidates);

        Candidates::new(ranked)
    }
}
