//! Waste reports
//!
//! Document `waste_reports`. Field keys per id: `report_{id}_id`,
//! `_description`, `_location`, `_date` (epoch millis) and `_photo_uri`.

use bluesweep_core::time::{epoch, from_millis, to_millis};
use bluesweep_core::{NewWasteReport, ReportId, StorageEffects, TimeEffects, WasteReport};
use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

use crate::document::{PreferencesDocument, SnapshotStream};
use crate::error::StoreError;
use crate::preferences::{PrefKey, Preferences};

/// Storage key of the reports document.
pub const REPORTS_DOCUMENT_KEY: &str = "waste_reports";

const FIELDS: [&str; 5] = ["id", "description", "location", "date", "photo_uri"];

fn count_key() -> PrefKey<i64> {
    PrefKey::new("report_count")
}

fn field<T>(id: u32, name: &str) -> PrefKey<T> {
    PrefKey::new(format!("report_{id}_{name}"))
}

/// Highest id handed out; see the events store for the fallback rule.
fn read_count(prefs: &Preferences) -> u32 {
    let counter = prefs
        .get(&count_key())
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0);
    counter.max(prefs.highest_slot("report"))
}

fn decode_slot(prefs: &Preferences, slot: u32) -> Option<WasteReport> {
    let id = prefs
        .get(&field::<i64>(slot, "id"))
        .and_then(|v| u32::try_from(v).ok())?;
    Some(WasteReport {
        id: ReportId::new(id),
        description: prefs.get_or(&field(slot, "description"), String::new()),
        location: prefs.get_or(&field(slot, "location"), String::new()),
        date: prefs
            .get(&field::<i64>(slot, "date"))
            .map_or_else(epoch, from_millis),
        photo_uri: prefs.get(&field(slot, "photo_uri")),
    })
}

/// Newest first; equal timestamps keep the higher id first.
fn decode_all(prefs: &Preferences) -> Vec<WasteReport> {
    let mut reports: Vec<_> = (1..=read_count(prefs))
        .filter_map(|slot| decode_slot(prefs, slot))
        .collect();
    reports.sort_by_key(|r| Reverse((r.date, r.id)));
    reports
}

fn remove_slot(prefs: &mut Preferences, id: u32) -> bool {
    let mut removed = false;
    for name in FIELDS {
        removed |= prefs.remove(field::<i64>(id, name).name());
    }
    removed
}

/// Store of submitted waste reports.
pub struct WasteReportStore {
    document: PreferencesDocument,
    clock: Arc<dyn TimeEffects>,
    snapshots: watch::Sender<Vec<WasteReport>>,
}

impl fmt::Debug for WasteReportStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WasteReportStore")
            .field("document", &self.document)
            .field("reports", &self.len())
            .finish_non_exhaustive()
    }
}

impl WasteReportStore {
    /// Load the reports document; `clock` stamps new reports.
    pub async fn open(
        storage: Arc<dyn StorageEffects>,
        clock: Arc<dyn TimeEffects>,
    ) -> Result<Self, StoreError> {
        let document = PreferencesDocument::open(storage, REPORTS_DOCUMENT_KEY).await?;
        let (snapshots, _) = watch::channel(decode_all(&document.snapshot().await));
        Ok(Self {
            document,
            clock,
            snapshots,
        })
    }

    /// Current reports, newest first.
    pub fn list(&self) -> Vec<WasteReport> {
        self.snapshots.borrow().clone()
    }

    /// Number of live reports.
    pub fn len(&self) -> usize {
        self.snapshots.borrow().len()
    }

    /// Whether no reports are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Follow the report list. The current list is yielded first.
    pub fn subscribe(&self) -> SnapshotStream<Vec<WasteReport>> {
        SnapshotStream::new(self.snapshots.subscribe())
    }

    /// Persist a report stamped with the current time.
    pub async fn add(&self, report: NewWasteReport) -> Result<WasteReport, StoreError> {
        let now = self.clock.now();
        let (prefs, id) = self
            .document
            .edit(|prefs| {
                let id = read_count(prefs).saturating_add(1);
                prefs.set(&count_key(), i64::from(id));
                prefs.set(&field(id, "id"), i64::from(id));
                prefs.set(&field(id, "description"), report.description.clone());
                prefs.set(&field(id, "location"), report.location.clone());
                prefs.set(&field(id, "date"), to_millis(&now));
                if let Some(uri) = &report.photo_uri {
                    prefs.set(&field(id, "photo_uri"), uri.clone());
                }
                id
            })
            .await?;
        self.publish(&prefs);

        let created = decode_slot(&prefs, id).ok_or_else(|| StoreError::Decode {
            key: REPORTS_DOCUMENT_KEY.to_string(),
            reason: format!("report {id} missing after write"),
        })?;
        tracing::info!(id = %created.id, photo = created.has_photo(), "Submitted waste report");
        Ok(created)
    }

    /// Remove a report; its id is never reused.
    pub async fn delete(&self, id: ReportId) -> Result<bool, StoreError> {
        let (prefs, removed) = self
            .document
            .edit(|prefs| remove_slot(prefs, id.value()))
            .await?;
        if removed {
            self.publish(&prefs);
            tracing::info!(%id, "Deleted waste report");
        }
        Ok(removed)
    }

    /// Remove all reports, keeping the counter.
    pub async fn clear_all(&self) -> Result<usize, StoreError> {
        let (prefs, removed) = self
            .document
            .edit(|prefs| {
                (1..=read_count(prefs))
                    .filter(|&slot| remove_slot(prefs, slot))
                    .count()
            })
            .await?;
        self.publish(&prefs);
        tracing::info!(removed, "Cleared waste reports");
        Ok(removed)
    }

    fn publish(&self, prefs: &Preferences) {
        self.snapshots.send_replace(decode_all(prefs));
    }
}
