//! In-process feedback store.
//!
//! Backs the service when no database URL is configured and serves as the
//! repository in HTTP tests. Records live in a mutex-guarded vector and are
//! lost on restart. Ids come from a counter that `reset_id_sequence` rewinds
//! to one.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{FeedbackRepository, FeedbackRepositoryError};
use crate::domain::{
    CategoryCount, DailyCount, Feedback, FeedbackCategory, FeedbackDraft, FeedbackFilter,
    FeedbackId, PageRequest,
};

#[derive(Debug)]
struct Store {
    records: Vec<Feedback>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

/// Mutex-backed implementation of the feedback repository port.
///
/// # Examples
/// ```
/// use feedback_backend::domain::FeedbackDraft;
/// use feedback_backend::domain::ports::FeedbackRepository;
/// use feedback_backend::outbound::memory::InMemoryFeedbackRepository;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let repo = InMemoryFeedbackRepository::default();
/// let draft = FeedbackDraft::parse(Some("que_bom"), Some("Great service overall!")).unwrap();
/// let stored = repo.insert(&draft).await.unwrap();
/// assert_eq!(stored.id().get(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct InMemoryFeedbackRepository {
    store: Arc<Mutex<Store>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryFeedbackRepository {
    fn default() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl InMemoryFeedbackRepository {
    /// Create an empty store stamping records with `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::default())),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, FeedbackRepositoryError> {
        self.store
            .lock()
            .map_err(|_| FeedbackRepositoryError::connection("feedback store lock poisoned"))
    }
}

/// Newest first; ties broken by the higher id.
fn newest_first(left: &Feedback, right: &Feedback) -> std::cmp::Ordering {
    right
        .created_at()
        .cmp(&left.created_at())
        .then_with(|| right.id().get().cmp(&left.id().get()))
}

fn clamp(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn insert(&self, draft: &FeedbackDraft) -> Result<Feedback, FeedbackRepositoryError> {
        let created_at = self.clock.utc();
        let mut store = self.lock()?;
        let id = FeedbackId::new(store.next_id);
        store.next_id += 1;
        let record = Feedback::new(id, draft.clone(), created_at);
        store.records.push(record.clone());
        Ok(record)
    }

    async fn list(
        &self,
        filter: &FeedbackFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<Feedback>, FeedbackRepositoryError> {
        let store = self.lock()?;
        let mut matching: Vec<Feedback> = store
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matching.sort_by(newest_first);

        Ok(match page {
            Some(page) => matching
                .into_iter()
                .skip(clamp(page.offset))
                .take(clamp(page.limit))
                .collect(),
            None => matching,
        })
    }

    async fn count_all(&self) -> Result<u64, FeedbackRepositoryError> {
        Ok(self.lock()?.records.len() as u64)
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, FeedbackRepositoryError> {
        let store = self.lock()?;
        Ok(FeedbackCategory::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: store
                    .records
                    .iter()
                    .filter(|record| record.category() == category)
                    .count() as u64,
            })
            .filter(|entry| entry.count > 0)
            .collect())
    }

    async fn count_daily_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyCount>, FeedbackRepositoryError> {
        let store = self.lock()?;
        let mut daily: Vec<DailyCount> = Vec::new();
        for record in store.records.iter().filter(|r| r.created_at() >= since) {
            let date = record.created_at().date_naive();
            match daily.iter_mut().find(|entry| entry.date == date) {
                Some(entry) => entry.count += 1,
                None => daily.push(DailyCount { date, count: 1 }),
            }
        }
        daily.sort_by(|left, right| right.date.cmp(&left.date));
        Ok(daily)
    }

    async fn delete_by_id(&self, id: FeedbackId) -> Result<u64, FeedbackRepositoryError> {
        let mut store = self.lock()?;
        let before = store.records.len();
        store.records.retain(|record| record.id() != id);
        Ok((before - store.records.len()) as u64)
    }

    async fn delete_all(&self) -> Result<u64, FeedbackRepositoryError> {
        let mut store = self.lock()?;
        let removed = store.records.len() as u64;
        store.records.clear();
        Ok(removed)
    }

    async fn reset_id_sequence(&self) -> Result<(), FeedbackRepositoryError> {
        self.lock()?.next_id = 1;
        Ok(())
    }
}
