use super::types::{DogId, DogRecord, DogStatus};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Unordered,
    NewestFirst,
    OldestFirst,
}

/// Filter and ordering for `DogStore::list`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DogQuery {
    pub id: Option<DogId>,
    pub status: Option<DogStatus>,
    pub order: SortOrder,
}

impl DogQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn newest_first(mut self) -> Self {
        self.order = SortOrder::NewestFirst;
        self
    }

    pub fn oldest_first(mut self) -> Self {
        self.order = SortOrder::OldestFirst;
        self
    }

    pub fn with_id(mut self, id: DogId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_status(mut self, status: DogStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, record: &DogRecord) -> bool {
        self.id.as_ref().is_none_or(|id| &record.id == id)
            && self.status.is_none_or(|status| record.status == status)
    }

    /// Order `records` in place. Stable, so ties keep store order.
    pub fn sort(&self, records: &mut [DogRecord]) {
        match self.order {
            SortOrder::Unordered => {}
            SortOrder::NewestFirst => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::OldestFirst => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
    }
}
