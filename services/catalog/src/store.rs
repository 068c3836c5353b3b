//! Listing store: the lookup side of duplicate detection.
//!
//! The store only ever sees canonical identifiers produced by
//! `swapsafe-identifiers`. A listing "blocks" its identifier while it is
//! `active` or `pending`; sold and inactive listings release it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use swapsafe_identifiers::{validate, IdentifierError, IdentifierKind};
use thiserror::Error;
use ulid::Ulid;

/// Errors returned by a listing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another active or pending listing already holds this identifier.
    #[error("identifier already registered to listing {existing}")]
    Duplicate { existing: ListingId },

    /// The listing's identifier does not validate under its declared kind.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    /// The store lock was poisoned by a panicking writer.
    #[error("listing store unavailable")]
    Unavailable,

    #[error("failed to load listings: {0}")]
    Load(String),
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(_: PoisonError<T>) -> Self {
        StoreError::Unavailable
    }
}

/// Listing ID in the form `lst_<ulid>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(Ulid);

impl ListingId {
    pub const PREFIX: &'static str = "lst";

    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let ulid_str = s
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .ok_or_else(|| format!("listing ID must start with '{}_'", Self::PREFIX))?;

        ulid_str
            .parse::<Ulid>()
            .map(Self)
            .map_err(|e| format!("invalid ULID: {e}"))
    }
}

impl Default for ListingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0)
    }
}

impl Serialize for ListingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Pending,
    Sold,
    Inactive,
}

impl ListingStatus {
    /// Whether a listing in this status holds its identifier exclusively.
    pub fn blocks_identifier(&self) -> bool {
        matches!(self, ListingStatus::Active | ListingStatus::Pending)
    }
}

/// The product identity attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueId {
    #[serde(rename = "type", default)]
    pub kind: IdentifierKind,
    /// Canonical once stored; raw input is accepted on registration.
    pub value: String,
}

/// A listing as the store knows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: ListingId,
    pub title: String,
    #[serde(default)]
    pub status: ListingStatus,
    pub unique_id: UniqueId,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Listing {
    pub fn new(title: impl Into<String>, kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self {
            id: ListingId::new(),
            title: title.into(),
            status: ListingStatus::Active,
            unique_id: UniqueId {
                kind,
                value: value.into(),
            },
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn summary(&self) -> ListingSummary {
        ListingSummary {
            listing_id: self.id,
            title: self.title.clone(),
            status: self.status,
        }
    }
}

/// What a duplicate check reveals about the listing that holds an ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub listing_id: ListingId,
    pub title: String,
    pub status: ListingStatus,
}

/// Lookup and registration of listings by canonical identifier.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Find an active or pending listing whose canonical identifier equals
    /// `cleaned`.
    async fn find_blocking(&self, cleaned: &str) -> Result<Option<ListingSummary>, StoreError>;

    /// Register a listing, canonicalizing its identifier first.
    ///
    /// Fails with [`StoreError::Duplicate`] when a blocking listing already
    /// holds the identifier and the new listing would block it too.
    async fn register(&self, listing: Listing) -> Result<ListingSummary, StoreError>;
}

/// In-process listing store.
///
/// Registration takes the write lock for the whole check-then-insert, so
/// two concurrent registrations of one identifier cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryListingStore {
    listings: RwLock<HashMap<ListingId, Listing>>,
}

impl InMemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load listings from a JSON array file.
    pub async fn load_json(&self, path: &Path) -> Result<usize, StoreError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Load(format!("{}: {e}", path.display())))?;
        let listings: Vec<Listing> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Load(e.to_string()))?;

        let count = listings.len();
        for listing in listings {
            self.register(listing).await?;
        }
        Ok(count)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.listings.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn blocking_holder<'a>(
        listings: &'a HashMap<ListingId, Listing>,
        cleaned: &str,
    ) -> Option<&'a Listing> {
        listings
            .values()
            .filter(|l| l.status.blocks_identifier() && l.unique_id.value == cleaned)
            .min_by_key(|l| l.created_at)
    }
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn find_blocking(&self, cleaned: &str) -> Result<Option<ListingSummary>, StoreError> {
        let listings = self.listings.read()?;
        Ok(Self::blocking_holder(&listings, cleaned).map(Listing::summary))
    }

    async fn register(&self, mut listing: Listing) -> Result<ListingSummary, StoreError> {
        let id = validate(&listing.unique_id.value, listing.unique_id.kind).into_result()?;
        listing.unique_id.value = id.into_cleaned();

        let mut listings = self.listings.write()?;
        if listing.status.blocks_identifier() {
            if let Some(existing) = Self::blocking_holder(&listings, &listing.unique_id.value) {
                if existing.id != listing.id {
                    return Err(StoreError::Duplicate {
                        existing: existing.id,
                    });
                }
            }
        }

        let summary = listing.summary();
        listings.insert(listing.id, listing);
        Ok(summary)
    }
}
