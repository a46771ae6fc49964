use crate::store::StoreError;
use crate::studios::{StudioListing, StudioQuery};
use crate::types::HouseholdProfile;

/// Durable storage for the single household profile
pub trait ProfileStore: Send + Sync {
    /// Reads the saved profile; `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<HouseholdProfile>, StoreError>;

    /// Replaces any saved profile with this one
    fn save(&self, profile: &HouseholdProfile) -> Result<(), StoreError>;

    /// Forgets the saved profile
    fn clear(&self) -> Result<(), StoreError>;
}

/// Source of photo studio listings
pub trait StudioDirectory: Send + Sync {
    /// Listings for a query, in display order
    fn search(&self, query: &StudioQuery) -> Vec<StudioListing>;
}
