//! Photo studio lookup.
//!
//! Only a placeholder directory exists today: it returns fixed listings and does no
//! ranking or filtering. A real search would implement [`StudioDirectory`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::traits::StudioDirectory;

pub const PARTY_SIZE_RANGE: RangeInclusive<u32> = 1..=10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudioError {
    #[error("Location must not be empty")]
    EmptyLocation,

    #[error("Party size must be between {min} and {max}, got {got}")]
    PartySize { got: u32, min: u32, max: u32 },

    #[error("Date {date} must be after {today}")]
    DateNotInFuture { date: NaiveDate, today: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioQuery {
    pub location: String,
    pub date: NaiveDate,
    pub party_size: u32,
}

impl StudioQuery {
    /// Check the query against the booking window starting the day after `today`
    pub fn validate(&self, today: NaiveDate) -> Result<(), StudioError> {
        if self.location.trim().is_empty() {
            return Err(StudioError::EmptyLocation);
        }
        if !PARTY_SIZE_RANGE.contains(&self.party_size) {
            return Err(StudioError::PartySize {
                got: self.party_size,
                min: *PARTY_SIZE_RANGE.start(),
                max: *PARTY_SIZE_RANGE.end(),
            });
        }
        if self.date <= today {
            return Err(StudioError::DateNotInFuture {
                date: self.date,
                today,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioListing {
    pub name: String,
    pub address: String,
    pub price: String,
    pub rating: f32,
    pub available: bool,
    pub distance: String,
}

/// Returns the same two studios for every query
#[derive(Debug, Clone, Default)]
pub struct StaticStudioDirectory;

impl StudioDirectory for StaticStudioDirectory {
    fn search(&self, query: &StudioQuery) -> Vec<StudioListing> {
        log::debug!(
            "Static studio search for {} on {} ({} people)",
            query.location,
            query.date,
            query.party_size
        );
        vec![
            StudioListing {
                name: "Shoott Photography Studio".to_string(),
                address: format!("123 Photo St, {}", query.location),
                price: "$299".to_string(),
                rating: 4.8,
                available: true,
                distance: "5 miles".to_string(),
            },
            StudioListing {
                name: "Family Moments by Shoott".to_string(),
                address: format!("456 Smile Ave, {}", query.location),
                price: "$399".to_string(),
                rating: 4.9,
                available: true,
                distance: "3 miles".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn query() -> StudioQuery {
        StudioQuery {
            location: "San Francisco, CA".to_string(),
            date: date(2026, 10, 20),
            party_size: 4,
        }
    }

    #[test]
    fn test_static_listings_use_location() {
        let listings = StaticStudioDirectory.search(&query());
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].address, "123 Photo St, San Francisco, CA");
        assert!(listings.iter().all(|l| l.available));
    }

    #[test]
    fn test_validate() {
        let today = date(2026, 10, 18);
        assert!(query().validate(today).is_ok());

        let same_day = StudioQuery {
            date: today,
            ..query()
        };
        assert!(matches!(
            same_day.validate(today),
            Err(StudioError::DateNotInFuture { .. })
        ));

        let crowd = StudioQuery {
            party_size: 11,
            ..query()
        };
        assert!(matches!(crowd.validate(today), Err(StudioError::PartySize { got: 11, .. })));

        let nowhere = StudioQuery {
            location: " ".to_string(),
            ..query()
        };
        assert_eq!(nowhere.validate(today), Err(StudioError::EmptyLocation));
    }
}
