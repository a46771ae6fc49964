//! Explicit form submissions.
//!
//! A front end fills in a [`FamilyForm`] and hands it over whole; nothing in the
//! crate reads widget state directly.

use std::ops::RangeInclusive;
use thiserror::Error;

use crate::types::{FamilyMember, HouseholdProfile, AGE_GROUPS};

pub const ADULT_RANGE: RangeInclusive<u32> = 1..=6;
pub const KID_RANGE: RangeInclusive<u32> = 0..=8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Number of adults must be between {min} and {max}, got {got}")]
    AdultCount { got: u32, min: u32, max: u32 },

    #[error("Number of kids must be between {min} and {max}, got {got}")]
    KidCount { got: u32, min: u32, max: u32 },

    #[error("{entered} {role} entries given but only {count} {role} in the family")]
    TooManyEntries {
        role: &'static str,
        entered: usize,
        count: u32,
    },

    #[error("Unknown age group '{0}'")]
    UnknownAgeGroup(String),
}

/// One optional adult row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberEntry {
    pub name: String,
    pub preferences: String,
}

/// One optional kid row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KidEntry {
    pub name: String,
    pub age_group: String,
    pub preferences: String,
}

impl Default for KidEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            age_group: AGE_GROUPS[0].to_string(),
            preferences: String::new(),
        }
    }
}

/// Everything the family information form collects in one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyForm {
    pub adult_count: u32,
    pub kid_count: u32,
    pub adults: Vec<MemberEntry>,
    pub kids: Vec<KidEntry>,
    pub dietary_restrictions: String,
}

impl Default for FamilyForm {
    fn default() -> Self {
        Self {
            adult_count: 2,
            kid_count: 2,
            adults: Vec::new(),
            kids: Vec::new(),
            dietary_restrictions: String::new(),
        }
    }
}

impl FamilyForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if !ADULT_RANGE.contains(&self.adult_count) {
            return Err(FormError::AdultCount {
                got: self.adult_count,
                min: *ADULT_RANGE.start(),
                max: *ADULT_RANGE.end(),
            });
        }
        if !KID_RANGE.contains(&self.kid_count) {
            return Err(FormError::KidCount {
                got: self.kid_count,
                min: *KID_RANGE.start(),
                max: *KID_RANGE.end(),
            });
        }
        if self.adults.len() > self.adult_count as usize {
            return Err(FormError::TooManyEntries {
                role: "adult",
                entered: self.adults.len(),
                count: self.adult_count,
            });
        }
        if self.kids.len() > self.kid_count as usize {
            return Err(FormError::TooManyEntries {
                role: "kid",
                entered: self.kids.len(),
                count: self.kid_count,
            });
        }
        if let Some(kid) = self
            .kids
            .iter()
            .find(|k| !AGE_GROUPS.contains(&k.age_group.trim()))
        {
            return Err(FormError::UnknownAgeGroup(kid.age_group.clone()));
        }
        Ok(())
    }

    /// Convert the submission into a profile.
    ///
    /// Counts are kept as entered. Rows with neither a name nor preferences are
    /// dropped; adults come first, then kids, each in entry order.
    pub fn into_profile(self) -> Result<HouseholdProfile, FormError> {
        self.validate()?;

        let adults = self
            .adults
            .into_iter()
            .map(|a| FamilyMember::adult(a.name.trim(), a.preferences.trim()));
        let kids = self.kids.into_iter().map(|k| {
            FamilyMember::kid(k.name.trim(), k.age_group.trim(), k.preferences.trim())
        });

        Ok(HouseholdProfile {
            adult_count: self.adult_count,
            kid_count: self.kid_count,
            members: adults.chain(kids).filter(|m| !m.is_blank()).collect(),
            dietary_restrictions: self.dietary_restrictions.trim().to_string(),
        })
    }
}
