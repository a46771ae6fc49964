//! Display content handed back to the front end as plain lines.

use crate::studios::StudioListing;
use crate::types::{HouseholdProfile, MemberRole};

/// Summary of a saved profile: counts, dietary restrictions, then named members
pub fn profile_summary(profile: &HouseholdProfile) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Using saved preferences: {} adults and {} kids",
            profile.adult_count, profile.kid_count
        ),
        format!(
            "Dietary Restrictions: {}",
            if profile.dietary_restrictions.is_empty() {
                "None"
            } else {
                profile.dietary_restrictions.as_str()
            }
        ),
    ];

    // Unnamed members are still used in the prompt, just not listed here
    for member in profile.members.iter().filter(|m| !m.name.is_empty()) {
        let label = match member.role {
            MemberRole::Adult => "Adult",
            MemberRole::Kid => member.age_group_label(),
        };
        lines.push(format!(
            "{} ({}) - Preferences: {}",
            member.name, label, member.preferences
        ));
    }

    lines
}

/// One block of lines per studio listing
pub fn studio_card(listing: &StudioListing) -> Vec<String> {
    vec![
        format!("### {}", listing.name),
        format!("Address: {}", listing.address),
        format!("Distance: {}", listing.distance),
        format!("Price: {}", listing.price),
        format!("Rating: {:.1}★", listing.rating),
        if listing.available {
            "Available!".to_string()
        } else {
            "Not Available".to_string()
        },
    ]
}

/// Confirmation shown after picking a studio. Booking itself happens on the studio's site.
pub fn booking_notice(listing: &StudioListing) -> Vec<String> {
    vec![
        format!("Booking {}...", listing.name),
        "You'll be redirected to Shoott Photography's website to complete your booking.".to_string(),
    ]
}
