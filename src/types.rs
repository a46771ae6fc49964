use serde::{Deserialize, Serialize};

/// Age group choices offered for kids
pub const AGE_GROUPS: [&str; 4] = [
    "Teen (13-18)",
    "Child (5-12)",
    "Young Child (1-4)",
    "Infant (< 1)",
];

/// Label used when a kid has no age group recorded
pub const DEFAULT_AGE_GROUP: &str = "Child";

/// Whether a family member is an adult or a kid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Adult,
    Kid,
}

/// A single member of the household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub role: MemberRole,
    pub name: String,
    /// Only meaningful for kids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    pub preferences: String,
}

impl FamilyMember {
    /// Creates an adult member
    pub fn adult(name: impl Into<String>, preferences: impl Into<String>) -> Self {
        Self {
            role: MemberRole::Adult,
            name: name.into(),
            age_group: None,
            preferences: preferences.into(),
        }
    }

    /// Creates a kid member with an age group
    pub fn kid(
        name: impl Into<String>,
        age_group: impl Into<String>,
        preferences: impl Into<String>,
    ) -> Self {
        Self {
            role: MemberRole::Kid,
            name: name.into(),
            age_group: Some(age_group.into()),
            preferences: preferences.into(),
        }
    }

    /// True when there is nothing worth telling the model about this member
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.preferences.is_empty()
    }

    /// Age group for display, falling back to a generic label
    pub fn age_group_label(&self) -> &str {
        match self.age_group.as_deref() {
            Some(group) if !group.is_empty() => group,
            _ => DEFAULT_AGE_GROUP,
        }
    }

    /// One line describing this member for the menu prompt
    pub fn details_line(&self) -> String {
        match self.role {
            MemberRole::Adult => format!("Adult: {}, Preferences: {}", self.name, self.preferences),
            MemberRole::Kid => format!(
                "Child: {}, {}, Preferences: {}",
                self.name,
                self.age_group_label(),
                self.preferences
            ),
        }
    }
}

/// The persisted record of family composition and preferences.
///
/// The counts are authoritative: naming members is optional, so `members`
/// may hold fewer entries than `adult_count + kid_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub adult_count: u32,
    pub kid_count: u32,
    pub members: Vec<FamilyMember>,
    pub dietary_restrictions: String,
}

impl HouseholdProfile {
    pub fn new(adult_count: u32, kid_count: u32) -> Self {
        Self {
            adult_count,
            kid_count,
            ..Self::default()
        }
    }

    pub fn with_member(mut self, member: FamilyMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_dietary_restrictions(mut self, restrictions: impl Into<String>) -> Self {
        self.dietary_restrictions = restrictions.into();
        self
    }

    /// Total number of people to plan for
    pub fn family_size(&self) -> u32 {
        self.adult_count.saturating_add(self.kid_count)
    }

    /// Flattens members into the text block sent with a menu request.
    ///
    /// Members with neither a name nor preferences are skipped. Order follows `members`.
    pub fn family_details(&self) -> String {
        self.members
            .iter()
            .filter(|member| !member.is_blank())
            .map(|member| format!("{}\n", member.details_line()))
            .collect()
    }
}

/// A single menu generation request. Built per action and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRequest {
    pub family_size: u32,
    pub dietary_restrictions: String,
    pub family_details_text: String,
    pub leftover_ingredients: String,
}

impl MenuRequest {
    /// Creates a request with no optional constraints
    pub fn new(family_size: u32) -> Self {
        Self {
            family_size,
            dietary_restrictions: String::new(),
            family_details_text: String::new(),
            leftover_ingredients: String::new(),
        }
    }

    /// Builds a request from a stored profile plus this session's leftovers
    pub fn from_profile(profile: &HouseholdProfile, leftover_ingredients: impl Into<String>) -> Self {
        Self {
            family_size: profile.family_size(),
            dietary_restrictions: profile.dietary_restrictions.clone(),
            family_details_text: profile.family_details(),
            leftover_ingredients: leftover_ingredients.into(),
        }
    }

    pub fn with_dietary_restrictions(mut self, restrictions: impl Into<String>) -> Self {
        self.dietary_restrictions = restrictions.into();
        self
    }

    pub fn with_family_details(mut self, details: impl Into<String>) -> Self {
        self.family_details_text = details.into();
        self
    }

    pub fn with_leftovers(mut self, leftovers: impl Into<String>) -> Self {
        self.leftover_ingredients = leftovers.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> HouseholdProfile {
        HouseholdProfile::new(2, 2)
            .with_member(FamilyMember::adult("Sam", "no mushrooms"))
            .with_member(FamilyMember::adult("", ""))
            .with_member(FamilyMember::kid("Ivy", "Child (5-12)", "loves pasta"))
            .with_member(FamilyMember::kid("", "Infant (< 1)", "purees"))
            .with_dietary_restrictions("nut-free")
    }

    #[test]
    fn test_family_details_lines() {
        let details = sample_profile().family_details();
        assert_eq!(
            details,
            "Adult: Sam, Preferences: no mushrooms\n\
             Child: Ivy, Child (5-12), Preferences: loves pasta\n\
             Child: , Infant (< 1), Preferences: purees\n"
        );
    }

    #[test]
    fn test_family_details_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(profile.family_details(), profile.family_details());
    }

    #[test]
    fn test_blank_member_omitted() {
        let profile = HouseholdProfile::new(1, 1)
            .with_member(FamilyMember::adult("", ""))
            .with_member(FamilyMember::kid("", "Teen (13-18)", ""));
        assert_eq!(profile.family_details(), "");
    }

    #[test]
    fn test_kid_without_age_group_uses_fallback() {
        let mut kid = FamilyMember::kid("Max", "", "");
        assert_eq!(kid.age_group_label(), DEFAULT_AGE_GROUP);
        kid.age_group = None;
        assert_eq!(kid.details_line(), "Child: Max, Child, Preferences: ");
    }

    #[test]
    fn test_request_from_profile() {
        let request = MenuRequest::from_profile(&sample_profile(), "rice");
        assert_eq!(request.family_size, 4);
        assert_eq!(request.dietary_restrictions, "nut-free");
        assert!(request.family_details_text.starts_with("Adult: Sam"));
        assert_eq!(request.leftover_ingredients, "rice");
    }

    #[test]
    fn test_counts_are_not_derived_from_members() {
        let profile = HouseholdProfile::new(3, 0).with_member(FamilyMember::adult("Ana", ""));
        assert_eq!(profile.family_size(), 3);
        assert_eq!(profile.members.len(), 1);
    }

    #[test]
    fn test_age_group_absent_vs_empty_serialization() {
        let adult = serde_json::to_value(FamilyMember::adult("A", "")).unwrap();
        assert!(adult.get("age_group").is_none());

        let kid = FamilyMember::kid("B", "", "");
        let json = serde_json::to_string(&kid).unwrap();
        let back: FamilyMember = serde_json::from_str(&json).unwrap();
        assert_eq!(back.age_group, Some(String::new()));
    }
}
