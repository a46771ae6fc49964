use crate::types::MenuRequest;

use super::templates::{
    DIETARY_RESTRICTIONS_PREFIX, FAMILY_DETAILS_PREFIX, INGREDIENT_CONSTRAINTS, LEFTOVERS_PREFIX,
    MEAL_SCOPE, MENU_INSTRUCTION, OUTPUT_FORMAT,
};

/// Builds the weekly menu prompt sent to the completion service
#[derive(Debug, Clone, Default)]
pub struct MenuPromptBuilder;

impl MenuPromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the prompt for a menu request.
    ///
    /// Optional lines appear only when their field is non-blank, always in the
    /// order dietary restrictions, family details, leftovers.
    pub fn build_menu_prompt(&self, request: &MenuRequest) -> String {
        let mut lines = vec![];

        // 1. What to plan
        lines.push(MENU_INSTRUCTION.replace("{family_size}", &request.family_size.to_string()));
        lines.push(MEAL_SCOPE.to_string());

        // 2. Keep the ingredient list short
        lines.extend(INGREDIENT_CONSTRAINTS.iter().map(|s| s.to_string()));

        // 3. Session specifics
        if let Some(line) = optional_line(DIETARY_RESTRICTIONS_PREFIX, &request.dietary_restrictions) {
            lines.push(line);
        }
        if let Some(line) = optional_line(FAMILY_DETAILS_PREFIX, &request.family_details_text) {
            lines.push(line);
        }
        if let Some(line) = optional_line(LEFTOVERS_PREFIX, &request.leftover_ingredients) {
            lines.push(line);
        }

        // 4. Response layout
        lines.extend(OUTPUT_FORMAT.iter().map(|s| s.to_string()));

        let mut prompt = lines.join("\n");
        prompt.push('\n');
        prompt
    }
}

fn optional_line(prefix: &str, value: &str) -> Option<String> {
    let value = value.trim_end();
    if value.trim().is_empty() {
        None
    } else {
        Some(format!("{}{}", prefix, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FamilyMember, HouseholdProfile};

    fn build(request: &MenuRequest) -> String {
        MenuPromptBuilder::new().build_menu_prompt(request)
    }

    #[test]
    fn test_vegetarian_with_leftovers() {
        let request = MenuRequest::new(4)
            .with_dietary_restrictions("vegetarian")
            .with_leftovers("rice, chicken");
        let prompt = build(&request);

        assert!(prompt.contains("family of 4 people"));
        assert!(prompt.contains("Dietary restrictions: vegetarian"));
        assert!(!prompt.contains(FAMILY_DETAILS_PREFIX));
        assert!(prompt.contains("Use the following leftover ingredients: rice, chicken"));
        assert_eq!(prompt.matches("MEAL PLAN:").count(), 1);
        assert_eq!(prompt.matches("SHOPPING LIST:").count(), 1);
    }

    #[test]
    fn test_minimal_request_has_only_mandatory_lines() {
        let prompt = build(&MenuRequest::new(1));
        let expected_lines = 2 + INGREDIENT_CONSTRAINTS.len() + OUTPUT_FORMAT.len();

        assert_eq!(prompt.lines().count(), expected_lines);
        assert!(prompt.contains("family of 1 people"));
        assert!(!prompt.contains(DIETARY_RESTRICTIONS_PREFIX));
        assert!(!prompt.contains(FAMILY_DETAILS_PREFIX));
        assert!(!prompt.contains(LEFTOVERS_PREFIX));
    }

    #[test]
    fn test_optional_lines_keep_order() {
        let request = MenuRequest::new(3)
            .with_dietary_restrictions("halal")
            .with_family_details("Adult: Kim, Preferences: spicy\n")
            .with_leftovers("lentils");
        let prompt = build(&request);

        let diet = prompt.find(DIETARY_RESTRICTIONS_PREFIX).unwrap();
        let family = prompt.find(FAMILY_DETAILS_PREFIX).unwrap();
        let leftovers = prompt.find(LEFTOVERS_PREFIX).unwrap();
        let format = prompt.find(OUTPUT_FORMAT[0]).unwrap();
        assert!(diet < family && family < leftovers && leftovers < format);
        assert!(prompt.find("5-7 ingredients each").unwrap() < diet);
    }

    #[test]
    fn test_whitespace_only_fields_are_omitted() {
        let request = MenuRequest::new(2).with_dietary_restrictions("   ").with_leftovers("\n");
        assert_eq!(build(&request), build(&MenuRequest::new(2)));
    }

    #[test]
    fn test_family_details_from_profile() {
        let profile = HouseholdProfile::new(1, 1)
            .with_member(FamilyMember::adult("Ray", "low salt"))
            .with_member(FamilyMember::kid("Bea", "Teen (13-18)", "no fish"));
        let prompt = build(&MenuRequest::from_profile(&profile, ""));

        assert!(prompt.contains(
            "Family details: Adult: Ray, Preferences: low salt\nChild: Bea, Teen (13-18), Preferences: no fish\n"
        ));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = MenuRequest::new(5).with_leftovers("beans");
        assert_eq!(build(&request), build(&request));
    }
}
