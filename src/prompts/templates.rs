/// Opening instruction; `{family_size}` is substituted by the builder
pub const MENU_INSTRUCTION: &str =
    "Create an easy healthy weekly meal plan for a family of {family_size} people.";

/// Restricts the plan to two meals a day
pub const MEAL_SCOPE: &str = "Focus only on breakfast and dinner for each day of the week.";

/// Ingredient economy constraints
pub const INGREDIENT_CONSTRAINTS: [&str; 2] = [
    "IMPORTANT: Use a limited set of ingredients across all meals to make shopping easier. Reuse ingredients in multiple meals when possible.",
    "Aim for simple recipes with 5-7 ingredients each.",
];

pub const DIETARY_RESTRICTIONS_PREFIX: &str = "Dietary restrictions: ";
pub const FAMILY_DETAILS_PREFIX: &str = "Family details: ";
pub const LEFTOVERS_PREFIX: &str = "Use the following leftover ingredients: ";

/// Required response layout
pub const OUTPUT_FORMAT: [&str; 3] = [
    "Format your response in two sections:",
    "1. MEAL PLAN: List each day with breakfast and dinner only. Format as: Day - Meal - Recipe Name - Main Ingredients (limit to 5-7 ingredients per recipe)",
    "2. SHOPPING LIST: Create a simplified, categorized shopping list with the minimum ingredients needed for the week. Consolidate similar ingredients and specify quantities.",
];
