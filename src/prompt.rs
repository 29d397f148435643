//! Few-shot prompt construction.
//!
//! The prompt embeds two fixed example evaluations so the model answers
//! in the same JSON shape, then asks for the target idea. Building it is
//! a pure function of the idea and description.

/// A worked example embedded in every prompt.
struct FewShotExample {
    idea: &'static str,
    description: &'static str,
    evaluation: &'static str,
}

/// The two fixed examples steering the model's output format.
const EXAMPLES: [FewShotExample; 2] = [
    FewShotExample {
        idea: "Fitness Tracker App",
        description: "An app to track workouts and fitness goals",
        evaluation: r#"{"viability": "High", "time_estimate": "3 months", "monetization": "Subscription"}"#,
    },
    FewShotExample {
        idea: "Simple Calculator",
        description: "A basic calculator with arithmetic operations",
        evaluation: r#"{"viability": "Low", "time_estimate": "1 week", "monetization": "Free"}"#,
    },
];

/// Builds the evaluation prompt for one idea.
///
/// Deterministic: identical inputs always produce the identical string.
pub fn build_prompt(idea: &str, description: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("Here are two examples of project idea evaluations:\n\n");
    for (i, example) in EXAMPLES.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. For the project idea '{} - {}', the evaluation is {}.\n",
            i + 1,
            example.idea,
            example.description,
            example.evaluation
        ));
    }

    prompt.push_str(&format!(
        "\nNow, evaluate the following project idea: '{} - {}'. ",
        idea, description
    ));
    prompt.push_str(
        "Provide a unique evaluation in the same JSON format, \
         with specific values for 'viability' (e.g., 'High', 'Medium', 'Low'), \
         'time_estimate' (e.g., '1 week', '1 month', '3 months'), and \
         'monetization' (e.g., 'Subscription', 'Free', 'Ads') based on the given idea and description.\n\n",
    );
    prompt.push_str("Return ONLY the JSON response, nothing else.");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt("Recipe Finder", "Search recipes by ingredients");
        let b = build_prompt("Recipe Finder", "Search recipes by ingredients");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_embeds_both_examples() {
        let prompt = build_prompt("Recipe Finder", "Search recipes by ingredients");

        assert!(prompt.contains("1. For the project idea 'Fitness Tracker App"));
        assert!(prompt.contains("2. For the project idea 'Simple Calculator"));
        assert!(prompt.contains(r#"{"viability": "High", "time_estimate": "3 months", "monetization": "Subscription"}"#));
        assert!(prompt.contains(r#"{"viability": "Low", "time_estimate": "1 week", "monetization": "Free"}"#));
    }

    #[test]
    fn test_prompt_embeds_target_idea() {
        let prompt = build_prompt("Recipe Finder", "Search recipes by ingredients");

        assert!(prompt.contains(
            "Now, evaluate the following project idea: 'Recipe Finder - Search recipes by ingredients'."
        ));
    }

    #[test]
    fn test_prompt_ends_with_json_only_instruction() {
        let prompt = build_prompt("X", "Y");
        assert!(prompt.ends_with("Return ONLY the JSON response, nothing else."));
    }

    #[test]
    fn test_prompt_names_all_three_fields() {
        let prompt = build_prompt("X", "Y");
        assert!(prompt.contains("'viability'"));
        assert!(prompt.contains("'time_estimate'"));
        assert!(prompt.contains("'monetization'"));
    }
}
