//! Code review prompt definition.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

/// A code review prompt template.
pub struct CodeReviewPrompt;

impl PromptDefinition for CodeReviewPrompt {
    const NAME: &'static str = "code_review";
    const DESCRIPTION: &'static str =
        "Review a piece of code and point out problems and possible improvements";

    fn template() -> &'static str {
        r#"Please review the following code and point out potential problems and improvements:

```{{language}}
{{code}}
```

Review it from these angles:
1. Is the logic correct?
2. Are there potential bugs?
3. Code style and readability
4. Performance suggestions"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("code", "The code to review", true),
            argument(
                "language",
                "The programming language of the code, used for the fence",
                false,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_review_prompt_metadata() {
        assert_eq!(CodeReviewPrompt::NAME, "code_review");

        let args = CodeReviewPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "code");
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].required, Some(false));
    }

    #[test]
    fn test_template_mentions_every_argument() {
        for arg in CodeReviewPrompt::arguments() {
            assert!(CodeReviewPrompt::template().contains(&format!("{{{{{}}}}}", arg.name)));
        }
    }
}
