//! Prompt construction and answer clean-up

use crate::types::TranslateRequest;

/// Low temperature keeps translations close to the source structure.
pub(crate) const TRANSLATION_TEMPERATURE: f32 = 0.2;

/// Build the single-turn prompt sent to the model.
pub(crate) fn build_prompt(request: &TranslateRequest) -> String {
    format!(
        "Translate the following {source} code to {target}.\n\
         Preserve the program's behavior and keep comments where they still apply.\n\
         Return only the translated code, without explanations.\n\n\
         {source} code:\n{code}",
        source = request.source_language,
        target = request.target_language,
        code = request.code,
    )
}

/// Remove a Markdown code fence wrapping the whole answer.
///
/// Models frequently answer with ```` ```lang\n...\n``` ````. Anything that is
/// not a single fenced block is returned unchanged.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // drop the info string (language tag) line
    let Some(newline) = body.find('\n') else {
        return text;
    };
    let inner = &body[newline + 1..];
    if inner.contains("```") {
        return text;
    }
    inner.strip_suffix('\n').unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_both_languages_and_code() {
        let req = TranslateRequest::new("python", "rust", "print(1)");
        let prompt = build_prompt(&req);
        assert!(prompt.contains("python code to rust"));
        assert!(prompt.ends_with("print(1)"));
    }

    #[test]
    fn strips_fenced_block() {
        let answer = "```javascript\nconsole.log(1);\n```";
        assert_eq!(strip_code_fence(answer), "console.log(1);");
    }

    #[test]
    fn strips_fence_with_surrounding_whitespace() {
        let answer = "\n```\nfn main() {}\n```\n";
        assert_eq!(strip_code_fence(answer), "fn main() {}");
    }

    #[test]
    fn plain_answer_unchanged() {
        let answer = "  console.log(1);\n";
        assert_eq!(strip_code_fence(answer), answer);
    }

    #[test]
    fn multiple_blocks_unchanged() {
        let answer = "```js\na\n```\ntext\n```js\nb\n```";
        assert_eq!(strip_code_fence(answer), answer);
    }
}
