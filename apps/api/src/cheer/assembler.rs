//! Prompt Assembler — pure string building, no I/O and no error path.

use crate::cheer::prompts::{CHEER_PROMPT_TEMPLATE, FORMAT_INSTRUCTIONS, USER_INFORMATION_TEMPLATE};
use crate::models::cheer::UserRequest;

/// Renders the fan's request as the Korean user-information sentence.
/// This sentence is both the retrieval query and the prompt's user section.
pub fn build_user_information(request: &UserRequest) -> String {
    USER_INFORMATION_TEMPLATE
        .replace("{player_name}", &request.player_name)
        .replace("{attitude}", &request.attitude)
        .replace("{expected_score}", &request.expected_score)
        .replace("{feeling}", &request.feeling)
}

/// Fills the generation template with retrieved snippets and the user information.
///
/// User text is substituted last so placeholder-looking input is never expanded.
pub fn assemble_prompt(snippets: &[String], user_information: &str) -> String {
    let content = snippets
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n");

    CHEER_PROMPT_TEMPLATE
        .replace("{format_instructions}", FORMAT_INSTRUCTIONS)
        .replace("{content}", &content)
        .replace("{user_information}", user_information)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request() -> UserRequest {
        UserRequest {
            player_name: "테스트선수".to_string(),
            expected_score: "1:0".to_string(),
            attitude: "투지".to_string(),
            feeling: "설렘".to_string(),
        }
    }

    #[test]
    fn test_user_information_interpolates_every_field() {
        assert_eq!(
            build_user_information(&request()),
            "응원하려는 선수의 이름은 테스트선수이고, 이 선수가 보여줬으면 하는 모습은 투지입니다. \
             예상하는 경기 결과는 1:0이고, 현재 나는 설렘을 느낍니다."
        );
    }

    #[test]
    fn test_prompt_contains_content_and_user_information() {
        let snippets = vec![
            "A의 등번호는 9이고, 포지션은 공격수 입니다.".to_string(),
            "모두 하나되어 승리 향해 나아가자".to_string(),
        ];
        let info = build_user_information(&request());

        let prompt = assemble_prompt(&snippets, &info);

        assert!(prompt.contains(
            "content:\n- A의 등번호는 9이고, 포지션은 공격수 입니다.\n- 모두 하나되어 승리 향해 나아가자"
        ));
        assert!(prompt.contains(&format!("user's information:\n{info}")));
    }

    #[test]
    fn test_prompt_carries_output_contract() {
        let prompt = assemble_prompt(&[], "info");

        assert!(prompt.contains("Generate Five message of support."));
        assert!(prompt.contains("100-150 words"));
        assert!(prompt.contains("Expected match points (first message)."));
        assert!(prompt.contains("Current mood/emotion (second message)."));
        assert!(prompt.contains("Desired attitude for the player to show (third message)."));
        assert!(prompt.contains("at least two messages"));
        assert!(prompt.contains(r#""PlayerName,\nMessageContent""#));
        assert!(prompt.contains("exactly five objects"));
        assert!(!prompt.contains("{format_instructions}"));
        assert!(!prompt.contains("{content}"));
    }

    #[test]
    fn test_user_text_is_not_expanded_as_placeholder() {
        let prompt = assemble_prompt(&["snippet".to_string()], "나는 {content} 를 느낍니다");
        assert!(prompt.contains("나는 {content} 를 느낍니다"));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let snippets = vec!["x".to_string()];
        assert_eq!(
            assemble_prompt(&snippets, "info"),
            assemble_prompt(&snippets, "info")
        );
    }
}
