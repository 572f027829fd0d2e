// All LLM prompt constants for cheer-message generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for cheer generation. The schema itself lives in the user prompt.
pub const CHEER_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Korean sentence describing the fan's request.
/// Replace: {player_name}, {attitude}, {expected_score}, {feeling}
pub const USER_INFORMATION_TEMPLATE: &str = "응원하려는 선수의 이름은 {player_name}이고, \
    이 선수가 보여줬으면 하는 모습은 {attitude}입니다. \
    예상하는 경기 결과는 {expected_score}이고, 현재 나는 {feeling}을 느낍니다.";

/// Output schema instructions appended to every generation prompt.
pub const FORMAT_INSTRUCTIONS: &str = r#"The output must be a JSON array with exactly five objects and nothing else:
[
  {"id": 1, "text": "PlayerName,\nMessageContent"},
  {"id": 2, "text": "PlayerName,\nMessageContent"},
  {"id": 3, "text": "PlayerName,\nMessageContent"},
  {"id": 4, "text": "PlayerName,\nMessageContent"},
  {"id": 5, "text": "PlayerName,\nMessageContent"}
]
"id" is an integer giving the order of the message. "text" is the generated message as a string.
No other fields are allowed."#;

/// Cheer generation prompt.
/// Replace: {format_instructions}, {content}, {user_information}
pub const CHEER_PROMPT_TEMPLATE: &str = r#"'Daejeon Hana Citizens' is a professional soccer team in the K LEAGUE 1, based in Daejeon Metropolitan City.
You are a fan of 'Daejeon Hana Citizen'.
Please provide five messages of support in KOREAN for a specific player.

Requirements:
- Generate Five message of support.
- Each message should contain 100-150 words.
- Output format must be JSON.
- The value of the 'id' is an integer representing the order, and the value of the 'text' is the generated message.
- Use the following format for generating support messages: "PlayerName,\nMessageContent".
- Utilize the provided content (cheer song of the 'Daejeon Hana Citizens' and the player's position).
- Consider the user's information provided for each message:
    - Expected match points (first message).
    - Current mood/emotion (second message).
    - Desired attitude for the player to show (third message).
- Ensure all messages are intended for the named player.
- Include the player's position or imply its meaning in at least two messages.
- Avoid duplicating words except for the player's name.

Example Supporting Message: ("손흥민,\n가자 ! 1:0\n자줏빛 투혼으로 \n승리를 이끈다", "ㅇㅇㅇ,\n너를 응원해\n언제나 너의 능력을\n의심치 않아", "사랑해,\n은퇴전까지\n항상 응원할게")

{format_instructions}

content:
{content}

user's information:
{user_information}
"#;
