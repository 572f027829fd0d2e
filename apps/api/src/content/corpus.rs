//! Corpus assembly — chant lines, position-role prose and roster sentences,
//! concatenated in that order.

use crate::content::roster::RosterEntry;

/// Official Daejeon Hana Citizen cheer song lines.
pub const CHANT_LINES: &[&str] = &[
    "영원토록 휘날려라 자줏빛투혼 모든이의 가슴속에 무궁하거라",
    "진정한 용기로써 맞서싸우면 무엇이 두려울소냐 (전진!)",
    "소름돋는 휘슬소리에 전쟁은 시작되었다",
    "자주색피 하나가득 너의 목에 적셔주리라",
    "두렵다 겁내지말고 앞으로 전진해가자",
    "모두 하나되어 승리 향해 나아가자",
    "아름답고 숭고한 마지막 땀방울이 떨어질 때까지 뜨거운 함성을 외쳐라!",
    "보문산 바라보는 희망의 얼굴, 백목력 새하얀 꽃 정다운 사람",
    "오늘도 한 마음에 조화를 이룰, 아름다운 내 고장 해 뜨는 거리",
    "우리는 대전 하나 시티즌, 승리를 위해 앞으로 나아가자",
    "오오오 시티즌 너의 뒤에 우릴 믿고 아시아로 가는 열차 하나의 힘으로 나가자",
];

/// One paragraph per position, in GK, DF, MF, FW order.
pub const ROLE_DESCRIPTIONS: &[&str] = &[
    "The goalkeeper is the only player allowed to handle the ball with their hands within the \
     penalty area. Their primary role is to prevent the opposing team from scoring goals by \
     stopping shots on goal.",
    "Defenders are responsible for protecting their team's goal and preventing the opposing \
     team's forwards from scoring. They typically mark opposing forwards, intercept passes, and \
     make tackles to regain possession of the ball. Defenders also contribute to building attacks \
     by passing the ball to midfielders and forwards.",
    "Midfielders play a central role in controlling the flow of the game and linking defense with \
     attack. They are often involved in both defensive and offensive phases of play, supporting \
     defenders in defense and providing passes to forwards in attack. Midfielders can be further \
     categorized into defensive midfielders, central midfielders, and attacking midfielders based \
     on their specific roles within the midfield.",
    "Forwards, also known as strikers or attackers, are primarily responsible for scoring goals. \
     They aim to receive passes from midfielders, dribble past defenders, and shoot on goal to \
     score. Forwards often use their speed, agility, and skill to create scoring opportunities and \
     put pressure on the opposing team's defense.",
];

/// The ordered, immutable set of retrievable snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    snippets: Vec<String>,
}

impl Corpus {
    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Renders the fact sentence for one roster entry.
pub fn roster_sentence(entry: &RosterEntry) -> String {
    format!(
        "{}의 등번호는 {}이고, 포지션은 {} 입니다.",
        entry.name,
        entry.id,
        entry.position.label()
    )
}

pub fn build_corpus(roster: &[RosterEntry]) -> Corpus {
    let snippets = CHANT_LINES
        .iter()
        .chain(ROLE_DESCRIPTIONS)
        .map(|s| (*s).to_string())
        .chain(roster.iter().map(roster_sentence))
        .collect();

    Corpus { snippets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::roster::Position;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, id: u32, position: Position) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            id,
            position,
        }
    }

    #[test]
    fn test_forward_sentence() {
        let sentence = roster_sentence(&entry("A", 9, Position::FW));
        assert_eq!(sentence, "A의 등번호는 9이고, 포지션은 공격수 입니다.");
    }

    #[test]
    fn test_corpus_size_is_fixed_content_plus_roster() {
        let roster = vec![
            entry("A", 9, Position::FW),
            entry("B", 1, Position::GK),
            entry("C", 4, Position::DF),
        ];

        let corpus = build_corpus(&roster);

        assert_eq!(
            corpus.len(),
            CHANT_LINES.len() + ROLE_DESCRIPTIONS.len() + roster.len()
        );
        assert_eq!(CHANT_LINES.len(), 11);
        assert_eq!(ROLE_DESCRIPTIONS.len(), 4);
    }

    #[test]
    fn test_corpus_order_chants_roles_roster() {
        let corpus = build_corpus(&[entry("A", 9, Position::FW)]);
        let snippets = corpus.snippets();

        assert_eq!(snippets[0], CHANT_LINES[0]);
        assert_eq!(snippets[CHANT_LINES.len()], ROLE_DESCRIPTIONS[0]);
        assert_eq!(
            snippets.last().unwrap(),
            "A의 등번호는 9이고, 포지션은 공격수 입니다."
        );
    }

    #[test]
    fn test_empty_roster_keeps_fixed_content() {
        let corpus = build_corpus(&[]);
        assert_eq!(corpus.len(), 15);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn test_role_descriptions_are_separate_paragraphs() {
        assert!(ROLE_DESCRIPTIONS[0].starts_with("The goalkeeper"));
        assert!(ROLE_DESCRIPTIONS[1].starts_with("Defenders"));
        assert!(ROLE_DESCRIPTIONS[2].starts_with("Midfielders"));
        assert!(ROLE_DESCRIPTIONS[3].starts_with("Forwards"));
    }
}
