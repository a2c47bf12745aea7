//! Built-in "Sleepwalker" pitch deck.
//!
//! The ten slides are fixed at authoring time; building the deck is a
//! straight append of the literal (layout, title, body) triples below.

use crate::error::Result;
use crate::model::{Metadata, Presentation, Slide};
use std::path::Path;

/// Default output file name for the built deck.
pub const DEFAULT_OUTPUT: &str = "Sleepwalker_Pitch_Deck.pptx";

/// Title of the deck (also slide 1's title).
pub const DECK_TITLE: &str = "Sleepwalker — Pitch Deck";

/// The ten (title, body) pairs, in slide order. Slide 1 takes the title
/// layout; the rest take title+body.
const SLIDES: [(&str, &str); 10] = [
    (DECK_TITLE, "Комедийный социальный стелс"),
    (
        "Концепция",
        "Главный герой страдает лунатизмом и просыпается в случайных местах без одежды.\n\
         Цель: найти одежду и избежать социального позора, используя стелс, юмор и взаимодействие с NPC.",
    ),
    (
        "Ключевые особенности",
        "• Комедийный социальный стелс\n\
         • Процедурная генерация ситуаций\n\
         • Реакции NPC на основе AI\n\
         • Импровизация одежды и действий\n\
         • Множество уникальных сценариев пробуждения",
    ),
    (
        "Игровой цикл",
        "1. ГГ засыпает\n\
         2. Случайное пробуждение\n\
         3. Поиск одежды / сокрытие\n\
         4. Стелс и взаимодействие\n\
         5. Возвращение в безопасную зону\n\
         6. Прогрессия персонажа",
    ),
    (
        "Примеры ситуаций",
        "• Лифт в отеле\n\
         • Торговый центр (витрина манекенов)\n\
         • Пляж под пирсом\n\
         • Фонтан на площади\n\
         • Крыша многоэтажки\n\
         • Багажная полка поезда",
    ),
    (
        "NPC и их поведение",
        "• Охранники, туристы, работники, дети, полиция\n\
         • Реакции: страх, смех, запись на телефон, помощь\n\
         • AI: поле зрения, эмпатия, тревожность, маршруты",
    ),
    (
        "Импровизация",
        "Предметы: полотенца, газеты, пакеты, шторы.\n\
         Игрок придумывает способы скрыться, отвлечь NPC или добыть одежду.",
    ),
    (
        "Целевая аудитория",
        "• Любители стелса\n\
         • Игроки, ценящие юмор\n\
         • Фанаты игр Untitled Goose Game, Hitman (социальный стелс)\n\
         • Возраст 16+",
    ),
    (
        "Производство",
        "Мини-команда:\n\
         • 1 программист\n\
         • 1 геймдизайнер\n\
         • 1 3D-художник\n\
         • 1 дизайнер уровней\n\
         \n\
         Срок на MVP: 3–5 месяцев",
    ),
    (
        "Резюме",
        "Игра предлагает уникальный комедийный подход к стелсу.\n\
         Социальные ситуации, процедурность и юмор делают проект ярким и заметным.\n\
         Идеален для инди-прототипа с перспективой расширения.",
    ),
];

/// Build the pitch deck presentation in memory.
///
/// # Example
///
/// ```
/// let deck = deckgen::deck::pitch_deck();
/// assert_eq!(deck.len(), 10);
/// ```
pub fn pitch_deck() -> Presentation {
    let mut pres = Presentation {
        metadata: Metadata {
            title: Some(DECK_TITLE.to_string()),
            subject: Some("Комедийный социальный стелс".to_string()),
            application: Some("deckgen".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    for (idx, (title, body)) in SLIDES.iter().enumerate() {
        let slide = if idx == 0 {
            Slide::title_slide(*title, body)
        } else {
            Slide::content(*title, body)
        };
        pres.add_slide(slide);
    }

    pres
}

/// Build the pitch deck and save it to `output_path`.
///
/// An existing file at the path is overwritten; building the same deck twice
/// yields identical slide content.
pub fn build_and_save(output_path: impl AsRef<Path>) -> Result<()> {
    pitch_deck().save(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SlideLayout;

    #[test]
    fn test_deck_has_ten_slides() {
        let deck = pitch_deck();
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn test_slide_layouts() {
        let deck = pitch_deck();
        assert_eq!(deck.slides[0].layout, SlideLayout::TitleSlide);
        for slide in &deck.slides[1..] {
            assert_eq!(slide.layout, SlideLayout::TitleAndBody);
        }
    }

    #[test]
    fn test_first_slide() {
        let deck = pitch_deck();
        assert_eq!(deck.slides[0].title, "Sleepwalker — Pitch Deck");
        assert_eq!(deck.slides[0].body_text(), "Комедийный социальный стелс");
    }

    #[test]
    fn test_slide_titles_in_order() {
        let deck = pitch_deck();
        let titles: Vec<&str> = deck.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Sleepwalker — Pitch Deck",
                "Концепция",
                "Ключевые особенности",
                "Игровой цикл",
                "Примеры ситуаций",
                "NPC и их поведение",
                "Импровизация",
                "Целевая аудитория",
                "Производство",
                "Резюме",
            ]
        );
    }

    #[test]
    fn test_summary_slide_lines() {
        let deck = pitch_deck();
        let summary = &deck.slides[9];
        assert_eq!(summary.body.len(), 3);
        assert!(summary.body[0].starts_with("Игра предлагает"));
        assert!(summary.body[2].ends_with("расширения."));
    }

    #[test]
    fn test_production_slide_has_blank_line() {
        let deck = pitch_deck();
        let production = &deck.slides[8];
        assert!(production.body.contains(&String::new()));
        assert_eq!(production.body.last().unwrap(), "Срок на MVP: 3–5 месяцев");
    }

    #[test]
    fn test_metadata() {
        let deck = pitch_deck();
        assert_eq!(deck.metadata.title.as_deref(), Some(DECK_TITLE));
        assert_eq!(deck.metadata.application.as_deref(), Some("deckgen"));
    }
}
