use teloxide::types::InlineKeyboardButtonKind;

use gsom_assistant::bot::ui_builder;
use gsom_assistant::config::BotConfig;
use gsom_assistant::screens::{CardPayload, ScreenId, ScreenRegistry};
use gsom_assistant::stylize::thin;

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> BotConfig {
        BotConfig {
            token: "123456:test-secret".to_string(),
            timetable_url: "https://timetable.spbu.ru/GSOM".to_string(),
            lost_and_found_url: "https://t.me/+CzTrsVUbavM5YzNi".to_string(),
            news_url: "https://spbu.ru/news-events/novosti".to_string(),
            welcome_photo_url: None,
            session_file: None,
            command_cleanup_secs: 0,
        }
    }

    /// The main menu keeps the original 2x2 layout: timetable link and
    /// studclubs on top, contacts and menu below.
    #[test]
    fn test_main_keyboard_layout() {
        let registry = ScreenRegistry::new(&test_config());
        let main = registry.get(ScreenId::Main).unwrap();
        let markup = ui_builder::inline_keyboard(main).unwrap();

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 2);

        match &markup.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::Url(url) => {
                assert_eq!(url.as_str(), "https://timetable.spbu.ru/GSOM")
            }
            other => panic!("expected url button, got {other:?}"),
        }
        match &markup.inline_keyboard[0][1].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "studclubs"),
            other => panic!("expected callback button, got {other:?}"),
        }
        match &markup.inline_keyboard[1][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "contacts"),
            other => panic!("expected callback button, got {other:?}"),
        }
        match &markup.inline_keyboard[1][1].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "menu"),
            other => panic!("expected callback button, got {other:?}"),
        }
    }

    /// Every club row plus a back row, in the original order.
    #[test]
    fn test_studclubs_keyboard_layout() {
        let registry = ScreenRegistry::new(&test_config());
        let studclubs = registry.get(ScreenId::StudClubs).unwrap();
        let markup = ui_builder::inline_keyboard(studclubs).unwrap();

        assert_eq!(markup.inline_keyboard.len(), 7);
        let payloads: Vec<&str> = markup
            .inline_keyboard
            .iter()
            .filter_map(|row| match &row[0].kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            payloads,
            vec![
                "case_club",
                "kbk",
                "falcon",
                "buddyteam",
                "golf",
                "sport_culture",
                "back_main"
            ]
        );
    }

    /// Callback payloads on buttons always parse back to the target screen,
    /// so a press can never dead-end on an unknown payload.
    #[test]
    fn test_emitted_payloads_always_parse() {
        let registry = ScreenRegistry::new(&test_config());
        for id in ScreenId::ALL {
            let screen = registry.get(id).unwrap();
            if let Some(markup) = ui_builder::inline_keyboard(screen) {
                for button in markup.inline_keyboard.iter().flatten() {
                    if let InlineKeyboardButtonKind::CallbackData(data) = &button.kind {
                        assert!(
                            ScreenId::parse(data).is_some(),
                            "button on {id:?} emits unparseable payload {data:?}"
                        );
                    }
                }
            }
        }
    }

    /// Leaf cards carry their full informational text.
    #[test]
    fn test_leaf_screen_content() {
        let registry = ScreenRegistry::new(&test_config());

        let laundry = registry.get(ScreenId::Laundry).unwrap();
        assert!(laundry.payload.text().contains("Прачка"));
        assert!(laundry.payload.text().contains("Девятый корпус"));

        let curators = registry.get(ScreenId::ContactCurators).unwrap();
        assert!(curators.payload.text().contains("@gsomates"));

        let case_club = registry.get(ScreenId::CaseClub).unwrap();
        // The latin heading is restyled with the thin stylizer
        assert!(case_club.payload.text().contains(&thin("GSOM SPbU Case Club")));
    }

    /// The welcome card is plain text unless a photo is configured.
    #[test]
    fn test_welcome_card_kind_follows_config() {
        let registry = ScreenRegistry::new(&test_config());
        assert!(matches!(
            registry.get(ScreenId::Main).unwrap().payload,
            CardPayload::Text(_)
        ));

        let mut config = test_config();
        config.welcome_photo_url = Some("https://example.com/photo.jpg".to_string());
        let registry = ScreenRegistry::new(&config);
        assert!(matches!(
            registry.get(ScreenId::Main).unwrap().payload,
            CardPayload::Photo { .. }
        ));
    }

    /// The placeholder keyboard is a single resized shortcut button.
    #[test]
    fn test_placeholder_keyboard_shape() {
        let markup = ui_builder::placeholder_keyboard();
        assert_eq!(markup.keyboard.len(), 1);
        assert_eq!(markup.keyboard[0].len(), 1);
        assert_eq!(markup.keyboard[0][0].text, ui_builder::PLACEHOLDER_BUTTON);
        assert!(markup.resize_keyboard);
    }
}
