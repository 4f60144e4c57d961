//! UI Builder module for turning screen data into Telegram keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};
use tracing::warn;
use url::Url;

use crate::screens::{NavAction, Screen};

/// Near-empty body of the placeholder message that carries the persistent
/// reply keyboard. A braille blank keeps the message visually empty.
pub const PLACEHOLDER_TEXT: &str = "⠀";

/// Label of the single persistent shortcut button.
pub const PLACEHOLDER_BUTTON: &str = "🚀 /start";

/// Build the inline keyboard for a screen, or `None` when it has no buttons.
///
/// Link buttons with an unparseable URL are dropped with a warning rather
/// than failing the whole render.
pub fn inline_keyboard(screen: &Screen) -> Option<InlineKeyboardMarkup> {
    if screen.keyboard.is_empty() {
        return None;
    }
    let rows: Vec<Vec<InlineKeyboardButton>> = screen
        .keyboard
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|button| match &button.action {
                    NavAction::Go(target) => Some(InlineKeyboardButton::callback(
                        button.label.clone(),
                        target.as_str().to_string(),
                    )),
                    NavAction::Link(url) => match Url::parse(url) {
                        Ok(parsed) => Some(InlineKeyboardButton::url(button.label.clone(), parsed)),
                        Err(e) => {
                            warn!(url = %url, error = %e, "Dropping link button with invalid URL");
                            None
                        }
                    },
                })
                .collect()
        })
        .collect();
    Some(InlineKeyboardMarkup::new(rows))
}

/// The always-visible one-button reply keyboard attached to the placeholder.
pub fn placeholder_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new([[KeyboardButton::new(PLACEHOLDER_BUTTON)]]).resize_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::{CardPayload, NavButton, ScreenId};

    fn screen_with(keyboard: Vec<Vec<NavButton>>) -> Screen {
        Screen {
            payload: CardPayload::Text("test".to_string()),
            keyboard,
        }
    }

    #[test]
    fn test_keyboard_shape_is_preserved() {
        let screen = screen_with(vec![
            vec![
                NavButton {
                    label: "a".to_string(),
                    action: NavAction::Go(ScreenId::Menu),
                },
                NavButton {
                    label: "b".to_string(),
                    action: NavAction::Link("https://example.com".to_string()),
                },
            ],
            vec![NavButton {
                label: "c".to_string(),
                action: NavAction::Go(ScreenId::Main),
            }],
        ]);
        let markup = inline_keyboard(&screen).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 1);
    }

    #[test]
    fn test_invalid_link_buttons_are_dropped() {
        let screen = screen_with(vec![vec![NavButton {
            label: "broken".to_string(),
            action: NavAction::Link("not a url".to_string()),
        }]]);
        let markup = inline_keyboard(&screen).unwrap();
        assert!(markup.inline_keyboard[0].is_empty());
    }

    #[test]
    fn test_empty_keyboard_yields_none() {
        assert!(inline_keyboard(&screen_with(vec![])).is_none());
    }
}
