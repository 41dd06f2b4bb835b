// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Color, Theme};
    use iced_reel::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_reel::ui::styles::{button, container, tooltip};
    use iced_reel::ui::theming::ThemeMode;

    #[test]
    fn all_post_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::post_action(&theme, status);
            }
            let _ = container::scrim(&theme);
            let _ = container::backdrop(&theme);
            let _ = container::empty_state(&theme);
            let _ = tooltip::chip(&theme);
        }
    }

    #[test]
    fn overlay_does_not_depend_on_theme() {
        assert_eq!(
            container::scrim(&Theme::Light).background,
            container::scrim(&Theme::Dark).background
        );
        assert_eq!(
            button::post_action(&Theme::Light, Status::Active).text_color,
            button::post_action(&Theme::Dark, Status::Active).text_color
        );
    }

    #[test]
    fn scrim_uses_scrim_opacity() {
        let expected = Color {
            a: opacity::SCRIM,
            ..palette::BLACK
        };
        assert_eq!(
            container::scrim(&Theme::Dark).background,
            Some(Background::Color(expected))
        );
    }

    #[test]
    fn overlay_geometry_tokens() {
        assert_eq!(spacing::POST_INSET, 20.0);
        assert_eq!(spacing::MD, 16.0);
        assert_eq!(spacing::XS, 8.0);
        assert_eq!(spacing::XXS, 4.0);
        assert_eq!(sizing::ICON_ACTION, 32.0);
        assert_eq!(sizing::ICON_BADGE, 20.0);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ThemeMode::Light.theme();
        let dark = ThemeMode::Dark.theme();
        let light_bg = light.extended_palette().background.base.color;
        let dark_bg = dark.extended_palette().background.base.color;
        assert!(light_bg.r > dark_bg.r);
    }
}
