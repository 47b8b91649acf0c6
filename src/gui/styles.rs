use iced::{Border, Color};
use iced::widget::button::{Appearance as ButtonAppearance, StyleSheet as ButtonStyleSheet};
use iced::widget::container::{Appearance as ContainerAppearance, StyleSheet as ContainerStyleSheet};
use iced::widget::scrollable::{Appearance as ScrollableAppearance, StyleSheet as ScrollableStyleSheet};
use iced::widget::text_input::{Appearance as TextInputAppearance, StyleSheet as TextInputStyleSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
    Danger,
}

pub struct AccentButtonStyle {
    pub kind: ButtonKind,
    pub radius: f32,
    pub accent: Color,
    pub danger: Color,
    pub text_color: Color,
}

impl AccentButtonStyle {
    fn fill(&self) -> Color {
        match self.kind {
            ButtonKind::Primary => self.accent,
            ButtonKind::Danger => self.danger,
            ButtonKind::Secondary => Color::from_rgba(0.5, 0.55, 0.56, 0.25),
        }
    }
}

impl ButtonStyleSheet for AccentButtonStyle {
    type Style = iced::Theme;

    fn active(&self, _style: &Self::Style) -> ButtonAppearance {
        ButtonAppearance {
            background: Some(iced::Background::Color(self.fill())),
            border: Border {
                radius: self.radius.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            text_color: self.text_color,
            shadow: iced::Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: iced::Vector::new(0.0, 1.0),
                blur_radius: 3.0,
            },
            shadow_offset: iced::Vector::default(),
        }
    }

    fn hovered(&self, style: &Self::Style) -> ButtonAppearance {
        let mut appearance = self.active(style);
        let fill = self.fill();
        appearance.background = Some(iced::Background::Color(Color {
            r: (fill.r * 1.12).min(1.0),
            g: (fill.g * 1.12).min(1.0),
            b: (fill.b * 1.12).min(1.0),
            a: fill.a,
        }));
        appearance
    }

    fn pressed(&self, style: &Self::Style) -> ButtonAppearance {
        let mut appearance = self.active(style);
        let fill = self.fill();
        appearance.background = Some(iced::Background::Color(Color {
            r: fill.r * 0.85,
            g: fill.g * 0.85,
            b: fill.b * 0.85,
            a: fill.a,
        }));
        appearance.shadow = iced::Shadow::default();
        appearance
    }

    fn disabled(&self, style: &Self::Style) -> ButtonAppearance {
        let mut appearance = self.active(style);
        appearance.background =
            Some(iced::Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.12)));
        appearance.text_color = Color::from_rgba(0.6, 0.6, 0.6, 0.6);
        appearance.shadow = iced::Shadow::default();
        appearance
    }
}

pub struct CardStyle {
    pub radius: f32,
    pub background: Option<Color>,
    pub outlined: bool,
}

impl ContainerStyleSheet for CardStyle {
    type Style = iced::Theme;

    fn appearance(&self, style: &Self::Style) -> ContainerAppearance {
        let palette = style.palette();
        ContainerAppearance {
            background: Some(iced::Background::Color(
                self.background.unwrap_or(palette.background),
            )),
            border: Border {
                radius: self.radius.into(),
                width: if self.outlined { 1.0 } else { 0.0 },
                color: Color::from_rgba(0.5, 0.6, 0.6, 0.25),
            },
            shadow: if self.outlined {
                iced::Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                    offset: iced::Vector::new(0.0, 2.0),
                    blur_radius: 6.0,
                }
            } else {
                iced::Shadow::default()
            },
            text_color: None,
        }
    }
}

pub struct ListScrollableStyle {
    pub accent: Color,
    pub radius: f32,
}

impl ScrollableStyleSheet for ListScrollableStyle {
    type Style = iced::Theme;

    fn active(&self, _style: &Self::Style) -> ScrollableAppearance {
        ScrollableAppearance {
            container: ContainerAppearance {
                background: None,
                border: Border::default(),
                ..Default::default()
            },
            scrollbar: iced::widget::scrollable::Scrollbar {
                background: Some(iced::Background::Color(Color::TRANSPARENT)),
                border: Border {
                    radius: 0.0.into(),
                    width: 0.0,
                    color: Color::TRANSPARENT,
                },
                scroller: iced::widget::scrollable::Scroller {
                    color: Color {
                        a: 0.4,
                        ..self.accent
                    },
                    border: Border {
                        radius: (self.radius * 0.5).into(),
                        width: 0.0,
                        color: Color::TRANSPARENT,
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(&self, style: &Self::Style, _is_mouse_over_scrollbar: bool) -> ScrollableAppearance {
        let mut appearance = self.active(style);
        appearance.scrollbar.scroller.color = Color {
            a: 0.7,
            ..self.accent
        };
        appearance
    }

    fn dragging(&self, style: &Self::Style) -> ScrollableAppearance {
        let mut appearance = self.active(style);
        appearance.scrollbar.scroller.color = Color {
            a: 0.9,
            ..self.accent
        };
        appearance
    }
}

pub struct SearchInputStyle {
    pub radius: f32,
    pub accent: Color,
    pub background: Color,
    pub text_color: Color,
    pub placeholder: Color,
}

impl TextInputStyleSheet for SearchInputStyle {
    type Style = iced::Theme;

    fn active(&self, _style: &Self::Style) -> TextInputAppearance {
        TextInputAppearance {
            background: iced::Background::Color(self.background),
            border: Border {
                radius: self.radius.into(),
                width: 1.0,
                color: Color {
                    a: 0.5,
                    ..self.accent
                },
            },
            icon_color: self.text_color,
        }
    }

    fn focused(&self, _style: &Self::Style) -> TextInputAppearance {
        TextInputAppearance {
            background: iced::Background::Color(self.background),
            border: Border {
                radius: self.radius.into(),
                width: 2.0,
                color: self.accent,
            },
            icon_color: self.text_color,
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        self.placeholder
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        self.text_color
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        Color {
            a: 0.4,
            ..self.text_color
        }
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color {
            a: 0.35,
            ..self.accent
        }
    }

    fn disabled(&self, style: &Self::Style) -> TextInputAppearance {
        let mut appearance = self.active(style);
        appearance.background = iced::Background::Color(Color {
            a: 0.4,
            ..self.background
        });
        appearance.border.color = Color {
            a: 0.2,
            ..self.accent
        };
        appearance
    }
}
