use iced::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn background(&self) -> Color {
        match self {
            Theme::Light => Color::from_rgb(0.95, 0.96, 0.96),
            Theme::Dark => Color::from_rgb(0.09, 0.11, 0.12),
        }
    }

    pub fn card_background(&self) -> Color {
        match self {
            Theme::Light => Color::from_rgb(1.0, 1.0, 1.0),
            Theme::Dark => Color::from_rgb(0.14, 0.17, 0.18),
        }
    }

    pub fn selected_background(&self) -> Color {
        match self {
            Theme::Light => Color::from_rgb(0.82, 0.93, 0.94),
            Theme::Dark => Color::from_rgb(0.10, 0.26, 0.29),
        }
    }

    pub fn text(&self) -> Color {
        match self {
            Theme::Light => Color::from_rgb(0.08, 0.10, 0.10),
            Theme::Dark => Color::from_rgb(0.94, 0.96, 0.96),
        }
    }

    pub fn secondary_text(&self) -> Color {
        match self {
            Theme::Light => Color::from_rgb(0.38, 0.42, 0.43),
            Theme::Dark => Color::from_rgb(0.65, 0.70, 0.71),
        }
    }

    pub fn primary(&self) -> Color {
        match self {
            Theme::Light => Color::from_rgb(0.0, 0.52, 0.58),
            Theme::Dark => Color::from_rgb(0.15, 0.75, 0.80),
        }
    }

    pub fn danger(&self) -> Color {
        match self {
            Theme::Light => Color::from_rgb(0.82, 0.18, 0.18),
            Theme::Dark => Color::from_rgb(0.95, 0.35, 0.35),
        }
    }
}
