use iced::{button, container, Background, Color};

pub const SURFACE: Color = Color {
    r: 0.039,
    g: 0.055,
    b: 0.118,
    a: 1.0,
};

/// `rgb(0, 212, 255)`, shared by links between particles and highlights.
pub const ACCENT: Color = Color {
    r: 0.0,
    g: 212.0 / 255.0,
    b: 1.0,
    a: 1.0,
};

const ACCENT_DARK: Color = Color {
    r: 0.0,
    g: 0.45,
    b: 0.62,
    a: 1.0,
};

/// `#28a745`
const SUCCESS: Color = Color {
    r: 40.0 / 255.0,
    g: 167.0 / 255.0,
    b: 69.0 / 255.0,
    a: 1.0,
};

const TEXT: Color = Color {
    r: 0.9,
    g: 0.93,
    b: 0.97,
    a: 1.0,
};

pub struct Container;

impl container::StyleSheet for Container {
    fn style(&self) -> container::Style {
        container::Style {
            background: Some(Background::Color(SURFACE)),
            text_color: Some(TEXT),
            ..container::Style::default()
        }
    }
}

pub struct Panel;

impl container::StyleSheet for Panel {
    fn style(&self) -> container::Style {
        container::Style {
            background: Some(Background::Color(Color {
                a: 0.06,
                ..Color::WHITE
            })),
            border_radius: 6.0,
            border_width: 1.0,
            border_color: Color { a: 0.3, ..ACCENT },
            ..container::Style::default()
        }
    }
}

pub struct Button;

impl button::StyleSheet for Button {
    fn active(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(ACCENT_DARK)),
            border_radius: 4.0,
            text_color: Color::WHITE,
            ..button::Style::default()
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(Color { a: 0.85, ..ACCENT })),
            ..self.active()
        }
    }
}

/// Calculator submit button, green once a result is showing.
pub struct Submit {
    pub succeeded: bool,
}

impl button::StyleSheet for Submit {
    fn active(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(if self.succeeded {
                SUCCESS
            } else {
                ACCENT_DARK
            })),
            ..button::StyleSheet::active(&Button)
        }
    }
}

pub struct NavLink {
    pub active: bool,
}

impl button::StyleSheet for NavLink {
    fn active(&self) -> button::Style {
        button::Style {
            background: None,
            text_color: if self.active { ACCENT } else { TEXT },
            ..button::Style::default()
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            text_color: ACCENT,
            ..self.active()
        }
    }
}
