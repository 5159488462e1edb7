use iced::button::{self, Button};
use iced::{Align, Column, Element, Length, Row, Space, Text};
use log::debug;

use crate::style;

/// Viewports narrower than this get the collapsible menu.
pub const COMPACT_WIDTH: f32 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Finance,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Finance,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Finance => "#finance",
            Section::Contact => "#contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Finance => "Calculators",
            Section::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.anchor() == anchor)
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    ToggleMenu,
    Follow(String),
}

pub struct Navigation {
    active: Section,
    menu_open: bool,
    menu_button: button::State,
    links: [button::State; 4],
}

impl Default for Navigation {
    fn default() -> Self {
        Navigation {
            active: Section::Home,
            menu_open: false,
            menu_button: button::State::new(),
            links: Default::default(),
        }
    }
}

impl Navigation {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::ToggleMenu => self.toggle_menu(),
            Message::Follow(anchor) => {
                self.follow(&anchor);
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Activates the section an in-page anchor points at. Anchors without a
    /// target are ignored.
    pub fn follow(&mut self, anchor: &str) -> Option<Section> {
        let section = Section::from_anchor(anchor);
        match section {
            Some(section) => self.activate(section),
            None => debug!("no section for anchor {:?}", anchor),
        }
        section
    }

    pub fn activate(&mut self, section: Section) {
        self.active = section;
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn view(&mut self, compact: bool) -> Element<Message> {
        let Navigation {
            active,
            menu_open,
            menu_button,
            links,
        } = self;
        let active = *active;

        let mut bar = Row::new()
            .spacing(20)
            .align_items(Align::Center)
            .push(Text::new("Folio").size(28))
            .push(Space::with_width(Length::Fill));

        if !compact {
            for (section, state) in Section::ALL.iter().zip(links.iter_mut()) {
                bar = bar.push(link(state, *section, active));
            }
            return bar.into();
        }

        bar = bar.push(
            Button::new(
                menu_button,
                Text::new(if *menu_open { "Close" } else { "Menu" }),
            )
            .padding(8)
            .on_press(Message::ToggleMenu)
            .style(style::Button),
        );

        let mut header = Column::new().spacing(10).push(bar);
        if *menu_open {
            let mut menu = Column::new().spacing(4).align_items(Align::End).width(Length::Fill);
            for (section, state) in Section::ALL.iter().zip(links.iter_mut()) {
                menu = menu.push(link(state, *section, active));
            }
            header = header.push(menu);
        }
        header.into()
    }
}

fn link(state: &mut button::State, section: Section, active: Section) -> Element<Message> {
    Button::new(state, Text::new(section.title()).size(18))
        .padding(6)
        .on_press(Message::Follow(section.anchor().to_string()))
        .style(style::NavLink {
            active: section == active,
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_to_sections() {
        for section in Section::ALL.iter() {
            assert_eq!(Section::from_anchor(section.anchor()), Some(*section));
        }
        assert_eq!(Section::from_anchor("#projects"), None);
        assert_eq!(Section::from_anchor("contact"), None);
    }

    #[test]
    fn following_an_anchor_activates_its_section() {
        let mut nav = Navigation::default();
        assert_eq!(nav.active(), Section::Home);

        nav.update(Message::Follow("#finance".to_string()));
        assert_eq!(nav.active(), Section::Finance);
    }

    #[test]
    fn unknown_anchor_changes_nothing() {
        let mut nav = Navigation::default();
        nav.activate(Section::About);

        assert_eq!(nav.follow("#missing"), None);
        assert_eq!(nav.active(), Section::About);
    }

    #[test]
    fn menu_toggles_open_and_closed() {
        let mut nav = Navigation::default();
        assert!(!nav.menu_open);

        nav.update(Message::ToggleMenu);
        assert!(nav.menu_open);

        nav.update(Message::ToggleMenu);
        assert!(!nav.menu_open);
    }
}
