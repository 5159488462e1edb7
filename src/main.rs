mod backdrop;
mod calculator;
mod contact;
mod finance;
mod nav;
mod settings;
mod style;

use std::time::Duration;

use iced::button::{self, Button};
use iced::canvas::Canvas;
use iced::scrollable::{self, Scrollable};
use iced::time;
use iced::{
    Align, Application, Clipboard, Column, Command, Container, Element, HorizontalAlignment,
    Length, Row, Settings, Subscription, Text,
};
use log::{debug, info};

use crate::backdrop::{Backdrop, Bounds};
use crate::calculator::{Calculator, CompoundInterest, EmergencyFund, InputError, Retirement, Status};
use crate::contact::ContactForm;
use crate::nav::{Navigation, Section};
use crate::settings::SiteSettings;

const SETTINGS_PATH: &str = "site.json";
const INITIAL_SIZE: (u32, u32) = (1024, 768);

#[derive(Clone, Debug)]
enum Message {
    SettingsLoaded(SiteSettings),
    Frame,
    Resized { width: u32, height: u32 },
    Nav(nav::Message),
    Compound(calculator::Message),
    Retirement(calculator::Message),
    EmergencyFund(calculator::Message),
    Contact(contact::Message),
    DismissAlert,
}

struct Alert {
    message: String,
    ok_button: button::State,
}

impl Alert {
    fn new(message: impl Into<String>) -> Self {
        Alert {
            message: message.into(),
            ok_button: button::State::new(),
        }
    }

    fn view(&mut self) -> Element<Message> {
        let content = Column::new()
            .spacing(20)
            .align_items(Align::Center)
            .push(Text::new(self.message.as_str()).size(20))
            .push(
                Button::new(&mut self.ok_button, Text::new("OK"))
                    .padding(8)
                    .on_press(Message::DismissAlert)
                    .style(style::Button),
            );

        Container::new(
            Container::new(content)
                .padding(24)
                .style(style::Panel),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(style::Container)
        .into()
    }
}

struct Folio {
    settings: SiteSettings,
    viewport: Bounds,
    nav: Navigation,
    backdrop: Option<Backdrop>,
    compound: Option<Calculator<CompoundInterest>>,
    retirement: Option<Calculator<Retirement>>,
    emergency_fund: Option<Calculator<EmergencyFund>>,
    contact: Option<ContactForm>,
    alert: Option<Alert>,
    finance_button: button::State,
    contact_button: button::State,
    scroll: scrollable::State,
}

impl Folio {
    /// Every component is set up independently; a disabled one is skipped.
    fn with_settings(settings: SiteSettings, viewport: Bounds) -> Self {
        let features = &settings.features;

        let backdrop = Backdrop::spawn(&settings.backdrop, viewport);
        let compound = enabled(features.compound_interest, "compound interest calculator")
            .then(Calculator::new);
        let retirement =
            enabled(features.retirement, "retirement calculator").then(Calculator::new);
        let emergency_fund =
            enabled(features.emergency_fund, "emergency fund calculator").then(Calculator::new);
        let contact = enabled(features.contact, "contact form").then(ContactForm::default);

        Folio {
            viewport,
            nav: Navigation::default(),
            backdrop,
            compound,
            retirement,
            emergency_fund,
            contact,
            alert: None,
            finance_button: button::State::new(),
            contact_button: button::State::new(),
            scroll: scrollable::State::new(),
            settings,
        }
    }

    /// Takes freshly loaded settings without touching anything they leave
    /// alone, so form text and the active section survive a late load.
    fn apply(&mut self, settings: SiteSettings) {
        if settings.backdrop != self.settings.backdrop {
            self.backdrop = Backdrop::spawn(&settings.backdrop, self.viewport);
        }

        let features = &settings.features;
        toggle(
            &mut self.compound,
            features.compound_interest,
            "compound interest calculator",
            Calculator::new,
        );
        toggle(
            &mut self.retirement,
            features.retirement,
            "retirement calculator",
            Calculator::new,
        );
        toggle(
            &mut self.emergency_fund,
            features.emergency_fund,
            "emergency fund calculator",
            Calculator::new,
        );
        toggle(&mut self.contact, features.contact, "contact form", ContactForm::default);

        self.settings = settings;
    }

    /// An open alert blocks the page, animation included.
    fn is_animating(&self) -> bool {
        self.backdrop.is_some() && self.alert.is_none()
    }

    fn handle(&mut self, message: Message) {
        match message {
            Message::SettingsLoaded(settings) => {
                self.apply(settings);
                match &self.backdrop {
                    Some(backdrop) => info!(
                        "backdrop running with {} particles in {:?}",
                        backdrop.particles().len(),
                        backdrop.bounds()
                    ),
                    None => info!("backdrop not running"),
                }
            }
            Message::Frame => {
                if let Some(backdrop) = &mut self.backdrop {
                    backdrop.advance();
                }
            }
            Message::Resized { width, height } => {
                self.viewport = Bounds::new(width as f32, height as f32);
                if let Some(backdrop) = &mut self.backdrop {
                    backdrop.resize(self.viewport);
                }
            }
            Message::Nav(message) => self.nav.update(message),
            Message::Compound(message) => {
                let result = self.compound.as_mut().map(|c| c.update(message));
                self.settle(result);
            }
            Message::Retirement(message) => {
                let result = self.retirement.as_mut().map(|c| c.update(message));
                self.settle(result);
            }
            Message::EmergencyFund(message) => {
                let result = self.emergency_fund.as_mut().map(|c| c.update(message));
                self.settle(result);
            }
            Message::Contact(message) => {
                let submitted = self.contact.as_mut().and_then(|form| form.update(message));
                if submitted.is_some() {
                    self.raise(contact::ACKNOWLEDGEMENT);
                }
            }
            Message::DismissAlert => {
                self.alert = None;
            }
        }
    }

    fn raise(&mut self, message: impl Into<String>) {
        self.alert = Some(Alert::new(message));
    }

    fn settle(&mut self, result: Option<Result<Status, InputError>>) {
        match result {
            Some(Ok(Status::Computed)) => self.nav.activate(Section::Finance),
            Some(Err(error)) => self.raise(error.to_string()),
            _ => {}
        }
    }
}

fn enabled(flag: bool, component: &str) -> bool {
    if !flag {
        debug!("{} disabled, skipping", component);
    }
    flag
}

/// Drops a component that was switched off and builds one that was switched
/// on. One that stays on is left as it is.
fn toggle<T>(slot: &mut Option<T>, flag: bool, component: &str, make: impl FnOnce() -> T) {
    if !enabled(flag, component) {
        *slot = None;
    } else if slot.is_none() {
        *slot = Some(make());
    }
}

impl Application for Folio {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Message>) {
        let viewport = Bounds::new(INITIAL_SIZE.0 as f32, INITIAL_SIZE.1 as f32);
        (
            Self::with_settings(SiteSettings::default(), viewport),
            Command::perform(settings::load(SETTINGS_PATH), Message::SettingsLoaded),
        )
    }

    fn title(&self) -> String {
        String::from("Folio")
    }

    fn subscription(&self) -> Subscription<Message> {
        let resizes = iced_native::subscription::events_with(|event, _status| match event {
            iced_native::Event::Window(iced_native::window::Event::Resized { width, height }) => {
                Some(Message::Resized { width, height })
            }
            _ => None,
        });

        if self.is_animating() {
            let interval = Duration::from_millis(self.settings.backdrop.frame_interval_ms);
            Subscription::batch(vec![resizes, time::every(interval).map(|_| Message::Frame)])
        } else {
            resizes
        }
    }

    fn update(&mut self, message: Self::Message, _clipboard: &mut Clipboard) -> Command<Message> {
        self.handle(message);
        Command::none()
    }

    fn view(&mut self) -> Element<Message> {
        let Folio {
            viewport,
            nav,
            backdrop,
            compound,
            retirement,
            emergency_fund,
            contact,
            alert,
            finance_button,
            contact_button,
            scroll,
            ..
        } = self;

        if let Some(alert) = alert {
            return alert.view();
        }

        let active = nav.active();
        let header = nav.view(viewport.width < nav::COMPACT_WIDTH).map(Message::Nav);

        let body = match active {
            Section::Home => home(backdrop, finance_button, contact_button),
            Section::About => about(),
            Section::Finance => finance(scroll, compound, retirement, emergency_fund),
            Section::Contact => contact_page(contact),
        };

        let content = Column::new()
            .spacing(20)
            .padding(20)
            .push(header)
            .push(body);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::Container)
            .into()
    }
}

fn home<'a>(
    backdrop: &'a mut Option<Backdrop>,
    finance_button: &'a mut button::State,
    contact_button: &'a mut button::State,
) -> Element<'a, Message> {
    let follow = |section: Section| Message::Nav(nav::Message::Follow(section.anchor().to_string()));

    let actions = Row::new()
        .spacing(10)
        .push(
            Button::new(finance_button, Text::new("Try the calculators"))
                .padding(10)
                .on_press(follow(Section::Finance))
                .style(style::Button),
        )
        .push(
            Button::new(contact_button, Text::new("Get in touch"))
                .padding(10)
                .on_press(follow(Section::Contact))
                .style(style::Button),
        );

    let mut content = Column::new()
        .spacing(16)
        .align_items(Align::Center)
        .push(Text::new("Hello, welcome to my corner of the internet").size(40))
        .push(
            Text::new("Developer, tinkerer and occasional spreadsheet enthusiast.")
                .size(20)
                .horizontal_alignment(HorizontalAlignment::Center),
        )
        .push(actions);

    if let Some(backdrop) = backdrop {
        content = content.push(
            Canvas::new(backdrop)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    content.into()
}

fn about<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(12)
        .max_width(720)
        .push(Text::new("About").size(32))
        .push(Text::new(
            "I build small tools that make everyday decisions a little easier. \
             The calculators on this site started as personal spreadsheets for \
             planning savings and an emergency fund.",
        ))
        .push(Text::new(
            "Figures are estimates for planning only and assume a constant rate \
             compounded monthly.",
        ).size(15))
        .into()
}

fn finance<'a>(
    scroll: &'a mut scrollable::State,
    compound: &'a mut Option<Calculator<CompoundInterest>>,
    retirement: &'a mut Option<Calculator<Retirement>>,
    emergency_fund: &'a mut Option<Calculator<EmergencyFund>>,
) -> Element<'a, Message> {
    let mut page = Scrollable::new(scroll)
        .spacing(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Text::new("Financial Calculators").size(32));

    if let Some(calculator) = compound {
        page = page.push(calculator.view().map(Message::Compound));
    }
    if let Some(calculator) = retirement {
        page = page.push(calculator.view().map(Message::Retirement));
    }
    if let Some(calculator) = emergency_fund {
        page = page.push(calculator.view().map(Message::EmergencyFund));
    }

    page.into()
}

fn contact_page(contact: &mut Option<ContactForm>) -> Element<Message> {
    let mut page = Column::new()
        .spacing(16)
        .width(Length::Fill)
        .align_items(Align::Center)
        .push(Text::new("Contact").size(32));

    match contact {
        Some(form) => page = page.push(form.view().map(Message::Contact)),
        None => page = page.push(Text::new("The contact form is currently unavailable.")),
    }
    page.into()
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Folio::run(Settings {
        window: iced::window::Settings {
            size: INITIAL_SIZE,
            ..iced::window::Settings::default()
        },
        antialiasing: true,
        ..Settings::default()
    })
}
