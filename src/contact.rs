use iced::button::{self, Button};
use iced::text_input::{self, TextInput};
use iced::{Column, Container, Element, Length, Text};
use log::info;

use crate::style;

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

#[derive(Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    name_input: text_input::State,
    email_input: text_input::State,
    message_input: text_input::State,
    send_button: button::State,
}

impl ContactForm {
    /// Returns the submission when the form was sent.
    pub fn update(&mut self, message: Message) -> Option<Submission> {
        match message {
            Message::NameChanged(name) => self.name = name,
            Message::EmailChanged(email) => self.email = email,
            Message::MessageChanged(message) => self.message = message,
            Message::Submit => return Some(self.submit()),
        }
        None
    }

    /// Nothing is sent anywhere yet; the payload is only logged.
    pub fn submit(&mut self) -> Submission {
        let submission = Submission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
        };
        info!("contact form submitted: {:?}", submission);
        submission
    }

    pub fn view(&mut self) -> Element<Message> {
        let content = Column::new()
            .spacing(8)
            .max_width(520)
            .push(Text::new("Get in touch").size(26))
            .push(Text::new("Name").size(15))
            .push(
                TextInput::new(&mut self.name_input, "Your name", &self.name, Message::NameChanged)
                    .padding(6)
                    .size(16),
            )
            .push(Text::new("Email").size(15))
            .push(
                TextInput::new(
                    &mut self.email_input,
                    "you@example.com",
                    &self.email,
                    Message::EmailChanged,
                )
                .padding(6)
                .size(16),
            )
            .push(Text::new("Message").size(15))
            .push(
                TextInput::new(
                    &mut self.message_input,
                    "What would you like to talk about?",
                    &self.message,
                    Message::MessageChanged,
                )
                .padding(6)
                .size(16)
                .on_submit(Message::Submit),
            )
            .push(
                Button::new(&mut self.send_button, Text::new("Send Message"))
                    .padding(8)
                    .on_press(Message::Submit)
                    .style(style::Button),
            );

        Container::new(content)
            .padding(16)
            .width(Length::Shrink)
            .style(style::Panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_hands_back_payload_and_clears() {
        let mut form = ContactForm::default();
        assert_eq!(form.update(Message::NameChanged("Ada".to_string())), None);
        form.update(Message::EmailChanged("ada@example.com".to_string()));
        form.update(Message::MessageChanged("Hello!".to_string()));

        let submission = form.update(Message::Submit).unwrap();

        assert_eq!(
            submission,
            Submission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello!".to_string(),
            }
        );
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn empty_form_still_submits() {
        let mut form = ContactForm::default();
        let submission = form.submit();
        assert!(submission.name.is_empty());
    }
}
