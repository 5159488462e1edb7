mod compound;
mod emergency;
mod retirement;

use std::marker::PhantomData;

use iced::button::{self, Button};
use iced::text_input::{self, TextInput};
use iced::{Align, Column, Container, Element, Length, Row, Text};
use log::debug;
use thiserror::Error;

use crate::finance::{format_currency, Projection};
use crate::style;

pub use compound::CompoundInterest;
pub use emergency::EmergencyFund;
pub use retirement::Retirement;

/// Shown in every output field until a calculation succeeds.
pub const PLACEHOLDER: &str = "--";

/// Rejections raised before any output is touched. The messages are shown
/// to the user as they are.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter valid numbers for all fields.")]
    InvalidNumber,
    #[error("Please enter valid positive values for all fields.")]
    OutOfRange,
    #[error("The result is too large to display.")]
    Overflow,
}

pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Read access to a form's current text, by field id.
pub struct Values<'a> {
    fields: &'a [Field],
}

impl<'a> Values<'a> {
    fn text(&self, id: &str) -> Result<&'a str, InputError> {
        self.fields
            .iter()
            .find(|field| field.spec.id == id)
            .map(|field| field.value.trim())
            .ok_or(InputError::InvalidNumber)
    }

    pub fn number(&self, id: &str) -> Result<f64, InputError> {
        self.text(id)?
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(InputError::InvalidNumber)
    }

    /// Any number, with its fraction dropped: `"2.5"` is 2.
    pub fn whole(&self, id: &str) -> Result<i64, InputError> {
        Ok(self.number(id)?.trunc() as i64)
    }
}

pub struct Outcome {
    pub headline: String,
    pub outputs: Vec<String>,
    pub formula: String,
}

impl Outcome {
    /// The three growth outputs shared by the projection calculators.
    fn projection(projection: &Projection, formula: String) -> Result<Self, InputError> {
        if !projection.is_finite() {
            return Err(InputError::Overflow);
        }
        Ok(Outcome {
            headline: format!("Final Amount: {}", format_currency(projection.final_amount)),
            outputs: vec![
                format_currency(projection.final_amount),
                format_currency(projection.total_contributed),
                format_currency(projection.earned),
            ],
            formula,
        })
    }
}

/// One calculator's fields, validation and formula.
pub trait Model {
    type Input;

    const TITLE: &'static str;
    const SUBMIT_LABEL: &'static str;
    const FIELDS: &'static [FieldSpec];
    const OUTPUTS: &'static [&'static str];

    fn parse(values: &Values<'_>) -> Result<Self::Input, InputError>;

    fn compute(input: &Self::Input) -> Result<Outcome, InputError>;
}

struct Field {
    spec: &'static FieldSpec,
    value: String,
    state: text_input::State,
}

#[derive(Clone, Debug)]
pub enum Message {
    FieldChanged(usize, String),
    Submit,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Edited,
    Computed,
    Cleared,
}

pub struct Calculator<M: Model> {
    fields: Vec<Field>,
    outputs: Vec<String>,
    formula: Option<String>,
    headline: Option<String>,
    submit_button: button::State,
    reset_button: button::State,
    model: PhantomData<M>,
}

impl<M: Model> Calculator<M> {
    pub fn new() -> Self {
        debug!("initializing {}", M::TITLE);
        Calculator {
            fields: M::FIELDS
                .iter()
                .map(|spec| Field {
                    spec,
                    value: String::new(),
                    state: text_input::State::new(),
                })
                .collect(),
            outputs: vec![PLACEHOLDER.to_string(); M::OUTPUTS.len()],
            formula: None,
            headline: None,
            submit_button: button::State::new(),
            reset_button: button::State::new(),
            model: PhantomData,
        }
    }

    pub fn update(&mut self, message: Message) -> Result<Status, InputError> {
        match message {
            Message::FieldChanged(index, value) => {
                if let Some(field) = self.fields.get_mut(index) {
                    field.value = value;
                }
                Ok(Status::Edited)
            }
            Message::Submit => self.submit().map(|_| Status::Computed),
            Message::Reset => {
                self.reset();
                Ok(Status::Cleared)
            }
        }
    }

    /// Parses every field, then computes. Outputs change only when both succeed.
    pub fn submit(&mut self) -> Result<(), InputError> {
        let input = M::parse(&Values {
            fields: &self.fields,
        })?;
        let outcome = M::compute(&input)?;
        debug!("{}: {}", M::TITLE, outcome.headline);

        self.outputs = outcome.outputs;
        self.formula = Some(outcome.formula);
        self.headline = Some(outcome.headline);
        Ok(())
    }

    pub fn reset(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.clear();
        }
        for output in self.outputs.iter_mut() {
            *output = PLACEHOLDER.to_string();
        }
        self.formula = None;
        self.headline = None;
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    pub fn submit_label(&self) -> &str {
        self.headline.as_deref().unwrap_or(M::SUBMIT_LABEL)
    }

    pub fn view(&mut self) -> Element<Message> {
        let mut results = Column::new()
            .spacing(8)
            .width(Length::FillPortion(1))
            .push(Text::new("Results").size(22));
        for (label, value) in M::OUTPUTS.iter().zip(self.outputs()) {
            results = results.push(
                Row::new()
                    .spacing(10)
                    .push(Text::new(*label).size(16).width(Length::FillPortion(1)))
                    .push(Text::new(value.as_str()).size(16).width(Length::FillPortion(1))),
            );
        }
        if let Some(formula) = self.formula() {
            results = results.push(Text::new(formula).size(14));
        }

        let label = self.submit_label().to_string();
        let succeeded = self.headline.is_some();

        let Calculator {
            fields,
            submit_button,
            reset_button,
            ..
        } = self;

        let mut form = Column::new()
            .spacing(6)
            .width(Length::FillPortion(1))
            .push(Text::new(M::TITLE).size(26));

        for (index, field) in fields.iter_mut().enumerate() {
            form = form.push(Text::new(field.spec.label).size(15)).push(
                TextInput::new(
                    &mut field.state,
                    field.spec.placeholder,
                    &field.value,
                    move |value| Message::FieldChanged(index, value),
                )
                .padding(6)
                .size(16)
                .on_submit(Message::Submit),
            );
        }

        let buttons = Row::new()
            .spacing(10)
            .push(
                Button::new(submit_button, Text::new(label))
                    .padding(8)
                    .on_press(Message::Submit)
                    .style(style::Submit { succeeded }),
            )
            .push(
                Button::new(reset_button, Text::new("Reset"))
                    .padding(8)
                    .on_press(Message::Reset)
                    .style(style::Button),
            );
        form = form.push(buttons);

        let content = Row::new()
            .spacing(30)
            .align_items(Align::Start)
            .push(form)
            .push(results);

        Container::new(content)
            .padding(16)
            .width(Length::Fill)
            .style(style::Panel)
            .into()
    }
}

#[cfg(test)]
pub(crate) fn fill<M: Model>(calculator: &mut Calculator<M>, values: &[(&str, &str)]) {
    for (id, value) in values {
        let index = M::FIELDS
            .iter()
            .position(|spec| spec.id == *id)
            .unwrap_or_else(|| panic!("no field {}", id));
        calculator
            .update(Message::FieldChanged(index, value.to_string()))
            .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[(&str, &str)] = &[
        ("principal", "1000"),
        ("interest-rate", "6"),
        ("monthly-contribution", "100"),
        ("years", "10"),
    ];

    #[test]
    fn outputs_start_as_placeholders() {
        let calculator = Calculator::<CompoundInterest>::new();
        assert!(calculator.outputs().iter().all(|output| output == PLACEHOLDER));
        assert_eq!(calculator.formula(), None);
        assert_eq!(calculator.submit_label(), CompoundInterest::SUBMIT_LABEL);
    }

    #[test]
    fn empty_field_leaves_previous_results() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(&mut calculator, SAMPLE);
        calculator.submit().unwrap();
        let before = calculator.outputs().to_vec();

        fill(&mut calculator, &[("principal", "")]);
        let error = calculator.update(Message::Submit).unwrap_err();

        assert_eq!(error, InputError::InvalidNumber);
        assert_eq!(error.to_string(), "Please enter valid numbers for all fields.");
        assert_eq!(calculator.outputs(), &before[..]);
    }

    #[test]
    fn empty_form_never_touches_placeholders() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        assert_eq!(calculator.submit(), Err(InputError::InvalidNumber));
        assert!(calculator.outputs().iter().all(|output| output == PLACEHOLDER));
        assert_eq!(calculator.formula(), None);
    }

    #[test]
    fn non_finite_text_is_not_a_number() {
        for text in &["NaN", "inf", "-infinity", "12abc"] {
            let mut calculator = Calculator::<CompoundInterest>::new();
            fill(&mut calculator, SAMPLE);
            fill(&mut calculator, &[("monthly-contribution", text)]);
            assert_eq!(calculator.submit(), Err(InputError::InvalidNumber), "{}", text);
        }
    }

    #[test]
    fn negative_values_are_out_of_range() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(&mut calculator, SAMPLE);
        fill(&mut calculator, &[("principal", "-1")]);

        let error = calculator.submit().unwrap_err();
        assert_eq!(error, InputError::OutOfRange);
        assert_eq!(
            error.to_string(),
            "Please enter valid positive values for all fields."
        );
    }

    #[test]
    fn success_renders_every_output() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(&mut calculator, SAMPLE);

        assert_eq!(calculator.update(Message::Submit), Ok(Status::Computed));
        assert_eq!(
            calculator.outputs(),
            &["$18,207.33", "$13,000.00", "$5,207.33"]
        );
        assert_eq!(calculator.submit_label(), "Final Amount: $18,207.33");
        assert!(calculator.formula().unwrap().starts_with("Formula: $1000.00"));
    }

    #[test]
    fn reset_restores_placeholders_and_hides_formula() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(&mut calculator, SAMPLE);
        calculator.submit().unwrap();

        assert_eq!(calculator.update(Message::Reset), Ok(Status::Cleared));

        assert!(calculator.outputs().iter().all(|output| output == PLACEHOLDER));
        assert_eq!(calculator.formula(), None);
        assert_eq!(calculator.submit_label(), CompoundInterest::SUBMIT_LABEL);
        assert!(calculator.fields.iter().all(|field| field.value.is_empty()));

        // and from a pristine form too
        calculator.reset();
        assert!(calculator.outputs().iter().all(|output| output == PLACEHOLDER));
    }

    #[test]
    fn overflowing_projection_is_rejected() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(
            &mut calculator,
            &[
                ("principal", "1e300"),
                ("interest-rate", "1200"),
                ("monthly-contribution", "0"),
                ("years", "1000"),
            ],
        );
        assert_eq!(calculator.submit(), Err(InputError::Overflow));
        assert!(calculator.outputs().iter().all(|output| output == PLACEHOLDER));
    }
}
