use super::{FieldSpec, InputError, Model, Outcome, Values};
use crate::finance::{annuity_formula, Projection};

pub struct Retirement;

#[derive(Clone, Debug, PartialEq)]
pub struct RetirementInput {
    pub age: f64,
    pub retirement_age: f64,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub annual_rate: f64,
}

impl RetirementInput {
    /// Fractional ages give fractional months.
    pub fn months(&self) -> f64 {
        (self.retirement_age - self.age) * 12.0
    }
}

impl Model for Retirement {
    type Input = RetirementInput;

    const TITLE: &'static str = "Retirement Calculator";
    const SUBMIT_LABEL: &'static str = "Calculate";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            id: "age",
            label: "Current Age",
            placeholder: "30",
        },
        FieldSpec {
            id: "retirement-age",
            label: "Retirement Age",
            placeholder: "65",
        },
        FieldSpec {
            id: "current-amount",
            label: "Current Savings ($)",
            placeholder: "10000",
        },
        FieldSpec {
            id: "monthly-contribution-retirement",
            label: "Monthly Contribution ($)",
            placeholder: "500",
        },
        FieldSpec {
            id: "interest-rate-retirement",
            label: "Expected Annual Return (%)",
            placeholder: "7",
        },
    ];
    const OUTPUTS: &'static [&'static str] =
        &["Final Amount", "Total Contributions", "Interest Earned"];

    fn parse(values: &Values<'_>) -> Result<Self::Input, InputError> {
        let input = RetirementInput {
            age: values.number("age")?,
            retirement_age: values.number("retirement-age")?,
            current_savings: values.number("current-amount")?,
            monthly_contribution: values.number("monthly-contribution-retirement")?,
            annual_rate: values.number("interest-rate-retirement")? / 100.0,
        };

        let negative = [
            input.age,
            input.retirement_age,
            input.current_savings,
            input.monthly_contribution,
            input.annual_rate,
        ]
        .iter()
        .any(|value| *value < 0.0);
        if negative || input.retirement_age <= input.age {
            return Err(InputError::OutOfRange);
        }

        Ok(input)
    }

    fn compute(input: &Self::Input) -> Result<Outcome, InputError> {
        let monthly_rate = input.annual_rate / 12.0;
        let months = input.months();

        let projection = Projection::annuity(
            input.current_savings,
            monthly_rate,
            input.monthly_contribution,
            months,
        );
        let formula = annuity_formula(
            input.current_savings,
            monthly_rate,
            input.monthly_contribution,
            months,
        );

        Outcome::projection(&projection, formula)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{fill, Calculator};
    use super::*;

    const SAMPLE: &[(&str, &str)] = &[
        ("age", "30"),
        ("retirement-age", "65"),
        ("current-amount", "10000"),
        ("monthly-contribution-retirement", "500"),
        ("interest-rate-retirement", "7"),
    ];

    #[test]
    fn projects_savings_to_retirement() {
        let mut calculator = Calculator::<Retirement>::new();
        fill(&mut calculator, SAMPLE);

        calculator.submit().unwrap();

        assert_eq!(
            calculator.outputs(),
            &["$1,015,588.82", "$220,000.00", "$795,588.82"]
        );
        assert_eq!(calculator.submit_label(), "Final Amount: $1,015,588.82");
        assert!(calculator
            .formula()
            .unwrap()
            .starts_with("Formula: $10000.00 × (1 + 0.0058)^420 + $500.00"));
    }

    #[test]
    fn retirement_must_come_after_current_age() {
        for retirement_age in &["30", "29.5"] {
            let mut calculator = Calculator::<Retirement>::new();
            fill(&mut calculator, SAMPLE);
            fill(&mut calculator, &[("retirement-age", retirement_age)]);
            assert_eq!(calculator.submit(), Err(InputError::OutOfRange));
        }
    }

    #[test]
    fn unparseable_wins_over_out_of_range() {
        let mut calculator = Calculator::<Retirement>::new();
        fill(&mut calculator, SAMPLE);
        fill(
            &mut calculator,
            &[("retirement-age", "20"), ("interest-rate-retirement", "seven")],
        );
        assert_eq!(calculator.submit(), Err(InputError::InvalidNumber));
    }

    #[test]
    fn half_years_count_as_months() {
        let input = RetirementInput {
            age: 30.5,
            retirement_age: 31.0,
            current_savings: 0.0,
            monthly_contribution: 100.0,
            annual_rate: 0.0,
        };
        assert_eq!(input.months(), 6.0);

        let outcome = Retirement::compute(&input).unwrap();
        assert_eq!(outcome.outputs, vec!["$600.00", "$600.00", "$0.00"]);
    }
}
