use super::{FieldSpec, InputError, Model, Outcome, Values};
use crate::finance::{annuity_formula, Projection};

pub struct CompoundInterest;

#[derive(Clone, Debug, PartialEq)]
pub struct CompoundInterestInput {
    pub principal: f64,
    /// As a fraction, `0.06` for 6%.
    pub annual_rate: f64,
    pub monthly_contribution: f64,
    pub years: i64,
}

impl Model for CompoundInterest {
    type Input = CompoundInterestInput;

    const TITLE: &'static str = "Compound Interest Calculator";
    const SUBMIT_LABEL: &'static str = "Calculate";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            id: "principal",
            label: "Initial Principal ($)",
            placeholder: "10000",
        },
        FieldSpec {
            id: "interest-rate",
            label: "Annual Interest Rate (%)",
            placeholder: "7",
        },
        FieldSpec {
            id: "monthly-contribution",
            label: "Monthly Contribution ($)",
            placeholder: "200",
        },
        FieldSpec {
            id: "years",
            label: "Time Period (Years)",
            placeholder: "10",
        },
    ];
    const OUTPUTS: &'static [&'static str] =
        &["Final Amount", "Total Contributions", "Interest Earned"];

    fn parse(values: &Values<'_>) -> Result<Self::Input, InputError> {
        let principal = values.number("principal")?;
        let annual_rate = values.number("interest-rate")? / 100.0;
        let monthly_contribution = values.number("monthly-contribution")?;
        let years = values.whole("years")?;

        if principal < 0.0 || annual_rate < 0.0 || monthly_contribution < 0.0 || years < 1 {
            return Err(InputError::OutOfRange);
        }

        Ok(CompoundInterestInput {
            principal,
            annual_rate,
            monthly_contribution,
            years,
        })
    }

    fn compute(input: &Self::Input) -> Result<Outcome, InputError> {
        let monthly_rate = input.annual_rate / 12.0;
        let months = input.years as f64 * 12.0;

        let projection =
            Projection::annuity(input.principal, monthly_rate, input.monthly_contribution, months);
        let formula =
            annuity_formula(input.principal, monthly_rate, input.monthly_contribution, months);

        Outcome::projection(&projection, formula)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{fill, Calculator};
    use super::*;

    #[test]
    fn parses_rate_as_percentage() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(
            &mut calculator,
            &[
                ("principal", " 1000 "),
                ("interest-rate", "6"),
                ("monthly-contribution", "100"),
                ("years", "10"),
            ],
        );

        let input = CompoundInterest::parse(&Values {
            fields: &calculator.fields,
        })
        .unwrap();
        assert_eq!(
            input,
            CompoundInterestInput {
                principal: 1000.0,
                annual_rate: 0.06,
                monthly_contribution: 100.0,
                years: 10,
            }
        );
    }

    #[test]
    fn needs_at_least_one_whole_year() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(
            &mut calculator,
            &[
                ("principal", "1000"),
                ("interest-rate", "6"),
                ("monthly-contribution", "100"),
                ("years", "0"),
            ],
        );
        assert_eq!(calculator.submit(), Err(InputError::OutOfRange));

        fill(&mut calculator, &[("years", "0.9")]);
        assert_eq!(calculator.submit(), Err(InputError::OutOfRange));

        fill(&mut calculator, &[("years", "two")]);
        assert_eq!(calculator.submit(), Err(InputError::InvalidNumber));
    }

    #[test]
    fn fractional_years_are_truncated() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(
            &mut calculator,
            &[
                ("principal", "1000"),
                ("interest-rate", "0"),
                ("monthly-contribution", "100"),
                ("years", "2.5"),
            ],
        );

        calculator.submit().unwrap();
        assert_eq!(calculator.outputs(), &["$3,400.00", "$3,400.00", "$0.00"]);
        assert_eq!(calculator.formula(), Some("Formula: $1000.00 + $100.00 × 24"));
    }

    #[test]
    fn zero_rate_uses_straight_saving() {
        let mut calculator = Calculator::<CompoundInterest>::new();
        fill(
            &mut calculator,
            &[
                ("principal", "1000"),
                ("interest-rate", "0"),
                ("monthly-contribution", "100"),
                ("years", "10"),
            ],
        );

        calculator.submit().unwrap();
        assert_eq!(calculator.outputs(), &["$13,000.00", "$13,000.00", "$0.00"]);
        assert_eq!(
            calculator.formula(),
            Some("Formula: $1000.00 + $100.00 × 120")
        );
    }
}
