use super::{FieldSpec, InputError, Model, Outcome, Values};
use crate::finance::{format_currency, FundTargets};

pub struct EmergencyFund;

const EXPENSES: [&str; 10] = [
    "housing",
    "utilities",
    "gasoline",
    "internet",
    "insurance",
    "groceries",
    "phone",
    "toiletries",
    "debt-minimum",
    "misc",
];

#[derive(Clone, Debug, PartialEq)]
pub struct EmergencyFundInput {
    pub income: f64,
    /// Monthly amounts, in the order of the expense fields.
    pub expenses: Vec<f64>,
}

impl Model for EmergencyFund {
    type Input = EmergencyFundInput;

    const TITLE: &'static str = "Emergency Fund Calculator";
    const SUBMIT_LABEL: &'static str = "Calculate";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            id: "income",
            label: "Monthly Income ($)",
            placeholder: "5000",
        },
        FieldSpec {
            id: "housing",
            label: "Rent / Mortgage ($)",
            placeholder: "1500",
        },
        FieldSpec {
            id: "utilities",
            label: "Utilities ($)",
            placeholder: "200",
        },
        FieldSpec {
            id: "gasoline",
            label: "Gasoline ($)",
            placeholder: "150",
        },
        FieldSpec {
            id: "internet",
            label: "Internet ($)",
            placeholder: "60",
        },
        FieldSpec {
            id: "insurance",
            label: "Insurance ($)",
            placeholder: "140",
        },
        FieldSpec {
            id: "groceries",
            label: "Groceries ($)",
            placeholder: "500",
        },
        FieldSpec {
            id: "phone",
            label: "Phone ($)",
            placeholder: "50",
        },
        FieldSpec {
            id: "toiletries",
            label: "Toiletries ($)",
            placeholder: "40",
        },
        FieldSpec {
            id: "debt-minimum",
            label: "Minimum Debt Payments ($)",
            placeholder: "260",
        },
        FieldSpec {
            id: "misc",
            label: "Miscellaneous ($)",
            placeholder: "100",
        },
    ];
    const OUTPUTS: &'static [&'static str] = &[
        "Remaining After Expenses",
        "Minimum (1 month)",
        "Recommended (3-6 months)",
        "Maximum (12 months)",
    ];

    fn parse(values: &Values<'_>) -> Result<Self::Input, InputError> {
        let income = values.number("income")?;
        let expenses = EXPENSES
            .iter()
            .map(|id| values.number(id))
            .collect::<Result<Vec<_>, _>>()?;

        if income < 0.0 || expenses.iter().any(|expense| *expense < 0.0) {
            return Err(InputError::OutOfRange);
        }

        Ok(EmergencyFundInput { income, expenses })
    }

    fn compute(input: &Self::Input) -> Result<Outcome, InputError> {
        let targets = FundTargets::from_expenses(input.income, &input.expenses);
        if !targets.maximum.is_finite() || !targets.remaining.is_finite() {
            return Err(InputError::Overflow);
        }

        let terms: Vec<String> = input
            .expenses
            .iter()
            .map(|expense| format!("${:.2}", expense))
            .collect();

        Ok(Outcome {
            headline: format!(
                "Monthly Expenses: {}",
                format_currency(targets.monthly_expenses)
            ),
            outputs: vec![
                format_currency(targets.remaining),
                format_currency(targets.minimum),
                format!(
                    "{} - {}",
                    format_currency(targets.medium.0),
                    format_currency(targets.medium.1)
                ),
                format_currency(targets.maximum),
            ],
            formula: format!(
                "Formula: {} = {} per month",
                terms.join(" + "),
                format_currency(targets.monthly_expenses)
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::{fill, Calculator, PLACEHOLDER};
    use super::*;

    const SAMPLE: &[(&str, &str)] = &[
        ("income", "5000"),
        ("housing", "1500"),
        ("utilities", "200"),
        ("gasoline", "150"),
        ("internet", "60"),
        ("insurance", "140"),
        ("groceries", "500"),
        ("phone", "50"),
        ("toiletries", "40"),
        ("debt-minimum", "260"),
        ("misc", "100"),
    ];

    #[test]
    fn sizes_fund_from_monthly_expenses() {
        let mut calculator = Calculator::<EmergencyFund>::new();
        fill(&mut calculator, SAMPLE);

        calculator.submit().unwrap();

        assert_eq!(
            calculator.outputs(),
            &[
                "$2,000.00",
                "$3,000.00",
                "$9,000.00 - $18,000.00",
                "$36,000.00"
            ]
        );
        assert_eq!(calculator.submit_label(), "Monthly Expenses: $3,000.00");
        assert!(calculator
            .formula()
            .unwrap()
            .ends_with("= $3,000.00 per month"));
    }

    #[test]
    fn spending_more_than_income_goes_negative() {
        let mut calculator = Calculator::<EmergencyFund>::new();
        fill(&mut calculator, SAMPLE);
        fill(&mut calculator, &[("income", "2500")]);

        calculator.submit().unwrap();
        assert_eq!(calculator.outputs()[0], "-$500.00");
    }

    #[test]
    fn every_expense_is_required() {
        let mut calculator = Calculator::<EmergencyFund>::new();
        fill(&mut calculator, SAMPLE);
        fill(&mut calculator, &[("toiletries", "")]);

        assert_eq!(calculator.submit(), Err(InputError::InvalidNumber));
        assert!(calculator.outputs().iter().all(|output| output == PLACEHOLDER));

        fill(&mut calculator, &[("toiletries", "-40")]);
        assert_eq!(calculator.submit(), Err(InputError::OutOfRange));
    }
}
