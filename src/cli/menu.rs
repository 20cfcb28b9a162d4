//! Interactive menu driver
//!
//! Thin adapter between a line-oriented terminal session and the
//! [`InterestCalculator`]: each menu iteration collects the parameters for
//! one product, makes a single `calculate` call and prints the interest or
//! the validation reason. Nothing here touches the rate rules.

use crate::core::InterestCalculator;
use crate::io::csv_format::format_amount;
use crate::types::{CalculationRequest, ProductType};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

const MENU: &str = "\nMAIN MENU\n\
                    1. Interest Calculator - SB\n\
                    2. Interest Calculator - FD\n\
                    3. Interest Calculator - RD\n\
                    4. Exit\n";

/// Why a prompt did not produce a usable value
#[derive(Debug, Error)]
enum InputError {
    #[error("end of input")]
    EndOfInput,

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

struct Session<'a, R, W> {
    input: R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn prompt(&mut self, text: &str) -> Result<String, InputError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<T, InputError> {
        let answer = self.prompt(text)?;
        answer.parse().map_err(|_| {
            InputError::Invalid(format!("Invalid number '{}'. Please try again.", answer))
        })
    }

    fn read_request(&mut self, product: ProductType) -> Result<CalculationRequest, InputError> {
        let request = match product {
            ProductType::Savings => {
                let amount: Decimal =
                    self.prompt_number("Enter the Average amount in your account: ")?;
                let variant = self.prompt("Enter account type (Normal/NRI): ")?;
                CalculationRequest::savings(amount, &variant)
            }
            ProductType::FixedDeposit => {
                let amount: Decimal = self.prompt_number("Enter the FD amount: ")?;
                let days: i64 = self.prompt_number("Enter the number of days: ")?;
                let age: i64 = self.prompt_number("Enter your age: ")?;
                CalculationRequest::fixed_deposit(amount, days, age)
            }
            ProductType::RecurringDeposit => {
                let amount: Decimal = self.prompt_number("Enter monthly RD amount: ")?;
                let months: i64 =
                    self.prompt_number("Enter number of months (6/9/12/15/18/21): ")?;
                let age: i64 = self.prompt_number("Enter your age: ")?;
                CalculationRequest::recurring_deposit(amount, months, age)
            }
        };
        Ok(request)
    }
}

/// Run the menu loop until the user picks Exit or input runs out
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned. Rejected input is
/// printed and the menu shown again.
pub fn run_menu<R: BufRead, W: Write>(
    calculator: &InterestCalculator,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut session = Session { input, output };

    loop {
        write!(session.output, "{}", MENU)?;

        let choice = match session.prompt("Enter your option (1..4): ") {
            Ok(choice) => choice,
            Err(InputError::EndOfInput) => return Ok(()),
            Err(InputError::Io(e)) => return Err(e),
            Err(InputError::Invalid(_)) => continue,
        };

        let product = match choice.as_str() {
            "1" => ProductType::Savings,
            "2" => ProductType::FixedDeposit,
            "3" => ProductType::RecurringDeposit,
            "4" => {
                writeln!(session.output, "Exiting... Thank you!")?;
                return Ok(());
            }
            _ => {
                writeln!(session.output, "Invalid option. Try again.")?;
                continue;
            }
        };

        match session.read_request(product) {
            Ok(request) => match calculator.calculate(&request) {
                Ok(interest) => writeln!(
                    session.output,
                    "Interest gained: Rs. {}",
                    format_amount(interest)
                )?,
                Err(e) => writeln!(session.output, "{}", e)?,
            },
            Err(InputError::Invalid(message)) => writeln!(session.output, "{}", message)?,
            Err(InputError::EndOfInput) => return Ok(()),
            Err(InputError::Io(e)) => return Err(e),
        }
    }
}
