//! Interactive membership session
//!
//! Prompts for a plan, group size and feature lists, prices the request and
//! asks for confirmation. Generic over reader and writer so the whole flow
//! runs against in-memory buffers in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use askama::Template;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::pricing::models::Feature;
use crate::pricing::{MembershipRequest, PricingEngine, PricingError, Quote};

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Membership confirmed at this price
    Confirmed(Decimal),
    /// Priced, but the user declined
    Cancelled,
    /// The engine refused the request
    Rejected(PricingError),
    /// Input could not be parsed or ended early
    InputError(String),
}

impl SessionOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SessionOutcome::Confirmed(_))
    }
}

/// Membership summary shown before confirmation
#[derive(Template)]
#[template(path = "summary.txt")]
struct SummaryTemplate<'a> {
    plan: &'a str,
    members: i32,
    additional: String,
    premium: String,
    notices: Vec<String>,
    total: Decimal,
}

/// Render the confirmation summary for a priced request
pub fn render_summary(request: &MembershipRequest, quote: &Quote) -> Result<String> {
    let template = SummaryTemplate {
        plan: &request.plan_type,
        members: request.member_count,
        additional: join_or_none(&request.additional_features),
        premium: join_or_none(&request.premium_features),
        notices: quote.breakdown.notices(),
        total: quote.price.normalize(),
    };
    Ok(template.render()?)
}

/// Split a comma-separated list, trimming entries and dropping blanks
pub fn parse_feature_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn describe_features(features: &[Feature]) -> String {
    features
        .iter()
        .map(|f| format!("{} (${})", f.name, f.price.normalize()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One interactive pricing session
pub struct Session<'e, R, W> {
    engine: &'e PricingEngine,
    input: R,
    output: W,
}

impl<'e, R: BufRead, W: Write> Session<'e, R, W> {
    pub fn new(engine: &'e PricingEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Run the full prompt, price and confirm flow.
    ///
    /// Only I/O failures are returned as errors; everything the user can
    /// fix by trying again is reported through the outcome.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let engine = self.engine;
        let catalog = engine.catalog();

        let plans = catalog.plan_names().join(", ");
        let Some(plan_type) = self.prompt(&format!("Select a membership plan [{}]: ", plans))?
        else {
            return self.end_of_input();
        };

        let Some(raw_members) = self.prompt("Number of members signing up together: ")? else {
            return self.end_of_input();
        };
        let member_count = match raw_members.parse::<i32>() {
            Ok(n) => n,
            Err(_) => {
                let message = format!("member count must be a whole number, got '{}'", raw_members);
                writeln!(self.output, "Input error: {}", message)?;
                return Ok(SessionOutcome::InputError(message));
            }
        };

        let mut additional_features = Vec::new();
        if let Some(plan) = catalog.plan(&plan_type).filter(|p| p.has_features()) {
            writeln!(
                self.output,
                "Available features for {}: {}",
                plan.name,
                describe_features(&plan.features)
            )?;
            let Some(raw) = self.prompt(
                "Enter desired additional features separated by commas (or leave blank): ",
            )?
            else {
                return self.end_of_input();
            };
            additional_features = parse_feature_list(&raw);
        }

        writeln!(
            self.output,
            "Available premium features: {}",
            describe_features(&catalog.premium_features)
        )?;
        let Some(raw) =
            self.prompt("Enter desired premium features separated by commas (or leave blank): ")?
        else {
            return self.end_of_input();
        };
        let premium_features = parse_feature_list(&raw);

        let request = MembershipRequest {
            plan_type,
            additional_features,
            premium_features,
            member_count,
        };
        self.confirm(&request)
    }

    /// Price the request, show the summary and ask for confirmation
    pub fn confirm(&mut self, request: &MembershipRequest) -> Result<SessionOutcome> {
        let quote = match self.engine.calculate_cost(request) {
            Ok(quote) => quote,
            Err(err) => {
                writeln!(self.output, "Error: {}", err)?;
                return Ok(SessionOutcome::Rejected(err));
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "{}", render_summary(request, &quote)?)?;

        let Some(answer) = self.prompt("\nConfirm membership? (yes/no): ")? else {
            return self.end_of_input();
        };

        if answer.eq_ignore_ascii_case("yes") {
            info!(
                "Membership confirmed: {} plan, {} member(s), ${}",
                request.plan_type, request.member_count, quote.price
            );
            Ok(SessionOutcome::Confirmed(quote.price))
        } else {
            writeln!(self.output, "Membership canceled.")?;
            Ok(SessionOutcome::Cancelled)
        }
    }

    /// Write a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim().to_string();
        debug!("Read input: {:?}", line);
        Ok(Some(line))
    }

    fn end_of_input(&mut self) -> Result<SessionOutcome> {
        let message = "unexpected end of input".to_string();
        writeln!(self.output)?;
        writeln!(self.output, "Input error: {}", message)?;
        Ok(SessionOutcome::InputError(message))
    }
}
