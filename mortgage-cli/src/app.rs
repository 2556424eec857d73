//! Interactive terminal frontend for the readiness wizard.
//!
//! One command per line; the session owns all state and gates every
//! transition, so this layer only renders the current step and translates
//! lines into field edits and actions. Generic over the reader/writer so
//! tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use mortgage_core::format::{format_currency, format_percent};
use mortgage_core::models::{IncomeType, LoanType, PreApprovalLead, YesNo};
use mortgage_core::parse::parse_decimal;
use mortgage_core::wizard::{WizardSession, WizardStep};
use mortgage_webhook::{DeliverySink, WebhookPayload, spawn_delivery};

/// Externally hosted loan-officer photo shown on the results step.
pub const LOAN_OFFICER_PHOTO_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/IMG_4013-gbDCsmMEjwLLUgUxBPyqDAvlOScvvD.JPG";

const LOAN_OFFICER_BLURB: &str = "Hi, I'm Caneshia! My mission is to provide every potential \
borrower with the keys to unlock their dream property. Whether you're securing your first home, \
upgrading to a vacation getaway, investing in income-generating properties, or purchasing \
commercial buildings, I am here to guide you every step of the way.";

const LOAN_OFFICER_CREDENTIALS: &str = "Licensed Loan Officer: Caneshia Cottrell | NMLS #: 1370398";

/// Terminal wizard application.
pub struct App<R, W> {
    session: WizardSession,
    sink: Option<Arc<dyn DeliverySink>>,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        session: WizardSession,
        sink: Option<Arc<dyn DeliverySink>>,
        input: R,
        out: W,
    ) -> Self {
        Self {
            session,
            sink,
            input,
            out,
        }
    }

    /// Runs the prompt loop until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Mortgage Readiness Calculator")?;
        loop {
            self.render_step()?;
            let Some(line) = self.read_line("> ")? else {
                break;
            };
            if !self.handle_command(&line)? {
                break;
            }
        }
        Ok(())
    }

    // ─── command handling ────────────────────────────────────────────────────

    /// Applies one command line; returns `false` when the loop should end.
    fn handle_command(
        &mut self,
        line: &str,
    ) -> io::Result<bool> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(true);
        };
        let rest = parts.collect::<Vec<_>>().join(" ");

        match command {
            "debt" => self.session.form_mut().monthly_debt = rest,
            "income" => self.session.form_mut().annual_income = rest,
            "type" => self.set_income_type(&rest)?,
            "fico" => self.set_fico(&rest)?,
            "loan" => self.set_loan_type(&rest)?,
            "rate" => self.set_rate(&rest)?,
            "history" => self.set_answer(&rest, true)?,
            "taxes" => self.set_answer(&rest, false)?,
            "next" => self.session.next(),
            "back" => self.session.previous(),
            "calc" => self.calculate()?,
            "restart" => self.session.start_over(),
            "preapprove" => self.pre_approval()?,
            "quit" => return Ok(false),
            other => writeln!(self.out, "Unknown command: {other}")?,
        }
        Ok(true)
    }

    fn set_income_type(
        &mut self,
        raw: &str,
    ) -> io::Result<()> {
        match IncomeType::parse(raw) {
            Some(income_type) => self.session.form_mut().income_type = Some(income_type),
            None => writeln!(self.out, "Income type must be one of: W2, 1099, K1")?,
        }
        Ok(())
    }

    fn set_loan_type(
        &mut self,
        raw: &str,
    ) -> io::Result<()> {
        match LoanType::parse(raw) {
            Some(loan_type) => self.session.form_mut().loan_type = Some(loan_type),
            None => writeln!(
                self.out,
                "Loan type must be one of: FHA, Conventional, VA, USDA"
            )?,
        }
        Ok(())
    }

    /// `fico <1-3> <score>` stores the raw text; validation happens at
    /// calculation time like every other text field.
    fn set_fico(
        &mut self,
        raw: &str,
    ) -> io::Result<()> {
        let usage = "Usage: fico <1-3> <score>";
        let Some((index, score)) = raw.split_once(' ') else {
            return writeln!(self.out, "{usage}");
        };
        match index.parse::<usize>() {
            Ok(slot @ 1..=3) => {
                self.session.form_mut().fico_scores[slot - 1] = score.trim().to_string();
            }
            _ => writeln!(self.out, "{usage}")?,
        }
        Ok(())
    }

    fn set_rate(
        &mut self,
        raw: &str,
    ) -> io::Result<()> {
        match parse_decimal(raw) {
            Ok(rate) => self.session.set_interest_rate(rate),
            Err(_) => {
                let guidelines = self.session.guidelines();
                writeln!(
                    self.out,
                    "Rate must be a number between {} and {}",
                    guidelines.min_interest_rate, guidelines.max_interest_rate
                )?;
            }
        }
        Ok(())
    }

    fn set_answer(
        &mut self,
        raw: &str,
        income_history: bool,
    ) -> io::Result<()> {
        match YesNo::parse(raw) {
            Some(answer) if income_history => {
                self.session.form_mut().has_income_history = Some(answer);
            }
            Some(answer) => self.session.form_mut().has_tax_records = Some(answer),
            None => writeln!(self.out, "Answer must be Yes or No")?,
        }
        Ok(())
    }

    fn calculate(&mut self) -> io::Result<()> {
        if let Some(snapshot) = self.session.calculate() {
            self.forward(WebhookPayload::calculation_result(&snapshot));
        }
        Ok(())
    }

    /// Collects the pre-approval contact fields and submits the lead.
    fn pre_approval(&mut self) -> io::Result<()> {
        if self.session.report().is_none() {
            return writeln!(self.out, "Calculate your readiness first.");
        }
        if self.session.lead_submitted() {
            return writeln!(self.out, "Your pre-approval request was already received.");
        }

        let Some(name) = self.read_line("Full name: ")? else {
            return Ok(());
        };
        let Some(email) = self.read_line("Email address: ")? else {
            return Ok(());
        };
        let Some(zip) = self.read_line("ZIP code: ")? else {
            return Ok(());
        };
        let Some(phone) = self.read_line("Phone number: ")? else {
            return Ok(());
        };

        let lead = PreApprovalLead {
            name,
            email,
            zip,
            phone,
        };
        match self.session.submit_lead(lead) {
            Some(snapshot) => {
                self.forward(WebhookPayload::pre_approval_request(&snapshot));
                writeln!(
                    self.out,
                    "Thank you! We've received your pre-approval request. A mortgage specialist \
                     will contact you soon to discuss your options."
                )
            }
            None => writeln!(self.out, "All fields are required."),
        }
    }

    /// Hands a payload to the detached delivery task. The wizard never
    /// waits on the outcome; a missing sink means forwarding is disabled.
    fn forward(
        &mut self,
        payload: WebhookPayload,
    ) {
        if let Some(sink) = &self.sink {
            drop(spawn_delivery(sink.clone(), payload));
        }
    }

    // ─── rendering ───────────────────────────────────────────────────────────

    fn render_step(&mut self) -> io::Result<()> {
        let step = self.session.step();
        writeln!(
            self.out,
            "\n── Step {} of 4: {} ({}%) ──",
            step.number(),
            step.title(),
            step.progress()
        )?;

        match step {
            WizardStep::FinancialInfo => self.render_financial_info()?,
            WizardStep::CreditInfo => self.render_credit_info()?,
            WizardStep::AdditionalInfo => self.render_additional_info()?,
            WizardStep::Results => self.render_results()?,
        }

        if let Some(error) = self.session.error() {
            writeln!(self.out, "Error: {error}")?;
        }
        Ok(())
    }

    fn render_financial_info(&mut self) -> io::Result<()> {
        let form = self.session.form();
        writeln!(
            self.out,
            "  Monthly debt obligation: {}",
            text_or_unset(&form.monthly_debt)
        )?;
        writeln!(
            self.out,
            "  Annual income:           {}",
            text_or_unset(&form.annual_income)
        )?;
        writeln!(
            self.out,
            "  Income type:             {}",
            form.income_type.map(|t| t.as_str()).unwrap_or("(not set)")
        )?;
        writeln!(
            self.out,
            "Include credit cards, personal/car loans, prior mortgages, and lines of credit \
             in monthly debt; leave out rent, utilities, and living expenses."
        )?;
        writeln!(
            self.out,
            "Commands: debt <amount>, income <amount>, type <W2|1099|K1>, next, quit"
        )
    }

    fn render_credit_info(&mut self) -> io::Result<()> {
        let form = self.session.form();
        for (i, score) in form.fico_scores.iter().enumerate() {
            writeln!(self.out, "  FICO 8 score {}: {}", i + 1, text_or_unset(score))?;
        }
        writeln!(
            self.out,
            "  Loan type:      {}",
            form.loan_type.map(|t| t.as_str()).unwrap_or("(not set)")
        )?;
        writeln!(self.out, "  Interest rate:  {}%", form.interest_rate)?;
        writeln!(
            self.out,
            "Commands: fico <1-3> <score>, loan <FHA|Conventional|VA|USDA>, rate <percent>, \
             back, next, quit"
        )
    }

    fn render_additional_info(&mut self) -> io::Result<()> {
        let form = self.session.form();
        writeln!(
            self.out,
            "  2 years of income history in your current profession? {}",
            form.has_income_history
                .map(|a| a.as_str())
                .unwrap_or("(not set)")
        )?;
        writeln!(
            self.out,
            "  Up-to-date tax records for the last 2 years?          {}",
            form.has_tax_records
                .map(|a| a.as_str())
                .unwrap_or("(not set)")
        )?;
        writeln!(
            self.out,
            "Commands: history <Yes|No>, taxes <Yes|No>, back, calc, quit"
        )
    }

    fn render_results(&mut self) -> io::Result<()> {
        let Some(report) = self.session.report().cloned() else {
            return Ok(());
        };

        writeln!(self.out, "Status: {}", report.status.as_str())?;
        writeln!(self.out, "{}", report.status_message)?;
        writeln!(self.out)?;
        writeln!(self.out, "  Middle credit score:  {}", report.middle_score)?;
        writeln!(
            self.out,
            "  Debt-to-income ratio: {}",
            format_percent(report.dti)
        )?;
        writeln!(
            self.out,
            "  Housing ratio:        {}",
            format_percent(report.housing_ratio)
        )?;
        writeln!(
            self.out,
            "  Max monthly payment:  {}",
            format_currency(report.max_monthly_payment)
        )?;
        writeln!(
            self.out,
            "  Estimated home price range: {} - {}",
            format_currency(report.low_price_range),
            format_currency(report.high_price_range)
        )?;
        writeln!(
            self.out,
            "This is a preliminary estimate based on the information provided; for a final \
             approval and accurate price range, consult a licensed loan officer."
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Meet your mortgage loan officer:")?;
        writeln!(self.out, "{LOAN_OFFICER_BLURB}")?;
        writeln!(self.out, "{LOAN_OFFICER_CREDENTIALS}")?;
        writeln!(self.out, "Photo: {LOAN_OFFICER_PHOTO_URL}")?;
        writeln!(self.out)?;
        if self.session.lead_submitted() {
            writeln!(
                self.out,
                "Your pre-approval request has been received; a specialist will be in touch."
            )?;
            writeln!(self.out, "Commands: restart, quit")
        } else {
            writeln!(self.out, "Commands: preapprove, restart, quit")
        }
    }

    fn read_line(
        &mut self,
        prompt: &str,
    ) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn text_or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not set)"
    } else {
        value
    }
}
