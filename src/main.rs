use clap::{Args, Parser, Subcommand, ValueEnum};
use emicalc::application::batch::quote_batch;
use emicalc::application::calculator::EmiCalculator;
use emicalc::domain::eligibility::{ApplicantProfile, EligibilityReport};
use emicalc::domain::loan::LoanQuoteInput;
use emicalc::domain::quote::LoanQuoteResult;
use emicalc::interfaces::csv::quote_reader::QuoteRequestReader;
use emicalc::interfaces::csv::quote_writer::QuoteWriter;
use emicalc::interfaces::display::{emi_message, format_inr};
use emicalc::interfaces::form::{DEFAULT_PRINCIPAL, DEFAULT_RATE, DEFAULT_TENURE, QuoteForm};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reject tenures longer than this many months.
    #[arg(long, global = true, env = "EMICALC_MAX_TENURE")]
    max_tenure: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Quote the monthly installment for one loan
    Quote {
        #[command(flatten)]
        loan: LoanArgs,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the month-by-month amortization schedule
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Quote every request in a CSV file (principal, rate, tenure)
    Batch {
        /// Input requests CSV file
        input: PathBuf,
    },
    /// Check an applicant against the eligibility criteria
    Eligibility {
        #[arg(long)]
        age: u32,

        #[arg(long)]
        non_resident: bool,

        #[arg(long)]
        no_stable_income: bool,

        #[arg(long)]
        no_kyc: bool,

        #[arg(long)]
        poor_credit: bool,
    },
}

#[derive(Args)]
struct LoanArgs {
    /// Loan amount in rupees
    #[arg(long, default_value = DEFAULT_PRINCIPAL, allow_hyphen_values = true)]
    principal: String,

    /// Annual interest rate in percent
    #[arg(long, default_value = DEFAULT_RATE, allow_hyphen_values = true)]
    rate: String,

    /// Tenure in months
    #[arg(long, default_value = DEFAULT_TENURE, allow_hyphen_values = true)]
    tenure: String,
}

impl LoanArgs {
    fn into_input(self) -> Result<LoanQuoteInput> {
        QuoteForm::new(self.principal, self.rate, self.tenure)
            .into_input()
            .into_diagnostic()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let calculator = match cli.max_tenure {
        Some(months) => EmiCalculator::new().with_max_tenure(months),
        None => EmiCalculator::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Quote { loan, format } => {
            let input = loan.into_input()?;
            let summary = calculator.summarize(&input).into_diagnostic()?;
            match format {
                Format::Text => {
                    let result = LoanQuoteResult {
                        monthly_installment: summary.emi,
                    };
                    writeln!(out, "{}", emi_message(&result)).into_diagnostic()?;
                    writeln!(out, "Total Interest: {}", format_inr(summary.total_interest))
                        .into_diagnostic()?;
                    writeln!(out, "Total Payment: {}", format_inr(summary.total_payment))
                        .into_diagnostic()?;
                }
                Format::Csv => {
                    let mut writer = QuoteWriter::new(out);
                    writer.write_summary(&summary).into_diagnostic()?;
                    writer.flush().into_diagnostic()?;
                }
                Format::Json => {
                    serde_json::to_writer_pretty(&mut out, &summary).into_diagnostic()?;
                    writeln!(out).into_diagnostic()?;
                }
            }
        }
        Command::Schedule { loan, format } => {
            let input = loan.into_input()?;
            let rows = calculator.schedule(&input).into_diagnostic()?;
            match format {
                Format::Text => {
                    writeln!(
                        out,
                        "{:>5}  {:>16}  {:>14}  {:>14}  {:>14}  {:>16}",
                        "Month", "Opening", "EMI", "Interest", "Principal", "Closing"
                    )
                    .into_diagnostic()?;
                    for row in &rows {
                        writeln!(
                            out,
                            "{:>5}  {:>16}  {:>14}  {:>14}  {:>14}  {:>16}",
                            row.month,
                            format_inr(row.opening_balance),
                            format_inr(row.installment),
                            format_inr(row.interest),
                            format_inr(row.principal_component),
                            format_inr(row.closing_balance)
                        )
                        .into_diagnostic()?;
                    }
                }
                Format::Csv => {
                    QuoteWriter::new(out)
                        .write_schedule(&rows)
                        .into_diagnostic()?;
                }
                Format::Json => {
                    serde_json::to_writer_pretty(&mut out, &rows).into_diagnostic()?;
                    writeln!(out).into_diagnostic()?;
                }
            }
        }
        Command::Batch { input } => {
            let file = File::open(&input).into_diagnostic()?;
            let reader = QuoteRequestReader::new(file);
            let mut writer = QuoteWriter::new(out);
            let outcome =
                quote_batch(reader.requests(), &calculator, &mut writer).into_diagnostic()?;
            info!(
                quoted = outcome.quoted,
                skipped = outcome.skipped,
                "Batch complete"
            );
        }
        Command::Eligibility {
            age,
            non_resident,
            no_stable_income,
            no_kyc,
            poor_credit,
        } => {
            let profile = ApplicantProfile {
                indian_resident: !non_resident,
                age_years: age,
                stable_income: !no_stable_income,
                kyc_verified: !no_kyc,
                good_credit_history: !poor_credit,
            };
            let report = EligibilityReport::evaluate(&profile);
            if report.is_eligible() {
                writeln!(out, "Eligible").into_diagnostic()?;
            } else {
                writeln!(out, "Not eligible").into_diagnostic()?;
                for criterion in &report.unmet {
                    writeln!(out, "  missing: {}", criterion.description()).into_diagnostic()?;
                }
            }
        }
    }

    Ok(())
}
