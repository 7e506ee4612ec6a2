use anyhow::Context;
use clap::{Parser, Subcommand};
use mcdonald_core::{
    classify, classify_as, compare_scenarios, AnatomicalLocation, ClinicalScenario, Collector,
    FindingsDocument, Outcome, Presenter, Role, Step,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mcdonald")]
#[command(about = "McDonald 2024 criteria classifier CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a YAML findings document
    Classify {
        /// Path to the findings document
        file: PathBuf,
        /// Evaluate under this scenario instead of the one in the document
        #[arg(long)]
        scenario: Option<ClinicalScenario>,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a YAML findings document under every clinical scenario
    Compare {
        /// Path to the findings document
        file: PathBuf,
        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
    /// Enter findings step by step and show the result
    Wizard,
    /// List anatomical location keys
    Locations,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mcdonald_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Some(Commands::Classify {
            file,
            scenario,
            json,
        }) => {
            let findings = FindingsDocument::load(&file)
                .with_context(|| format!("reading findings from {}", file.display()))?;
            let verdict = match scenario {
                Some(scenario) => classify_as(&findings, scenario),
                None => classify(&findings),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                print!("{}", presenter.verdict(&verdict));
            }
        }
        Some(Commands::Compare { file, json }) => {
            let findings = FindingsDocument::load(&file)
                .with_context(|| format!("reading findings from {}", file.display()))?;
            let comparison = compare_scenarios(&findings);
            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print!("{}", presenter.comparison(&comparison));
            }
        }
        Some(Commands::Wizard) => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            let outcome = run_wizard(&mut input, &mut output)?;
            writeln!(output)?;
            write!(output, "{}", render_outcome(&presenter, &outcome))?;
        }
        Some(Commands::Locations) => {
            for location in AnatomicalLocation::ALL {
                println!("{:<24} {}", location.key(), location.label());
            }
        }
        None => {
            println!("Use 'mcdonald --help' for commands");
        }
    }

    Ok(())
}

fn render_outcome(presenter: &Presenter, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Single(verdict) => presenter.verdict(verdict),
        Outcome::Comparison(comparison) => presenter.comparison(comparison),
    }
}

enum Answer {
    Value(String),
    Back,
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> anyhow::Result<Answer> {
    write!(output, "{prompt} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input ended before the assessment was complete");
    }

    let line = line.trim();
    if line.eq_ignore_ascii_case("back") {
        Ok(Answer::Back)
    } else {
        Ok(Answer::Value(line.to_string()))
    }
}

/// Asks until a yes/no answer is given. `None` means the user asked to go back.
fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> anyhow::Result<Option<bool>> {
    loop {
        match ask(input, output, &format!("{prompt} [y/N]:"))? {
            Answer::Back => return Ok(None),
            Answer::Value(value) => match value.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "" | "n" | "no" => return Ok(Some(false)),
                _ => writeln!(output, "Please answer y or n.")?,
            },
        }
    }
}

/// Walks the collector through its steps on a line-based terminal.
///
/// Typing `back` at any prompt returns to the previous step.
fn run_wizard<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Outcome> {
    let mut collector = Collector::new();

    loop {
        match collector.step() {
            Step::Role => match ask(input, output, "Role [clinician/radiologist]:")? {
                Answer::Back => {}
                Answer::Value(value) => match value.to_ascii_lowercase().as_str() {
                    "clinician" => {
                        collector.select_role(Role::Clinician);
                        collector.next()?;
                    }
                    "radiologist" => {
                        collector.select_role(Role::Radiologist);
                        collector.next()?;
                    }
                    _ => writeln!(output, "Please answer clinician or radiologist.")?,
                },
            },
            Step::Scenario => match ask(input, output, "Clinical scenario [cis/progressive/ris]:")? {
                Answer::Back => {
                    collector.back();
                }
                Answer::Value(value) => match value.parse::<ClinicalScenario>() {
                    Ok(scenario) if scenario != ClinicalScenario::Unknown => {
                        collector.select_scenario(scenario);
                        collector.next()?;
                    }
                    _ => writeln!(output, "Please answer cis, progressive or ris.")?,
                },
            },
            Step::RiskFactors => {
                let Some(age) = ask_yes_no(input, output, "Age over 50?")? else {
                    collector.back();
                    continue;
                };
                let Some(vascular) = ask_yes_no(input, output, "Vascular risk factors?")? else {
                    collector.back();
                    continue;
                };
                collector.set_age_over_50(age);
                collector.set_vascular_risk(vascular);
                collector.next()?;
            }
            Step::Locations => {
                for (index, location) in AnatomicalLocation::ALL.iter().enumerate() {
                    let mark = if collector.findings().locations.contains(location) {
                        "x"
                    } else {
                        " "
                    };
                    writeln!(output, "  [{mark}] {}. {}", index + 1, location.label())?;
                }
                match ask(
                    input,
                    output,
                    "Toggle regions by number or key (blank to continue):",
                )? {
                    Answer::Back => {
                        collector.back();
                    }
                    Answer::Value(value) if value.is_empty() => {
                        collector.next()?;
                    }
                    Answer::Value(value) => {
                        for token in value.split(|c: char| c == ',' || c.is_whitespace()) {
                            if token.is_empty() {
                                continue;
                            }
                            match parse_location(token) {
                                Some(location) => {
                                    collector.toggle_location(location);
                                }
                                None => writeln!(output, "Unknown region: {token}")?,
                            }
                        }
                    }
                }
            }
            Step::Biomarkers => {
                let questions: [(&str, fn(&mut Collector, bool)); 4] = [
                    ("Dissemination in time (DIT)?", Collector::set_dit),
                    ("CSF-specific oligoclonal bands?", Collector::set_csf),
                    ("Central vein sign (CVS)?", Collector::set_cvs),
                    ("Paramagnetic rim lesions (PRL)?", Collector::set_prl),
                ];
                let mut answers = Vec::with_capacity(questions.len());
                for (prompt, _) in &questions {
                    match ask_yes_no(input, output, prompt)? {
                        Some(answer) => answers.push(answer),
                        None => break,
                    }
                }
                if answers.len() < questions.len() {
                    collector.back();
                    continue;
                }
                for ((_, set), answer) in questions.iter().zip(answers) {
                    set(&mut collector, answer);
                }
                collector.next()?;
            }
            Step::Progression => {
                match ask_yes_no(input, output, "More than 1 year of progression?")? {
                    Some(answer) => {
                        collector.set_progression_duration(answer);
                        collector.next()?;
                    }
                    None => {
                        collector.back();
                    }
                }
            }
            Step::Result => return Ok(collector.outcome()),
        }
    }
}

fn parse_location(token: &str) -> Option<AnatomicalLocation> {
    if let Ok(number) = token.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| AnatomicalLocation::ALL.get(index).copied());
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcdonald_core::DiagnosisStatus;
    use std::io::Cursor;

    fn run(script: &str) -> anyhow::Result<(Outcome, String)> {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_wizard(&mut input, &mut output)?;
        Ok((outcome, String::from_utf8(output).unwrap()))
    }

    #[test]
    fn clinician_progressive_session() {
        let script = "clinician\nprogressive\nn\nn\n1 spinal_cord\n\ny\nn\nn\nn\ny\n";
        let (outcome, _) = run(script).expect("wizard completes");
        match outcome {
            Outcome::Single(verdict) => {
                assert_eq!(verdict.status, DiagnosisStatus::Ms);
                assert_eq!(verdict.title, "Progressive MS");
            }
            Outcome::Comparison(_) => panic!("clinician should get a single verdict"),
        }
    }

    #[test]
    fn back_returns_to_previous_step() {
        // Pick CIS, go back from risk factors, switch to RIS.
        let script = "clinician\ncis\nback\nris\nn\nn\n3\n\nn\nn\nn\nn\n";
        let (outcome, output) = run(script).expect("wizard completes");
        match outcome {
            Outcome::Single(verdict) => {
                assert_eq!(verdict.status, DiagnosisStatus::RisHighRisk);
                assert_eq!(verdict.recommendations[0], "No DIS.");
            }
            Outcome::Comparison(_) => panic!("clinician should get a single verdict"),
        }
        assert_eq!(output.matches("Clinical scenario").count(), 2);
    }

    #[test]
    fn radiologist_session_compares_scenarios() {
        let script = "radiologist\nn\nn\nperiventricular,optic_nerve\n\nn\nn\ny\nn\n";
        let (outcome, _) = run(script).expect("wizard completes");
        match outcome {
            Outcome::Comparison(comparison) => {
                assert_eq!(comparison.cis.status, DiagnosisStatus::Ms);
                assert_eq!(comparison.ris.status, DiagnosisStatus::Ms);
            }
            Outcome::Single(_) => panic!("radiologist should get a comparison"),
        }
    }

    #[test]
    fn invalid_answers_are_reprompted() {
        let script = "nurse\nclinician\nrelapsing\ncis\nmaybe\nn\nn\n9 cerebellum\n\nn\nn\nn\nn\n";
        let (outcome, output) = run(script).expect("wizard completes");
        assert!(output.contains("Please answer clinician or radiologist."));
        assert!(output.contains("Please answer cis, progressive or ris."));
        assert!(output.contains("Please answer y or n."));
        assert!(output.contains("Unknown region: 9"));
        assert!(output.contains("Unknown region: cerebellum"));
        match outcome {
            Outcome::Single(verdict) => assert_eq!(verdict.status, DiagnosisStatus::Possible),
            Outcome::Comparison(_) => panic!("clinician should get a single verdict"),
        }
    }

    #[test]
    fn truncated_input_is_an_error() {
        assert!(run("clinician\ncis\n").is_err());
    }

    #[test]
    fn parses_locations_by_number_or_key() {
        assert_eq!(parse_location("2"), Some(AnatomicalLocation::CorticalJuxtacortical));
        assert_eq!(parse_location("0"), None);
        assert_eq!(parse_location("6"), None);
        assert_eq!(parse_location("optic_nerve"), Some(AnatomicalLocation::OpticNerve));
    }
}
