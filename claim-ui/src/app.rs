//! Glue between the command line and the calculator library.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use claim_core::leads::{
    ContactDetails, InMemoryLeadPortFactory, LeadPortRegistry, LogLeadPortFactory,
};
use claim_core::{
    AnswerSet, CalculatorDefinition, Catalog, FormStep, LeadError, LeadSubmissionPort, Question,
    QuestionKind,
};
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::session::CalculatorSession;
use crate::views::CalculatorView;

/// Registry with every built-in lead backend.
pub fn build_lead_registry() -> LeadPortRegistry {
    let mut registry = LeadPortRegistry::new();
    registry.register(Box::new(LogLeadPortFactory));
    registry.register(Box::new(InMemoryLeadPortFactory::default()));
    registry
}

/// Looks a calculator up by slug, or by route when `name` starts with `/`.
pub fn find_calculator(
    catalog: &Catalog,
    name: &str,
) -> Result<Arc<CalculatorDefinition>> {
    let found = if name.starts_with('/') {
        catalog.by_route(name)
    } else {
        catalog.get(name)
    };
    found.with_context(|| {
        format!(
            "unknown calculator '{name}'; available: {}",
            catalog.slugs().join(", ")
        )
    })
}

/// Parses `key=value` command-line assignments.
pub fn parse_answers(assignments: &[String]) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();
    for assignment in assignments {
        let (question, value) = AnswerSet::parse_pair(assignment)
            .with_context(|| format!("expected key=value, got '{assignment}'"))?;
        answers.set(question, value);
    }
    Ok(answers)
}

/// Contact details from the parts a claimant filled in. Blank parts are
/// dropped; `None` when every part is blank.
pub fn contact_details(
    name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
) -> Option<ContactDetails> {
    let filled = |part: Option<&str>| {
        part.map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
    };
    let (name, phone, email) = (filled(name), filled(phone), filled(email));
    if name.is_none() && phone.is_none() && email.is_none() {
        return None;
    }
    Some(ContactDetails {
        name: name.unwrap_or_default(),
        phone,
        email,
    })
}

/// Fills a session with `answers` and advances until the form is on the
/// 1-based `target` step, or on results when `target` is `None`.
///
/// # Errors
///
/// When an earlier step is missing required answers, or `target` is not a
/// step of the calculator.
pub fn advance_session(
    definition: Arc<CalculatorDefinition>,
    answers: &AnswerSet,
    target: Option<usize>,
) -> Result<CalculatorSession> {
    if let Some(step) = target
        && definition.step(step).is_none()
    {
        bail!(
            "{} has steps 1 to {}, not {step}",
            definition.slug,
            definition.step_count()
        );
    }

    let mut session = CalculatorSession::new(definition);
    for (question, value) in answers.iter() {
        session.answer(question, value);
    }

    loop {
        let current = session.step();
        let FormStep::Input(step) = current else {
            return Ok(session);
        };
        if target == Some(step) {
            return Ok(session);
        }
        if session.next() == current {
            let missing = session.form().missing_answers(step).join(", ");
            let title = session
                .definition()
                .step(step)
                .map(|s| s.title.clone())
                .unwrap_or_default();
            bail!("step {step} ({title}) is missing required answers: {missing}");
        }
    }
}

/// Drives a session from line-oriented input.
///
/// Each question of the current step is asked in turn. A blank line keeps
/// the current answer. `back`, `reset` and `quit` are accepted at any
/// prompt; on results, `submit` asks for contact details and hands the lead
/// to `port`. A lead the port rejects leaves the visitor on results.
pub async fn run_interactive<R: BufRead, W: Write>(
    definition: Arc<CalculatorDefinition>,
    site: &SiteConfig,
    port: Option<&dyn LeadSubmissionPort>,
    mut input: R,
    mut output: W,
) -> Result<CalculatorSession> {
    let view = CalculatorView::new(site);
    let mut session = CalculatorSession::new(definition);
    writeln!(output, "== {} ==", session.definition().title)?;

    loop {
        match session.step() {
            FormStep::Input(step) => {
                let total = session.form().total_steps();
                let title = session
                    .definition()
                    .step(step)
                    .map(|s| s.title.clone())
                    .unwrap_or_default();
                writeln!(output, "\nStep {step} of {total}: {title}")?;

                match ask_step(&mut session, step, &mut input, &mut output)? {
                    Prompt::Done => {
                        if session.next() == FormStep::Input(step) {
                            let missing = session.form().missing_answers(step).join(", ");
                            writeln!(output, "Still needed: {missing}")?;
                        }
                    }
                    Prompt::Command(Command::Back) => {
                        session.back();
                    }
                    Prompt::Command(Command::Reset) => session.reset(),
                    Prompt::Command(Command::Quit) | Prompt::Eof => return Ok(session),
                    Prompt::Command(Command::Submit) => {
                        writeln!(output, "Finish the form before submitting.")?
                    }
                }
            }
            FormStep::Results => {
                if let Some(range) = session.result() {
                    writeln!(output, "\n{}", view.render_text(session.definition(), range))?;
                }
                writeln!(output, "Type 'submit', 'back', 'reset' or 'quit'.")?;

                match read_line(&mut input, &mut output)? {
                    None => return Ok(session),
                    Some(line) => match Command::parse(&line) {
                        Some(Command::Submit) => {
                            let Some(port) = port else {
                                writeln!(output, "Lead submission is not configured.")?;
                                continue;
                            };
                            let Some(contact) = ask_contact(&mut input, &mut output)? else {
                                return Ok(session);
                            };
                            match session.submit_lead(port, contact).await {
                                Ok(_) => {
                                    writeln!(
                                        output,
                                        "Thank you. Your evaluation request was sent."
                                    )?;
                                    return Ok(session);
                                }
                                Err(LeadError::Rejected(reason)) => {
                                    writeln!(output, "Not sent: {reason}.")?;
                                }
                                Err(error) => return Err(error.into()),
                            }
                        }
                        Some(Command::Back) => {
                            session.back();
                        }
                        Some(Command::Reset) => session.reset(),
                        Some(Command::Quit) => return Ok(session),
                        None => writeln!(output, "Unrecognised command '{line}'.")?,
                    },
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Back,
    Reset,
    Quit,
    Submit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "back" => Some(Self::Back),
            "reset" => Some(Self::Reset),
            "quit" | "exit" => Some(Self::Quit),
            "submit" => Some(Self::Submit),
            _ => None,
        }
    }
}

enum Prompt {
    Done,
    Command(Command),
    Eof,
}

fn ask_step<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    step: usize,
    input: &mut R,
    output: &mut W,
) -> Result<Prompt> {
    let definition = Arc::clone(session.definition());

    for question in definition.questions_in_step(step) {
        loop {
            let current = session.form().answers().get(&question.id).map(str::to_string);
            write_question(output, question, current.as_deref())?;

            let Some(line) = read_line(input, output)? else {
                return Ok(Prompt::Eof);
            };
            if let Some(command) = Command::parse(&line) {
                return Ok(Prompt::Command(command));
            }
            if line.is_empty() {
                if current.is_some() || !question.required {
                    break;
                }
                writeln!(output, "An answer is required.")?;
                continue;
            }

            match resolve_answer(question, &line) {
                Some(value) => {
                    debug!(question = %question.id, value = %value, "interactive answer");
                    session.answer(&question.id, value);
                    break;
                }
                None => writeln!(
                    output,
                    "Please choose 1 to {}.",
                    question.options().len()
                )?,
            }
        }
    }

    Ok(Prompt::Done)
}

/// Asks for name, phone and email. The outer `None` means input ended.
fn ask_contact<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<Option<ContactDetails>>> {
    let mut parts: [String; 3] = Default::default();
    for (prompt, part) in ["Your name", "Phone", "Email"].into_iter().zip(&mut parts) {
        write!(output, "{prompt}: ")?;
        output.flush()?;
        let Some(line) = read_line(input, output)? else {
            return Ok(None);
        };
        *part = line;
    }
    let [name, phone, email] = &parts;
    Ok(Some(contact_details(
        Some(name.as_str()),
        Some(phone.as_str()),
        Some(email.as_str()),
    )))
}

fn write_question<W: Write>(
    output: &mut W,
    question: &Question,
    current: Option<&str>,
) -> Result<()> {
    let marker = if question.required { "" } else { " (optional)" };
    writeln!(output, "{}{marker}", question.label)?;
    match &question.kind {
        QuestionKind::Choice(options) => {
            for (i, option) in options.iter().enumerate() {
                writeln!(output, "  {}) {}", i + 1, option.label)?;
            }
        }
        QuestionKind::Number { placeholder } => {
            writeln!(output, "  e.g. {placeholder}")?;
        }
    }
    if let Some(current) = current {
        writeln!(output, "  [current: {}]", question.label_for(current))?;
    }
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

/// A choice may be given by its 1-based number or its key. Number answers
/// are stored as typed.
fn resolve_answer(
    question: &Question,
    line: &str,
) -> Option<String> {
    let options = question.options();
    if !question.is_choice() {
        return Some(line.to_string());
    }
    if let Ok(index) = line.parse::<usize>()
        && let Some(option) = index.checked_sub(1).and_then(|i| options.get(i))
    {
        return Some(option.key.clone());
    }
    options
        .iter()
        .find(|option| option.key == line)
        .map(|option| option.key.clone())
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        info!("input closed");
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
