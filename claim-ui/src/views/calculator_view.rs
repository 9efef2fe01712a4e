use askama::Template;
use claim_core::{
    CalculatorDefinition, EstimateRange, FormController, FormStep, Question, QuestionKind,
};

use crate::config::SiteConfig;
use crate::currency::{format_range, format_usd};

#[derive(Template)]
#[template(path = "step.html")]
struct StepPage<'a> {
    slug: &'a str,
    title: &'a str,
    route: &'a str,
    step: usize,
    total: usize,
    step_title: &'a str,
    fields: Vec<QuestionField<'a>>,
    next_label: &'a str,
    next_enabled: bool,
}

/// One question as the step template draws it. Number questions leave
/// `options` empty.
struct QuestionField<'a> {
    id: &'a str,
    label: &'a str,
    required: bool,
    is_choice: bool,
    options: Vec<ChoiceOption<'a>>,
    unanswered: bool,
    placeholder: &'a str,
    value: &'a str,
}

struct ChoiceOption<'a> {
    key: &'a str,
    label: &'a str,
    selected: bool,
}

impl<'a> QuestionField<'a> {
    fn new(
        question: &'a Question,
        answer: &'a str,
    ) -> Self {
        let placeholder = match &question.kind {
            QuestionKind::Number { placeholder } => placeholder.as_str(),
            QuestionKind::Choice(_) => "",
        };
        Self {
            id: &question.id,
            label: &question.label,
            required: question.required,
            is_choice: question.is_choice(),
            options: question
                .options()
                .iter()
                .map(|option| ChoiceOption {
                    key: &option.key,
                    label: &option.label,
                    selected: option.key == answer,
                })
                .collect(),
            unanswered: answer.is_empty(),
            placeholder,
            value: answer,
        }
    }
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsPage<'a> {
    slug: &'a str,
    title: &'a str,
    route: &'a str,
    range: String,
    breakdown: Vec<BreakdownRow>,
    total_economic: String,
    disclaimer: &'a str,
    tel_href: String,
    phone_display: &'a str,
    evaluation_route: &'a str,
}

struct BreakdownRow {
    label: &'static str,
    amount: String,
}

/// Renders one calculator's form steps and results.
///
/// Rendering is pure: it reads the form and site config and returns markup.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorView<'a> {
    site: &'a SiteConfig,
}

impl<'a> CalculatorView<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// The current step of `form`, or its results.
    pub fn render(
        &self,
        form: &FormController,
    ) -> askama::Result<String> {
        match (form.step(), form.result()) {
            (FormStep::Input(step), _) => self.render_step(form, step),
            (FormStep::Results, Some(range)) => self.render_results(form.definition(), range),
            // A form only reaches results by computing one.
            (FormStep::Results, None) => self.render_step(form, form.total_steps()),
        }
    }

    /// The questions of the 1-based `step` with their current answers.
    pub fn render_step(
        &self,
        form: &FormController,
        step: usize,
    ) -> askama::Result<String> {
        let definition = form.definition();
        let total = form.total_steps();

        StepPage {
            slug: &definition.slug,
            title: &definition.title,
            route: &definition.route,
            step,
            total,
            step_title: definition
                .step(step)
                .map(|s| s.title.as_str())
                .unwrap_or_default(),
            fields: definition
                .questions_in_step(step)
                .into_iter()
                .map(|question| {
                    let answer = form.answers().get(&question.id).unwrap_or_default();
                    QuestionField::new(question, answer)
                })
                .collect(),
            next_label: if step >= total {
                "Calculate Compensation"
            } else {
                "Next"
            },
            next_enabled: form.is_step_valid(step),
        }
        .render()
    }

    /// The estimate with its breakdown, disclaimer and calls to action.
    pub fn render_results(
        &self,
        definition: &CalculatorDefinition,
        range: &EstimateRange,
    ) -> askama::Result<String> {
        ResultsPage {
            slug: &definition.slug,
            title: &definition.title,
            route: &definition.route,
            range: format_range(range),
            breakdown: range
                .breakdown
                .iter()
                .map(|line| BreakdownRow {
                    label: line.category.label(),
                    amount: format_usd(line.amount),
                })
                .collect(),
            total_economic: range.total_economic().map(format_usd).unwrap_or_default(),
            disclaimer: &definition.disclaimer,
            tel_href: self.site.tel_href(),
            phone_display: &self.site.phone_display,
            evaluation_route: &definition.evaluation_route,
        }
        .render()
    }

    /// Plain-text results for the terminal.
    pub fn render_text(
        &self,
        definition: &CalculatorDefinition,
        range: &EstimateRange,
    ) -> String {
        let mut text = format!(
            "{}\nEstimated Compensation Range: {}\n",
            definition.title,
            format_range(range)
        );

        if let Some(total) = range.total_economic() {
            for line in &range.breakdown {
                text.push_str(&format!(
                    "  {}: {}\n",
                    line.category.label(),
                    format_usd(line.amount)
                ));
            }
            text.push_str(&format!("  Total Economic: {}\n", format_usd(total)));
        }

        text.push_str(&format!(
            "\n{}\n\nCall {} at {} or request a free case evaluation at {}\n",
            definition.disclaimer,
            self.site.firm_name,
            self.site.phone_display,
            definition.evaluation_route
        ));
        text
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use claim_core::calculations::calculators::{brain_injury, pfas};
    use claim_core::{BreakdownLine, EconomicCategory};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn brain_form() -> FormController {
        FormController::new(Arc::new(brain_injury::definition()))
    }

    #[test]
    fn step_shows_progress_and_questions() {
        let site = SiteConfig::default();
        let html = CalculatorView::new(&site).render(&brain_form()).unwrap();

        assert!(html.contains("Step 1 of 2"));
        assert!(html.contains("id=\"injurySeverity\""));
        assert!(!html.contains("id=\"medicalCosts\""));
        assert!(!html.contains("value=\"back\""));
    }

    #[test]
    fn next_is_disabled_until_step_is_complete() {
        let site = SiteConfig::default();
        let view = CalculatorView::new(&site);
        let mut form = brain_form();

        assert!(view.render(&form).unwrap().contains("value=\"next\" disabled>Next"));

        form.update_field("injurySeverity", "severe");
        form.update_field("permanentDisability", "yes");
        form.update_field("painLevel", "severe");

        let html = view.render(&form).unwrap();
        assert!(html.contains("value=\"next\">Next"));
        assert!(html.contains("<option value=\"severe\" selected>"));
    }

    #[test]
    fn last_step_offers_calculate_and_previous() {
        let site = SiteConfig::default();
        let form = brain_form();

        let html = CalculatorView::new(&site).render_step(&form, 2).unwrap();

        assert!(html.contains("Step 2 of 2"));
        assert!(html.contains(">Previous</button>"));
        assert!(html.contains(">Calculate Compensation</button>"));
    }

    #[test]
    fn labels_are_escaped() {
        let site = SiteConfig::default();
        let form = FormController::new(Arc::new(pfas::definition()));

        let html = CalculatorView::new(&site).render_step(&form, 2).unwrap();

        assert!(html.contains("Lost Wages &amp; Income ($)"));
    }

    #[test]
    fn typed_answers_are_escaped_in_attributes() {
        let site = SiteConfig::default();
        let mut form = brain_form();
        form.update_field("medicalCosts", "\"><script>");

        let html = CalculatorView::new(&site).render_step(&form, 2).unwrap();

        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn results_show_range_disclaimer_and_links() {
        let site = SiteConfig::default();
        let definition = brain_injury::definition();
        let range = EstimateRange::new(dec!(2820000), dec!(6750000));

        let html = CalculatorView::new(&site).render_results(&definition, &range).unwrap();

        assert!(html.contains("<p class=\"estimate-range\">$2,820,000 - $6,750,000</p>"));
        assert!(html.contains(&format!("<p class=\"disclaimer\">{}</p>", definition.disclaimer)));
        assert!(html.contains("href=\"tel:8181234567\""));
        assert!(html.contains("href=\"/brain-case-evaluation\""));
        assert!(!html.contains("economic-breakdown"));
    }

    #[test]
    fn results_itemize_breakdown() {
        let site = SiteConfig::default();
        let range = EstimateRange {
            low: dec!(100000),
            high: dec!(400000),
            breakdown: vec![
                BreakdownLine {
                    category: EconomicCategory::MedicalExpenses,
                    amount: dec!(50000),
                },
                BreakdownLine {
                    category: EconomicCategory::LostIncome,
                    amount: dec!(25000),
                },
            ],
        };

        let html = CalculatorView::new(&site).render_results(&pfas::definition(), &range).unwrap();

        assert!(html.contains("<li><span>Medical Expenses</span> <span>$50,000</span></li>"));
        assert!(html.contains("Total Economic: $75,000"));
    }

    #[test]
    fn text_results_name_the_firm() {
        let site = SiteConfig::default();
        let range = EstimateRange::new(dec!(59000), dec!(172000));

        let text = CalculatorView::new(&site).render_text(&brain_injury::definition(), &range);

        let first_lines: Vec<_> = text.lines().take(2).collect();
        assert_eq!(
            first_lines,
            vec![
                "Brain Injury Compensation Calculator",
                "Estimated Compensation Range: $59,000 - $172,000",
            ]
        );
        assert!(text.contains("Call Trembach Law at (818) 123-4567"));
    }
}
