//! End-to-end rendering of built-in calculators through the session layer.

use std::path::Path;
use std::sync::Arc;

use claim_core::{Catalog, FormStep};
use claim_ui::app::{advance_session, parse_answers};
use claim_ui::currency::format_range;
use claim_ui::{CalculatorSession, CalculatorView, SiteConfig};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn answers(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn fixture_config() -> SiteConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("site.toml");
    SiteConfig::load(&path).expect("fixture config should load")
}

#[test]
fn every_calculator_renders_its_first_step() {
    let catalog = Catalog::builtin().unwrap();
    let site = SiteConfig::default();
    let view = CalculatorView::new(&site);

    for definition in catalog.iter() {
        let session = CalculatorSession::new(Arc::clone(definition));

        let html = view.render(session.form()).unwrap();

        let progress = format!("Step 1 of {}", definition.step_count());
        assert!(html.contains(&progress), "{}: no progress line", definition.slug);
        for question in definition.questions_in_step(1) {
            assert!(
                html.contains(&format!("name=\"{}\"", question.id)),
                "{}: question {} not rendered",
                definition.slug,
                question.id
            );
        }
    }
}

#[test]
fn bus_floor_case_renders_results() {
    let catalog = Catalog::builtin().unwrap();
    let site = SiteConfig::default();
    let answers = parse_answers(&answers(&[
        "busOperator=municipal-public",
        "passengerStatus=seated-passenger",
        "accidentType=sudden-stop",
        "injurySeverity=minor",
        "injuryType=soft-tissue",
        "medicalCosts=under-10k",
        "permanentDisability=none",
        "multipleVictims=no",
        "busDefect=no",
        "age=over-65",
    ]))
    .unwrap();

    let session = advance_session(catalog.get("bus-accident").unwrap(), &answers, None).unwrap();
    let html = CalculatorView::new(&site).render(session.form()).unwrap();

    assert_eq!(session.step(), FormStep::Results);
    assert!(html.contains("$59,000 - $172,000"));
    assert!(html.contains("href=\"/bus-accident/case-evaluation\""));
    assert!(html.contains("class=\"disclaimer\""));
}

#[test]
fn pfas_results_include_breakdown() {
    let catalog = Catalog::builtin().unwrap();
    let site = SiteConfig::default();
    let definition = catalog.by_route("/pfas-calculator").unwrap();
    let answers = parse_answers(&answers(&[
        "diagnosis=kidney-cancer",
        "severity=stage-3",
        "exposureSource=contaminated-water",
        "exposureDuration=lifetime",
        "medicalCosts=50000",
        "lostWages=25000",
        "age=60plus",
        "waterSource=both",
        "occupationalExposure=no",
    ]))
    .unwrap();

    let session = advance_session(definition, &answers, None).unwrap();
    let range = session.result().unwrap();
    let html = CalculatorView::new(&site).render(session.form()).unwrap();

    assert!(html.contains(&format_range(range)));
    assert!(html.contains("Total Economic: $75,000"));
}

#[test]
fn fixture_config_changes_call_to_action() {
    let site = fixture_config();
    let catalog = Catalog::builtin().unwrap();
    let answers = parse_answers(&answers(&[
        "deviceType=hip-implant",
        "revisionSurgeries=2",
        "medicalCosts=40000",
        "painLevel=7",
    ]))
    .unwrap();

    let session = advance_session(catalog.get("medical-devices").unwrap(), &answers, None).unwrap();
    let range = session.result().unwrap();
    let text = CalculatorView::new(&site).render_text(session.definition(), range);

    assert_eq!((range.low, range.high), (dec!(345000), dec!(1690000)));
    assert_eq!(site.leads.backend, "memory");
    assert!(text.contains("Call Example Injury Group at (555) 010-0199"));
}

#[test]
fn car_results_itemize_property_damage() {
    let catalog = Catalog::builtin().unwrap();
    let site = SiteConfig::default();
    let answers = parse_answers(&answers(&[
        "injuryType=whiplash",
        "injurySeverity=moderate",
        "accidentType=rear-end",
        "medicalCosts=10000",
        "lostWages=5000",
        "vehicleDamage=8000",
        "faultPercentage=100",
        "permanentImpact=none",
        "insurance=full-coverage",
    ]))
    .unwrap();

    let session = advance_session(catalog.get("car-accident").unwrap(), &answers, None).unwrap();
    let html = CalculatorView::new(&site).render(session.form()).unwrap();

    assert!(html.contains("$75,900 - $261,800"));
    assert!(html.contains("<li><span>Property Damage</span> <span>$8,000</span></li>"));
    assert!(html.contains("Total Economic: $23,000"));
}
