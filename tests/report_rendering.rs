mod common;

use common::{default_engine, render, request, TestResult};
use acreage::types::Locale;

#[test]
fn full_report_renders_to_a_loadable_pdf() -> TestResult {
    let pdf = render(
        "# Zoning Summary\n\
         \n\
         The parcel sits in a *mixed-use* corridor with **strong** demand.\n\
         \n\
         ## Permitted Uses\n\
         * Residential infill\n\
         * Neighborhood retail\n\
         \n\
         1. Confirm setbacks\n\
         2. File the site plan\n",
    )?;
    assert!(pdf.bytes.starts_with(b"%PDF"));
    assert!(pdf.page_count() >= 1);
    Ok(())
}

#[test]
fn preamble_text_is_present() -> TestResult {
    let text = render("Just one paragraph.")?.text()?;
    assert!(text.contains("Professional Land Use Report"));
    assert!(text.contains("Prepared for: Jordan Avery"));
    assert!(text.contains("Location: Sacramento County"));
    Ok(())
}

#[test]
fn default_disclaimer_is_appended_when_missing() -> TestResult {
    let text = render("# Report\n\nNo disclaimer here.")?.text()?;
    assert!(text.contains("Disclaimer: This report is for informational purposes only."));
    Ok(())
}

#[test]
fn provided_disclaimer_is_not_duplicated() -> TestResult {
    let text = render("# Report\n\nDisclaimer: Custom terms apply.")?.text()?;
    assert!(text.contains("Disclaimer: Custom terms apply."));
    assert!(!text.contains("informational purposes only"));
    Ok(())
}

#[test]
fn table_content_is_rendered() -> TestResult {
    let text = render(
        "| Metric | Value |\n\
         |--------|-------|\n\
         | Acreage | 12.5 |\n\
         | Zoning | R-2 |\n",
    )?
    .text()?;
    assert!(text.contains("Metric"));
    assert!(text.contains("Acreage"));
    assert!(text.contains("12.5"));
    Ok(())
}

#[test]
fn ragged_table_degrades_to_text_not_failure() -> TestResult {
    let text = render(
        "| A | B |\n\
         | 1 | 2 | 3 |\n",
    )?
    .text()?;
    assert!(text.contains("A | B"));
    assert!(text.contains("1 | 2 | 3"));
    Ok(())
}

#[test]
fn long_reports_paginate() -> TestResult {
    let mut markdown = String::from("# Long Report\n\n");
    for i in 0..150 {
        markdown.push_str(&format!(
            "Paragraph {i} describing parcel conditions in enough detail to fill the line.\n\n"
        ));
    }
    let pdf = render(&markdown)?;
    assert!(pdf.page_count() > 1);
    Ok(())
}

#[test]
fn hindi_request_still_renders() -> TestResult {
    // With only base-14 fonts available the Devanagari family is
    // unavailable and the registry degrades to the base family.
    let mut req = request("# रिपोर्ट\n\nयह एक परीक्षण है।");
    req.locale = Locale::Hindi;
    let bytes = default_engine().render(&req)?;
    assert!(bytes.starts_with(b"%PDF"));
    Ok(())
}
