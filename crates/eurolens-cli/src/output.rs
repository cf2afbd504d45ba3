//! Terminal rendering of analysis results and history.

use eurolens_core::AnalysisResult;
use eurolens_store::AnalysisHistoryItem;

pub fn print_result(result: &AnalysisResult) {
    let style = result.classification.style();
    println!("{}", style.title);
    println!("  {}", style.description);
    if let Some(name) = &result.identified_product_name {
        println!("  product:      {name}");
    }
    if let Some(company) = &result.identified_company {
        println!("  company:      {company}");
    }
    if let Some(hq) = &result.identified_headquarters {
        println!("  headquarters: {hq}");
    }
    if let Some(country) = &result.raw_country {
        println!("  country:      {country}");
    }
    if let Some(rationale) = &result.identification_rationale {
        println!("  rationale:    {rationale}");
    }

    let alternatives = result.presentable_alternatives();
    if !alternatives.is_empty() {
        println!("  European alternatives:");
        for alternative in alternatives {
            let country = alternative.country.as_deref().unwrap_or("?");
            println!(
                "    - {} ({}, {country}): {}",
                alternative.product_name, alternative.company, alternative.description
            );
        }
    }
    if let Some(id) = result.id {
        println!("  analysis id:  {id} (use `feedback {id}` to rate this result)");
    }
}

pub fn print_history_item(item: &AnalysisHistoryItem) {
    let company = item
        .response
        .identified_company
        .as_deref()
        .unwrap_or("(unidentified)");
    println!(
        "{}  {}  {}  {}",
        item.timestamp.format("%Y-%m-%d %H:%M"),
        item.response.classification.style().title,
        company,
        item.id
    );
}
