mod models;
mod report;
mod salary;
mod sources;

use anyhow::{Context, Result};
use models::LanguageStats;
use sources::{HeadHunterClient, SuperJobClient, VacancySource};
use std::env;
use tracing::{info, Level};

/// Languages every report compares, in table order
const LANGUAGES: [&str; 8] = [
    "Python", "Java", "Javascript", "Ruby", "PHP", "C++", "C#", "Go",
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("💼 Salary Scout - programming language salary comparison");
    info!("========================================================");

    let superjob_key = env::var("SUPERJOB_API_KEY").context("SUPERJOB_API_KEY is not set")?;

    let vacancy_sources: Vec<Box<dyn VacancySource>> = vec![
        Box::new(HeadHunterClient::new()?),
        Box::new(SuperJobClient::new(superjob_key)?),
    ];

    for source in &vacancy_sources {
        info!("Collecting {} statistics for Moscow...", source.source_name());

        let mut statistics = Vec::new();
        for language in LANGUAGES {
            let batch = source.fetch_language(language).await.with_context(|| {
                format!(
                    "Failed to fetch {} vacancies from {}",
                    language,
                    source.source_name()
                )
            })?;

            let (average_salary, processed_vacancies) =
                salary::aggregate(&batch.records, source.currency_filter());

            statistics.push((
                language.to_string(),
                LanguageStats {
                    found_vacancies: batch.found,
                    processed_vacancies,
                    average_salary,
                },
            ));
        }

        let title = format!("{} Moscow", source.source_name());
        println!("{}", report::render_table(&title, &statistics));
    }

    Ok(())
}
