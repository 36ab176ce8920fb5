use crate::models::RawSalary;
use crate::sources::traits::VacancySource;
use crate::sources::types::SourceBatch;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const API_URL: &str = "https://api.hh.ru/vacancies";
/// Moscow in the HeadHunter area tree
const AREA_MOSCOW: u32 = 1;
const PER_PAGE: u32 = 100;
const PERIOD_DAYS: u32 = 30;
/// Fixed pause between page requests, the API throttles busier clients
const PAGE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    items: Vec<Vacancy>,
    found: u64,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    #[serde(default)]
    from: Option<u32>,
    #[serde(default)]
    to: Option<u32>,
    #[serde(default)]
    currency: Option<String>,
}

/// HeadHunter API client
pub struct HeadHunterClient {
    client: Client,
}

impl HeadHunterClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacanciesPage> {
        let params = [
            ("text", format!("NAME:Программист {language}")),
            ("area", AREA_MOSCOW.to_string()),
            ("page", page.to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("period", PERIOD_DAYS.to_string()),
        ];

        let response = self
            .client
            .get(API_URL)
            .query(&params)
            .send()
            .await
            .context("Failed to reach HeadHunter")?;

        response
            .error_for_status()
            .context("HeadHunter rejected the request")?
            .json()
            .await
            .context("Failed to decode HeadHunter response")
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    async fn fetch_language(&self, language: &str) -> Result<SourceBatch> {
        let mut batch = SourceBatch::default();

        for page in 0u32.. {
            debug!("Fetching HeadHunter page {} for {}", page, language);
            let response = self.fetch_page(language, page).await?;

            batch.found = response.found;
            batch
                .records
                .extend(response.items.into_iter().filter_map(normalize));

            // The last page index the API will serve is pages - 1
            if page + 1 >= response.pages {
                break;
            }
            tokio::time::sleep(PAGE_DELAY).await;
        }

        info!(
            "HeadHunter: {} found for {}, {} with salary data",
            batch.found,
            language,
            batch.records.len()
        );
        Ok(batch)
    }

    fn source_name(&self) -> &'static str {
        "HeadHunter"
    }

    fn currency_filter(&self) -> &'static str {
        "RUR"
    }
}

/// A vacancy without a salary block has nothing to aggregate
fn normalize(vacancy: Vacancy) -> Option<RawSalary> {
    let salary = vacancy.salary?;
    Some(RawSalary {
        from: salary.from,
        to: salary.to,
        currency: salary.currency.unwrap_or_default(),
    })
}
