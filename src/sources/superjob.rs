use crate::models::RawSalary;
use crate::sources::traits::VacancySource;
use crate::sources::types::SourceBatch;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const API_URL: &str = "https://api.superjob.ru/2.0/vacancies";
const TOWN: &str = "Москва";
const PER_PAGE: u32 = 100;
const PERIOD_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    objects: Vec<Vacancy>,
    more: bool,
    total: u64,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    payment_from: u32,
    #[serde(default)]
    payment_to: u32,
    #[serde(default)]
    currency: String,
}

/// SuperJob API client; every request carries the app key header
pub struct SuperJobClient {
    client: Client,
    api_key: String,
}

impl SuperJobClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, api_key })
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacanciesPage> {
        let params = [
            ("town", TOWN.to_string()),
            ("page", page.to_string()),
            ("count", PER_PAGE.to_string()),
            ("period", PERIOD_DAYS.to_string()),
            ("keywords", format!("Программист {language}")),
        ];

        let response = self
            .client
            .get(API_URL)
            .header("X-Api-App-Id", self.api_key.as_str())
            .query(&params)
            .send()
            .await
            .context("Failed to reach SuperJob")?;

        response
            .error_for_status()
            .context("SuperJob rejected the request")?
            .json()
            .await
            .context("Failed to decode SuperJob response")
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    async fn fetch_language(&self, language: &str) -> Result<SourceBatch> {
        let mut batch = SourceBatch::default();
        let mut page = 0u32;

        loop {
            debug!("Fetching SuperJob page {} for {}", page, language);
            let response = self.fetch_page(language, page).await?;

            batch.found = response.total;
            batch.records.extend(response.objects.into_iter().map(normalize));

            if !response.more {
                break;
            }
            page += 1;
        }

        info!(
            "SuperJob: {} found for {}, {} with salary data",
            batch.found,
            language,
            batch.records.len()
        );
        Ok(batch)
    }

    fn source_name(&self) -> &'static str {
        "SuperJob"
    }

    fn currency_filter(&self) -> &'static str {
        "rub"
    }
}

/// SuperJob reports an absent bound as zero
fn normalize(vacancy: Vacancy) -> RawSalary {
    RawSalary {
        from: (vacancy.payment_from > 0).then_some(vacancy.payment_from),
        to: (vacancy.payment_to > 0).then_some(vacancy.payment_to),
        currency: vacancy.currency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_and_normalizes_records() {
        let json = r#"{
            "objects": [
                {"payment_from": 80000, "payment_to": 120000, "currency": "rub", "town": {"title": "Москва"}},
                {"payment_from": 0, "payment_to": 0, "currency": "rub"}
            ],
            "more": true,
            "total": 250
        }"#;

        let page: VacanciesPage = serde_json::from_str(json).unwrap();
        assert!(page.more);
        assert_eq!(page.total, 250);

        let records: Vec<_> = page.objects.into_iter().map(normalize).collect();
        assert_eq!(
            records[0],
            RawSalary {
                from: Some(80_000),
                to: Some(120_000),
                currency: "rub".to_string(),
            }
        );
        // Zero payment bounds normalize to absent
        assert_eq!(
            records[1],
            RawSalary {
                from: None,
                to: None,
                currency: "rub".to_string(),
            }
        );
    }

    #[test]
    fn record_without_payment_fields_still_parses() {
        let json = r#"{"objects": [{"currency": "rub"}], "more": false, "total": 1}"#;

        let page: VacanciesPage = serde_json::from_str(json).unwrap();
        let record = normalize(page.objects.into_iter().next().unwrap());

        assert_eq!(record.from, None);
        assert_eq!(record.to, None);
    }
}
