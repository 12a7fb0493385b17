use tracing::warn;

use super::category::Category;
use super::models::RodeoResultsRecord;
use super::patterns::{parse_date_range, parse_round, parse_score};
use crate::{ImporterError, Result};

pub struct RecordValidator;

impl RecordValidator {
    pub fn validate(record: &RodeoResultsRecord) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if record.name.trim().is_empty() {
            report.errors.push("Rodeo name is required".to_string());
        }
        if record.location.trim().is_empty() {
            report
                .warnings
                .push(format!("Rodeo '{}' has no location", record.name));
        }
        if parse_date_range(&record.date).is_none() {
            report
                .errors
                .push(format!("Unrecognised date range: '{}'", record.date));
        }
        if !record.is_completed() {
            report.warnings.push(format!(
                "Rodeo '{}' has status '{}'",
                record.name, record.status
            ));
        }
        if record.categories.is_empty() {
            report
                .warnings
                .push(format!("Rodeo '{}' has no event categories", record.name));
        }

        for category_results in &record.categories {
            let category = match category_results.name.parse::<Category>() {
                Ok(category) => category,
                Err(e) => {
                    report.errors.push(e);
                    continue;
                }
            };

            if !category.is_scored() {
                if !category_results.results.is_empty() {
                    report.warnings.push(format!(
                        "{} standings are not event scores and will be skipped",
                        category
                    ));
                }
                continue;
            }

            if category_results.results.is_empty() {
                report
                    .warnings
                    .push(format!("Category '{}' has no results", category));
            }

            for (idx, entry) in category_results.results.iter().enumerate() {
                let label = format!(
                    "{} #{} ({} {})",
                    category,
                    idx + 1,
                    entry.first_name,
                    entry.last_name
                );

                if entry.first_name.trim().is_empty() || entry.last_name.trim().is_empty() {
                    report
                        .errors
                        .push(format!("{}: contestant name is incomplete", label));
                }

                match parse_score(&entry.score, category) {
                    Ok(Some(_)) => {}
                    Ok(None) => report
                        .warnings
                        .push(format!("{}: no score, result will be skipped", label)),
                    Err(e) => report.errors.push(format!("{}: {}", label, e)),
                }

                if let Some(round) = &entry.round
                    && parse_round(round).is_none()
                {
                    report.warnings.push(format!(
                        "{}: round '{}' has no number, stored without one",
                        label, round
                    ));
                }
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
