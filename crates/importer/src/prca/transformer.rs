use std::collections::HashMap;

use chrono::NaiveTime;

use storage::{
    Database,
    dto::rodeo::CreateRodeoRequest,
    error::StorageError,
    models::{NewContestant, NewEvent, NewEventResult},
    repository::{
        contestant::ContestantRepository, event::EventRepository, result::ResultRepository,
        rodeo::RodeoRepository,
    },
};
use tracing::info;

use super::category::Category;
use super::models::{CategoryResults, ResultEntry, RodeoResultsRecord};
use super::patterns::{parse_date_range, parse_round, parse_score};
use super::validator::RecordValidator;
use crate::{ImporterError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Also import rodeos whose status is not "Completed"
    pub include_incomplete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(ImportSummary),
    AlreadyImported { rodeo_id: i64 },
    SkippedIncomplete { status: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub rodeo_id: i64,
    pub events: usize,
    pub contestants_created: usize,
    pub results: usize,
    pub skipped_results: usize,
}

/// Writes validated PRCA records through the storage repositories
pub struct RecordImporter<'a> {
    db: &'a Database,
    options: ImportOptions,
}

impl<'a> RecordImporter<'a> {
    pub fn new(db: &'a Database, options: ImportOptions) -> Self {
        Self { db, options }
    }

    pub async fn import(&self, record: &RodeoResultsRecord) -> Result<ImportOutcome> {
        let report = RecordValidator::validate(record)?;
        report.log_warnings();

        if !record.is_completed() && !self.options.include_incomplete {
            info!("Skipping '{}' ({})", record.name, record.status);
            return Ok(ImportOutcome::SkippedIncomplete {
                status: record.status.clone(),
            });
        }

        let rodeos = RodeoRepository::new(self.db.pool());
        if let Some(existing) = rodeos.find_by_name(&record.name).await? {
            info!("Rodeo '{}' already imported as #{}", record.name, existing.id);
            return Ok(ImportOutcome::AlreadyImported {
                rodeo_id: existing.id,
            });
        }

        let (start, end) = parse_date_range(&record.date).ok_or_else(|| {
            ImporterError::TransformationError(format!("Unrecognised date range: {}", record.date))
        })?;
        let request = CreateRodeoRequest {
            name: record.name.trim().to_string(),
            location: record.location.trim().to_string(),
            start_date: start.and_time(NaiveTime::MIN),
            end_date: end.and_time(NaiveTime::MIN),
        };

        let rodeo = match rodeos.create(&request).await {
            Ok(rodeo) => rodeo,
            Err(StorageError::ConstraintViolation(_)) => {
                // Lost a race with a concurrent import of the same rodeo
                let existing = rodeos.find_by_name(&request.name).await?.ok_or_else(|| {
                    ImporterError::TransformationError(format!(
                        "Rodeo '{}' conflicted but was not found",
                        request.name
                    ))
                })?;
                return Ok(ImportOutcome::AlreadyImported {
                    rodeo_id: existing.id,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut summary = ImportSummary {
            rodeo_id: rodeo.id,
            ..ImportSummary::default()
        };
        let mut contestants = ContestantCache::default();

        for category_results in &record.categories {
            let category: Category = category_results
                .name
                .parse()
                .map_err(ImporterError::TransformationError)?;
            if !category.is_scored() {
                continue;
            }

            self.import_category(
                rodeo.id,
                category,
                category_results,
                &mut contestants,
                &mut summary,
            )
            .await?;
        }

        info!(
            "Imported '{}': {} events, {} results ({} skipped), {} new contestants",
            rodeo.name,
            summary.events,
            summary.results,
            summary.skipped_results,
            summary.contestants_created
        );

        Ok(ImportOutcome::Imported(summary))
    }

    async fn import_category(
        &self,
        rodeo_id: i64,
        category: Category,
        category_results: &CategoryResults,
        contestants: &mut ContestantCache,
        summary: &mut ImportSummary,
    ) -> Result<()> {
        let events = EventRepository::new(self.db.pool());
        let results = ResultRepository::new(self.db.pool());

        for (round_number, entries) in group_by_round(&category_results.results) {
            let event = events
                .create(&NewEvent {
                    event_type: category.label().to_string(),
                    round_number,
                    rodeo_id,
                })
                .await?;
            summary.events += 1;

            for entry in entries {
                let Some(score) =
                    parse_score(&entry.score, category).map_err(ImporterError::TransformationError)?
                else {
                    summary.skipped_results += 1;
                    continue;
                };

                let contestant_id = self.resolve_contestant(entry, contestants, summary).await?;
                results
                    .create(&NewEventResult {
                        event_id: event.id,
                        contestant_id,
                        score,
                        timestamp: None,
                    })
                    .await?;
                summary.results += 1;
            }
        }

        Ok(())
    }

    /// Match by membership id when present, otherwise by name among
    /// contestants without one; create the contestant when nothing matches.
    async fn resolve_contestant(
        &self,
        entry: &ResultEntry,
        cache: &mut ContestantCache,
        summary: &mut ImportSummary,
    ) -> Result<i64> {
        let key = ContestantKey::of(entry);
        if let Some(id) = cache.ids.get(&key) {
            return Ok(*id);
        }

        let repo = ContestantRepository::new(self.db.pool());
        let existing = match &key {
            ContestantKey::Membership(membership_id) => {
                repo.find_by_membership_id(membership_id).await?
            }
            ContestantKey::Name(_, _) => {
                repo.find_unaffiliated_by_name(entry.first_name.trim(), entry.last_name.trim())
                    .await?
            }
        };

        let id = match existing {
            Some(contestant) => contestant.id,
            None => {
                let contestant = repo
                    .create(&NewContestant {
                        first_name: entry.first_name.trim().to_string(),
                        last_name: entry.last_name.trim().to_string(),
                        membership_id: match &key {
                            ContestantKey::Membership(m) => Some(m.clone()),
                            ContestantKey::Name(_, _) => None,
                        },
                    })
                    .await?;
                summary.contestants_created += 1;
                contestant.id
            }
        };

        cache.ids.insert(key, id);
        Ok(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ContestantKey {
    Membership(String),
    Name(String, String),
}

impl ContestantKey {
    fn of(entry: &ResultEntry) -> Self {
        match entry.membership_id.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => ContestantKey::Membership(m.to_string()),
            _ => ContestantKey::Name(
                entry.first_name.trim().to_lowercase(),
                entry.last_name.trim().to_lowercase(),
            ),
        }
    }
}

#[derive(Default)]
struct ContestantCache {
    ids: HashMap<ContestantKey, i64>,
}

/// Group entries by round number, keeping the order rounds first appear in
fn group_by_round(entries: &[ResultEntry]) -> Vec<(Option<i64>, Vec<&ResultEntry>)> {
    let mut groups: Vec<(Option<i64>, Vec<&ResultEntry>)> = Vec::new();

    for entry in entries {
        let round = entry.round.as_deref().and_then(parse_round);
        match groups.iter_mut().find(|(r, _)| *r == round) {
            Some((_, group)) => group.push(entry),
            None => groups.push((round, vec![entry])),
        }
    }

    groups
}
