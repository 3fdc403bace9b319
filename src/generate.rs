/// Fixture generation.
///
/// Builds the `software` and `software_urls` row sets in one pass: one
/// software row per index, two URL rows per software row, with a running
/// clock that starts at midnight UTC of the configured date and advances
/// by a fixed number of calendar days per index.
use anyhow::{Context, Result};
use jiff::Span;
use jiff::civil::{Date, date};
use uuid::Uuid;

use crate::model::{Software, SoftwareUrl};

/// Every software row owns one URL per suffix, in this order.
const URL_SUFFIXES: [&str; 2] = ["a", "b"];

/// Generation knobs. `Default` matches the seed set the API test suite
/// loads: 30 rows starting 2014-05-01, spaced 15 days apart.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of software rows (URL rows are twice this).
    pub count: u32,
    /// `created_at` date of the first software row.
    pub start: Date,
    /// Calendar days between consecutive software rows.
    pub step_days: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 30,
            start: date(2014, 5, 1),
            step_days: 15,
        }
    }
}

/// Generated rows in insertion order, one vec per output file.
#[derive(Debug)]
pub struct FixtureSet {
    pub software: Vec<Software>,
    pub software_urls: Vec<SoftwareUrl>,
}

/// Generate the full fixture set for `config`.
///
/// Ids are fresh UUIDv4s on every call; everything else (URLs, timestamps,
/// ordering) is a pure function of the config.
pub fn generate(config: &GeneratorConfig) -> Result<FixtureSet> {
    let step = Span::new()
        .try_days(config.step_days)
        .with_context(|| format!("invalid step of {} days", config.step_days))?;

    let mut software = Vec::with_capacity(config.count as usize);
    let mut software_urls = Vec::with_capacity(config.count as usize * URL_SUFFIXES.len());

    let mut day = config.start;
    for i in 1..=config.count {
        let stamp = timestamp(day);

        let row = Software {
            id: Uuid::new_v4(),
            publiccode_yml: "-".to_string(),
            created_at: stamp.clone(),
            updated_at: stamp.clone(),
        };

        for suffix in URL_SUFFIXES {
            software_urls.push(SoftwareUrl {
                id: Uuid::new_v4(),
                software_id: row.id,
                url: format!("https://{i}-{suffix}.example.org/code/repo"),
                created_at: stamp.clone(),
                updated_at: stamp.clone(),
            });
        }

        software.push(row);

        day = day.checked_add(step).with_context(|| {
            format!(
                "date overflow advancing {} days past {day}",
                config.step_days
            )
        })?;
    }

    Ok(FixtureSet {
        software,
        software_urls,
    })
}

/// Midnight UTC on `day`, as an RFC 3339 string.
fn timestamp(day: Date) -> String {
    day.at(0, 0, 0, 0).strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}
