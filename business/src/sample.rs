//! In-memory sample datasets standing in for the backend.
//!
//! Generation is deterministic (small LCG, fixed seed) so tests can
//! assert exact rows; the shapes mirror what the real API would return
//! for the users, games, and categories screens.

use chrono::NaiveDate;

use crate::{
    CellValue, Gender, PageProvider, PageQuery, PageResult, Record, TableError, total_pages_for,
};

const EMAIL_DOMAINS: [&str; 4] = ["example.com", "testmail.com", "mail.com", "domain.org"];

const DEVELOPERS: [&str; 6] = [
    "Pixel Forge",
    "Night Owl Games",
    "Blue Lantern",
    "Quartz Interactive",
    "Softstorm",
    "Tiny Anvil",
];

const CATEGORY_NAMES: [&str; 24] = [
    "Action", "Adventure", "Arcade", "Board", "Card", "Casual", "Driving", "Educational",
    "Fighting", "Horror", "Idle", "Multiplayer", "Music", "Platformer", "Puzzle", "Racing",
    "Retro", "Shooter", "Simulation", "Sports", "Stealth", "Strategy", "Trivia", "Word",
];

/// Deterministic pseudo-random stream (numerical recipes LCG). Enough to
/// scatter dates and genders; not a statistics-grade generator.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn pick(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound.max(1)
    }
}

fn date_between(rng: &mut Lcg, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(1) as u32;
    start + chrono::Duration::days(i64::from(rng.pick(span)))
}

/// Generate `count` user records shaped like the users screen expects:
/// ID, Username, Email, Birthday, Gender (code), UpdatedAt.
pub fn sample_users(count: usize) -> Vec<Record> {
    let mut rng = Lcg::new(0x67616d65);
    let start = NaiveDate::from_ymd_opt(2002, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2006, 1, 1).unwrap_or_default();
    let updated = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap_or_default();

    (1..=count)
        .map(|i| {
            let username = format!("User{i}");
            let domain = EMAIL_DOMAINS[rng.pick(EMAIL_DOMAINS.len() as u32) as usize];
            let email = format!("{}@{domain}", username.to_lowercase());
            let gender = Gender::ALL[rng.pick(Gender::ALL.len() as u32) as usize];
            let birthday = date_between(&mut rng, start, end);
            Record::new()
                .with("ID", i as i64)
                .with("Username", username.as_str())
                .with("Email", email.as_str())
                .with("Birthday", birthday.format("%Y-%m-%d").to_string().as_str())
                .with("Gender", gender.code())
                .with("UpdatedAt", updated.format("%Y-%m-%d").to_string().as_str())
        })
        .collect()
}

/// Generate `count` game records: ID, GameTitle, GameURL, Developer,
/// ThumbnailURL, ReleaseDate, UpdatedAt.
pub fn sample_games(count: usize) -> Vec<Record> {
    let mut rng = Lcg::new(0x706c6179);
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default();

    (1..=count)
        .map(|i| {
            let title = format!("Game {i}");
            let slug = format!("game-{i}");
            let developer = DEVELOPERS[rng.pick(DEVELOPERS.len() as u32) as usize];
            let released = date_between(&mut rng, start, end);
            Record::new()
                .with("ID", i as i64)
                .with("GameTitle", title.as_str())
                .with("GameURL", format!("https://play.gamedesk.dev/{slug}").as_str())
                .with("Developer", developer)
                .with(
                    "ThumbnailURL",
                    format!("https://cdn.gamedesk.dev/thumbs/{slug}.png").as_str(),
                )
                .with("ReleaseDate", released.format("%Y-%m-%d").to_string().as_str())
                .with("UpdatedAt", "2026-08-01")
        })
        .collect()
}

/// Generate category records: ID, CategoryName, Icon, Description,
/// UpdatedAt. Capped at the fixed name list.
pub fn sample_categories() -> Vec<Record> {
    CATEGORY_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let slug = name.to_lowercase();
            Record::new()
                .with("ID", (index + 1) as i64)
                .with("CategoryName", *name)
                .with(
                    "Icon",
                    format!("https://cdn.gamedesk.dev/icons/{slug}.png").as_str(),
                )
                .with("Description", format!("{name} games").as_str())
                .with("UpdatedAt", "2026-08-01")
        })
        .collect()
}

/// A [`PageProvider`] over an owned record set.
///
/// Search filters case-insensitively across every text field of a record,
/// then the filtered set is sliced; `total_pages` reflects the filtered
/// count, never dropping below 1.
pub struct SampleProvider {
    records: Vec<Record>,
}

impl SampleProvider {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn users(count: usize) -> Self {
        Self::new(sample_users(count))
    }

    pub fn games(count: usize) -> Self {
        Self::new(sample_games(count))
    }

    pub fn categories() -> Self {
        Self::new(sample_categories())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Next free integer ID for an added record: one past the largest
    /// `ID` present. Stable under deletes, unlike a length-based counter.
    pub fn next_id(&self) -> i64 {
        self.records
            .iter()
            .filter_map(|record| match record.get("ID") {
                Some(CellValue::Integer(id)) => Some(*id),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Remove a record by the value of `field`. Returns true when a
    /// record was removed. Backs the delete action on the sample data.
    pub fn remove_by(&mut self, field: &str, value: &str) -> bool {
        let before = self.records.len();
        self.records
            .retain(|record| record.display(field) != value);
        self.records.len() != before
    }

    /// Append a record (the add dialog's save path).
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the first record whose `field` equals `value`. Returns
    /// false when no record matched.
    pub fn replace_by(&mut self, field: &str, value: &str, record: Record) -> bool {
        for slot in &mut self.records {
            if slot.display(field) == value {
                *slot = record;
                return true;
            }
        }
        false
    }

    fn matches(record: &Record, needle_lower: &str) -> bool {
        record.fields().any(|(_, value)| {
            value
                .as_str()
                .is_some_and(|text| text.to_lowercase().contains(needle_lower))
        })
    }
}

impl PageProvider for SampleProvider {
    fn fetch_page(&self, query: &PageQuery) -> Result<PageResult, TableError> {
        let per_page = query.rows_per_page.max(1);
        let needle = query.search.trim().to_lowercase();

        let filtered: Vec<&Record> = if needle.is_empty() {
            self.records.iter().collect()
        } else {
            self.records
                .iter()
                .filter(|record| Self::matches(record, &needle))
                .collect()
        };

        let total_pages = total_pages_for(filtered.len(), per_page);
        if query.page < 1 || query.page > total_pages {
            return Err(TableError::PageOutOfRange {
                requested: query.page,
                total_pages,
            });
        }

        log::debug!(
            "fetch_page page={} rows_per_page={} search={:?} -> {} match(es), {} page(s)",
            query.page,
            per_page,
            query.search,
            filtered.len(),
            total_pages
        );

        let start = ((query.page - 1) * per_page) as usize;
        let rows = filtered
            .iter()
            .skip(start)
            .take(per_page as usize)
            .map(|record| (*record).clone())
            .collect();

        Ok(PageResult { rows, total_pages })
    }
}
