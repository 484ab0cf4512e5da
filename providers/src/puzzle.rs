use crate::instructions::code_after;
use crate::session::Session;
use crate::util::http_client;
use crate::ProviderError;
use aockit_data::PuzzleData;
use chrono::Datelike;
use std::fmt;
use std::path::{Path, PathBuf};

pub const BASE_URL: &str = "https://adventofcode.com";

/// Default cache directory, relative to the working directory.
pub const DEFAULT_CACHE_ROOT: &str = "downloaded_files";

pub const FIRST_YEAR: u16 = 2015;

/// One puzzle of the series: a year and a day of December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleId {
    year: u16,
    day: u8,
}

impl PuzzleId {
    pub fn new(year: u16, day: u8) -> Result<Self, ProviderError> {
        if year < FIRST_YEAR || !(1..=25).contains(&day) {
            return Err(ProviderError::InvalidPuzzle { year, day });
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Most recent event year: this year once December starts, last year before.
    pub fn latest_year() -> u16 {
        let today = chrono::Local::now().date_naive();
        let year = if today.month() == 12 {
            today.year()
        } else {
            today.year() - 1
        };
        year as u16
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

/// Downloads puzzle input and instructions, caching both on disk.
///
/// Files live under `{cache_root}/y{year}/d{day:02}/`. A cached file is
/// returned as-is on later calls, even if it holds an error page.
#[derive(Debug, Clone)]
pub struct PuzzleClient {
    session: Session,
    base_url: String,
    cache_root: PathBuf,
    client: reqwest::Client,
}

impl PuzzleClient {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            base_url: BASE_URL.to_string(),
            cache_root: PathBuf::from(DEFAULT_CACHE_ROOT),
            client: http_client(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cache_root(mut self, cache_root: impl Into<PathBuf>) -> Self {
        self.cache_root = cache_root.into();
        self
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    pub fn puzzle_dir(&self, id: PuzzleId) -> PathBuf {
        self.cache_root
            .join(format!("y{}", id.year))
            .join(format!("d{:02}", id.day))
    }

    pub fn input_path(&self, id: PuzzleId) -> PathBuf {
        self.puzzle_dir(id).join("data.txt")
    }

    pub fn instructions_path(&self, id: PuzzleId) -> PathBuf {
        self.puzzle_dir(id).join("instructions.html")
    }

    pub fn input_url(&self, id: PuzzleId) -> String {
        format!("{}/input", self.instructions_url(id))
    }

    pub fn instructions_url(&self, id: PuzzleId) -> String {
        format!("{}/{}/day/{}", self.base_url, id.year, id.day)
    }

    /// Fetch the puzzle input unless it is cached. Returns whether a
    /// request was made.
    pub async fn download_input(
        &self,
        id: PuzzleId,
        overwrite: bool,
    ) -> Result<bool, ProviderError> {
        self.download(&self.input_url(id), &self.input_path(id), overwrite)
            .await
    }

    /// Fetch the instruction page unless it is cached. Returns whether a
    /// request was made.
    pub async fn download_instructions(
        &self,
        id: PuzzleId,
        overwrite: bool,
    ) -> Result<bool, ProviderError> {
        self.download(&self.instructions_url(id), &self.instructions_path(id), overwrite)
            .await
    }

    pub async fn input(&self, id: PuzzleId) -> Result<PuzzleData, ProviderError> {
        self.download_input(id, false).await?;
        let text = tokio::fs::read_to_string(self.input_path(id)).await?;
        Ok(PuzzleData::new(text))
    }

    pub async fn instructions(&self, id: PuzzleId) -> Result<String, ProviderError> {
        self.download_instructions(id, false).await?;
        Ok(tokio::fs::read_to_string(self.instructions_path(id)).await?)
    }

    /// The first `<code>` block after `prefix` in the instructions, typically
    /// an example input or its expected answer.
    pub async fn value_after(
        &self,
        id: PuzzleId,
        prefix: &str,
    ) -> Result<PuzzleData, ProviderError> {
        let html = self.instructions(id).await?;
        let code = code_after(&html, prefix)
            .ok_or_else(|| ProviderError::MarkerNotFound(prefix.to_string()))?;
        log::debug!("Value after {:?}: {:?}", prefix, code);
        Ok(PuzzleData::new(code))
    }

    async fn download(
        &self,
        url: &str,
        path: &Path,
        overwrite: bool,
    ) -> Result<bool, ProviderError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        if !overwrite && tokio::fs::try_exists(path).await? {
            log::debug!("Using cached {}", path.display());
            return Ok(false);
        }

        log::info!("Now downloading {}", path.display());
        let res = self
            .client
            .get(url)
            .header(reqwest::header::COOKIE, self.session.cookie())
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;
        if !status.is_success() {
            log::warn!(
                "Download of {} returned {}: {}",
                url,
                status,
                String::from_utf8_lossy(&body)
            );
        }

        tokio::fs::write(path, &body).await?;
        Ok(true)
    }
}
