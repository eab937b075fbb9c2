//! Authoritative collection of short links.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::entities::{LinkCollection, ShortLink};
use crate::domain::errors::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved, validate_custom_code};

/// Policy knobs for the link store.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    base_url: String,
    pub code_length: usize,
    pub max_generation_attempts: usize,
    /// When true, a code held only by an expired link can be claimed again;
    /// the expired link is evicted.
    pub reuse_expired_codes: bool,
}

impl StoreSettings {
    /// Creates settings with default code policy for the given public base URL.
    ///
    /// A trailing `/` is appended to `base_url` when missing.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            base_url,
            code_length: 7,
            max_generation_attempts: 10,
            reuse_expired_codes: false,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::new("http://localhost:3000/")
    }
}

/// Owns every [`ShortLink`] and keeps the repository in sync with it.
///
/// # Lifecycle
///
/// 1. [`LinkStore::open`] reads the full collection from the repository
/// 2. Every mutation writes the full collection back before returning
/// 3. [`LinkStore::close`] flushes once more on shutdown
///
/// All access goes through one async mutex, so a uniqueness check and the
/// insert that depends on it can never interleave with another create.
pub struct LinkStore {
    repository: Arc<dyn LinkRepository>,
    settings: StoreSettings,
    collection: Mutex<LinkCollection>,
}

impl LinkStore {
    /// Loads the link collection from `repository`.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the collection cannot be read.
    pub async fn open(
        repository: Arc<dyn LinkRepository>,
        settings: StoreSettings,
    ) -> Result<Self, AppError> {
        let mut collection = repository.load_all().await?;
        collection.normalize();
        info!(
            storage = %repository.describe(),
            links = collection.len(),
            next_id = collection.next_id,
            "Link store opened"
        );

        Ok(Self {
            repository,
            settings,
            collection: Mutex::new(collection),
        })
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Where the repository keeps the links, for logs and health output.
    pub fn describe_storage(&self) -> String {
        self.repository.describe()
    }

    /// Creates a short link for an already validated URL.
    ///
    /// # Arguments
    ///
    /// - `original_url` - destination, validated by the caller
    /// - `validity_days` - days until expiry; `None` never expires
    /// - `custom_shortcode` - requested code; `None` or `""` generates one
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidCode`] / [`LinkError::Reserved`] for a bad custom code
    /// - [`LinkError::InvalidValidity`] for a zero or out-of-range period
    /// - [`LinkError::CodeTaken`] if the custom code is already stored
    /// - [`LinkError::GenerationExhausted`] if no free code was found
    /// - [`LinkError::Storage`] if the collection could not be persisted
    pub async fn add_link(
        &self,
        original_url: String,
        validity_days: Option<u32>,
        custom_shortcode: Option<String>,
    ) -> Result<ShortLink, LinkError> {
        self.add_link_at(original_url, validity_days, custom_shortcode, Utc::now())
            .await
    }

    /// Same as [`Self::add_link`] with an explicit creation instant.
    pub async fn add_link_at(
        &self,
        original_url: String,
        validity_days: Option<u32>,
        custom_shortcode: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<ShortLink, LinkError> {
        let custom_shortcode = custom_shortcode.filter(|code| !code.is_empty());
        if let Some(code) = &custom_shortcode {
            validate_custom_code(code)?;
        }

        let expires_at = validity_days
            .map(|days| expiry_after(now, days))
            .transpose()?;

        let mut collection = self.collection.lock().await;
        let id = collection.next_id;

        let mut evicted = None;
        let short_code = match custom_shortcode {
            Some(code) => {
                let links = &mut collection.links;
                if let Some(pos) = links.iter().position(|l| l.short_code == code) {
                    if !(self.settings.reuse_expired_codes && links[pos].is_expired_at(now)) {
                        return Err(LinkError::CodeTaken { code });
                    }
                    evicted = Some((pos, links.remove(pos)));
                }
                code
            }
            None => self.generate_unique_code(&collection.links)?,
        };

        let link = ShortLink {
            id,
            original_url,
            short_url: self.settings.short_url(&short_code),
            short_code,
            created_at: now,
            expires_at,
        };
        collection.links.push(link.clone());
        collection.next_id = id + 1;

        if let Err(e) = self.repository.save_all(&collection).await {
            collection.links.pop();
            collection.next_id = id;
            if let Some((pos, old)) = evicted {
                collection.links.insert(pos, old);
            }
            warn!(code = %link.short_code, error = %e, "Failed to persist new link");
            return Err(LinkError::Storage(e));
        }

        if let Some((_, old)) = evicted {
            info!(code = %old.short_code, "Evicted expired link to reuse its code");
        }
        info!(
            id = link.id,
            code = %link.short_code,
            expires_at = ?link.expires_at,
            "Created short link"
        );

        Ok(link)
    }

    /// Looks up an active link by code.
    ///
    /// Expired links are reported as not found even though they stay stored.
    pub async fn get_link(&self, short_code: &str) -> Option<ShortLink> {
        self.get_link_at(short_code, Utc::now()).await
    }

    /// Same as [`Self::get_link`] evaluated at `now`.
    pub async fn get_link_at(&self, short_code: &str, now: DateTime<Utc>) -> Option<ShortLink> {
        self.collection
            .lock()
            .await
            .links
            .iter()
            .find(|l| l.short_code == short_code)
            .filter(|l| l.is_active_at(now))
            .cloned()
    }

    /// Returns every stored link, expired ones included, newest first.
    pub async fn list_links(&self) -> Vec<ShortLink> {
        let mut links = self.collection.lock().await.links.clone();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        links
    }

    /// Number of stored links, expired ones included.
    pub async fn len(&self) -> usize {
        self.collection.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes expired links and persists the result.
    ///
    /// Returns how many links were removed.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the collection could not be written;
    /// the in-memory collection is left untouched in that case.
    pub async fn purge_expired(&self) -> Result<usize, AppError> {
        self.purge_expired_at(Utc::now()).await
    }

    /// Same as [`Self::purge_expired`] evaluated at `now`.
    pub async fn purge_expired_at(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let mut collection = self.collection.lock().await;
        let remaining = LinkCollection {
            next_id: collection.next_id,
            links: collection
                .links
                .iter()
                .filter(|l| l.is_active_at(now))
                .cloned()
                .collect(),
        };
        let removed = collection.len() - remaining.len();

        if removed > 0 {
            self.repository.save_all(&remaining).await?;
            *collection = remaining;
            info!(removed, "Purged expired links");
        }

        Ok(removed)
    }

    /// Writes the current collection to the repository.
    pub async fn flush(&self) -> Result<(), AppError> {
        let collection = self.collection.lock().await;
        self.repository.save_all(&collection).await
    }

    /// Flushes the collection at the end of the store's lifetime.
    pub async fn close(&self) -> Result<(), AppError> {
        self.flush().await?;
        info!(storage = %self.repository.describe(), "Link store closed");
        Ok(())
    }

    fn generate_unique_code(&self, links: &[ShortLink]) -> Result<String, LinkError> {
        let attempts = self.settings.max_generation_attempts;

        for _ in 0..attempts {
            let code = generate_code(self.settings.code_length);

            if !is_reserved(&code) && !links.iter().any(|l| l.short_code == code) {
                return Ok(code);
            }
        }

        warn!(attempts, "Short code generation exhausted");
        Err(LinkError::GenerationExhausted { attempts })
    }
}

/// `now + days`, or [`LinkError::InvalidValidity`] for zero or calendar overflow.
fn expiry_after(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>, LinkError> {
    if days == 0 {
        return Err(LinkError::InvalidValidity { days });
    }

    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or(LinkError::InvalidValidity { days })
}
