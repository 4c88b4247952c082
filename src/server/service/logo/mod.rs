//! Logo and image listing for consent page settings.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::file::FileRepository,
    error::{validation::ValidationError, Error},
    model::{auth::Identity, logo::ImageView},
    util::cancel::CancelSignal,
};

/// File type code of images usable as logos and backgrounds.
pub const IMAGE_FILE_TYPE: &str = "IMAGE";

/// Maps a stored file name to a retrievable URL.
pub trait BlobUrlResolver {
    fn resolve(&self, file_name: &str) -> String;
}

/// Resolves blobs under a base URL and container, `<base>/<container>/<file>`.
#[derive(Clone, Debug)]
pub struct StorageBlobUrlResolver {
    base_url: String,
    container: String,
}

impl StorageBlobUrlResolver {
    pub fn new(base_url: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            container: container.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.blob_base_url, &config.blob_container)
    }
}

impl BlobUrlResolver for StorageBlobUrlResolver {
    fn resolve(&self, file_name: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let file_name = file_name.trim_start_matches('/');
        let container = self.container.trim_matches('/');

        if container.is_empty() {
            format!("{}/{}", base, file_name)
        } else {
            format!("{}/{}/{}", base, container, file_name)
        }
    }
}

/// Service listing uploaded images of a company.
pub struct LogoService<'a, R: BlobUrlResolver> {
    db: &'a DatabaseConnection,
    resolver: &'a R,
}

impl<'a, R: BlobUrlResolver> LogoService<'a, R> {
    /// Creates a new instance of LogoService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `resolver` - Maps stored file names to URLs
    pub fn new(db: &'a DatabaseConnection, resolver: &'a R) -> Self {
        Self { db, resolver }
    }

    /// Gets the most recently updated images of the caller's company.
    ///
    /// # Arguments
    /// - `identity` - Caller
    /// - `count` - Maximum number of images
    /// - `cancel` - Checked before the store call
    ///
    /// # Returns
    /// - `Ok(Vec<ImageView>)` - Up to `count` images, newest first; empty without a store call
    ///   when `count` is 0
    /// - `Err(Error::AuthError)` - No identity attached
    /// - `Err(Error::ValidationError)` - `count` is negative
    /// - `Err(Error::Cancelled)` - Signal fired before the store call
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_logos(
        &self,
        identity: Option<Identity>,
        count: i64,
        cancel: &CancelSignal,
    ) -> Result<Vec<ImageView>, Error> {
        let identity = Identity::require(identity)?;

        if count < 0 {
            return Err(ValidationError::new("count", "must be greater than or equal to 0").into());
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        cancel.ensure_active("load logos")?;
        let files = FileRepository::new(self.db)
            .get_latest_by_type(identity.company_id, IMAGE_FILE_TYPE, count as u64)
            .await?;

        tracing::debug!(
            "Loaded {} of up to {} logos for company {}",
            files.len(),
            count,
            identity.company_id
        );

        Ok(files
            .into_iter()
            .map(|file| ImageView {
                id: file.id,
                url: self.resolver.resolve(&file.full_file_name),
                file_name: file.full_file_name,
                original_file_name: file.original_file_name,
            })
            .collect())
    }
}
