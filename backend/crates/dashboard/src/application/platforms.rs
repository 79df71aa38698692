//! Platform Use Case

use std::sync::Arc;

use kernel::id::PlatformId;

use crate::domain::entity::platform::{DEFAULT_PLATFORMS, SocialPlatform};
use crate::domain::repository::PlatformRepository;
use crate::error::{DashboardError, DashboardResult};

pub struct PlatformUseCase<F>
where
    F: PlatformRepository,
{
    platform_repo: Arc<F>,
}

impl<F> PlatformUseCase<F>
where
    F: PlatformRepository,
{
    pub fn new(platform_repo: Arc<F>) -> Self {
        Self { platform_repo }
    }

    /// All platforms ordered by name
    pub async fn list(&self) -> DashboardResult<Vec<SocialPlatform>> {
        self.platform_repo.list().await
    }

    pub async fn get(&self, platform_id: &PlatformId) -> DashboardResult<SocialPlatform> {
        self.platform_repo
            .find_by_id(platform_id)
            .await?
            .ok_or(DashboardError::NotFound("Platform"))
    }

    pub async fn get_by_name(&self, name: &str) -> DashboardResult<SocialPlatform> {
        self.platform_repo
            .find_by_name(name.trim())
            .await?
            .ok_or(DashboardError::NotFound("Platform"))
    }

    /// Insert the default platforms when none exist. Returns how many were
    /// created.
    pub async fn seed_defaults(&self) -> DashboardResult<usize> {
        if self.platform_repo.count().await? > 0 {
            return Ok(0);
        }

        for (name, icon, color) in DEFAULT_PLATFORMS {
            let platform = SocialPlatform::new(name, Some(icon), Some(color))?;
            self.platform_repo.create(&platform).await?;
        }

        tracing::info!(count = DEFAULT_PLATFORMS.len(), "Default platforms created");
        Ok(DEFAULT_PLATFORMS.len())
    }
}
