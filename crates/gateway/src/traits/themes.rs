//! Theme operations.

use async_trait::async_trait;
use outreach_core::{PageRequest, PageResponse, Theme};

use crate::GatewayResult;

#[derive(Debug, Clone)]
pub struct CreateThemeArgs {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct UpdateThemeArgs {
    pub theme_id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ListThemesArgs {
    pub page: PageRequest,
}

#[async_trait]
pub trait ThemeGateway: Send + Sync {
    async fn create_theme(&self, args: CreateThemeArgs) -> GatewayResult<()>;

    async fn get_theme(&self, theme_id: i64) -> GatewayResult<Theme>;

    async fn update_theme(&self, args: UpdateThemeArgs) -> GatewayResult<()>;

    async fn delete_theme(&self, theme_id: i64) -> GatewayResult<()>;

    async fn list_themes(&self, args: ListThemesArgs) -> GatewayResult<PageResponse<Theme>>;

    async fn inspect_theme(&self, theme_id: i64) -> GatewayResult<Theme>;
}
