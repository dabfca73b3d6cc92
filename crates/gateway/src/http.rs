//! Live reqwest-backed gateway implementation.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use outreach_core::{
    Activity, ActivityInspection, Campaign, CampaignInspection, CampaignStep, CampaignStepFull,
    IdentityUser, JwtToken, PageResponse, StepInspection, Theme, User,
};

use crate::envelope::unwrap_envelope;
use crate::error::{GatewayError, GatewayResult};
use crate::query::QueryParams;
use crate::traits::{
    ActivityGateway, ActivityMemberArgs, AddStepArgs, AssignUserToCampaignArgs,
    AssignUserToStepArgs, AuthGateway, CampaignGateway, CampaignMemberArgs, ChangePasswordArgs,
    ChangeRoleArgs, CreateActivityArgs, CreateCampaignArgs, CreateThemeArgs, ListActivitiesArgs,
    ListCampaignsArgs, ListStepsArgs, ListThemesArgs, ListUsersArgs, LoginArgs, QueryUsersArgs,
    RegisterArgs, StepGateway, ThemeGateway, UpdateThemeArgs, UserGateway,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway implementation against the live backend.
///
/// Holds the bearer token for the session: set by login/register/refresh,
/// cleared by logout, attached to every request while present. Cookies are
/// kept in a reqwest cookie store because the refresh operation rides on a
/// server-side cookie session.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish()
    }
}

impl HttpGateway {
    /// Create a gateway for the given backend origin.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// failure).
    pub fn new(base_url: impl Into<String>) -> GatewayResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()?;
        Ok(Self { client, base_url, token: RwLock::new(None) })
    }

    /// Create a gateway from the `OUTREACH_GATEWAY_URL` environment setting.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> GatewayResult<Self> {
        Self::new(outreach_core::gateway_base_url())
    }

    fn bearer_token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn store_token(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<Value>,
    ) -> GatewayResult<T> {
        let mut request = self
            .client
            .request(method.clone(), format!("{}{path}", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(params) = query {
            request = request.query(params.entries());
        }
        if let Some(token) = self.bearer_token() {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "gateway request");
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, path, status = status.as_u16(), "gateway request failed");
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        unwrap_envelope(&body)
    }

    /// Execute an operation whose payload the client discards.
    async fn execute_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> GatewayResult<()> {
        let _: Value = self.execute(method, path, None, body).await?;
        Ok(())
    }

    /// Execute a token-acquiring operation and retain its token for all
    /// subsequent calls.
    async fn execute_token(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<Value>,
    ) -> GatewayResult<JwtToken> {
        let jwt: JwtToken = self.execute(method, path, query, body).await?;
        self.store_token(&jwt.token);
        Ok(jwt)
    }
}

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn login(&self, args: LoginArgs) -> GatewayResult<JwtToken> {
        let body = json!({
            "username": args.username,
            "password": args.password,
        });
        self.execute_token(Method::POST, "/auth/login", None, Some(body))
            .await
            .map_err(|err| err.remap_status(401, GatewayError::InvalidCredentials))
    }

    async fn register(&self, args: RegisterArgs) -> GatewayResult<JwtToken> {
        let body = json!({
            "username": args.username,
            "password": args.password,
            "name": args.name,
        });
        let query = QueryParams::new().set_opt("createSession", args.create_session);
        self.execute_token(Method::POST, "/auth/register", Some(&query), Some(body)).await
    }

    async fn refresh(&self) -> GatewayResult<JwtToken> {
        self.execute_token(Method::GET, "/auth/refresh", None, None).await
    }

    async fn logout(&self) -> GatewayResult<()> {
        let result = self.execute_unit(Method::POST, "/auth/logout", None).await;
        // Local credentials are dropped no matter how the remote call went.
        self.clear_token();
        result
    }

    async fn identity(&self) -> GatewayResult<IdentityUser> {
        self.execute(Method::GET, "/users/me", None, None).await
    }
}

#[async_trait]
impl UserGateway for HttpGateway {
    async fn list_users(&self, args: ListUsersArgs) -> GatewayResult<PageResponse<User>> {
        let query = QueryParams::for_page(&args.page)
            .set_opt("activityId", args.activity_id)
            .set_opt("campaignId", args.campaign_id);
        self.execute(Method::GET, "/users", Some(&query), None).await
    }

    async fn get_user(&self, user_id: i64) -> GatewayResult<User> {
        self.execute(Method::GET, &format!("/users/{user_id}"), None, None).await
    }

    async fn delete_user(&self, user_id: i64) -> GatewayResult<()> {
        self.execute_unit(Method::DELETE, &format!("/users/{user_id}"), None).await
    }

    async fn change_user_role(&self, args: ChangeRoleArgs) -> GatewayResult<()> {
        let body = json!({ "role": args.role });
        self.execute_unit(Method::PUT, &format!("/users/{}/role", args.user_id), Some(body)).await
    }

    async fn change_own_password(&self, args: ChangePasswordArgs) -> GatewayResult<()> {
        let body = json!({
            "oldPassword": args.old_password,
            "newPassword": args.new_password,
        });
        self.execute_unit(Method::PUT, "/users/me/password", Some(body)).await
    }

    async fn query_users(&self, args: QueryUsersArgs) -> GatewayResult<PageResponse<User>> {
        let query = QueryParams::for_page(&args.page).set("query", args.query);
        self.execute(Method::GET, "/query/users", Some(&query), None).await
    }
}

#[async_trait]
impl ThemeGateway for HttpGateway {
    async fn create_theme(&self, args: CreateThemeArgs) -> GatewayResult<()> {
        let body = json!({
            "name": args.name,
            "description": args.description,
        });
        self.execute_unit(Method::POST, "/themes", Some(body)).await
    }

    async fn get_theme(&self, theme_id: i64) -> GatewayResult<Theme> {
        self.execute(Method::GET, &format!("/themes/{theme_id}"), None, None).await
    }

    async fn update_theme(&self, args: UpdateThemeArgs) -> GatewayResult<()> {
        let body = json!({
            "name": args.name,
            "description": args.description,
        });
        self.execute_unit(Method::PUT, &format!("/themes/{}", args.theme_id), Some(body)).await
    }

    async fn delete_theme(&self, theme_id: i64) -> GatewayResult<()> {
        self.execute_unit(Method::DELETE, &format!("/themes/{theme_id}"), None).await
    }

    async fn list_themes(&self, args: ListThemesArgs) -> GatewayResult<PageResponse<Theme>> {
        let query = QueryParams::for_page(&args.page);
        self.execute(Method::GET, "/themes", Some(&query), None).await
    }

    async fn inspect_theme(&self, theme_id: i64) -> GatewayResult<Theme> {
        self.execute(Method::GET, &format!("/themes/{theme_id}/inspect"), None, None).await
    }
}

#[async_trait]
impl CampaignGateway for HttpGateway {
    async fn create_campaign(&self, args: CreateCampaignArgs) -> GatewayResult<Campaign> {
        let body = json!({
            "name": args.name,
            "themeId": args.theme_id,
        });
        self.execute(Method::POST, "/campaigns", None, Some(body)).await
    }

    async fn delete_campaign(&self, campaign_id: i64) -> GatewayResult<()> {
        self.execute_unit(Method::DELETE, &format!("/campaigns/{campaign_id}"), None).await
    }

    async fn list_campaigns(
        &self,
        args: ListCampaignsArgs,
    ) -> GatewayResult<PageResponse<Campaign>> {
        let query = QueryParams::for_page(&args.page)
            .set_opt("themeId", args.theme_id)
            .set_opt("assigned", args.assigned);
        self.execute(Method::GET, "/campaigns", Some(&query), None).await
    }

    async fn inspect_campaign(&self, campaign_id: i64) -> GatewayResult<CampaignInspection> {
        self.execute(Method::GET, &format!("/campaigns/{campaign_id}/inspect"), None, None).await
    }

    async fn assign_user_to_campaign(&self, args: AssignUserToCampaignArgs) -> GatewayResult<()> {
        // An absent userId clears the assignment; the key is dropped, not null.
        let body = match args.user_id {
            Some(user_id) => json!({ "userId": user_id }),
            None => json!({}),
        };
        self.execute_unit(Method::POST, &format!("/campaigns/{}/assign", args.campaign_id), Some(body))
            .await
    }

    async fn add_user_to_campaign(&self, args: CampaignMemberArgs) -> GatewayResult<()> {
        let body = json!({ "userId": args.user_id });
        self.execute_unit(Method::POST, &format!("/campaigns/{}/adduser", args.campaign_id), Some(body))
            .await
    }

    async fn remove_user_from_campaign(&self, args: CampaignMemberArgs) -> GatewayResult<()> {
        let body = json!({ "userId": args.user_id });
        self.execute_unit(
            Method::POST,
            &format!("/campaigns/{}/removeuser", args.campaign_id),
            Some(body),
        )
        .await
    }

    async fn steps_for_campaign(&self, campaign_id: i64) -> GatewayResult<Vec<CampaignStepFull>> {
        self.execute(Method::GET, &format!("/campaigns/{campaign_id}/steps"), None, None).await
    }
}

#[async_trait]
impl StepGateway for HttpGateway {
    async fn add_step(&self, args: AddStepArgs) -> GatewayResult<CampaignStep> {
        let body = json!({
            "name": args.name,
            "campaignId": args.campaign_id,
        });
        self.execute(Method::POST, "/steps", None, Some(body)).await
    }

    async fn activate_step(&self, step_id: i64) -> GatewayResult<()> {
        self.execute_unit(Method::POST, &format!("/steps/{step_id}/activate"), None).await
    }

    async fn inspect_step(&self, step_id: i64) -> GatewayResult<StepInspection> {
        self.execute(Method::GET, &format!("/steps/{step_id}/inspect"), None, None).await
    }

    async fn assign_user_to_step(&self, args: AssignUserToStepArgs) -> GatewayResult<()> {
        let body = json!({ "userId": args.user_id });
        self.execute_unit(Method::POST, &format!("/steps/{}/assign", args.step_id), Some(body)).await
    }

    async fn list_steps(
        &self,
        args: ListStepsArgs,
    ) -> GatewayResult<PageResponse<CampaignStepFull>> {
        let query = QueryParams::for_page(&args.page).set_opt("assigned", args.assigned);
        self.execute(Method::GET, "/steps", Some(&query), None).await
    }
}

#[async_trait]
impl ActivityGateway for HttpGateway {
    async fn create_activity(&self, args: CreateActivityArgs) -> GatewayResult<Activity> {
        let body = json!({
            "name": args.name,
            "description": args.description,
            "stepId": args.step_id,
            "startDate": args.start_date,
            "endDate": args.end_date,
        });
        self.execute(Method::POST, "/activities", None, Some(body)).await
    }

    async fn get_activity(&self, activity_id: i64) -> GatewayResult<Activity> {
        self.execute(Method::GET, &format!("/activities/{activity_id}"), None, None).await
    }

    async fn list_activities(
        &self,
        args: ListActivitiesArgs,
    ) -> GatewayResult<PageResponse<Activity>> {
        let query = QueryParams::for_page(&args.page)
            .set_opt("assigned", args.assigned)
            .set_opt("available", args.available)
            .set_opt("stepId", args.step_id);
        self.execute(Method::GET, "/activities", Some(&query), None).await
    }

    async fn inspect_activity(&self, activity_id: i64) -> GatewayResult<ActivityInspection> {
        self.execute(Method::GET, &format!("/activities/{activity_id}/inspect"), None, None).await
    }

    async fn open_activity(&self, activity_id: i64) -> GatewayResult<()> {
        self.execute_unit(Method::POST, &format!("/activities/{activity_id}/open"), None).await
    }

    async fn close_activity(&self, activity_id: i64) -> GatewayResult<()> {
        self.execute_unit(Method::POST, &format!("/activities/{activity_id}/close"), None).await
    }

    async fn add_user_to_activity(&self, args: ActivityMemberArgs) -> GatewayResult<()> {
        let body = json!({ "userId": args.user_id });
        self.execute_unit(Method::POST, &format!("/activities/{}/adduser", args.activity_id), Some(body))
            .await
    }

    async fn remove_user_from_activity(&self, args: ActivityMemberArgs) -> GatewayResult<()> {
        let body = json!({ "userId": args.user_id });
        self.execute_unit(
            Method::POST,
            &format!("/activities/{}/removeuser", args.activity_id),
            Some(body),
        )
        .await
    }
}
