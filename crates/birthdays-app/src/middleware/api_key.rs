use salvo::Depot;
use salvo::http::StatusCode;
use tracing::error;

use crate::state::get_settings_from_depot;
use birthdays_core::constants::API_KEY_PARAM;

/// ## Summary
/// Rejects requests whose `apiKey` does not match the configured key. A
/// urlencoded or multipart form field takes precedence over the query string.
///
/// ## Errors
/// Returns an HTTP 401 Unauthorized response on a missing or wrong key.
pub struct ApiKeyMiddleware;

#[salvo::async_trait]
impl salvo::Handler for ApiKeyMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        let config = match get_settings_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get settings from depot");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let presented = match req.form::<String>(API_KEY_PARAM).await {
            Some(key) => key,
            None => req.query::<String>(API_KEY_PARAM).unwrap_or_default(),
        };

        if presented == config.auth.api_key {
            tracing::trace!("API key accepted");
            return;
        }

        tracing::warn!("Rejected request with invalid API key");
        res.status_code(StatusCode::UNAUTHORIZED);
        res.render("Invalid API key");
        ctrl.skip_rest();
    }
}
