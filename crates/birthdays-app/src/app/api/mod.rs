mod app_specific;
mod birthdays;

use salvo::Router;

/// ## Summary
/// Constructs the router serving the healthcheck and the birthday feeds.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(app_specific::routes())
        .push(birthdays::routes())
}
