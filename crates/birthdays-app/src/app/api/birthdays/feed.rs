use salvo::http::StatusCode;
use salvo::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use salvo::{Depot, Request, Response, handler};

use crate::state::{get_address_books_from_depot, get_feed_from_depot};
use birthdays_core::constants::{
    ADDRESS_BOOK_PARAM, CALENDAR_CONTENT_TYPE, CALENDAR_FILENAME_SUFFIX,
};

/// ## Summary
/// Serves the birthday calendar of the address book named in the path.
///
/// ## Errors
/// Returns 404 for an unknown address book and 502 if the `CardDAV` server
/// cannot be read.
#[handler]
pub async fn feed(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    handle(req, depot, res).await;
}

#[tracing::instrument(skip(req, depot, res), fields(path = %req.uri().path()))]
async fn handle(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(name) = req.param::<String>(ADDRESS_BOOK_PARAM) else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    let (books, generator) = match (
        get_address_books_from_depot(depot),
        get_feed_from_depot(depot),
    ) {
        (Ok(books), Ok(generator)) => (books, generator),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = ?e, "Feed dependencies missing from depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let Some(book) = books.get(&name) else {
        tracing::debug!(address_book = %name, "Unknown address book");
        res.status_code(StatusCode::NOT_FOUND);
        res.render(format!("Unknown address book: {name}"));
        return;
    };

    let calendar = match generator.generate(book).await {
        Ok(calendar) => calendar,
        Err(e) => {
            tracing::error!(address_book = %name, error = %e, "Failed to generate birthday feed");
            res.status_code(StatusCode::BAD_GATEWAY);
            res.render("Failed to read address book");
            return;
        }
    };

    res.status_code(StatusCode::OK);
    let disposition = format!("filename={name}{CALENDAR_FILENAME_SUFFIX}");
    if let Err(e) = res.add_header(CONTENT_DISPOSITION, disposition, true) {
        tracing::warn!(error = %e, "Address book name is not a valid header value");
    }
    if let Err(e) = res.add_header(CONTENT_TYPE, CALENDAR_CONTENT_TYPE, true) {
        tracing::error!(error = %e, "Failed to set content type");
    }
    if let Err(e) = res.write_body(calendar) {
        tracing::error!(error = %e, "Failed to write response body");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
