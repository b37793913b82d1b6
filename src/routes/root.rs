use actix_web::HttpResponse;

use crate::test_util::ROOT_EXPECTED_OUTPUT;

/// The endpoint the conformance check is pointed at. The body must stay in
/// sync with [`ROOT_EXPECTED_OUTPUT`], which is why it is served from the
/// shared constant rather than a literal.
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().body(ROOT_EXPECTED_OUTPUT)
}
