use crate::application::http::{health::HealthApiDoc, scan::router::ScanApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "foodsense API"
    ),
    nest(
        (path = "/scan", api = ScanApiDoc),
    )
)]
struct ApiDocBase;

pub struct ApiDoc;

// utoipa's derive rejects `nest(path = "", ...)`, so the root-level health
// doc is nested manually; `nest("", ..)` is equivalent to the empty-path nest.
impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ApiDocBase::openapi().nest("", HealthApiDoc::openapi())
    }
}
