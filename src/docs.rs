use utoipa::OpenApi;

use crate::modules::health::model::{DatabaseStatus, HealthResponse, ServiceStatus};

#[derive(OpenApi)]
#[openapi(
    paths(crate::modules::health::controller::health_check),
    components(schemas(HealthResponse, ServiceStatus, DatabaseStatus)),
    tags(
        (name = "Health", description = "Service and database availability")
    ),
    info(
        title = "Estoque API",
        description = "Inventory management backend",
    )
)]
pub struct ApiDoc;
