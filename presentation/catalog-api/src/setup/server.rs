use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{NormalizePath, Tracing, TrailingSlash},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const API_TITLE: &str = "Product Catalog API";

pub struct Server;

impl Server {
    fn routes(container: DependencyContainer, public_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            API_TITLE,
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    /// Application endpoint without the CORS and tracing layers.
    pub fn app(container: DependencyContainer, public_url: String) -> impl Endpoint {
        Self::routes(container, &public_url).with(NormalizePath::new(TrailingSlash::Trim))
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = config.public_url();
        let app = Self::app(container, public_url.clone())
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at {}", public_url);
        tracing::info!("Swagger UI at {}/docs", public_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", public_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
