//! OpenAPI specification generation and app factory.

use crate::{
    config::{MetricsConfig, RouterConfig},
    errors::AppError,
    handlers::{
        get_metrics, health, index, item_detail, item_edit, list_items, redirect_trailing_slash,
        routes, user_detail, version,
    },
    middleware::MetricsMiddleware,
    routing::{RouteResolver, resource_path},
    services::AppMetrics,
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Route Metrics".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Sample service instrumented with per-route Prometheus metrics.\n\n\
                ## Route labels\n\
                Requests are recorded under the route template they were routed to \
                (`/{id:int}/edit`), not the concrete path (`/42/edit`). Paths that only \
                match once a trailing slash is added or removed are recorded under that \
                route. Paths no route matches are recorded under their raw path, or under \
                `METRICS_UNMATCHED_LABEL` when set.\n\
                \n\
                **Configuration:**\n\
                - `ROUTER_REDIRECT_SLASHES` (default `true`)\n\
                - `ROUTER_SLASH_LABEL`: `canonical` or `requested`\n\
                - `METRICS_ENABLED`, `METRICS_EXCLUDED_ROUTES`"
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Shared application state, built once and handed to every worker
#[derive(Clone)]
pub struct AppState {
    pub metrics_config: web::Data<MetricsConfig>,
    pub metrics: web::Data<AppMetrics>,
    pub resolver: web::Data<RouteResolver>,
}

impl AppState {
    /// Build the route tree and metrics registry
    ///
    /// Fails on an invalid route table or metrics registration error.
    pub fn new(metrics_config: MetricsConfig, router_config: &RouterConfig) -> Result<Self, AppError> {
        let metrics = AppMetrics::from_config(&metrics_config)?;
        let resolver = RouteResolver::new(routes::app_route_tree()?, router_config);

        Ok(Self {
            metrics_config: web::Data::new(metrics_config),
            metrics: web::Data::new(metrics),
            resolver: web::Data::new(resolver),
        })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(MetricsConfig::from_env(), &RouterConfig::from_env())
    }
}

/// Creates the application around an existing [`AppState`]
///
/// Every route registered here is also part of
/// [`app_route_tree`](routes::app_route_tree), which the metrics middleware
/// resolves labels against. Unmatched paths fall through to
/// [`redirect_trailing_slash`], so a path labelled by its slash twin really
/// is redirected there.
pub fn create_app(
    state: &AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(state.metrics_config.clone())
        .app_data(state.metrics.clone())
        .app_data(state.resolver.clone())
        .service(web::resource(&resource_path(routes::INDEX)).route(web::get().to(index)))
        .service(web::resource(&resource_path(routes::HEALTH)).route(web::get().to(health)))
        .service(web::resource(&resource_path(routes::VERSION)).route(web::get().to(version)))
        .service(web::resource(&resource_path(routes::METRICS)).route(web::get().to(get_metrics)))
        .service(web::resource(&resource_path(routes::ITEMS)).route(web::get().to(list_items)))
        .service(web::resource(&resource_path(routes::ITEM)).route(web::get().to(item_detail)))
        .service(web::resource(&resource_path(routes::ITEM_EDIT)).route(web::get().to(item_edit)))
        .service(
            web::scope(&resource_path(routes::API))
                .service(
                    web::resource(&resource_path(routes::API_ITEM))
                        .route(web::get().to(item_detail)),
                )
                .service(
                    web::resource(&resource_path(routes::API_USER))
                        .route(web::get().to(user_detail)),
                ),
        )
        .default_service(actix_web::web::to(redirect_trailing_slash))
        .with_json_spec_at(routes::OPENAPI_SPEC)
        .build()
}

/// Creates the application with state loaded from the environment
///
/// Used both for testing and as the base of the main binary.
pub fn create_base_app() -> Result<
    App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    >,
    AppError,
> {
    Ok(create_app(&AppState::from_env()?))
}
