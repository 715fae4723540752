use axum::http::{header, Method};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use contracts::domain::common::AggregateRoot;
use tower_http::cors::{Any, CorsLayer};

use crate::domain::common::CrudRepository;
use crate::domain::{
    a001_asset, a002_vendor, a003_customer, a004_air_agent, a005_gds_record, a006_investment,
    a007_sar_rate, a008_markup_rule, a009_expense_category, a010_air_refund, a011_air_reissue,
    a012_hotel_contract, a013_employee,
};
use crate::handlers::{crud, search};
use crate::shared::request_logger::request_logger;
use crate::shared::state::AppState;

/// `GET`/`POST` on the collection, `GET`/`PUT`/`DELETE` on one record
fn collection<R: CrudRepository>(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            R::Aggregate::api_path(),
            get(crud::list::<R>).post(crud::create::<R>),
        )
        .route(
            &R::Aggregate::item_path(":id"),
            get(crud::get_by_id::<R>)
                .put(crud::update::<R>)
                .delete(crud::delete::<R>),
        )
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/search", get(search::search));

    // Assets & investments
    let router = collection::<a001_asset::repository::Repository>(router);
    let router = collection::<a006_investment::repository::Repository>(router);
    // Air ticketing
    let router = collection::<a002_vendor::repository::Repository>(router);
    let router = collection::<a004_air_agent::repository::Repository>(router);
    let router = collection::<a005_gds_record::repository::Repository>(router);
    let router = collection::<a010_air_refund::repository::Repository>(router);
    let router = collection::<a011_air_reissue::repository::Repository>(router);
    // Hajj & Umrah
    let router = collection::<a003_customer::repository::Repository>(router);
    let router = collection::<a007_sar_rate::repository::Repository>(router);
    let router = collection::<a012_hotel_contract::repository::Repository>(router);
    // Settings & personal expense
    let router = collection::<a008_markup_rule::repository::Repository>(router);
    let router = collection::<a009_expense_category::repository::Repository>(router);
    let router = collection::<a013_employee::repository::Repository>(router);

    router
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
