// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::{auth_guard, optional_auth_guard};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Garante a conta de administração
    app_state
        .auth_service
        .ensure_admin_user()
        .await
        .expect("Falha ao garantir o usuário admin.");

    // Rotas de autenticação: registro e login públicos, /me protegida
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            optional_auth_guard,
        ));

    let user_routes = Router::new()
        .route("/profile"
               ,get(handlers::users::get_profile)
               .put(handlers::users::update_profile)
        )
        .route("/{username}", get(handlers::users::get_by_username))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            optional_auth_guard,
        ));

    // Catálogo: leitura pública, escrita autenticada (o extrator rejeita visitantes)
    let property_routes = Router::new()
        .route("/"
               ,get(handlers::properties::get_all)
               .post(handlers::properties::create)
        )
        .route("/available", get(handlers::properties::get_available))
        .route("/mine", get(handlers::properties::get_mine))
        .route("/city/{city}", get(handlers::properties::get_by_city))
        .route("/{id}"
               ,get(handlers::properties::get_by_id)
               .put(handlers::properties::update)
               .delete(handlers::properties::delete)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            optional_auth_guard,
        ));

    let rental_routes = Router::new()
        .route("/"
               ,get(handlers::rentals::get_all)
               .post(handlers::rentals::create)
        )
        .route("/my-requests", get(handlers::rentals::my_requests))
        .route("/property-requests", get(handlers::rentals::property_requests))
        .route("/finalize-expired", post(handlers::rentals::finalize_expired))
        .route("/{id}"
               ,get(handlers::rentals::get_by_id)
               .put(handlers::rentals::update)
               .delete(handlers::rentals::delete)
        )
        .route("/{id}/approve", post(handlers::rentals::approve))
        .route("/{id}/reject", post(handlers::rentals::reject))
        .route("/{id}/payments"
               ,post(handlers::payments::record)
               .get(handlers::payments::list)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Reservas: criação aberta a visitantes, o restante autenticado
    let booking_routes = Router::new()
        .route("/"
               ,post(handlers::bookings::create)
               .get(handlers::bookings::get_all)
        )
        .route("/pending", get(handlers::bookings::get_pending))
        .route("/mine", get(handlers::bookings::get_mine))
        .route("/received", get(handlers::bookings::get_received))
        .route("/property/{property_id}", get(handlers::bookings::get_by_property))
        .route("/status/{status}", get(handlers::bookings::get_by_status))
        .route("/stats/count-by-status", get(handlers::bookings::count_by_status))
        .route("/{id}"
               ,get(handlers::bookings::get_by_id)
               .put(handlers::bookings::update)
               .delete(handlers::bookings::delete)
        )
        .route("/{id}/status", put(handlers::bookings::update_status))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            optional_auth_guard,
        ));

    let message_routes = Router::new()
        .route("/", post(handlers::messages::send))
        .route("/sent", get(handlers::messages::sent))
        .route("/received", get(handlers::messages::received))
        .route("/unread", get(handlers::messages::unread))
        .route("/unread/count", get(handlers::messages::unread_count))
        .route("/search", get(handlers::messages::search))
        .route("/conversation/{other_id}", get(handlers::messages::conversation))
        .route("/conversation/{other_id}/read", put(handlers::messages::mark_conversation_as_read))
        .route("/property/{property_id}", get(handlers::messages::by_property))
        .route("/{id}", axum::routing::delete(handlers::messages::delete))
        .route("/{id}/read", put(handlers::messages::mark_as_read))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Categorias: leitura pública, escrita restrita ao admin
    let category_routes = Router::new()
        .route("/"
               ,get(handlers::categories::get_all)
               .post(handlers::categories::create)
        )
        .route("/{id}"
               ,get(handlers::categories::get_by_id)
               .put(handlers::categories::update)
               .delete(handlers::categories::delete)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            optional_auth_guard,
        ));

    let maintenance_routes = Router::new()
        .route("/", post(handlers::maintenance::create))
        .route("/property/{property_id}", get(handlers::maintenance::get_by_property))
        .route("/{id}/status", put(handlers::maintenance::update_status))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let admin_routes = Router::new()
        .route("/users", get(handlers::admin::get_all_users))
        .route("/users/{id}"
               ,get(handlers::admin::get_user_by_id)
               .put(handlers::admin::update_user)
               .delete(handlers::admin::delete_user)
        )
        .route("/properties", get(handlers::admin::get_all_properties))
        .route("/properties/{id}", axum::routing::delete(handlers::admin::delete_property))
        .route("/operations/discount-by-city", post(handlers::admin::apply_discount_to_city))
        .route("/operations/update-availability", post(handlers::admin::update_availability_by_owner))
        .route("/operations/inflation-adjustment", post(handlers::admin::apply_inflation_adjustment))
        .route("/operations/finalize-expired-rentals", post(handlers::admin::finalize_expired_rentals))
        .route("/reports/financial", get(handlers::admin::financial_report))
        .route("/statistics", get(handlers::admin::system_statistics))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/properties", property_routes)
        .nest("/api/rentals", rental_routes)
        .nest("/api/bookings", booking_routes)
        .nest("/api/messages", message_routes)
        .nest("/api/categories", category_routes)
        .nest("/api/maintenance", maintenance_routes)
        .nest("/api/admin", admin_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
