// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Users ---
        handlers::users::get_by_username,
        handlers::users::get_profile,
        handlers::users::update_profile,

        // --- Properties ---
        handlers::properties::get_all,
        handlers::properties::get_available,
        handlers::properties::get_by_city,
        handlers::properties::get_by_id,
        handlers::properties::get_mine,
        handlers::properties::create,
        handlers::properties::update,
        handlers::properties::delete,

        // --- Rentals ---
        handlers::rentals::get_all,
        handlers::rentals::my_requests,
        handlers::rentals::property_requests,
        handlers::rentals::get_by_id,
        handlers::rentals::create,
        handlers::rentals::approve,
        handlers::rentals::reject,
        handlers::rentals::update,
        handlers::rentals::delete,
        handlers::rentals::finalize_expired,

        // --- Payments ---
        handlers::payments::record,
        handlers::payments::list,

        // --- Bookings ---
        handlers::bookings::create,
        handlers::bookings::get_all,
        handlers::bookings::get_pending,
        handlers::bookings::get_by_id,
        handlers::bookings::get_by_property,
        handlers::bookings::get_mine,
        handlers::bookings::get_received,
        handlers::bookings::get_by_status,
        handlers::bookings::update,
        handlers::bookings::update_status,
        handlers::bookings::delete,
        handlers::bookings::count_by_status,

        // --- Messages ---
        handlers::messages::send,
        handlers::messages::conversation,
        handlers::messages::sent,
        handlers::messages::received,
        handlers::messages::unread,
        handlers::messages::unread_count,
        handlers::messages::mark_as_read,
        handlers::messages::mark_conversation_as_read,
        handlers::messages::by_property,
        handlers::messages::search,
        handlers::messages::delete,

        // --- Categories ---
        handlers::categories::get_all,
        handlers::categories::get_by_id,
        handlers::categories::create,
        handlers::categories::update,
        handlers::categories::delete,

        // --- Maintenance ---
        handlers::maintenance::create,
        handlers::maintenance::get_by_property,
        handlers::maintenance::update_status,

        // --- Admin ---
        handlers::admin::get_all_users,
        handlers::admin::get_user_by_id,
        handlers::admin::update_user,
        handlers::admin::delete_user,
        handlers::admin::get_all_properties,
        handlers::admin::delete_property,
        handlers::admin::apply_discount_to_city,
        handlers::admin::update_availability_by_owner,
        handlers::admin::apply_inflation_adjustment,
        handlers::admin::finalize_expired_rentals,
        handlers::admin::financial_report,
        handlers::admin::system_statistics,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Properties ---
            models::property::Property,
            handlers::properties::CreatePropertyPayload,
            handlers::properties::UpdatePropertyPayload,

            // --- Rentals ---
            models::rental::RentalStatus,
            models::rental::Rental,
            models::rental::RentalView,
            handlers::rentals::CreateRentalPayload,
            handlers::rentals::UpdateRentalPayload,
            handlers::rentals::RentalDecisionPayload,

            // --- Payments ---
            models::payment::PaymentStatus,
            models::payment::Payment,
            handlers::payments::RecordPaymentPayload,

            // --- Bookings ---
            models::booking::BookingStatus,
            models::booking::Booking,
            models::booking::BookingStatusCount,
            handlers::bookings::CreateBookingPayload,
            handlers::bookings::UpdateBookingPayload,
            handlers::bookings::UpdateBookingStatusPayload,

            // --- Messages ---
            models::message::Message,
            models::message::UnreadCount,
            handlers::messages::SendMessagePayload,

            // --- Categories ---
            models::category::Category,
            handlers::categories::CategoryPayload,

            // --- Maintenance ---
            models::maintenance::MaintenanceStatus,
            models::maintenance::Maintenance,
            handlers::maintenance::CreateMaintenancePayload,
            handlers::maintenance::UpdateMaintenanceStatusPayload,

            // --- Users / Admin ---
            handlers::users::UpdateProfilePayload,
            handlers::admin::AdminUpdateUserPayload,

            // --- Reports ---
            models::report::FinancialReport,
            models::report::SystemStatistics,
            models::report::CityCount,
            models::report::PriceRange,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Perfil e Dados do Usuário"),
        (name = "Properties", description = "Catálogo de Propriedades"),
        (name = "Rentals", description = "Ciclo de Vida dos Contratos de Aluguel"),
        (name = "Payments", description = "Pagamentos dos Contratos"),
        (name = "Bookings", description = "Pedidos de Visita"),
        (name = "Messages", description = "Mensagens entre Usuários"),
        (name = "Categories", description = "Categorias de Propriedade"),
        (name = "Maintenance", description = "Manutenções de Propriedade"),
        (name = "Admin", description = "Moderação, Operações em Lote e Relatórios")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
