// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        BookingRepository, CategoryRepository, MaintenanceRepository, MessageRepository,
        PaymentRepository, PropertyRepository, RentalRepository, ReportRepository, UserRepository,
    },
    services::{
        auth::AuthService, booking_service::BookingService, category_service::CategoryService,
        maintenance_service::MaintenanceService, message_service::MessageService,
        payment_service::PaymentService, property_service::PropertyService,
        rental_service::RentalService, report_service::ReportService, user_service::UserService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub property_service: PropertyService,
    pub rental_service: RentalService,
    pub booking_service: BookingService,
    pub message_service: MessageService,
    pub payment_service: PaymentService,
    pub category_service: CategoryService,
    pub maintenance_service: MaintenanceService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let category_repo = CategoryRepository::new(db_pool.clone());
        let property_repo = PropertyRepository::new(db_pool.clone());
        let rental_repo = RentalRepository::new(db_pool.clone());
        let booking_repo = BookingRepository::new(db_pool.clone());
        let message_repo = MessageRepository::new(db_pool.clone());
        let payment_repo = PaymentRepository::new(db_pool.clone());
        let maintenance_repo = MaintenanceRepository::new(db_pool.clone());
        let report_repo = ReportRepository::new(db_pool.clone());

        let auth_service =
            AuthService::new(user_repo.clone(), jwt_secret.clone(), db_pool.clone());
        let user_service = UserService::new(user_repo.clone());
        let property_service = PropertyService::new(
            property_repo.clone(),
            category_repo.clone(),
            user_repo.clone(),
            db_pool.clone(),
        );
        let rental_service =
            RentalService::new(rental_repo.clone(), property_repo.clone(), db_pool.clone());
        let booking_service = BookingService::new(booking_repo, property_repo.clone());
        let message_service =
            MessageService::new(message_repo, user_repo.clone(), property_repo.clone());
        let payment_service =
            PaymentService::new(payment_repo, rental_repo.clone(), property_repo.clone());
        let category_service = CategoryService::new(category_repo);
        let maintenance_service = MaintenanceService::new(maintenance_repo, property_repo);
        let report_service = ReportService::new(report_repo);

        Ok(Self {
            db_pool,
            auth_service,
            user_service,
            property_service,
            rental_service,
            booking_service,
            message_service,
            payment_service,
            category_service,
            maintenance_service,
            report_service,
        })
    }
}
