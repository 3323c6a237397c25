pub mod user_repo;
pub use user_repo::UserRepository;
pub mod category_repo;
pub use category_repo::CategoryRepository;
pub mod property_repo;
pub use property_repo::PropertyRepository;
pub mod rental_repo;
pub use rental_repo::RentalRepository;
pub mod booking_repo;
pub use booking_repo::BookingRepository;
pub mod message_repo;
pub use message_repo::MessageRepository;
pub mod payment_repo;
pub use payment_repo::PaymentRepository;
pub mod maintenance_repo;
pub use maintenance_repo::MaintenanceRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
