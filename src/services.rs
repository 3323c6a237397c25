pub mod auth;
pub mod booking_service;
pub mod category_service;
pub mod maintenance_service;
pub mod message_service;
pub mod payment_service;
pub mod property_service;
pub mod rental_service;
pub mod report_service;
pub mod user_service;
