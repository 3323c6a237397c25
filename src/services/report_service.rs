// src/services/report_service.rs

use crate::{
    common::error::AppError,
    db::ReportRepository,
    models::report::{FinancialReport, SystemStatistics},
};

#[derive(Clone)]
pub struct ReportService {
    report_repo: ReportRepository,
}

impl ReportService {
    pub fn new(report_repo: ReportRepository) -> Self {
        Self { report_repo }
    }

    pub async fn financial_report(&self) -> Result<FinancialReport, AppError> {
        self.report_repo.financial_report().await
    }

    pub async fn system_statistics(&self) -> Result<SystemStatistics, AppError> {
        self.report_repo.system_statistics().await
    }
}
