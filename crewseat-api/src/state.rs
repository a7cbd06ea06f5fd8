use crewseat_core::service::VoucherService;

#[derive(Clone)]
pub struct AppState {
    pub vouchers: VoucherService,
    pub cors_origins: Vec<String>,
}
