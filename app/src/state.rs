use cdcr::registration::RegistrationService;

pub struct AppState {
    pub service: RegistrationService,
}
