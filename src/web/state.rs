use pouch_site::common::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,
}
