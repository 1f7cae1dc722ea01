//! `measure screenview`

use clap::Args;
use measure_protocol::{Result, ScreenView, ValidationPolicy};

use super::flag;

#[derive(Args, Debug, Default)]
pub struct ScreenViewArgs {
    /// Screen name
    #[arg(long)]
    pub screen: Option<String>,

    #[arg(long)]
    pub app_name: Option<String>,

    #[arg(long)]
    pub app_version: Option<String>,

    /// Application id (e.g. com.example.app)
    #[arg(long)]
    pub app_id: Option<String>,

    /// Installer id (e.g. com.android.vending)
    #[arg(long)]
    pub installer_id: Option<String>,

    #[arg(long)]
    pub data_source: Option<String>,
}

impl ScreenViewArgs {
    pub fn build(&self, policy: ValidationPolicy) -> Result<ScreenView> {
        let mut hit = ScreenView::with_policy(policy);
        hit.set_screen_name(flag(&self.screen))?
            .set_application_name(flag(&self.app_name))?
            .set_application_version(flag(&self.app_version))?
            .set_application_id(flag(&self.app_id))?
            .set_application_installer_id(flag(&self.installer_id))?
            .set_data_source(flag(&self.data_source))?;
        Ok(hit)
    }
}
