//! `measure exception`

use clap::Args;
use measure_protocol::{Exception, Result, ValidationPolicy};

use super::flag;

#[derive(Args, Debug, Default)]
pub struct ExceptionArgs {
    /// What went wrong
    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub app_name: Option<String>,

    #[arg(long)]
    pub app_version: Option<String>,

    /// Screen the exception was raised on
    #[arg(long)]
    pub screen: Option<String>,

    /// Fatality: `--fatal`, `--fatal=false`, or leave out to not report it
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub fatal: Option<bool>,

    #[arg(long)]
    pub data_source: Option<String>,
}

impl ExceptionArgs {
    pub fn build(&self, policy: ValidationPolicy) -> Result<Exception> {
        let mut hit = Exception::with_policy(policy);
        hit.set_exception_description(flag(&self.description))?
            .set_application_name(flag(&self.app_name))?
            .set_application_version(flag(&self.app_version))?
            .set_screen_name(flag(&self.screen))?
            .set_data_source(flag(&self.data_source))?
            .set_fatal(self.fatal);
        Ok(hit)
    }
}
