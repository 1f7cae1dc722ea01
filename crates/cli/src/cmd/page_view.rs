//! `measure pageview`
//!
//! A page is identified by `--location`, or by `--host` and `--path`
//! together.

use clap::Args;
use measure_protocol::{PageView, Result, ValidationPolicy};

use super::flag;

#[derive(Args, Debug, Default)]
pub struct PageViewArgs {
    /// Full document URL
    #[arg(long)]
    pub location: Option<String>,

    /// Document host name
    #[arg(long)]
    pub host: Option<String>,

    /// Document path, starting with '/'
    #[arg(long)]
    pub path: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub referrer: Option<String>,

    #[arg(long)]
    pub data_source: Option<String>,
}

impl PageViewArgs {
    pub fn build(&self, policy: ValidationPolicy) -> Result<PageView> {
        let mut hit = PageView::with_policy(policy);
        hit.set_document_location(flag(&self.location))?
            .set_document_host_name(flag(&self.host))?
            .set_document_path(flag(&self.path))?
            .set_document_title(flag(&self.title))?
            .set_document_referrer(flag(&self.referrer))?
            .set_data_source(flag(&self.data_source))?;
        Ok(hit)
    }
}
