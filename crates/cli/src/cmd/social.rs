//! `measure social`

use clap::Args;
use measure_protocol::{Result, Social, ValidationPolicy};

use super::flag;

#[derive(Args, Debug, Default)]
pub struct SocialArgs {
    /// Social network (e.g. facebook)
    #[arg(long)]
    pub network: Option<String>,

    /// Social action (e.g. like)
    #[arg(long)]
    pub action: Option<String>,

    /// Target of the action, usually a URL
    #[arg(long)]
    pub target: Option<String>,

    #[arg(long)]
    pub data_source: Option<String>,
}

impl SocialArgs {
    pub fn build(&self, policy: ValidationPolicy) -> Result<Social> {
        let mut hit = Social::with_policy(policy);
        hit.set_social_network(flag(&self.network))?
            .set_social_action(flag(&self.action))?
            .set_social_action_target(flag(&self.target))?
            .set_data_source(flag(&self.data_source))?;
        Ok(hit)
    }
}
