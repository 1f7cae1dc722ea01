//! Social interaction hits

use crate::error::Result;
use crate::field::{FieldSpec, ValidatedField};
use crate::hit::{CommonFields, Hit, HitType, write_hit_type};
use crate::policy::ValidationPolicy;

const SOCIAL_NETWORK: FieldSpec = FieldSpec::percent("SocialNetwork", "sn", 50);
const SOCIAL_ACTION: FieldSpec = FieldSpec::percent("SocialAction", "sa", 50);
const SOCIAL_ACTION_TARGET: FieldSpec = FieldSpec::percent("SocialActionTarget", "st", 2048);

/// A social interaction (like, share, tweet)
///
/// Network, action and target are all required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Social {
    policy: ValidationPolicy,
    network: ValidatedField,
    action: ValidatedField,
    target: ValidatedField,
    common: CommonFields,
}

impl Default for Social {
    fn default() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }
}

impl Social {
    /// Create an empty record under the strict policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record validating under `policy`
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            network: ValidatedField::new(SOCIAL_NETWORK),
            action: ValidatedField::new(SOCIAL_ACTION),
            target: ValidatedField::new(SOCIAL_ACTION_TARGET),
            common: CommonFields::default(),
        }
    }

    /// Change the policy used by later assignments and serialization
    pub fn set_policy(&mut self, policy: ValidationPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Social network (`sn`, at most 50 encoded bytes)
    pub fn social_network(&self) -> Option<&str> {
        self.network.raw()
    }

    /// Set the network (`sn`, at most 50 encoded bytes)
    pub fn set_social_network(&mut self, value: &str) -> Result<&mut Self> {
        self.network.set(value, self.policy)?;
        Ok(self)
    }

    /// Social action (`sa`, at most 50 encoded bytes)
    pub fn social_action(&self) -> Option<&str> {
        self.action.raw()
    }

    /// Set the action (`sa`, at most 50 encoded bytes)
    pub fn set_social_action(&mut self, value: &str) -> Result<&mut Self> {
        self.action.set(value, self.policy)?;
        Ok(self)
    }

    /// Target of the action, usually a URL (`st`, at most 2048 encoded bytes)
    pub fn social_action_target(&self) -> Option<&str> {
        self.target.raw()
    }

    /// Set the action target (`st`, at most 2048 encoded bytes)
    pub fn set_social_action_target(&mut self, value: &str) -> Result<&mut Self> {
        self.target.set(value, self.policy)?;
        Ok(self)
    }

    /// Where the hit originated (`ds`)
    pub fn data_source(&self) -> Option<&str> {
        self.common.data_source()
    }

    /// Set the data source (`ds`, no ceiling)
    pub fn set_data_source(&mut self, value: &str) -> Result<&mut Self> {
        self.common.set_data_source(value, self.policy)?;
        Ok(self)
    }
}

impl Hit for Social {
    fn hit_type(&self) -> HitType {
        HitType::Social
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn write_to(&self, out: &mut String) -> Result<()> {
        self.network.write_required(out, self.policy)?;
        self.action.write_required(out, self.policy)?;
        self.target.write_required(out, self.policy)?;
        write_hit_type(out, HitType::Social);
        self.common.write_to(out);
        Ok(())
    }
}
