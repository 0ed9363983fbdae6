pub(crate) mod embeds;

pub mod claimreward;
pub mod profile;
pub mod setname;
pub mod topcash;
pub mod toplvl;
pub mod work;
