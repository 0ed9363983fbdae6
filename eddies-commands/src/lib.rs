pub mod economy;
pub mod utility;

use eddies_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    utility::usage::META,
    economy::profile::META,
    economy::work::META,
    economy::setname::META,
    economy::claimreward::META,
    economy::toplvl::META,
    economy::topcash::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::ping::ping(),
        utility::help::help(),
        utility::usage::usage(),
        economy::profile::profile(),
        economy::work::work(),
        economy::setname::setname(),
        economy::claimreward::claimreward(),
        economy::toplvl::toplvl(),
        economy::topcash::topcash(),
    ]
}
