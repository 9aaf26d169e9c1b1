use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::LoadPolicy;

/// Command-line and environment configuration.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "campaign-lifecycle",
    version,
    about = "Marketing Campaign Lifecycle Dashboard"
)]
pub struct Args {
    /// CSV file with the lifecycle phases.
    #[arg(long, env = "CAMPAIGN_DATA", default_value = "marketing_campaign_lifecycle.csv")]
    pub data: PathBuf,

    /// Reject the file if any row is malformed instead of skipping it.
    #[arg(long, env = "CAMPAIGN_STRICT")]
    pub strict: bool,

    /// Initial window width in points.
    #[arg(long, default_value_t = 1400.0)]
    pub width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 900.0)]
    pub height: f32,
}

impl Args {
    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient() {
        let args = Args::try_parse_from(["campaign-lifecycle"]).unwrap();
        assert_eq!(args.data, PathBuf::from("marketing_campaign_lifecycle.csv"));
        assert_eq!(args.load_policy(), LoadPolicy::Lenient);
        assert_eq!(args.width, 1400.0);
    }

    #[test]
    fn strict_flag_selects_strict_policy() {
        let args =
            Args::try_parse_from(["campaign-lifecycle", "--strict", "--data", "phases.csv"]).unwrap();
        assert_eq!(args.load_policy(), LoadPolicy::Strict);
        assert_eq!(args.data, PathBuf::from("phases.csv"));
    }
}
