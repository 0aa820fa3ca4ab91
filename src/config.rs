//! Reward-center parameters file, as consumed when creating or editing a
//! reward center:
//!
//! ```json
//! {
//!   "mathematical_operand": "Divide",
//!   "seller_reward_payout_basis_points": 1000,
//!   "payout_numeral": 5
//! }
//! ```

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    errors::ConfigError,
    instruction_layouts::{CreateRewardCenterParams, EditRewardCenterParams},
    state::{PayoutOperation, RewardRules},
};

pub const MAX_BASIS_POINTS: u16 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardCenterConfig {
    pub mathematical_operand: PayoutOperation,
    pub seller_reward_payout_basis_points: u16,
    pub payout_numeral: u16,
}

impl RewardCenterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading reward center config");
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seller_reward_payout_basis_points > MAX_BASIS_POINTS {
            return Err(ConfigError::BasisPointsTooHigh(self.seller_reward_payout_basis_points));
        }
        if self.mathematical_operand == PayoutOperation::Divide && self.payout_numeral == 0 {
            return Err(ConfigError::ZeroDivisor);
        }
        if self.mathematical_operand == PayoutOperation::Multiply && self.payout_numeral == 0 {
            tracing::warn!("payout_numeral 0 with Multiply pays no rewards");
        }
        Ok(())
    }

    pub fn reward_rules(&self) -> RewardRules {
        RewardRules::from(*self)
    }
}

impl From<RewardCenterConfig> for RewardRules {
    fn from(config: RewardCenterConfig) -> Self {
        RewardRules {
            seller_reward_payout_basis_points: config.seller_reward_payout_basis_points,
            mathematical_operand: config.mathematical_operand,
            payout_numeral: config.payout_numeral,
        }
    }
}

impl From<RewardRules> for RewardCenterConfig {
    fn from(rules: RewardRules) -> Self {
        RewardCenterConfig {
            mathematical_operand: rules.mathematical_operand,
            seller_reward_payout_basis_points: rules.seller_reward_payout_basis_points,
            payout_numeral: rules.payout_numeral,
        }
    }
}

impl From<RewardCenterConfig> for CreateRewardCenterParams {
    fn from(config: RewardCenterConfig) -> Self {
        CreateRewardCenterParams {
            reward_rules: config.into(),
        }
    }
}

impl From<RewardCenterConfig> for EditRewardCenterParams {
    fn from(config: RewardCenterConfig) -> Self {
        EditRewardCenterParams {
            reward_rules: config.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;
    use crate::{codec::WireCodec, instruction_layouts::InstructionArgs};

    const DIVIDE_JSON: &str = r#"{
        "mathematical_operand": "Divide",
        "seller_reward_payout_basis_points": 1000,
        "payout_numeral": 5
    }"#;

    #[test]
    fn parses_divide_config() {
        let config = RewardCenterConfig::from_json_str(DIVIDE_JSON).unwrap();
        assert_eq!(config.mathematical_operand, PayoutOperation::Divide);
        assert_eq!(config.seller_reward_payout_basis_points, 1_000);
        assert_eq!(config.payout_numeral, 5);
        assert_eq!(config.reward_rules().payouts(100).unwrap(), (2, 18));
    }

    #[test]
    fn accepts_legacy_multiple_operand() {
        let json = r#"{"mathematical_operand":"Multiple","seller_reward_payout_basis_points":250,"payout_numeral":2}"#;
        let config = RewardCenterConfig::from_json_str(json).unwrap();
        assert_eq!(config.mathematical_operand, PayoutOperation::Multiply);
        assert_eq!(config.reward_rules().to_bytes().unwrap(), vec![0xFA, 0x00, 0x00, 0x02, 0x00]);
        assert!(config.to_json_string().unwrap().contains("\"Multiply\""));
    }

    #[test]
    fn rejects_invalid_rules() {
        let too_high = r#"{"mathematical_operand":"Multiply","seller_reward_payout_basis_points":10001,"payout_numeral":1}"#;
        assert!(matches!(
            RewardCenterConfig::from_json_str(too_high),
            Err(ConfigError::BasisPointsTooHigh(10_001))
        ));

        let zero_divisor = r#"{"mathematical_operand":"Divide","seller_reward_payout_basis_points":10,"payout_numeral":0}"#;
        assert!(matches!(
            RewardCenterConfig::from_json_str(zero_divisor),
            Err(ConfigError::ZeroDivisor)
        ));

        assert!(matches!(
            RewardCenterConfig::from_json_str(r#"{"mathematical_operand":"Add"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn loads_from_path() {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let path = std::env::temp_dir().join(format!("reward_center_config_{nanos}.json"));
        fs::write(&path, DIVIDE_JSON).unwrap();
        let loaded = RewardCenterConfig::from_path(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), RewardCenterConfig::from_json_str(DIVIDE_JSON).unwrap());

        assert!(matches!(
            RewardCenterConfig::from_path(std::env::temp_dir().join("missing_reward_center_config.json")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn converts_into_instruction_params() {
        let config = RewardCenterConfig::from_json_str(DIVIDE_JSON).unwrap();
        let create = CreateRewardCenterParams::from(config);
        let edit = EditRewardCenterParams::from(config);
        assert_eq!(create.reward_rules, edit.reward_rules);
        assert_eq!(RewardCenterConfig::from(create.reward_rules), config);
        assert_eq!(
            &edit.instruction_data().unwrap()[8..],
            &[0xE8, 0x03, 0x01, 0x05, 0x00]
        );
    }
}
