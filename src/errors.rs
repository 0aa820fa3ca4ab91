use thiserror::Error;

use crate::primitives::IntWidth;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("value {value} does not fit in {width:?}")]
    ValueOutOfRange { value: u64, width: IntWidth },
    #[error("truncated input decoding {type_name}.{field}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        type_name: &'static str,
        field: &'static str,
        needed: usize,
        remaining: usize,
    },
    #[error("unknown variant tag {tag} for {type_name}")]
    UnknownVariant { type_name: &'static str, tag: u8 },
    #[error("account discriminator {found:?} does not match {expected}")]
    WrongAccountType { expected: &'static str, found: [u8; 8] },
    #[error("account discriminator {found:?} matches no known account type")]
    UnknownAccountType { found: [u8; 8] },
    #[error("instruction discriminator {found:?} does not match {expected}")]
    WrongInstruction { expected: &'static str, found: [u8; 8] },
    #[error("instruction {instruction} is missing required account {role}")]
    MissingAccount {
        instruction: &'static str,
        role: &'static str,
    },
    #[error("instruction {instruction} has no account role named {role}")]
    UnknownAccountRole {
        instruction: &'static str,
        role: String,
    },
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("{extra} trailing bytes after {type_name}")]
    TrailingBytes { type_name: &'static str, extra: usize },
    #[error("invalid bool byte {0}")]
    InvalidBool(u8),
    #[error("invalid option tag {0}")]
    InvalidOptionTag(u8),
    #[error("payout computation overflowed")]
    PayoutOverflow,
}

impl CodecError {
    /// Rewrites a short read reported by a primitive into a truncation error
    /// attributed to the struct field being decoded.
    pub fn in_field(self, type_name: &'static str, field: &'static str) -> Self {
        match self {
            CodecError::TruncatedInput {
                type_name: "",
                needed,
                remaining,
                ..
            } => CodecError::TruncatedInput {
                type_name,
                field,
                needed,
                remaining,
            },
            CodecError::LengthMismatch { expected, actual } => CodecError::TruncatedInput {
                type_name,
                field,
                needed: expected,
                remaining: actual,
            },
            other => other,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("seller_reward_payout_basis_points {0} exceeds 10000")]
    BasisPointsTooHigh(u16),
    #[error("payout_numeral must be non-zero for the Divide operand")]
    ZeroDivisor,
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_field_attributes_primitive_truncation() {
        let err = CodecError::TruncatedInput {
            type_name: "",
            field: "",
            needed: 2,
            remaining: 1,
        };
        assert_eq!(
            err.in_field("RewardRules", "payout_numeral"),
            CodecError::TruncatedInput {
                type_name: "RewardRules",
                field: "payout_numeral",
                needed: 2,
                remaining: 1,
            }
        );
    }

    #[test]
    fn in_field_keeps_innermost_attribution() {
        let inner = CodecError::TruncatedInput {
            type_name: "RewardRules",
            field: "payout_numeral",
            needed: 2,
            remaining: 0,
        };
        assert_eq!(inner.clone().in_field("RewardCenter", "reward_rules"), inner);
    }

    #[test]
    fn in_field_turns_short_fixed_array_into_truncation() {
        let err = CodecError::LengthMismatch { expected: 32, actual: 5 };
        assert!(matches!(
            err.in_field("Listing", "seller"),
            CodecError::TruncatedInput { field: "seller", needed: 32, remaining: 5, .. }
        ));
    }

    #[test]
    fn other_errors_pass_through() {
        let err = CodecError::UnknownVariant { type_name: "PayoutOperation", tag: 9 };
        assert_eq!(err.clone().in_field("RewardRules", "mathematical_operand"), err);
    }
}
