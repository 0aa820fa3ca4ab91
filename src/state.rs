use serde::{Deserialize, Serialize};
use solana_address::Address;

use crate::{
    account_decoder::AccountRecord,
    anchor_compat::{Discriminator, ACCT_LISTING, ACCT_OFFER, ACCT_REWARDCENTER, ANCHOR_DISCRIMINATOR_LEN},
    codec::{read_variant_tag, write_variant_tag, WireCodec},
    errors::CodecError,
    primitives::PUBKEY_LEN,
    wire_struct,
};

pub const BASIS_POINTS_DENOMINATOR: u128 = 10_000;

// Allocation sizes used by the program at account creation. The reward center
// reserves room for an optional collection oracle that is never written.
pub const REWARD_CENTER_ACCOUNT_LEN: usize =
    ANCHOR_DISCRIMINATOR_LEN + PUBKEY_LEN + PUBKEY_LEN + 1 + PUBKEY_LEN + 2 + 2 + 1;
pub const LISTING_ACCOUNT_LEN: usize =
    ANCHOR_DISCRIMINATOR_LEN + PUBKEY_LEN + PUBKEY_LEN + PUBKEY_LEN + 8 + 8 + 1 + 8;
pub const OFFER_ACCOUNT_LEN: usize = LISTING_ACCOUNT_LEN;

/// Operator applied to the sale price and `payout_numeral` to obtain the
/// total reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PayoutOperation {
    #[serde(alias = "Multiple")]
    Multiply = 0,
    Divide = 1,
}

impl PayoutOperation {
    pub fn from_tag(tag: u8) -> Result<Self, CodecError> {
        match tag {
            0 => Ok(PayoutOperation::Multiply),
            1 => Ok(PayoutOperation::Divide),
            tag => Err(CodecError::UnknownVariant {
                type_name: <Self as WireCodec>::TYPE_NAME,
                tag,
            }),
        }
    }

    pub fn apply(self, price: u64, numeral: u16) -> Option<u64> {
        match self {
            PayoutOperation::Multiply => price.checked_mul(u64::from(numeral)),
            PayoutOperation::Divide => price.checked_div(u64::from(numeral)),
        }
    }
}

impl WireCodec for PayoutOperation {
    const TYPE_NAME: &'static str = "PayoutOperation";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        write_variant_tag(out, *self as u8);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        let start = *offset;
        let decoded = read_variant_tag(data, offset).and_then(Self::from_tag);
        if decoded.is_err() {
            *offset = start;
        }
        decoded
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RewardRules {
        /// Seller share of the total reward, in basis points.
        pub seller_reward_payout_basis_points: u16,
        pub mathematical_operand: PayoutOperation,
        pub payout_numeral: u16,
    }
}

impl RewardRules {
    /// Splits the reward earned by a sale at `listing_price` into
    /// `(seller_payout, buyer_payout)`.
    pub fn payouts(&self, listing_price: u64) -> Result<(u64, u64), CodecError> {
        let total = self
            .mathematical_operand
            .apply(listing_price, self.payout_numeral)
            .ok_or(CodecError::PayoutOverflow)?;

        let seller = u128::from(self.seller_reward_payout_basis_points)
            .checked_mul(u128::from(total))
            .map(|product| product / BASIS_POINTS_DENOMINATOR)
            .ok_or(CodecError::PayoutOverflow)?;
        let seller = u64::try_from(seller).map_err(|_| CodecError::PayoutOverflow)?;

        let buyer = total.checked_sub(seller).ok_or(CodecError::PayoutOverflow)?;
        Ok((seller, buyer))
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RewardCenter {
        /// Mint of the token paid out as rewards.
        pub token_mint: Address,
        pub auction_house: Address,
        pub reward_rules: RewardRules,
        pub bump: u8,
    }
}

impl RewardCenter {
    pub fn payouts(&self, listing_price: u64) -> Result<(u64, u64), CodecError> {
        self.reward_rules.payouts(listing_price)
    }
}

impl AccountRecord for RewardCenter {
    const DISCRIMINATOR: Discriminator = ACCT_REWARDCENTER;
    const ACCOUNT_LEN: usize = REWARD_CENTER_ACCOUNT_LEN;
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Listing {
        pub reward_center: Address,
        pub seller: Address,
        pub metadata: Address,
        pub price: u64,
        pub token_size: u64,
        pub bump: u8,
        pub created_at: i64,
    }
}

impl AccountRecord for Listing {
    const DISCRIMINATOR: Discriminator = ACCT_LISTING;
    const ACCOUNT_LEN: usize = LISTING_ACCOUNT_LEN;
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Offer {
        pub reward_center: Address,
        pub buyer: Address,
        pub metadata: Address,
        pub price: u64,
        pub token_size: u64,
        pub bump: u8,
        pub created_at: i64,
    }
}

impl AccountRecord for Offer {
    const DISCRIMINATOR: Discriminator = ACCT_OFFER;
    const ACCOUNT_LEN: usize = OFFER_ACCOUNT_LEN;
}
