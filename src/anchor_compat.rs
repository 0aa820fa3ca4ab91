/// Anchor discriminators and well-known addresses, precomputed by the build
/// script so no hashing or base58 decoding happens at runtime.
mod precomputed {
    include!(concat!(env!("OUT_DIR"), "/discriminators.rs"));
}

use solana_address::Address;

pub const ANCHOR_DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; ANCHOR_DISCRIMINATOR_LEN];

pub use precomputed::*;

pub const REWARD_CENTER_PROGRAM: Address = Address::new_from_array(precomputed::REWARD_CENTER_PROGRAM_ID);
pub const AUCTION_HOUSE_PROGRAM: Address = Address::new_from_array(precomputed::AUCTION_HOUSE_PROGRAM_ID);
pub const TOKEN_PROGRAM: Address = Address::new_from_array(precomputed::TOKEN_PROGRAM_ID);
pub const ASSOCIATED_TOKEN_PROGRAM: Address =
    Address::new_from_array(precomputed::ASSOCIATED_TOKEN_PROGRAM_ID);
pub const SYSTEM_PROGRAM: Address = Address::new_from_array(precomputed::SYSTEM_PROGRAM_ID);
pub const RENT_SYSVAR: Address = Address::new_from_array(precomputed::RENT_SYSVAR_ID);

pub fn instruction_discriminator(name: &str) -> Option<Discriminator> {
    match name {
        "create_reward_center" => Some(IX_CREATE_REWARD_CENTER),
        "edit_reward_center" => Some(IX_EDIT_REWARD_CENTER),
        "withdraw_reward_center_funds" => Some(IX_WITHDRAW_REWARD_CENTER_FUNDS),
        "create_listing" => Some(IX_CREATE_LISTING),
        "update_listing" => Some(IX_UPDATE_LISTING),
        "close_listing" => Some(IX_CLOSE_LISTING),
        "create_offer" => Some(IX_CREATE_OFFER),
        "close_offer" => Some(IX_CLOSE_OFFER),
        "buy_listing" => Some(IX_BUY_LISTING),
        "accept_offer" => Some(IX_ACCEPT_OFFER),
        _ => None,
    }
}

pub fn account_discriminator(name: &str) -> Option<Discriminator> {
    match name {
        "RewardCenter" => Some(ACCT_REWARDCENTER),
        "Listing" => Some(ACCT_LISTING),
        "Offer" => Some(ACCT_OFFER),
        _ => None,
    }
}

#[cfg(test)]
fn runtime_discriminator(namespace: &str, name: &str) -> Discriminator {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; ANCHOR_DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..ANCHOR_DISCRIMINATOR_LEN]);
    out
}
