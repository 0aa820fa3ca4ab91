//! Account role tables for the instructions whose account ordering is part of
//! the program's published interface.

use crate::{
    anchor_compat::*,
    instruction_builder::{AccountRole, InstructionSchema},
};

pub const ACCEPT_OFFER_ROLES: &[AccountRole] = &[
    AccountRole::writable("buyer"),
    AccountRole::writable("buyer_reward_token_account"),
    AccountRole::writable("seller"),
    AccountRole::writable("seller_reward_token_account"),
    AccountRole::writable("offer"),
    AccountRole::writable("token_account"),
    AccountRole::readonly("token_mint"),
    AccountRole::readonly("metadata"),
    AccountRole::readonly("treasury_mint"),
    AccountRole::writable("seller_payment_receipt_account"),
    AccountRole::writable("buyer_receipt_token_account"),
    AccountRole::readonly("authority"),
    AccountRole::writable("escrow_payment_account"),
    AccountRole::readonly("auction_house"),
    AccountRole::writable("auction_house_fee_account"),
    AccountRole::writable("auction_house_treasury"),
    AccountRole::writable("buyer_trade_state"),
    AccountRole::writable("seller_trade_state"),
    AccountRole::writable("free_seller_trade_state"),
    AccountRole::readonly("reward_center"),
    AccountRole::writable("reward_center_reward_token_account"),
    AccountRole::readonly("ah_auctioneer_pda"),
    AccountRole::readonly("program_as_signer"),
    AccountRole::readonly("auction_house_program"),
    AccountRole::readonly("token_program").with_default(TOKEN_PROGRAM),
    AccountRole::readonly("system_program").with_default(SYSTEM_PROGRAM),
    AccountRole::readonly("ata_program").with_default(ASSOCIATED_TOKEN_PROGRAM),
    AccountRole::readonly("rent").with_default(RENT_SYSVAR),
];

pub const CLOSE_LISTING_ROLES: &[AccountRole] = &[
    AccountRole::writable_signer("wallet"),
    AccountRole::writable("listing"),
    AccountRole::readonly("metadata"),
    AccountRole::writable("token_account"),
    AccountRole::readonly("token_mint"),
    AccountRole::readonly("authority"),
    AccountRole::readonly("reward_center"),
    AccountRole::readonly("auction_house"),
    AccountRole::writable("auction_house_fee_account"),
    AccountRole::writable("trade_state"),
    AccountRole::readonly("ah_auctioneer_pda"),
    AccountRole::readonly("token_program").with_default(TOKEN_PROGRAM),
    AccountRole::readonly("auction_house_program"),
];

pub const UPDATE_LISTING_ROLES: &[AccountRole] = &[
    AccountRole::writable_signer("wallet"),
    AccountRole::writable("listing"),
    AccountRole::readonly("reward_center"),
    AccountRole::readonly("auction_house"),
    AccountRole::readonly("metadata"),
    AccountRole::readonly("token_account"),
    AccountRole::readonly("auction_house_program"),
];

pub const WITHDRAW_REWARD_CENTER_FUNDS_ROLES: &[AccountRole] = &[
    AccountRole::writable_signer("wallet"),
    AccountRole::writable("reward_center_reward_token_account"),
    AccountRole::writable("destination_reward_token_account"),
    AccountRole::readonly("reward_center"),
    AccountRole::readonly("auction_house"),
    AccountRole::readonly("token_program").with_default(TOKEN_PROGRAM),
];

pub const ACCEPT_OFFER: InstructionSchema = InstructionSchema {
    name: "accept_offer",
    discriminator: IX_ACCEPT_OFFER,
    roles: ACCEPT_OFFER_ROLES,
};

pub const CLOSE_LISTING: InstructionSchema = InstructionSchema {
    name: "close_listing",
    discriminator: IX_CLOSE_LISTING,
    roles: CLOSE_LISTING_ROLES,
};

pub const UPDATE_LISTING: InstructionSchema = InstructionSchema {
    name: "update_listing",
    discriminator: IX_UPDATE_LISTING,
    roles: UPDATE_LISTING_ROLES,
};

pub const WITHDRAW_REWARD_CENTER_FUNDS: InstructionSchema = InstructionSchema {
    name: "withdraw_reward_center_funds",
    discriminator: IX_WITHDRAW_REWARD_CENTER_FUNDS,
    roles: WITHDRAW_REWARD_CENTER_FUNDS_ROLES,
};

pub static SCHEMAS: [InstructionSchema; 4] = [
    ACCEPT_OFFER,
    CLOSE_LISTING,
    UPDATE_LISTING,
    WITHDRAW_REWARD_CENTER_FUNDS,
];

pub fn schema_by_name(name: &str) -> Option<&'static InstructionSchema> {
    SCHEMAS.iter().find(|schema| schema.name == name)
}

pub fn schema_by_discriminator(discriminator: &Discriminator) -> Option<&'static InstructionSchema> {
    SCHEMAS
        .iter()
        .find(|schema| &schema.discriminator == discriminator)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn role_counts() {
        assert_eq!(ACCEPT_OFFER.roles.len(), 28);
        assert_eq!(CLOSE_LISTING.roles.len(), 13);
        assert_eq!(UPDATE_LISTING.roles.len(), 7);
        assert_eq!(WITHDRAW_REWARD_CENTER_FUNDS.roles.len(), 6);
    }

    #[test]
    fn role_names_are_unique_per_instruction() {
        for schema in &SCHEMAS {
            let names: HashSet<_> = schema.roles.iter().map(|role| role.name).collect();
            assert_eq!(names.len(), schema.roles.len(), "duplicate role in {}", schema.name);
        }
    }

    #[test]
    fn schema_discriminators_match_names() {
        for schema in &SCHEMAS {
            assert_eq!(instruction_discriminator(schema.name), Some(schema.discriminator));
        }
    }

    #[test]
    fn accept_offer_defaults_trail_the_role_list() {
        let optional: Vec<_> = ACCEPT_OFFER
            .roles
            .iter()
            .filter(|role| role.is_optional())
            .map(|role| role.name)
            .collect();
        assert_eq!(optional, ["token_program", "system_program", "ata_program", "rent"]);
        assert_eq!(ACCEPT_OFFER.position("rent"), Some(27));
        assert!(ACCEPT_OFFER.roles.iter().all(|role| !role.signer));
    }

    #[test]
    fn signers_are_the_wallet() {
        for schema in [CLOSE_LISTING, UPDATE_LISTING, WITHDRAW_REWARD_CENTER_FUNDS] {
            let signers: Vec<_> = schema.roles.iter().filter(|role| role.signer).map(|role| role.name).collect();
            assert_eq!(signers, ["wallet"]);
            assert_eq!(schema.position("wallet"), Some(0));
        }
    }

    #[test]
    fn lookup_by_name_and_discriminator() {
        assert_eq!(schema_by_name("update_listing"), Some(&UPDATE_LISTING));
        assert_eq!(schema_by_discriminator(&IX_CLOSE_LISTING), Some(&CLOSE_LISTING));
        assert_eq!(schema_by_name("create_listing"), None);
        assert_eq!(schema_by_discriminator(&IX_BUY_LISTING), None);
    }
}
