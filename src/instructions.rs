//! Typed builders for reward-center instructions.
//!
//! Each builder fills an [`AccountBindings`] from a typed accounts struct and
//! hands it to the table-driven [`build`]. Roles with a well-known default
//! (token program, system program, ...) are `Option` fields.

use solana_address::Address;
use solana_instruction::{AccountMeta, Instruction};

use crate::{
    anchor_compat::REWARD_CENTER_PROGRAM,
    codec::WireCodec,
    errors::CodecError,
    instruction_builder::{build, AccountBindings, InstructionSchema},
    instruction_layouts::{
        AcceptOfferParams, CloseListingArgs, InstructionArgs, UpdateListingParams,
        WithdrawRewardCenterFundsParams,
    },
    schema,
};

/// Accounts of one instruction, bound by role name.
pub trait InstructionAccounts {
    type Args: InstructionArgs;
    const SCHEMA: InstructionSchema;

    fn bindings(&self) -> AccountBindings;
}

macro_rules! instruction_accounts {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $schema:path, $args:ty {
            $($field:ident),* $(,)?
        }
        optional {
            $($opt:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: Address,)*
            $(pub $opt: Option<Address>,)*
        }

        impl InstructionAccounts for $name {
            type Args = $args;
            const SCHEMA: InstructionSchema = $schema;

            fn bindings(&self) -> AccountBindings {
                AccountBindings::new()
                    $(.with(stringify!($field), self.$field))*
                    $(.with_optional(stringify!($opt), self.$opt))*
            }
        }
    };
}

instruction_accounts! {
    pub struct AcceptOfferAccounts: schema::ACCEPT_OFFER, AcceptOfferParams {
        buyer,
        buyer_reward_token_account,
        seller,
        seller_reward_token_account,
        offer,
        token_account,
        token_mint,
        metadata,
        treasury_mint,
        seller_payment_receipt_account,
        buyer_receipt_token_account,
        authority,
        escrow_payment_account,
        auction_house,
        auction_house_fee_account,
        auction_house_treasury,
        buyer_trade_state,
        seller_trade_state,
        free_seller_trade_state,
        reward_center,
        reward_center_reward_token_account,
        ah_auctioneer_pda,
        program_as_signer,
        auction_house_program,
    }
    optional {
        token_program,
        system_program,
        ata_program,
        rent,
    }
}

instruction_accounts! {
    pub struct CloseListingAccounts: schema::CLOSE_LISTING, CloseListingArgs {
        wallet,
        listing,
        metadata,
        token_account,
        token_mint,
        authority,
        reward_center,
        auction_house,
        auction_house_fee_account,
        trade_state,
        ah_auctioneer_pda,
        auction_house_program,
    }
    optional {
        token_program,
    }
}

instruction_accounts! {
    pub struct UpdateListingAccounts: schema::UPDATE_LISTING, UpdateListingParams {
        wallet,
        listing,
        reward_center,
        auction_house,
        metadata,
        token_account,
        auction_house_program,
    }
    optional {}
}

instruction_accounts! {
    pub struct WithdrawRewardCenterFundsAccounts:
        schema::WITHDRAW_REWARD_CENTER_FUNDS, WithdrawRewardCenterFundsParams {
        wallet,
        reward_center_reward_token_account,
        destination_reward_token_account,
        reward_center,
        auction_house,
    }
    optional {
        token_program,
    }
}

/// Builds an instruction for `program_id` from typed accounts and arguments.
pub fn build_instruction<A: InstructionAccounts>(
    accounts: &A,
    args: &A::Args,
    remaining: &[AccountMeta],
    program_id: Address,
) -> Result<Instruction, CodecError> {
    let args = args.to_bytes()?;
    build(&A::SCHEMA, &accounts.bindings(), &args, remaining, program_id)
}

/// `remaining` carries the NFT creator accounts that receive royalties.
pub fn accept_offer(
    accounts: &AcceptOfferAccounts,
    params: AcceptOfferParams,
    remaining: &[AccountMeta],
) -> Result<Instruction, CodecError> {
    build_instruction(accounts, &params, remaining, REWARD_CENTER_PROGRAM)
}

pub fn close_listing(accounts: &CloseListingAccounts) -> Result<Instruction, CodecError> {
    build_instruction(accounts, &CloseListingArgs {}, &[], REWARD_CENTER_PROGRAM)
}

pub fn update_listing(
    accounts: &UpdateListingAccounts,
    params: UpdateListingParams,
) -> Result<Instruction, CodecError> {
    build_instruction(accounts, &params, &[], REWARD_CENTER_PROGRAM)
}

pub fn withdraw_reward_center_funds(
    accounts: &WithdrawRewardCenterFundsAccounts,
    params: WithdrawRewardCenterFundsParams,
) -> Result<Instruction, CodecError> {
    build_instruction(accounts, &params, &[], REWARD_CENTER_PROGRAM)
}
