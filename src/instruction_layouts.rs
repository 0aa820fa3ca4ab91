use crate::{
    anchor_compat::*,
    codec::WireCodec,
    errors::CodecError,
    primitives::read_fixed_bytes,
    state::RewardRules,
    wire_struct,
};

pub const ACCEPT_OFFER_IX_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + 5;
pub const CLOSE_LISTING_IX_LEN: usize = ANCHOR_DISCRIMINATOR_LEN;
pub const UPDATE_LISTING_IX_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + 8;
pub const WITHDRAW_REWARD_CENTER_FUNDS_IX_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + 8;
pub const CLOSE_OFFER_IX_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + 1;
pub const REWARD_CENTER_RULES_IX_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + 5;

/// Argument payload of one program instruction. Instruction data is the
/// instruction discriminator followed by the encoded arguments.
pub trait InstructionArgs: WireCodec {
    const INSTRUCTION: &'static str;
    const DISCRIMINATOR: Discriminator;

    fn instruction_data(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(ANCHOR_DISCRIMINATOR_LEN + 8);
        out.extend_from_slice(&Self::DISCRIMINATOR);
        self.encode(&mut out)?;
        Ok(out)
    }

    /// Parses full instruction data. Leftover bytes are rejected.
    fn parse(ix_data: &[u8]) -> Result<Self, CodecError> {
        let found = read_instruction_discriminator(ix_data)?;
        if found != Self::DISCRIMINATOR {
            return Err(CodecError::WrongInstruction {
                expected: Self::INSTRUCTION,
                found,
            });
        }
        Self::from_bytes(&ix_data[ANCHOR_DISCRIMINATOR_LEN..])
    }
}

pub fn read_instruction_discriminator(ix_data: &[u8]) -> Result<Discriminator, CodecError> {
    let mut offset = 0usize;
    read_fixed_bytes::<ANCHOR_DISCRIMINATOR_LEN>(ix_data, &mut offset)
        .map_err(|err| err.in_field("InstructionData", "discriminator"))
}

macro_rules! instruction_args {
    ($ty:ty, $name:literal, $disc:expr) => {
        impl InstructionArgs for $ty {
            const INSTRUCTION: &'static str = $name;
            const DISCRIMINATOR: Discriminator = $disc;
        }
    };
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AcceptOfferParams {
        pub escrow_payment_bump: u8,
        pub free_trade_state_bump: u8,
        pub program_as_signer_bump: u8,
        pub seller_trade_state_bump: u8,
        pub buyer_trade_state_bump: u8,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CloseListingArgs {}
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct UpdateListingParams {
        pub new_price: u64,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WithdrawRewardCenterFundsParams {
        pub withdrawal_amount: u64,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CloseOfferParams {
        pub escrow_payment_bump: u8,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CreateRewardCenterParams {
        pub reward_rules: RewardRules,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EditRewardCenterParams {
        pub reward_rules: RewardRules,
    }
}

instruction_args!(AcceptOfferParams, "accept_offer", IX_ACCEPT_OFFER);
instruction_args!(CloseListingArgs, "close_listing", IX_CLOSE_LISTING);
instruction_args!(UpdateListingParams, "update_listing", IX_UPDATE_LISTING);
instruction_args!(
    WithdrawRewardCenterFundsParams,
    "withdraw_reward_center_funds",
    IX_WITHDRAW_REWARD_CENTER_FUNDS
);
instruction_args!(CloseOfferParams, "close_offer", IX_CLOSE_OFFER);
instruction_args!(CreateRewardCenterParams, "create_reward_center", IX_CREATE_REWARD_CENTER);
instruction_args!(EditRewardCenterParams, "edit_reward_center", IX_EDIT_REWARD_CENTER);

/// Instruction data of any instruction whose argument layout is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardCenterInstruction {
    AcceptOffer(AcceptOfferParams),
    CloseListing,
    UpdateListing(UpdateListingParams),
    WithdrawRewardCenterFunds(WithdrawRewardCenterFundsParams),
    CloseOffer(CloseOfferParams),
    CreateRewardCenter(CreateRewardCenterParams),
    EditRewardCenter(EditRewardCenterParams),
}

impl RewardCenterInstruction {
    pub fn parse(ix_data: &[u8]) -> Result<Self, CodecError> {
        match read_instruction_discriminator(ix_data)? {
            IX_ACCEPT_OFFER => AcceptOfferParams::parse(ix_data).map(Self::AcceptOffer),
            IX_CLOSE_LISTING => CloseListingArgs::parse(ix_data).map(|_| Self::CloseListing),
            IX_UPDATE_LISTING => UpdateListingParams::parse(ix_data).map(Self::UpdateListing),
            IX_WITHDRAW_REWARD_CENTER_FUNDS => {
                WithdrawRewardCenterFundsParams::parse(ix_data).map(Self::WithdrawRewardCenterFunds)
            }
            IX_CLOSE_OFFER => CloseOfferParams::parse(ix_data).map(Self::CloseOffer),
            IX_CREATE_REWARD_CENTER => CreateRewardCenterParams::parse(ix_data).map(Self::CreateRewardCenter),
            IX_EDIT_REWARD_CENTER => EditRewardCenterParams::parse(ix_data).map(Self::EditRewardCenter),
            found => Err(CodecError::WrongInstruction {
                expected: "reward center instruction",
                found,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AcceptOffer(_) => AcceptOfferParams::INSTRUCTION,
            Self::CloseListing => CloseListingArgs::INSTRUCTION,
            Self::UpdateListing(_) => UpdateListingParams::INSTRUCTION,
            Self::WithdrawRewardCenterFunds(_) => WithdrawRewardCenterFundsParams::INSTRUCTION,
            Self::CloseOffer(_) => CloseOfferParams::INSTRUCTION,
            Self::CreateRewardCenter(_) => CreateRewardCenterParams::INSTRUCTION,
            Self::EditRewardCenter(_) => EditRewardCenterParams::INSTRUCTION,
        }
    }
}
