//! Typed decoding of raw account buffers.
//!
//! Every account starts with its 8-byte Anchor discriminator; the record body
//! follows. Buffers are allocated at their full size on creation, so decoding
//! tolerates trailing bytes.

use crate::{
    anchor_compat::{Discriminator, ACCT_LISTING, ACCT_OFFER, ACCT_REWARDCENTER, ANCHOR_DISCRIMINATOR_LEN},
    codec::{TrailingBytesPolicy, WireCodec},
    errors::CodecError,
    primitives::read_fixed_bytes,
    state::{Listing, Offer, RewardCenter},
};

/// A persisted account type: a discriminator followed by a `WireCodec` body.
pub trait AccountRecord: WireCodec {
    const DISCRIMINATOR: Discriminator;
    /// Size the program allocates for this account, discriminator included.
    const ACCOUNT_LEN: usize;

    /// Discriminator ++ body, zero-padded to the allocated size.
    fn encode_account(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(Self::ACCOUNT_LEN);
        out.extend_from_slice(&Self::DISCRIMINATOR);
        self.encode(&mut out)?;
        if out.len() < Self::ACCOUNT_LEN {
            out.resize(Self::ACCOUNT_LEN, 0);
        }
        Ok(out)
    }
}

fn read_discriminator(raw: &[u8]) -> Result<Discriminator, CodecError> {
    let mut offset = 0usize;
    read_fixed_bytes::<ANCHOR_DISCRIMINATOR_LEN>(raw, &mut offset)
        .map_err(|err| err.in_field("AccountData", "discriminator"))
}

pub fn decode_account<T: AccountRecord>(raw: &[u8]) -> Result<T, CodecError> {
    decode_account_with(raw, TrailingBytesPolicy::Allow)
}

/// Like [`decode_account`] but with an explicit trailing-bytes policy, for
/// callers that hold an exact-size buffer.
pub fn decode_account_with<T: AccountRecord>(
    raw: &[u8],
    policy: TrailingBytesPolicy,
) -> Result<T, CodecError> {
    let found = read_discriminator(raw)?;
    if found != T::DISCRIMINATOR {
        tracing::debug!(expected = T::TYPE_NAME, ?found, "account discriminator mismatch");
        return Err(CodecError::WrongAccountType {
            expected: T::TYPE_NAME,
            found,
        });
    }
    T::from_bytes_with(&raw[ANCHOR_DISCRIMINATOR_LEN..], policy)
}

/// Any account owned by the reward-center program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardCenterAccount {
    RewardCenter(RewardCenter),
    Listing(Listing),
    Offer(Offer),
}

impl RewardCenterAccount {
    pub fn decode(raw: &[u8]) -> Result<Self, CodecError> {
        match read_discriminator(raw)? {
            ACCT_REWARDCENTER => decode_account(raw).map(RewardCenterAccount::RewardCenter),
            ACCT_LISTING => decode_account(raw).map(RewardCenterAccount::Listing),
            ACCT_OFFER => decode_account(raw).map(RewardCenterAccount::Offer),
            found => {
                tracing::debug!(?found, "unrecognized account discriminator");
                Err(CodecError::UnknownAccountType { found })
            }
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            RewardCenterAccount::RewardCenter(_) => RewardCenter::TYPE_NAME,
            RewardCenterAccount::Listing(_) => Listing::TYPE_NAME,
            RewardCenterAccount::Offer(_) => Offer::TYPE_NAME,
        }
    }

    pub fn encode_account(&self) -> Result<Vec<u8>, CodecError> {
        match self {
            RewardCenterAccount::RewardCenter(account) => account.encode_account(),
            RewardCenterAccount::Listing(account) => account.encode_account(),
            RewardCenterAccount::Offer(account) => account.encode_account(),
        }
    }
}
