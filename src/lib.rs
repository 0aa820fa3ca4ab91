pub mod account_decoder;
pub mod anchor_compat;
pub mod codec;
pub mod config;
pub mod errors;
pub mod instruction_builder;
pub mod instruction_layouts;
pub mod instructions;
pub mod primitives;
pub mod schema;
pub mod state;

pub use account_decoder::{decode_account, AccountRecord, RewardCenterAccount};
pub use codec::{TrailingBytesPolicy, WireCodec};
pub use errors::{CodecError, ConfigError};
pub use instruction_builder::{build, AccountBindings, AccountRole, InstructionSchema};
pub use instruction_layouts::{InstructionArgs, RewardCenterInstruction};
pub use state::{Listing, Offer, PayoutOperation, RewardCenter, RewardRules};
