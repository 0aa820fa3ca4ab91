//! Table-driven instruction assembly.
//!
//! An [`InstructionSchema`] lists the account roles of one instruction in wire
//! order. [`build`] resolves each role from caller bindings or the role's
//! default address and prefixes the argument bytes with the discriminator.

use std::collections::BTreeMap;

use solana_address::Address;
use solana_instruction::{AccountMeta, Instruction};

use crate::{
    anchor_compat::{Discriminator, ANCHOR_DISCRIMINATOR_LEN},
    errors::CodecError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRole {
    pub name: &'static str,
    pub writable: bool,
    pub signer: bool,
    /// Address used when the caller does not bind this role. A role with a
    /// default is optional.
    pub default: Option<Address>,
}

impl AccountRole {
    pub const fn readonly(name: &'static str) -> Self {
        Self {
            name,
            writable: false,
            signer: false,
            default: None,
        }
    }

    pub const fn writable(name: &'static str) -> Self {
        Self {
            name,
            writable: true,
            signer: false,
            default: None,
        }
    }

    pub const fn writable_signer(name: &'static str) -> Self {
        Self {
            name,
            writable: true,
            signer: true,
            default: None,
        }
    }

    pub const fn with_default(self, address: Address) -> Self {
        Self {
            default: Some(address),
            ..self
        }
    }

    pub const fn is_optional(&self) -> bool {
        self.default.is_some()
    }

    pub fn meta(&self, pubkey: Address) -> AccountMeta {
        AccountMeta {
            pubkey,
            is_signer: self.signer,
            is_writable: self.writable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionSchema {
    pub name: &'static str,
    pub discriminator: Discriminator,
    pub roles: &'static [AccountRole],
}

impl InstructionSchema {
    pub fn role(&self, name: &str) -> Option<&AccountRole> {
        self.roles.iter().find(|role| role.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.roles.iter().position(|role| role.name == name)
    }

    pub fn required_roles(&self) -> impl Iterator<Item = &AccountRole> {
        self.roles.iter().filter(|role| !role.is_optional())
    }
}

/// Role name to address bindings supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBindings {
    entries: BTreeMap<String, Address>,
}

impl AccountBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `role`, replacing any previous binding.
    pub fn bind(&mut self, role: impl Into<String>, address: Address) -> &mut Self {
        self.entries.insert(role.into(), address);
        self
    }

    pub fn with(mut self, role: impl Into<String>, address: Address) -> Self {
        self.bind(role, address);
        self
    }

    /// Binds `role` only when an address is given.
    pub fn with_optional(self, role: impl Into<String>, address: Option<Address>) -> Self {
        match address {
            Some(address) => self.with(role, address),
            None => self,
        }
    }

    pub fn get(&self, role: &str) -> Option<&Address> {
        self.entries.get(role)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Address)> for AccountBindings {
    fn from_iter<I: IntoIterator<Item = (K, Address)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (role, address) in iter {
            bindings.bind(role, address);
        }
        bindings
    }
}

/// Resolves the fixed account list of `schema` from `bindings`.
pub fn resolve_accounts(
    schema: &InstructionSchema,
    bindings: &AccountBindings,
) -> Result<Vec<AccountMeta>, CodecError> {
    if let Some(unknown) = bindings.roles().find(|name| schema.role(name).is_none()) {
        return Err(CodecError::UnknownAccountRole {
            instruction: schema.name,
            role: unknown.to_string(),
        });
    }

    schema
        .roles
        .iter()
        .map(|role| {
            let pubkey = match (bindings.get(role.name), role.default) {
                (Some(bound), _) => *bound,
                (None, Some(default)) => {
                    tracing::trace!(instruction = schema.name, role = role.name, "using default address");
                    default
                }
                (None, None) => {
                    return Err(CodecError::MissingAccount {
                        instruction: schema.name,
                        role: role.name,
                    })
                }
            };
            Ok(role.meta(pubkey))
        })
        .collect()
}

/// Assembles an instruction: the schema's accounts in role order followed by
/// `remaining`, with data `discriminator ++ args`.
pub fn build(
    schema: &InstructionSchema,
    bindings: &AccountBindings,
    args: &[u8],
    remaining: &[AccountMeta],
    program_id: Address,
) -> Result<Instruction, CodecError> {
    let mut accounts = resolve_accounts(schema, bindings)?;
    accounts.extend_from_slice(remaining);

    let mut data = Vec::with_capacity(ANCHOR_DISCRIMINATOR_LEN + args.len());
    data.extend_from_slice(&schema.discriminator);
    data.extend_from_slice(args);

    tracing::debug!(
        instruction = schema.name,
        accounts = accounts.len(),
        remaining = remaining.len(),
        data_len = data.len(),
        "built instruction"
    );

    Ok(Instruction {
        program_id,
        accounts,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_PROGRAM: Address = Address::new_from_array([7u8; 32]);

    const ROLES: &[AccountRole] = &[
        AccountRole::writable_signer("payer"),
        AccountRole::readonly("target"),
        AccountRole::readonly("program").with_default(DEFAULT_PROGRAM),
    ];

    const SCHEMA: InstructionSchema = InstructionSchema {
        name: "ping",
        discriminator: [1, 2, 3, 4, 5, 6, 7, 8],
        roles: ROLES,
    };

    fn addr(byte: u8) -> Address {
        Address::new_from_array([byte; 32])
    }

    fn bindings() -> AccountBindings {
        AccountBindings::new().with("payer", addr(1)).with("target", addr(2))
    }

    #[test]
    fn zero_length_args_give_bare_discriminator() {
        let ix = build(&SCHEMA, &bindings(), &[], &[], addr(9)).unwrap();
        assert_eq!(ix.data, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ix.program_id, addr(9));
    }

    #[test]
    fn accounts_follow_role_order_with_flags() {
        let ix = build(&SCHEMA, &bindings(), &[0xAA], &[], addr(9)).unwrap();
        assert_eq!(ix.data, vec![1, 2, 3, 4, 5, 6, 7, 8, 0xAA]);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(addr(1), true),
                AccountMeta::new_readonly(addr(2), false),
                AccountMeta::new_readonly(DEFAULT_PROGRAM, false),
            ]
        );
    }

    #[test]
    fn bound_address_overrides_default() {
        let ix = build(&SCHEMA, &bindings().with("program", addr(3)), &[], &[], addr(9)).unwrap();
        assert_eq!(ix.accounts[2].pubkey, addr(3));
    }

    #[test]
    fn missing_required_role_is_reported() {
        let only_payer = AccountBindings::new().with("payer", addr(1));
        assert_eq!(
            build(&SCHEMA, &only_payer, &[], &[], addr(9)),
            Err(CodecError::MissingAccount { instruction: "ping", role: "target" })
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(
            build(&SCHEMA, &bindings().with("tagret", addr(4)), &[], &[], addr(9)),
            Err(CodecError::UnknownAccountRole { instruction: "ping", role: "tagret".to_string() })
        );
    }

    #[test]
    fn remaining_accounts_keep_order_and_flags() {
        let remaining = [
            AccountMeta::new_readonly(addr(20), true),
            AccountMeta::new(addr(21), false),
        ];
        let ix = build(&SCHEMA, &bindings(), &[], &remaining, addr(9)).unwrap();
        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(&ix.accounts[3..], &remaining);
    }

    #[test]
    fn bindings_collect_from_pairs() {
        let collected: AccountBindings = [("payer", addr(1)), ("target", addr(2))].into_iter().collect();
        assert_eq!(collected, bindings());
        assert_eq!(collected.len(), 2);
        assert!(AccountBindings::new().with_optional("program", None).is_empty());
    }

    #[test]
    fn schema_lookups() {
        assert_eq!(SCHEMA.position("program"), Some(2));
        assert!(SCHEMA.role("program").unwrap().is_optional());
        assert_eq!(SCHEMA.required_roles().count(), 2);
    }
}
