use std::{env, fmt::Write as _, fs, path::PathBuf};

use sha2::{Digest, Sha256};

const INSTRUCTIONS: &[&str] = &[
    "create_reward_center",
    "edit_reward_center",
    "withdraw_reward_center_funds",
    "create_listing",
    "update_listing",
    "close_listing",
    "create_offer",
    "close_offer",
    "buy_listing",
    "accept_offer",
];

const ACCOUNTS: &[&str] = &["RewardCenter", "Listing", "Offer"];

const ADDRESSES: &[(&str, &str)] = &[
    ("REWARD_CENTER_PROGRAM_ID", "RwDDvPp7ta9qqUwxbBfShsNreBaSsKvFcHzMxfBC3Ki"),
    ("AUCTION_HOUSE_PROGRAM_ID", "hausS13jsjafwWwGqZTUQRmWyvyxn9EQpqMwV1PBBmk"),
    ("TOKEN_PROGRAM_ID", "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
    ("ASSOCIATED_TOKEN_PROGRAM_ID", "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"),
    ("SYSTEM_PROGRAM_ID", "11111111111111111111111111111111"),
    ("RENT_SYSVAR_ID", "SysvarRent111111111111111111111111111111111"),
];

fn discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut out = String::new();
    for name in INSTRUCTIONS {
        let bytes = discriminator("global", name);
        writeln!(out, "pub const IX_{}: [u8; 8] = {:?};", name.to_uppercase(), bytes).unwrap();
    }
    for name in ACCOUNTS {
        let bytes = discriminator("account", name);
        writeln!(out, "pub const ACCT_{}: [u8; 8] = {:?};", name.to_uppercase(), bytes).unwrap();
    }
    for (constant, encoded) in ADDRESSES {
        let decoded = bs58::decode(encoded).into_vec().expect("valid base58 address");
        assert_eq!(decoded.len(), 32, "{constant} must decode to 32 bytes");
        writeln!(out, "pub const {constant}: [u8; 32] = {:?};", decoded).unwrap();
    }

    let dest = PathBuf::from(env::var("OUT_DIR").unwrap()).join("discriminators.rs");
    fs::write(dest, out).unwrap();
}
