//! Struct and tagged-union composition over the primitive layer.
//!
//! Layouts follow Borsh as used by Anchor programs: fields are concatenated in
//! declaration order with no padding, enums are a one-byte tag followed by the
//! variant payload, `Option` is a one-byte tag and `Vec` a `u32` length prefix.

use solana_address::Address;

use crate::{errors::CodecError, primitives::*};

/// How a top-level decode treats bytes left over after the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytesPolicy {
    /// Account buffers are allocated up front and may be larger than their
    /// logical content.
    Allow,
    #[default]
    Reject,
}

impl TrailingBytesPolicy {
    pub fn check(self, type_name: &'static str, extra: usize) -> Result<(), CodecError> {
        if extra == 0 {
            return Ok(());
        }
        match self {
            TrailingBytesPolicy::Allow => {
                tracing::debug!(type_name, extra, "ignoring trailing bytes");
                Ok(())
            }
            TrailingBytesPolicy::Reject => Err(CodecError::TrailingBytes { type_name, extra }),
        }
    }
}

pub trait WireCodec: Sized {
    const TYPE_NAME: &'static str;

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError>;

    /// Decodes one value at `offset`. On error `offset` is left where it was.
    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError>;

    fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        self.encode(&mut out)?;
        Ok(out)
    }

    fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        Self::from_bytes_with(data, TrailingBytesPolicy::Reject)
    }

    fn from_bytes_with(data: &[u8], policy: TrailingBytesPolicy) -> Result<Self, CodecError> {
        let mut offset = 0usize;
        let value = Self::decode(data, &mut offset)?;
        policy.check(Self::TYPE_NAME, data.len() - offset)?;
        Ok(value)
    }
}

/// Declares a struct whose wire layout is its fields in declaration order.
///
/// Appending a field is the only compatible change; reordering or inserting
/// changes the byte layout.
#[macro_export]
macro_rules! wire_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $name {
            /// Field names in wire order.
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];
        }

        impl $crate::codec::WireCodec for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            #[allow(unused_variables)]
            fn encode(
                &self,
                out: &mut ::std::vec::Vec<u8>,
            ) -> ::core::result::Result<(), $crate::errors::CodecError> {
                $(
                    $crate::codec::WireCodec::encode(&self.$field, out)?;
                )*
                Ok(())
            }

            #[allow(unused_variables)]
            fn decode(
                data: &[u8],
                offset: &mut usize,
            ) -> ::core::result::Result<Self, $crate::errors::CodecError> {
                let start = *offset;
                let decoded = (|| -> ::core::result::Result<Self, $crate::errors::CodecError> {
                    Ok(Self {
                        $(
                            $field: <$ty as $crate::codec::WireCodec>::decode(data, offset)
                                .map_err(|err| err.in_field(stringify!($name), stringify!($field)))?,
                        )*
                    })
                })();
                if decoded.is_err() {
                    *offset = start;
                }
                decoded
            }
        }
    };
}

pub fn write_variant_tag(out: &mut Vec<u8>, tag: u8) {
    write_u8(out, tag);
}

pub fn read_variant_tag(data: &[u8], offset: &mut usize) -> Result<u8, CodecError> {
    read_u8(data, offset)
}

impl WireCodec for u8 {
    const TYPE_NAME: &'static str = "u8";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        write_u8(out, *self);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        read_u8(data, offset)
    }
}

impl WireCodec for u16 {
    const TYPE_NAME: &'static str = "u16";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        write_u16(out, *self);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        read_u16(data, offset)
    }
}

impl WireCodec for u32 {
    const TYPE_NAME: &'static str = "u32";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        write_u32(out, *self);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        read_u32(data, offset)
    }
}

impl WireCodec for u64 {
    const TYPE_NAME: &'static str = "u64";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        write_u64(out, *self);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        read_u64(data, offset)
    }
}

impl WireCodec for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        write_i64(out, *self);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        read_i64(data, offset)
    }
}

impl WireCodec for bool {
    const TYPE_NAME: &'static str = "bool";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        write_u8(out, *self as u8);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        read_bool(data, offset)
    }
}

impl<const N: usize> WireCodec for [u8; N] {
    const TYPE_NAME: &'static str = "byte array";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.extend_from_slice(self);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        read_fixed_bytes::<N>(data, offset)
    }
}

impl WireCodec for Address {
    const TYPE_NAME: &'static str = "Address";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        let bytes: [u8; PUBKEY_LEN] = self.to_bytes();
        out.extend_from_slice(&bytes);
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        read_address(data, offset)
    }
}

impl<T: WireCodec> WireCodec for Option<T> {
    const TYPE_NAME: &'static str = "Option";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        match self {
            None => {
                write_u8(out, 0);
                Ok(())
            }
            Some(value) => {
                write_u8(out, 1);
                value.encode(out)
            }
        }
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        let start = *offset;
        let decoded = match read_u8(data, offset)? {
            0 => Ok(None),
            1 => T::decode(data, offset).map(Some),
            tag => Err(CodecError::InvalidOptionTag(tag)),
        };
        if decoded.is_err() {
            *offset = start;
        }
        decoded
    }
}

impl<T: WireCodec> WireCodec for Vec<T> {
    const TYPE_NAME: &'static str = "Vec";

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        let len = u32::try_from(self.len()).map_err(|_| CodecError::ValueOutOfRange {
            value: self.len() as u64,
            width: IntWidth::U32,
        })?;
        write_u32(out, len);
        for item in self {
            item.encode(out)?;
        }
        Ok(())
    }

    fn decode(data: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        let start = *offset;
        let len = read_u32(data, offset)? as usize;
        // The prefix is untrusted; never reserve more than the buffer could hold.
        let mut items = Vec::with_capacity(len.min(data.len() - *offset));
        for _ in 0..len {
            match T::decode(data, offset) {
                Ok(item) => items.push(item),
                Err(err) => {
                    *offset = start;
                    return Err(err);
                }
            }
        }
        Ok(items)
    }
}
