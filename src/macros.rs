macro_rules! impl_kind {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$inner:ident $($args:tt)*])*
                $variant:ident { bit: $bit:expr, align: $align:expr, size: $size:expr },
            )+
        }
    ) => {
        $(#[$outer])*
        pub enum $name {
            $(
                $(#[$inner $($args)*])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the field type for the given presence bit.
            pub fn from_bit(bit: u32) -> Option<Self> {
                match bit {
                    $(
                        $bit => Some(Self::$variant),
                    )+
                    _ => None,
                }
            }

            /// Returns the presence bit of this field type.
            pub fn bit(&self) -> u32 {
                match self {
                    $(
                        Self::$variant => $bit,
                    )+
                }
            }
        }

        impl crate::field::Kind for $name {
            fn align(&self) -> usize {
                match self {
                    $(
                        Self::$variant => $align,
                    )+
                }
            }

            fn size(&self) -> usize {
                match self {
                    $(
                        Self::$variant => $size,
                    )+
                }
            }
        }
    };
}

macro_rules! impl_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident: $ty:ty {
            $(
                $(#[$inner:ident $($args:tt)*])*
                $variant:ident = $value:expr,
            )+
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $(
                $(#[$inner $($args)*])*
                $variant = $value,
            )+
        }

        impl $name {
            pub(crate) fn from_bits(bits: $ty) -> Option<Self> {
                match bits {
                    $(
                        $value => Some(Self::$variant),
                    )+
                    _ => None,
                }
            }
        }
    };
}

macro_rules! impl_newtype {
    (
        $(#[$outer:meta])*
        pub struct $name:ident(pub $ty:ty);
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub $ty);

        impl crate::bytes::FromBytes for $name {
            fn from_bytes(bytes: &mut crate::bytes::Bytes) -> crate::Result<Self> {
                Ok(Self(bytes.read()?))
            }
        }

        impl $name {
            /// Consumes this field and returns the underlying value.
            #[inline]
            pub const fn into_inner(self) -> $ty {
                self.0
            }
        }
    };
}

macro_rules! impl_bitflags {
    (
        $(#[$outer:meta])*
        pub struct $name:ident: $ty:ty {
            $(
                $(#[$inner:ident $($args:tt)*])*
                const $flag:ident = $value:expr;
            )+
        }
    ) => {
        bitflags::bitflags! {
            $(#[$outer])*
            pub struct $name: $ty {
                $(
                    $(#[$inner $($args)*])*
                    const $flag = $value;
                )+
            }
        }

        impl crate::bytes::FromBytes for $name {
            fn from_bytes(bytes: &mut crate::bytes::Bytes) -> crate::Result<Self> {
                Ok(Self::from_bits_truncate(bytes.read()?))
            }
        }

        impl $name {
            /// Consumes this field and returns the underlying value.
            #[inline]
            pub const fn into_inner(self) -> $ty {
                self.bits()
            }
        }
    };
}
