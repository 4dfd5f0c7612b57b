//! A private prelude module.

pub(crate) use crate::bytes::{Bytes, FromBytes};
pub(crate) use crate::error::ResultExt;
pub(crate) use crate::util::BoolExt;
pub(crate) use crate::{Error, Result};

#[cfg(test)]
pub(crate) use crate::hex::FromHex;
