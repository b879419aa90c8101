mod keyed;
mod raw_dict;
mod slot;

pub(crate) use keyed::PAD_LIMIT;
pub(crate) use raw_dict::{IntoIter, Iter, RawDict};
