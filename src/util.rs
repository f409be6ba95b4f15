use bytemuck::{checked::pod_read_unaligned, Pod};

use crate::BmpError;
use core::mem::size_of;

/// Splits a `T` off the front of the bytes, along with the remaining bytes.
#[inline]
pub(crate) fn try_pull_pod<T: Pod>(bytes: &[u8]) -> Result<(T, &[u8]), BmpError> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    let a: T = pod_read_unaligned(head);
    Ok((a, tail))
  } else {
    Err(BmpError::InsufficientBytes)
  }
}
