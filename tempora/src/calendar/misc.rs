// FIXME(stable): Constant traits

pub(crate) const fn booli64(val: bool) -> i64 {
  val as i64
}

pub(crate) const fn boolusize(val: bool) -> usize {
  val as usize
}

pub(crate) const fn i32i64(val: i32) -> i64 {
  val as i64
}

pub(crate) const fn i64i128(val: i64) -> i128 {
  val as i128
}

pub(crate) const fn u8i32(val: u8) -> i32 {
  val as i32
}

pub(crate) const fn u8i64(val: u8) -> i64 {
  val as i64
}

pub(crate) const fn u8u16(val: u8) -> u16 {
  val as u16
}

pub(crate) const fn u8u64(val: u8) -> u64 {
  val as u64
}

pub(crate) const fn u8usize(val: u8) -> usize {
  val as usize
}

pub(crate) const fn u16i32(val: u16) -> i32 {
  val as i32
}

pub(crate) const fn u16i64(val: u16) -> i64 {
  val as i64
}

pub(crate) const fn u16u32(val: u16) -> u32 {
  val as u32
}

pub(crate) const fn u16u64(val: u16) -> u64 {
  val as u64
}

pub(crate) const fn u32i64(val: u32) -> i64 {
  val as i64
}

pub(crate) const fn u32u64(val: u32) -> u64 {
  val as u64
}

pub(crate) const fn u64i128(val: u64) -> i128 {
  val as i128
}

/// Inner [`CalendarError`] of a failed operation.
#[cfg(test)]
#[track_caller]
pub(crate) fn calendar_error<T>(rslt: crate::Result<T>) -> crate::calendar::CalendarError
where
  T: core::fmt::Debug,
{
  match rslt {
    Err(crate::Error::CalendarError(err)) => err,
    elem => panic!("{elem:?}"),
  }
}
