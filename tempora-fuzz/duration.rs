//! Duration arithmetic

#![no_main]

use tempora::calendar::{DateTime, Duration};

libfuzzer_sys::fuzz_target!(|data: ((i64, i32), (i64, i32), i64)| {
  let ((lhs_secs, lhs_nanos), (rhs_secs, rhs_nanos), timestamp) = data;
  let (Ok(lhs), Ok(rhs)) = (Duration::new(lhs_secs, lhs_nanos), Duration::new(rhs_secs, rhs_nanos))
  else {
    return;
  };
  assert_eq!(lhs.neg().neg(), lhs);
  if let Ok(sum) = lhs.checked_add(rhs) {
    assert_eq!(sum.checked_sub(rhs).ok(), Some(lhs));
  }
  let Ok(date_time) = DateTime::from_unix_timestamp(timestamp, 0) else {
    return;
  };
  if let Ok(shifted) = date_time.add_duration(lhs) {
    assert_eq!(shifted.difference(date_time), lhs);
    assert_eq!(shifted.sub_duration(lhs).ok(), Some(date_time));
  }
});
