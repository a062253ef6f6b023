mod session_notice;

pub use session_notice::SessionExpiredNotice;
