pub mod sms_sender;

pub use sms_sender::{SmsError, SmsSender};
