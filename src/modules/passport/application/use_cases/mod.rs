pub mod issue_image_code;
pub mod login_user;
pub mod logout_user;
pub mod register_user;
pub mod send_sms_code;
