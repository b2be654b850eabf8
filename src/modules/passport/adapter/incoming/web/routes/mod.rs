pub mod image_code;
pub mod login;
pub mod logout;
pub mod register;
pub mod sms_code;

pub use image_code::get_image_code_handler;
pub use login::login_user_handler;
pub use logout::logout_user_handler;
pub use register::register_user_handler;
pub use sms_code::send_sms_code_handler;
