pub mod cloopen_sender;
pub mod mock_sender;

pub use cloopen_sender::CloopenSmsSender;
pub use mock_sender::MockSmsSender;
