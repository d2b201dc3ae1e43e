pub mod create_session;
pub mod teardown_session;

pub use create_session::CreateSession;
pub use teardown_session::TeardownSession;
