pub mod add;
pub mod connect;
pub mod query;

pub use add::AddUserTool;
pub use connect::ConnectDbTool;
pub use query::{QueryUsersByCityTool, QueryUsersTool};
