pub mod add;
pub mod greet;

pub use add::AddTool;
pub use greet::GreetTool;
