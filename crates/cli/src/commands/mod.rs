//! CLI Commands

pub mod add_user;
pub mod delete_user;
pub mod export_excel;
pub mod list_users;
pub mod stats;

pub use add_user::AddUserCommand;
pub use delete_user::DeleteUserCommand;
pub use export_excel::ExportExcelCommand;
pub use list_users::ListUsersCommand;
pub use stats::StatsCommand;
