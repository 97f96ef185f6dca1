/// Automation (activity) routes
pub mod automations;
/// Bot routes
pub mod bots;
/// Credential routes
pub mod credentials;
/// Datapool routes
pub mod datapools;
/// Error report routes
pub mod errors;
/// Log routes
pub mod logs;
/// Result file (artifact) routes
pub mod result_files;
/// Runner routes
pub mod runners;
/// Schedule routes
pub mod schedules;
/// Task routes
pub mod tasks;
/// Module containing common types used by services
mod types;
/// Workspace routes
pub mod workspaces;

pub use automations::AutomationsApi;
pub use bots::BotsApi;
pub use credentials::CredentialsApi;
pub use datapools::DatapoolsApi;
pub use errors::ErrorsApi;
pub use logs::LogsApi;
pub use result_files::ResultFilesApi;
pub use runners::RunnersApi;
pub use schedules::SchedulesApi;
pub use tasks::TasksApi;
pub use types::*;
pub use workspaces::WorkspacesApi;
