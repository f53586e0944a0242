mod dashboard;
mod evidence;
mod login;
mod missions;
mod my_missions;
mod workspace;

pub use dashboard::DashboardView;
pub use evidence::EvidenceView;
pub use login::LoginView;
pub use missions::MissionsView;
pub use my_missions::MyMissionsView;
pub use workspace::WorkspaceView;
