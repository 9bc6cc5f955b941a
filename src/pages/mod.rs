pub mod contact;
pub mod history;
pub mod home;
pub mod plans;
pub mod profile;
pub mod recharge;

pub use contact::ContactPage;
pub use history::HistoryPage;
pub use home::HomePage;
pub use plans::PlansPage;
pub use profile::ProfilePage;
pub use recharge::RechargePage;
